use clap::Args;
use clap::builder::NonEmptyStringValueParser;
use std::path::PathBuf;

use crate::slsa::config::DEFAULT_OUTPUT_PATH;

fn non_empty_path(value: &str) -> Result<PathBuf, String> {
    if value.is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(PathBuf::from(value))
    }
}

#[derive(Debug, Args)]
pub struct ProvenanceArgs {
    /// The file or dir path of the artifacts for which provenance should be generated
    #[arg(
        long = "artifact_path",
        visible_alias = "artifact-path",
        value_parser = non_empty_path
    )]
    pub artifact_path: PathBuf,

    /// The path to which the generated provenance should be written
    #[arg(
        long = "output_path",
        visible_alias = "output-path",
        default_value = DEFAULT_OUTPUT_PATH,
        value_parser = non_empty_path
    )]
    pub output_path: PathBuf,

    /// The '${{ github }}' context value, as JSON
    #[arg(
        long = "github_context",
        visible_alias = "github-context",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub github_context: String,

    /// The '${{ runner }}' context value, as JSON
    #[arg(
        long = "runner_context",
        visible_alias = "runner-context",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub runner_context: String,

    /// Also print the generated provenance to stdout
    #[arg(long = "print")]
    pub print: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ProvenanceArgs,
    }

    #[test]
    fn test_parse_underscore_flags() {
        let cli = TestCli::try_parse_from([
            "actions-provenance",
            "--artifact_path",
            "dist",
            "--github_context",
            "{}",
            "--runner_context",
            "{}",
        ])
        .unwrap();

        assert_eq!(cli.args.artifact_path, PathBuf::from("dist"));
        assert_eq!(cli.args.output_path, PathBuf::from("build.provenance"));
        assert!(!cli.args.print);
    }

    #[test]
    fn test_parse_kebab_aliases() {
        let cli = TestCli::try_parse_from([
            "actions-provenance",
            "--artifact-path=out/app",
            "--output-path=att.json",
            "--github-context={}",
            "--runner-context={}",
            "--print",
        ])
        .unwrap();

        assert_eq!(cli.args.output_path, PathBuf::from("att.json"));
        assert!(cli.args.print);
    }

    #[test]
    fn test_missing_required_flag_is_rejected() {
        let result = TestCli::try_parse_from([
            "actions-provenance",
            "--artifact_path",
            "dist",
            "--github_context",
            "{}",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_value_is_rejected() {
        let result = TestCli::try_parse_from([
            "actions-provenance",
            "--artifact_path=",
            "--github_context={}",
            "--runner_context={}",
        ]);
        assert!(result.is_err());
    }
}
