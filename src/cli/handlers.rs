use crate::error::Result;

use super::commands::ProvenanceArgs;
use crate::slsa;
use crate::slsa::BuilderEnvironment;
use crate::slsa::config::ProvenanceConfig;

pub fn build_config(
    args: ProvenanceArgs,
    builder_environment: BuilderEnvironment,
) -> ProvenanceConfig {
    ProvenanceConfig {
        artifact_path: args.artifact_path,
        output_path: args.output_path,
        github_context: args.github_context,
        runner_context: args.runner_context,
        builder_environment,
        print: args.print,
    }
}

pub fn handle_provenance_command(args: ProvenanceArgs) -> Result<()> {
    let config = build_config(args, BuilderEnvironment::from_env());
    slsa::cli::generate_build_provenance(&config)
}
