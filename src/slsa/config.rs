use crate::error::{Error, Result};
use crate::slsa::BuilderEnvironment;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "build.provenance";

/// Everything one provenance generation run needs, built once by the caller.
#[derive(Debug, Clone)]
pub struct ProvenanceConfig {
    /// File or directory holding the artifacts to attest.
    pub artifact_path: PathBuf,
    pub output_path: PathBuf,
    /// The `${{ github }}` context as JSON text.
    pub github_context: String,
    /// The `${{ runner }}` context as JSON text.
    pub runner_context: String,
    pub builder_environment: BuilderEnvironment,
    /// Also print the rendered statement to stdout.
    pub print: bool,
}

impl ProvenanceConfig {
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("--artifact_path", self.artifact_path.as_os_str().is_empty()),
            ("--output_path", self.output_path.as_os_str().is_empty()),
            ("--github_context", self.github_context.trim().is_empty()),
            ("--runner_context", self.runner_context.trim().is_empty()),
        ];

        for (flag, missing) in required {
            if missing {
                return Err(Error::Validation(format!(
                    "No value found for required flag: {flag}"
                )));
            }
        }

        Ok(())
    }
}
