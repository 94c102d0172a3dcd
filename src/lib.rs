//! # actions-provenance
//!
//! Build provenance for GitHub Actions.
//!
//! Produces an in-toto statement carrying a SLSA v0.1 provenance predicate for
//! the artifacts of a workflow run: which workflow built them, from which
//! commit, with which dispatch inputs, and on which class of runner. The
//! statement is not signed; it is meant to be handed to a signer.
//!
//! ## Usage
//!
//! ```yaml
//! - run: |
//!     actions-provenance \
//!       --artifact_path=dist \
//!       --output_path=build.provenance \
//!       --github_context='${{ toJSON(github) }}' \
//!       --runner_context='${{ toJSON(runner) }}'
//! ```
//!
//! ## Pipeline
//!
//! 1. [`in_toto::collect_subjects`] hashes every artifact file
//! 2. [`github::interpret`] parses the run contexts and scrubs the token
//! 3. [`slsa::generators::compose_statement`] assembles the statement
//! 4. [`in_toto::serialize_statement`] renders it as indented JSON

pub mod cli;
pub mod error;
pub mod github;
pub mod hash;
pub mod in_toto;
pub mod slsa;
#[cfg(test)]
mod tests;
pub mod utils;

// Re-export error types
pub use error::{Error, Result};

/// Initialize logging for the CLI
///
/// Verbosity follows `RUST_LOG`.
///
/// # Examples
///
/// ```
/// use actions_provenance::init_logging;
///
/// let result = init_logging();
/// // Note: This might fail if already initialized
/// assert!(result.is_ok() || result.is_err());
/// ```
pub fn init_logging() -> Result<()> {
    env_logger::try_init().map_err(|e| Error::InitializationError(e.to_string()))
}
