use crate::error::{Error, Result};
use crate::github::{self, AccessToken};
use crate::in_toto::{self, Statement};
use crate::slsa::config::ProvenanceConfig;
use crate::slsa::generators;
use crate::utils::safe_create_file;

use log::{debug, info};
use std::io::Write;

/// Hashes the artifacts, interprets the contexts and composes the statement.
///
/// Returns the statement together with the access token that was scrubbed
/// from it.
pub fn build_statement(config: &ProvenanceConfig) -> Result<(Statement, AccessToken)> {
    config.validate()?;

    let subjects = in_toto::collect_subjects(&config.artifact_path)?;
    info!(
        "hashed {} artifact(s) under {}",
        subjects.len(),
        config.artifact_path.display()
    );

    let context = github::interpret(&config.github_context, &config.runner_context)?;
    if context.token.is_empty() {
        debug!("no access token in github context");
    } else {
        debug!(
            "access token present ({} bytes), removed from provenance",
            context.token.len()
        );
    }

    let statement =
        generators::compose_statement_now(subjects, &context, config.builder_environment);
    info!("builder: {}", statement.predicate.builder.id);

    Ok((statement, context.token))
}

/// Tokens shorter than this are not searched for in the rendered output.
///
/// GitHub-issued tokens are 40 characters; a short value such as a run id or
/// an OS name would match unrelated fields.
pub const MIN_SEARCHED_TOKEN_LEN: usize = 16;

/// Serializes `statement`, refusing output that still carries the token.
///
/// The token field itself is always cleared before composition. In addition
/// the rendered bytes are searched for the token value, so a token echoed
/// elsewhere (e.g. inside the event payload) fails the run. The search is a
/// plain substring match and is skipped for tokens shorter than
/// [`MIN_SEARCHED_TOKEN_LEN`].
pub fn render_statement(statement: &Statement, token: &AccessToken) -> Result<Vec<u8>> {
    let rendered = in_toto::serialize_statement(statement)?;
    ensure_token_absent(&rendered, token)?;
    Ok(rendered)
}

fn ensure_token_absent(rendered: &[u8], token: &AccessToken) -> Result<()> {
    let needle = token.expose().as_bytes();
    if needle.len() < MIN_SEARCHED_TOKEN_LEN {
        if !needle.is_empty() {
            debug!(
                "access token shorter than {MIN_SEARCHED_TOKEN_LEN} bytes, skipping output search"
            );
        }
        return Ok(());
    }

    if rendered.windows(needle.len()).any(|w| w == needle) {
        return Err(Error::Validation(
            "Rendered provenance contains the access token; refusing to write it".to_string(),
        ));
    }

    Ok(())
}

/// Generates the provenance statement described by `config` and writes it to
/// `config.output_path`, replacing any existing file.
pub fn generate_build_provenance(config: &ProvenanceConfig) -> Result<()> {
    let (statement, token) = build_statement(config)?;
    let rendered = render_statement(&statement, &token)?;

    if config.print {
        println!("{}", String::from_utf8_lossy(&rendered));
    }

    let mut file = safe_create_file(&config.output_path, false)?;
    file.write_all(&rendered)?;
    file.flush()?;
    info!("provenance written to {}", config.output_path.display());

    Ok(())
}
