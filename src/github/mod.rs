//! # GitHub Actions Context
//!
//! Typed views of the `${{ github }}` and `${{ runner }}` contexts a workflow
//! passes to the provenance generator, and the extraction of the single
//! user-supplied input a run may carry.
//!
//! The two contexts are parsed independently and kept side by side in
//! [`AnyContext`], which is embedded verbatim as the recipe environment once
//! the access token has been taken out of it.
//!
//! ## Examples
//!
//! ```
//! use actions_provenance::github::interpret;
//!
//! let github = r#"{"repository": "octo/app", "sha": "abc", "token": "ghs_x",
//!                  "event": {"input": {"level": "debug"}}}"#;
//! let runner = r#"{"os": "Linux"}"#;
//!
//! let ctx = interpret(github, runner).unwrap();
//! assert!(ctx.environment.github.token.is_empty());
//! assert_eq!(ctx.token.expose(), "ghs_x");
//! assert_eq!(ctx.arguments.unwrap()["level"], "debug");
//! ```

use crate::error::{Error, Result};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnNull, serde_as};
use std::fmt;
use zeroize::Zeroizing;

/// The `${{ github }}` context.
///
/// Fields absent from the supplied JSON, or set to `null`, default to empty;
/// fields not listed here are dropped.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubContext {
    #[serde_as(as = "DefaultOnNull")]
    pub action: String,
    #[serde_as(as = "DefaultOnNull")]
    pub action_path: String,
    #[serde_as(as = "DefaultOnNull")]
    pub actor: String,
    #[serde_as(as = "DefaultOnNull")]
    pub base_ref: String,
    /// Full webhook payload of the triggering event.
    pub event: Value,
    #[serde_as(as = "DefaultOnNull")]
    pub event_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub event_path: String,
    #[serde_as(as = "DefaultOnNull")]
    pub head_ref: String,
    #[serde_as(as = "DefaultOnNull")]
    pub job: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde_as(as = "DefaultOnNull")]
    pub repository: String,
    #[serde_as(as = "DefaultOnNull")]
    pub repository_owner: String,
    #[serde_as(as = "DefaultOnNull")]
    pub run_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub run_number: String,
    #[serde_as(as = "DefaultOnNull")]
    pub sha: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
    #[serde_as(as = "DefaultOnNull")]
    pub workflow: String,
    #[serde_as(as = "DefaultOnNull")]
    pub workspace: String,
}

/// The `${{ runner }}` context.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerContext {
    #[serde_as(as = "DefaultOnNull")]
    pub os: String,
    #[serde_as(as = "DefaultOnNull")]
    pub temp: String,
    #[serde_as(as = "DefaultOnNull")]
    pub tool_cache: String,
}

/// Both contexts, under disjoint keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnyContext {
    pub github: GitHubContext,
    pub runner: RunnerContext,
}

/// The part of an event payload that carries dynamic user input.
///
/// `workflow_dispatch` is the only event whose payload exposes user-provided
/// parameters, at the key `input`.
#[derive(Debug, Deserialize)]
struct AnyEvent {
    #[serde(default)]
    input: Option<Value>,
}

/// An access token lifted out of the github context.
///
/// The backing memory is wiped on drop and `Debug` never prints the value.
#[derive(Clone)]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(Zeroizing::new(token))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for AccessToken {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("AccessToken(<empty>)")
        } else {
            f.write_str("AccessToken(<redacted>)")
        }
    }
}

/// Output of [`interpret`].
#[derive(Debug, Clone)]
pub struct InterpretedContext {
    /// Contexts with the token cleared, safe to embed in a statement.
    pub environment: AnyContext,
    /// Raw `input` of the triggering event, if any.
    pub arguments: Option<Value>,
    pub token: AccessToken,
}

pub fn parse_github_context(json: &str) -> Result<GitHubContext> {
    serde_json::from_str(json)
        .map_err(|e| Error::Context(format!("Failed to parse github context: {e}")))
}

pub fn parse_runner_context(json: &str) -> Result<RunnerContext> {
    serde_json::from_str(json)
        .map_err(|e| Error::Context(format!("Failed to parse runner context: {e}")))
}

impl AnyContext {
    /// Parses each context on its own and composes the result.
    pub fn from_json(github_context: &str, runner_context: &str) -> Result<Self> {
        Ok(Self {
            github: parse_github_context(github_context)?,
            runner: parse_runner_context(runner_context)?,
        })
    }

    /// Moves the access token out, leaving the field empty.
    pub fn take_token(&mut self) -> AccessToken {
        AccessToken::new(std::mem::take(&mut self.github.token))
    }
}

/// Extracts the user input from a raw event payload.
///
/// A missing or null event, or an event without `input`, yields `None`.
/// An event that is not a JSON object is malformed.
pub fn extract_event_input(event: &Value) -> Result<Option<Value>> {
    if event.is_null() {
        return Ok(None);
    }

    let event: AnyEvent = AnyEvent::deserialize(event)
        .map_err(|e| Error::Context(format!("Failed to parse event payload: {e}")))?;

    Ok(event.input.filter(|input| !input.is_null()))
}

/// Parses both contexts, extracts the event input and scrubs the token.
pub fn interpret(github_context: &str, runner_context: &str) -> Result<InterpretedContext> {
    let mut environment = AnyContext::from_json(github_context, runner_context)?;
    let arguments = extract_event_input(&environment.github.event)?;
    let token = environment.take_token();

    debug!(
        "interpreted context for {} run {} (event: {}, token present: {})",
        environment.github.repository,
        environment.github.run_id,
        environment.github.event_name,
        !token.is_empty()
    );

    Ok(InterpretedContext {
        environment,
        arguments,
        token,
    })
}
