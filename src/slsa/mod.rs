//! # SLSA Provenance (v0.1)
//!
//! This module provides the SLSA v0.1 provenance predicate produced for a
//! GitHub Actions workflow run, and the functions that compose it into an
//! in-toto statement.
//!
//! ## Overview
//!
//! The predicate records:
//! - Who built the artifacts (a coarse builder identity: GitHub-hosted or
//!   self-hosted runner)
//! - How they were built (the workflow, its dispatch input and the full run
//!   context)
//! - From what (the source repository at the triggering commit)
//! - When the build finished
//!
//! ## Key Components
//!
//! - [`generators`] - Pure functions composing predicates and statements
//! - [`config`] - The configuration value handed to the generator
//! - [`cli`] - End-to-end generation: hash, interpret, compose, write
//! - [`BuilderEnvironment`] - Hosted vs. self-hosted builder selection
//!
//! ## Examples
//!
//! ```no_run
//! use actions_provenance::slsa::{cli::generate_build_provenance, config::ProvenanceConfig};
//! use actions_provenance::slsa::BuilderEnvironment;
//! use std::path::PathBuf;
//!
//! let config = ProvenanceConfig {
//!     artifact_path: PathBuf::from("dist"),
//!     output_path: PathBuf::from("build.provenance"),
//!     github_context: std::env::var("GITHUB_CONTEXT").unwrap(),
//!     runner_context: std::env::var("RUNNER_CONTEXT").unwrap(),
//!     builder_environment: BuilderEnvironment::from_env(),
//!     print: false,
//! };
//! generate_build_provenance(&config).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod generators;

use crate::github::AnyContext;
use crate::in_toto::Item;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Provenance predicate type URI.
///
/// This is the in-toto-hosted identifier of the v0.1 provenance predicate,
/// which existing verifiers of GitHub Actions provenance pin.
///
/// ```
/// use actions_provenance::slsa::PROVENANCE_PREDICATE_TYPE_V01;
///
/// assert_eq!(PROVENANCE_PREDICATE_TYPE_V01, "https://in-toto.io/provenance/v0.1");
/// ```
pub const PROVENANCE_PREDICATE_TYPE_V01: &str = "https://in-toto.io/provenance/v0.1";

pub const GITHUB_HOSTED_BUILDER_ID: &str = "https://github.com/Attestations/GitHubHostedActions@v1";
pub const SELF_HOSTED_BUILDER_ID: &str = "https://github.com/Attestations/SelfHostedActions@v1";

/// Recipe type for a GitHub Actions workflow.
pub const WORKFLOW_RECIPE_TYPE: &str = "https://github.com/Attestations/GitHubActionsWorkflow@v1";

/// Prefix turning an `owner/name` repository slug into a material URI.
pub const GITHUB_URI_PREFIX: &str = "https://github.com/";

/// Environment variable GitHub sets to `true` on its runners.
pub const GITHUB_ACTIONS_ENV: &str = "GITHUB_ACTIONS";

/// Class of runner the workflow executed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderEnvironment {
    GitHubHosted,
    SelfHosted,
}

impl BuilderEnvironment {
    /// Reads [`GITHUB_ACTIONS_ENV`] from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(GITHUB_ACTIONS_ENV).ok().as_deref())
    }

    /// Only the exact value `true` selects the hosted builder.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("true") => BuilderEnvironment::GitHubHosted,
            _ => BuilderEnvironment::SelfHosted,
        }
    }

    pub fn builder_id(&self) -> &'static str {
        match self {
            BuilderEnvironment::GitHubHosted => GITHUB_HOSTED_BUILDER_ID,
            BuilderEnvironment::SelfHosted => SELF_HOSTED_BUILDER_ID,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub builder: Builder,
    pub metadata: BuildMetadata,
    pub recipe: Recipe,
    pub materials: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Builder {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildMetadata {
    /// The workflow run id. Re-runs of a run reuse it, so it does not
    /// uniquely identify an invocation.
    pub build_invocation_id: String,
    pub completeness: Completeness,
    pub reproducible: bool,
    // buildStartedOn is not exposed to a workflow step
    pub build_finished_on: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completeness {
    pub arguments: bool,
    pub environment: bool,
    pub materials: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "type")]
    pub recipe_type: String,
    pub defined_in_material: usize,
    pub entry_point: String,
    /// Raw dispatch input; serialized as `null` when the event had none.
    pub arguments: Option<Value>,
    pub environment: AnyContext,
}
