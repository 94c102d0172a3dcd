//! # in-toto Statement Model
//!
//! This module defines the in-toto v0.1 statement that wraps the provenance
//! predicate, the subject and material descriptors it refers to, and the JSON
//! rendering of a finished statement.
//!
//! ## Key Components
//!
//! - **Subjects**: artifacts being attested, identified by name and SHA-256
//!   digest (see [`subject::collect_subjects`])
//! - **Items**: material references, identified by URI and digest
//! - **Serialization**: [`serialize_statement`] and [`parse_statement`]
//!
//! ## Examples
//!
//! ```
//! use actions_provenance::in_toto::{make_digest_set, Subject};
//!
//! let subject = Subject {
//!     name: "app.tar.gz".to_string(),
//!     digest: make_digest_set("sha256", &"0".repeat(64)),
//! };
//! assert_eq!(subject.digest["sha256"].len(), 64);
//! ```

use crate::error::{Error, Result};
use crate::slsa::Provenance;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod subject;

pub use subject::collect_subjects;

/// in-toto statement type URI.
pub const STATEMENT_TYPE_V01: &str = "https://in-toto.io/statement/v0.1";

/// Mapping from digest algorithm name to lowercase hex digest.
pub type DigestSet = BTreeMap<String, String>;

/// A statement binding a set of subjects to a provenance predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    #[serde(rename = "_type")]
    pub statement_type: String,
    pub subject: Vec<Subject>,
    #[serde(rename = "predicateType")]
    pub predicate_type: String,
    pub predicate: Provenance,
}

/// An artifact being attested to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Path relative to the artifact root.
    pub name: String,
    pub digest: DigestSet,
}

/// A material reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub uri: String,
    pub digest: DigestSet,
}

/// Build a digest set holding a single algorithm/value pair.
pub fn make_digest_set(alg: &str, digest: &str) -> DigestSet {
    BTreeMap::from([(alg.to_string(), digest.to_string())])
}

/// Renders a statement as indented JSON.
///
/// Fields are emitted in declaration order so that successive runs diff
/// cleanly.
pub fn serialize_statement(statement: &Statement) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(statement).map_err(|e| {
        Error::Serialization(format!("Failed to serialize in-toto statement: {e}"))
    })
}

/// Parses a statement previously rendered by [`serialize_statement`].
pub fn parse_statement(bytes: &[u8]) -> Result<Statement> {
    serde_json::from_slice(bytes)
        .map_err(|e| Error::Serialization(format!("Failed to parse in-toto statement: {e}")))
}
