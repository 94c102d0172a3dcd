use crate::error::{Error, Result};
use crate::slsa::BuilderEnvironment;
use crate::slsa::config::ProvenanceConfig;
use std::fs;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

pub const TEST_TOKEN: &str = "ghs_0123456789abcdefTESTTOKEN";
pub const TEST_SHA: &str = "b1946ac92492d2347c6235b4d2611184b1946ac9";

/// A `${{ github }}` context as a workflow_dispatch run would supply it.
pub fn github_context_json(event: &str) -> String {
    format!(
        r#"{{
  "action": "__run_2",
  "action_path": "",
  "actor": "octocat",
  "base_ref": "",
  "event": {event},
  "event_name": "workflow_dispatch",
  "event_path": "/home/runner/work/_temp/_github_workflow/event.json",
  "head_ref": "",
  "job": "build",
  "ref": "refs/heads/main",
  "repository": "octo-org/widget",
  "repository_owner": "octo-org",
  "run_id": "4242424242",
  "run_number": "17",
  "sha": "{TEST_SHA}",
  "token": "{TEST_TOKEN}",
  "workflow": "Release",
  "workspace": "/home/runner/work/widget/widget",
  "api_url": "https://api.github.com"
}}"#
    )
}

pub fn runner_context_json() -> String {
    r#"{"os": "Linux", "temp": "/home/runner/work/_temp", "tool_cache": "/opt/hostedtoolcache", "arch": "X64"}"#
        .to_string()
}

/// Lays out a small artifact tree under a fresh temp dir.
pub fn artifact_tree() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let root = dir.path();
    fs::create_dir_all(root.join("bin"))?;
    fs::write(root.join("bin/widget"), b"\x7fELF fake binary")?;
    fs::write(root.join("README.txt"), b"widget release")?;
    fs::write(root.join("checksums.txt"), b"widget release")?;
    Ok(dir)
}

pub fn test_config(artifacts: &Path, output: &Path, event: &str) -> ProvenanceConfig {
    ProvenanceConfig {
        artifact_path: artifacts.to_path_buf(),
        output_path: output.to_path_buf(),
        github_context: github_context_json(event),
        runner_context: runner_context_json(),
        builder_environment: BuilderEnvironment::GitHubHosted,
        print: false,
    }
}

/// Reads a written statement as untyped JSON.
pub fn read_json(path: &Path) -> Result<Value> {
    serde_json::from_slice(&fs::read(path)?).map_err(|e| Error::Serialization(e.to_string()))
}
