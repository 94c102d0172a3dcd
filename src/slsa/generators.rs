use crate::github::{AnyContext, InterpretedContext};
use crate::in_toto::{self, Item, Statement, Subject, make_digest_set};
use crate::slsa::{
    BuildMetadata, Builder, BuilderEnvironment, Completeness, GITHUB_URI_PREFIX,
    PROVENANCE_PREDICATE_TYPE_V01, Provenance, Recipe, WORKFLOW_RECIPE_TYPE,
};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Index of the source repository in the materials list.
pub const SOURCE_MATERIAL_INDEX: usize = 0;

pub fn make_builder_v01(environment: BuilderEnvironment) -> Builder {
    Builder {
        id: environment.builder_id().to_string(),
    }
}

/// Only the top-level source commit is recorded as a material, never its
/// transitive dependencies, so `materials` completeness is always false.
pub fn make_completeness_v01() -> Completeness {
    Completeness {
        arguments: true,
        environment: true,
        materials: false,
    }
}

pub fn make_build_metadata_v01(invocation_id: &str, finished_on: DateTime<Utc>) -> BuildMetadata {
    BuildMetadata {
        build_invocation_id: invocation_id.to_string(),
        completeness: make_completeness_v01(),
        reproducible: false,
        build_finished_on: finished_on.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

pub fn make_recipe_v01(
    entry_point: &str,
    arguments: Option<Value>,
    environment: AnyContext,
) -> Recipe {
    Recipe {
        recipe_type: WORKFLOW_RECIPE_TYPE.to_string(),
        defined_in_material: SOURCE_MATERIAL_INDEX,
        entry_point: entry_point.to_string(),
        arguments,
        environment,
    }
}

pub fn make_source_material_v01(repository: &str, sha: &str) -> Item {
    Item {
        uri: format!("{GITHUB_URI_PREFIX}{repository}"),
        digest: make_digest_set("sha1", sha),
    }
}

pub fn generate_build_provenance_v01(
    builder: Builder,
    metadata: BuildMetadata,
    recipe: Recipe,
    source: Item,
) -> Provenance {
    Provenance {
        builder,
        metadata,
        recipe,
        materials: vec![source],
    }
}

/// Composes a complete statement from already collected inputs.
///
/// Performs no I/O; `finished_on` becomes `buildFinishedOn`.
pub fn compose_statement(
    subjects: Vec<Subject>,
    context: &InterpretedContext,
    builder_environment: BuilderEnvironment,
    finished_on: DateTime<Utc>,
) -> Statement {
    let github = &context.environment.github;

    let builder = make_builder_v01(builder_environment);
    let metadata = make_build_metadata_v01(&github.run_id, finished_on);
    let recipe = make_recipe_v01(
        &github.workflow,
        context.arguments.clone(),
        context.environment.clone(),
    );
    let source = make_source_material_v01(&github.repository, &github.sha);

    Statement {
        statement_type: in_toto::STATEMENT_TYPE_V01.to_string(),
        subject: subjects,
        predicate_type: PROVENANCE_PREDICATE_TYPE_V01.to_string(),
        predicate: generate_build_provenance_v01(builder, metadata, recipe, source),
    }
}

/// [`compose_statement`] stamped with the current time.
pub fn compose_statement_now(
    subjects: Vec<Subject>,
    context: &InterpretedContext,
    builder_environment: BuilderEnvironment,
) -> Statement {
    compose_statement(subjects, context, builder_environment, Utc::now())
}
