pub mod commands;
pub mod handlers;
use crate::error::Error;

pub use commands::ProvenanceArgs;
pub use handlers::handle_provenance_command;

pub fn format_error(error: &Error) -> String {
    match error {
        Error::Io(err) => format!("IO error: {err}"),
        Error::Walk(err) => format!("Failed to read artifacts: {err}"),
        Error::NotFound(path) => {
            format!("Resource path not found: [provided={}]", path.display())
        }
        Error::Context(msg) => format!("Context error: {msg}"),
        Error::Validation(msg) => format!("Validation error: {msg}"),
        Error::Serialization(msg) => format!("Serialization error: {msg}"),
        Error::InitializationError(msg) => format!("Initialization error: {msg}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_not_found_names_path() {
        let msg = format_error(&Error::NotFound(PathBuf::from("dist/missing")));
        assert_eq!(msg, "Resource path not found: [provided=dist/missing]");
    }

    #[test]
    fn test_format_context_error() {
        let msg = format_error(&Error::Context("bad json".to_string()));
        assert_eq!(msg, "Context error: bad json");
    }
}
