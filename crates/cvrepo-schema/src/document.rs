//! JSON document loading shared by the context and element checks.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Failure to load a JSON document from disk.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Error reading file - {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid JSON syntax - {0}")]
    Syntax(#[from] serde_json::Error),
}

/// Read and parse a UTF-8 JSON file.
pub fn load_json(path: &Path) -> Result<Value, DocumentError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_json_reports_syntax_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ \"id\": ").unwrap();
        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, DocumentError::Syntax(_)));
        assert!(err.to_string().starts_with("Invalid JSON syntax - "));
    }

    #[test]
    fn load_json_reports_missing_files() {
        let err = load_json(Path::new("/tmp/cvrepo-missing-doc.json")).unwrap_err();
        assert!(matches!(err, DocumentError::Read(_)));
    }
}
