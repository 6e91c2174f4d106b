//! Error types for building and querying info trees.
//!
//! `InfoError` covers contract violations and I/O failures that abort the
//! operation. Structural surprises in the document itself are not errors;
//! they are recorded as [`crate::info::Diagnostic`]s on the built tree.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the xmlinfo library.
#[derive(Debug, Error)]
pub enum InfoError {
    /// An info source was given neither an element nor text, or both.
    #[error("Specify exactly one of xml element or xml text (got {0})")]
    InvalidSource(&'static str),

    /// A required named child does not exist.
    #[error("{kind} ({path}) does not have a child info object named '{name}'")]
    MissingChild {
        kind: String,
        path: String,
        name: String,
    },

    /// A required attribute is absent (or the node is not an element).
    #[error("Xml Element {path} is missing a required attribute '{attribute}'")]
    MissingAttribute { path: String, attribute: String },

    /// Two siblings share the same info name.
    #[error("Two elements have used name '{name}' in {path}")]
    DuplicateName { name: String, path: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Input file exceeds the configured size limit.
    #[error("File {} is {size} bytes, exceeding the limit of {limit} bytes", .path.display())]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for xmlinfo operations.
pub type Result<T> = std::result::Result<T, InfoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_child_display() {
        let err = InfoError::MissingChild {
            kind: "Section".to_string(),
            path: "<root>.<section>".to_string(),
            name: "missing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Section (<root>.<section>) does not have a child info object named 'missing'"
        );
    }

    #[test]
    fn test_missing_attribute_display() {
        let err = InfoError::MissingAttribute {
            path: "<root>.<item>".to_string(),
            attribute: "x".to_string(),
        };
        assert!(err.to_string().contains("<root>.<item>"));
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_duplicate_name_display() {
        let err = InfoError::DuplicateName {
            name: "intro".to_string(),
            path: "<doc>".to_string(),
        };
        assert_eq!(err.to_string(), "Two elements have used name 'intro' in <doc>");
    }

    #[test]
    fn test_file_too_large_display() {
        let err = InfoError::FileTooLarge {
            path: PathBuf::from("big.xml"),
            size: 20,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "File big.xml is 20 bytes, exceeding the limit of 10 bytes"
        );
    }
}
