//! Non-fatal conditions recorded while building a tree.

use thiserror::Error;

/// Content that was skipped during child discovery.
///
/// The tree stays usable; the content is simply absent from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// No kind was provided to wrap an element.
    #[error("No object provided to wrap element <{tag}> under {path}")]
    UnknownElement { tag: String, path: String },

    /// No kind was provided to wrap a text run.
    #[error("No object provided to wrap text '{}' under {path}", .text.trim())]
    UnknownText { text: String, path: String },

    /// A DOM node that is neither element nor text (comment, processing instruction).
    #[error("Don't know how to handle XML {kind} node under {path}")]
    UnhandledNode { kind: &'static str, path: String },
}

impl Diagnostic {
    /// String path of the node whose child was skipped.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::UnknownElement { path, .. }
            | Self::UnknownText { path, .. }
            | Self::UnhandledNode { path, .. } => path,
        }
    }
}
