//! Node kind trait definition.

use std::borrow::Cow;

use roxmltree::Node;

use super::source::InfoSource;

/// Outcome of asking a node which kind should wrap one of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<K> {
    /// Wrap the child in a node of this kind.
    Wrap(K),
    /// Recognized, but intentionally left out of the tree.
    Ignore,
    /// No kind wants this child. Reported as a diagnostic and skipped.
    Unrecognized,
}

impl<K> Classification<K> {
    /// Whether this outcome produces a child node.
    #[must_use]
    pub fn is_wrap(&self) -> bool {
        matches!(self, Self::Wrap(_))
    }
}

impl<K> From<Option<K>> for Classification<K> {
    fn from(kind: Option<K>) -> Self {
        kind.map_or(Self::Unrecognized, Self::Wrap)
    }
}

/// Trait for info node kinds.
///
/// The tree builder walks each element's children and asks the kind of the
/// enclosing node how to wrap every child element and text run. A document
/// is thereby interpreted by different rule sets in different regions: the
/// rules for a subtree belong to whichever kind owns its root.
///
/// Kinds are usually an enum with one variant per wrapper type:
///
/// ```
/// use roxmltree::{Document, Node};
/// use xmlinfo::{Classification, InfoKind, InfoTree};
///
/// enum Recipe {
///     Root,
///     Step,
///     Text,
/// }
///
/// impl InfoKind for Recipe {
///     fn classify_element(&self, tag: &str, _element: Node<'_, '_>) -> Classification<Self> {
///         match (self, tag) {
///             (Recipe::Root, "step") => Classification::Wrap(Recipe::Step),
///             (Recipe::Root, "note") => Classification::Ignore,
///             _ => Classification::Unrecognized,
///         }
///     }
///
///     fn classify_text(&self, text: &str) -> Classification<Self> {
///         match self {
///             Recipe::Step => Classification::Wrap(Recipe::Text),
///             _ if text.trim().is_empty() => Classification::Ignore,
///             _ => Classification::Unrecognized,
///         }
///     }
/// }
///
/// let doc = Document::parse("<recipe><step>Boil</step><note/></recipe>").unwrap();
/// let tree = InfoTree::build(Recipe::Root, doc.root_element()).unwrap();
/// let step = tree.root().children()[0];
/// assert_eq!(step.str_path(), "<recipe>.<step>");
/// assert_eq!(step.children()[0].text(), Some("Boil"));
/// ```
pub trait InfoKind: Sized {
    /// Choose the kind that wraps a child element with the given tag.
    ///
    /// Default implementation recognizes nothing.
    fn classify_element(&self, _tag: &str, _element: Node<'_, '_>) -> Classification<Self> {
        Classification::Unrecognized
    }

    /// Choose the kind that wraps a run of text found directly in this node.
    ///
    /// Adjacent text fragments are concatenated before this is called.
    /// Default implementation recognizes nothing.
    fn classify_text(&self, _text: &str) -> Classification<Self> {
        Classification::Unrecognized
    }

    /// Optional name identifying this node amongst its siblings.
    fn info_name(&self, _source: &InfoSource<'_, '_>) -> Option<String> {
        None
    }

    /// Optional identifier locating this node within the whole document.
    fn info_path(&self, _source: &InfoSource<'_, '_>) -> Option<String> {
        None
    }

    /// Name of the kind used in error messages.
    fn kind_name(&self) -> Cow<'static, str> {
        // `a::b::Gen<c::D>` names the kind `Gen`
        let full = std::any::type_name::<Self>();
        let path = full.split('<').next().unwrap_or(full);
        Cow::Borrowed(path.rsplit("::").next().unwrap_or(path))
    }
}
