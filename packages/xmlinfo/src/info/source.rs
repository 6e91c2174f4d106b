//! The DOM fragment an info node is bound to.

use std::fmt;

use roxmltree::Node;

use crate::config::TEXT_PATH_SEGMENT;
use crate::error::{InfoError, Result};
use crate::xml::get_tag_name;

/// Either one DOM element or one coalesced run of text.
///
/// Trees refuse an `Element` source holding a node that is not an element;
/// [`InfoSource::from_parts`] checks this up front.
#[derive(Debug, Clone)]
pub enum InfoSource<'a, 'input> {
    /// A DOM element. Must be an element node.
    Element(Node<'a, 'input>),
    /// Concatenated character data of adjacent text nodes.
    Text(String),
}

impl<'a, 'input> InfoSource<'a, 'input> {
    /// Build a source from optional parts, requiring exactly one of them.
    ///
    /// # Errors
    /// Returns `InvalidSource` when both or neither are given, or when the
    /// node is not an element.
    pub fn from_parts(element: Option<Node<'a, 'input>>, text: Option<String>) -> Result<Self> {
        let source = match (element, text) {
            (Some(node), None) => Self::Element(node),
            (None, Some(text)) => Self::Text(text),
            (Some(_), Some(_)) => return Err(InfoError::InvalidSource("both")),
            (None, None) => return Err(InfoError::InvalidSource("neither")),
        };
        source.validate()?;
        Ok(source)
    }

    /// Check that an `Element` source really wraps an element node.
    ///
    /// # Errors
    /// Returns `InvalidSource` for text, comment or other non-element nodes.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Element(node) if !node.is_element() => {
                Err(InfoError::InvalidSource("a non-element node"))
            }
            _ => Ok(()),
        }
    }

    /// Whether this source is a DOM element.
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Whether this source is a text run.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The bound element, if any.
    #[must_use]
    pub fn element(&self) -> Option<Node<'a, 'input>> {
        match self {
            Self::Element(node) => Some(*node),
            Self::Text(_) => None,
        }
    }

    /// The bound text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Tag name of the bound element, without namespace.
    #[must_use]
    pub fn tag_name(&self) -> Option<&'a str> {
        self.element().map(get_tag_name)
    }
}

/// Renders as one segment of a string path: `<tag>` or `text`.
impl fmt::Display for InfoSource<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(node) => write!(f, "<{}>", get_tag_name(*node)),
            Self::Text(_) => f.write_str(TEXT_PATH_SEGMENT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_from_parts_element() {
        let doc = Document::parse("<item/>").unwrap();
        let source = InfoSource::from_parts(Some(doc.root_element()), None).unwrap();
        assert!(source.is_element());
        assert_eq!(source.tag_name(), Some("item"));
        assert_eq!(source.text(), None);
        assert_eq!(source.to_string(), "<item>");
    }

    #[test]
    fn test_from_parts_text() {
        let source = InfoSource::from_parts(None, Some("hello".to_string())).unwrap();
        assert!(source.is_text());
        assert_eq!(source.text(), Some("hello"));
        assert!(source.element().is_none());
        assert_eq!(source.to_string(), "text");
    }

    #[test]
    fn test_from_parts_rejects_both_and_neither() {
        let doc = Document::parse("<item/>").unwrap();
        let both = InfoSource::from_parts(Some(doc.root_element()), Some("x".to_string()));
        assert!(matches!(both, Err(InfoError::InvalidSource("both"))));

        let neither = InfoSource::from_parts(None, None);
        assert!(matches!(neither, Err(InfoError::InvalidSource("neither"))));
    }

    #[test]
    fn test_from_parts_rejects_non_element_node() {
        let doc = Document::parse("<item>text</item>").unwrap();
        let text_node = doc.root_element().first_child().unwrap();
        let result = InfoSource::from_parts(Some(text_node), None);
        assert!(matches!(result, Err(InfoError::InvalidSource(_))));

        let direct = InfoSource::Element(text_node);
        assert!(direct.validate().is_err());
        assert!(InfoSource::Text("x".to_string()).validate().is_ok());
    }
}
