//! XML utility functions for loading documents and inspecting DOM nodes.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node, NodeType, ParsingOptions};

use crate::error::{InfoError, Result};

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xmlinfo::xml::get_tag_name;
///
/// let xml = r#"<ns:root xmlns:ns="http://example.com"><ns:item/></ns:root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let item = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(item), "item");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get an attribute value from a node.
///
/// Returns `None` for non-element nodes and for missing attributes.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Human readable name of a DOM node type, used in diagnostics.
pub fn describe_node_type(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Root => "root",
        NodeType::Element => "element",
        NodeType::PI => "processing instruction",
        NodeType::Comment => "comment",
        NodeType::Text => "text",
    }
}

/// Parse XML text into a DOM document.
///
/// Documents with a DOCTYPE declaration are accepted; entities declared in
/// an internal subset are expanded.
///
/// # Errors
/// Returns `XmlParse` if the input is not well-formed XML.
pub fn parse_document(xml: &str) -> Result<Document<'_>> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    Ok(Document::parse_with_options(xml, options)?)
}

/// Read an XML file into memory, refusing files larger than `max_size` bytes.
///
/// The returned string is meant to be handed to [`parse_document`]; the
/// parsed document borrows from it.
///
/// # Errors
/// Returns `FileTooLarge` if the file exceeds `max_size`, or `Io` if it
/// cannot be read.
pub fn read_document(path: &Path, max_size: u64) -> Result<String> {
    let size = fs::metadata(path)?.len();
    if size > max_size {
        return Err(InfoError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_size,
        });
    }

    tracing::debug!(path = %path.display(), size, "Reading XML document");
    Ok(fs::read_to_string(path)?)
}
