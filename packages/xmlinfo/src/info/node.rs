//! Borrowed handles to nodes of a built tree and the query API.

use std::fmt;

use roxmltree::Node;

use super::kind::InfoKind;
use super::source::InfoSource;
use super::tree::{InfoNode, InfoTree, NodeId};
use crate::error::{InfoError, Result};
use crate::xml::get_attribute;

/// A handle to one node of an [`InfoTree`].
///
/// Handles are cheap to copy and borrow the tree; navigating through them
/// never mutates it.
pub struct InfoRef<'t, 'a, 'input, K> {
    tree: &'t InfoTree<'a, 'input, K>,
    id: NodeId,
}

impl<'t, 'a, 'input, K> InfoRef<'t, 'a, 'input, K> {
    pub(crate) fn new(tree: &'t InfoTree<'a, 'input, K>, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'t InfoNode<'a, 'input, K> {
        self.tree.node(self.id)
    }

    /// Id of this node within its tree.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The tree this node belongs to.
    #[must_use]
    pub fn tree(&self) -> &'t InfoTree<'a, 'input, K> {
        self.tree
    }

    /// The kind that wraps this node.
    #[must_use]
    pub fn kind(&self) -> &'t K {
        &self.node().kind
    }

    /// The DOM fragment this node is bound to.
    #[must_use]
    pub fn source(&self) -> &'t InfoSource<'a, 'input> {
        &self.node().source
    }

    /// Name identifying this node amongst its siblings, if its kind gave one.
    #[must_use]
    pub fn name(&self) -> Option<&'t str> {
        self.node().name.as_deref()
    }

    /// Identifier locating this node within the document, if its kind gave one.
    #[must_use]
    pub fn info_path(&self) -> Option<&'t str> {
        self.node().info_path.as_deref()
    }

    /// Whether this node wraps an element.
    #[must_use]
    pub fn is_element(&self) -> bool {
        self.source().is_element()
    }

    /// Whether this node wraps a text run.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.source().is_text()
    }

    /// The wrapped element, for element nodes.
    #[must_use]
    pub fn element(&self) -> Option<Node<'a, 'input>> {
        self.source().element()
    }

    /// The wrapped text run, for text nodes.
    #[must_use]
    pub fn text(&self) -> Option<&'t str> {
        self.source().text()
    }

    /// Tag name of the wrapped element, for element nodes.
    #[must_use]
    pub fn tag_name(&self) -> Option<&'a str> {
        self.source().tag_name()
    }

    /// The enclosing node, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|id| Self::new(self.tree, id))
    }

    /// Ancestors from the parent up to the root.
    pub fn ancestors(&self) -> Ancestors<'t, 'a, 'input, K> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// The highest node reachable through parent links.
    #[must_use]
    pub fn root(&self) -> Self {
        self.ancestors().last().unwrap_or(*self)
    }

    /// Nodes from the root down to and including this one.
    #[must_use]
    pub fn xml_info_path(&self) -> Vec<Self> {
        let mut path: Vec<Self> = self.ancestors().collect();
        path.reverse();
        path.push(*self);
        path
    }

    /// Dot-joined rendering of [`Self::xml_info_path`], e.g.
    /// `<root>.<section>.<item>.text`.
    #[must_use]
    pub fn str_path(&self) -> String {
        self.tree.render_path(self.id)
    }

    /// Direct children in document order.
    ///
    /// Returns a fresh vector; the tree itself cannot be changed through it.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.node()
            .children
            .iter()
            .map(|&id| Self::new(self.tree, id))
            .collect()
    }

    /// Every descendant, depth-first and pre-order. Each call starts a new pass.
    pub fn all_children(&self) -> Descendants<'t, 'a, 'input, K> {
        let mut stack = self.node().children.clone();
        stack.reverse();
        Descendants {
            tree: self.tree,
            stack,
        }
    }

    /// Whether a direct child carries the given name.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.find_child(name).is_some()
    }

    fn find_child(&self, name: &str) -> Option<Self> {
        self.node()
            .children
            .iter()
            .map(|&id| Self::new(self.tree, id))
            .find(|child| child.name() == Some(name))
    }

    /// Get an attribute of the wrapped element.
    ///
    /// Text nodes have no attributes.
    ///
    /// # Errors
    /// Returns `MissingAttribute` if `required` is set and the attribute is
    /// absent.
    pub fn get_attribute(&self, name: &str, required: bool) -> Result<Option<&'a str>> {
        let value = self.element().and_then(|element| get_attribute(element, name));
        if value.is_none() && required {
            return Err(InfoError::MissingAttribute {
                path: self.str_path(),
                attribute: name.to_string(),
            });
        }
        Ok(value)
    }
}

impl<K: InfoKind> InfoRef<'_, '_, '_, K> {
    /// Find the first direct child with the given name.
    ///
    /// # Errors
    /// Returns `MissingChild` if `required` is set and no child has the name.
    pub fn get_child(&self, name: &str, required: bool) -> Result<Option<Self>> {
        match self.find_child(name) {
            Some(child) => Ok(Some(child)),
            None if required => Err(InfoError::MissingChild {
                kind: self.kind().kind_name().into_owned(),
                path: self.str_path(),
                name: name.to_string(),
            }),
            None => Ok(None),
        }
    }
}

impl<K> Clone for InfoRef<'_, '_, '_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for InfoRef<'_, '_, '_, K> {}

impl<K> PartialEq for InfoRef<'_, '_, '_, K> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<K> Eq for InfoRef<'_, '_, '_, K> {}

/// Renders as `<tag>` for elements and `text` for text runs.
impl<K> fmt::Display for InfoRef<'_, '_, '_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.source(), f)
    }
}

impl<K> fmt::Debug for InfoRef<'_, '_, '_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoRef")
            .field("id", &self.id)
            .field("path", &self.str_path())
            .field("name", &self.name())
            .finish()
    }
}

/// Iterator over a node's ancestors, nearest first.
pub struct Ancestors<'t, 'a, 'input, K> {
    next: Option<InfoRef<'t, 'a, 'input, K>>,
}

impl<'t, 'a, 'input, K> Iterator for Ancestors<'t, 'a, 'input, K> {
    type Item = InfoRef<'t, 'a, 'input, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

/// Depth-first, pre-order iterator over a node's descendants.
pub struct Descendants<'t, 'a, 'input, K> {
    tree: &'t InfoTree<'a, 'input, K>,
    /// Pending nodes, next one on top.
    stack: Vec<NodeId>,
}

impl<'t, 'a, 'input, K> Iterator for Descendants<'t, 'a, 'input, K> {
    type Item = InfoRef<'t, 'a, 'input, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.node(id).children.iter().rev().copied());
        Some(InfoRef::new(self.tree, id))
    }
}
