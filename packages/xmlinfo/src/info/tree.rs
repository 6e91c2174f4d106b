//! Arena-backed info tree and the child discovery algorithm.

use std::collections::HashSet;
use std::fmt;

use roxmltree::{Document, Node, NodeType};

use super::diagnostics::Diagnostic;
use super::kind::{Classification, InfoKind};
use super::node::InfoRef;
use super::source::InfoSource;
use crate::config::{BuildConfig, DuplicateNamePolicy, PATH_SEPARATOR};
use crate::error::{InfoError, Result};
use crate::xml::{describe_node_type, get_tag_name};

/// Index of a node within its [`InfoTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in document (pre-)order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Storage for a single node. The parent link is an index, never an owner.
pub(crate) struct InfoNode<'a, 'input, K> {
    pub(crate) kind: K,
    pub(crate) source: InfoSource<'a, 'input>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) name: Option<String>,
    pub(crate) info_path: Option<String>,
}

/// A fully built tree of info nodes.
///
/// All nodes live in one arena owned by the tree; each node holds the ids
/// of its children in document order and the id of its parent. The tree is
/// immutable once built and dropping it drops every node.
pub struct InfoTree<'a, 'input, K> {
    nodes: Vec<InfoNode<'a, 'input, K>>,
    diagnostics: Vec<Diagnostic>,
    config: BuildConfig,
}

impl<'a, 'input, K: InfoKind> InfoTree<'a, 'input, K> {
    /// Build a tree rooted at `element` with default settings.
    ///
    /// # Errors
    /// See [`InfoTree::from_source`].
    pub fn build(kind: K, element: Node<'a, 'input>) -> Result<Self> {
        Self::build_with_config(kind, element, BuildConfig::default())
    }

    /// Build a tree rooted at `element`.
    ///
    /// # Errors
    /// See [`InfoTree::from_source`].
    pub fn build_with_config(
        kind: K,
        element: Node<'a, 'input>,
        config: BuildConfig,
    ) -> Result<Self> {
        let source = InfoSource::from_parts(Some(element), None)?;
        Self::from_source(kind, source, config)
    }

    /// Build a tree rooted at the document's root element.
    ///
    /// # Errors
    /// See [`InfoTree::from_source`].
    pub fn from_document(
        kind: K,
        document: &'a Document<'input>,
        config: BuildConfig,
    ) -> Result<Self> {
        Self::build_with_config(kind, document.root_element(), config)
    }

    /// Build a single-node tree around a text run.
    ///
    /// # Errors
    /// See [`InfoTree::from_source`].
    pub fn build_text(kind: K, text: impl Into<String>) -> Result<Self> {
        Self::from_source(kind, InfoSource::Text(text.into()), BuildConfig::default())
    }

    /// Build a tree from an arbitrary source.
    ///
    /// Discovery is eager: every descendant is classified and wrapped before
    /// this returns. Unrecognized content is skipped and recorded in
    /// [`InfoTree::diagnostics`].
    ///
    /// # Errors
    /// Returns `InvalidSource` if an `Element` source holds a non-element
    /// node, or `DuplicateName` if two siblings share an info name and the
    /// config rejects duplicates.
    pub fn from_source(
        kind: K,
        source: InfoSource<'a, 'input>,
        config: BuildConfig,
    ) -> Result<Self> {
        source.validate()?;
        let mut tree = Self {
            nodes: Vec::new(),
            diagnostics: Vec::new(),
            config,
        };
        tree.insert(kind, source, None)?;

        tracing::debug!(
            nodes = tree.nodes.len(),
            diagnostics = tree.diagnostics.len(),
            "Built info tree"
        );
        Ok(tree)
    }

    /// Create a node, link it under `parent` and discover its children.
    ///
    /// `parent` carries the names already taken by the new node's siblings.
    fn insert(
        &mut self,
        kind: K,
        source: InfoSource<'a, 'input>,
        parent: Option<(NodeId, &mut HashSet<String>)>,
    ) -> Result<NodeId> {
        let name = kind.info_name(&source);
        let info_path = kind.info_path(&source);
        let element = source.element();

        let id = NodeId(self.nodes.len());
        self.nodes.push(InfoNode {
            kind,
            source,
            parent: parent.as_ref().map(|(parent, _)| *parent),
            children: Vec::new(),
            name,
            info_path,
        });

        if let Some((parent, sibling_names)) = parent {
            self.append_child(parent, id, sibling_names)?;
        }
        if let Some(element) = element {
            self.discover_children(id, element)?;
        }
        Ok(id)
    }

    fn append_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        sibling_names: &mut HashSet<String>,
    ) -> Result<()> {
        if self.config.duplicate_names == DuplicateNamePolicy::Reject {
            if let Some(name) = &self.nodes[child.0].name {
                if !sibling_names.insert(name.clone()) {
                    return Err(InfoError::DuplicateName {
                        name: name.clone(),
                        path: self.render_path(parent),
                    });
                }
            }
        }

        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Walk the element's direct children, coalescing adjacent text.
    fn discover_children(&mut self, id: NodeId, element: Node<'a, 'input>) -> Result<()> {
        let mut text = String::new();
        let mut sibling_names = HashSet::new();

        for child in element.children() {
            match child.node_type() {
                NodeType::Element => {
                    self.flush_text(id, &mut text, &mut sibling_names)?;
                    self.wrap_element(id, child, &mut sibling_names)?;
                }
                NodeType::Text => {
                    text.push_str(child.text().unwrap_or_default());
                }
                other => self.report(Diagnostic::UnhandledNode {
                    kind: describe_node_type(other),
                    path: self.render_path(id),
                }),
            }
        }

        // Trailing text has no element after it to trigger the flush
        self.flush_text(id, &mut text, &mut sibling_names)
    }

    fn wrap_element(
        &mut self,
        id: NodeId,
        element: Node<'a, 'input>,
        sibling_names: &mut HashSet<String>,
    ) -> Result<()> {
        let tag = get_tag_name(element);
        let classification = self.nodes[id.0].kind.classify_element(tag, element);
        match classification {
            Classification::Wrap(kind) => {
                self.insert(kind, InfoSource::Element(element), Some((id, sibling_names)))?;
            }
            Classification::Ignore => {}
            Classification::Unrecognized => self.report(Diagnostic::UnknownElement {
                tag: tag.to_string(),
                path: self.render_path(id),
            }),
        }
        Ok(())
    }

    /// Classify and wrap the accumulated text, leaving the accumulator empty.
    fn flush_text(
        &mut self,
        id: NodeId,
        accumulated: &mut String,
        sibling_names: &mut HashSet<String>,
    ) -> Result<()> {
        if accumulated.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(accumulated);
        if self.config.skip_blank_text && text.trim().is_empty() {
            return Ok(());
        }

        let classification = self.nodes[id.0].kind.classify_text(&text);
        match classification {
            Classification::Wrap(kind) => {
                self.insert(kind, InfoSource::Text(text), Some((id, sibling_names)))?;
            }
            Classification::Ignore => {}
            Classification::Unrecognized => self.report(Diagnostic::UnknownText {
                text,
                path: self.render_path(id),
            }),
        }
        Ok(())
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(path = %diagnostic.path(), "{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

impl<'a, 'input, K> InfoTree<'a, 'input, K> {
    /// The root node.
    #[must_use]
    pub fn root(&self) -> InfoRef<'_, 'a, 'input, K> {
        InfoRef::new(self, NodeId(0))
    }

    /// Look up a node by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<InfoRef<'_, 'a, 'input, K>> {
        (id.0 < self.nodes.len()).then(|| InfoRef::new(self, id))
    }

    /// Total number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every node, root first, in depth-first document order.
    pub fn iter(&self) -> impl Iterator<Item = InfoRef<'_, 'a, 'input, K>> + '_ {
        (0..self.nodes.len()).map(move |index| InfoRef::new(self, NodeId(index)))
    }

    /// Content skipped while building, in discovery order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Settings the tree was built with.
    #[must_use]
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Find the first node whose kind assigned it the given info path.
    #[must_use]
    pub fn get_info_by_path(&self, info_path: &str) -> Option<InfoRef<'_, 'a, 'input, K>> {
        self.iter().find(|node| node.info_path() == Some(info_path))
    }

    pub(crate) fn node(&self, id: NodeId) -> &InfoNode<'a, 'input, K> {
        &self.nodes[id.0]
    }

    /// Render the root-to-`id` path, e.g. `<root>.<item>.text`.
    pub(crate) fn render_path(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            segments.push(node.source.to_string());
            current = node.parent;
        }
        segments.reverse();
        segments.join(PATH_SEPARATOR)
    }
}

impl<K> fmt::Debug for InfoTree<'_, '_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoTree")
            .field("root", &self.render_path(NodeId(0)))
            .field("nodes", &self.nodes.len())
            .field("diagnostics", &self.diagnostics)
            .field("config", &self.config)
            .finish()
    }
}
