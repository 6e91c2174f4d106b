//! Serializable view of an info tree, with YAML output.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::info::{InfoKind, InfoRef, InfoTree};

/// One node of a tree snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    /// String path of the node.
    pub path: String,
    /// Kind that wrapped the node.
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    /// Snapshot a node and everything below it.
    #[must_use]
    pub fn capture<K: InfoKind>(node: InfoRef<'_, '_, '_, K>) -> Self {
        let attributes = node
            .element()
            .map(|element| {
                element
                    .attributes()
                    .map(|attr| (attr.name().to_string(), attr.value().to_string()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            path: node.str_path(),
            kind: node.kind().kind_name().into_owned(),
            name: node.name().map(String::from),
            tag: node.tag_name().map(String::from),
            attributes,
            text: node.text().map(String::from),
            children: node.children().into_iter().map(Self::capture).collect(),
        }
    }
}

/// Snapshot of a whole tree together with its diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeSnapshot {
    /// The root node and everything below it.
    pub root: NodeSnapshot,
    /// Rendered diagnostics, in the order they were raised.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}

impl TreeSnapshot {
    /// Snapshot a whole tree, including its diagnostics.
    #[must_use]
    pub fn capture<K: InfoKind>(tree: &InfoTree<'_, '_, K>) -> Self {
        Self {
            root: NodeSnapshot::capture(tree.root()),
            diagnostics: tree.diagnostics().iter().map(ToString::to_string).collect(),
        }
    }

    /// Serialize the snapshot as YAML.
    ///
    /// # Errors
    /// Returns `YamlSerialization` if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
