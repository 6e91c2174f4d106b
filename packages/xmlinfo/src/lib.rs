//! xmlinfo - Build trees of strongly-typed info objects from XML.
//!
//! A parsed XML document is turned into a tree of info nodes, each wrapping
//! one element or one coalesced run of text. Which kind wraps a child is
//! decided by the node that contains it, through the [`InfoKind`] hooks, so
//! different regions of one document can be read by different rule sets.
//!
//! # Example
//!
//! ```
//! use xmlinfo::{InfoTree, MirrorInfo, MirrorRules};
//!
//! let doc = roxmltree::Document::parse("<root><section><item/></section></root>").unwrap();
//! let rules = MirrorRules::new();
//! let tree = InfoTree::build(MirrorInfo::root(&rules), doc.root_element()).unwrap();
//!
//! let item = tree.root().all_children().last().unwrap();
//! assert_eq!(item.str_path(), "<root>.<section>.<item>");
//! ```
//!
//! # Architecture
//!
//! - [`info`]: The tree builder, node kinds and query API
//! - [`mirror`]: A generic rule-driven node kind
//! - [`snapshot`]: Serializable tree views
//! - [`config`]: Build options and constants
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML loading and DOM helpers
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod info;
pub mod mirror;
pub mod snapshot;
pub mod xml;

// Re-export commonly used items
pub use config::{BuildConfig, DuplicateNamePolicy};
pub use error::{InfoError, Result};
pub use info::{Classification, Diagnostic, InfoKind, InfoRef, InfoSource, InfoTree, NodeId};
pub use mirror::{MirrorInfo, MirrorRules};
