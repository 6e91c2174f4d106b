//! Info trees: strongly-typed wrappers built over a parsed XML document.
//!
//! A tree is built from one root element (or text run) and an [`InfoKind`].
//! Each node decides through its kind how its own children are wrapped, so
//! the construction algorithm is fixed while the interpretation of every
//! subtree is supplied by whichever kind owns it.

mod diagnostics;
mod kind;
mod node;
mod source;
mod tree;

pub use diagnostics::Diagnostic;
pub use kind::{Classification, InfoKind};
pub use node::{Ancestors, Descendants, InfoRef};
pub use source::InfoSource;
pub use tree::{InfoTree, NodeId};
