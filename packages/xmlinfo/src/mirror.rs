//! A rule-driven node kind that mirrors the document structure.
//!
//! [`MirrorInfo`] wraps every element and text run it is allowed to, driven
//! by a [`MirrorRules`] table of recognized and ignored tags. It needs no
//! domain knowledge, which makes it useful for inspecting arbitrary documents.

use std::borrow::Cow;
use std::collections::HashSet;

use roxmltree::Node;

use crate::info::{Classification, InfoKind, InfoSource};

/// Tag rules shared by every node of a mirrored tree.
#[derive(Debug, Clone, Default)]
pub struct MirrorRules {
    /// Tags that get wrapped. `None` recognizes every tag.
    recognized: Option<HashSet<String>>,
    ignored: HashSet<String>,
    ignore_blank_text: bool,
    name_attribute: Option<String>,
}

impl MirrorRules {
    /// Create rules that recognize every element and text run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict wrapping to these tags; any other tag is reported as unknown.
    ///
    /// May be called repeatedly to extend the set.
    #[must_use]
    pub fn recognize(mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let recognized = self.recognized.get_or_insert_with(HashSet::new);
        for tag in tag_names {
            recognized.insert(tag.into());
        }
        self
    }

    /// Mark tags as ignored (left out of the tree without a diagnostic).
    #[must_use]
    pub fn ignore(mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for tag in tag_names {
            self.ignored.insert(tag.into());
        }
        self
    }

    /// Leave whitespace-only text runs out of the tree without a diagnostic.
    #[must_use]
    pub fn ignore_blank_text(mut self, ignore: bool) -> Self {
        self.ignore_blank_text = ignore;
        self
    }

    /// Name element nodes after the value of this attribute.
    #[must_use]
    pub fn name_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.name_attribute = Some(attribute.into());
        self
    }

    /// Check if a tag is ignored.
    #[must_use]
    pub fn should_ignore(&self, tag_name: &str) -> bool {
        self.ignored.contains(tag_name)
    }

    /// Check if a tag is wrapped.
    #[must_use]
    pub fn recognizes(&self, tag_name: &str) -> bool {
        self.recognized
            .as_ref()
            .is_none_or(|recognized| recognized.contains(tag_name))
    }
}

/// What a mirrored node wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorRole {
    /// Wraps an element and classifies its children.
    Element,
    /// Wraps a text run; never has children.
    Text,
}

/// Node kind that mirrors the document according to [`MirrorRules`].
#[derive(Debug, Clone, Copy)]
pub struct MirrorInfo<'r> {
    rules: &'r MirrorRules,
    role: MirrorRole,
}

impl<'r> MirrorInfo<'r> {
    /// Kind for the root element of a document.
    #[must_use]
    pub fn root(rules: &'r MirrorRules) -> Self {
        Self {
            rules,
            role: MirrorRole::Element,
        }
    }

    /// Which kind of source this info wraps.
    #[must_use]
    pub fn role(&self) -> MirrorRole {
        self.role
    }

    fn with_role(self, role: MirrorRole) -> Self {
        Self { role, ..self }
    }
}

impl InfoKind for MirrorInfo<'_> {
    fn classify_element(&self, tag: &str, _element: Node<'_, '_>) -> Classification<Self> {
        if self.rules.should_ignore(tag) {
            Classification::Ignore
        } else if self.rules.recognizes(tag) {
            Classification::Wrap(self.with_role(MirrorRole::Element))
        } else {
            Classification::Unrecognized
        }
    }

    fn classify_text(&self, text: &str) -> Classification<Self> {
        if self.rules.ignore_blank_text && text.trim().is_empty() {
            Classification::Ignore
        } else {
            Classification::Wrap(self.with_role(MirrorRole::Text))
        }
    }

    fn info_name(&self, source: &InfoSource<'_, '_>) -> Option<String> {
        let attribute = self.rules.name_attribute.as_deref()?;
        source
            .element()
            .and_then(|element| element.attribute(attribute))
            .map(String::from)
    }

    fn kind_name(&self) -> Cow<'static, str> {
        match self.role {
            MirrorRole::Element => Cow::Borrowed("MirrorElement"),
            MirrorRole::Text => Cow::Borrowed("MirrorText"),
        }
    }
}
