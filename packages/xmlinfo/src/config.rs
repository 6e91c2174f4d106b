//! Configuration constants and build options.

/// Default maximum input file size in bytes (100 MB).
///
/// Documents are parsed into memory in full; this keeps an unexpectedly
/// large file from exhausting memory. Can be overridden via `--max-size`.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Separator between rendered nodes in a string path.
pub const PATH_SEPARATOR: &str = ".";

/// Rendering of a text node in a string path.
pub const TEXT_PATH_SEGMENT: &str = "text";

/// How sibling nodes sharing the same info name are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateNamePolicy {
    /// Fail the build with `InfoError::DuplicateName`.
    #[default]
    Reject,
    /// Keep every sibling; name lookups return the first match.
    FirstWins,
}

/// Options controlling tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Policy for siblings with the same info name.
    pub duplicate_names: DuplicateNamePolicy,

    /// Drop whitespace-only text runs before they are classified.
    pub skip_blank_text: bool,
}

impl BuildConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            duplicate_names: DuplicateNamePolicy::default(),
            skip_blank_text: false,
        }
    }

    /// Set the duplicate name policy.
    #[must_use]
    pub fn with_duplicate_names(mut self, policy: DuplicateNamePolicy) -> Self {
        self.duplicate_names = policy;
        self
    }

    /// Drop whitespace-only text runs.
    #[must_use]
    pub fn with_skip_blank_text(mut self, skip: bool) -> Self {
        self.skip_blank_text = skip;
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}
