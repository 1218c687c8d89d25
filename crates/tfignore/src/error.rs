use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error produced when a rule's pattern cannot be compiled into a matcher.
///
/// The evaluator treats this as "the rule does not match" for the path being
/// classified, so a single malformed pattern never aborts a packaging run.
#[derive(Clone, Debug, Error)]
#[error("failed to compile ignore pattern '{pattern}': {source}")]
pub struct CompileError {
    pattern: String,
    #[source]
    source: regex::Error,
}

impl CompileError {
    /// Creates a new [`CompileError`] for the given pattern and source error.
    pub(crate) fn new(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self {
            pattern: pattern.into(),
            source,
        }
    }

    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Error returned by [`RuleSet::try_load`](crate::RuleSet::try_load) when the
/// ignore file cannot be opened.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The root directory holds no ignore file.
    #[error("no ignore file at '{}'", .path.display())]
    NotFound {
        /// Location that was probed.
        path: PathBuf,
    },
    /// The ignore file exists but could not be opened.
    #[error("failed to open ignore file '{}': {source}", .path.display())]
    Unreadable {
        /// Location that was probed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Unreadable { path, source }
        }
    }

    /// Returns the ignore-file path the loader attempted to open.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Unreadable { path, .. } => path,
        }
    }

    /// Returns `true` when the ignore file simply does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
