use std::path::{Path, PathBuf};

/// Name of the ignore file looked up at the root of a directory tree.
pub const IGNORE_FILE_NAME: &str = ".terraformignore";

/// Options controlling how [`RuleSet::load_with`](crate::RuleSet::load_with)
/// locates the ignore file.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tfignore::LoadOptions;
///
/// let options = LoadOptions::default().with_ignore_file(".packignore");
/// assert_eq!(
///     options.ignore_path(Path::new("stack")),
///     Path::new("stack").join(".packignore"),
/// );
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoadOptions {
    ignore_file: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            ignore_file: IGNORE_FILE_NAME.to_owned(),
        }
    }
}

impl LoadOptions {
    /// Uses `name` instead of [`IGNORE_FILE_NAME`].
    #[must_use]
    pub fn with_ignore_file(mut self, name: impl Into<String>) -> Self {
        self.ignore_file = name.into();
        self
    }

    /// Returns the configured ignore-file name.
    #[must_use]
    pub fn ignore_file(&self) -> &str {
        &self.ignore_file
    }

    /// Returns the ignore-file location for `root`.
    #[must_use]
    pub fn ignore_path(&self, root: &Path) -> PathBuf {
        root.join(&self.ignore_file)
    }
}
