use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::slice;

use crate::{
    DEFAULT_PATTERNS, IgnoreRule, LoadError, LoadOptions,
    debug_ignore::{trace_defaults_used, trace_rule_added, trace_rules_loaded, trace_scan_failure},
    default_rules, evaluate,
};

/// Ordered collection of ignore rules for one directory tree.
///
/// Rules are evaluated in definition order and the last matching rule wins.
/// Loaded sets always start with the [default rules](crate::default_rules);
/// rules read from the ignore file follow them.
///
/// # Examples
///
/// ```
/// use tfignore::RuleSet;
///
/// let set = RuleSet::parse("*.tfstate\n!keep.tfstate\n");
///
/// assert!(set.is_excluded("prod.tfstate"));
/// assert!(!set.is_excluded("keep.tfstate"));
/// assert!(set.is_excluded(".git/HEAD"));
/// assert!(!set.is_excluded("main.tf"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RuleSet {
    rules: Vec<IgnoreRule>,
}

impl RuleSet {
    /// Returns a set holding only the default rules.
    #[must_use]
    pub fn defaults() -> Self {
        Self::from_rules(default_rules())
    }

    /// Builds a set from `rules` exactly as given, without the defaults.
    #[must_use]
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = IgnoreRule>,
    {
        let rules: Vec<IgnoreRule> = rules.into_iter().collect();
        for rule in &rules {
            trace_rule_added(rule.pattern(), rule.is_negated(), rule.is_dir_only());
        }
        Self { rules }
    }

    /// Builds a set from the default rules followed by `rules`.
    #[must_use]
    pub fn with_defaults<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = IgnoreRule>,
    {
        Self::from_rules(default_rules().chain(rules))
    }

    /// Parses ignore-file `content`, appending its rules to the defaults.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self::from_reader(content.as_bytes())
    }

    /// Reads ignore-file lines from `reader`, appending them to the defaults.
    ///
    /// Reading stops at the first line that cannot be read (an I/O failure or
    /// invalid UTF-8). The failure is logged and every rule read before it is
    /// kept.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        let mut rules: Vec<IgnoreRule> = default_rules().collect();
        for (index, line) in reader.lines().enumerate() {
            match line {
                Ok(line) => rules.extend(IgnoreRule::parse(&line)),
                Err(error) => {
                    trace_scan_failure(index + 1, &error.to_string());
                    break;
                }
            }
        }
        Self::from_rules(rules)
    }

    /// Loads the rule set for the tree rooted at `root`.
    ///
    /// Reads `<root>/.terraformignore`. A missing or unreadable file is the
    /// common case and yields [`defaults`](Self::defaults) without an error.
    pub fn load(root: impl AsRef<Path>) -> Self {
        Self::load_with(root, &LoadOptions::default())
    }

    /// Like [`load`](Self::load), locating the ignore file through `options`.
    pub fn load_with(root: impl AsRef<Path>, options: &LoadOptions) -> Self {
        Self::try_load(root, options).unwrap_or_else(|error| {
            trace_defaults_used(&error.path().display().to_string(), &error.to_string());
            Self::defaults()
        })
    }

    /// Loads the rule set for `root`, reporting why the ignore file could not
    /// be opened.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] when the file does not exist and
    /// [`LoadError::Unreadable`] for any other open failure.
    pub fn try_load(root: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, LoadError> {
        let path = options.ignore_path(root.as_ref());
        let file = File::open(&path).map_err(|error| LoadError::from_io(path.clone(), error))?;
        let set = Self::from_reader(BufReader::new(file));
        trace_rules_loaded(
            &path.display().to_string(),
            set.len().saturating_sub(DEFAULT_PATTERNS.len()),
        );
        Ok(set)
    }

    /// Returns `true` when `path` should be left out of the package.
    ///
    /// `path` is relative to the tree root and may use `/` on every host.
    /// Directories are recognised by a trailing separator.
    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        evaluate::is_excluded(path, &self.rules)
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[IgnoreRule] {
        &self.rules
    }

    /// Returns an iterator over the rules in evaluation order.
    pub fn iter(&self) -> slice::Iter<'_, IgnoreRule> {
        self.rules.iter()
    }

    /// Returns the number of rules, defaults included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a IgnoreRule;
    type IntoIter = slice::Iter<'a, IgnoreRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Loads the rule set for the tree rooted at `root`.
///
/// Equivalent to [`RuleSet::load`].
pub fn load_rules(root: impl AsRef<Path>) -> RuleSet {
    RuleSet::load(root)
}

/// Returns `true` when `path` is excluded by `rules`.
///
/// Equivalent to [`RuleSet::is_excluded`].
#[must_use]
pub fn is_excluded(path: &str, rules: &RuleSet) -> bool {
    rules.is_excluded(path)
}
