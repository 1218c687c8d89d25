use std::sync::OnceLock;

use regex::Regex;

use crate::CompileError;
use crate::compile::{SEPARATOR, compile};
use crate::debug_ignore::trace_compile_failure;

/// One normalised ignore-file entry.
///
/// The pattern is compiled into a matcher on the first call to
/// [`matches`](Self::matches) and the outcome (matcher or error) is memoised
/// for the lifetime of the rule. The pattern itself never changes after
/// construction; root-anchored rules derive a separator-trimmed variant
/// instead of rewriting their own pattern.
#[derive(Clone, Debug)]
pub struct IgnoreRule {
    pattern: String,
    negated: bool,
    root_anchored: bool,
    segments: Vec<String>,
    matcher: OnceLock<Result<Regex, CompileError>>,
    root_variant: OnceLock<Option<Box<IgnoreRule>>>,
}

impl IgnoreRule {
    /// Creates a rule for an already-normalised `pattern`.
    ///
    /// `negated` marks a re-include (`!`) rule. The rule is treated as root
    /// anchored when the pattern still carries a leading separator.
    #[must_use]
    pub fn new(pattern: impl Into<String>, negated: bool) -> Self {
        let pattern = pattern.into();
        let root_anchored = pattern.len() > 1 && pattern.starts_with(SEPARATOR);
        Self::with_anchor(pattern, negated, root_anchored)
    }

    fn with_anchor(pattern: String, negated: bool, root_anchored: bool) -> Self {
        let segments = pattern.split(SEPARATOR).map(str::to_owned).collect();
        Self {
            pattern,
            negated,
            root_anchored,
            segments,
            matcher: OnceLock::new(),
            root_variant: OnceLock::new(),
        }
    }

    /// Parses one raw ignore-file line.
    ///
    /// Returns `None` for blank lines, comments, and a bare `!`. A leading
    /// `!` marks the rule as negated. A leading separator on a non-negated
    /// line is stripped; negated lines keep it. Both record the rule as root
    /// anchored.
    ///
    /// # Examples
    ///
    /// ```
    /// use tfignore::IgnoreRule;
    ///
    /// let rule = IgnoreRule::parse("  !/terraform.d/ ").unwrap();
    /// assert!(rule.is_negated());
    /// assert!(rule.is_root_anchored());
    /// assert!(rule.pattern().ends_with("terraform.d/"));
    ///
    /// assert!(IgnoreRule::parse("# comment").is_none());
    /// assert!(IgnoreRule::parse("   ").is_none());
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let native = to_native(line);
        let (negated, body) = match native.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, native.as_str()),
        };
        if body.is_empty() {
            return None;
        }

        let root_anchored = body.len() > 1 && body.starts_with(SEPARATOR);
        let pattern = if root_anchored && !negated {
            &body[SEPARATOR.len_utf8()..]
        } else {
            body
        };
        Some(Self::with_anchor(pattern.to_owned(), negated, root_anchored))
    }

    /// Returns the normalised pattern text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns `true` for `!` rules that re-include matching paths.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Returns `true` when the rule only matches from the tree root.
    #[must_use]
    pub const fn is_root_anchored(&self) -> bool {
        self.root_anchored
    }

    /// Returns `true` when the pattern ends with the path separator.
    #[must_use]
    pub fn is_dir_only(&self) -> bool {
        self.pattern.ends_with(SEPARATOR)
    }

    /// Returns the pattern split on the path separator.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Tests `candidate` against the whole pattern.
    ///
    /// # Errors
    ///
    /// Returns the memoised [`CompileError`] when the pattern cannot be
    /// compiled.
    pub fn matches(&self, candidate: &str) -> Result<bool, CompileError> {
        match self.matcher() {
            Ok(regex) => Ok(regex.is_match(candidate)),
            Err(error) => Err(error.clone()),
        }
    }

    /// Returns whether the matcher has been materialised yet.
    #[must_use]
    pub fn is_compiled(&self) -> bool {
        self.matcher.get().is_some()
    }

    fn matcher(&self) -> &Result<Regex, CompileError> {
        self.matcher.get_or_init(|| {
            let compiled = compile(&self.pattern);
            if let Err(error) = &compiled {
                trace_compile_failure(&self.pattern, &error.to_string());
            }
            compiled
        })
    }

    /// Returns the rule with its leading separator removed.
    ///
    /// Rules whose pattern has no leading separator are returned unchanged.
    /// The trimmed variant is derived once and reused.
    pub(crate) fn root_relative(&self) -> &Self {
        self.root_variant
            .get_or_init(|| {
                self.pattern.strip_prefix(SEPARATOR).map(|trimmed| {
                    Box::new(Self::with_anchor(
                        trimmed.to_owned(),
                        self.negated,
                        self.root_anchored,
                    ))
                })
            })
            .as_deref()
            .unwrap_or(self)
    }
}

impl PartialEq for IgnoreRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
            && self.negated == other.negated
            && self.root_anchored == other.root_anchored
    }
}

impl Eq for IgnoreRule {}

/// Rewrites `/` to the host separator.
pub(crate) fn to_native(text: &str) -> String {
    if SEPARATOR == '/' {
        text.to_owned()
    } else {
        text.replace('/', &SEPARATOR.to_string())
    }
}
