//! Structured tracing for ignore-rule loading and path evaluation.
//!
//! Every event is emitted under the `tfignore::rules` target. Tracing is
//! compiled in behind the `tracing` feature; without it each function is an
//! inline no-op so call sites stay unconditional.
//!
//! # Examples
//!
//! ```
//! use tfignore::debug_ignore::{ExclusionTracer, trace_path_skipped};
//!
//! let mut tracer = ExclusionTracer::new();
//! tracer.record_rules_loaded(4);
//!
//! trace_path_skipped(".git/config");
//! tracer.record_evaluation(true);
//! tracer.record_evaluation(false);
//!
//! tracer.summary();
//! assert_eq!(tracer.total_excluded(), 1);
//! ```

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const RULES_TARGET: &str = "tfignore::rules";

// ============================================================================
// Tracing functions (feature-gated)
// ============================================================================

/// Traces a rule being appended to a rule set.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rule_added(pattern: &str, negated: bool, dir_only: bool) {
    tracing::debug!(
        target: RULES_TARGET,
        pattern = %pattern,
        negated = negated,
        dir_only = dir_only,
        "rule_added"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rule_added(_pattern: &str, _negated: bool, _dir_only: bool) {}

/// Traces a successfully read ignore file and how many rules it contributed.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rules_loaded(path: &str, rule_count: usize) {
    tracing::debug!(
        target: RULES_TARGET,
        path = %path,
        rule_count = rule_count,
        "rules_loaded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rules_loaded(_path: &str, _rule_count: usize) {}

/// Traces the fallback to the default rules when no ignore file is usable.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_defaults_used(path: &str, reason: &str) {
    tracing::debug!(
        target: RULES_TARGET,
        path = %path,
        reason = %reason,
        "defaults_used"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_defaults_used(_path: &str, _reason: &str) {}

/// Traces a read failure part-way through an ignore file.
///
/// `line` is the 1-based number of the line that could not be read. Rules
/// parsed before it are kept.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_scan_failure(line: usize, error: &str) {
    tracing::warn!(
        target: RULES_TARGET,
        line = line,
        error = %error,
        "error reading ignore file; keeping rules read so far"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_scan_failure(_line: usize, _error: &str) {}

/// Traces a pattern that could not be compiled.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_compile_failure(pattern: &str, error: &str) {
    tracing::warn!(
        target: RULES_TARGET,
        pattern = %pattern,
        error = %error,
        "ignore pattern does not compile; rule will never match"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_compile_failure(_pattern: &str, _error: &str) {}

/// Traces evaluation of a path against a single rule.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_rule_evaluate(path: &str, pattern: &str, negated: bool, matched: bool) {
    tracing::trace!(
        target: RULES_TARGET,
        path = %path,
        pattern = %pattern,
        negated = negated,
        matched = matched,
        "rule_evaluate"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_rule_evaluate(_path: &str, _pattern: &str, _negated: bool, _matched: bool) {}

/// Traces the final decision for a path after the whole rule set ran.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_path_decision(path: &str, excluded: bool, deciding_rule: Option<&str>) {
    tracing::debug!(
        target: RULES_TARGET,
        path = %path,
        excluded = excluded,
        deciding_rule = ?deciding_rule,
        "path_decision"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_path_decision(_path: &str, _excluded: bool, _deciding_rule: Option<&str>) {}

/// Reports a path that will be left out of the package.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_path_skipped(path: &str) {
    tracing::info!(
        target: RULES_TARGET,
        path = %path,
        "Skipping excluded path"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_path_skipped(_path: &str) {}

/// Traces aggregate evaluation counts.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_exclusion_summary(
    rules_loaded: usize,
    total_evaluated: usize,
    total_included: usize,
    total_excluded: usize,
) {
    tracing::info!(
        target: RULES_TARGET,
        rules_loaded = rules_loaded,
        total_evaluated = total_evaluated,
        total_included = total_included,
        total_excluded = total_excluded,
        "exclusion_summary"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_exclusion_summary(
    _rules_loaded: usize,
    _total_evaluated: usize,
    _total_included: usize,
    _total_excluded: usize,
) {
}

// ============================================================================
// ExclusionTracer - counters for a classification session
// ============================================================================

/// Aggregates counts across a run of path classifications.
#[derive(Debug, Clone, Default)]
pub struct ExclusionTracer {
    rules_loaded: usize,
    total_evaluated: usize,
    total_excluded: usize,
}

impl ExclusionTracer {
    /// Creates a tracer with zero counts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules_loaded: 0,
            total_evaluated: 0,
            total_excluded: 0,
        }
    }

    /// Records the size of the rule set in use.
    pub fn record_rules_loaded(&mut self, rule_count: usize) {
        self.rules_loaded += rule_count;
    }

    /// Records one classification.
    pub fn record_evaluation(&mut self, excluded: bool) {
        self.total_evaluated += 1;
        if excluded {
            self.total_excluded += 1;
        }
    }

    /// Emits a summary event with the accumulated counts.
    pub fn summary(&self) {
        trace_exclusion_summary(
            self.rules_loaded,
            self.total_evaluated,
            self.total_included(),
            self.total_excluded,
        );
    }

    /// Returns the number of rules recorded.
    #[must_use]
    pub const fn rules_loaded(&self) -> usize {
        self.rules_loaded
    }

    /// Returns the number of paths classified.
    #[must_use]
    pub const fn total_evaluated(&self) -> usize {
        self.total_evaluated
    }

    /// Returns the number of paths kept in the package.
    #[must_use]
    pub const fn total_included(&self) -> usize {
        self.total_evaluated - self.total_excluded
    }

    /// Returns the number of paths left out of the package.
    #[must_use]
    pub const fn total_excluded(&self) -> usize {
        self.total_excluded
    }
}
