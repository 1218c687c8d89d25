//! Path classification against an ordered rule list.
//!
//! Every rule is consulted for every path; the last rule that matches decides
//! the outcome. A matching plain rule excludes the path and a matching
//! negated rule re-includes it.

use std::path::MAIN_SEPARATOR_STR;

use crate::IgnoreRule;
use crate::compile::SEPARATOR;
use crate::debug_ignore::{trace_path_decision, trace_path_skipped, trace_rule_evaluate};
use crate::rule::to_native;

/// Candidate path split the way the evaluator consumes it.
#[derive(Debug)]
struct PathView<'a> {
    path: &'a str,
    /// Everything up to and including the final separator; empty at the root.
    directory: &'a str,
    filename: &'a str,
}

impl<'a> PathView<'a> {
    fn new(path: &'a str) -> Self {
        let (directory, filename) = match path.rfind(SEPARATOR) {
            Some(index) => path.split_at(index + SEPARATOR.len_utf8()),
            None => ("", path),
        };
        Self {
            path,
            directory,
            filename,
        }
    }
}

/// Returns `true` when the last rule matching `path` is a plain rule.
pub(crate) fn is_excluded(path: &str, rules: &[IgnoreRule]) -> bool {
    let path = to_native(path);
    let view = PathView::new(&path);

    let mut excluded = false;
    let mut deciding_rule = None;
    for rule in rules {
        let matched = rule_applies(rule, &view);
        trace_rule_evaluate(&path, rule.pattern(), rule.is_negated(), matched);
        if matched {
            excluded = !rule.is_negated();
            deciding_rule = Some(rule.pattern());
        }
    }

    trace_path_decision(&path, excluded, deciding_rule);
    if excluded {
        trace_path_skipped(&path);
    }
    excluded
}

fn rule_applies(rule: &IgnoreRule, view: &PathView<'_>) -> bool {
    if rule.is_root_anchored() {
        let rooted = rule.root_relative();
        return matches(rooted, view.path)
            || (rule.is_dir_only() && matches_parent_directory(rooted, view, false));
    }

    // Bare names such as `baz.txt` match the basename at any depth.
    matches(rule, view.path)
        || matches(rule, view.filename)
        || (rule.is_dir_only() && matches_parent_directory(rule, view, true))
}

/// Tests the leading runs of the path's directories (`a/`, `a/b/`, ...) and,
/// when `trailing` is set, the runs that end at the final directory
/// (`b/c/`, `c/`, ...) against a directory-only rule.
fn matches_parent_directory(rule: &IgnoreRule, view: &PathView<'_>, trailing: bool) -> bool {
    // `a/b/` splits into ["a", "b", ""]; the empty tail keeps the separator on
    // every trailing run.
    let segments: Vec<&str> = view.directory.split(SEPARATOR).collect();

    (1..segments.len()).any(|split| {
        let leading = format!("{}{SEPARATOR}", segments[..split].join(MAIN_SEPARATOR_STR));
        matches(rule, &leading)
            || (trailing && matches(rule, &segments[split..].join(MAIN_SEPARATOR_STR)))
    })
}

/// A rule whose pattern fails to compile never matches.
fn matches(rule: &IgnoreRule, candidate: &str) -> bool {
    rule.matches(candidate).unwrap_or(false)
}
