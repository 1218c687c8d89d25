//! Tests for `!` rules and last-match-wins ordering.
//!
//! Every rule is evaluated for every path. A matching plain rule excludes the
//! path, a matching negated rule re-includes it, and the last match decides.

use tfignore::{IgnoreRule, RuleSet};

fn set(lines: &str) -> RuleSet {
    RuleSet::from_rules(lines.lines().filter_map(IgnoreRule::parse))
}

// =============================================================================
// Basic Negation
// =============================================================================

#[test]
fn negation_after_exclusion_reincludes() {
    let rules = set("*.tfvars\n!example.tfvars\n");

    assert!(rules.is_excluded("prod.tfvars"));
    assert!(!rules.is_excluded("example.tfvars"));
    assert!(!rules.is_excluded("env/example.tfvars"));
}

#[test]
fn negation_before_exclusion_is_overridden() {
    let rules = set("!example.tfvars\n*.tfvars\n");
    assert!(rules.is_excluded("example.tfvars"));
}

#[test]
fn negation_alone_excludes_nothing() {
    let rules = set("!*.tf\n");
    assert!(!rules.is_excluded("main.tf"));
    assert!(!rules.is_excluded("other.txt"));
}

#[test]
fn alternating_rules_use_last_match() {
    let rules = set("*.log\n!*.log\n*.log\n");
    assert!(rules.is_excluded("debug.log"));

    let rules = set("*.log\n!*.log\n*.log\n!*.log\n");
    assert!(!rules.is_excluded("debug.log"));
}

#[test]
fn non_matching_later_rule_keeps_earlier_decision() {
    let rules = set("*.log\n!*.txt\n");
    assert!(rules.is_excluded("debug.log"));
}

// =============================================================================
// Directory Negation
// =============================================================================

#[test]
fn subdirectory_reinclusion() {
    let rules = set("dist/\n!dist/keep/\n");

    assert!(rules.is_excluded("dist/a.zip"));
    assert!(rules.is_excluded("dist/other/a.zip"));
    assert!(!rules.is_excluded("dist/keep/a.zip"));
    assert!(!rules.is_excluded("dist/keep/deeper/a.zip"));
}

#[test]
fn default_module_reinclusion() {
    let rules = RuleSet::defaults();

    assert!(rules.is_excluded(".terraform/terraform.tfstate"));
    assert!(rules.is_excluded(".terraform/providers/registry.terraform.io/x"));
    assert!(!rules.is_excluded(".terraform/modules/modules.json"));
    assert!(!rules.is_excluded(".terraform/modules/vpc/main.tf"));
}

#[test]
fn user_rule_can_exclude_reincluded_modules_again() {
    let rules = RuleSet::parse(".terraform/modules/\n");
    assert!(rules.is_excluded(".terraform/modules/vpc/main.tf"));
}

#[test]
fn user_rule_can_reinclude_default_exclusion() {
    let rules = RuleSet::parse("!.git/\n");
    assert!(!rules.is_excluded(".git/HEAD"));
}

// =============================================================================
// Root-Anchored Negation
// =============================================================================

#[test]
fn negated_root_file_applies_only_at_root() {
    let rules = set("boop.txt\n!/boop.txt\n");

    assert!(!rules.is_excluded("boop.txt"));
    assert!(rules.is_excluded("nested/boop.txt"));
}

#[test]
fn negated_root_path_with_directory() {
    let rules = set("*.json\n!/config/app.json\n");

    assert!(!rules.is_excluded("config/app.json"));
    assert!(rules.is_excluded("other/config/app.json"));
    assert!(rules.is_excluded("config/other.json"));
}

#[test]
fn negated_root_directory_keeps_nested_copies_excluded() {
    let rules = set("terraform.d/\n!/terraform.d/\n");

    assert!(!rules.is_excluded("terraform.d/plugins/linux_amd64/provider"));
    assert!(rules.is_excluded("some-module/terraform.d/x"));
}
