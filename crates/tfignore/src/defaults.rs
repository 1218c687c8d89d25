use crate::IgnoreRule;
use crate::rule::to_native;

/// Built-in rules placed ahead of every loaded rule set, as
/// `(pattern, negated)` pairs in evaluation order.
///
/// Version-control metadata and Terraform's working directory are excluded,
/// while downloaded modules under `.terraform/modules/` are kept.
pub const DEFAULT_PATTERNS: [(&str, bool); 3] = [
    (".git/", false),
    (".terraform/", false),
    (".terraform/modules/", true),
];

/// Returns freshly built copies of the default rules.
///
/// Each call yields independent [`IgnoreRule`] values, so rule sets never
/// share matcher state through the defaults.
///
/// # Examples
///
/// ```
/// use tfignore::default_rules;
///
/// let rules: Vec<_> = default_rules().collect();
/// assert_eq!(rules.len(), 3);
/// assert!(rules[2].is_negated());
/// ```
pub fn default_rules() -> impl Iterator<Item = IgnoreRule> {
    DEFAULT_PATTERNS
        .into_iter()
        .map(|(pattern, negated)| IgnoreRule::new(to_native(pattern), negated))
}
