#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `tfignore` decides whether a path inside a Terraform configuration tree is
//! left out of the packaged archive. Rules come from an optional
//! `.terraformignore` file at the root of the tree and follow a
//! gitignore-style subset: `*`, `**`, `?`, backslash escapes, `!` negation,
//! root anchoring with a leading `/`, and directory-only rules ending in `/`.
//!
//! # Design
//!
//! - [`IgnoreRule`] holds one normalised pattern. Its matcher is compiled on
//!   first use and memoised; root-anchored rules derive a trimmed variant
//!   rather than rewriting their pattern, so a rule can be shared across
//!   threads.
//! - [`RuleSet`] owns the ordered rules. Loaded sets always begin with the
//!   built-in defaults from [`default_rules`].
//! - [`glob_to_regex`] and [`compile`] translate glob syntax into anchored
//!   regular expressions.
//!
//! # Invariants
//!
//! - Every rule is evaluated for every path; the last matching rule decides.
//!   A matching plain rule excludes, a matching negated rule re-includes.
//!   Paths no rule matches are included.
//! - Patterns match whole candidates: `baz.txt` never matches `with-baz.txt`.
//! - Bare patterns also match the final path component at any depth.
//! - Directory-only rules match a leading or trailing run of the path's
//!   directories, so `.terraform/` covers everything below `.terraform`.
//! - Rule patterns are never empty.
//!
//! # Errors
//!
//! Nothing in the classification path fails. A missing ignore file yields the
//! defaults, a read error part-way through keeps the rules read so far, and a
//! pattern that does not compile simply never matches. [`RuleSet::try_load`]
//! and [`compile`] surface [`LoadError`] and [`CompileError`] for callers that
//! want them.
//!
//! # Examples
//!
//! ```
//! use tfignore::RuleSet;
//!
//! let rules = RuleSet::parse("*.tfstate\nfoo/*.md\n");
//!
//! assert!(rules.is_excluded("terraform.tfstate"));
//! assert!(rules.is_excluded("foo/notes.md"));
//! assert!(rules.is_excluded(".terraform/providers/registry"));
//! assert!(!rules.is_excluded(".terraform/modules/vpc/main.tf"));
//! assert!(!rules.is_excluded("main.tf"));
//! ```

mod compile;
mod config;
pub mod debug_ignore;
mod defaults;
mod error;
mod evaluate;
mod rule;
mod set;

pub use compile::{compile, glob_to_regex};
pub use config::{IGNORE_FILE_NAME, LoadOptions};
pub use defaults::{DEFAULT_PATTERNS, default_rules};
pub use error::{CompileError, LoadError};
pub use rule::IgnoreRule;
pub use set::{RuleSet, is_excluded, load_rules};
