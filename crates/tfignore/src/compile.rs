//! Translation of ignore-file glob syntax into anchored regular expressions.
//!
//! The translation walks the pattern one character at a time with a single
//! character of lookahead so adjacent tokens such as `**/` or `\*` are
//! recognised without a separate tokenisation pass. The emitted expression is
//! always wrapped in `^...$` so a pattern only ever matches whole candidates.

use std::fmt::Write as _;
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use regex::Regex;

use crate::CompileError;

/// Host path separator used for splitting patterns and candidate paths.
pub(crate) const SEPARATOR: char = MAIN_SEPARATOR;

/// Translates `pattern` into the source of an anchored regular expression.
///
/// | Glob            | Expression            |
/// |-----------------|-----------------------|
/// | `**` at the end | `.*`                  |
/// | `**/`           | `(.*/)?`              |
/// | `**` elsewhere  | `.*`                  |
/// | `*`             | `[^/]*`               |
/// | `?`             | `[^/]`                |
/// | `.` / `$`       | escaped literal       |
/// | `\c`            | literal `c`           |
///
/// Every other character is copied through unchanged, including regex
/// metacharacters such as `[`, `]`, `(` and `+`.
///
/// On hosts whose separator is `\`, a backslash maps to a literal separator
/// and escaping is unavailable.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use tfignore::glob_to_regex;
///
/// assert_eq!(glob_to_regex("foo/*.md"), r"^foo/[^/]*\.md$");
/// assert_eq!(glob_to_regex("**/bar.tf"), r"^(.*/)?bar\.tf$");
/// # }
/// ```
#[must_use]
pub fn glob_to_regex(pattern: &str) -> String {
    let separator = regex::escape(MAIN_SEPARATOR_STR);
    let mut expr = String::with_capacity(pattern.len() * 2 + 2);
    expr.push('^');

    let mut chars = pattern.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '*' if chars.next_if_eq(&'*').is_some() => {
                // `**/` swallows its separator; only a non-terminal `**/` turns
                // into the optional leading-directories group.
                if chars.next_if_eq(&SEPARATOR).is_some() && chars.peek().is_some() {
                    let _ = write!(expr, "(.*{separator})?");
                } else {
                    expr.push_str(".*");
                }
            }
            '*' => {
                let _ = write!(expr, "[^{separator}]*");
            }
            '?' => {
                let _ = write!(expr, "[^{separator}]");
            }
            '.' | '$' => {
                expr.push('\\');
                expr.push(ch);
            }
            '\\' if SEPARATOR == '\\' => expr.push_str(&separator),
            '\\' => match chars.next() {
                Some(escaped) => expr.push_str(&regex::escape(escaped.encode_utf8(&mut [0; 4]))),
                None => expr.push_str(r"\\"),
            },
            _ => expr.push(ch),
        }
    }

    expr.push('$');
    expr
}

/// Compiles `pattern` into an anchored whole-string matcher.
///
/// # Errors
///
/// Returns [`CompileError`] when the translated expression is rejected by the
/// regex engine, for example when the pattern carries an unbalanced `(`.
pub fn compile(pattern: &str) -> Result<Regex, CompileError> {
    Regex::new(&glob_to_regex(pattern)).map_err(|source| CompileError::new(pattern, source))
}

#[cfg(test)]
mod tests {
    use super::{compile, glob_to_regex};

    fn matches(pattern: &str, candidate: &str) -> bool {
        compile(pattern).expect("pattern compiles").is_match(candidate)
    }

    #[cfg(unix)]
    #[test]
    fn translation_table() {
        let cases = [
            ("baz.txt", r"^baz\.txt$"),
            ("foo/*.md", r"^foo/[^/]*\.md$"),
            ("file?.tf", r"^file[^/]\.tf$"),
            ("**", "^.*$"),
            ("**/foo", "^(.*/)?foo$"),
            ("foo/**", "^foo/.*$"),
            ("foo/**/", "^foo/.*$"),
            ("a**b", "^a.*b$"),
            ("cost$", r"^cost\$$"),
            (r"\*.txt", r"^\*\.txt$"),
            (r"trailing\", r"^trailing\\$"),
            ("[a-z].txt", r"^[a-z]\.txt$"),
        ];

        for (pattern, expected) in cases {
            assert_eq!(glob_to_regex(pattern), expected, "pattern {pattern}");
        }
    }

    #[test]
    fn literal_patterns_are_fully_anchored() {
        assert!(matches("baz.txt", "baz.txt"));
        assert!(!matches("baz.txt", "with-baz.txt"));
        assert!(!matches("baz.txt", "baz.txt.bak"));
        assert!(!matches("baz.txt", "bazztxt"));
    }

    #[cfg(unix)]
    #[test]
    fn single_star_stops_at_separator() {
        assert!(matches("*.md", "readme.md"));
        assert!(matches("*.md", ".md"));
        assert!(!matches("*.md", "docs/readme.md"));
        assert!(matches("foo/*.md", "foo/ignored-doc.md"));
        assert!(!matches("foo/*.md", "foo/otherfile"));
    }

    #[cfg(unix)]
    #[test]
    fn question_mark_matches_one_non_separator() {
        assert!(matches("v?.tf", "v1.tf"));
        assert!(!matches("v?.tf", "v10.tf"));
        assert!(!matches("a?b", "a/b"));
    }

    #[cfg(unix)]
    #[test]
    fn double_star_prefix_allows_zero_directories() {
        assert!(matches("**/foo/bar.tf", "foo/bar.tf"));
        assert!(matches("**/foo/bar.tf", "a/b/foo/bar.tf"));
        assert!(!matches("**/foo/bar.tf", "afoo/bar.tf"));
    }

    #[cfg(unix)]
    #[test]
    fn trailing_double_star_accepts_everything_below() {
        assert!(matches("logs/**", "logs/a"));
        assert!(matches("logs/**", "logs/a/b/c"));
        assert!(matches("logs/**/", "logs/a/b"));
        assert!(!matches("logs/**", "other/a"));
    }

    #[cfg(unix)]
    #[test]
    fn inner_double_star_crosses_separators() {
        assert!(matches("a**z", "a/b/c/z"));
        assert!(matches("a**z", "az"));
    }

    #[cfg(unix)]
    #[test]
    fn backslash_escapes_next_character() {
        assert!(matches(r"\*.txt", "*.txt"));
        assert!(!matches(r"\*.txt", "a.txt"));
        assert!(matches(r"\?", "?"));
        assert!(matches(r"lit\n", "litn"));
        assert!(matches(r"end\", r"end\"));
    }

    #[test]
    fn dot_and_dollar_are_literal() {
        assert!(!matches("a.b", "axb"));
        assert!(matches("$HOME", "$HOME"));
    }

    #[test]
    fn unlisted_metacharacters_pass_through() {
        assert!(matches("bar/something-[a-z].txt", "bar/something-q.txt"));
        assert!(!matches("bar/something-[a-z].txt", "bar/something-1.txt"));
        assert!(matches("a+", "aaa"));
    }

    #[test]
    fn unbalanced_group_fails_to_compile() {
        let error = compile("broken(").unwrap_err();
        assert_eq!(error.pattern(), "broken(");
    }

    #[test]
    fn multibyte_characters_are_copied() {
        assert!(matches("données/*", "données/fichier"));
        assert!(matches("?", "é"));
    }
}
