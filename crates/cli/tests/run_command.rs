//! End-to-end tests driving `cli::run` in-process against real directories.

use test_support::TestDir;

struct Outcome {
    status: i32,
    stdout: String,
    stderr: String,
}

fn run(args: &[&str], input: &str) -> Outcome {
    let mut stdin = input.as_bytes();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = cli::run(args.iter().copied(), &mut stdin, &mut stdout, &mut stderr);
    Outcome {
        status,
        stdout: String::from_utf8(stdout).expect("stdout is UTF-8"),
        stderr: String::from_utf8(stderr).expect("stderr is UTF-8"),
    }
}

fn root(dir: &TestDir) -> &str {
    dir.path().to_str().expect("temp path is UTF-8")
}

// =============================================================================
// Help and Usage
// =============================================================================

#[test]
fn help_lists_usage_on_stdout() {
    let outcome = run(&["tfignore", "--help"], "");
    assert_eq!(outcome.status, 0);
    assert!(outcome.stdout.contains("Usage:"));
    assert!(outcome.stdout.contains("--excluded-only"));
    assert!(outcome.stderr.is_empty());
}

#[test]
fn version_reports_program_name() {
    let outcome = run(&["tfignore", "-V"], "");
    assert_eq!(outcome.status, 0);
    assert!(outcome.stdout.starts_with("tfignore "));
}

#[test]
fn missing_root_is_a_usage_error() {
    let outcome = run(&["tfignore"], "");
    assert_eq!(outcome.status, 1);
    assert!(outcome.stderr.contains("missing ROOT"));
    assert!(outcome.stderr.contains("Usage:"));
    assert!(outcome.stdout.is_empty());
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let outcome = run(&["tfignore", "--definitely-not-a-flag"], "");
    assert_eq!(outcome.status, 1);
    assert!(outcome.stderr.contains("Usage:"));
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn operands_are_classified_with_defaults() {
    let dir = TestDir::new().expect("create test dir");
    let outcome = run(
        &["tfignore", root(&dir), ".git/x", ".terraform/modules/foo", "main.tf"],
        "",
    );

    assert_eq!(outcome.status, 0);
    assert_eq!(
        outcome.stdout,
        "excluded\t.git/x\nincluded\t.terraform/modules/foo\nincluded\tmain.tf\n"
    );
}

#[test]
fn ignore_file_rules_apply() {
    let dir = TestDir::with_ignore_file("baz.txt\nfoo/*.md\n").expect("create test dir");
    let outcome = run(
        &[
            "tfignore",
            root(&dir),
            "parent/foo/baz.txt",
            "something/with-baz.txt",
            "foo/ignored-doc.md",
        ],
        "",
    );

    assert_eq!(
        outcome.stdout,
        "excluded\tparent/foo/baz.txt\nincluded\tsomething/with-baz.txt\nexcluded\tfoo/ignored-doc.md\n"
    );
}

#[test]
fn paths_are_read_from_stdin_without_operands() {
    let dir = TestDir::with_ignore_file("*.zip\n").expect("create test dir");
    let outcome = run(&["tfignore", root(&dir)], "a.zip\n\nb.tf\r\n");

    assert_eq!(outcome.status, 0);
    assert_eq!(outcome.stdout, "excluded\ta.zip\nincluded\tb.tf\n");
}

#[test]
fn excluded_only_prints_bare_paths() {
    let dir = TestDir::with_ignore_file("*.zip\n").expect("create test dir");
    let outcome = run(
        &["tfignore", "--excluded-only", root(&dir), "a.zip", "b.tf", "c/d.zip"],
        "",
    );

    assert_eq!(outcome.stdout, "a.zip\nc/d.zip\n");
}

#[test]
fn custom_ignore_file_is_honoured() {
    let dir = TestDir::new().expect("create test dir");
    dir.write_file(".packignore", b"*.bin\n").expect("write");

    let outcome = run(
        &["tfignore", "--ignore-file", ".packignore", root(&dir), "blob.bin"],
        "",
    );
    assert_eq!(outcome.stdout, "excluded\tblob.bin\n");
}

#[test]
fn summary_goes_to_stderr() {
    let dir = TestDir::with_ignore_file("*.zip\n").expect("create test dir");
    let outcome = run(
        &["tfignore", "--summary", root(&dir), "a.zip", "b.tf"],
        "",
    );

    assert_eq!(outcome.status, 0);
    assert!(outcome.stderr.contains("rules: 4"));
    assert!(outcome.stderr.contains("evaluated: 2"));
    assert!(outcome.stderr.contains("included: 1"));
    assert!(outcome.stderr.contains("excluded: 1"));
}
