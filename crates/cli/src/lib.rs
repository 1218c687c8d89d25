#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `tfignore` command. It loads the ignore rules for a
//! configuration root and prints, for each candidate path, whether packaging
//! would include or skip it. Candidate paths come from the operands after
//! `ROOT`, or from standard input (one per line) when there are none.
//!
//! # Design
//!
//! [`run`] accepts the argument list together with handles for standard
//! input, output and error so tests can drive the full command in-process.
//! Parsing uses a [`clap`](https://docs.rs/clap/) command definition with a
//! static help text. Diagnostics from rule loading and evaluation flow through
//! `tracing` and are printed to standard error by a `tracing-subscriber`
//! formatter; `-v` raises the default level and `RUST_LOG` overrides it.
//!
//! # Errors
//!
//! Argument errors exit with status `1`. Failing to read standard input or to
//! write results exits with status `2`. A missing or unreadable ignore file is
//! not an error: the built-in defaults apply.
//!
//! # Examples
//!
//! ```
//! let mut stdin: &[u8] = b"";
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(
//!     ["tfignore", ".", ".git/HEAD", "main.tf"],
//!     &mut stdin,
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(status, 0);
//! let stdout = String::from_utf8(stdout).unwrap();
//! assert!(stdout.contains("excluded\t.git/HEAD"));
//! ```

use std::ffi::OsString;
use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use tfignore::{LoadOptions, RuleSet, debug_ignore::ExclusionTracer};
use tracing_subscriber::EnvFilter;

/// Name of the executable.
pub const PROGRAM_NAME: &str = "tfignore";

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Exit status for argument errors.
const EXIT_USAGE: i32 = 1;

/// Exit status for I/O failures on the standard streams.
const EXIT_IO: i32 = 2;

const USAGE: &str = "Usage: tfignore [OPTIONS] ROOT [PATH]...";

/// Deterministic help text describing the supported options.
const HELP_TEXT: &str = concat!(
    "Usage: tfignore [OPTIONS] ROOT [PATH]...\n",
    "\n",
    "Classify PATHs against the .terraformignore rules found in ROOT.\n",
    "Paths are relative to ROOT; a trailing '/' marks a directory. When no\n",
    "PATH is given, paths are read from standard input, one per line.\n",
    "\n",
    "Options:\n",
    "  -h, --help              Show this help message and exit.\n",
    "  -V, --version           Output version information and exit.\n",
    "  -v, --verbose           Increase log verbosity (repeatable).\n",
    "      --ignore-file=NAME  Read rules from NAME instead of .terraformignore.\n",
    "      --excluded-only     Print only the excluded paths.\n",
    "      --summary           Print include/exclude counts to standard error.\n",
);

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    verbosity: u8,
    ignore_file: Option<String>,
    excluded_only: bool,
    summary: bool,
    root: Option<PathBuf>,
    paths: Vec<String>,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable).")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("ignore-file")
                .long("ignore-file")
                .value_name("NAME")
                .help("Read rules from NAME instead of .terraformignore.")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("excluded-only")
                .long("excluded-only")
                .help("Print only the excluded paths.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Print include/exclude counts to standard error.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root")
                .value_name("ROOT")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .num_args(0..)
                .action(ArgAction::Append),
        )
}

fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let matches = clap_command().try_get_matches_from(arguments)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        verbosity: matches.get_count("verbose"),
        ignore_file: matches.get_one::<String>("ignore-file").cloned(),
        excluded_only: matches.get_flag("excluded-only"),
        summary: matches.get_flag("summary"),
        root: matches.get_one::<OsString>("root").map(PathBuf::from),
        paths: matches
            .get_many::<String>("paths")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    })
}

/// Runs the command with the supplied arguments and standard streams.
///
/// Returns the process exit status.
pub fn run<I, S, In, Out, Err>(
    arguments: I,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    In: BufRead,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdin, stdout, stderr),
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {}", error.kind());
            let _ = writeln!(stderr, "{USAGE}");
            EXIT_USAGE
        }
    }
}

fn execute<In, Out, Err>(parsed: ParsedArgs, stdin: &mut In, stdout: &mut Out, stderr: &mut Err) -> i32
where
    In: BufRead,
    Out: Write,
    Err: Write,
{
    if parsed.show_help {
        return status_of(stdout.write_all(HELP_TEXT.as_bytes()));
    }
    if parsed.show_version {
        return status_of(writeln!(stdout, "{PROGRAM_NAME} {}", env!("CARGO_PKG_VERSION")));
    }
    let Some(root) = parsed.root else {
        let _ = writeln!(stderr, "{PROGRAM_NAME}: missing ROOT operand");
        let _ = writeln!(stderr, "{USAGE}");
        return EXIT_USAGE;
    };

    init_tracing(parsed.verbosity);

    let options = match parsed.ignore_file {
        Some(name) => LoadOptions::default().with_ignore_file(name),
        None => LoadOptions::default(),
    };
    let rules = RuleSet::load_with(&root, &options);

    let mut tracer = ExclusionTracer::new();
    tracer.record_rules_loaded(rules.len());

    let outcome = if parsed.paths.is_empty() {
        classify(&rules, stdin.lines(), parsed.excluded_only, &mut tracer, stdout)
    } else {
        let operands = parsed.paths.into_iter().map(Ok);
        classify(&rules, operands, parsed.excluded_only, &mut tracer, stdout)
    };

    if parsed.summary {
        tracer.summary();
        let _ = writeln!(
            stderr,
            "rules: {}, evaluated: {}, included: {}, excluded: {}",
            tracer.rules_loaded(),
            tracer.total_evaluated(),
            tracer.total_included(),
            tracer.total_excluded(),
        );
    }

    match outcome {
        Ok(()) => 0,
        Err(failure) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {failure}");
            EXIT_IO
        }
    }
}

#[derive(Debug)]
enum Failure {
    Input(io::Error),
    Output(io::Error),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(error) => write!(f, "failed to read paths from standard input: {error}"),
            Self::Output(error) => write!(f, "failed to write results: {error}"),
        }
    }
}

fn classify<P, Out>(
    rules: &RuleSet,
    paths: P,
    excluded_only: bool,
    tracer: &mut ExclusionTracer,
    stdout: &mut Out,
) -> Result<(), Failure>
where
    P: Iterator<Item = io::Result<String>>,
    Out: Write,
{
    for path in paths {
        let path = path.map_err(Failure::Input)?;
        let path = path.trim_end_matches('\r');
        if path.is_empty() {
            continue;
        }

        let excluded = rules.is_excluded(path);
        tracer.record_evaluation(excluded);

        let written = match (excluded, excluded_only) {
            (true, true) => writeln!(stdout, "{path}"),
            (false, true) => Ok(()),
            (true, false) => writeln!(stdout, "excluded\t{path}"),
            (false, false) => writeln!(stdout, "included\t{path}"),
        };
        written.map_err(Failure::Output)?;
    }
    stdout.flush().map_err(Failure::Output)
}

/// Installs the process-wide `tracing` subscriber writing to standard error.
///
/// `RUST_LOG` takes precedence over `verbosity`. Later calls are no-ops.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,tfignore=info",
        2 => "warn,tfignore=debug",
        _ => "warn,tfignore=trace",
    }
}

fn status_of(result: io::Result<()>) -> i32 {
    if result.is_ok() { 0 } else { EXIT_IO }
}

/// Converts a status returned by [`run`] into a process exit code.
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
