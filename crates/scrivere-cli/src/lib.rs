// scrivere-cli: shared utilities for CLI tools.

pub mod pdf;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use scrivere_it::handle::{ScrivereError, ScrivereHandle};
use tracing::debug;

/// Rules file name looked up inside configuration directories.
const RULES_FILE: &str = "rules.json";

/// Environment variable pointing at a rules file or a directory holding one.
const RULES_ENV: &str = "SCRIVERE_RULES_PATH";

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SCRIVERE_LOG";

/// Install the stderr log subscriber, filtered by `SCRIVERE_LOG`
/// (default: `warn`).
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Create a ScrivereHandle, loading custom rule tables if any are found.
///
/// Search order:
/// 1. `rules_path` argument (if provided; must exist)
/// 2. `SCRIVERE_RULES_PATH` environment variable (file, or directory with `rules.json`)
/// 3. `~/.scrivere/rules.json`
/// 4. Built-in Italian tables
pub fn load_handle(rules_path: Option<&str>) -> Result<ScrivereHandle, String> {
    if let Some(p) = rules_path {
        return read_rules(Path::new(p));
    }

    for path in build_search_paths() {
        if path.is_file() {
            return read_rules(&path);
        }
    }

    debug!("no rules file found, using built-in tables");
    Ok(ScrivereHandle::new())
}

fn read_rules(path: &Path) -> Result<ScrivereHandle, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    debug!(path = %path.display(), "loading rule tables");
    ScrivereHandle::from_json_rules(&json)
        .map_err(|e: ScrivereError| format!("{}: {e}", path.display()))
}

/// Build the list of candidate rules files.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(RULES_ENV) {
        paths.push(PathBuf::from(&env_path));
        paths.push(PathBuf::from(&env_path).join(RULES_FILE));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".scrivere").join(RULES_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Remove an option taking a value (`--name=VALUE`, `--name VALUE` or
/// `-n VALUE`) from the args.
///
/// Returns `(value, remaining_args)`. The last occurrence wins.
pub fn take_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(v) => value = Some(v.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `--rules=PATH` or `-r PATH` argument from command line args.
pub fn parse_rules_path(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--rules", "-r")
}

/// Remove a boolean flag from the args. Returns whether it was present.
pub fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}

/// Read a whole file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(p) if p != "-" => {
            std::fs::read_to_string(p).map_err(|e| format!("failed to read {p}: {e}"))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("error reading stdin: {e}"))?;
            Ok(buf)
        }
    }
}

/// File name for a PDF export named after `title`. Path separators are
/// replaced so the file always lands in the current directory.
pub fn pdf_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect();
    format!("{stem}.pdf")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
