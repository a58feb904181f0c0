//! The `fmt` command: regenerate class files in canonical layout.
//!
//! Supports single files, directories, and stdin. Directories are searched
//! recursively for `.php` files and formatted in parallel.

#![allow(
    clippy::struct_excessive_bools,
    reason = "FormatConfig has standard CLI config bool fields"
)]

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::debug;

use super::{read_file, render_error};
use crate::CliError;

/// Configuration for the format command.
#[derive(Default)]
pub struct FormatConfig {
    /// Check if files are formatted without modifying them.
    /// Exit code 1 if any file would be modified.
    pub check: bool,
    /// Show diff output instead of modifying files.
    pub diff: bool,
    /// Read from stdin and write to stdout.
    pub stdin: bool,
}

/// Result of formatting a single file.
#[derive(Debug, PartialEq, Eq)]
pub enum FormatResult {
    /// File was already canonical.
    Unchanged,
    /// File was rewritten.
    Formatted,
    /// File would be rewritten (check or diff mode).
    WouldFormat,
}

/// Per-run totals.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormatSummary {
    pub formatted: usize,
    pub unchanged: usize,
    pub errors: usize,
}

/// Parse and regenerate `source`.
fn regenerate(source: &str) -> Result<String, CliError> {
    let file = cm_parse::parse(source)?;
    Ok(cm_fmt::generate(&file))
}

/// Format a single class file.
///
/// Parse errors are rendered into the returned error string together with
/// the source line they point at.
pub fn format_file(path: &Path, config: &FormatConfig) -> Result<FormatResult, String> {
    let display = path.display().to_string();
    let content = read_file(path).map_err(|e| render_error(&display, "", &e))?;
    let formatted = regenerate(&content).map_err(|e| render_error(&display, &content, &e))?;

    if formatted == content {
        return Ok(FormatResult::Unchanged);
    }
    if config.check {
        return Ok(FormatResult::WouldFormat);
    }
    if config.diff {
        print!("{}", line_diff(&display, &content, &formatted));
        return Ok(FormatResult::WouldFormat);
    }

    std::fs::write(path, &formatted)
        .map_err(|e| render_error(&display, "", &CliError::io(path, e)))?;
    debug!(path = %path.display(), "formatted");
    Ok(FormatResult::Formatted)
}

/// Format content from stdin and write it to stdout.
///
/// Returns `false` if the input could not be read or parsed.
pub fn format_stdin() -> bool {
    let mut content = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut content) {
        eprintln!("Error reading from stdin: {e}");
        return false;
    }
    match regenerate(&content) {
        Ok(formatted) => {
            print!("{formatted}");
            true
        }
        Err(e) => {
            eprint!("{}", render_error("<stdin>", &content, &e));
            false
        }
    }
}

/// A minimal unified-style diff: each changed region is printed with up to
/// two lines of leading context.
pub(crate) fn line_diff(path: &str, original: &str, formatted: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let _ = writeln!(out, "--- {path}");
    let _ = writeln!(out, "+++ {path}");

    let original_lines: Vec<&str> = original.lines().collect();
    let formatted_lines: Vec<&str> = formatted.lines().collect();
    let max_lines = original_lines.len().max(formatted_lines.len());

    let mut i = 0;
    while i < max_lines {
        if original_lines.get(i) == formatted_lines.get(i) {
            i += 1;
            continue;
        }

        let start = i.saturating_sub(2);
        let end = (i + 3).min(max_lines);
        let _ = writeln!(
            out,
            "@@ -{},{} +{},{} @@",
            start + 1,
            end - start,
            start + 1,
            end - start
        );
        for j in start..end {
            match (original_lines.get(j), formatted_lines.get(j)) {
                (Some(o), Some(f)) if o == f => {
                    let _ = writeln!(out, " {o}");
                }
                (o, f) => {
                    if let Some(o) = o {
                        let _ = writeln!(out, "-{o}");
                    }
                    if let Some(f) = f {
                        let _ = writeln!(out, "+{f}");
                    }
                }
            }
        }
        i = end;
    }
    out
}

/// Collect `.php` files under `dir`, skipping hidden entries and `vendor/`.
pub(crate) fn collect_php_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    visit_php_files(dir, &mut files);
    files.sort();
    files
}

fn visit_php_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory '{}': {e}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') || name == "vendor" {
                continue;
            }
        }

        if path.is_dir() {
            visit_php_files(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "php") {
            files.push(path);
        }
    }
}

/// Thread-safe outcome counters shared by parallel workers.
#[derive(Default)]
struct Counters {
    formatted: AtomicUsize,
    unchanged: AtomicUsize,
    errors: AtomicUsize,
}

impl Counters {
    fn record(&self, path: &Path, result: Result<FormatResult, String>, config: &FormatConfig) {
        match result {
            Ok(FormatResult::Formatted) => {
                println!("Formatted: {}", path.display());
                self.formatted.fetch_add(1, Ordering::Relaxed);
            }
            Ok(FormatResult::WouldFormat) => {
                if config.check {
                    println!("Would format: {}", path.display());
                }
                self.formatted.fetch_add(1, Ordering::Relaxed);
            }
            Ok(FormatResult::Unchanged) => {
                self.unchanged.fetch_add(1, Ordering::Relaxed);
            }
            Err(message) => {
                eprint!("{message}");
                self.errors.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn summary(self) -> FormatSummary {
        FormatSummary {
            formatted: self.formatted.into_inner(),
            unchanged: self.unchanged.into_inner(),
            errors: self.errors.into_inner(),
        }
    }
}

/// Format all class files in a directory recursively, in parallel.
pub fn format_directory(dir: &Path, config: &FormatConfig) -> FormatSummary {
    let files = collect_php_files(dir);
    debug!(dir = %dir.display(), files = files.len(), "formatting directory");

    let counters = Counters::default();
    files.par_iter().for_each(|path| {
        counters.record(path, format_file(path, config), config);
    });
    counters.summary()
}

/// Format every path, returning the combined totals.
///
/// A path that is neither a directory nor a readable file is reported as an
/// error and counted.
pub fn format_paths(paths: &[PathBuf], config: &FormatConfig) -> FormatSummary {
    let counters = Counters::default();
    let mut total = FormatSummary::default();

    for path in paths {
        if path.is_dir() {
            let summary = format_directory(path, config);
            total.formatted += summary.formatted;
            total.unchanged += summary.unchanged;
            total.errors += summary.errors;
        } else {
            counters.record(path, format_file(path, config), config);
        }
    }

    let files = counters.summary();
    total.formatted += files.formatted;
    total.unchanged += files.unchanged;
    total.errors += files.errors;
    total
}

/// Run the format command. Returns the process exit code.
pub fn run_format(args: &[String]) -> i32 {
    let mut config = FormatConfig::default();
    let mut paths: Vec<PathBuf> = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--check" => config.check = true,
            "--diff" => config.diff = true,
            "--stdin" => config.stdin = true,
            "--help" | "-h" => {
                print_fmt_help();
                return 0;
            }
            arg if arg.starts_with('-') => {
                eprintln!("Unknown option: {arg}");
                eprintln!("Run 'cmc fmt --help' for usage");
                return 1;
            }
            _ => paths.push(PathBuf::from(arg)),
        }
    }

    if config.stdin {
        if !paths.is_empty() || config.check || config.diff {
            eprintln!("--stdin cannot be combined with paths, --check or --diff");
            return 1;
        }
        return i32::from(!format_stdin());
    }

    if paths.is_empty() {
        paths.push(PathBuf::from("."));
    }

    let summary = format_paths(&paths, &config);

    if paths.len() > 1 || paths.iter().any(|p| p.is_dir()) {
        let verb = if config.check { "would format" } else { "formatted" };
        if summary.formatted > 0 || summary.unchanged > 0 {
            println!("\n{} {verb}, {} unchanged", summary.formatted, summary.unchanged);
        }
    }

    if summary.errors > 0 || (config.check && summary.formatted > 0) {
        1
    } else {
        0
    }
}

fn print_fmt_help() {
    println!("Format class files");
    println!();
    println!("Usage: cmc fmt [options] [paths...]");
    println!();
    println!("Arguments:");
    println!("  paths        Files or directories to format (default: .)");
    println!();
    println!("Options:");
    println!("  --check      Check if files are formatted (exit 1 if not)");
    println!("  --diff       Show diff output instead of modifying files");
    println!("  --stdin      Read from stdin, write to stdout");
    println!("  --help       Show this help message");
    println!();
    println!("Directories are searched for .php files; hidden entries and");
    println!("vendor/ are skipped.");
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests panic on unexpected state for clear failure messages"
)]
