//! Command handlers for the `cmc` CLI.
//!
//! Each submodule implements one command. Shared utilities like `read_file`
//! and `render_error` live here in the module root.

use std::fmt::Write as _;
use std::io::IsTerminal;
use std::path::Path;

use cm_ir::ClassFileError;

use crate::CliError;

mod fmt;
mod parse;

pub use fmt::{
    format_directory, format_file, format_paths, format_stdin, run_format, FormatConfig,
    FormatResult, FormatSummary,
};
pub use parse::{describe, parse_file};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const BLUE: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

/// Read a file from disk. A missing file is a [`ClassFileError::NotFound`].
pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            ClassFileError::not_found(format!("file '{}'", path.display())).into()
        }
        _ => CliError::io(path, e),
    })
}

/// Render an error for the terminal. Syntax errors get the offending source
/// line with a caret under the error column.
pub(crate) fn render_error(path: &str, source: &str, error: &CliError) -> String {
    render_error_with(path, source, error, std::io::stderr().is_terminal())
}

fn render_error_with(path: &str, source: &str, error: &CliError, color: bool) -> String {
    let (error_start, blue, reset) = if color {
        (colors::ERROR, colors::BLUE, colors::RESET)
    } else {
        ("", "", "")
    };

    let mut output = String::new();
    let CliError::ClassFile(ClassFileError::Syntax {
        message,
        offset,
        line,
        column,
    }) = error
    else {
        let _ = writeln!(output, "{error_start}error{reset}: {path}: {error}");
        return output;
    };

    let _ = writeln!(output, "{error_start}error{reset}: {message}");
    let _ = writeln!(output, "  {blue}-->{reset} {path}:{line}:{column}");

    if let Some(source_line) = source_line(source, *offset) {
        let number = line.to_string();
        let padding = " ".repeat(number.len());
        let caret_padding = " ".repeat(column.saturating_sub(1) as usize);
        let _ = writeln!(output, "  {padding} {blue}|{reset}");
        let _ = writeln!(output, "  {blue}{number} |{reset} {source_line}");
        let _ = writeln!(
            output,
            "  {padding} {blue}|{reset} {caret_padding}{error_start}^{reset}"
        );
    }
    output
}

/// The line of `source` containing byte `offset`, without its line ending.
fn source_line(source: &str, offset: usize) -> Option<&str> {
    if offset > source.len() || !source.is_char_boundary(offset) {
        return None;
    }
    let start = source[..offset].rfind('\n').map_or(0, |pos| pos + 1);
    let end = source[offset..]
        .find('\n')
        .map_or(source.len(), |pos| offset + pos);
    Some(source[start..end].trim_end_matches('\r'))
}

#[cfg(test)]
mod tests;
