//! Command implementations for the flightdeck CLI

pub mod decode;
pub mod fields;
pub mod replay;

use crate::error::CliError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Argument value that selects standard input.
pub const STDIN: &str = "-";

/// Read all lines of `input`, a file path or `-` for stdin.
///
/// A leading UTF-8 byte order mark is dropped; the game writes one on some
/// platforms.
pub fn read_input(input: &str) -> Result<Vec<String>, CliError> {
    let mut lines = if input == STDIN {
        read_lines(io::stdin().lock())?
    } else {
        let path = Path::new(input);
        if !path.is_file() {
            return Err(CliError::InputNotFound(input.to_string()));
        }
        read_lines(BufReader::new(File::open(path)?))?
    };

    if let Some(first) = lines.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }
    Ok(lines)
}

fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}
