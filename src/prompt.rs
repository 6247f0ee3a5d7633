use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use crate::error::{Error, Result};

pub const KEYWORD_PROMPT: &str = "Enter a keyword (e.g. 'tennis'): ";
pub const LIMIT_PROMPT: &str = "Enter the number of results: ";

pub fn parse_keyword(raw: &str) -> Result<String> {
    let keyword = raw.trim();
    if keyword.is_empty() {
        return Err(Error::Input("keyword must not be empty".to_string()));
    }

    Ok(keyword.to_string())
}

pub fn parse_limit(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();

    match trimmed.parse::<u32>() {
        Ok(limit) if limit > 0 => Ok(limit),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(Error::Input(format!(
            "result count is too large (at most {}), got: '{}'",
            u32::MAX,
            trimmed
        ))),
        _ => Err(Error::Input(format!(
            "result count must be a positive number, got: '{}'",
            trimmed
        ))),
    }
}

pub fn read_keyword<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<String> {
    let raw = ask(reader, writer, KEYWORD_PROMPT)?;
    parse_keyword(&raw)
}

pub fn read_limit<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<u32> {
    let raw = ask(reader, writer, LIMIT_PROMPT)?;
    parse_limit(&raw)
}

/// Prints `prompt` and reads one line. EOF yields an empty string.
fn ask<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<String> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| Error::Input(format!("failed to read from stdin: {}", e)))?;

    Ok(line)
}
