//! Chat log line extraction
//!
//! Each line is expected to look like `[timestamp] <username>> message`. Only
//! the text after the first delimiter is kept. Lines without the delimiter
//! become empty messages; they are never dropped, so the number of messages
//! always equals the number of lines.

use chatsonar_core::{Error, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Separator between the metadata prefix and the message payload
pub const DEFAULT_DELIMITER: &str = "> ";

/// Payload of a single chat log line, or `""` if it has no delimiter
pub fn extract_message<'a>(line: &'a str, delimiter: &str) -> &'a str {
    line.trim()
        .split_once(delimiter)
        .map(|(_, message)| message)
        .unwrap_or("")
}

/// Whether the trimmed line still carries the delimiter
fn has_delimiter(line: &str, delimiter: &str) -> bool {
    line.trim().contains(delimiter)
}

/// Split on `\n`, `\r\n` and lone `\r`. A final terminator does not start
/// another line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                let line = &rest[..pos];
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// One message per line of `content`
pub fn extract_messages(content: &str, delimiter: &str) -> Vec<String> {
    let mut missing = 0usize;

    let messages: Vec<String> = split_lines(content)
        .map(|line| {
            if !has_delimiter(line, delimiter) {
                missing += 1;
            }
            extract_message(line, delimiter).to_string()
        })
        .collect();

    if missing > 0 {
        warn!(
            "{} of {} lines have no '{}' delimiter and will be classified as empty messages",
            missing,
            messages.len(),
            delimiter
        );
    }

    messages
}

/// Read a UTF-8 chat log and extract every message into memory
pub fn read_messages(path: &Path, delimiter: &str) -> Result<Vec<String>> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::input(format!("cannot read {}: {}", path.display(), e)))?;
    let content = String::from_utf8(bytes)
        .map_err(|e| Error::input(format!("{} is not valid UTF-8: {}", path.display(), e)))?;

    let messages = extract_messages(&content, delimiter);
    debug!("Extracted {} messages from {}", messages.len(), path.display());

    Ok(messages)
}
