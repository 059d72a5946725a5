//! Input document loading and parsing

pub mod discovery;

use serde_json::Value;
use std::fs;

use crate::error::{ParseError, ParseResult, SiftError, SiftResult};
use crate::pipeline::DocumentSource;

/// Load and parse one input document.
///
/// Returns `Ok(None)` when the file is absent or zero-length; both are skip
/// conditions for the pipeline, not errors. Anything else that goes wrong
/// (unreadable file, non-UTF-8 content, malformed JSON) is fatal.
pub fn load_document(source: &DocumentSource) -> SiftResult<Option<Value>> {
    let metadata = match fs::metadata(&source.path) {
        Ok(metadata) => metadata,
        Err(_) => return Ok(None),
    };
    if !metadata.is_file() || metadata.len() == 0 {
        return Ok(None);
    }

    let content = fs::read_to_string(&source.path)
        .map_err(|e| SiftError::io(e.to_string(), Some(source.path.clone())))?;

    let value = parse_json(&content).map_err(SiftError::Parse)?;
    Ok(Some(value))
}

/// Parse JSON text, capturing the error location when parsing fails
pub fn parse_json(content: &str) -> ParseResult<Value> {
    serde_json::from_str(content).map_err(|e| {
        let raw = e.to_string();
        // serde_json appends " at line L column C"; the accessors carry the
        // same information, so keep the message itself bare
        let message = raw.split(" at line").next().unwrap_or(&raw).to_string();
        ParseError::new(message, Some((e.line(), e.column())))
            .with_preview(error_preview(content, e.line()))
    })
}

/// The offending source line, trimmed, for error reporting
fn error_preview(content: &str, line: usize) -> String {
    content
        .lines()
        .nth(line.saturating_sub(1))
        .map(|l| l.trim().to_string())
        .unwrap_or_default()
}
