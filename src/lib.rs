//! typesift
//!
//! A Rust CLI tool and library for cataloging JSON documents by their
//! string-valued `type` discriminator fields: per-document and merged
//! per-type catalogs plus a frequency summary.

// Allow dead code for library exports that may not be used by the binary yet
#![allow(dead_code)]

pub mod classify;
pub mod cli;
pub mod error;
pub mod parser;
pub mod pipeline;

// Re-export commonly used types
pub use classify::{classify, classify_value, RunReport, TypeBucket};
pub use error::{ParseError, SiftError, SiftErrorKind, SiftResult};
pub use pipeline::{run, DocumentSource, SiftConfig, Summary, TypeArtifact};

/// Classify a parsed JSON value into a fresh type bucket
pub fn sift_json(json: &serde_json::Value) -> TypeBucket {
    classify::classify(json)
}

/// Classify raw JSON text into a fresh type bucket
pub fn sift_str(json: &str) -> Result<TypeBucket, ParseError> {
    let value = parser::parse_json(json)?;
    Ok(classify::classify(&value))
}
