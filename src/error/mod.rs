//! Error types and handling infrastructure for the classification pipeline

use std::fmt;
use std::path::PathBuf;

/// Core error kinds for pipeline operations.
///
/// A missing or zero-length input file is not represented here: the loader
/// reports it as "nothing to do" and the pipeline skips the document.
#[derive(Debug, thiserror::Error)]
pub enum SiftErrorKind {
    #[error("JSON parse error: {message}")]
    JsonParse {
        message: String,
        location: Option<(usize, usize)>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl SiftErrorKind {
    pub fn json_parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::JsonParse { message, location }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for pipeline operations
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{kind}")]
    Pipeline {
        kind: SiftErrorKind,
        source: Option<anyhow::Error>,
    },
}

impl SiftError {
    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::Parse(ParseError::new(message, location))
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Pipeline {
            kind: SiftErrorKind::io(message, path),
            source: None,
        }
    }

    pub fn configuration(message: String) -> Self {
        Self::Pipeline {
            kind: SiftErrorKind::configuration(message),
            source: None,
        }
    }

    pub fn pipeline(kind: SiftErrorKind) -> Self {
        Self::Pipeline { kind, source: None }
    }

    pub fn pipeline_with_source(kind: SiftErrorKind, source: anyhow::Error) -> Self {
        Self::Pipeline {
            kind,
            source: Some(source),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("JSON parse error: {}", err.message)
                }
            }
            Self::Pipeline { kind, .. } => match kind {
                SiftErrorKind::Io {
                    message,
                    path: Some(path),
                } => {
                    format!("IO error on {}: {}", path.display(), message)
                }
                _ => self.to_string(),
            },
        }
    }

    /// True when the error was caused by malformed input rather than the
    /// environment (filesystem, configuration).
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::Parse(_)
                | Self::Pipeline {
                    kind: SiftErrorKind::JsonParse { .. },
                    ..
                }
        )
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for pipeline operations
pub type SiftResult<T> = Result<T, SiftError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
