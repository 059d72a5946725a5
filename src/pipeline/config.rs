//! Configuration for a classification run

use std::path::{Path, PathBuf};

/// One input document: a display name and the file it is read from.
///
/// The name doubles as the per-document output subdirectory, so it may not
/// contain path separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    pub name: String,
    pub path: PathBuf,
}

impl DocumentSource {
    pub fn new(name: &str, path: PathBuf) -> Self {
        Self {
            name: name.to_string(),
            path,
        }
    }

    /// Derive the display name from the file stem
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| format!("cannot derive a document name from {}", path.display()))?;
        Ok(Self::new(stem, path.to_path_buf()))
    }
}

/// Pipeline configuration options.
///
/// Built once at startup and never mutated afterwards; the runner only
/// borrows it.
#[derive(Debug, Clone)]
pub struct SiftConfig {
    /// Input documents in processing order
    pub documents: Vec<DocumentSource>,
    /// Root directory for all output artifacts
    pub output_root: PathBuf,
    /// Suppress non-error progress output
    pub quiet: bool,
}

impl SiftConfig {
    pub fn new(output_root: PathBuf) -> Self {
        Self {
            documents: Vec::new(),
            output_root,
            quiet: false,
        }
    }

    /// Append a single document source
    pub fn with_document(mut self, source: DocumentSource) -> Self {
        self.documents.push(source);
        self
    }

    /// Replace the document list
    pub fn with_documents(mut self, documents: Vec<DocumentSource>) -> Self {
        self.documents = documents;
        self
    }

    /// Enable/disable quiet mode
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.output_root.as_os_str().is_empty() {
            return Err("Output root must not be empty".to_string());
        }

        for source in &self.documents {
            if source.name.is_empty() {
                return Err(format!(
                    "Document for {} has an empty name",
                    source.path.display()
                ));
            }
            if source.name.contains('/') || source.name.contains('\\') {
                return Err(format!(
                    "Document name '{}' must not contain path separators",
                    source.name
                ));
            }
        }

        Ok(())
    }
}
