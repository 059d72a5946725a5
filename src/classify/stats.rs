//! Run-level statistics for classification pipelines

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-document outcome recorded while the pipeline runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Display name of the document (also its output subdirectory)
    pub name: String,
    /// Distinct types found in the document
    pub type_count: usize,
    /// Matched objects found in the document
    pub object_count: usize,
}

/// Summary of a full pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Documents that were read, classified, and written
    pub documents_processed: usize,
    /// Documents skipped because the file was missing or empty
    pub documents_skipped: usize,
    /// Distinct types across the aggregate of all documents
    pub total_types: usize,
    /// Matched objects across the aggregate of all documents
    pub total_objects: usize,
    /// Per-document breakdown in processing order
    pub per_document: Vec<DocumentReport>,
    /// Wall-clock duration of the run in milliseconds
    pub duration_ms: u64,
    /// Timestamp of when the report was collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for RunReport {
    fn default() -> Self {
        Self {
            documents_processed: 0,
            documents_skipped: 0,
            total_types: 0,
            total_objects: 0,
            per_document: Vec::new(),
            duration_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl RunReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a processed document
    pub fn record_document(&mut self, name: &str, type_count: usize, object_count: usize) {
        self.documents_processed += 1;
        self.per_document.push(DocumentReport {
            name: name.to_string(),
            type_count,
            object_count,
        });
    }

    /// Record a skipped document (missing or empty input file)
    pub fn record_skip(&mut self) {
        self.documents_skipped += 1;
    }

    /// Finalize aggregate totals and timing
    pub fn finish(&mut self, total_types: usize, total_objects: usize, elapsed: Duration) {
        self.total_types = total_types;
        self.total_objects = total_objects;
        self.duration_ms = elapsed.as_millis() as u64;
        self.collected_at = chrono::Utc::now();
    }

    /// Get a formatted one-line summary
    pub fn summary_line(&self) -> String {
        format!(
            "Classified {} objects into {} types across {} documents ({} skipped) in {}ms",
            self.total_objects,
            self.total_types,
            self.documents_processed,
            self.documents_skipped,
            self.duration_ms
        )
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
