//! Output artifact shapes and file naming

use serde::Serialize;
use serde_json::{Map, Value};

/// One per-type output document, for a single input document or the merged
/// scope.
#[derive(Debug, Clone, Serialize)]
pub struct TypeArtifact {
    #[serde(rename = "type")]
    pub type_name: String,
    pub count: usize,
    pub items: Vec<Value>,
}

impl TypeArtifact {
    /// Build an artifact; `count` always equals `items.len()`
    pub fn new(type_name: &str, items: Vec<Value>) -> Self {
        Self {
            type_name: type_name.to_string(),
            count: items.len(),
            items,
        }
    }

    /// Serialize pretty-printed. Non-ASCII text is emitted literally.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// The frequency summary written once per run
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_types: usize,
    /// Type name to aggregate count, in descending-count order
    pub types: Map<String, Value>,
}

impl Summary {
    /// Build from `(type name, count)` pairs already in output order.
    ///
    /// The map preserves insertion order when serialized, so the pairs'
    /// order is the order readers see.
    pub fn from_counts(counts: &[(String, usize)]) -> Self {
        let mut types = Map::new();
        for (name, count) in counts {
            types.insert(name.clone(), Value::from(*count));
        }
        Self {
            total_types: counts.len(),
            types,
        }
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Turn a type name into a usable file name: path separators become `_`,
/// `.json` is appended
pub fn safe_file_name(type_name: &str) -> String {
    let safe: String = type_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}.json", safe)
}
