//! Recursive classification of JSON values by their type discriminator

use serde_json::Value;

use crate::classify::TypeBucket;

/// Object key whose string value classifies the containing object
pub const TYPE_KEY: &str = "type";

/// Walk `value` depth-first and record every object carrying a string-valued
/// `type` key into `bucket`.
///
/// A match never stops the descent: the matched object's own fields are
/// traversed too, so type-tagged objects nested inside other type-tagged
/// objects are captured as independent entries. Objects whose `type` value
/// is not a string (or absent) contribute nothing but are still descended
/// into. Scalars are leaves.
///
/// Object fields are visited in document order (`serde_json` is built with
/// `preserve_order`), which keeps the per-type object order reproducible
/// for a given input. Inputs are assumed to be trees; there is no cycle
/// detection.
pub fn classify_value(value: &Value, bucket: &mut TypeBucket) {
    match value {
        Value::Object(fields) => {
            if let Some(Value::String(type_name)) = fields.get(TYPE_KEY) {
                bucket.push(type_name, value.clone());
            }
            for child in fields.values() {
                classify_value(child, bucket);
            }
        }
        Value::Array(items) => {
            for item in items {
                classify_value(item, bucket);
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}

/// Classify `value` into a fresh bucket
pub fn classify(value: &Value) -> TypeBucket {
    let mut bucket = TypeBucket::new();
    classify_value(value, &mut bucket);
    bucket
}
