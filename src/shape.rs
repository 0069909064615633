//! Inferred-shape debug view.
//!
//! Mirrors the sample document as a JSON value with every leaf replaced by
//! the Dart type its field would get. Handy for eyeballing what the
//! synthesizer is about to name before generating any code.

use serde_json::{Map, Value};

use crate::type_map::dart_type;

/// Build the debug view for `value` observed under field `key`.
pub fn describe(key: &str, value: &Value, suffix: &str) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (k, v) in map {
                out.insert(k.clone(), describe(k, v, suffix));
            }
            Value::Object(out)
        }
        Value::Array(items) => match items.first() {
            // one representative element; the first drives inference anyway
            Some(first) => Value::Array(vec![describe(key, first, suffix)]),
            None => Value::String(dart_type(key, value, suffix)),
        },
        leaf => Value::String(dart_type(key, leaf, suffix)),
    }
}

// ------------------------------- Tests ------------------------------------ //
