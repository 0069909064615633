//! Per-field classification, computed once and reused by every emission pass.
//!
//! The synthesizer writes four sections per class (field declarations,
//! constructor, `fromJson`, `toJson`) and each one dispatches on what kind of
//! value the field holds. Classifying up front keeps a single source of truth
//! for that dispatch instead of re-inspecting the sample value per section.

use serde_json::{Map, Value};

use crate::naming::class_name;
use crate::type_map::dart_type;

/// What one field of a sample object turned out to be.
#[derive(Debug)]
pub enum FieldKind<'a> {
    /// Anything the type mapper can name directly: scalars, lists of
    /// scalars/lists, empty lists, nulls.
    Primitive { dart_ty: String },

    /// A nested object; a dedicated class is synthesized from `shape`.
    NestedObject {
        shape: &'a Map<String, Value>,
        class: String,
    },

    /// A non-empty array whose first element is an object; an item class is
    /// synthesized from that first element.
    NestedList {
        item_shape: &'a Map<String, Value>,
        item_class: String,
        item_hint: String,
    },
}

pub fn classify<'a>(key: &str, value: &'a Value, suffix: &str) -> FieldKind<'a> {
    match value {
        Value::Object(shape) => FieldKind::NestedObject {
            shape,
            class: class_name(key, suffix),
        },
        Value::Array(items) => match items.first() {
            Some(Value::Object(item_shape)) => {
                let item_hint = format!("{key}Item");
                FieldKind::NestedList {
                    item_shape,
                    item_class: class_name(&item_hint, suffix),
                    item_hint,
                }
            }
            // Empty arrays and arrays of non-objects take the primitive path.
            _ => FieldKind::Primitive {
                dart_ty: dart_type(key, value, suffix),
            },
        },
        _ => FieldKind::Primitive {
            dart_ty: dart_type(key, value, suffix),
        },
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_fields_are_nested() {
        let v = json!({"x": 1});
        match classify("address", &v, "Model") {
            FieldKind::NestedObject { class, shape } => {
                assert_eq!(class, "AddressModel");
                assert!(shape.contains_key("x"));
            }
            other => panic!("expected NestedObject, got {other:?}"),
        }
    }

    #[test]
    fn array_of_objects_is_nested_list() {
        let v = json!([{"n": "foo"}, {"n": "bar"}]);
        match classify("items", &v, "Model") {
            FieldKind::NestedList {
                item_class,
                item_hint,
                item_shape,
            } => {
                assert_eq!(item_class, "ItemsItemModel");
                assert_eq!(item_hint, "itemsItem");
                // only the first element drives the item shape
                assert_eq!(item_shape.get("n"), Some(&json!("foo")));
            }
            other => panic!("expected NestedList, got {other:?}"),
        }
    }

    #[test]
    fn scalars_and_scalar_arrays_are_primitive() {
        for (v, ty) in [
            (json!(7), "int"),
            (json!("x"), "String"),
            (json!([1, 2]), "List<int>"),
            (json!([]), "List<dynamic>"),
            (json!(null), "dynamic"),
        ] {
            match classify("k", &v, "Model") {
                FieldKind::Primitive { dart_ty } => assert_eq!(dart_ty, ty),
                other => panic!("expected Primitive for {v}, got {other:?}"),
            }
        }
    }
}
