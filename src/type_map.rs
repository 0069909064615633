//! Dart type names for sample values.
//!
//! Maps one observed JSON value to the Dart type its field gets. Arrays
//! recurse on the first element only (arrays of arrays work; heterogeneous
//! arrays are out of scope). Objects reached here — i.e. through array-element
//! recursion, since the synthesizer special-cases object fields before asking
//! us — name the nested class derived from the field key.

use serde_json::{Number, Value};

use crate::naming::class_name;

pub fn dart_type(key: &str, value: &Value, suffix: &str) -> String {
    match value {
        Value::Number(n) => {
            if is_integral(n) { "int".into() } else { "double".into() }
        }
        Value::Bool(_) => "bool".into(),
        Value::String(_) => "String".into(),
        Value::Array(items) => match items.first() {
            Some(first) => format!("List<{}>", dart_type(key, first, suffix)),
            // Empty array: element type is unresolvable from the sample.
            None => "List<dynamic>".into(),
        },
        Value::Object(_) => class_name(key, suffix),
        Value::Null => "dynamic".into(),
    }
}

/// Whole-valued numbers classify as `int`. This intentionally sends a
/// fractional-looking sample that happens to be whole, e.g. `5.0`, down the
/// `int` path as well — a known limitation of single-sample inference, kept
/// as observed behavior rather than "fixed."
fn is_integral(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64().map(|f| f.fract() == 0.0).unwrap_or(false)
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ty(key: &str, v: &Value) -> String {
        dart_type(key, v, "Model")
    }

    #[test]
    fn scalars() {
        assert_eq!(ty("n", &json!(5)), "int");
        assert_eq!(ty("n", &json!(5.5)), "double");
        assert_eq!(ty("b", &json!(true)), "bool");
        assert_eq!(ty("s", &json!("hi")), "String");
        assert_eq!(ty("z", &json!(null)), "dynamic");
    }

    #[test]
    fn whole_valued_float_classifies_as_int() {
        // documented heuristic limitation, asserted on purpose
        assert_eq!(ty("n", &json!(5.0)), "int");
        assert_eq!(ty("n", &json!(-3.0)), "int");
    }

    #[test]
    fn arrays_infer_from_first_element() {
        assert_eq!(ty("xs", &json!([1, 2, 3])), "List<int>");
        assert_eq!(ty("xs", &json!(["a"])), "List<String>");
        // arrays of arrays recurse
        assert_eq!(ty("grid", &json!([[1.5, 2.5]])), "List<List<double>>");
    }

    #[test]
    fn empty_array_is_dynamic_list() {
        assert_eq!(ty("tags", &json!([])), "List<dynamic>");
    }

    #[test]
    fn object_falls_back_to_nested_class_name() {
        // reached via array-element recursion in practice
        assert_eq!(ty("owner", &json!({"id": 1})), "OwnerModel");
    }
}
