//! Dart model-class synthesis (single-file).
//!
//! One recursive routine over a sample JSON object: classify every field
//! once, write the class text section by section, and recurse into nested
//! object / list-of-object fields as they are discovered. Nested class texts
//! are appended after the enclosing class, depth-first in key order.
//!
//! Design goals:
//! - Pure function of (sample, name hint): no I/O, deterministic output.
//! - The four emitted sections enumerate keys in the sample's own order,
//!   identically each time (`preserve_order` keeps `serde_json::Map` honest).
//! - No shape deduplication: a shape occurring twice under different keys
//!   gets two class definitions. Accepted, not a bug.

use serde_json::{Map, Value};

use crate::classify::{FieldKind, classify};
use crate::error::Error;
use crate::naming::class_name;

/// Suffix appended to every generated class name unless overridden.
pub const DEFAULT_CLASS_SUFFIX: &str = "Model";

/// Dart class synthesizer.
pub struct Codegen {
    suffix: String,
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}

impl Codegen {
    pub fn new() -> Self {
        Self::with_suffix(DEFAULT_CLASS_SUFFIX)
    }

    /// Use a different class-name suffix (e.g. `Dto`).
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Synthesize classes for `sample`, named from `name_hint`.
    ///
    /// The sample must be a JSON object; anything else cannot yield named
    /// fields and is rejected up front.
    pub fn emit(&self, sample: &Value, name_hint: &str) -> Result<String, Error> {
        match sample {
            Value::Object(map) => Ok(self.emit_class(map, name_hint)),
            _ => Err(Error::InvalidSample),
        }
    }

    fn emit_class(&self, sample: &Map<String, Value>, name_hint: &str) -> String {
        let class = class_name(name_hint, &self.suffix);

        // Classify once per key; every section below reuses this.
        let fields: Vec<(&String, FieldKind)> = sample
            .iter()
            .map(|(key, value)| (key, classify(key, value, &self.suffix)))
            .collect();

        let mut out = String::new();
        // Nested class texts in discovery order; each entry already carries
        // its own descendants, so flattening preserves depth-first order.
        let mut nested: Vec<String> = Vec::new();

        // ---- field declarations ----
        out.push_str(&format!("class {class} {{\n"));
        for (key, kind) in &fields {
            match kind {
                FieldKind::NestedObject { shape, class } => {
                    nested.push(self.emit_class(shape, key));
                    out.push_str(&format!("  final {class} {key};\n"));
                }
                FieldKind::NestedList {
                    item_shape,
                    item_class,
                    item_hint,
                } => {
                    nested.push(self.emit_class(item_shape, item_hint));
                    out.push_str(&format!("  final List<{item_class}> {key};\n"));
                }
                FieldKind::Primitive { dart_ty } => {
                    out.push_str(&format!("  final {dart_ty} {key};\n"));
                }
            }
        }

        // ---- constructor (every field required by name) ----
        out.push_str(&format!("\n  {class}({{\n"));
        for (key, _) in &fields {
            out.push_str(&format!("    required this.{key},\n"));
        }
        out.push_str("  });\n\n");

        // ---- fromJson ----
        out.push_str(&format!(
            "  factory {class}.fromJson(Map<String, dynamic> json) {{\n"
        ));
        out.push_str(&format!("    return {class}(\n"));
        for (key, kind) in &fields {
            match kind {
                FieldKind::NestedObject { class, .. } => {
                    out.push_str(&format!(
                        "      {key}: {class}.fromJson(json['{key}']),\n"
                    ));
                }
                FieldKind::NestedList { item_class, .. } => {
                    out.push_str(&format!(
                        "      {key}: (json['{key}'] as List).map((item) => {item_class}.fromJson(item)).toList(),\n"
                    ));
                }
                // Direct lookup, no coercion or validation.
                FieldKind::Primitive { .. } => {
                    out.push_str(&format!("      {key}: json['{key}'],\n"));
                }
            }
        }
        out.push_str("    );\n  }\n\n");

        // ---- toJson ----
        out.push_str("  Map<String, dynamic> toJson() {\n");
        out.push_str("    return {\n");
        for (key, kind) in &fields {
            match kind {
                FieldKind::NestedObject { .. } => {
                    out.push_str(&format!("      '{key}': {key}.toJson(),\n"));
                }
                FieldKind::NestedList { .. } => {
                    out.push_str(&format!(
                        "      '{key}': {key}.map((item) => item.toJson()).toList(),\n"
                    ));
                }
                FieldKind::Primitive { .. } => {
                    out.push_str(&format!("      '{key}': {key},\n"));
                }
            }
        }
        out.push_str("    };\n  }\n}\n");

        // Own class first, then nested classes, blank-line separated.
        for text in nested {
            out.push('\n');
            out.push_str(&text);
        }
        out
    }
}

// ------------------------------- Tests ------------------------------------ //
