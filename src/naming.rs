//! Identifier formatting for generated Dart class names.

/// Upper-case the first character, leave the rest untouched.
/// Empty input stays empty (the suffix alone never names a class on its own;
/// callers always pass a field key or an explicit root hint).
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `Capitalize(hint) + suffix`, the naming contract every generated class
/// (root, nested, and list-item) goes through.
pub fn class_name(hint: &str, suffix: &str) -> String {
    format!("{}{}", capitalize(hint), suffix)
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_ascii() {
        assert_eq!(capitalize("medications"), "Medications");
        assert_eq!(capitalize("aceInhibitors"), "AceInhibitors");
        assert_eq!(capitalize("X"), "X");
    }

    #[test]
    fn capitalize_empty_is_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_survives_utf8() {
        assert_eq!(capitalize("über"), "Über");
        // 'ß' upper-cases to the two-char "SS"
        assert_eq!(capitalize("ßig"), "SSig");
    }

    #[test]
    fn class_name_applies_suffix() {
        assert_eq!(class_name("root", "Model"), "RootModel");
        assert_eq!(class_name("labsItem", "Model"), "LabsItemModel");
        assert_eq!(class_name("root", "Dto"), "RootDto");
    }
}
