//! Naming and text helpers shared by the emitters.

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Converts a property name to the UPPER_SNAKE prefix used for its enum
/// constants.
#[must_use]
pub fn to_upper_snake_case(s: &str) -> String {
    to_snake_case(s).to_ascii_uppercase()
}

/// Sanitizes an enum literal for use in a constant name: every run of
/// non-alphanumeric characters collapses to a single separator.
#[must_use]
pub fn sanitize_constant(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            in_run = false;
        } else if !in_run {
            result.push('_');
            in_run = true;
        }
    }
    result
}

/// Word-wraps free text to the given column width.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Escapes a string for inclusion in a Rust string literal.
#[must_use]
pub fn escape_str(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if (c as u32) < 0x20 => result.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("distributionParty"), "distribution_party");
        assert_eq!(to_snake_case("qty"), "qty");
        assert_eq!(to_snake_case("OrderFulfilment"), "order_fulfilment");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("order_fulfilment"), "OrderFulfilment");
        assert_eq!(to_pascal_case("pricing"), "Pricing");
        assert_eq!(to_pascal_case("create-offer"), "CreateOffer");
    }

    #[test]
    fn test_to_upper_snake_case() {
        assert_eq!(to_upper_snake_case("distributionParty"), "DISTRIBUTION_PARTY");
        assert_eq!(to_upper_snake_case("color"), "COLOR");
    }

    #[test]
    fn test_sanitize_constant() {
        assert_eq!(sanitize_constant("24-48u"), "24_48u");
        assert_eq!(sanitize_constant("a  b!!c"), "a_b_c");
        assert_eq!(sanitize_constant("PLAIN"), "PLAIN");
        assert_eq!(sanitize_constant("-lead"), "_lead");
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);

        let lines = wrap_text("short", 120);
        assert_eq!(lines, vec!["short"]);

        assert!(wrap_text("", 120).is_empty());
    }

    #[test]
    fn test_escape_str() {
        assert_eq!(escape_str(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_str("a\\b"), "a\\\\b");
        assert_eq!(escape_str("line\nbreak"), "line\\nbreak");
    }
}
