//! DOT formatting for node and edge declarations.

use std::borrow::Cow;
use std::fmt::Write;

use crate::attrs::Attributes;

/// Indentation of declarations inside the graph body.
pub const BODY_INDENT: usize = 1;

/// Escape special characters for DOT labels.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// Render an identifier, quoting it unless it is a plain DOT ID or numeral.
pub fn format_id(id: &str) -> Cow<'_, str> {
    if is_plain_id(id) || is_numeral(id) {
        Cow::Borrowed(id)
    } else {
        Cow::Owned(format!("\"{}\"", escape_label(id)))
    }
}

fn is_plain_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_numeral(id: &str) -> bool {
    let digits = id.strip_prefix('-').unwrap_or(id);
    let mut seen_digit = false;
    let mut seen_dot = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

/// Write `[shape=..,style=..,color=..,label=".."]` for non-empty attributes.
pub fn write_attrs(output: &mut String, attrs: &Attributes) {
    let mut first = true;
    let mut sep = |output: &mut String| {
        if !first {
            output.push(',');
        }
        first = false;
    };

    output.push('[');
    for (key, value) in [
        ("shape", &attrs.shape),
        ("style", &attrs.style),
        ("color", &attrs.color),
    ] {
        if let Some(value) = value {
            sep(output);
            let _ = write!(output, "{key}={}", format_id(value));
        }
    }
    if let Some(label) = &attrs.label {
        sep(output);
        let _ = write!(output, "label=\"{}\"", escape_label(label));
    }
    output.push(']');
}

/// Append a node declaration line.
pub fn write_node(output: &mut String, id: &str, attrs: Option<&Attributes>) {
    write_indent(output, BODY_INDENT);
    output.push_str(&format_id(id));
    if let Some(attrs) = attrs {
        output.push(' ');
        write_attrs(output, attrs);
    }
    output.push_str(";\n");
}

/// Append an edge declaration line.
pub fn write_edge(output: &mut String, from: &str, to: &str, attrs: Option<&Attributes>) {
    write_indent(output, BODY_INDENT);
    let _ = write!(output, "{} -> {}", format_id(from), format_id(to));
    if let Some(attrs) = attrs {
        output.push(' ');
        write_attrs(output, attrs);
    }
    output.push_str(";\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_id() {
        assert_eq!(format_id("abc_1"), "abc_1");
        assert_eq!(format_id("328406"), "328406");
        assert_eq!(format_id("-2.5"), "-2.5");
        assert_eq!(format_id("12abc"), "\"12abc\"");
        assert_eq!(format_id("has space"), "\"has space\"");
        assert_eq!(format_id(""), "\"\"");
        assert_eq!(format_id("a\"b"), "\"a\\\"b\"");
    }

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label("a \"b\"\nc"), "a \\\"b\\\"\\nc");
    }

    #[test]
    fn test_write_node() {
        let mut out = String::new();
        write_node(&mut out, "A", None);
        let attrs = Attributes::labeled("Aspirin [IN]")
            .with_shape("box")
            .with_style("rounded,filled");
        write_node(&mut out, "1191", Some(&attrs));
        assert_eq!(
            out,
            "  A;\n  1191 [shape=box,style=\"rounded,filled\",label=\"Aspirin [IN]\"];\n"
        );
    }

    #[test]
    fn test_write_edge() {
        let mut out = String::new();
        write_edge(&mut out, "A", "B", None);
        write_edge(
            &mut out,
            "A",
            "x y",
            Some(&Attributes::labeled("has_ingredient").with_color("gray")),
        );
        assert_eq!(
            out,
            "  A -> B;\n  A -> \"x y\" [color=gray,label=\"has_ingredient\"];\n"
        );
    }
}
