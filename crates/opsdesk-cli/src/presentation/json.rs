//! Highlighted JSON dumps.
//!
//! Layout matches `serde_json::to_string_pretty`; with color on, keys,
//! strings, numbers/booleans, and null each get their own color.

use std::fmt::Write;

use serde_json::Value;

const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const INDENT: &str = "  ";

/// Render `value` as indented JSON, highlighted when `color` is set.
pub fn render_json(value: &Value, color: bool) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0, color);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize, color: bool) {
    match value {
        Value::Null => push_painted(out, "null", BOLD, color),
        Value::Bool(_) | Value::Number(_) => push_painted(out, &value.to_string(), YELLOW, color),
        Value::String(_) => push_painted(out, &value.to_string(), GREEN, color),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push_str("[\n");
            for (index, item) in items.iter().enumerate() {
                push_indent(out, depth + 1);
                write_value(out, item, depth + 1, color);
                push_separator(out, index + 1 < items.len());
            }
            push_indent(out, depth);
            out.push(']');
        }
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{\n");
            for (index, (key, item)) in map.iter().enumerate() {
                push_indent(out, depth + 1);
                push_painted(out, &Value::from(key.as_str()).to_string(), CYAN, color);
                out.push_str(": ");
                write_value(out, item, depth + 1, color);
                push_separator(out, index + 1 < map.len());
            }
            push_indent(out, depth);
            out.push('}');
        }
    }
}

fn push_painted(out: &mut String, text: &str, code: &str, color: bool) {
    if color {
        let _ = write!(out, "{code}{text}{RESET}");
    } else {
        out.push_str(text);
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn push_separator(out: &mut String, more: bool) {
    if more {
        out.push(',');
    }
    out.push('\n');
}
