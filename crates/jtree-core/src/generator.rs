//! Canonical JSON text generator.
//!
//! Walks a [`Value`] tree and produces compact JSON: no whitespace
//! anywhere, object members in the map's lexicographic key order. The
//! generator is total; a tree is well-formed by construction, so there is
//! no error channel.

use crate::escape;
use crate::value::Value;

/// Generate canonical JSON text for a value tree.
///
/// A pure function of its input: the same tree always produces the same
/// text.
pub fn generate(value: &Value) -> String {
    let mut out = String::new();
    generate_value(value, &mut out);
    out
}

/// Exhaustive dispatch over the seven variants.
fn generate_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Float(f) => generate_float(*f, out),
        Value::String(s) => generate_string(s, out),
        Value::Array(array) => generate_array(array, out),
        Value::Object(object) => generate_object(object, out),
    }
}

/// Default decimal rendering of a double, with two pinned details: whole
/// finite floats keep a trailing `.0` so the text stays float-classified
/// on reparse, and non-finite floats (caller-built only; the parser never
/// produces them) render as `null`.
fn generate_float(f: f64, out: &mut String) {
    if f.is_nan() || f.is_infinite() {
        out.push_str("null");
    } else if f.fract() == 0.0 {
        out.push_str(&format!("{:.1}", f));
    } else {
        out.push_str(&format!("{}", f));
    }
}

/// Quote and escape a string. The eight table escapes get their
/// two-character forms; any other control character below U+0020 is
/// emitted as `\u00XX`, zero-padded to 4 hex digits.
fn generate_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        if ch.is_ascii() {
            if let Some(letter) = escape::escape(ch as u8) {
                out.push('\\');
                out.push(letter as char);
                continue;
            }
        }
        if (ch as u32) < 0x20 {
            out.push_str(&format!("\\u{:04x}", ch as u32));
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}

fn generate_array(array: &[Value], out: &mut String) {
    out.push('[');
    for (i, element) in array.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        generate_value(element, out);
    }
    out.push(']');
}

fn generate_object(object: &std::collections::BTreeMap<String, Value>, out: &mut String) {
    out.push('{');
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        generate_string(key, out);
        out.push(':');
        generate_value(value, out);
    }
    out.push('}');
}
