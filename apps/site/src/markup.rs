//! Text helpers shared by the renderers: HTML escaping, anchor ids, and the
//! loose string coercion applied to résumé fields that are not plain strings.

use serde_json::Value;

/// Escapes `& < > " '` in a single pass. Not idempotent: `&amp;` becomes `&amp;amp;`.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Collapses each whitespace run into `-` and lowercases the result.
///
/// Two names that differ only by case or spacing map to the same id.
pub fn css_id(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_space = false;
    for ch in input.chars() {
        if is_id_space(ch) {
            if !in_space {
                out.push('-');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out.to_lowercase()
}

/// Whitespace as browsers match it in patterns: unlike `char::is_whitespace`,
/// this includes U+FEFF and excludes U+0085.
fn is_id_space(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Anchor id of the section element for `name`.
pub fn section_anchor(name: &str) -> String {
    format!("section-{}", css_id(name))
}

/// Whether a field counts as present: null, `false`, zero, NaN and `""` do not.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reads a field as display text, or `None` when it is absent or not truthy.
pub fn field_text(value: Option<&Value>) -> Option<String> {
    value.filter(|v| truthy(v)).map(coerce)
}

/// Converts any JSON value to the string a browser would show for it.
pub fn coerce(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Text content assignment: null clears, everything else coerces.
pub fn text_content(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => coerce(other),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => float_text(f),
        None => n.to_string(),
    }
}

/// Shortest round-trip digits, switching to exponent form outside
/// `[1e-6, 1e21)` the way browsers print numbers.
fn float_text(f: f64) -> String {
    let magnitude = f.abs();
    if magnitude != 0.0 && (magnitude >= 1e21 || magnitude < 1e-6) {
        let sci = format!("{f:e}");
        return match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => sci,
        };
    }
    f.to_string()
}
