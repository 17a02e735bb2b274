//! Escaping for Rust string literals.
//!
//! Everything the generator writes between double quotes goes through
//! [`escape_str`]. The output, wrapped in `"..."`, is a valid Rust string
//! literal that evaluates to exactly the input.

pub fn escape_str(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() || is_bidi_control(c) => {
                out.push_str(&format!("\\u{{{:x}}}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Direction overrides are rejected by rustc's `text_direction_codepoint_in_literal`
/// lint when they appear raw inside a literal.
fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}')
}

/// Wraps the escaped value in double quotes.
pub fn quote_str(input: &str) -> String {
    format!("\"{}\"", escape_str(input))
}
