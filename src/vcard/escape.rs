//! Text escaping for vCard property values (RFC 2426 §2.4.2).
//!
//! Reserved characters inside a value: backslash, semicolon, comma, and
//! literal newlines. Structured component splitting on the decode side has
//! to respect these escapes, so the inverse lives here too.

/// Escape a string for use inside any vCard property value or structured
/// (semicolon-delimited) component.
///
/// Backslash is substituted first; otherwise the backslashes introduced by
/// the later substitutions would get escaped a second time.
pub fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
        .replace('\r', "\\n")
}

/// Inverse of [`escape_text`]: `\\`, `\;`, `\,` and `\n`/`\N` back to the
/// literal characters. A trailing lone backslash passes through unchanged.
pub fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Sanitize a user-entered label into a TYPE parameter token.
///
/// Parameter tokens follow different rules than values: a colon, semicolon,
/// or comma would terminate the parameter, so those are stripped rather
/// than value-escaped. The result is upper-cased, matching the built-in
/// tokens (HOME, WORK, CELL).
pub fn param_token(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ':' | ';' | ',' | '\r' | '\n'))
        .collect::<String>()
        .trim()
        .to_uppercase()
}

/// Split a structured property value on unescaped semicolons, unescaping
/// each component. Used by the decoder for N and ADR values.
pub fn split_structured(value: &str) -> Vec<String> {
    let mut components = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            ';' => components.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    components.push(current);
    components.into_iter().map(|c| unescape_text(&c)).collect()
}
