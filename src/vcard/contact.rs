//! Contact-info mapper: typed contact entries onto EMAIL/TEL/URL lines.
//!
//! Mapping table:
//!   email                                → EMAIL;TYPE=INTERNET
//!   phone                                → TEL;TYPE=VOICE
//!   mobile                               → TEL;TYPE=CELL
//!   website, twitter, instagram, facebook → URL;TYPE=WORK
//!   linkedin                             → URL;TYPE=PROFILE
//!
//! A label, when present, is appended as an extra upper-cased TYPE token.
//! Unsupported types are skipped with a warning.

use crate::types::ContactInfo;
use crate::vcard::escape::{escape_text, param_token};
use crate::vcard::phone::normalize_phone;

/// Map contact entries to vCard property lines, preserving input order.
/// Entries with an empty value produce no line; phone entries whose value
/// normalizes to nothing are dropped too.
pub fn contact_lines(entries: &[ContactInfo], warn_unsupported: bool) -> Vec<String> {
    let mut lines = Vec::new();

    for entry in entries {
        let value = entry.contact_value.trim();
        if value.is_empty() {
            continue;
        }
        let label = entry
            .contact_label
            .as_deref()
            .map(param_token)
            .filter(|l| !l.is_empty());

        let contact_type = entry.contact_type.to_ascii_lowercase();
        let line = match contact_type.as_str() {
            "email" => Some(property_line("EMAIL", "INTERNET", &label, &escape_text(value))),
            "phone" | "mobile" => {
                let number = normalize_phone(value);
                if number.is_empty() {
                    None
                } else {
                    let base = if contact_type == "mobile" { "CELL" } else { "VOICE" };
                    Some(property_line("TEL", base, &label, &number))
                }
            }
            "website" | "twitter" | "instagram" | "facebook" => Some(property_line(
                "URL",
                "WORK",
                &label,
                &escape_text(&ensure_scheme(value)),
            )),
            "linkedin" => Some(property_line(
                "URL",
                "PROFILE",
                &label,
                &escape_text(&ensure_scheme(value)),
            )),
            other => {
                if warn_unsupported {
                    log::warn!("skipping unsupported contact type: {}", other);
                }
                None
            }
        };

        if let Some(line) = line {
            lines.push(line);
        }
    }

    lines
}

fn property_line(property: &str, base_type: &str, label: &Option<String>, value: &str) -> String {
    match label {
        Some(label) => format!("{};TYPE={},{}:{}", property, base_type, label, value),
        None => format!("{};TYPE={}:{}", property, base_type, value),
    }
}

/// Prefix `https://` when the value carries no http(s) scheme.
fn ensure_scheme(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{}", value)
    }
}
