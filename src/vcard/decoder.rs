//! Import-side vCard parser.
//!
//! Mirrors the encoder's best-effort policy in reverse: a card missing
//! most properties still parses, and unknown properties are ignored. Only
//! the first card in a file is extracted; the caller gets a count of any
//! additional cards so it can tell the user what was left behind.
//!
//! Input tolerance: CRLF or LF line endings, RFC 2425 folded lines
//! (continuations starting with a space or tab), blank lines, and
//! case-insensitive property names and parameters.

use serde::Serialize;

use crate::error::CardError;
use crate::vcard::date::parse_date;
use crate::vcard::escape::{split_structured, unescape_text};

/// Flat field set extracted from the first card in a file.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedContact {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub organization: String,
    pub job_title: String,
    /// ISO `YYYY-MM-DD`, empty when the card has no parsable BDAY.
    pub birthday: String,
    pub emails: Vec<String>,
    pub phones: Vec<ParsedPhone>,
    pub urls: Vec<String>,
    pub addresses: Vec<ParsedAddress>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPhone {
    pub value: String,
    pub kind: PhoneKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    Cell,
    Voice,
}

#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Result of parsing a vCard file: the first contact plus how many more
/// cards the file contained.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedImport {
    pub contact: ParsedContact,
    pub additional_contacts: usize,
}

/// Parse vCard text. Errors only when no BEGIN:VCARD block exists at all.
pub fn parse_vcard(content: &str) -> Result<ParsedImport, CardError> {
    let logical_lines = unfold(content);
    let blocks = split_blocks(&logical_lines);
    if blocks.is_empty() {
        return Err(CardError::NotAVcard);
    }

    let contact = parse_block(&blocks[0]);
    Ok(ParsedImport {
        contact,
        additional_contacts: blocks.len() - 1,
    })
}

/// Undo RFC 2425 line folding: a line starting with space or tab continues
/// the previous logical line (with the fold character removed).
fn unfold(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in content.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some(prev) = lines.last_mut() {
                prev.push_str(&line[1..]);
                continue;
            }
        }
        if !line.trim().is_empty() {
            lines.push(line.to_string());
        }
    }
    lines
}

/// Collect BEGIN:VCARD..END:VCARD blocks. Content outside blocks is
/// ignored; an unterminated final block still counts.
fn split_blocks(lines: &[String]) -> Vec<Vec<String>> {
    let mut blocks = Vec::new();
    let mut current: Option<Vec<String>> = None;
    for line in lines {
        let upper = line.trim().to_ascii_uppercase();
        if upper == "BEGIN:VCARD" {
            current = Some(Vec::new());
        } else if upper == "END:VCARD" {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
        } else if let Some(ref mut block) = current {
            block.push(line.clone());
        }
    }
    if let Some(block) = current {
        blocks.push(block);
    }
    blocks
}

fn parse_block(lines: &[String]) -> ParsedContact {
    let mut contact = ParsedContact::default();

    for line in lines {
        let Some((name_part, value)) = line.split_once(':') else {
            log::debug!("ignoring malformed vCard line: {}", line);
            continue;
        };
        let mut params = name_part.split(';');
        let property = params
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_uppercase();
        // Group prefixes (item1.URL) are legal vCard; strip them.
        let property = property
            .rsplit_once('.')
            .map(|(_, p)| p.to_string())
            .unwrap_or(property);
        let types = param_types(params);

        match property.as_str() {
            "FN" => contact.full_name = unescape_text(value),
            "N" => {
                let components = split_structured(value);
                contact.last_name = components.first().cloned().unwrap_or_default();
                contact.first_name = components.get(1).cloned().unwrap_or_default();
            }
            "NICKNAME" => contact.nickname = unescape_text(value),
            "ORG" => {
                contact.organization = split_structured(value)
                    .into_iter()
                    .next()
                    .unwrap_or_default();
            }
            "TITLE" => contact.job_title = unescape_text(value),
            "BDAY" => {
                if let Some(date) = parse_date(value.trim()) {
                    contact.birthday = date.format("%Y-%m-%d").to_string();
                }
            }
            "EMAIL" => {
                let email = unescape_text(value.trim());
                if !email.is_empty() {
                    contact.emails.push(email);
                }
            }
            "TEL" => {
                let tel = value.trim();
                if !tel.is_empty() {
                    let kind = if types.iter().any(|t| t == "CELL") {
                        PhoneKind::Cell
                    } else {
                        PhoneKind::Voice
                    };
                    contact.phones.push(ParsedPhone {
                        value: tel.to_string(),
                        kind,
                    });
                }
            }
            "URL" => {
                let url = unescape_text(value.trim());
                if !url.is_empty() {
                    contact.urls.push(url);
                }
            }
            "ADR" => {
                let components = split_structured(value);
                let component = |i: usize| components.get(i).cloned().unwrap_or_default();
                contact.addresses.push(ParsedAddress {
                    street: component(2),
                    city: component(3),
                    state: component(4),
                    postal_code: component(5),
                    country: component(6),
                });
            }
            _ => {}
        }
    }

    contact
}

/// Flatten `KEY=a,b;KEY2=c` parameter segments into upper-cased value
/// tokens. Bare tokens (vCard 2.1 style `TEL;CELL`) count too.
fn param_types<'a>(params: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut types = Vec::new();
    for param in params {
        let values = match param.split_once('=') {
            Some((_, values)) => values,
            None => param,
        };
        for value in values.split(',') {
            let token = value.trim().trim_matches('"').to_ascii_uppercase();
            if !token.is_empty() {
                types.push(token);
            }
        }
    }
    types
}
