//! Record model for the contact-card pipeline.
//!
//! These structs mirror the REST backend's person payloads: a `Person`
//! carries a display name plus a flexible custom-field container (`acf`)
//! holding contact entries, addresses, and work history. All fields are
//! defaulted so partially filled records deserialize without error —
//! the encoder is a best-effort projection over whatever is present.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Person record as served by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: String,
    /// Last-modified timestamp (RFC 3339-ish). Drives the vCard REV line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(default)]
    pub acf: PersonFields,
}

impl Person {
    /// Resolve the display name: `name` wins, else first/infix/last joined
    /// on single spaces, else "Unknown".
    pub fn display_name(&self) -> String {
        let name = self.name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
        let parts: Vec<&str> = [
            self.acf.first_name.trim(),
            self.acf.infix.trim(),
            self.acf.last_name.trim(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
        if parts.is_empty() {
            "Unknown".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// Custom-field container on a person record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonFields {
    #[serde(default)]
    pub first_name: String,
    /// Name infix / tussenvoegsel ("van", "de"). Folds into the family
    /// name component when encoding.
    #[serde(default)]
    pub infix: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub contact_info: Vec<ContactInfo>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub work_history: Vec<WorkHistory>,
}

/// One typed contact entry (email, phone, mobile, website, social handle).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub contact_type: String,
    #[serde(default)]
    pub contact_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_label: Option<String>,
}

/// Structured postal address. Emitted only when at least one of the five
/// location fields is non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_label: Option<String>,
}

/// A person's association with an organization over a time range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub is_current: bool,
}

/// Organization reference on a work-history entry. The backend serializes
/// these as numeric post IDs, but string keys appear in older exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamRef {
    Id(u64),
    Key(String),
}

impl TeamRef {
    /// Lookup key into a [`TeamMap`].
    pub fn key(&self) -> String {
        match self {
            TeamRef::Id(n) => n.to_string(),
            TeamRef::Key(s) => s.clone(),
        }
    }
}

/// Caller-supplied organization lookup, keyed by team id.
pub type TeamMap = HashMap<String, TeamEntry>;

/// TeamMap values are either a bare name or an object carrying one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamEntry {
    Name(String),
    Object { name: String },
}

impl TeamEntry {
    pub fn name(&self) -> &str {
        match self {
            TeamEntry::Name(s) => s,
            TeamEntry::Object { name } => name,
        }
    }
}

/// Dated entry on a person (birthday, anniversary, ...). The backend
/// serializes `date_type` as either a bare string or a one-element array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDate {
    #[serde(default)]
    pub date_type: DateTypeField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateTypeField {
    One(String),
    Many(Vec<String>),
}

impl Default for DateTypeField {
    fn default() -> Self {
        DateTypeField::One(String::new())
    }
}

impl DateTypeField {
    /// The effective type tag: the string itself, or the first array element.
    pub fn primary(&self) -> Option<&str> {
        match self {
            DateTypeField::One(s) => Some(s.as_str()),
            DateTypeField::Many(v) => v.first().map(|s| s.as_str()),
        }
    }
}
