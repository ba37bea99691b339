//! Encoder driver: assemble a complete vCard 3.0 document for one person.
//!
//! Emission order is fixed: BEGIN, VERSION, FN, N, NICKNAME?, contact lines
//! (input order), address lines (input order), ORG?, TITLE?, BDAY?, REV?,
//! END. Lines join with CRLF — LF-only output breaks importers and is a
//! compatibility defect, not a stylistic choice.
//!
//! Every mapper is a best-effort projection: absent or unusable data drops
//! its line, never the whole document. A vCard carrying only a name is
//! valid output.

use crate::types::{Person, PersonDate, TeamMap};
use crate::vcard::address::address_lines;
use crate::vcard::birthday::birthday_line;
use crate::vcard::contact::contact_lines;
use crate::vcard::date::to_revision_timestamp;
use crate::vcard::escape::escape_text;
use crate::vcard::job::resolve_current_job;

/// Caller-supplied context for one export. Replaces the ambient globals the
/// original application hung off the window object: everything the encoder
/// needs arrives through this struct.
#[derive(Debug)]
pub struct ExportContext<'a> {
    /// Organization lookup for work-history entries.
    pub team_map: Option<&'a TeamMap>,
    /// Dated entries (birthday source) for this person.
    pub person_dates: Option<&'a [PersonDate]>,
    /// Log a warning when a contact entry has an unsupported type.
    pub warn_unsupported: bool,
}

impl<'a> Default for ExportContext<'a> {
    fn default() -> Self {
        ExportContext::new()
    }
}

impl<'a> ExportContext<'a> {
    pub fn new() -> Self {
        ExportContext {
            team_map: None,
            person_dates: None,
            warn_unsupported: true,
        }
    }
}

/// Encode one person as a vCard 3.0 document.
///
/// Pure and reentrant: output depends only on the arguments, so identical
/// input yields byte-identical output (REV derives solely from
/// `person.modified`, never from the wall clock).
pub fn generate_vcard(person: &Person, ctx: &ExportContext) -> String {
    let mut lines: Vec<String> = vec!["BEGIN:VCARD".to_string(), "VERSION:3.0".to_string()];

    lines.push(format!("FN:{}", escape_text(&person.display_name())));
    lines.push(n_line(person));

    let nickname = person.acf.nickname.trim();
    if !nickname.is_empty() {
        lines.push(format!("NICKNAME:{}", escape_text(nickname)));
    }

    lines.extend(contact_lines(&person.acf.contact_info, ctx.warn_unsupported));
    lines.extend(address_lines(&person.acf.addresses));

    let job = resolve_current_job(&person.acf.work_history, ctx.team_map);
    if !job.org.is_empty() {
        lines.push(format!("ORG:{}", escape_text(&job.org)));
    }
    if !job.title.is_empty() {
        lines.push(format!("TITLE:{}", escape_text(&job.title)));
    }

    if let Some(dates) = ctx.person_dates {
        if let Some(line) = birthday_line(dates) {
            lines.push(line);
        }
    }

    if let Some(line) = person
        .modified
        .as_deref()
        .and_then(to_revision_timestamp)
        .map(|rev| format!("REV:{}", rev))
    {
        lines.push(line);
    }

    lines.push("END:VCARD".to_string());
    lines.join("\r\n")
}

/// Structured N line: `N:family;given;;;`.
///
/// A name infix folds into the family component ("van Berg"), Dutch-style;
/// the additional-names, prefix, and suffix components stay empty.
fn n_line(person: &Person) -> String {
    let first = person.acf.first_name.trim();
    let infix = person.acf.infix.trim();
    let last = person.acf.last_name.trim();

    let family: Vec<&str> = [infix, last].into_iter().filter(|s| !s.is_empty()).collect();
    format!(
        "N:{};{};;;",
        escape_text(&family.join(" ")),
        escape_text(first)
    )
}
