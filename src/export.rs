//! Export flow: encode a person and save the `.vcf` next to the rest of
//! the workspace (or wherever the caller points).
//!
//! Content contract: vCard 3.0 text, CRLF line endings, UTF-8. The browser
//! blob download of the original application becomes an atomic filesystem
//! write here; the filename derivation rule carries over unchanged.

use std::path::{Path, PathBuf};

use crate::error::CardError;
use crate::types::Person;
use crate::util::{atomic_write_str, sanitize_for_filesystem};
use crate::vcard::{generate_vcard, ExportContext};

/// Derive a `.vcf` filename from a display name: non-alphanumeric/dot/hyphen
/// characters become underscores.
pub fn vcard_filename(display_name: &str) -> String {
    format!("{}.vcf", sanitize_for_filesystem(display_name))
}

/// Encode `person` and write the card into `dir`, creating the directory
/// if needed. A caller-supplied `filename` wins over the derived one.
/// Returns the path written.
pub fn save_vcard(
    dir: &Path,
    person: &Person,
    ctx: &ExportContext,
    filename: Option<&str>,
) -> Result<PathBuf, CardError> {
    let content = generate_vcard(person, ctx);
    let name = match filename {
        Some(f) => f.to_string(),
        None => vcard_filename(&person.display_name()),
    };

    std::fs::create_dir_all(dir)?;
    let path = dir.join(name);
    atomic_write_str(&path, &content)?;
    log::info!("exported {} to {}", person.display_name(), path.display());
    Ok(path)
}
