//! Import flow: validate and parse an uploaded `.vcf` file.
//!
//! Only the first contact in a file is imported; the result carries a
//! count of additional contacts so the caller can surface "N more
//! contacts were found" to the user.

use std::path::Path;

use crate::error::CardError;
use crate::vcard::{parse_vcard, ParsedImport};

/// Read and parse a vCard file.
///
/// The extension must be `.vcf` or `.vcard` (case-insensitive); anything
/// else is rejected before touching the file, matching the upload dialog's
/// behavior.
pub fn import_vcard_file(path: &Path) -> Result<ParsedImport, CardError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("vcf") | Some("vcard") => {}
        _ => {
            return Err(CardError::WrongExtension {
                path: path.display().to_string(),
            })
        }
    }

    let content = std::fs::read_to_string(path)?;
    let parsed = parse_vcard(&content)?;

    if parsed.additional_contacts > 0 {
        log::info!(
            "{}: importing first contact only, {} additional contact(s) found",
            path.display(),
            parsed.additional_contacts
        );
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str =
        "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane Doe\r\nN:Doe;Jane;;;\r\nEND:VCARD";

    fn write_card(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_imports_vcf_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_card(dir.path(), "jane.vcf", CARD);
        let parsed = import_vcard_file(&path).unwrap();
        assert_eq!(parsed.contact.full_name, "Jane Doe");
    }

    #[test]
    fn test_vcard_extension_accepted_case_insensitively() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_card(dir.path(), "jane.VCARD", CARD);
        assert!(import_vcard_file(&path).is_ok());
    }

    #[test]
    fn test_wrong_extension_rejected_before_reading() {
        let dir = tempfile::tempdir().expect("tempdir");
        // File doesn't even exist — the extension check must fire first
        let err = import_vcard_file(&dir.path().join("notes.txt")).unwrap_err();
        assert!(matches!(err, CardError::WrongExtension { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = import_vcard_file(&dir.path().join("ghost.vcf")).unwrap_err();
        assert!(matches!(err, CardError::Io(_)));
    }

    #[test]
    fn test_non_vcard_content_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_card(dir.path(), "empty.vcf", "hello world");
        let err = import_vcard_file(&path).unwrap_err();
        assert!(matches!(err, CardError::NotAVcard));
    }
}
