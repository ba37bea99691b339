use std::io;
use std::path::Path;

/// Replace every character that is not alphanumeric, a dot, or a hyphen
/// with an underscore. Used to turn display names into safe filenames.
///
/// Example: "Jan van Berg" → "Jan_van_Berg"
pub fn sanitize_for_filesystem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Write a string to `path` atomically: write to a sibling temp file,
/// then rename over the target. Readers never observe a half-written file.
pub fn atomic_write_str(path: &Path, content: &str) -> io::Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let tmp = path.with_file_name(format!("{}.tmp", file_name));
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_spaces_and_specials() {
        assert_eq!(sanitize_for_filesystem("Jan van Berg"), "Jan_van_Berg");
        assert_eq!(sanitize_for_filesystem("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_for_filesystem("file.v1-final"), "file.v1-final");
    }

    #[test]
    fn test_sanitize_unicode_becomes_underscore() {
        assert_eq!(sanitize_for_filesystem("Zoë"), "Zo_");
    }

    #[test]
    fn test_atomic_write_replaces_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.vcf");

        atomic_write_str(&path, "first").unwrap();
        atomic_write_str(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        // No temp file left behind
        assert!(!path.with_file_name("out.vcf.tmp").exists());
    }
}
