//! Text Extractor — pulls plain text out of an uploaded resume file.

use std::path::Path;

use anyhow::{Context, Result};

/// Extracts the text content of a resume at `path`.
///
/// - `.txt`: whole file read as UTF-8; unreadable or non-UTF-8 files error.
/// - `.pdf`: text per page joined with `\n`; a page with no extractable text
///   contributes an empty string rather than failing the document.
/// - Any other extension: `Ok(None)`. Upload validation already constrains
///   submissions to pdf/txt, but the extractor stays defensive.
///
/// Read-only; the caller owns the file's lifecycle.
pub fn extract(path: &Path) -> Result<Option<String>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("txt") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read text resume {}", path.display()))?;
            Ok(Some(text))
        }
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => {
            let pages = pdf_extract::extract_text_by_pages(path)
                .with_context(|| format!("Failed to read PDF resume {}", path.display()))?;
            Ok(Some(pages.join("\n")))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extract_txt_reads_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "Jane Doe\nRust Engineer").unwrap();

        let text = extract(&path).unwrap();
        assert_eq!(text.as_deref(), Some("Jane Doe\nRust Engineer"));
    }

    #[test]
    fn test_extract_txt_extension_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.TXT");
        std::fs::write(&path, "content").unwrap();

        assert_eq!(extract(&path).unwrap().as_deref(), Some("content"));
    }

    #[test]
    fn test_extract_unknown_extension_is_none_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, "binary-ish").unwrap();

        assert!(extract(&path).unwrap().is_none());
    }

    #[test]
    fn test_extract_missing_txt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ghost.txt");

        assert!(extract(&path).is_err());
    }

    #[test]
    fn test_extract_invalid_utf8_txt_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(extract(&path).is_err());
    }
}
