//! Upload handling — scratch files for uploaded resumes.
//!
//! Uploads are written under the configured scratch directory with a
//! per-request UUID prefix so two concurrent uploads of `resume.pdf` never
//! collide. Files are removed when the request scope ends, success or failure.

use std::path::{Path, PathBuf};

use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;

/// Extensions accepted by the upload form.
const ALLOWED_EXTENSIONS: [&str; 2] = ["pdf", "txt"];

/// Whether `filename` carries an accepted resume extension.
pub fn allowed_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| ALLOWED_EXTENSIONS.iter().any(|a| e.eq_ignore_ascii_case(a)))
        .unwrap_or(false)
}

/// Reduces a client-supplied filename to a safe basename. Empty and dot-only
/// path segments (`.`, `..`) are dropped outright, the rest are joined with
/// `_`, anything outside `[A-Za-z0-9._-]` becomes `_`, and leading dots are
/// trimmed so a crafted name cannot produce a hidden or traversing path.
pub fn sanitize_filename(filename: &str) -> String {
    let cleaned: String = filename
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && !segment.chars().all(|c| c == '.'))
        .map(|segment| {
            segment
                .chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                        c
                    } else {
                        '_'
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("_");
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

/// A resume saved to scratch space. Removing the file is tied to this guard's
/// lifetime: no uploaded file outlives its request.
pub struct SavedUpload {
    path: PathBuf,
}

impl SavedUpload {
    /// Writes `data` to a unique scratch path derived from `original_name`.
    pub async fn write(
        upload_dir: &str,
        original_name: &str,
        data: &[u8],
    ) -> Result<Self, AppError> {
        let name = format!("{}_{}", Uuid::new_v4(), sanitize_filename(original_name));
        let path = Path::new(upload_dir).join(name);
        tokio::fs::write(&path, data).await?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SavedUpload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!("Failed to remove upload {}: {e}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extension_pdf_and_txt_only() {
        assert!(allowed_extension("resume.pdf"));
        assert!(allowed_extension("resume.txt"));
        assert!(allowed_extension("RESUME.PDF"));
        assert!(!allowed_extension("resume.docx"));
        assert!(!allowed_extension("resume"));
        assert!(!allowed_extension(""));
    }

    #[test]
    fn test_sanitize_strips_path_separators() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename("dir/resume.pdf"), "dir_resume.pdf");
    }

    #[test]
    fn test_sanitize_drops_dot_segments() {
        assert_eq!(sanitize_filename("foo/../bar.txt"), "foo_bar.txt");
        assert_eq!(sanitize_filename("..\\..\\resume.pdf"), "resume.pdf");
        assert_eq!(sanitize_filename("./resume.txt"), "resume.txt");
    }

    #[test]
    fn test_sanitize_trims_leading_dots() {
        assert_eq!(sanitize_filename(".hidden.txt"), "hidden.txt");
    }

    #[test]
    fn test_sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_filename("my-resume_v2.pdf"), "my-resume_v2.pdf");
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(sanitize_filename(""), "upload");
        assert_eq!(sanitize_filename("..."), "upload");
    }

    #[tokio::test]
    async fn test_saved_upload_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let upload_dir = dir.path().to_str().unwrap();

        let saved = SavedUpload::write(upload_dir, "resume.txt", b"hello")
            .await
            .unwrap();
        let path = saved.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");

        drop(saved);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_saved_uploads_with_same_name_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let upload_dir = dir.path().to_str().unwrap();

        let first = SavedUpload::write(upload_dir, "resume.pdf", b"a")
            .await
            .unwrap();
        let second = SavedUpload::write(upload_dir, "resume.pdf", b"b")
            .await
            .unwrap();
        assert_ne!(first.path(), second.path());
    }
}
