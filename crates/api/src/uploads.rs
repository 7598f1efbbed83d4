//! Stored-file handling for listing images.
//!
//! Uploaded files land under the configured uploads directory with a
//! UUID-prefixed filename and are served back at `/uploads/{filename}`.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::AppError;

/// A file persisted by the upload store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Public URL the file is served at.
    pub url: String,
    /// Stored filename (UUID-prefixed, path components stripped).
    pub filename: String,
}

/// Persists uploaded files under a root directory.
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write `data` under the uploads root, returning the stored reference.
    ///
    /// The stored name is `{uuid}-{basename}` where the basename has any
    /// directory components stripped, so client-supplied names cannot
    /// escape the uploads directory.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> Result<StoredFile, AppError> {
        let filename = storage_name(original_name);
        let dest = self.root.join(&filename);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
        tokio::fs::write(&dest, data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

        Ok(StoredFile {
            url: format!("/uploads/{filename}"),
            filename,
        })
    }

    /// The directory files are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn storage_name(original_name: &str) -> String {
    let basename = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);
    let basename = if basename.is_empty() { "upload" } else { basename };
    format!("{}-{basename}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_name_strips_directories() {
        let name = storage_name("../../etc/passwd");
        assert!(name.ends_with("-passwd"));
        assert!(!name.contains('/'));

        let name = storage_name("c:\\photos\\cabin.jpg");
        assert!(name.ends_with("-cabin.jpg"));
        assert!(!name.contains('\\'));
    }

    #[test]
    fn storage_name_handles_empty_basename() {
        assert!(storage_name("photos/").ends_with("-upload"));
    }

    #[tokio::test]
    async fn save_writes_file_and_builds_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let stored = store.save("cabin.jpg", b"jpegbytes").await.unwrap();
        assert_eq!(stored.url, format!("/uploads/{}", stored.filename));
        assert!(stored.filename.ends_with("-cabin.jpg"));

        let on_disk = tokio::fs::read(dir.path().join(&stored.filename))
            .await
            .unwrap();
        assert_eq!(on_disk, b"jpegbytes");
    }

    #[tokio::test]
    async fn save_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().join("nested/uploads"));
        let stored = store.save("a.png", b"png").await.unwrap();
        assert!(store.root().join(&stored.filename).exists());
    }
}
