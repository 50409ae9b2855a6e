//! Local-disk storage for uploaded images served under `/uploads`

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{
    config::UploadsConfig,
    error::{AppError, AppResult},
};

/// URL prefix the upload directory is mounted at
pub const PUBLIC_PREFIX: &str = "/uploads/";

/// A file received from a multipart form
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct UploadStore {
    config: UploadsConfig,
}

impl UploadStore {
    pub fn new(config: UploadsConfig) -> Self {
        Self { config }
    }

    pub fn dir(&self) -> &Path {
        &self.config.dir
    }

    pub fn max_file_size(&self) -> u64 {
        self.config.max_file_size
    }

    /// Check type and size, write the file under a fresh name and return its
    /// public URL
    pub async fn save(&self, file: &UploadedFile) -> AppResult<String> {
        let content_type = file.content_type.as_deref().unwrap_or_default();
        if !self.config.is_type_allowed(content_type) {
            return Err(AppError::BadRequest("Only image uploads are allowed".to_string()));
        }
        if file.bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }
        if file.bytes.len() as u64 > self.config.max_file_size {
            return Err(AppError::BadRequest(format!(
                "File exceeds the {} byte limit",
                self.config.max_file_size
            )));
        }

        let name = stored_name(file.file_name.as_deref(), content_type);
        tokio::fs::create_dir_all(&self.config.dir)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create upload dir: {}", e)))?;
        tokio::fs::write(self.config.dir.join(&name), &file.bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store upload: {}", e)))?;

        tracing::info!(file = %name, size = file.bytes.len(), "Stored upload");
        Ok(format!("{}{}", PUBLIC_PREFIX, name))
    }

    /// Delete the file behind a public URL. Failures are logged only.
    pub async fn remove(&self, public_url: &str) {
        let Some(path) = self.local_path(public_url) else {
            tracing::debug!(url = public_url, "Not a local upload, nothing to remove");
            return;
        };
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!(path = %path.display(), "Failed to remove upload: {}", e);
        }
    }

    /// Path on disk for a `/uploads/<name>` URL; rejects anything that could
    /// leave the upload directory
    fn local_path(&self, public_url: &str) -> Option<PathBuf> {
        let name = public_url.strip_prefix(PUBLIC_PREFIX)?;
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.starts_with('.') {
            return None;
        }
        Some(self.config.dir.join(name))
    }
}

/// `<uuid>.<ext>`, the extension taken from the client file name when it is
/// plain alphanumeric, else from the content type
fn stored_name(file_name: Option<&str>, content_type: &str) -> String {
    let ext = file_name
        .and_then(|n| Path::new(n).extension())
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.len() <= 8 && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
        .or_else(|| {
            content_type
                .split_once('/')
                .map(|(_, sub)| sub.split(['+', ';']).next().unwrap_or(sub).to_ascii_lowercase())
                .filter(|s| !s.is_empty())
        });
    match ext {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &Path) -> UploadStore {
        UploadStore::new(UploadsConfig {
            dir: dir.to_path_buf(),
            max_file_size: 16,
            allowed_types: vec!["image/*".to_string()],
        })
    }

    fn png(bytes: &[u8]) -> UploadedFile {
        UploadedFile {
            file_name: Some("Tent.PNG".into()),
            content_type: Some("image/png".into()),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn test_stored_name_extension() {
        assert!(stored_name(Some("chair.jpg"), "image/jpeg").ends_with(".jpg"));
        assert!(stored_name(Some("noext"), "image/svg+xml").ends_with(".svg"));
        assert!(stored_name(Some("../../etc/passwd.p/ng"), "image/png").ends_with(".png"));
        assert!(!stored_name(None, "").contains('.'));
    }

    #[tokio::test]
    async fn test_save_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());

        let url = store.save(&png(b"\x89PNG....")).await.unwrap();
        assert!(url.starts_with(PUBLIC_PREFIX));
        assert!(url.ends_with(".png"));
        let path = store.local_path(&url).unwrap();
        assert!(path.exists());

        store.remove(&url).await;
        assert!(!path.exists());
        // Removing again only logs
        store.remove(&url).await;
    }

    #[tokio::test]
    async fn test_save_rejects_type_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(dir.path());

        let pdf = UploadedFile {
            file_name: Some("doc.pdf".into()),
            content_type: Some("application/pdf".into()),
            bytes: b"%PDF".to_vec(),
        };
        assert!(matches!(store.save(&pdf).await, Err(AppError::BadRequest(_))));
        assert!(matches!(store.save(&png(&[0u8; 17])).await, Err(AppError::BadRequest(_))));
        assert!(matches!(store.save(&png(&[])).await, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_local_path_rejects_traversal() {
        let store = store(Path::new("/srv/uploads"));
        assert!(store.local_path("/uploads/../secret").is_none());
        assert!(store.local_path("/uploads/.env").is_none());
        assert!(store.local_path("https://cdn.example.com/a.png").is_none());
        assert_eq!(
            store.local_path("/uploads/a.png"),
            Some(PathBuf::from("/srv/uploads/a.png"))
        );
    }
}
