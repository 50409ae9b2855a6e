//! Gallery images

use uuid::Uuid;

use super::uploads::{UploadStore, UploadedFile};
use crate::{
    error::{AppError, AppResult},
    models::gallery::{GalleryImage, NewGalleryImage},
    repository::Repository,
};

#[derive(Clone)]
pub struct GalleryService {
    repository: Repository,
    uploads: UploadStore,
}

impl GalleryService {
    pub fn new(repository: Repository, uploads: UploadStore) -> Self {
        Self { repository, uploads }
    }

    pub async fn list(&self) -> AppResult<Vec<GalleryImage>> {
        self.repository.gallery.list().await
    }

    /// Store the image file, then the record; the file is removed again if
    /// the insert fails
    pub async fn create(
        &self,
        title: Option<String>,
        description: Option<String>,
        image: Option<UploadedFile>,
    ) -> AppResult<GalleryImage> {
        let title = title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        let (Some(title), Some(image)) = (title, image) else {
            return Err(AppError::Validation("Title and image are required".to_string()));
        };
        let image_url = self.uploads.save(&image).await?;
        let description = description.map(|d| d.trim().to_string()).filter(|d| !d.is_empty());

        match self
            .repository
            .gallery
            .create(&NewGalleryImage {
                title,
                description,
                image_url: image_url.clone(),
            })
            .await
        {
            Ok(row) => Ok(row),
            Err(e) => {
                self.uploads.remove(&image_url).await;
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let image = self.repository.gallery.delete(id).await?;
        self.uploads.remove(&image.image_url).await;
        Ok(())
    }
}
