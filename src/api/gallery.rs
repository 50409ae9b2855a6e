//! Gallery endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::Multipart;
use uuid::Uuid;

use super::{multipart::ImageForm, AdminUser, MessageResponse};
use crate::{
    error::AppResult,
    models::gallery::{GalleryImage, GalleryUploadForm},
    AppState,
};

/// Gallery images
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = "gallery",
    responses(
        (status = 200, description = "Images, newest first", body = Vec<GalleryImage>)
    )
)]
pub async fn list_images(State(state): State<AppState>) -> AppResult<Json<Vec<GalleryImage>>> {
    Ok(Json(state.services.gallery.list().await?))
}

/// Upload an image
#[utoipa::path(
    post,
    path = "/api/gallery",
    tag = "gallery",
    security(("bearer_auth" = [])),
    request_body(content = GalleryUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image stored", body = GalleryImage),
        (status = 400, description = "Missing title or image, or not an image", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_image(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<GalleryImage>)> {
    let mut form = ImageForm::read(multipart).await?;
    let title = form.take("title");
    let description = form.take("description");
    let image = state
        .services
        .gallery
        .create(title, description, form.image)
        .await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// Delete an image and its file
#[utoipa::path(
    delete,
    path = "/api/gallery/{id}",
    tag = "gallery",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Image ID")),
    responses(
        (status = 200, description = "Image deleted", body = MessageResponse),
        (status = 404, description = "Image not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_image(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.gallery.delete(id).await?;
    Ok(Json(MessageResponse::new("Image deleted")))
}
