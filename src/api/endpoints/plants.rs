//! Plant identification endpoint (multipart image upload).

use axum::extract::{Multipart, State};
use axum::Json;
use base64::Engine;

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::extract;
use crate::gateway::{CompletionClient, CompletionOptions};
use crate::models::{Locale, PlantIdentification};
use crate::profile_context;
use crate::prompts;

/// Per-image upload limit.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

const ALLOWED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "webp"];

/// `POST /api/plants/identify` — multipart body with 1-3 `images` files
/// plus `userProfile` (serialized profile; unparseable is tolerated) and
/// `language` fields.
pub async fn identify<C: CompletionClient>(
    State(state): State<AppState<C>>,
    mut multipart: Multipart,
) -> Result<Json<PlantIdentification>, ApiError> {
    let mut images: Vec<String> = Vec::new();
    let mut profile_raw: Option<String> = None;
    let mut locale = Locale::En;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "images" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {e}")))?;

                let mime = validate_image(&file_name, content_type.as_deref(), bytes.len())?;
                images.push(format!(
                    "data:{mime};base64,{}",
                    base64::engine::general_purpose::STANDARD.encode(&bytes)
                ));
            }
            "userProfile" => {
                profile_raw = field.text().await.ok();
            }
            "language" => {
                if let Ok(code) = field.text().await {
                    locale = Locale::from(code);
                }
            }
            _ => {}
        }
    }

    let profile = profile_context::parse_profile(profile_raw.as_deref());
    let conversation = prompts::plant_identification(images, profile.as_ref(), locale)?;

    let reply = state
        .client
        .complete(
            &state.config.vision_model,
            &conversation,
            CompletionOptions::default(),
        )
        .await?;

    Ok(Json(extract::plant_result(&reply.content)))
}

/// Check extension, declared content type and size; return the MIME type
/// to embed in the data URL.
fn validate_image(
    file_name: &str,
    content_type: Option<&str>,
    size: usize,
) -> Result<String, ApiError> {
    let extension = file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ApiError::BadRequest("Only image files are allowed".into()));
    }

    let mime = match content_type {
        Some(ct) if ct.starts_with("image/") => ct.to_string(),
        Some(_) => return Err(ApiError::BadRequest("Only image files are allowed".into())),
        None => match extension.as_str() {
            "png" => "image/png".to_string(),
            "webp" => "image/webp".to_string(),
            _ => "image/jpeg".to_string(),
        },
    };

    if size == 0 {
        return Err(ApiError::BadRequest("Empty image file".into()));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ApiError::BadRequest("Image exceeds the 10MB limit".into()));
    }

    Ok(mime)
}
