// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::{AltTextError, Result};
use crate::metrics::{self, gather_metrics};
use crate::vision::{
    build_vision_request, extract_description, ImageFormat, ImageReference, ImageUpload,
    LanguageCode,
};
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::BytesMut;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// Query string accepted by both `GET /` and `POST /`.
#[derive(Debug, Default, Deserialize)]
pub struct DescribeQuery {
    pub image: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DescriptionResponse {
    pub description: String,
}

/// Returned by `GET /` when no image URL is supplied.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub name: String,
    pub model: String,
}

/// Handler for `GET /`: describe a remote image, or report service identity.
pub async fn describe_url_handler(
    State(state): State<AppState>,
    Query(query): Query<DescribeQuery>,
) -> Result<Response> {
    let Some(image) = ImageReference::from_query(query.image.as_deref()) else {
        debug!("No image URL in query, returning identity payload");
        return Ok(Json(IdentityResponse {
            name: state.config.server.name.clone(),
            model: state.config.openai.model.clone(),
        })
        .into_response());
    };

    let lang = parse_lang(query.lang.as_deref());
    info!("Received URL description request: image={}", image.summary());

    describe(&state, image, lang).await.map(IntoResponse::into_response)
}

/// Handler for `POST /`: describe an uploaded image from the `image` multipart field.
pub async fn describe_upload_handler(
    State(state): State<AppState>,
    Query(query): Query<DescribeQuery>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<DescriptionResponse>> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            debug!("Request body is not multipart: {}", rejection);
            return Err(AltTextError::NoImage);
        }
    };

    let upload = read_image_field(&mut multipart, state.config.vision.upload_limit).await?;
    metrics::record_upload(upload.len());
    info!(
        "Received upload description request: type={}, size={} bytes",
        upload.format().mime_type(),
        upload.len()
    );

    let lang = parse_lang(query.lang.as_deref());
    describe(&state, ImageReference::from_upload(&upload), lang).await
}

/// Handler for `GET /metrics` (Prometheus text format).
pub async fn metrics_handler() -> Result<Response> {
    let body = gather_metrics()?;
    Ok(([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body).into_response())
}

/// Fallback for every unmatched path or method.
pub async fn not_found_handler() -> AltTextError {
    AltTextError::NotFound
}

/// Run one vision request and extract its description.
async fn describe(
    state: &AppState,
    image: ImageReference,
    lang: Option<LanguageCode>,
) -> Result<Json<DescriptionResponse>> {
    let request = build_vision_request(
        &image,
        lang.as_ref(),
        &state.config.openai.model,
        &state.config.vision,
    );

    let response = match state.vision_client.complete(request).await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Vision API call failed: {}", e);
            return Err(e);
        }
    };

    let description = extract_description(&response)?;
    debug!("Generated description: {}", description);

    Ok(Json(DescriptionResponse { description }))
}

/// Find the `image` field, validate its declared type, then read it while
/// enforcing `upload_limit` chunk by chunk.
async fn read_image_field(multipart: &mut Multipart, upload_limit: u64) -> Result<ImageUpload> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }

        let format = field
            .content_type()
            .and_then(ImageFormat::from_mime_type)
            .ok_or_else(|| {
                debug!("Rejected upload with content type {:?}", field.content_type());
                AltTextError::InvalidImageType
            })?;

        let mut data = BytesMut::new();
        while let Some(chunk) = field.chunk().await? {
            if (data.len() + chunk.len()) as u64 > upload_limit {
                debug!("Rejected upload exceeding {} bytes", upload_limit);
                return Err(AltTextError::ImageTooLarge);
            }
            data.extend_from_slice(&chunk);
        }

        return ImageUpload::new(format, data.freeze(), upload_limit);
    }

    Err(AltTextError::NoImage)
}

fn parse_lang(raw: Option<&str>) -> Option<LanguageCode> {
    let raw = raw.filter(|value| !value.trim().is_empty())?;
    let lang = LanguageCode::parse(raw);
    if lang.is_none() {
        warn!("Ignoring invalid language code: {:?}", raw);
    }
    lang
}
