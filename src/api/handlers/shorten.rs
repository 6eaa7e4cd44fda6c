//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/very/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// { "code": "ab3f9c1", "short_url": "http://localhost:3000/ab3f9c1" }
/// ```
///
/// The full short URL is composed here from the configured base URL;
/// scheme/host/port composition is a presentation concern and never reaches
/// the mapping service.
///
/// # Errors
///
/// - `400` when `long_url` is missing, empty, or not an absolute HTTP(S) URL
/// - `409` when a concurrent request won the race to the allocated code
/// - `503` when no free code was found within the attempt ceiling
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let mapping = state.mapping_service.shorten(payload.long_url).await?;

    let short_url = format!(
        "{}/{}",
        state.base_url.trim_end_matches('/'),
        mapping.short_code
    );

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            code: mapping.short_code,
            short_url,
        }),
    ))
}
