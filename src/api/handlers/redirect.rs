//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `301 Moved Permanently` and a `Location` header carrying
/// the stored long URL, verbatim.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist; unknown codes are
/// an expected, frequent outcome, handled as a normal branch.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.mapping_service.resolve(&code).await?;

    debug!("Redirecting {code} -> {long_url}");

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, long_url)],
    ))
}
