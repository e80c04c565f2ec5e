//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// How long clients may cache a redirect.
const REDIRECT_CACHE_CONTROL: &str = "max-age=180";

/// Redirects a short code to its destination.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolution goes through
/// [`ShortLinkService::resolve`](crate::application::services::ShortLinkService::resolve),
/// so the response never waits for cache population or visit counting.
///
/// # Response
///
/// `301 Moved Permanently` with `Location` and `Cache-Control: max-age=180`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error on store failures or if the stored
/// destination cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let destination = state.short_link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(destination).map_err(|e| {
        tracing::error!(code = %code, error = %e, "Stored destination is not a valid header value");
        AppError::Unexpected
    })?;

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [
            (header::LOCATION, location),
            (
                header::CACHE_CONTROL,
                HeaderValue::from_static(REDIRECT_CACHE_CONTROL),
            ),
        ],
    ))
}
