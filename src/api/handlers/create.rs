//! Handler for link creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::short_link::{CreateShortLinkRequest, ShortLinkResponse};
use crate::domain::entities::CreateShortLink;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::normalize_destination;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "destination": "example.com/page",
///   "slash_code": "promo1"
/// }
/// ```
///
/// `slash_code` is optional; a random 6-character code is generated when it
/// is missing or empty.
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "id": 1,
///   "slash_code": "promo1",
///   "origin": "https://s.example.com/promo1",
///   "destination": "https://example.com/page",
///   "visitors": 0,
///   "created_at": "2025-01-01T00:00:00Z",
///   "updated_at": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the code or destination is invalid
/// - 409 Conflict if the code is already taken
/// - 500 Internal Server Error if no free code could be generated or the store failed
pub async fn create_short_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateShortLinkRequest>,
) -> Result<(StatusCode, Json<ShortLinkResponse>), AppError> {
    payload.validate()?;

    let destination = normalize_destination(&payload.destination).map_err(|e| {
        AppError::bad_request(e.to_string(), json!({ "field": "destination" }))
    })?;

    let link = state
        .short_link_service
        .create_short_link(CreateShortLink {
            code: payload.custom_code(),
            destination,
        })
        .await?;

    let origin = state.short_url(&link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortLinkResponse::new(link, origin)),
    ))
}
