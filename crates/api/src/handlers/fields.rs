//! Handlers for the dashboard field registry.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fieldboard_core::field::CreateField;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/fields
///
/// Append a dashboard field to the registry and echo it back.
///
/// Every key in the body is optional; absent keys come back as `null`.
/// No content validation is applied.
pub async fn create_field(
    State(state): State<AppState>,
    Json(input): Json<CreateField>,
) -> AppResult<impl IntoResponse> {
    let field = state.registry.append(input).await?;

    tracing::info!(
        field_id = field.id,
        has_name = field.name.is_some(),
        "Dashboard field added",
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Field added successfully!".to_string(),
            data: field,
        }),
    ))
}
