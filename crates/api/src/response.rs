//! Shared response envelope types for API handlers.
//!
//! Mutating endpoints use a `{ "message": ..., "data": ... }` envelope.
//! Use [`MessageResponse`] instead of ad-hoc `serde_json::json!` blobs to
//! get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "message": ..., "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(MessageResponse {
///     message: "Field added successfully!".to_string(),
///     data: field,
/// }))
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    pub message: String,
    pub data: T,
}
