//! Route definitions for the dashboard field registry.

use axum::routing::post;
use axum::Router;

use crate::handlers::fields;
use crate::state::AppState;

/// Field registry routes mounted at `/fields`.
///
/// ```text
/// POST /  -> create_field
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(fields::create_field))
}
