pub mod fields;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /fields                                          add field (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/fields", fields::router())
}
