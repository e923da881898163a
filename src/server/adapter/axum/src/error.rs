/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use drift_server::DriftError;

/// Newtype wrapper to implement `IntoResponse` for `DriftError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for DriftError`
/// when both types are foreign to this crate.
pub(crate) struct AxumError(pub DriftError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    // Flat diagnostic body; only debug-mode asset configuration errors reach
    // clients through this path.
    let body = serde_json::json!({
      "code": err.code(),
      "message": err.message(),
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<DriftError> for AxumError {
  fn from(err: DriftError) -> Self {
    Self(err)
  }
}
