/* src/server/core/rust/src/errors.rs */

use std::fmt;

#[derive(Debug)]
pub struct DriftError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "ASSET_CONFIG" => 500,
    "SSR_GATEWAY" => 502,
    "NOT_FOUND" => 404,
    "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl DriftError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  /// Manifest missing, unparseable, or lacking the configured entry.
  /// Fatal in debug mode only; production degrades to "no assets".
  pub fn asset_config(msg: impl Into<String>) -> Self {
    Self::with_code("ASSET_CONFIG", msg)
  }

  pub fn ssr_gateway(msg: impl Into<String>) -> Self {
    Self::with_code("SSR_GATEWAY", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for DriftError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for DriftError {}
