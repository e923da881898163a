/* src/server/core/rust/src/page.rs */

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::headers::RequestHeaders;
use crate::props::{PropValue, Props};

/// One server-computed rendering unit. Created per request, immutable once
/// serialized, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageObject {
  pub url: String,
  pub component: String,
  pub version: String,
  pub props: serde_json::Map<String, Value>,
}

/// Request-scoped state for one render pass. Replaces process-wide statics:
/// created at request start, discarded at request end, so shared props and
/// the version tag cannot leak across requests.
pub struct RequestContext {
  url: String,
  headers: RequestHeaders,
  shared: Props,
  version: String,
}

impl RequestContext {
  pub fn new(url: impl Into<String>, headers: RequestHeaders) -> Self {
    Self { url: url.into(), headers, shared: Props::new(), version: String::new() }
  }

  /// Seed the shared-prop accumulator, e.g. from app-wide configuration.
  pub fn with_shared(mut self, shared: Props) -> Self {
    self.shared = shared;
    self
  }

  pub fn with_version(mut self, version: impl Into<String>) -> Self {
    self.version = version.into();
    self
  }

  /// Accumulate one shared prop for the lifetime of this request.
  pub fn share(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
    self.shared.insert(key.into(), value.into());
  }

  pub fn url(&self) -> &str {
    &self.url
  }

  pub fn headers(&self) -> &RequestHeaders {
    &self.headers
  }

  pub fn shared(&self) -> &Props {
    &self.shared
  }

  pub fn version(&self) -> &str {
    &self.version
  }
}
