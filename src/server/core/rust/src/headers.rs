/* src/server/core/rust/src/headers.rs */

use std::collections::HashMap;

pub const HEADER_INERTIA: &str = "x-inertia";
pub const HEADER_REQUESTED_WITH: &str = "x-requested-with";
pub const HEADER_PARTIAL_DATA: &str = "x-inertia-partial-data";
pub const HEADER_PARTIAL_COMPONENT: &str = "x-inertia-partial-component";

/// Normalized request headers: names lowercased, values kept verbatim.
/// Built once per request; read-only afterwards. Headers whose values are not
/// valid strings simply never make it into the map, which fails open to
/// "no partial reload" everywhere below.
#[derive(Debug, Clone, Default)]
pub struct RequestHeaders {
  map: HashMap<String, String>,
}

impl RequestHeaders {
  pub fn from_pairs<I, K, V>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let map = pairs
      .into_iter()
      .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.as_ref().to_string()))
      .collect();
    Self { map }
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.map.get(&name.to_ascii_lowercase()).map(String::as_str)
  }

  /// True when the client speaks the page-object protocol: both
  /// `X-Requested-With: XMLHttpRequest` and `X-Inertia: true` present.
  pub fn is_inertia(&self) -> bool {
    self.get(HEADER_REQUESTED_WITH) == Some("XMLHttpRequest")
      && self.get(HEADER_INERTIA) == Some("true")
  }

  /// Component name a partial reload targets, if any.
  pub fn partial_component(&self) -> Option<&str> {
    self.get(HEADER_PARTIAL_COMPONENT).filter(|v| !v.is_empty())
  }

  /// Comma-separated prop keys requested by a partial reload. Whitespace is
  /// trimmed, empty segments dropped; an all-empty list reads as absent.
  pub fn partial_keys(&self) -> Option<Vec<String>> {
    let raw = self.get(HEADER_PARTIAL_DATA)?;
    let keys: Vec<String> =
      raw.split(',').map(str::trim).filter(|k| !k.is_empty()).map(str::to_string).collect();
    if keys.is_empty() { None } else { Some(keys) }
  }
}
