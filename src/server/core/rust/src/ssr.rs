/* src/server/core/rust/src/ssr.rs */

use serde::Deserialize;

use crate::page::PageObject;

/// Markup returned by the SSR sidecar: head lines to splice into `<head>`
/// and the pre-rendered body that replaces the client hydration root.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SsrPage {
  #[serde(default)]
  pub head: Vec<String>,
  pub body: String,
}

/// Client for an optional server-side-rendering sidecar. The page object is
/// POSTed as JSON; any transport or decode failure falls back to client-side
/// hydration markup. No retries; timeout policy belongs to the transport.
#[derive(Debug, Clone)]
pub struct SsrGateway {
  endpoint: String,
  client: reqwest::Client,
}

impl SsrGateway {
  pub fn new(endpoint: impl Into<String>) -> Self {
    Self { endpoint: endpoint.into(), client: reqwest::Client::new() }
  }

  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  /// Render through the sidecar, or `None` when it is unreachable or answers
  /// with anything other than a valid `{head, body}` document.
  pub async fn render(&self, page: &PageObject) -> Option<SsrPage> {
    let response = match self.client.post(&self.endpoint).json(page).send().await {
      Ok(resp) => resp,
      Err(err) => {
        tracing::warn!(endpoint = %self.endpoint, error = %err, "ssr gateway unreachable, falling back to client hydration");
        return None;
      }
    };

    if !response.status().is_success() {
      tracing::warn!(endpoint = %self.endpoint, status = %response.status(), "ssr gateway returned non-success, falling back");
      return None;
    }

    match response.json::<SsrPage>().await {
      Ok(ssr) => Some(ssr),
      Err(err) => {
        tracing::warn!(endpoint = %self.endpoint, error = %err, "ssr gateway returned invalid payload, falling back");
        None
      }
    }
  }
}
