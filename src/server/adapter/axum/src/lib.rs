/* src/server/adapter/axum/src/lib.rs */

mod document;
mod error;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderName, HeaderValue, header};
use axum::response::{Html, IntoResponse, Response};
use drift_server::renderer::RenderOutcome;
use drift_server::{AssetResolver, PropValue, Props, RequestContext, RequestHeaders, SsrGateway};

pub use document::{APP_MARKER, DEFAULT_TEMPLATE, HEAD_MARKER};

/// Re-export the server core for convenience
pub use drift_server;

use error::AxumError;

const HEADER_INERTIA: HeaderName = HeaderName::from_static("x-inertia");

/// Extracted request view for the page-object protocol: the URL
/// (path and query) plus lowercase-normalized headers.
#[derive(Debug, Clone)]
pub struct InertiaRequest {
  url: String,
  headers: RequestHeaders,
}

impl InertiaRequest {
  pub fn url(&self) -> &str {
    &self.url
  }

  pub fn headers(&self) -> &RequestHeaders {
    &self.headers
  }
}

impl<S> FromRequestParts<S> for InertiaRequest
where
  S: Send + Sync,
{
  type Rejection = std::convert::Infallible;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    let url = parts
      .uri
      .path_and_query()
      .map_or_else(|| parts.uri.path().to_string(), |pq| pq.as_str().to_string());
    // Non-UTF-8 header values are dropped, which reads as "header absent".
    let headers = RequestHeaders::from_pairs(
      parts.headers.iter().filter_map(|(name, value)| {
        value.to_str().ok().map(|v| (name.as_str(), v))
      }),
    );
    Ok(Self { url, headers })
  }
}

/// Application-level configuration shared across requests: version tag,
/// app-wide shared props, asset resolver, optional SSR gateway, and the root
/// template. Each request gets its own [`RequestContext`] cloned from this.
pub struct Inertia {
  version: String,
  shared: Props,
  resolver: Option<AssetResolver>,
  ssr: Option<SsrGateway>,
  template: String,
}

impl Inertia {
  pub fn new() -> Self {
    Self {
      version: String::new(),
      shared: Props::new(),
      resolver: None,
      ssr: None,
      template: DEFAULT_TEMPLATE.to_string(),
    }
  }

  /// Asset/build version stamped into every page object; clients compare it
  /// to detect stale builds and force a full reload.
  pub fn version(mut self, version: impl Into<String>) -> Self {
    self.version = version.into();
    self
  }

  /// Share a prop with every page rendered by this app.
  pub fn share(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
    self.shared.insert(key.into(), value.into());
    self
  }

  pub fn assets(mut self, resolver: AssetResolver) -> Self {
    self.resolver = Some(resolver);
    self
  }

  pub fn ssr(mut self, gateway: SsrGateway) -> Self {
    self.ssr = Some(gateway);
    self
  }

  /// Root template; must carry the `<!--drift:head-->` and `<!--drift:app-->`
  /// markers.
  pub fn template(mut self, template: impl Into<String>) -> Self {
    self.template = template.into();
    self
  }

  /// Request-scoped context seeded from this app configuration. Handlers may
  /// `share()` additional props on it before responding.
  pub fn context(&self, req: &InertiaRequest) -> RequestContext {
    RequestContext::new(req.url.clone(), req.headers.clone())
      .with_shared(self.shared.clone())
      .with_version(self.version.clone())
  }

  pub async fn respond(
    &self,
    req: InertiaRequest,
    component: impl Into<String>,
    props: Props,
  ) -> Response {
    let ctx = self.context(&req);
    self.respond_with(&ctx, component, props).await
  }

  pub async fn respond_with(
    &self,
    ctx: &RequestContext,
    component: impl Into<String>,
    props: Props,
  ) -> Response {
    match drift_server::render(ctx, component, props) {
      RenderOutcome::Inertia(page) => {
        let mut response = axum::Json(&page).into_response();
        let headers = response.headers_mut();
        headers.insert(header::VARY, HeaderValue::from_static("Accept"));
        headers.insert(HEADER_INERTIA, HeaderValue::from_static("true"));
        response
      }
      RenderOutcome::Document(page) => {
        let plan = match &self.resolver {
          Some(resolver) => match resolver.prepare() {
            Ok(plan) => plan,
            Err(err) => return AxumError(err).into_response(),
          },
          None => None,
        };
        let ssr = match &self.ssr {
          Some(gateway) => gateway.render(&page).await,
          None => None,
        };
        Html(document::compose(&self.template, plan.as_ref(), ssr, &page)).into_response()
      }
    }
  }
}

impl Default for Inertia {
  fn default() -> Self {
    Self::new()
  }
}
