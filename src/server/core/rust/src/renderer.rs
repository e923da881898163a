/* src/server/core/rust/src/renderer.rs */

use crate::page::{PageObject, RequestContext};
use crate::props::{self, Props};

/// How the host should answer the request: a bare JSON page object for
/// protocol-speaking clients, or a full HTML document embedding the same.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
  Inertia(PageObject),
  Document(PageObject),
}

impl RenderOutcome {
  pub fn page(&self) -> &PageObject {
    match self {
      Self::Inertia(page) | Self::Document(page) => page,
    }
  }

  pub fn into_page(self) -> PageObject {
    match self {
      Self::Inertia(page) | Self::Document(page) => page,
    }
  }
}

/// Compute the page object for one request.
///
/// Pipeline: merge shared props over caller props, apply the partial-reload
/// filter (or drop deferreds when no partial applies), then resolve the
/// surviving tree. Filtering runs first so a deferred prop the client did not
/// ask for is never invoked.
pub fn render(ctx: &RequestContext, component: impl Into<String>, props: Props) -> RenderOutcome {
  let component = component.into();
  let merged = props::merge(props, ctx.shared());

  let headers = ctx.headers();
  let filtered = match (headers.partial_keys(), headers.partial_component()) {
    (Some(keys), Some(target)) if target == component => props::retain_partial(merged, &keys),
    _ => props::drop_deferred(merged),
  };

  let page = PageObject {
    url: ctx.url().to_string(),
    component,
    version: ctx.version().to_string(),
    props: props::resolve(filtered),
  };

  if headers.is_inertia() { RenderOutcome::Inertia(page) } else { RenderOutcome::Document(page) }
}
