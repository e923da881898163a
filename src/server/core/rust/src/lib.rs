/* src/server/core/rust/src/lib.rs */

pub mod errors;
pub mod escape;
pub mod headers;
pub mod page;
pub mod props;
pub mod renderer;
pub mod ssr;
pub mod vite;

// Re-exports for ergonomic use
pub use errors::DriftError;
pub use escape::escape_html_attr;
pub use headers::RequestHeaders;
pub use page::{PageObject, RequestContext};
pub use props::{DeferredFn, PropValue, Props};
pub use renderer::{RenderOutcome, render};
pub use ssr::{SsrGateway, SsrPage};
pub use vite::{AssetMode, AssetResolver, VITE_CLIENT_HANDLE, ViteOptions};
pub use vite::plan::AssetPlan;
pub use vite::tags::{ScriptTag, StyleTag};
