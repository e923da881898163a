/* src/server/adapter/axum/tests/respond.rs */

use std::io::Write;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::routing::get;
use drift_server_axum::drift_server::{
  AssetResolver, PageObject, PropValue, Props, ViteOptions,
};
use drift_server_axum::{Inertia, InertiaRequest};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn home(
  State(inertia): State<Arc<Inertia>>,
  req: InertiaRequest,
) -> axum::response::Response {
  let mut props = Props::new();
  props.insert("title".into(), serde_json::json!("Home").into());
  props.insert("report".into(), PropValue::deferred(|| serde_json::json!("expensive")));
  inertia.respond(req, "Home", props).await
}

fn app(inertia: Inertia) -> Router {
  Router::new().route("/", get(home)).with_state(Arc::new(inertia))
}

fn unescape_attr(s: &str) -> String {
  s.replace("&quot;", "\"")
    .replace("&#39;", "'")
    .replace("&lt;", "<")
    .replace("&gt;", ">")
    .replace("&amp;", "&")
}

fn embedded_page(html: &str) -> PageObject {
  let start = html.find("data-page=\"").expect("data-page attribute") + "data-page=\"".len();
  let end = html[start..].find('"').expect("closing quote") + start;
  serde_json::from_str(&unescape_attr(&html[start..end])).expect("valid page json")
}

async fn body_string(response: axum::response::Response) -> String {
  let bytes = response.into_body().collect().await.expect("body").to_bytes();
  String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn plain_request_gets_html_with_embedded_page() {
  let inertia =
    Inertia::new().version("v7").share("app_name", serde_json::json!("drift"));
  let response =
    app(inertia).oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();

  assert_eq!(response.status(), 200);
  let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
  assert!(content_type.starts_with("text/html"));

  let html = body_string(response).await;
  let page = embedded_page(&html);
  assert_eq!(page.component, "Home");
  assert_eq!(page.version, "v7");
  assert_eq!(page.props["title"], serde_json::json!("Home"));
  assert_eq!(page.props["app_name"], serde_json::json!("drift"));
  // Lazy prop excluded from the initial document render.
  assert!(page.props.get("report").is_none());
}

#[tokio::test]
async fn inertia_request_gets_json_protocol_response() {
  let inertia = Inertia::new().version("v7");
  let request = Request::get("/?tab=stats")
    .header("X-Requested-With", "XMLHttpRequest")
    .header("X-Inertia", "true")
    .body(Body::empty())
    .unwrap();
  let response = app(inertia).oneshot(request).await.unwrap();

  assert_eq!(response.status(), 200);
  assert_eq!(response.headers()["x-inertia"], "true");
  assert_eq!(response.headers()["vary"], "Accept");
  let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
  assert!(content_type.starts_with("application/json"));

  let page: PageObject = serde_json::from_str(&body_string(response).await).unwrap();
  assert_eq!(page.url, "/?tab=stats");
  assert_eq!(page.component, "Home");
  assert!(page.props.get("report").is_none());
}

#[tokio::test]
async fn partial_reload_returns_only_requested_props() {
  let inertia = Inertia::new();
  let request = Request::get("/")
    .header("X-Requested-With", "XMLHttpRequest")
    .header("X-Inertia", "true")
    .header("X-Inertia-Partial-Component", "Home")
    .header("X-Inertia-Partial-Data", "report")
    .body(Body::empty())
    .unwrap();
  let response = app(inertia).oneshot(request).await.unwrap();

  let page: PageObject = serde_json::from_str(&body_string(response).await).unwrap();
  assert_eq!(page.props.len(), 1);
  assert_eq!(page.props["report"], serde_json::json!("expensive"));
}

#[tokio::test]
async fn partial_reload_for_other_component_is_ignored() {
  let inertia = Inertia::new();
  let request = Request::get("/")
    .header("X-Requested-With", "XMLHttpRequest")
    .header("X-Inertia", "true")
    .header("X-Inertia-Partial-Component", "Settings")
    .header("X-Inertia-Partial-Data", "report")
    .body(Body::empty())
    .unwrap();
  let response = app(inertia).oneshot(request).await.unwrap();

  let page: PageObject = serde_json::from_str(&body_string(response).await).unwrap();
  assert!(page.props.get("report").is_none());
  assert_eq!(page.props["title"], serde_json::json!("Home"));
}

#[tokio::test]
async fn build_assets_are_injected_into_document_head() {
  let root = tempfile::tempdir().unwrap();
  let manifest_path = root.path().join("public/build/manifest.json");
  std::fs::create_dir_all(manifest_path.parent().unwrap()).unwrap();
  let mut f = std::fs::File::create(&manifest_path).unwrap();
  write!(
    f,
    r#"{{"src/main.jsx": {{"file": "assets/main.abcd1234.js", "css": ["assets/main.9876.css"]}}}}"#
  )
  .unwrap();

  let mut options = ViteOptions::new("src/main.jsx");
  options.debug = false;
  let inertia = Inertia::new().assets(AssetResolver::new(root.path(), options));
  let response =
    app(inertia).oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();

  let html = body_string(response).await;
  assert!(html.contains(r#"<script type="module" src="/build/assets/main.abcd1234.js"></script>"#));
  assert!(html.contains(r#"<link rel="stylesheet" href="/build/assets/main.9876.css">"#));
}

#[tokio::test]
async fn missing_manifest_degrades_to_assetless_document() {
  let root = tempfile::tempdir().unwrap();
  let mut options = ViteOptions::new("src/main.jsx");
  options.debug = false;
  let inertia = Inertia::new().assets(AssetResolver::new(root.path(), options));
  let response =
    app(inertia).oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();

  assert_eq!(response.status(), 200);
  let html = body_string(response).await;
  assert!(html.contains("data-page"));
  assert!(!html.contains("<script"));
}

#[tokio::test]
async fn missing_manifest_is_diagnostic_in_debug() {
  let root = tempfile::tempdir().unwrap();
  let mut options = ViteOptions::new("src/main.jsx");
  options.debug = true;
  let inertia = Inertia::new().assets(AssetResolver::new(root.path(), options));
  let response =
    app(inertia).oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();

  assert_eq!(response.status(), 500);
  let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
  assert_eq!(body["code"], "ASSET_CONFIG");
  assert!(body["message"].as_str().unwrap().contains("manifest"));
}
