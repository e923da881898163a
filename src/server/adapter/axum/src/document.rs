/* src/server/adapter/axum/src/document.rs */

use drift_server::{AssetPlan, PageObject, SsrPage, escape_html_attr};

/// Comment markers the root template must carry. `head` receives asset tags
/// and SSR head lines; `app` receives the hydration root or the SSR body.
pub const HEAD_MARKER: &str = "<!--drift:head-->";
pub const APP_MARKER: &str = "<!--drift:app-->";

pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<!--drift:head-->
</head>
<body>
<!--drift:app-->
</body>
</html>
"#;

/// Assemble the full-page document from an eagerly computed asset plan and
/// an optional SSR reply. The page object always rides along as HTML-escaped
/// JSON in the `data-page` attribute; an SSR body is expected to carry its
/// own hydration root.
pub(crate) fn compose(
  template: &str,
  plan: Option<&AssetPlan>,
  ssr: Option<SsrPage>,
  page: &PageObject,
) -> String {
  let mut head = plan.map(AssetPlan::head_markup).unwrap_or_default();
  let (ssr_head, ssr_body) = match ssr {
    Some(ssr) => (ssr.head, Some(ssr.body)),
    None => (Vec::new(), None),
  };
  for line in &ssr_head {
    head.push_str(line);
    head.push('\n');
  }

  let app = match ssr_body {
    Some(body) => body,
    None => hydration_root(page),
  };

  template.replacen(HEAD_MARKER, head.trim_end(), 1).replacen(APP_MARKER, &app, 1)
}

fn hydration_root(page: &PageObject) -> String {
  let json = serde_json::to_string(page).unwrap_or_default();
  format!(r#"<div id="app" data-page="{}"></div>"#, escape_html_attr(&json))
}
