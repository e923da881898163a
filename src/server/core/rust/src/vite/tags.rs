/* src/server/core/rust/src/vite/tags.rs */

use crate::escape::escape_html_attr;

/// Typed script tag. Explicit attributes instead of string rewriting, so the
/// `type="module"` requirement holds by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptTag {
  handle: String,
  src: Option<String>,
  inline: Option<String>,
  module: bool,
}

impl ScriptTag {
  pub fn module(handle: impl Into<String>, src: impl Into<String>) -> Self {
    Self { handle: handle.into(), src: Some(src.into()), inline: None, module: true }
  }

  /// Inline module script, e.g. the hot-reload preamble.
  pub fn inline_module(handle: impl Into<String>, body: impl Into<String>) -> Self {
    Self { handle: handle.into(), src: None, inline: Some(body.into()), module: true }
  }

  pub fn handle(&self) -> &str {
    &self.handle
  }

  pub fn src(&self) -> Option<&str> {
    self.src.as_deref()
  }

  pub fn render(&self) -> String {
    let type_attr = if self.module { r#" type="module""# } else { "" };
    match (&self.src, &self.inline) {
      (Some(src), _) => {
        format!(r#"<script{} src="{}"></script>"#, type_attr, escape_html_attr(src))
      }
      (None, Some(body)) => format!("<script{type_attr}>{body}</script>"),
      (None, None) => format!("<script{type_attr}></script>"),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleTag {
  handle: String,
  href: String,
}

impl StyleTag {
  pub fn new(handle: impl Into<String>, href: impl Into<String>) -> Self {
    Self { handle: handle.into(), href: href.into() }
  }

  pub fn handle(&self) -> &str {
    &self.handle
  }

  pub fn href(&self) -> &str {
    &self.href
  }

  pub fn render(&self) -> String {
    format!(r#"<link rel="stylesheet" href="{}">"#, escape_html_attr(&self.href))
  }
}
