/* src/server/core/rust/src/vite/plan.rs */

use super::AssetMode;
use super::tags::{ScriptTag, StyleTag};

/// Eagerly computed set of tags to inject. Computed by
/// [`AssetResolver::prepare`](super::AssetResolver::prepare), emitted by the
/// host template via [`head_markup`](Self::head_markup).
#[derive(Debug, Clone)]
pub struct AssetPlan {
  mode: AssetMode,
  scripts: Vec<ScriptTag>,
  styles: Vec<StyleTag>,
}

impl AssetPlan {
  pub(super) fn new(mode: AssetMode) -> Self {
    Self { mode, scripts: Vec::new(), styles: Vec::new() }
  }

  pub fn mode(&self) -> &AssetMode {
    &self.mode
  }

  pub fn scripts(&self) -> &[ScriptTag] {
    &self.scripts
  }

  pub fn styles(&self) -> &[StyleTag] {
    &self.styles
  }

  /// Register a script. A handle collision is non-fatal: the tag is dropped
  /// and `false` returned.
  pub(super) fn push_script(&mut self, tag: ScriptTag) -> bool {
    if self.scripts.iter().any(|s| s.handle() == tag.handle()) {
      return false;
    }
    self.scripts.push(tag);
    true
  }

  pub(super) fn push_style(&mut self, tag: StyleTag) -> bool {
    if self.styles.iter().any(|s| s.handle() == tag.handle()) {
      return false;
    }
    self.styles.push(tag);
    true
  }

  /// Markup for the document head: styles first, then scripts, each in
  /// registration order.
  pub fn head_markup(&self) -> String {
    let mut out = String::new();
    for style in &self.styles {
      out.push_str(&style.render());
      out.push('\n');
    }
    for script in &self.scripts {
      out.push_str(&script.render());
      out.push('\n');
    }
    out
  }
}
