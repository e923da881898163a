/* src/server/core/rust/src/vite/mod.rs */

pub mod manifest;
pub mod plan;
pub mod tags;

use std::path::PathBuf;

use crate::errors::DriftError;
use manifest::Manifest;
use plan::AssetPlan;
use tags::{ScriptTag, StyleTag};

pub const VITE_CLIENT_HANDLE: &str = "vite-client";

/// Whether a dev server is live. Probed on every call by checking the hot
/// marker file; never cached, so flipping the file flips the mode.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetMode {
  /// Dev server origin read from the hot file.
  Hot(String),
  Build,
}

/// Flat options for asset resolution. Defaults mirror a stock Vite setup.
#[derive(Debug, Clone)]
pub struct ViteOptions {
  /// Logical entry path, e.g. "src/main.jsx".
  pub input: String,
  pub public_dir: String,
  pub build_dir: String,
  /// Hot marker file relative to the root. Defaults to `<public_dir>/hot`.
  pub hot_file: Option<String>,
  /// Script handle for the entry; styles derive `<handle>-<n>`.
  pub handle: String,
  /// Inject the React-refresh preamble in hot mode.
  pub refresh_preamble: bool,
  /// URL prefix under which `<build_dir>` is served in build mode.
  pub public_base: String,
  /// Fail loud on manifest problems instead of degrading to "no assets".
  pub debug: bool,
}

impl ViteOptions {
  pub fn new(input: impl Into<String>) -> Self {
    Self {
      input: input.into(),
      public_dir: "public".to_string(),
      build_dir: "build".to_string(),
      hot_file: None,
      handle: "app".to_string(),
      refresh_preamble: true,
      public_base: "/".to_string(),
      debug: cfg!(debug_assertions),
    }
  }

  fn hot_file_rel(&self) -> String {
    self.hot_file.clone().unwrap_or_else(|| format!("{}/hot", self.public_dir))
  }
}

/// Resolves a logical entry to concrete script/style tags, negotiating hot vs
/// build mode per call.
#[derive(Debug, Clone)]
pub struct AssetResolver {
  root: PathBuf,
  options: ViteOptions,
}

impl AssetResolver {
  pub fn new(root: impl Into<PathBuf>, options: ViteOptions) -> Self {
    Self { root: root.into(), options }
  }

  pub fn options(&self) -> &ViteOptions {
    &self.options
  }

  pub fn probe_mode(&self) -> AssetMode {
    match std::fs::read_to_string(self.root.join(self.options.hot_file_rel())) {
      Ok(contents) => AssetMode::Hot(contents.trim().trim_end_matches('/').to_string()),
      Err(_) => AssetMode::Build,
    }
  }

  /// Compute the asset plan for the configured entry. `Ok(None)` means
  /// "nothing to enqueue": a hot-mode handle collision, or a manifest problem
  /// outside debug mode. In debug mode manifest problems are fatal.
  pub fn prepare(&self) -> Result<Option<AssetPlan>, DriftError> {
    match self.probe_mode() {
      AssetMode::Hot(url) => Ok(self.prepare_hot(&url)),
      AssetMode::Build => match self.prepare_build() {
        Ok(plan) => Ok(Some(plan)),
        Err(err) if self.options.debug => Err(err),
        Err(err) => {
          tracing::warn!(error = %err, "vite assets unavailable, rendering without them");
          Ok(None)
        }
      },
    }
  }

  fn prepare_hot(&self, hot_url: &str) -> Option<AssetPlan> {
    let mut plan = AssetPlan::new(AssetMode::Hot(hot_url.to_string()));
    plan.push_script(ScriptTag::module(VITE_CLIENT_HANDLE, hot_asset(hot_url, "@vite/client")));

    if self.options.refresh_preamble {
      plan.push_script(ScriptTag::inline_module(
        format!("{}-preamble", self.options.handle),
        refresh_preamble(hot_url),
      ));
    }

    let entry = ScriptTag::module(&self.options.handle, hot_asset(hot_url, &self.options.input));
    if !plan.push_script(entry) {
      return None;
    }
    Some(plan)
  }

  fn prepare_build(&self) -> Result<AssetPlan, DriftError> {
    let manifest_path = self
      .root
      .join(&self.options.public_dir)
      .join(&self.options.build_dir)
      .join("manifest.json");
    let manifest = Manifest::load(&manifest_path)?;

    let entry = manifest.get(&self.options.input).ok_or_else(|| {
      DriftError::asset_config(format!(
        "entry '{}' not found in {}",
        self.options.input,
        manifest_path.display()
      ))
    })?;

    let mut plan = AssetPlan::new(AssetMode::Build);
    plan.push_script(ScriptTag::module(&self.options.handle, self.build_url(&entry.file)));
    for (index, css) in entry.css.iter().enumerate() {
      plan.push_style(StyleTag::new(
        format!("{}-{index}", self.options.handle),
        self.build_url(css),
      ));
    }
    Ok(plan)
  }

  fn build_url(&self, file: &str) -> String {
    let base = self.options.public_base.trim_end_matches('/');
    format!("{base}/{}/{}", self.options.build_dir, file)
  }
}

fn hot_asset(hot_url: &str, entry: &str) -> String {
  format!("{}/{}", hot_url.trim_end_matches('/'), entry.trim_start_matches('/'))
}

fn refresh_preamble(hot_url: &str) -> String {
  format!(
    "import RefreshRuntime from '{}'\n\
     RefreshRuntime.injectIntoGlobalHook(window)\n\
     window.$RefreshReg$ = () => {{}}\n\
     window.$RefreshSig$ = () => (type) => type\n\
     window.__vite_plugin_react_preamble_installed__ = true",
    hot_asset(hot_url, "@react-refresh")
  )
}
