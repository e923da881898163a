/* src/server/core/rust/src/props.rs */

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

pub type DeferredFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// A prop is either a plain JSON value, a deferred computation invoked only
/// when the prop survives filtering, or a nested map of the same.
#[derive(Clone)]
pub enum PropValue {
  Value(Value),
  Deferred(DeferredFn),
  Map(Props),
}

pub type Props = BTreeMap<String, PropValue>;

impl PropValue {
  pub fn deferred<F>(f: F) -> Self
  where
    F: Fn() -> Value + Send + Sync + 'static,
  {
    Self::Deferred(Arc::new(f))
  }

  fn is_deferred(&self) -> bool {
    matches!(self, Self::Deferred(_))
  }
}

impl From<Value> for PropValue {
  fn from(value: Value) -> Self {
    Self::Value(value)
  }
}

impl std::fmt::Debug for PropValue {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
      Self::Deferred(_) => f.write_str("Deferred(..)"),
      Self::Map(m) => f.debug_tuple("Map").field(m).finish(),
    }
  }
}

/// Merge shared props over caller props. Shared entries win on key conflict,
/// matching the upstream protocol's merge order.
pub fn merge(props: Props, shared: &Props) -> Props {
  let mut merged = props;
  for (key, value) in shared {
    merged.insert(key.clone(), value.clone());
  }
  merged
}

/// Keep exactly the requested top-level keys. Requested keys missing from the
/// prop set are silently absent, never an error.
pub fn retain_partial(props: Props, keys: &[String]) -> Props {
  let mut out = Props::new();
  for (key, value) in props {
    if keys.iter().any(|k| k == &key) {
      out.insert(key, value);
    }
  }
  out
}

/// Drop deferred entries at every nesting depth. Runs on non-partial renders
/// so no deferred closure is ever invoked unless explicitly requested.
pub fn drop_deferred(props: Props) -> Props {
  let mut out = Props::new();
  for (key, value) in props {
    match value {
      PropValue::Map(inner) => {
        out.insert(key, PropValue::Map(drop_deferred(inner)));
      }
      v if v.is_deferred() => {}
      v => {
        out.insert(key, v);
      }
    }
  }
  out
}

/// Resolution pass: invoke each surviving deferred exactly once, recurse into
/// maps, and produce plain JSON. Must run after filtering.
pub fn resolve(props: Props) -> serde_json::Map<String, Value> {
  let mut out = serde_json::Map::new();
  for (key, value) in props {
    out.insert(key, resolve_value(value));
  }
  out
}

fn resolve_value(value: PropValue) -> Value {
  match value {
    PropValue::Value(v) => v,
    PropValue::Deferred(f) => f(),
    PropValue::Map(inner) => Value::Object(resolve(inner)),
  }
}
