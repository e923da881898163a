/* src/server/core/rust/src/escape.rs */

/// Escape a string for use inside a double-quoted HTML attribute value.
/// Covers the `data-page` JSON embed and tag-builder attribute values;
/// escaping `<` also keeps `</script>` sequences inert.
pub fn escape_html_attr(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for ch in input.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}
