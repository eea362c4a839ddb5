//! Full-page assembly: the preview shell and the parse-error shell.

use super::escape::escape;
use crate::defaults;
use crate::error::line_from_message;
use crate::model::Document;
use crate::theme::Theme;

const REFRESH_SCRIPT: &str = r#"(function () {
  const host = typeof acquireVsCodeApi === 'function' ? acquireVsCodeApi() : undefined;
  const button = document.getElementById('osf-refresh');
  if (!button) {
    return;
  }
  button.addEventListener('click', function () {
    if (host) {
      host.postMessage({ command: 'refresh' });
    } else {
      window.location.reload();
    }
  });
})();"#;

const ERROR_CSS: &str = "body { margin: 0; padding: 2rem; font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Helvetica, Arial, sans-serif; color: #1f2328; }
h1 { color: #cf222e; }
.osf-error-location { color: #57606a; }
.osf-error { padding: 1rem; background: #fff5f5; border: 1px solid #ffc1c1; border-radius: 6px; white-space: pre-wrap; }";

/// Content security context supplied by the host.
///
/// `nonce` authorizes the one inline script of the page. `source` is the
/// host's resource origin, allowed for images and stylesheets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Csp {
    pub nonce: String,
    pub source: String,
}

impl Csp {
    pub fn new(nonce: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            nonce: nonce.into(),
            source: source.into(),
        }
    }

    fn policy(&self) -> String {
        let source = if self.source.trim().is_empty() {
            String::new()
        } else {
            format!("{} ", self.source.trim())
        };
        format!(
            "default-src 'none'; img-src {source}https: data:; style-src {source}'unsafe-inline'; script-src 'nonce-{}';",
            self.nonce
        )
    }

    fn meta_tag(&self) -> String {
        format!(
            r#"<meta http-equiv="Content-Security-Policy" content="{}">"#,
            escape(&self.policy())
        )
    }

    fn nonce_attr(&self) -> String {
        format!(r#" nonce="{}""#, escape(&self.nonce))
    }
}

/// Wrap rendered content fragments in the preview document shell.
pub(crate) fn assemble(doc: &Document, theme: Theme, csp: Option<&Csp>, content: &str) -> String {
    let meta = doc.meta();
    let title = meta.and_then(|m| m.title());
    let page_title = escape(title.as_deref().unwrap_or(defaults::PAGE_TITLE));
    let header_title = escape(title.as_deref().unwrap_or(defaults::DOCUMENT_TITLE));

    let mut header_lines = String::new();
    if let Some(author) = meta.and_then(|m| m.author()) {
        header_lines.push_str(&format!(
            r#"<p class="osf-author">By {}</p>"#,
            escape(&author)
        ));
    }
    if let Some(date) = meta.and_then(|m| m.date()) {
        header_lines.push_str(&format!(r#"<p class="osf-date">{}</p>"#, escape(&date)));
    }

    let csp_meta = csp.map(Csp::meta_tag).unwrap_or_default();
    let nonce_attr = csp.map(Csp::nonce_attr).unwrap_or_default();
    let stylesheet = theme.stylesheet();
    let body_class = theme.body_class();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  {csp_meta}
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="osf-render">
  <title>{page_title}</title>
  <style>
{stylesheet}
  </style>
</head>
<body class="{body_class}">
<header class="osf-header">
  <h1>{header_title}</h1>
  {header_lines}
  <button id="osf-refresh" class="osf-refresh" type="button">Refresh</button>
</header>
<main class="osf-content">
{content}
</main>
<script{nonce_attr}>
{REFRESH_SCRIPT}
</script>
</body>
</html>"#
    )
}

/// Build the page shown in place of the preview when parsing failed.
pub fn render_error(message: &str, csp: Option<&Csp>) -> String {
    let csp_meta = csp.map(Csp::meta_tag).unwrap_or_default();
    let location = line_from_message(message)
        .map(|line| format!(r#"<p class="osf-error-location">Line {line}</p>"#))
        .unwrap_or_default();
    let message = escape(message);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  {csp_meta}
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>OSF Preview Error</title>
  <style>
{ERROR_CSS}
  </style>
</head>
<body>
<h1>Preview unavailable</h1>
<p>The document could not be parsed.</p>
{location}
<pre class="osf-error">{message}</pre>
</body>
</html>"#
    )
}
