//! HTML page rendering.

use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

use crate::check::DomainCheckResult;

const PAGE_TEMPLATE_NAME: &str = "index";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Email Domain Checker</title>
    <style>
        body { font-family: Arial, sans-serif; text-align: center; margin: 50px; }
        input, button { padding: 10px; margin: 5px; }
        table { margin: auto; border-collapse: collapse; width: 60%; }
        th, td { border: 1px solid black; padding: 8px; }
    </style>
</head>
<body>
    <h2>Email Domain Checker</h2>
    <form action="/check" method="post">
        <input type="text" name="domain" placeholder="Enter domain (example.com)" required>
        <button type="submit">Check</button>
    </form>
{{#if result}}
    <h3>Results for: {{result.domain}}</h3>
    <table>
        <tr><th>MX</th><td>{{result.has_mx}}</td></tr>
        <tr><th>SPF</th><td>{{result.has_spf}}</td></tr>
        <tr><th>SPF Record</th><td>{{result.spf_record}}</td></tr>
        <tr><th>DMARC</th><td>{{result.has_dmarc}}</td></tr>
        <tr><th>DMARC Record</th><td>{{result.dmarc_record}}</td></tr>
    </table>
{{/if}}
</body>
</html>
"#;

#[derive(Serialize)]
struct PageContext<'a> {
    result: Option<&'a DomainCheckResult>,
}

/// Compiled page template.
///
/// Built once at startup and shared through the router state.
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    /// Compiles the page template.
    ///
    /// # Errors
    ///
    /// Returns the template parse error.
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(escape_html);
        registry.register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { registry })
    }

    /// Renders the bare form.
    pub fn render_form(&self) -> Result<String, RenderError> {
        self.render(&PageContext { result: None })
    }

    /// Renders the form followed by the result table.
    pub fn render_result(&self, result: &DomainCheckResult) -> Result<String, RenderError> {
        self.render(&PageContext {
            result: Some(result),
        })
    }

    fn render(&self, context: &PageContext<'_>) -> Result<String, RenderError> {
        self.registry.render(PAGE_TEMPLATE_NAME, context)
    }
}

/// Escapes the characters that can open markup or break out of an attribute.
///
/// Narrower than the handlebars default, which also escapes `=` and would
/// mangle record text such as `v=spf1` in the page source.
fn escape_html(data: &str) -> String {
    let mut escaped = String::with_capacity(data.len());
    for c in data.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
