//! Content rendering: template lines + variables + formatting preferences.

use handlebars::Handlebars;
use serde_json::{Map, Value};
use tsforge_config::FormatConfig;

use crate::error::Result;

/// Render template lines into final file content.
///
/// The header comment and `use strict` banner are prepended before
/// substitution, so they may reference variables too. Placeholders use
/// `{{variable}}` syntax; unresolved placeholders render as empty strings
/// and substituted values are never HTML-escaped (the output is code).
pub fn render(
    template_lines: &[String],
    variables: &Map<String, Value>,
    format: &FormatConfig,
) -> Result<String> {
    let eol = format.end_of_line.sequence();

    let mut content = String::new();

    if !format.header_comment_template.is_empty() {
        content.push_str(&format.header_comment_template.join(eol));
        content.push_str(eol);
        content.push_str(eol);
    }

    if format.use_strict {
        let quote = format.quote();
        content.push_str(&format!("{quote}use strict{quote}{}", format.semi()));
        content.push_str(eol);
        content.push_str(eol);
    }

    content.push_str(&template_lines.join(eol));

    let mut registry = Handlebars::new();
    registry.register_escape_fn(handlebars::no_escape);
    let mut rendered = registry
        .render_template(&content, variables)
        .map_err(|e| Box::new(e.into()))?;

    if format.insert_final_newline {
        rendered.push_str(eol);
    }

    // Strips only the very last semicolon of the file, not one per
    // statement. Templates rely on this exact behavior.
    if format.exclude_semi_colon_at_end_of_line {
        if let Some(stripped) = rendered.strip_suffix(';') {
            rendered = stripped.to_string();
        } else if let Some(stripped) = rendered.strip_suffix(&format!(";{eol}")) {
            rendered = format!("{stripped}{eol}");
        }
    }

    Ok(rendered)
}
