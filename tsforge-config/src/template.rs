//! Content template definitions.

use serde::{Deserialize, Serialize};

/// A named skeleton of content lines used to generate a new file's body.
///
/// Built-in component types each ship one of these; users can add their own
/// under `[[templates]]` in `tsforge.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentTemplate {
    /// Display name, used to select custom templates
    pub name: String,
    /// Short human description
    pub description: String,
    /// Semantic suffix used in file names and export names ("service", "controller")
    #[serde(rename = "type")]
    pub kind: String,
    /// Content lines, may contain `{{variable}}` placeholders
    pub template: Vec<String>,
}

impl ContentTemplate {
    /// Create a template from its parts.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: impl Into<String>,
        template: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: kind.into(),
            template: template.into_iter().map(Into::into).collect(),
        }
    }
}
