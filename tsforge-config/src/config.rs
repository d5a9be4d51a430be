//! Root configuration for tsforge.

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    error::Error,
    format::{FormatConfig, ProjectConfig},
    template::ContentTemplate,
};

/// Root configuration parsed from `tsforge.toml`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Formatting preferences
    pub format: FormatConfig,

    /// Project metadata passed through to templates
    pub project: ProjectConfig,

    /// User-defined content templates
    #[serde(rename = "templates")]
    pub templates: Vec<ContentTemplate>,
}

impl Config {
    /// Parse a configuration from TOML content, reporting `filename` in diagnostics.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    /// Find a custom template by its display name.
    pub fn template(&self, name: &str) -> Option<&ContentTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    fn validate(&self, content: &str, filename: &str) -> Result<()> {
        for template in &self.templates {
            if template.template.is_empty() {
                return Err(Error::validation(
                    format!("template '{}' has no content lines", template.name),
                    content,
                    filename,
                ));
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "tsforge.toml")
    }
}
