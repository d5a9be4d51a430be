use std::path::{Path, PathBuf};

use crate::{Result, config::Config, error::Error};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "tsforge.toml";

/// Starter configuration written by `tsforge init`.
pub const STARTER_CONFIG: &str = r#"[format]
use-single-quotes = true
exclude-semi-colon-at-end-of-line = false
end-of-line = "lf"
use-strict = false
insert-final-newline = true
include-type-in-file-name = false
keep-extension-on-export = false
default-barrel-file-name = "index"
file-extension = "ts"
language = "typescript"
auto-import = false

[project]
author = ""
owner = ""
maintainers = ""
license = ""
version = ""

# [[templates]]
# name = "React Component"
# description = "A functional React component"
# type = "component"
# template = [
#   "export const {{fileNamePascalCase}} = () => {",
#   "  return null;",
#   "};",
# ]
"#;

/// Represents a tsforge.toml file with both raw content and parsed config.
#[derive(Debug)]
pub struct TsforgeToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl TsforgeToml {
    /// Open and parse a tsforge.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open the config file if it exists, otherwise fall back to defaults.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Config> {
        if path.as_ref().exists() {
            Ok(Self::open(path)?.config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
