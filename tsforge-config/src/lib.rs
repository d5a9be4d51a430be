//! Configuration types and parsing for tsforge.toml files.
//!
//! The configuration is an immutable snapshot per invocation: callers load
//! it once, hand it to the generation pipeline, and reload on the next run
//! if the file changed.

mod config;
mod error;
mod file;
mod format;
mod template;

pub use config::Config;
pub use error::{Error, Result};
pub use file::{CONFIG_FILE_NAME, STARTER_CONFIG, TsforgeToml};
pub use format::{EndOfLine, FormatConfig, Language, ProjectConfig};
pub use template::ContentTemplate;
