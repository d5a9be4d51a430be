//! Formatting preferences for generated files.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Line ending used in generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    /// Unix line endings (`\n`)
    Lf,
    /// Windows line endings (`\r\n`)
    Crlf,
}

impl EndOfLine {
    /// The line ending character sequence.
    pub fn sequence(&self) -> &'static str {
        match self {
            EndOfLine::Lf => "\n",
            EndOfLine::Crlf => "\r\n",
        }
    }
}

/// Target language, which decides the barrel file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// TypeScript (barrel file `index.ts`)
    TypeScript,
    /// JavaScript (barrel file `index.js`)
    JavaScript,
}

impl Language {
    /// File extension used for the barrel file.
    pub fn barrel_extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }

    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Ok(Language::TypeScript),
            "javascript" | "js" => Ok(Language::JavaScript),
            _ => Err(format!(
                "unknown language '{s}', expected 'typescript' or 'javascript'"
            )),
        }
    }
}

/// Formatting preferences applied to every generated file.
///
/// Loaded once per invocation from `tsforge.toml` and treated as an
/// immutable snapshot; a changed config file takes effect on the next run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FormatConfig {
    /// Use `'` instead of `"` in generated statements
    pub use_single_quotes: bool,
    /// Drop the trailing semicolon at the very end of the rendered file
    pub exclude_semi_colon_at_end_of_line: bool,
    /// Line ending for generated files
    pub end_of_line: EndOfLine,
    /// Prepend a `use strict` banner
    pub use_strict: bool,
    /// Comment lines inserted at the top of every generated file
    pub header_comment_template: Vec<String>,
    /// Terminate the file with a final newline
    pub insert_final_newline: bool,
    /// Keep the file extension in barrel export specifiers
    pub keep_extension_on_export: bool,
    /// Insert the component type into generated file names (`user.service.ts`)
    pub include_type_in_file_name: bool,
    /// Barrel file name without extension
    pub default_barrel_file_name: String,
    /// Extension for generated component files
    pub file_extension: String,
    /// Target language, decides the barrel file extension
    pub language: Language,
    /// Add an export to the barrel file after generating a component
    pub auto_import: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            use_single_quotes: true,
            exclude_semi_colon_at_end_of_line: false,
            end_of_line: EndOfLine::Lf,
            use_strict: false,
            header_comment_template: Vec::new(),
            insert_final_newline: true,
            keep_extension_on_export: false,
            include_type_in_file_name: false,
            default_barrel_file_name: "index".to_string(),
            file_extension: "ts".to_string(),
            language: Language::TypeScript,
            auto_import: false,
        }
    }
}

impl FormatConfig {
    /// The quote character per the single-quote preference.
    pub fn quote(&self) -> char {
        if self.use_single_quotes { '\'' } else { '"' }
    }

    /// The statement terminator, `;` or empty.
    pub fn semi(&self) -> &'static str {
        if self.exclude_semi_colon_at_end_of_line {
            ""
        } else {
            ";"
        }
    }

    /// Barrel file name including the language extension.
    pub fn barrel_file_name(&self) -> String {
        format!(
            "{}.{}",
            self.default_barrel_file_name,
            self.language.barrel_extension()
        )
    }
}

/// Project metadata passed through to templates as variables.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub author: String,
    pub owner: String,
    pub maintainers: String,
    pub license: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let format = FormatConfig::default();
        assert!(format.use_single_quotes);
        assert!(!format.exclude_semi_colon_at_end_of_line);
        assert_eq!(format.end_of_line, EndOfLine::Lf);
        assert!(format.insert_final_newline);
        assert_eq!(format.default_barrel_file_name, "index");
        assert_eq!(format.file_extension, "ts");
        assert!(!format.auto_import);
    }

    #[test]
    fn test_quote_and_semi() {
        let mut format = FormatConfig::default();
        assert_eq!(format.quote(), '\'');
        assert_eq!(format.semi(), ";");

        format.use_single_quotes = false;
        format.exclude_semi_colon_at_end_of_line = true;
        assert_eq!(format.quote(), '"');
        assert_eq!(format.semi(), "");
    }

    #[test]
    fn test_end_of_line_sequence() {
        assert_eq!(EndOfLine::Lf.sequence(), "\n");
        assert_eq!(EndOfLine::Crlf.sequence(), "\r\n");
    }

    #[test]
    fn test_barrel_file_name_follows_language() {
        let mut format = FormatConfig::default();
        assert_eq!(format.barrel_file_name(), "index.ts");

        format.language = Language::JavaScript;
        assert_eq!(format.barrel_file_name(), "index.js");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str("ts").unwrap(), Language::TypeScript);
        assert_eq!(
            Language::from_str("JavaScript").unwrap(),
            Language::JavaScript
        );
        assert!(Language::from_str("python").is_err());
    }
}
