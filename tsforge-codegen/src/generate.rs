//! Generation orchestration: resolve, render, write, update barrel.

use std::path::Path;

use tsforge_config::{Config, ContentTemplate};
use tsforge_core::{Written, to_pascal_case, to_title_case, write_new};

use crate::{
    barrel::{Updated, add_export},
    error::{Error, Result},
    render::render,
    variables::build_variables,
};

/// A single generation request, consumed by [`Generator::generate`].
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Folder for the new file, relative to the base directory
    pub folder_name: String,
    /// User-chosen component name, used verbatim in the file name
    pub component_name: String,
    /// Optional sub-type overriding the template's type suffix
    pub sub_type: Option<String>,
    /// The resolved template
    pub template: ContentTemplate,
    /// Emit a type-only barrel export (interfaces and type aliases)
    pub type_only: bool,
}

impl GenerationRequest {
    /// The type segment used in file names and variables.
    pub fn file_type(&self) -> &str {
        self.sub_type.as_deref().unwrap_or(&self.template.kind)
    }
}

/// What happened to the barrel file after the component file was written.
#[derive(Debug)]
pub enum BarrelOutcome {
    /// Auto-import is disabled
    Disabled,
    /// The export line was prepended
    Updated(Updated),
    /// The barrel could not be found or opened; the component file stays on
    /// disk and the generation counts as a partial success
    Warning(Box<Error>),
}

/// Result of a completed generation.
#[derive(Debug)]
pub struct GenerationOutcome {
    /// The written component file
    pub written: Written,
    /// Barrel update result
    pub barrel: BarrelOutcome,
}

/// Runs generation requests against a configuration snapshot.
pub struct Generator<'a> {
    config: &'a Config,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Generated file name: `<name>[.<type>].<extension>`.
    ///
    /// The type segment is present only when `include-type-in-file-name`
    /// is enabled.
    pub fn file_name(&self, request: &GenerationRequest) -> String {
        let format = &self.config.format;
        if format.include_type_in_file_name {
            format!(
                "{}.{}.{}",
                request.component_name,
                request.file_type(),
                format.file_extension
            )
        } else {
            format!("{}.{}", request.component_name, format.file_extension)
        }
    }

    /// Name under which the component is re-exported from the barrel.
    pub fn export_name(&self, request: &GenerationRequest) -> String {
        let pascal = to_pascal_case(&request.component_name);
        if self.config.format.include_type_in_file_name {
            format!("{pascal}{}", to_title_case(request.file_type()))
        } else {
            pascal
        }
    }

    /// Render the final file content without touching the filesystem.
    pub fn render(&self, request: &GenerationRequest) -> Result<String> {
        let variables = build_variables(
            &request.folder_name,
            &request.component_name,
            request.file_type(),
            &self.config.format.file_extension,
            &self.config.project,
        );
        render(&request.template.template, &variables, &self.config.format)
    }

    /// Run a full generation: render, write the file, update the barrel.
    ///
    /// The barrel step runs only when `auto-import` is enabled and is best
    /// effort: a missing or unreadable barrel is reported as a warning in
    /// the outcome, never as an error, because the component file is
    /// already on disk by then.
    pub fn generate(&self, base_dir: &Path, request: &GenerationRequest) -> Result<GenerationOutcome> {
        let content = self.render(request)?;
        let target_dir = base_dir.join(&request.folder_name);
        let file_name = self.file_name(request);

        let written = write_new(&target_dir, &file_name, &content)?;

        let barrel = if self.config.format.auto_import {
            match add_export(
                &target_dir,
                &file_name,
                &self.export_name(request),
                &self.config.format.barrel_file_name(),
                request.type_only,
                &self.config.format,
            ) {
                Ok(updated) => BarrelOutcome::Updated(updated),
                Err(err) if err.is_barrel_warning() => BarrelOutcome::Warning(err),
                Err(err) => return Err(err),
            }
        } else {
            BarrelOutcome::Disabled
        };

        Ok(GenerationOutcome { written, barrel })
    }
}

#[cfg(test)]
mod tests {
    use tsforge_config::FormatConfig;

    use crate::registry::{ComponentType, built_in};

    use super::*;

    fn request(name: &str, ty: ComponentType) -> GenerationRequest {
        GenerationRequest {
            folder_name: "models".to_string(),
            component_name: name.to_string(),
            sub_type: None,
            template: built_in(ty),
            type_only: ty.is_type_only(),
        }
    }

    #[test]
    fn test_file_name_without_type_segment() {
        let config = Config::default();
        let generator = Generator::new(&config);

        assert_eq!(
            generator.file_name(&request("user", ComponentType::Class)),
            "user.ts"
        );
    }

    #[test]
    fn test_file_name_with_type_segment() {
        let config = Config {
            format: FormatConfig {
                include_type_in_file_name: true,
                ..FormatConfig::default()
            },
            ..Config::default()
        };
        let generator = Generator::new(&config);

        assert_eq!(
            generator.file_name(&request("user", ComponentType::Class)),
            "user.class.ts"
        );

        let mut with_sub_type = request("user", ComponentType::Class);
        with_sub_type.sub_type = Some("model".to_string());
        assert_eq!(generator.file_name(&with_sub_type), "user.model.ts");
    }

    #[test]
    fn test_export_name() {
        let config = Config::default();
        let generator = Generator::new(&config);
        assert_eq!(
            generator.export_name(&request("user", ComponentType::Class)),
            "User"
        );

        let config = Config {
            format: FormatConfig {
                include_type_in_file_name: true,
                ..FormatConfig::default()
            },
            ..Config::default()
        };
        let generator = Generator::new(&config);
        assert_eq!(
            generator.export_name(&request("user", ComponentType::ExpressController)),
            "UserController"
        );
    }

    #[test]
    fn test_render_built_in_class() {
        let config = Config::default();
        let generator = Generator::new(&config);

        let content = generator.render(&request("user", ComponentType::Class)).unwrap();

        assert_eq!(content, "export class User {\n  constructor() {}\n}\n");
    }
}
