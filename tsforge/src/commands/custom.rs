use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsforge_codegen::{GenerationRequest, Generator, resolve_custom};
use tsforge_config::TsforgeToml;

use super::UnwrapOrExit;
use crate::commands::{report_outcome, validate_component_name, validate_folder_name};

#[derive(Args)]
pub struct CustomCommand {
    /// Custom template name as listed under [[templates]] in tsforge.toml
    pub template_name: String,

    /// Component name; the file name uses it verbatim
    pub name: String,

    /// Folder for the new file, relative to the output directory
    #[arg(short, long, default_value = "")]
    pub folder: String,

    /// Output base directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Path to tsforge.toml (defaults to ./tsforge.toml)
    #[arg(short, long, default_value = "tsforge.toml")]
    pub config: PathBuf,

    /// Print the rendered content without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl CustomCommand {
    pub fn run(&self) -> Result<()> {
        validate_component_name(&self.name)?;
        validate_folder_name(&self.folder)?;

        let config = TsforgeToml::open_or_default(&self.config).unwrap_or_exit();

        let template = resolve_custom(&self.template_name, &config.templates)
            .map_err(|e| eyre::Report::new(*e))?
            .clone();

        let request = GenerationRequest {
            folder_name: self.folder.clone(),
            component_name: self.name.clone(),
            sub_type: None,
            template,
            type_only: false,
        };

        let generator = Generator::new(&config);

        if self.dry_run {
            let file_name = generator.file_name(&request);
            let content = generator
                .render(&request)
                .map_err(|e| eyre::Report::new(*e))?;
            println!("── {file_name} ──");
            print!("{content}");
            return Ok(());
        }

        let outcome = generator
            .generate(&self.output, &request)
            .map_err(|e| eyre::Report::new(*e))?;

        report_outcome(&outcome);
        Ok(())
    }
}
