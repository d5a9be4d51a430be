use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail, eyre};
use tsforge_codegen::{ComponentType, GenerationRequest, Generator, built_in};
use tsforge_config::TsforgeToml;

use super::UnwrapOrExit;
use crate::commands::{report_outcome, validate_component_name, validate_folder_name};

#[derive(Args)]
pub struct NewCommand {
    /// Component type (see 'tsforge list')
    pub component_type: String,

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

    /// Type suffix for the file name, lowercase letters only
    #[arg(long)]
    pub sub_type: Option<String>,

    /// Print the rendered content without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl NewCommand {
    pub fn run(&self) -> Result<()> {
        validate_component_name(&self.name)?;
        validate_folder_name(&self.folder)?;

        let config = TsforgeToml::open_or_default(&self.config).unwrap_or_exit();

        let ty: ComponentType = self
            .component_type
            .parse()
            .map_err(|e: String| eyre!(e).wrap_err("run 'tsforge list' to see available types"))?;

        if let Some(sub_type) = &self.sub_type {
            if !sub_type.chars().all(|c| c.is_ascii_lowercase()) {
                bail!("sub-type '{sub_type}' is invalid, use lowercase letters only");
            }
        }

        let request = GenerationRequest {
            folder_name: self.folder.clone(),
            component_name: self.name.clone(),
            sub_type: self.sub_type.clone(),
            template: built_in(ty),
            type_only: ty.is_type_only(),
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
