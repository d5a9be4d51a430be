use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsforge_codegen::{ComponentType, built_in};
use tsforge_config::TsforgeToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to tsforge.toml (defaults to ./tsforge.toml)
    #[arg(short, long, default_value = "tsforge.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = TsforgeToml::open_or_default(&self.config).unwrap_or_exit();

        println!("Component types:");
        for ty in ComponentType::ALL {
            let template = built_in(ty);
            println!("  {:<20} {}", ty.as_str(), template.description);
        }

        if !config.templates.is_empty() {
            println!("\nCustom templates:");
            for template in &config.templates {
                println!("  {:<20} {}", template.name, template.description);
            }
        }

        Ok(())
    }
}
