use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsforge_config::{CONFIG_FILE_NAME, STARTER_CONFIG};
use tsforge_core::{WriteError, write_new};

#[derive(Args)]
pub struct InitCommand {
    /// Directory for the new config file (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        match write_new(&self.directory, CONFIG_FILE_NAME, STARTER_CONFIG) {
            Ok(written) => {
                println!("Created {}", written.path.display());
                Ok(())
            }
            Err(WriteError::AlreadyExists { path }) => {
                eyre::bail!("'{}' already exists, delete it first", path.display())
            }
            Err(err) => Err(eyre::Report::new(err)),
        }
    }
}
