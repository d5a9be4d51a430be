mod completions;
mod custom;
mod init;
mod list;
mod new;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use custom::CustomCommand;
use eyre::Result;
use init::InitCommand;
use list::ListCommand;
use new::NewCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tsforge_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Reject component names the pipeline must never see.
///
/// The generator uses the name verbatim in the file name, so an empty name
/// would silently produce a hidden dot-file.
pub(crate) fn validate_component_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        eyre::bail!("the component name must not be empty");
    }
    Ok(())
}

/// Reject folder names that would escape or break the target path.
///
/// An empty folder is allowed and means the output directory itself.
pub(crate) fn validate_folder_name(folder: &str) -> Result<()> {
    if folder.starts_with('/') {
        eyre::bail!("the folder name must be relative, it cannot start with '/'");
    }
    if folder.chars().any(char::is_whitespace) {
        eyre::bail!("the folder name must not contain whitespace");
    }
    Ok(())
}

/// Print the result of a generation, including barrel warnings.
///
/// A missing barrel is a partial success: the component file is already on
/// disk, so the warning goes to stderr and the command still succeeds.
pub(crate) fn report_outcome(outcome: &tsforge_codegen::GenerationOutcome) {
    println!("Created {}", outcome.written.path.display());

    match &outcome.barrel {
        tsforge_codegen::BarrelOutcome::Updated(updated) => {
            println!("Updated barrel {}", updated.barrel_path.display());
        }
        tsforge_codegen::BarrelOutcome::Warning(err) => {
            eprintln!("warning: {err}");
        }
        tsforge_codegen::BarrelOutcome::Disabled => {}
    }
}

#[derive(Parser)]
#[command(name = "tsforge")]
#[command(version)]
#[command(about = "Generate TypeScript source files from templates")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::New(cmd) => cmd.run(),
            Commands::Custom(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a built-in component
    New(NewCommand),

    /// Generate a component from a custom template in tsforge.toml
    Custom(CustomCommand),

    /// List built-in component types and custom templates
    List(ListCommand),

    /// Write a starter tsforge.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_component_name_rejected() {
        assert!(validate_component_name("").is_err());
        assert!(validate_component_name("   ").is_err());
        assert!(validate_component_name("user").is_ok());
    }

    #[test]
    fn test_folder_name_rules() {
        assert!(validate_folder_name("").is_ok());
        assert!(validate_folder_name("src/models").is_ok());
        assert!(validate_folder_name("/etc").is_err());
        assert!(validate_folder_name("my models").is_err());
    }
}
