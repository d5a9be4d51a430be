//! Barrel file maintenance.
//!
//! After a component file is written, the matching export statement is
//! prepended to the nearest barrel file. The search walks up at most one
//! directory level. Re-running a generation prepends a second line; the
//! barrel is never deduplicated.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tsforge_config::FormatConfig;

use crate::error::{Error, Result};

/// A successfully updated barrel file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Updated {
    /// Path of the barrel file, for callers that want to open or format it.
    pub barrel_path: PathBuf,
}

/// Prepend an export for `generated_file_name` to the nearest barrel file.
///
/// The barrel is searched in `target_directory`, then in its parent. The
/// export specifier is the POSIX-style relative path from the barrel's
/// directory to the generated file, extension stripped unless
/// `keep_extension_on_export` is set.
pub fn add_export(
    target_directory: &Path,
    generated_file_name: &str,
    exported_name: &str,
    barrel_file_name: &str,
    type_only: bool,
    format: &FormatConfig,
) -> Result<Updated> {
    let (barrel_path, barrel_dir) = locate_barrel(target_directory, barrel_file_name)?;

    let existing = fs::read_to_string(&barrel_path).map_err(|source| {
        Box::new(Error::BarrelOpenFailed {
            path: barrel_path.clone(),
            source,
        })
    })?;

    let specifier = export_specifier(
        target_directory,
        &barrel_dir,
        generated_file_name,
        format.keep_extension_on_export,
    );

    let quote = format.quote();
    let semi = format.semi();
    let line = if type_only {
        format!("export type {{ {exported_name} }} from {quote}{specifier}{quote}{semi}")
    } else {
        format!("export * from {quote}{specifier}{quote}{semi}")
    };

    let updated = format!("{line}{}{existing}", format.end_of_line.sequence());
    fs::write(&barrel_path, updated).map_err(|source| {
        Box::new(Error::BarrelOpenFailed {
            path: barrel_path.clone(),
            source,
        })
    })?;

    Ok(Updated { barrel_path })
}

/// Search `target_directory` then its parent for the barrel file.
fn locate_barrel(
    target_directory: &Path,
    barrel_file_name: &str,
) -> Result<(PathBuf, PathBuf)> {
    let candidate = target_directory.join(barrel_file_name);
    if candidate.exists() {
        return Ok((candidate, target_directory.to_path_buf()));
    }

    if let Some(parent) = target_directory.parent() {
        let candidate = parent.join(barrel_file_name);
        if candidate.exists() {
            return Ok((candidate, parent.to_path_buf()));
        }
    }

    Err(Box::new(Error::BarrelNotFound {
        barrel_file_name: barrel_file_name.to_string(),
        directory: target_directory.to_path_buf(),
    }))
}

/// Compute the import specifier from the barrel's directory to the file.
fn export_specifier(
    target_directory: &Path,
    barrel_dir: &Path,
    generated_file_name: &str,
    keep_extension: bool,
) -> String {
    let mut relative = target_directory
        .strip_prefix(barrel_dir)
        .unwrap_or(Path::new(""))
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");

    if !relative.is_empty() {
        relative.push('/');
    }

    let file_name = if keep_extension {
        generated_file_name.to_string()
    } else {
        Path::new(generated_file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| generated_file_name.to_string())
    };

    format!("./{relative}{file_name}")
}
