use std::path::PathBuf;

use thiserror::Error;
use tsforge_core::WriteError;

/// Result type for tsforge-codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error)]
pub enum Error {
    /// No built-in template matches the requested component type.
    #[error("no template found for component type '{component_type}'")]
    TemplateNotFound { component_type: String },

    /// No custom template with the requested name exists in the configuration.
    #[error("no custom template named '{name}' found in the configuration")]
    CustomTemplateNotFound { name: String },

    /// Placeholder substitution failed.
    #[error("failed to render template")]
    Render(#[from] handlebars::RenderError),

    /// The target file already exists; it was left untouched.
    #[error("'{path}' already exists, choose a different name or delete the file")]
    AlreadyExists { path: PathBuf },

    /// The component file could not be created or written.
    #[error("failed to write '{path}'")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Auto-import is enabled but no barrel file exists at the target
    /// directory or its parent.
    #[error("no barrel file '{barrel_file_name}' found in '{directory}' or its parent")]
    BarrelNotFound {
        barrel_file_name: String,
        directory: PathBuf,
    },

    /// The barrel file exists but could not be opened or updated.
    #[error("failed to update barrel file '{path}'")]
    BarrelOpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the error leaves an already-written component file behind.
    ///
    /// Barrel failures happen after the component file is on disk; the write
    /// is not rolled back, so callers should report them as warnings rather
    /// than failures.
    pub fn is_barrel_warning(&self) -> bool {
        matches!(
            self,
            Error::BarrelNotFound { .. } | Error::BarrelOpenFailed { .. }
        )
    }
}

impl From<WriteError> for Box<Error> {
    fn from(err: WriteError) -> Self {
        Box::new(match err {
            WriteError::AlreadyExists { path } => Error::AlreadyExists { path },
            WriteError::Io { path, source } => Error::WriteFailed { path, source },
        })
    }
}
