//! Template rendering and barrel maintenance for the tsforge file generator.
//!
//! The pipeline is strictly sequential per request: resolve a template,
//! build the variable map, render the content, write the file (never
//! overwriting), then optionally prepend an export to the nearest barrel
//! file. The only state is the configuration snapshot handed in by the
//! caller.

mod barrel;
mod error;
mod generate;
mod registry;
mod render;
mod variables;

pub use barrel::{Updated, add_export};
pub use error::{Error, Result};
pub use generate::{BarrelOutcome, GenerationOutcome, GenerationRequest, Generator};
pub use registry::{ComponentType, built_in, resolve, resolve_custom};
pub use render::render;
pub use variables::build_variables;
