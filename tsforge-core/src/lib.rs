//! Core utilities for the tsforge file generator.
//!
//! This crate provides the case transforms and write-once file persistence
//! used across the tsforge workspace.

mod casing;
mod file;

// File operations
pub use file::{WriteError, Written, write_new};
// Name transforms
pub use casing::{
    pluralize, singularize, to_camel_case, to_constant_case, to_dot_case, to_kebab_case,
    to_pascal_case, to_path_case, to_sentence_case, to_snake_case, to_title_case,
};
