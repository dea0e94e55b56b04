// src/config/mod.rs

//! Task and resource description files.
//!
//! Responsibilities:
//! - Define the file-backed data model (`model.rs`).
//! - Read TOML or YAML from disk (`loader.rs`).
//! - Sanitise raw records into core input records (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_problem, load_resources, load_tasks, parse_resources, parse_tasks};
pub use model::{FileFormat, ParentList, RawCores, RawInt, RawResourceFile, RawTaskFile, TaskRecord};
