//! CLI building blocks for the `quadhatch` binary.
//!
//! - `args` - parse flags into a run configuration
//! - `job` - load hatch parameters from a YAML job file
//! - `output` - print segments as text lines or JSON
//! - `render` - write the SVG file and PNG preview

pub mod args;
pub mod job;
pub mod output;
pub mod render;

pub use args::{Command, Config, USAGE};
