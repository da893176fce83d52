//! Build-time `.env` loader for firmware crates.
//!
//! Reads `KEY=VALUE` pairs from a `.env` file in the consuming package
//! root and registers each one as a compile-time definition, so WiFi
//! credentials and feature switches never get hardcoded in source.
//! Intended to run from a `build.rs`:
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     let loader = buildenv::EnvLoader::from_manifest_dir()?;
//!     loader.load(&mut buildenv::CargoDefineSink)?;
//!     Ok(())
//! }
//! ```
//!
//! A missing `.env` only logs a warning and leaves the compiled-in
//! defaults in effect.

mod define;
mod loader;
mod parse;
mod sink;

pub use define::{kind_of, render_value, ValueKind};
pub use loader::EnvLoader;
pub use parse::{parse_line, EnvEntry};
pub use sink::{CargoDefineSink, DefineSink, MemoryDefineSink};
