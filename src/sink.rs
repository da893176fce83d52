//! Definition sinks, the external side of the loader.

use std::path::{Path, PathBuf};

/// Build-configuration collaborator that receives resolved definitions.
///
/// Duplicate keys are registered again in file order; whether the last
/// occurrence wins is the sink's own rule, not the loader's.
pub trait DefineSink {
    /// Register one compile-time definition.
    fn append_define(&mut self, key: &str, value: &str);

    /// Register a path whose changes should re-trigger the build.
    /// Sinks without a change-tracking notion ignore this.
    fn track_file(&mut self, _path: &Path) {}
}

/// Speaks the Cargo build-script protocol on stdout.
///
/// Definitions become `cargo:rustc-env=` directives, so the consuming
/// firmware reads them back with `env!()`. Tracked paths become
/// `cargo:rerun-if-changed=` directives.
pub struct CargoDefineSink;

impl DefineSink for CargoDefineSink {
    fn append_define(&mut self, key: &str, value: &str) {
        println!("cargo:rustc-env={key}={value}");
    }

    fn track_file(&mut self, path: &Path) {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}

/// Collects definitions in registration order.
///
/// Used by tests and by hosts that post-process definitions instead of
/// handing them straight to Cargo.
#[derive(Debug, Default)]
pub struct MemoryDefineSink {
    pub defines: Vec<(String, String)>,
    pub tracked: Vec<PathBuf>,
}

impl MemoryDefineSink {
    pub fn new() -> Self {
        Self::default()
    }

    // Last occurrence wins, matching what Cargo does with repeated
    // rustc-env directives.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.defines
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl DefineSink for MemoryDefineSink {
    fn append_define(&mut self, key: &str, value: &str) {
        self.defines.push((key.to_string(), value.to_string()));
    }

    fn track_file(&mut self, path: &Path) {
        self.tracked.push(path.to_path_buf());
    }
}
