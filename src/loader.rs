//! Single-pass loader wiring the parser to a definition sink.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use log::{info, warn};

use crate::define::{kind_of, render_value};
use crate::parse::parse_line;
use crate::sink::DefineSink;

const ENV_FILE_NAME: &str = ".env";

/// Loads `<root>/.env` into compile-time definitions.
pub struct EnvLoader {
    root: PathBuf,
}

impl EnvLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    // Build scripts get the package root from Cargo.
    pub fn from_manifest_dir() -> anyhow::Result<Self> {
        let root = std::env::var_os("CARGO_MANIFEST_DIR")
            .context("CARGO_MANIFEST_DIR not set, not running under cargo")?;
        Ok(Self::new(PathBuf::from(root)))
    }

    pub fn env_path(&self) -> PathBuf {
        self.root.join(ENV_FILE_NAME)
    }

    /// One pass over the optional `.env` file.
    ///
    /// A missing file is the expected no-override case and never fails
    /// the build; a file that exists but cannot be read does.
    pub fn load(&self, sink: &mut dyn DefineSink) -> anyhow::Result<()> {
        let path = self.env_path();

        // Track the path even while it is missing, so the build re-runs
        // once the file appears.
        sink.track_file(&path);

        if !path.exists() {
            warn!(
                "{} not found, using compiled-in default values",
                path.display()
            );
            return Ok(());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        for line in contents.lines() {
            if let Some(entry) = parse_line(line) {
                let rendered = render_value(kind_of(&entry.key), &entry.value);
                sink.append_define(&entry.key, &rendered);
                info!("Loaded from .env: {}", entry.key);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemoryDefineSink;

    #[test]
    fn missing_file_loads_nothing_and_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let loader = EnvLoader::new(dir.path());
        let mut sink = MemoryDefineSink::new();

        loader.load(&mut sink).unwrap();

        assert!(sink.defines.is_empty());
        // The path is tracked anyway.
        assert_eq!(sink.tracked, vec![dir.path().join(".env")]);
    }

    #[test]
    fn entries_register_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".env"),
            "B=2\nA=1\nC=3\n",
        )
        .unwrap();
        let mut sink = MemoryDefineSink::new();

        EnvLoader::new(dir.path()).load(&mut sink).unwrap();

        let keys: Vec<&str> = sink.defines.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["B", "A", "C"]);
    }

    #[test]
    fn duplicate_keys_register_every_occurrence() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".env"),
            "LED_PIN=2\nLED_PIN=4\n",
        )
        .unwrap();
        let mut sink = MemoryDefineSink::new();

        EnvLoader::new(dir.path()).load(&mut sink).unwrap();

        assert_eq!(sink.defines.len(), 2);
        assert_eq!(sink.get("LED_PIN"), Some("4"));
    }

    #[test]
    fn malformed_and_comment_lines_produce_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".env"),
            "# header comment\n\nNO_DELIMITER_HERE\nPORT=8080\n",
        )
        .unwrap();
        let mut sink = MemoryDefineSink::new();

        EnvLoader::new(dir.path()).load(&mut sink).unwrap();

        assert_eq!(sink.defines, vec![("PORT".to_string(), "8080".to_string())]);
    }

    #[test]
    fn manifest_dir_loader_points_at_this_crate() {
        let loader = EnvLoader::from_manifest_dir().unwrap();
        assert_eq!(
            loader.env_path(),
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(".env")
        );
    }
}
