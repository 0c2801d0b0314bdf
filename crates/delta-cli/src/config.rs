use std::fs;
use std::path::Path;

use anyhow::Context;
use delta_diff::DiffConfig;
use serde::{Deserialize, Serialize};

use crate::cli::DiffArgs;

/// Settings for reading snapshot files and running the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Field holding each object's identifier.
    pub id_field: String,
    /// Field holding each section's items.
    pub items_field: String,
    /// Engine settings.
    pub diff: DiffConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            id_field: "id".into(),
            items_field: "items".into(),
            diff: DiffConfig::default(),
        }
    }
}

impl CliConfig {
    /// Read a TOML configuration file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load `path` if given, falling back to defaults.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides.
    pub fn with_args(mut self, args: &DiffArgs) -> Self {
        if let Some(field) = &args.id_field {
            self.id_field = field.clone();
        }
        if let Some(field) = &args.items_field {
            self.items_field = field.clone();
        }
        if args.no_reload {
            self.diff.prefer_reload = false;
        }
        if args.section_changes {
            self.diff.emit_section_changes = true;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = CliConfig::default();
        assert_eq!(c.id_field, "id");
        assert_eq!(c.items_field, "items");
        assert_eq!(c.diff, DiffConfig::default());
    }

    #[test]
    fn load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id_field = \"key\"\n\n[diff]\nprefer_reload = false").unwrap();

        let c = CliConfig::load(file.path()).unwrap();
        assert_eq!(c.id_field, "key");
        assert_eq!(c.items_field, "items");
        assert!(!c.diff.prefer_reload);
        assert!(!c.diff.emit_section_changes);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::load(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn args_override_file() {
        let args = DiffArgs {
            id_field: Some("uuid".into()),
            no_reload: true,
            section_changes: true,
            ..Default::default()
        };
        let c = CliConfig::default().with_args(&args);
        assert_eq!(c.id_field, "uuid");
        assert!(!c.diff.prefer_reload);
        assert!(c.diff.emit_section_changes);
    }
}
