use serde::{Deserialize, Serialize};

/// Tunables for the diff engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// When exactly one side of a list is empty, describe the transition as a
    /// single reload instead of per-item records. Collection views that show
    /// an empty-state placeholder element need this, since the placeholder
    /// has no identity on either side.
    pub prefer_reload: bool,
    /// Also emit `ReloadSection`, at the new index, for sections that exist on
    /// both sides and whose content changed. Off by default: such sections are described by
    /// their item records alone.
    pub emit_section_changes: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            prefer_reload: true,
            emit_section_changes: false,
        }
    }
}

impl DiffConfig {
    /// A configuration that always produces per-item records.
    pub fn granular() -> Self {
        Self {
            prefer_reload: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = DiffConfig::default();
        assert!(c.prefer_reload);
        assert!(!c.emit_section_changes);
    }

    #[test]
    fn granular_disables_reload() {
        let c = DiffConfig::granular();
        assert!(!c.prefer_reload);
        assert!(!c.emit_section_changes);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let c: DiffConfig = serde_json::from_str(r#"{"emit_section_changes":true}"#).unwrap();
        assert!(c.prefer_reload);
        assert!(c.emit_section_changes);
    }
}
