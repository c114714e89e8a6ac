use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vita_tracker::TrackerConfig;

/// Page-level configuration: tracker tuning plus presentation rules for the
/// rendered outline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    pub tracker: TrackerConfig,
    pub presentation: Presentation,
}

/// How the outline is styled. None of this affects which entry is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Presentation {
    /// Viewport width in pixels below which the outline is hidden. Hiding
    /// never unmounts the tracker.
    ///
    /// Defaults to `768`.
    pub hide_below: u32,
    /// Class of the `<nav>` element.
    pub nav_class: String,
    /// Class added to the active entry.
    pub active_class: String,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            hide_below: 768,
            nav_class: "toc".to_string(),
            active_class: "toc-active".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(source: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            )
        })?;
        Self::from_json(&source)
    }

    /// Checks values serde accepts but the page cannot use.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.tracker.reference_offset.is_finite() {
            return Err(CoreError::Config(
                "tracker.referenceOffset must be a finite number".into(),
            ));
        }
        if self.presentation.active_class.split_whitespace().count() != 1 {
            return Err(CoreError::Config(format!(
                "presentation.activeClass must be a single class name, got {:?}",
                self.presentation.active_class
            )));
        }
        Ok(())
    }
}
