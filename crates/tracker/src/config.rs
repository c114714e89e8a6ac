use serde::{Deserialize, Serialize};
use vita_traits::ScrollBehavior;

/// Reference line used when no configuration is given, in CSS pixels below the
/// viewport top. Leaves room for a sticky header.
pub const DEFAULT_REFERENCE_OFFSET: f32 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerConfig {
    /// Distance of the reference line below the viewport top.
    ///
    /// An anchor counts as "reached" once its top edge is at or above this line.
    ///
    /// Defaults to `80.0`.
    pub reference_offset: f32,

    /// How click navigation scrolls. Purely presentational.
    ///
    /// Defaults to `smooth`.
    pub scroll_behavior: ScrollMode,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            reference_offset: DEFAULT_REFERENCE_OFFSET,
            scroll_behavior: ScrollMode::default(),
        }
    }
}

/// Serializable mirror of [`ScrollBehavior`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    #[default]
    Smooth,
    Instant,
}

impl From<ScrollMode> for ScrollBehavior {
    fn from(mode: ScrollMode) -> Self {
        match mode {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Instant,
        }
    }
}
