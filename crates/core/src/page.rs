use crate::config::PageConfig;
use crate::error::CoreError;
use crate::html;
use crate::profile::Profile;
use log::{error, warn};
use vita_outline::{Outline, build_outline};
use vita_tracker::{ActiveSectionTracker, OutlineView};
use vita_traits::Platform;
use vita_types::EntryId;

/// The about page: content, configuration, and the outline derived from them.
///
/// Nothing here is allowed to stop the page from rendering. Outline and
/// tracker failures are logged and degrade to an empty outline or a tracker
/// with no active entry.
#[derive(Debug, Clone)]
pub struct ProfilePage {
    profile: Profile,
    config: PageConfig,
}

impl ProfilePage {
    pub fn new(profile: Profile, config: PageConfig) -> Self {
        Self { profile, config }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Whether the page shows an outline at all.
    pub fn shows_outline(&self) -> bool {
        self.profile.about.table_of_content.display
    }

    /// Builds the outline, surfacing content errors.
    pub fn try_outline(&self) -> Result<Outline, CoreError> {
        if !self.shows_outline() {
            return Ok(Outline::empty());
        }
        Ok(build_outline(&self.profile.about.toc_sections())?)
    }

    /// Builds the outline, falling back to an empty one on content errors.
    pub fn outline(&self) -> Outline {
        self.try_outline().unwrap_or_else(|e| {
            error!("Outline unavailable, rendering the page without it: {}", e);
            Outline::empty()
        })
    }

    /// Ids the content must tag its section and item elements with, in page order.
    ///
    /// Always derived from every displayed section with its items, even when
    /// the outline itself omits sub-items.
    pub fn anchor_ids(&self) -> Vec<EntryId> {
        match build_outline(&self.profile.about.sections()) {
            Ok(outline) => outline.iter_flat().map(|e| e.id.clone()).collect(),
            Err(e) => {
                error!("Cannot derive anchor ids: {}", e);
                Vec::new()
            }
        }
    }

    /// Creates a tracker for this page's outline and mounts it on `platform`.
    ///
    /// A mount failure is logged; the returned tracker then has no active
    /// entry and ignores all input.
    pub fn mount<P: Platform>(&self, platform: P) -> ActiveSectionTracker<P> {
        let mut tracker = ActiveSectionTracker::new(self.outline(), platform, self.config.tracker);
        if let Err(e) = tracker.mount() {
            warn!("Outline tracking disabled: {}", e);
        }
        tracker
    }

    /// Renders a view of this page's outline with the configured presentation.
    pub fn render_outline(&self, view: &OutlineView) -> String {
        html::render_outline(view, &self.config.presentation)
    }
}
