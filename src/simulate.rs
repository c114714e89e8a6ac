//! Offline simulation of the tracker.
//!
//! Given where each anchor sits in the document, replays a scroll to an offset
//! through the same frame-deferred path a browser would take and reports the
//! resulting outline view.

use crate::error::VitaError;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use vita_core::ProfilePage;
use vita_tracker::OutlineView;
use vita_traits::{InMemoryViewport, ViewportEventKind};

/// Height given to simulated anchors. Only their top edge matters.
const ANCHOR_HEIGHT: f32 = 32.0;

/// Document offsets of anchors, keyed by entry id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub anchors: BTreeMap<String, f32>,
}

impl Layout {
    pub fn from_json(source: &str) -> Result<Self, VitaError> {
        let anchors: BTreeMap<String, f32> = serde_json::from_str(source)?;
        if let Some((id, top)) = anchors.iter().find(|(_, top)| !top.is_finite()) {
            return Err(VitaError::Layout(format!("anchor '{}' has offset {}", id, top)));
        }
        Ok(Self { anchors })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VitaError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read layout from '{}': {}", path.display(), e),
            )
        })?;
        Self::from_json(&source)
    }

    /// Stacks the page's anchors `spacing` pixels apart, in page order.
    /// A repeated id keeps the position of its first occurrence.
    pub fn evenly_spaced(page: &ProfilePage, spacing: f32) -> Self {
        let mut anchors = BTreeMap::new();
        for (i, id) in page.anchor_ids().into_iter().enumerate() {
            anchors.entry(id.to_string()).or_insert(i as f32 * spacing);
        }
        Self { anchors }
    }
}

/// Mounts the page's tracker on an in-memory viewport laid out per `layout`,
/// scrolls to `scroll_y`, and returns the view after the frame has run.
pub fn simulate(page: &ProfilePage, layout: &Layout, scroll_y: f32) -> OutlineView {
    let viewport = Rc::new(InMemoryViewport::new());
    let known = page.anchor_ids();
    for (id, top) in &layout.anchors {
        if !known.iter().any(|k| k == id.as_str()) {
            warn!("Layout anchor '{}' matches no entry on the page", id);
        }
        viewport.insert_anchor(id.as_str(), *top, ANCHOR_HEIGHT);
    }

    let mut tracker = page.mount(viewport.clone());
    viewport.scroll_to(scroll_y);
    tracker.handle_event(ViewportEventKind::Scroll);
    for frame in viewport.take_due_frames() {
        tracker.on_frame(frame);
    }
    debug!("Simulated scroll to {}: {:?}", scroll_y, tracker.stats());

    tracker.view()
}
