//! # vita-tracker
//!
//! Keeps the "you are here" highlight of the outline in sync with the scroll
//! position, and scrolls to an entry's anchor when it is clicked.
//!
//! ## Module Structure
//!
//! - [`selection`] - Pure policy: which anchor counts as the current one
//! - [`tracker`] - `ActiveSectionTracker`, the event-driven state machine
//! - [`view`] - `OutlineView`, what the rendering layer consumes
//! - [`config`] - `TrackerConfig`
//!
//! ## Active-entry policy
//!
//! Anchor tops are measured relative to a reference line `referenceOffset`
//! pixels below the viewport top. The active entry is the one whose anchor is
//! closest to that line from above; before any anchor reaches it, the first
//! entry is active. Ties go to the earlier entry. Entries whose anchor was not
//! on the page at mount time are inert.
//!
//! ## Event discipline
//!
//! Scroll and resize notifications only request a frame; the measurement runs
//! once per delivered frame, against geometry read at that moment. A frame that
//! is no longer the pending one, or that arrives after unmount, is dropped.

pub mod config;
pub mod error;
pub mod selection;
pub mod tracker;
pub mod view;

pub use config::{DEFAULT_REFERENCE_OFFSET, ScrollMode, TrackerConfig};
pub use error::TrackerError;
pub use selection::{AnchorPosition, select_active};
pub use tracker::{ActiveChange, ActiveSectionTracker, Lifecycle, ListenerId, TrackerStats};
pub use view::{OutlineItemView, OutlineView};
