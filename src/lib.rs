//! # vita
//!
//! The outline of a profile page, and the tracker that keeps its "you are
//! here" highlight in sync with scrolling.
//!
//! The work is split across the workspace:
//! - `vita-outline` derives the navigation outline from the page sections
//! - `vita-tracker` decides which entry is active and handles click navigation
//! - `vita-core` holds the content model, configuration and HTML output
//! - `vita-wasm` mounts the tracker on a real browser page
//!
//! This crate adds the `vita` command-line tool on top: print an outline as
//! text, JSON or HTML, and simulate where the highlight lands for a given
//! layout and scroll offset.

pub mod error;
pub mod format;
pub mod simulate;

pub use error::VitaError;
pub use format::OutputFormat;
pub use simulate::{Layout, simulate};

pub use vita_core::{About, PageConfig, Presentation, Profile, ProfilePage};
pub use vita_outline::{Outline, OutlineError, build_outline, derive_id};
pub use vita_tracker::{ActiveSectionTracker, OutlineItemView, OutlineView, TrackerConfig};
pub use vita_traits::{InMemoryViewport, Platform};
pub use vita_types::{EntryId, NavigationEntry, Section};
