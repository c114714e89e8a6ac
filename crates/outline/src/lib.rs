//! # vita-outline
//!
//! Turns the ordered section list of a profile page into the navigation
//! outline shown next to it.
//!
//! The builder is a pure function: it filters out hidden sections, derives an
//! anchor-safe id for every title and item label, and keeps the source order
//! untouched. Running it twice on equal input yields id-equal outlines, which is
//! what lets the outline and the separately rendered content agree on anchors.
//!
//! ```
//! use vita_outline::build_outline;
//! use vita_types::Section;
//!
//! let sections = vec![
//!     Section::new("Introduction", true),
//!     Section::new("Work Experience", true).with_items(["AIT", "Chulalongkorn University"]),
//!     Section::new("Studies", false).with_items(["X"]),
//! ];
//! let outline = build_outline(&sections).unwrap();
//!
//! assert_eq!(outline.len(), 2);
//! assert_eq!(outline.entries()[1].id, "work-experience");
//! assert_eq!(outline.entries()[1].children[1].id, "chulalongkorn-university");
//! ```

mod builder;
mod error;
mod id;

pub use builder::{Outline, build_outline};
pub use error::OutlineError;
pub use id::derive_id;
