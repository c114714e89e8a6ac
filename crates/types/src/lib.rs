pub mod document;
pub mod geometry;
pub mod ids;

pub use document::{NavigationEntry, Section};
pub use geometry::Rect;
pub use ids::EntryId;
