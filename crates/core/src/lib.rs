//! # vita-core
//!
//! Platform-agnostic composition of the about page.
//!
//! This crate ties the pieces together:
//! - **profile**: The page content (person, work, studies, skills)
//! - **config**: Tracker tuning and outline presentation
//! - **page**: `ProfilePage`, which derives the outline and mounts the tracker
//! - **html**: Markup for the outline
//! - **error**: Error types for the integration layer
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**. The tracker talks to the page
//! through `vita_traits::Platform`; the browser implementation lives in
//! `vita-wasm` and the in-memory one in `vita-traits`.

// Re-export foundation crates
pub use vita_outline as outline;
pub use vita_tracker as tracker;
pub use vita_traits as traits;
pub use vita_types as types;

pub mod config;
pub mod error;
pub mod html;
pub mod page;
pub mod profile;

pub use config::{PageConfig, Presentation};
pub use error::CoreError;
pub use page::ProfilePage;
pub use profile::{About, Profile};
