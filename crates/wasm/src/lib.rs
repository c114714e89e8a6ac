//! WebAssembly bindings for the vita outline.
//!
//! Exposes a `TableOfContents` component that renders the outline of a page
//! into a container element and keeps its highlight in sync with the scroll
//! position.
//!
//! # Architecture
//!
//! The tracker from `vita-tracker` runs unchanged; [`DomPlatform`] gives it
//! the browser: `getBoundingClientRect` for anchor geometry, passive window
//! listeners for scroll and resize, `requestAnimationFrame` for deferring
//! recomputation, and `scrollIntoView` for click navigation.
//!
//! Listener and frame callbacks only hold a weak reference to the tracker, so
//! freeing the component from JavaScript (or calling `unmount`) releases
//! everything and late callbacks find nothing to update.
//!
//! ## Module Structure
//!
//! - [`toc`] - `TableOfContents`, the JavaScript-facing component
//! - [`dom`] - `DomPlatform`, the web-sys `Platform` implementation
//! - [`error`] - Error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { TableOfContents } from '@vita/wasm';
//!
//! await init();
//!
//! const toc = new TableOfContents("toc", sections, { tracker: { referenceOffset: 96 } });
//! window.addEventListener("pagehide", () => toc.unmount());
//! ```

mod dom;
mod error;
mod toc;

pub use dom::DomPlatform;
pub use error::{ErrorCode, TocError};
pub use toc::TableOfContents;

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the vita-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
