pub mod memory;
pub mod platform;

pub use memory::InMemoryViewport;
pub use platform::{
    FrameHandle, Platform, PlatformError, ScrollBehavior, Signal, Subscription, ViewportEventKind,
};
