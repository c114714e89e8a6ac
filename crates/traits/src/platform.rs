//! Platform trait for abstracting the page the outline is mounted on.
//!
//! The tracker never touches a DOM directly. Everything it needs from the host
//! (anchor geometry, scroll and resize notifications, frame scheduling and
//! programmatic scrolling) goes through this trait, so the same state machine
//! runs against a browser, a headless test double or a native viewer.

use std::fmt::Debug;
use std::rc::Rc;
use thiserror::Error;
use vita_types::{EntryId, Rect};

/// Error type for platform operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("Anchor not found: {0}")]
    AnchorNotFound(String),

    #[error("Failed to schedule frame: {0}")]
    Scheduler(String),

    #[error("Failed to subscribe to viewport events: {0}")]
    Subscription(String),
}

/// The viewport notifications the tracker listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportEventKind {
    Scroll,
    Resize,
}

impl ViewportEventKind {
    /// The DOM event name for this kind.
    pub fn event_name(self) -> &'static str {
        match self {
            ViewportEventKind::Scroll => "scroll",
            ViewportEventKind::Resize => "resize",
        }
    }
}

/// Opaque handle to a callback scheduled for the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Opaque handle to a viewport event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

impl Subscription {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// How a programmatic scroll should move the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Something the platform delivers back to the tracker.
///
/// Platforms forward every raw notification as a `Signal`; the tracker decides
/// whether it leads to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// A scroll or resize notification.
    Viewport(ViewportEventKind),
    /// A previously requested frame is due.
    Frame(FrameHandle),
}

/// The host page as seen by the tracker.
///
/// Methods take `&self`: hosts are single-threaded and keep whatever
/// bookkeeping they need behind interior mutability.
///
/// # Implementations
///
/// - `InMemoryViewport`: scriptable document model (always available)
/// - `DomPlatform`: browser DOM via web-sys (in `vita-wasm`)
pub trait Platform: Debug {
    /// Returns the current viewport-relative box of the anchor tagged with `id`,
    /// or `None` if no such element is rendered.
    ///
    /// Geometry must be read fresh on every call; layout can change between frames.
    fn locate(&self, id: &EntryId) -> Option<Rect>;

    /// Starts delivering `kind` notifications as [`Signal::Viewport`].
    fn subscribe(&self, kind: ViewportEventKind) -> Result<Subscription, PlatformError>;

    /// Stops a subscription. Unknown handles are ignored.
    fn unsubscribe(&self, subscription: Subscription);

    /// Schedules a single [`Signal::Frame`] for the next animation frame.
    fn request_frame(&self) -> Result<FrameHandle, PlatformError>;

    /// Cancels a scheduled frame. Already-fired or unknown handles are ignored.
    fn cancel_frame(&self, handle: FrameHandle);

    /// Scrolls the anchor tagged with `id` into view.
    fn scroll_into_view(&self, id: &EntryId, behavior: ScrollBehavior)
    -> Result<(), PlatformError>;

    /// Returns a human-readable name for this platform (for logging/debugging).
    fn name(&self) -> &'static str;
}

impl<T: Platform + ?Sized> Platform for Rc<T> {
    fn locate(&self, id: &EntryId) -> Option<Rect> {
        (**self).locate(id)
    }

    fn subscribe(&self, kind: ViewportEventKind) -> Result<Subscription, PlatformError> {
        (**self).subscribe(kind)
    }

    fn unsubscribe(&self, subscription: Subscription) {
        (**self).unsubscribe(subscription)
    }

    fn request_frame(&self) -> Result<FrameHandle, PlatformError> {
        (**self).request_frame()
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }

    fn scroll_into_view(
        &self,
        id: &EntryId,
        behavior: ScrollBehavior,
    ) -> Result<(), PlatformError> {
        (**self).scroll_into_view(id, behavior)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
