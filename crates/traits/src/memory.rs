//! An in-memory platform.
//!
//! Anchors are positioned in document coordinates and the viewport is a single
//! vertical scroll offset. Frames and subscriptions are only recorded; the host
//! (a test, the CLI simulation) decides when to deliver them.

use crate::platform::{
    FrameHandle, Platform, PlatformError, ScrollBehavior, Subscription, ViewportEventKind,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use vita_types::{EntryId, Rect};

#[derive(Debug, Default)]
pub struct InMemoryViewport {
    anchors: RefCell<HashMap<String, Rect>>,
    scroll_y: Cell<f32>,
    subscriptions: RefCell<Vec<(Subscription, ViewportEventKind)>>,
    pending_frames: RefCell<Vec<FrameHandle>>,
    cancelled_frames: Cell<usize>,
    next_handle: Cell<u64>,
    scroll_requests: RefCell<Vec<(EntryId, ScrollBehavior)>>,
    fail_frames: Cell<bool>,
    fail_subscription: Cell<Option<ViewportEventKind>>,
}

impl InMemoryViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places an anchor whose top edge sits `top` pixels below the document start.
    pub fn insert_anchor(&self, id: impl Into<String>, top: f32, height: f32) {
        self.anchors
            .borrow_mut()
            .insert(id.into(), Rect::new(0.0, top, 0.0, height));
    }

    /// Removes an anchor. Returns `false` if it wasn't present.
    pub fn remove_anchor(&self, id: &str) -> bool {
        self.anchors.borrow_mut().remove(id).is_some()
    }

    /// Moves the viewport so that document offset `y` is at its top edge.
    pub fn scroll_to(&self, y: f32) {
        self.scroll_y.set(y);
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y.get()
    }

    /// Frames requested and neither cancelled nor drained yet.
    pub fn pending_frames(&self) -> Vec<FrameHandle> {
        self.pending_frames.borrow().clone()
    }

    /// Drains the pending frames, as the host's frame loop would when it ticks.
    pub fn take_due_frames(&self) -> Vec<FrameHandle> {
        std::mem::take(&mut *self.pending_frames.borrow_mut())
    }

    pub fn cancelled_frames(&self) -> usize {
        self.cancelled_frames.get()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    pub fn is_subscribed(&self, kind: ViewportEventKind) -> bool {
        self.subscriptions.borrow().iter().any(|(_, k)| *k == kind)
    }

    /// Every `scroll_into_view` call so far, oldest first.
    pub fn scroll_requests(&self) -> Vec<(EntryId, ScrollBehavior)> {
        self.scroll_requests.borrow().clone()
    }

    /// Makes every following `request_frame` fail.
    pub fn set_frame_failure(&self, fail: bool) {
        self.fail_frames.set(fail);
    }

    /// Makes subscribing to `kind` fail.
    pub fn set_subscription_failure(&self, kind: Option<ViewportEventKind>) {
        self.fail_subscription.set(kind);
    }

    fn next_handle(&self) -> u64 {
        let next = self.next_handle.get() + 1;
        self.next_handle.set(next);
        next
    }
}

impl Platform for InMemoryViewport {
    fn locate(&self, id: &EntryId) -> Option<Rect> {
        self.anchors
            .borrow()
            .get(id.as_str())
            .map(|rect| rect.translate_y(-self.scroll_y.get()))
    }

    fn subscribe(&self, kind: ViewportEventKind) -> Result<Subscription, PlatformError> {
        if self.fail_subscription.get() == Some(kind) {
            return Err(PlatformError::Subscription(format!(
                "'{}' listener rejected",
                kind.event_name()
            )));
        }
        let subscription = Subscription::new(self.next_handle());
        self.subscriptions.borrow_mut().push((subscription, kind));
        Ok(subscription)
    }

    fn unsubscribe(&self, subscription: Subscription) {
        self.subscriptions
            .borrow_mut()
            .retain(|(s, _)| *s != subscription);
    }

    fn request_frame(&self) -> Result<FrameHandle, PlatformError> {
        if self.fail_frames.get() {
            return Err(PlatformError::Scheduler("frame loop unavailable".into()));
        }
        let handle = FrameHandle::new(self.next_handle());
        self.pending_frames.borrow_mut().push(handle);
        Ok(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let mut frames = self.pending_frames.borrow_mut();
        let before = frames.len();
        frames.retain(|h| *h != handle);
        if frames.len() != before {
            self.cancelled_frames.set(self.cancelled_frames.get() + 1);
        }
    }

    fn scroll_into_view(
        &self,
        id: &EntryId,
        behavior: ScrollBehavior,
    ) -> Result<(), PlatformError> {
        let top = self
            .anchors
            .borrow()
            .get(id.as_str())
            .map(|rect| rect.top())
            .ok_or_else(|| PlatformError::AnchorNotFound(id.to_string()))?;
        self.scroll_requests
            .borrow_mut()
            .push((id.clone(), behavior));
        self.scroll_y.set(top);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "InMemoryViewport"
    }
}
