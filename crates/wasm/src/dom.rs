//! `Platform` implementation on top of the browser DOM.
//!
//! Listeners are registered on the window; anchors are looked up by element id
//! on every call. Every notification is forwarded to a signal sink installed by
//! the owner of the tracker, which routes it back into the tracker.

use crate::error::TocError;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use vita_traits::{
    FrameHandle, Platform, PlatformError, ScrollBehavior, Signal, Subscription, ViewportEventKind,
};
use vita_types::{EntryId, Rect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

pub type SignalSink = Rc<dyn Fn(Signal)>;

struct Listener {
    subscription: Subscription,
    kind: ViewportEventKind,
    callback: Closure<dyn FnMut()>,
}

struct PendingFrame {
    handle: FrameHandle,
    request_id: i32,
    // Kept alive until the next request or a cancel; never dropped from inside its own call.
    _callback: Closure<dyn FnMut()>,
}

pub struct DomPlatform {
    window: Window,
    document: Document,
    sink: RefCell<Option<SignalSink>>,
    listeners: RefCell<Vec<Listener>>,
    frame: RefCell<Option<PendingFrame>>,
    next_id: Cell<u64>,
}

impl DomPlatform {
    pub fn new() -> Result<Self, TocError> {
        let window = web_sys::window().ok_or_else(|| TocError::dom("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| TocError::dom("window has no document"))?;
        Ok(Self {
            window,
            document,
            sink: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            frame: RefCell::new(None),
            next_id: Cell::new(0),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Installs the function every listener and frame callback reports to.
    pub fn set_sink(&self, sink: SignalSink) {
        *self.sink.borrow_mut() = Some(sink);
    }

    fn sink(&self) -> Option<SignalSink> {
        self.sink.borrow().clone()
    }

    fn next_id(&self) -> u64 {
        let next = self.next_id.get() + 1;
        self.next_id.set(next);
        next
    }

    fn cancel_pending(&self) {
        if let Some(pending) = self.frame.borrow_mut().take() {
            self.window.cancel_animation_frame(pending.request_id).ok();
        }
    }
}

impl Platform for DomPlatform {
    fn locate(&self, id: &EntryId) -> Option<Rect> {
        let element = self.document.get_element_by_id(id.as_str())?;
        let rect = element.get_bounding_client_rect();
        Some(Rect::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ))
    }

    fn subscribe(&self, kind: ViewportEventKind) -> Result<Subscription, PlatformError> {
        let sink = self
            .sink()
            .ok_or_else(|| PlatformError::Subscription("no signal sink installed".into()))?;
        let callback = Closure::<dyn FnMut()>::new(move || sink(Signal::Viewport(kind)));

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind.event_name(),
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| PlatformError::Subscription(format!("{:?}", e)))?;

        let subscription = Subscription::new(self.next_id());
        self.listeners.borrow_mut().push(Listener {
            subscription,
            kind,
            callback,
        });
        Ok(subscription)
    }

    fn unsubscribe(&self, subscription: Subscription) {
        let mut listeners = self.listeners.borrow_mut();
        let Some(index) = listeners
            .iter()
            .position(|l| l.subscription == subscription)
        else {
            return;
        };
        let listener = listeners.remove(index);
        self.window
            .remove_event_listener_with_callback(
                listener.kind.event_name(),
                listener.callback.as_ref().unchecked_ref(),
            )
            .ok();
    }

    fn request_frame(&self) -> Result<FrameHandle, PlatformError> {
        let sink = self
            .sink()
            .ok_or_else(|| PlatformError::Scheduler("no signal sink installed".into()))?;
        self.cancel_pending();

        let handle = FrameHandle::new(self.next_id());
        let callback = Closure::<dyn FnMut()>::new(move || sink(Signal::Frame(handle)));
        let request_id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| PlatformError::Scheduler(format!("{:?}", e)))?;

        *self.frame.borrow_mut() = Some(PendingFrame {
            handle,
            request_id,
            _callback: callback,
        });
        Ok(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let matches = self
            .frame
            .borrow()
            .as_ref()
            .is_some_and(|pending| pending.handle == handle);
        if matches {
            self.cancel_pending();
        }
    }

    fn scroll_into_view(
        &self,
        id: &EntryId,
        behavior: ScrollBehavior,
    ) -> Result<(), PlatformError> {
        let element = self
            .document
            .get_element_by_id(id.as_str())
            .ok_or_else(|| PlatformError::AnchorNotFound(id.to_string()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "DomPlatform"
    }
}

impl Drop for DomPlatform {
    fn drop(&mut self) {
        self.cancel_pending();
        for listener in self.listeners.get_mut().drain(..) {
            self.window
                .remove_event_listener_with_callback(
                    listener.kind.event_name(),
                    listener.callback.as_ref().unchecked_ref(),
                )
                .ok();
        }
    }
}

impl fmt::Debug for DomPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomPlatform")
            .field("listeners", &self.listeners.borrow().len())
            .field(
                "pending_frame",
                &self.frame.borrow().as_ref().map(|p| p.handle),
            )
            .finish()
    }
}
