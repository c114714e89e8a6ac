// crates/tracker/src/tracker.rs
//! The active-section state machine.
//!
//! A tracker owns the outline, a [`Platform`] and a single piece of mutable
//! state: which entry is active. Raw viewport notifications never recompute
//! anything directly; they only make sure one frame is pending, and the
//! recomputation runs when that frame is delivered. Everything happens on the
//! caller's thread, in response to `mount`, `handle_event`, `on_frame`,
//! `navigate` and `unmount`.

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::selection::{AnchorPosition, select_active};
use crate::view::{OutlineItemView, OutlineView};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fmt;
use vita_outline::Outline;
use vita_traits::{FrameHandle, Platform, Signal, Subscription, ViewportEventKind};
use vita_types::{EntryId, NavigationEntry};

/// Where a tracker is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Built, not yet listening.
    Created,
    /// Listening to the viewport and keeping the active entry current.
    Mounted,
    /// Torn down for good.
    Unmounted,
}

/// Delivered to change listeners whenever the active entry changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveChange {
    pub previous: Option<EntryId>,
    pub current: Option<EntryId>,
}

/// Handle returned by [`ActiveSectionTracker::on_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Counters describing how much work viewport traffic caused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerStats {
    /// Scroll and resize notifications received while mounted.
    pub events_received: u64,
    /// Notifications folded into an already pending frame.
    pub events_coalesced: u64,
    /// Times the active entry was determined from anchor geometry.
    pub recomputations: u64,
    /// Frames delivered after being superseded, cancelled or outliving the tracker.
    pub stale_frames: u64,
}

#[derive(Debug)]
struct Slot {
    id: EntryId,
    /// Whether an anchor was found for this entry. Unresolved entries are inert.
    resolved: bool,
}

type Listener = Box<dyn FnMut(&ActiveChange)>;

pub struct ActiveSectionTracker<P: Platform> {
    outline: Outline,
    platform: P,
    config: TrackerConfig,
    /// One slot per entry, in navigation order.
    slots: Vec<Slot>,
    active: Option<usize>,
    lifecycle: Lifecycle,
    subscriptions: Vec<Subscription>,
    pending_frame: Option<FrameHandle>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    stats: TrackerStats,
}

impl<P: Platform> ActiveSectionTracker<P> {
    pub fn new(outline: Outline, platform: P, config: TrackerConfig) -> Self {
        let slots = outline
            .iter_flat()
            .map(|entry| Slot {
                id: entry.id.clone(),
                resolved: false,
            })
            .collect();

        Self {
            outline,
            platform,
            config,
            slots,
            active: None,
            lifecycle: Lifecycle::Created,
            subscriptions: Vec::new(),
            pending_frame: None,
            listeners: Vec::new(),
            next_listener: 0,
            stats: TrackerStats::default(),
        }
    }

    /// Resolves anchors, starts listening to scroll and resize, and determines
    /// the initial active entry.
    ///
    /// # Errors
    ///
    /// - [`TrackerError::AlreadyMounted`] / [`TrackerError::Unmounted`] on misuse.
    /// - [`TrackerError::Platform`] if a subscription fails; any subscription
    ///   made before the failure is released again.
    pub fn mount(&mut self) -> Result<(), TrackerError> {
        match self.lifecycle {
            Lifecycle::Mounted => return Err(TrackerError::AlreadyMounted),
            Lifecycle::Unmounted => return Err(TrackerError::Unmounted),
            Lifecycle::Created => {}
        }

        let resolved = self.resolve_anchors();

        for kind in [ViewportEventKind::Scroll, ViewportEventKind::Resize] {
            match self.platform.subscribe(kind) {
                Ok(subscription) => self.subscriptions.push(subscription),
                Err(e) => {
                    for subscription in self.subscriptions.drain(..) {
                        self.platform.unsubscribe(subscription);
                    }
                    return Err(e.into());
                }
            }
        }

        self.lifecycle = Lifecycle::Mounted;
        self.recompute();

        info!(
            "Tracker mounted on {}: {} entries, {} with anchors",
            self.platform.name(),
            self.slots.len(),
            resolved
        );
        Ok(())
    }

    /// Records a scroll or resize notification.
    ///
    /// At most one frame is pending at any time; notifications arriving while
    /// one is pending are folded into it.
    pub fn handle_event(&mut self, kind: ViewportEventKind) {
        if self.lifecycle != Lifecycle::Mounted {
            return;
        }
        self.stats.events_received += 1;

        if self.pending_frame.is_some() {
            self.stats.events_coalesced += 1;
            return;
        }

        match self.platform.request_frame() {
            Ok(handle) => self.pending_frame = Some(handle),
            Err(e) => {
                warn!("Cannot defer {} handling, recomputing now: {}", kind.event_name(), e);
                self.recompute();
            }
        }
    }

    /// Runs the deferred recomputation for `handle`.
    ///
    /// Frames that are not the pending one (superseded, cancelled, or
    /// delivered after unmount) are discarded without touching any state.
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if self.lifecycle != Lifecycle::Mounted || self.pending_frame != Some(handle) {
            debug!("Discarding stale frame {:?}", handle);
            self.stats.stale_frames += 1;
            return;
        }
        self.pending_frame = None;
        self.recompute();
    }

    /// Routes a platform signal to [`Self::handle_event`] or [`Self::on_frame`].
    pub fn dispatch(&mut self, signal: Signal) {
        match signal {
            Signal::Viewport(kind) => self.handle_event(kind),
            Signal::Frame(handle) => self.on_frame(handle),
        }
    }

    /// Click navigation: scrolls the entry's anchor into view and marks the
    /// entry active right away, without waiting for the resulting scroll.
    ///
    /// Returns `false` and does nothing for unknown or inert entries, or when
    /// the tracker is not mounted.
    pub fn navigate(&mut self, id: &str) -> bool {
        if self.lifecycle != Lifecycle::Mounted {
            return false;
        }
        let Some(index) = self.slot_index(id) else {
            debug!("Ignoring navigation to unknown entry '{}'", id);
            return false;
        };
        if !self.slots[index].resolved {
            debug!("Ignoring navigation to inert entry '{}'", id);
            return false;
        }

        // A frame scheduled before the click would measure pre-scroll geometry.
        if let Some(handle) = self.pending_frame.take() {
            self.platform.cancel_frame(handle);
        }

        let target = self.slots[index].id.clone();
        if let Err(e) = self
            .platform
            .scroll_into_view(&target, self.config.scroll_behavior.into())
        {
            warn!("Scrolling to '{}' failed: {}", target, e);
        }
        self.set_active(Some(index));
        true
    }

    /// Re-resolves anchors, for pages whose content renders after the outline
    /// was mounted. Returns how many entries now have an anchor.
    pub fn rescan(&mut self) -> usize {
        let resolved = self.resolve_anchors();
        if self.lifecycle == Lifecycle::Mounted {
            self.recompute();
        }
        resolved
    }

    /// Cancels the pending frame, releases every subscription and drops all
    /// listeners. The tracker cannot be mounted again afterwards.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        if let Some(handle) = self.pending_frame.take() {
            self.platform.cancel_frame(handle);
        }
        for subscription in self.subscriptions.drain(..) {
            self.platform.unsubscribe(subscription);
        }
        self.listeners.clear();
        self.lifecycle = Lifecycle::Unmounted;
        info!("Tracker unmounted from {}", self.platform.name());
    }

    /// Registers a callback invoked after every change of the active entry.
    pub fn on_change(&mut self, listener: impl FnMut(&ActiveChange) + 'static) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the listener was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    pub fn active_id(&self) -> Option<&EntryId> {
        self.active.map(|index| &self.slots[index].id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id().is_some_and(|active| active == id)
    }

    /// Whether `id` is unknown or has no anchor.
    pub fn is_inert(&self, id: &str) -> bool {
        self.slot_index(id).is_none_or(|index| !self.slots[index].resolved)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn stats(&self) -> TrackerStats {
        self.stats
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Snapshot of the outline with the current highlight state.
    pub fn view(&self) -> OutlineView {
        let mut index = 0;
        let items = self
            .outline
            .entries()
            .iter()
            .map(|entry| self.item_view(entry, &mut index))
            .collect();
        OutlineView { items }
    }

    fn item_view(&self, entry: &NavigationEntry, index: &mut usize) -> OutlineItemView {
        let own = *index;
        *index += 1;
        let children = entry
            .children
            .iter()
            .map(|child| self.item_view(child, index))
            .collect();
        OutlineItemView {
            id: entry.id.clone(),
            label: entry.label.clone(),
            active: self.active == Some(own),
            inert: !self.slots[own].resolved,
            children,
        }
    }

    fn slot_index(&self, id: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id == id)
    }

    /// Looks up every anchor once. Duplicate ids bind to their first entry.
    fn resolve_anchors(&mut self) -> usize {
        let mut seen = HashSet::new();
        let mut resolved = 0;
        for slot in &mut self.slots {
            slot.resolved = seen.insert(slot.id.clone()) && self.platform.locate(&slot.id).is_some();
            if slot.resolved {
                resolved += 1;
            } else {
                debug!("Entry '{}' has no anchor of its own; it stays inert", slot.id);
            }
        }
        resolved
    }

    fn recompute(&mut self) {
        self.stats.recomputations += 1;

        let platform = &self.platform;
        let positions = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.resolved)
            .filter_map(|(index, slot)| {
                platform
                    .locate(&slot.id)
                    .map(|rect| AnchorPosition { index, top: rect.top() })
            });

        let next = select_active(positions, self.config.reference_offset);
        self.set_active(next);
    }

    fn set_active(&mut self, next: Option<usize>) {
        if next == self.active {
            return;
        }
        let change = ActiveChange {
            previous: self.active_id().cloned(),
            current: next.map(|index| self.slots[index].id.clone()),
        };
        self.active = next;
        debug!("Active entry: {:?} -> {:?}", change.previous, change.current);
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }
}

impl<P: Platform> Drop for ActiveSectionTracker<P> {
    fn drop(&mut self) {
        if self.lifecycle == Lifecycle::Mounted {
            self.unmount();
        }
    }
}

impl<P: Platform> fmt::Debug for ActiveSectionTracker<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveSectionTracker")
            .field("platform", &self.platform)
            .field("lifecycle", &self.lifecycle)
            .field("active", &self.active_id())
            .field("pending_frame", &self.pending_frame)
            .field("listeners", &self.listeners.len())
            .field("stats", &self.stats)
            .finish()
    }
}
