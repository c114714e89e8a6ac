//! The `TableOfContents` component exported to JavaScript.

use crate::dom::{DomPlatform, SignalSink};
use crate::error::TocError;
use log::{debug, error, warn};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use vita_core::html::{ENTRY_ATTRIBUTE, render_outline};
use vita_core::{PageConfig, Presentation};
use vita_outline::{Outline, build_outline};
use vita_tracker::{ActiveChange, ActiveSectionTracker, Lifecycle};
use vita_traits::Signal;
use vita_types::{EntryId, Section};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

type DomTracker = ActiveSectionTracker<Rc<DomPlatform>>;

/// An outline rendered into a container element, highlighting the section
/// currently in view.
///
/// # Example
///
/// ```javascript
/// const toc = new TableOfContents("toc", [
///   { title: "Introduction", display: true, items: [] },
///   { title: "Work Experience", display: true, items: ["AIT", "Chulalongkorn University"] },
/// ]);
///
/// console.log(toc.activeId); // "introduction"
/// toc.navigate("ait");
/// toc.unmount();
/// ```
#[wasm_bindgen]
pub struct TableOfContents {
    tracker: Rc<RefCell<DomTracker>>,
    container: Element,
    presentation: Presentation,
    click: Option<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl TableOfContents {
    /// Renders the outline for `sections` into the element with id
    /// `container_id` and starts tracking the scroll position.
    ///
    /// `config` is an optional `PageConfig` object. Sections that cannot be
    /// turned into an outline produce an empty outline rather than an error.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container_id: &str,
        sections: JsValue,
        config: JsValue,
    ) -> Result<TableOfContents, JsValue> {
        let sections: Vec<Section> = serde_wasm_bindgen::from_value(sections).map_err(TocError::from)?;
        let config: PageConfig = if config.is_undefined() || config.is_null() {
            PageConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(TocError::from)?
        };
        config.validate().map_err(TocError::from)?;

        let platform = Rc::new(DomPlatform::new()?);
        let container = platform
            .document()
            .get_element_by_id(container_id)
            .ok_or_else(|| TocError::dom(format!("no element with id '{}'", container_id)))?;

        let outline = build_outline(&sections).unwrap_or_else(|e| {
            error!("Outline unavailable: {}", e);
            Outline::empty()
        });

        let tracker = Rc::new(RefCell::new(ActiveSectionTracker::new(
            outline,
            platform.clone(),
            config.tracker,
        )));
        platform.set_sink(signal_sink(Rc::downgrade(&tracker)));

        {
            let mut tracker = tracker.borrow_mut();
            if let Err(e) = tracker.mount() {
                warn!("Outline tracking disabled: {}", e);
            }
            container.set_inner_html(&render_outline(&tracker.view(), &config.presentation));
            tracker.on_change(highlighter(container.clone(), config.presentation.clone()));
        }

        let mut toc = Self {
            tracker,
            container,
            presentation: config.presentation,
            click: None,
        };
        toc.attach_click()?;
        Ok(toc)
    }

    /// Id of the highlighted entry.
    #[wasm_bindgen(getter, js_name = activeId)]
    pub fn active_id(&self) -> Option<String> {
        self.tracker
            .borrow()
            .active_id()
            .map(|id| id.as_str().to_string())
    }

    /// Scrolls to the entry with `id` and highlights it immediately.
    /// Returns `false` for unknown or inert entries.
    #[wasm_bindgen]
    pub fn navigate(&self, id: &str) -> bool {
        self.tracker.borrow_mut().navigate(id)
    }

    /// Looks up anchors again after the page content changed and re-renders
    /// the outline so entries that gained an anchor lose their inert marking.
    #[wasm_bindgen]
    pub fn rescan(&self) -> usize {
        let mut tracker = self.tracker.borrow_mut();
        let resolved = tracker.rescan();
        if tracker.lifecycle() != Lifecycle::Unmounted {
            self.container
                .set_inner_html(&render_outline(&tracker.view(), &self.presentation));
        }
        resolved
    }

    /// The outline with active/inert flags, as a plain object.
    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        let view = self.tracker.borrow().view();
        Ok(serde_wasm_bindgen::to_value(&view).map_err(TocError::from)?)
    }

    /// Stops tracking and removes the rendered outline.
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        self.tracker.borrow_mut().unmount();
        self.detach_click();
        self.container.set_inner_html("");
    }
}

impl TableOfContents {
    fn attach_click(&mut self) -> Result<(), TocError> {
        let tracker = Rc::downgrade(&self.tracker);
        let selector = format!("[{}]", ENTRY_ATTRIBUTE);
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(link) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&selector).ok().flatten())
            else {
                return;
            };
            let Some(id) = link.get_attribute(ENTRY_ATTRIBUTE) else {
                return;
            };
            event.prevent_default();
            if let Some(tracker) = tracker.upgrade() {
                match tracker.try_borrow_mut() {
                    Ok(mut tracker) => {
                        tracker.navigate(&id);
                    }
                    Err(_) => debug!("Tracker busy, dropping click on '{}'", id),
                }
            }
        });

        self.container
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(|e| TocError::dom(format!("{:?}", e)))?;
        self.click = Some(callback);
        Ok(())
    }

    fn detach_click(&mut self) {
        if let Some(callback) = self.click.take() {
            self.container
                .remove_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
                .ok();
        }
    }
}

impl Drop for TableOfContents {
    fn drop(&mut self) {
        self.detach_click();
    }
}

/// Routes platform signals into the tracker without keeping it alive.
fn signal_sink(tracker: Weak<RefCell<DomTracker>>) -> SignalSink {
    Rc::new(move |signal: Signal| {
        let Some(tracker) = tracker.upgrade() else {
            return;
        };
        match tracker.try_borrow_mut() {
            Ok(mut tracker) => tracker.dispatch(signal),
            Err(_) => debug!("Tracker busy, dropping {:?}", signal),
        };
    })
}

/// Moves the active class and `aria-current` from the previous entry to the current one.
fn highlighter(container: Element, presentation: Presentation) -> impl FnMut(&ActiveChange) {
    move |change| {
        let find = |id: &EntryId| {
            container
                .query_selector(&format!("[{}=\"{}\"]", ENTRY_ATTRIBUTE, id))
                .ok()
                .flatten()
        };
        if let Some(el) = change.previous.as_ref().and_then(find) {
            el.class_list().remove_1(&presentation.active_class).ok();
            el.remove_attribute("aria-current").ok();
        }
        if let Some(el) = change.current.as_ref().and_then(find) {
            el.class_list().add_1(&presentation.active_class).ok();
            el.set_attribute("aria-current", "location").ok();
        }
    }
}
