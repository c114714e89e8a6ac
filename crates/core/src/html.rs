//! HTML markup for the outline.
//!
//! Every link carries a `data-toc-id` attribute with its entry id; the browser
//! binding uses it to route clicks and to move the active class around without
//! re-rendering.

use crate::config::Presentation;
use std::fmt::Write;
use vita_tracker::{OutlineItemView, OutlineView};
use vita_types::EntryId;

/// Attribute that links rendered outline entries to their ids.
pub const ENTRY_ATTRIBUTE: &str = "data-toc-id";

/// Renders the outline as a `<nav>` element.
///
/// An empty view renders an empty `<nav>` so the surrounding layout stays stable.
pub fn render_outline(view: &OutlineView, presentation: &Presentation) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<nav class="{}" data-hide-below="{}" aria-label="Table of contents">"#,
        escape(&presentation.nav_class),
        presentation.hide_below
    );
    if !view.is_empty() {
        render_list(&mut out, &view.items, presentation);
    }
    out.push_str("</nav>");
    out
}

/// The `id` attribute to put on the element an entry points at.
pub fn anchor_attrs(id: &EntryId) -> String {
    format!(r#"id="{}""#, escape(id.as_str()))
}

fn render_list(out: &mut String, items: &[OutlineItemView], presentation: &Presentation) {
    out.push_str("<ul>");
    for item in items {
        out.push_str("<li>");
        let id = escape(item.id.as_str());
        let _ = write!(out, r##"<a href="#{id}" {ENTRY_ATTRIBUTE}="{id}""##);
        if item.active {
            let _ = write!(
                out,
                r#" class="{}" aria-current="location""#,
                escape(&presentation.active_class)
            );
        }
        if item.inert {
            out.push_str(r#" data-inert="true""#);
        }
        let _ = write!(out, ">{}</a>", escape(&item.label));
        if !item.children.is_empty() {
            render_list(out, &item.children, presentation);
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, label: &str, active: bool, inert: bool) -> OutlineItemView {
        OutlineItemView {
            id: EntryId::new(id),
            label: label.to_string(),
            active,
            inert,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_empty_view() {
        let html = render_outline(&OutlineView::default(), &Presentation::default());
        assert_eq!(
            html,
            r#"<nav class="toc" data-hide-below="768" aria-label="Table of contents"></nav>"#
        );
    }

    #[test]
    fn test_nested_entries_and_active_class() {
        let mut work = item("work-experience", "Work Experience", false, false);
        work.children.push(item("ait", "AIT", true, false));
        let view = OutlineView {
            items: vec![item("introduction", "Introduction", false, false), work],
        };

        let html = render_outline(&view, &Presentation::default());
        assert!(html.contains(r##"<a href="#introduction" data-toc-id="introduction">Introduction</a>"##));
        assert!(html.contains(
            r##"<a href="#ait" data-toc-id="ait" class="toc-active" aria-current="location">AIT</a>"##
        ));
        assert_eq!(html.matches("<ul>").count(), 2);
    }

    #[test]
    fn test_inert_and_escaping() {
        let view = OutlineView {
            items: vec![item("r-d", "R&D <Lab>", false, true)],
        };
        let html = render_outline(&view, &Presentation::default());
        assert!(html.contains(r#"data-inert="true">R&amp;D &lt;Lab&gt;</a>"#));
    }

    #[test]
    fn test_anchor_attrs() {
        assert_eq!(anchor_attrs(&EntryId::new("studies")), r#"id="studies""#);
    }
}
