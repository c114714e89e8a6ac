use crate::ids::EntryId;
use serde::{Deserialize, Serialize};

/// One top-level content block of the page, as handed over by the content layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Display label, also the source of the section's id.
    pub title: String,
    /// Hidden sections are dropped from the outline entirely.
    pub display: bool,
    /// Labels of the sub-entries, in rendering order.
    #[serde(default)]
    pub items: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>, display: bool) -> Self {
        Self {
            title: title.into(),
            display,
            items: Vec::new(),
        }
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }
}

/// An entry in the navigation outline.
///
/// Entries nest one level deep: a section entry carries its items as children,
/// and item entries never have children of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    /// The anchor id this entry links to.
    pub id: EntryId,
    /// The original display text.
    pub label: String,
    /// Sub-items, empty for item-level entries.
    pub children: Vec<NavigationEntry>,
}

impl NavigationEntry {
    /// Creates a leaf entry.
    pub fn leaf(id: EntryId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Iterates this entry followed by its children, in navigation order.
    pub fn iter_flat(&self) -> impl Iterator<Item = &NavigationEntry> {
        std::iter::once(self).chain(self.children.iter())
    }
}
