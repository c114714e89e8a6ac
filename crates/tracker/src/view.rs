use serde::Serialize;
use vita_types::EntryId;

/// The outline as handed to the rendering layer: the navigation tree with an
/// active flag on every entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineView {
    pub items: Vec<OutlineItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineItemView {
    pub id: EntryId,
    pub label: String,
    /// Whether this entry should be highlighted.
    pub active: bool,
    /// Entries without an anchor on the page: never active, clicks do nothing.
    pub inert: bool,
    pub children: Vec<OutlineItemView>,
}

impl OutlineView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id of the highlighted entry, if any.
    pub fn active_id(&self) -> Option<&EntryId> {
        self.items
            .iter()
            .flat_map(|item| std::iter::once(item).chain(item.children.iter()))
            .find(|item| item.active)
            .map(|item| &item.id)
    }
}
