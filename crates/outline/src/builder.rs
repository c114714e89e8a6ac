use crate::error::OutlineError;
use crate::id::derive_id;
use log::{debug, warn};
use std::collections::HashSet;
use vita_types::{EntryId, NavigationEntry, Section};

/// The navigation model of a page: displayed sections and their items, in
/// source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    entries: Vec<NavigationEntry>,
    duplicates: Vec<EntryId>,
}

impl Outline {
    /// An outline with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<NavigationEntry> {
        self.entries
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walks every entry in navigation order: each section followed by its items.
    pub fn iter_flat(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.entries.iter().flat_map(NavigationEntry::iter_flat)
    }

    /// Finds the first entry carrying `id`.
    pub fn find(&self, id: &str) -> Option<&NavigationEntry> {
        self.iter_flat().find(|entry| entry.id == id)
    }

    /// Ids that more than one entry derived, in order of first collision.
    pub fn duplicate_ids(&self) -> &[EntryId] {
        &self.duplicates
    }
}

/// Builds the outline for `sections`.
///
/// Sections with `display == false` are skipped; every item of a displayed
/// section is kept. Colliding ids are kept as-is and reported through
/// [`Outline::duplicate_ids`] and a warning.
///
/// # Errors
///
/// Returns [`OutlineError::EmptyId`] if a displayed title or item label yields
/// no usable id.
pub fn build_outline(sections: &[Section]) -> Result<Outline, OutlineError> {
    let mut entries = Vec::with_capacity(sections.len());
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    let mut track = |id: &EntryId| {
        if !seen.insert(id.clone()) && !duplicates.contains(id) {
            warn!(
                "Outline id '{}' is derived by more than one entry; anchors resolve to the first",
                id
            );
            duplicates.push(id.clone());
        }
    };

    for section in sections.iter().filter(|s| s.display) {
        let id = derive_id(&section.title)?;
        track(&id);

        let mut children = Vec::with_capacity(section.items.len());
        for item in &section.items {
            let child_id = derive_id(item)?;
            track(&child_id);
            children.push(NavigationEntry::leaf(child_id, item.clone()));
        }

        entries.push(NavigationEntry {
            id,
            label: section.title.clone(),
            children,
        });
    }

    debug!(
        "Built outline: {} of {} sections displayed",
        entries.len(),
        sections.len()
    );

    Ok(Outline {
        entries,
        duplicates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Vec<Section> {
        vec![
            Section::new("Introduction", true),
            Section::new("Work Experience", true).with_items(["AIT", "Chulalongkorn University"]),
            Section::new("Studies", false).with_items(["X"]),
        ]
    }

    fn ids(entries: &[NavigationEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_builds_reference_outline() {
        let outline = build_outline(&sample()).unwrap();

        assert_eq!(ids(outline.entries()), vec!["introduction", "work-experience"]);
        assert!(outline.entries()[0].children.is_empty());
        assert_eq!(
            ids(&outline.entries()[1].children),
            vec!["ait", "chulalongkorn-university"]
        );
        assert_eq!(outline.entries()[1].children[0].label, "AIT");
        assert!(outline.duplicate_ids().is_empty());
    }

    #[test]
    fn test_hidden_section_anywhere_is_dropped() {
        let sections = vec![
            Section::new("Hidden First", false),
            Section::new("Shown", true),
            Section::new("Hidden Last", false).with_items(["a"]),
        ];
        let outline = build_outline(&sections).unwrap();
        assert_eq!(ids(outline.entries()), vec!["shown"]);
        assert!(outline.find("a").is_none());
    }

    #[test]
    fn test_empty_input() {
        let outline = build_outline(&[]).unwrap();
        assert!(outline.is_empty());
        assert_eq!(outline.iter_flat().count(), 0);
    }

    #[test]
    fn test_blank_label_in_hidden_section_is_ignored() {
        let sections = vec![
            Section::new("  ", false).with_items([""]),
            Section::new("Studies", true),
        ];
        assert!(build_outline(&sections).is_ok());
    }

    #[test]
    fn test_blank_item_is_an_error() {
        let sections = vec![Section::new("Studies", true).with_items(["Sheffield", " "])];
        let err = build_outline(&sections).unwrap_err();
        assert_eq!(err, OutlineError::EmptyId { label: " ".into() });
    }

    #[test]
    fn test_duplicates_are_kept_and_reported() {
        let _ = env_logger::builder().is_test(true).try_init();

        let sections = vec![Section::new("Work", true).with_items([
            "Brunel University London",
            "Chulalongkorn University",
            "Brunel University London",
            "Brunel University London",
        ])];
        let outline = build_outline(&sections).unwrap();

        assert_eq!(outline.entries()[0].children.len(), 4);
        assert_eq!(
            outline.duplicate_ids(),
            &[EntryId::new("brunel-university-london")]
        );
        let first = outline.find("brunel-university-london").unwrap();
        assert!(std::ptr::eq(first, &outline.entries()[0].children[0]));
    }

    #[test]
    fn test_iter_flat_order() {
        let outline = build_outline(&sample()).unwrap();
        let flat: Vec<_> = outline.iter_flat().map(|e| e.id.as_str()).collect();
        assert_eq!(
            flat,
            vec!["introduction", "work-experience", "ait", "chulalongkorn-university"]
        );
    }

    fn arb_section() -> impl Strategy<Value = Section> {
        (
            "[A-Za-z][A-Za-z ]{0,12}",
            any::<bool>(),
            prop::collection::vec("[A-Za-z0-9][A-Za-z0-9 ]{0,12}", 0..5),
        )
            .prop_map(|(title, display, items)| Section::new(title, display).with_items(items))
    }

    proptest! {
        #[test]
        fn order_and_filtering_are_preserved(sections in prop::collection::vec(arb_section(), 0..8)) {
            let outline = build_outline(&sections).unwrap();
            let shown: Vec<&Section> = sections.iter().filter(|s| s.display).collect();

            prop_assert_eq!(outline.len(), shown.len());
            for (entry, section) in outline.entries().iter().zip(&shown) {
                prop_assert_eq!(&entry.label, &section.title);
                let labels: Vec<&String> = entry.children.iter().map(|c| &c.label).collect();
                let items: Vec<&String> = section.items.iter().collect();
                prop_assert_eq!(labels, items);
            }
        }

        #[test]
        fn rebuilding_equal_input_is_id_equal(sections in prop::collection::vec(arb_section(), 0..8)) {
            let copy = sections.clone();
            let a = build_outline(&sections).unwrap();
            let b = build_outline(&copy).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
