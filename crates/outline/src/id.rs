use crate::error::OutlineError;
use vita_types::EntryId;

/// Derives the anchor id for a title or item label.
///
/// The id is the label's slug: transliterated to ASCII, lowercased, with every
/// run of non-alphanumeric characters collapsed into a single `-`. The mapping
/// has no hidden state, so the same label always yields the same id.
///
/// Labels that are blank or slug to nothing (`"!!!"`, `"   "`) are rejected.
pub fn derive_id(label: &str) -> Result<EntryId, OutlineError> {
    let slug = slug::slugify(label.trim());
    if slug.is_empty() {
        return Err(OutlineError::EmptyId {
            label: label.to_string(),
        });
    }
    Ok(EntryId::from(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_titles() {
        assert_eq!(derive_id("Introduction").unwrap(), "introduction");
        assert_eq!(derive_id("Work Experience").unwrap(), "work-experience");
        assert_eq!(derive_id("AIT").unwrap(), "ait");
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(
            derive_id("Asian Institute of Technology (AIT), Thailand").unwrap(),
            "asian-institute-of-technology-ait-thailand"
        );
        assert_eq!(derive_id("  Technical skills  ").unwrap(), "technical-skills");
    }

    #[test]
    fn test_non_ascii_is_transliterated() {
        assert_eq!(derive_id("Université de Genève").unwrap(), "universite-de-geneve");
    }

    #[test]
    fn test_blank_labels_are_rejected() {
        assert!(matches!(derive_id(""), Err(OutlineError::EmptyId { .. })));
        assert!(matches!(derive_id("   \t"), Err(OutlineError::EmptyId { .. })));
        assert!(matches!(derive_id("!!!"), Err(OutlineError::EmptyId { .. })));
    }

    #[test]
    fn test_deterministic() {
        let label = "Suranaree University of Technology";
        assert_eq!(derive_id(label).unwrap(), derive_id(label).unwrap());
    }
}
