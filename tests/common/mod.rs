#![allow(dead_code)]

use std::path::PathBuf;
use std::rc::Rc;
use vita::{InMemoryViewport, PageConfig, Profile, ProfilePage, Section};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Path of the sample profile shipped with the repository.
pub fn sample_profile_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/about.json")
}

pub fn sample_page() -> Result<ProfilePage, Box<dyn std::error::Error>> {
    let profile = Profile::from_file(sample_profile_path())?;
    Ok(ProfilePage::new(profile, PageConfig::default()))
}

/// The four sections of the about page with a couple of items each.
pub fn about_sections() -> Vec<Section> {
    vec![
        Section::new("Introduction", true),
        Section::new("Work Experience", true).with_items(["AIT", "Chulalongkorn University"]),
        Section::new("Studies", true).with_items(["The University of Sheffield"]),
        Section::new("Technical skills", true).with_items(["Research Interests", "Programming"]),
    ]
}

/// A viewport with an anchor for each id, `spacing` pixels apart.
pub fn stacked_viewport<'a>(
    ids: impl IntoIterator<Item = &'a str>,
    spacing: f32,
) -> Rc<InMemoryViewport> {
    let viewport = Rc::new(InMemoryViewport::new());
    for (i, id) in ids.into_iter().enumerate() {
        viewport.insert_anchor(id, i as f32 * spacing, 40.0);
    }
    viewport
}
