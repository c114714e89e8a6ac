//! The content of the about page.
//!
//! These records are what the page renders; the outline only ever sees the
//! `Section` list derived from them. Optional fields that are absent are simply
//! not rendered.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vita_types::Section;

/// The person the page is about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub email: String,
    /// IANA time zone, shown as the location.
    pub location: String,
    pub languages: Vec<String>,
}

/// A profile document: the person plus the about page content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub person: Person,
    pub about: About,
}

impl Profile {
    pub fn from_json(source: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let source = fs::read_to_string(path.as_ref()).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read profile from '{}': {}", path.as_ref().display(), e),
            )
        })?;
        Self::from_json(&source)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    pub path: String,
    pub title: String,
    pub description: String,
    pub table_of_content: TocSettings,
    pub avatar: Toggle,
    pub calendar: Calendar,
    pub intro: Intro,
    pub work: Work,
    pub studies: Studies,
    pub technical: Technical,
}

impl Default for About {
    fn default() -> Self {
        Self {
            path: "/about".to_string(),
            title: "About".to_string(),
            description: String::new(),
            table_of_content: TocSettings::default(),
            avatar: Toggle { display: true },
            calendar: Calendar::default(),
            intro: Intro::default(),
            work: Work::default(),
            studies: Studies::default(),
            technical: Technical::default(),
        }
    }
}

/// Whether the outline is shown, and whether it lists items under each section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TocSettings {
    pub display: bool,
    pub sub_items: bool,
}

impl Default for TocSettings {
    fn default() -> Self {
        Self {
            display: true,
            sub_items: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toggle {
    pub display: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calendar {
    pub display: bool,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intro {
    pub display: bool,
    pub title: String,
    pub description: String,
}

impl Default for Intro {
    fn default() -> Self {
        Self {
            display: true,
            title: "Introduction".to_string(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Work {
    pub display: bool,
    pub title: String,
    pub experiences: Vec<Experience>,
}

impl Default for Work {
    fn default() -> Self {
        Self {
            display: true,
            title: "Work Experience".to_string(),
            experiences: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub timeframe: String,
    pub role: String,
    pub achievements: Vec<String>,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Studies {
    pub display: bool,
    pub title: String,
    pub institutions: Vec<Institution>,
}

impl Default for Studies {
    fn default() -> Self {
        Self {
            display: true,
            title: "Studies".to_string(),
            institutions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Institution {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Technical {
    pub display: bool,
    pub title: String,
    pub skills: Vec<Skill>,
}

impl Default for Technical {
    fn default() -> Self {
        Self {
            display: true,
            title: "Technical skills".to_string(),
            skills: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub title: String,
    pub description: String,
    pub tags: Vec<Tag>,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub width: f32,
    pub height: f32,
}

impl About {
    /// The page's sections in rendering order, items included.
    pub fn sections(&self) -> Vec<Section> {
        vec![
            Section::new(&self.intro.title, self.intro.display),
            Section::new(&self.work.title, self.work.display)
                .with_items(self.work.experiences.iter().map(|e| e.company.as_str())),
            Section::new(&self.studies.title, self.studies.display)
                .with_items(self.studies.institutions.iter().map(|i| i.name.as_str())),
            Section::new(&self.technical.title, self.technical.display)
                .with_items(self.technical.skills.iter().map(|s| s.title.as_str())),
        ]
    }

    /// The sections the outline is built from: same as [`Self::sections`],
    /// minus the items when the outline is configured without sub-items.
    pub fn toc_sections(&self) -> Vec<Section> {
        let mut sections = self.sections();
        if !self.table_of_content.sub_items {
            sections.iter_mut().for_each(|s| s.items.clear());
        }
        sections
    }
}
