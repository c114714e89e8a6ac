mod common;

use common::{TestResult, sample_page};
use std::io::Write;
use std::rc::Rc;
use tempfile::NamedTempFile;
use vita::format::{self, OutputFormat};
use vita::{InMemoryViewport, Layout, PageConfig, Profile, ProfilePage, VitaError, simulate};
use vita_traits::ViewportEventKind;

#[test]
fn test_sample_page_at_top() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let page = sample_page()?;
    let layout = Layout::evenly_spaced(&page, 400.0);
    let view = simulate(&page, &layout, 0.0);

    assert_eq!(view.active_id().map(|id| id.as_str()), Some("introduction"));
    assert_eq!(view.items.len(), 4);
    Ok(())
}

#[test]
fn test_duplicate_companies_share_one_anchor() -> TestResult {
    let page = sample_page()?;
    let layout = Layout::evenly_spaced(&page, 400.0);
    // Entries: introduction, work-experience, ait, chulalongkorn, brunel x3, ...
    assert_eq!(layout.anchors.get("brunel-university-london"), Some(&1600.0));

    let view = simulate(&page, &layout, 1600.0);
    let work = &view.items[1];
    assert!(work.children[2].active);
    assert!(!work.children[2].inert);
    assert!(work.children[3].inert);
    assert!(work.children[4].inert);
    Ok(())
}

#[test]
fn test_profile_and_config_from_files() -> TestResult {
    let mut profile_file = NamedTempFile::new()?;
    write!(
        profile_file,
        r#"{{
            "person": {{ "name": "Parkpoom Wisedsri" }},
            "about": {{
                "tableOfContent": {{ "display": true, "subItems": false }},
                "work": {{
                    "display": true,
                    "title": "Work Experience",
                    "experiences": [{{ "company": "Chulalongkorn University" }}]
                }},
                "studies": {{ "display": false, "title": "Studies" }}
            }}
        }}"#
    )?;
    let mut config_file = NamedTempFile::new()?;
    write!(
        config_file,
        r#"{{
            "tracker": {{ "referenceOffset": 0 }},
            "presentation": {{ "activeClass": "current" }}
        }}"#
    )?;

    let profile = Profile::from_file(profile_file.path())?;
    let config = PageConfig::from_file(config_file.path())?;
    assert_eq!(config.tracker.reference_offset, 0.0);
    assert_eq!(config.presentation.nav_class, "toc");

    let page = ProfilePage::new(profile, config);
    let ids: Vec<_> = page
        .outline()
        .iter_flat()
        .map(|e| e.id.to_string())
        .collect();
    assert_eq!(ids, vec!["introduction", "work-experience", "technical-skills"]);

    // Item anchors are still laid out even though the outline omits them.
    let layout = Layout::evenly_spaced(&page, 100.0);
    assert!(layout.anchors.contains_key("chulalongkorn-university"));

    let view = simulate(&page, &layout, 100.0);
    assert_eq!(view.active_id().map(|id| id.as_str()), Some("work-experience"));

    let html = format::render(&page, &view, OutputFormat::Html)?;
    assert!(html.contains(r#"class="current""#));
    Ok(())
}

#[test]
fn test_layout_file_with_missing_anchor() -> TestResult {
    let page = sample_page()?;
    let mut layout_file = NamedTempFile::new()?;
    write!(
        layout_file,
        r#"{{ "introduction": 0, "work-experience": 800, "studies": 1600 }}"#
    )?;
    let layout = Layout::from_file(layout_file.path())?;

    let view = simulate(&page, &layout, 1000.0);
    let text = format::render_text(&view);
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines[0], "  Introduction [#introduction]");
    assert_eq!(lines[1], "> Work Experience [#work-experience]");
    assert_eq!(lines[2], "    Asian Institute of Technology (AIT) [#asian-institute-of-technology-ait]  (no anchor)");
    assert_eq!(text.lines().filter(|l| l.starts_with('>')).count(), 1);
    Ok(())
}

#[test]
fn test_json_output() -> TestResult {
    let page = sample_page()?;
    let layout = Layout::evenly_spaced(&page, 400.0);
    let view = simulate(&page, &layout, 0.0);

    let json: serde_json::Value = serde_json::from_str(&format::render(&page, &view, OutputFormat::Json)?)?;
    assert_eq!(json["items"][0]["id"], "introduction");
    assert_eq!(json["items"][0]["active"], true);
    assert_eq!(json["items"][1]["children"][0]["label"], "Asian Institute of Technology (AIT)");
    Ok(())
}

#[test]
fn test_bad_inputs_are_reported() {
    assert!(matches!(Layout::from_json("{ \"a\": \"b\" }"), Err(VitaError::Json(_))));
    assert!(Profile::from_file("/no/such/profile.json").is_err());
    assert!(PageConfig::from_json(r#"{ "presentation": { "activeClass": "a b" } }"#).is_err());
}

#[test]
fn test_page_tracker_without_frame_loop_updates_immediately() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let page = sample_page()?;
    let viewport = Rc::new(InMemoryViewport::new());
    for (i, id) in page.anchor_ids().iter().enumerate() {
        viewport.insert_anchor(id.as_str(), i as f32 * 400.0, 40.0);
    }
    viewport.set_frame_failure(true);

    let mut tracker = page.mount(viewport.clone());
    assert!(tracker.is_active("introduction"));

    viewport.scroll_to(400.0);
    tracker.handle_event(ViewportEventKind::Scroll);
    assert!(viewport.pending_frames().is_empty());
    assert!(tracker.is_active("work-experience"));
    assert_eq!(tracker.stats().recomputations, 2);
    Ok(())
}
