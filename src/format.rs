use crate::error::VitaError;
use clap::ValueEnum;
use vita_core::ProfilePage;
use vita_tracker::{OutlineItemView, OutlineView};

/// How the CLI prints an outline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented tree, `>` marks the active entry
    #[default]
    Text,
    /// The outline view as JSON
    Json,
    /// The `<nav>` markup
    Html,
}

pub fn render(page: &ProfilePage, view: &OutlineView, format: OutputFormat) -> Result<String, VitaError> {
    Ok(match format {
        OutputFormat::Text => render_text(view),
        OutputFormat::Json => serde_json::to_string_pretty(view)?,
        OutputFormat::Html => page.render_outline(view),
    })
}

/// Renders the outline as an indented tree, one entry per line.
pub fn render_text(view: &OutlineView) -> String {
    let mut lines = Vec::new();
    for item in &view.items {
        push_line(&mut lines, item, 0);
        for child in &item.children {
            push_line(&mut lines, child, 1);
        }
    }
    lines.join("\n")
}

fn push_line(lines: &mut Vec<String>, item: &OutlineItemView, depth: usize) {
    let marker = if item.active { '>' } else { ' ' };
    let suffix = if item.inert { "  (no anchor)" } else { "" };
    lines.push(format!(
        "{marker} {}{} [#{}]{suffix}",
        "  ".repeat(depth),
        item.label,
        item.id
    ));
}
