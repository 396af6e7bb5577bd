//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (section, project, skill category, asset) is its
//! semantic identity — title and positional index — with file paths shown
//! as secondary context. This makes the output readable as a content
//! inventory while still letting users trace data back to files.
//!
//! # Output Format
//!
//! ## Compose
//!
//! ```text
//! Sections
//! 001 About → #about
//!     Body: about.md
//! 002 Projects → #projects
//!     003 cards
//! 003 Skills → #skills
//!     015 skills in 3 categories
//! 004 Contact → #contact
//!     Form → mailto:hessam.mamagani@gmail.com
//!
//! Assets
//!     cv/Hessam_Mamagani_CV.pdf
//!     profile.jpg
//! ```
//!
//! ## Render
//!
//! ```text
//! Page → index.html
//!     4 sections, 3 projects, 15 skill counters
//! Assets → 2 files copied
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::types::{PagePlan, SectionId};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn skill_count(plan: &PagePlan) -> usize {
    plan.config
        .skills
        .categories
        .iter()
        .map(|c| c.items.len())
        .sum()
}

// ============================================================================
// Compose output
// ============================================================================

/// Format the compose-stage summary: sections with their content counts,
/// then the asset listing.
pub fn format_compose_output(plan: &PagePlan) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Sections".to_string());
    for (pos, section) in plan.sections.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(pos + 1),
            section.label(),
            section.anchor()
        ));
        match section {
            SectionId::About => {
                let body = if plan.about_body.is_some() {
                    "about.md"
                } else {
                    "config paragraphs"
                };
                lines.push(format!("{}Body: {}", indent(1), body));
                lines.push(format!(
                    "{}{} rotating portraits",
                    indent(1),
                    plan.config.about.portraits.len()
                ));
            }
            SectionId::Projects => {
                lines.push(format!(
                    "{}{} cards",
                    indent(1),
                    plan.config.projects.cards.len()
                ));
            }
            SectionId::Skills => {
                lines.push(format!(
                    "{}{} skills in {} categories",
                    indent(1),
                    skill_count(plan),
                    plan.config.skills.categories.len()
                ));
            }
            SectionId::Contact => {
                lines.push(format!(
                    "{}Form → mailto:{}",
                    indent(1),
                    plan.config.owner.email
                ));
            }
        }
    }

    if !plan.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &plan.assets {
            lines.push(format!("{}{}", indent(1), asset));
        }
    }

    lines
}

/// Print the compose-stage summary to stdout.
pub fn print_compose_output(plan: &PagePlan) {
    for line in format_compose_output(plan) {
        println!("{}", line);
    }
}

// ============================================================================
// Render output
// ============================================================================

/// Format the render-stage summary.
pub fn format_render_output(plan: &PagePlan) -> Vec<String> {
    let mut lines = vec![
        "Page → index.html".to_string(),
        format!(
            "{}{} sections, {} projects, {} skill counters",
            indent(1),
            plan.sections.len(),
            plan.config.projects.cards.len(),
            skill_count(plan)
        ),
    ];
    if !plan.assets.is_empty() {
        lines.push(format!("Assets → {} files copied", plan.assets.len()));
    }
    lines
}

/// Print the render-stage summary to stdout.
pub fn print_render_output(plan: &PagePlan) {
    for line in format_render_output(plan) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_plan;

    #[test]
    fn compose_output_lists_sections_in_order() {
        let lines = format_compose_output(&sample_plan());
        assert_eq!(lines[0], "Sections");
        assert_eq!(lines[1], "001 About → #about");
        let projects = lines.iter().position(|l| l.contains("Projects")).unwrap();
        let contact = lines.iter().position(|l| l.contains("Contact")).unwrap();
        assert!(projects < contact);
    }

    #[test]
    fn compose_output_counts_content() {
        let lines = format_compose_output(&sample_plan());
        assert!(lines.iter().any(|l| l.contains("3 cards")));
        assert!(lines.iter().any(|l| l.contains("15 skills in 3 categories")));
        assert!(
            lines
                .iter()
                .any(|l| l.contains("mailto:hessam.mamagani@gmail.com"))
        );
    }

    #[test]
    fn compose_output_shows_about_source() {
        let mut plan = sample_plan();
        assert!(
            format_compose_output(&plan)
                .iter()
                .any(|l| l.contains("config paragraphs"))
        );
        plan.about_body = Some("# hi".to_string());
        assert!(
            format_compose_output(&plan)
                .iter()
                .any(|l| l.contains("about.md"))
        );
    }

    #[test]
    fn compose_output_omits_empty_assets() {
        let lines = format_compose_output(&sample_plan());
        assert!(!lines.iter().any(|l| l == "Assets"));
    }

    #[test]
    fn render_output_summarizes_page() {
        let mut plan = sample_plan();
        plan.assets = vec!["profile.jpg".to_string()];
        let lines = format_render_output(&plan);
        assert_eq!(lines[0], "Page → index.html");
        assert!(lines[1].contains("4 sections, 3 projects, 15 skill counters"));
        assert!(lines[2].contains("1 files copied"));
    }

    #[test]
    fn index_is_three_digit_padded() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(999), "999");
    }
}
