//! Page plan composition.
//!
//! Stage 1 of the folio-one build pipeline. Loads the layered `config.toml`
//! from the source directory, picks up the optional `about.md` body and the
//! `assets/` directory listing, and produces the validated [`PagePlan`]
//! that stage 2 renders.
//!
//! ## Source Directory Layout
//!
//! ```text
//! content/
//! ├── config.toml        # Site config (optional — stock defaults apply)
//! ├── about.md           # About section body (optional, markdown)
//! └── assets/            # Static assets → copied to the output root
//!     ├── profile.jpg
//!     └── cv/Hessam_Mamagani_CV.pdf
//! ```
//!
//! ## Validation
//!
//! Beyond config validation, compose enforces the page's structural
//! invariant: every section anchor appears exactly once, in document
//! order. A plan that would render duplicate or missing anchors is
//! rejected here, not discovered in the browser.

use serde_json::json;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::{self, ConfigError};
use crate::types::{MenuItem, PagePlan, SectionId};

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate section anchor: {0}")]
    DuplicateAnchor(String),
    #[error("Missing section anchor: {0}")]
    MissingAnchor(String),
}

/// Compose the page plan from a source directory.
pub fn compose(source: &Path) -> Result<PagePlan, ComposeError> {
    let config = config::load_config(source)?;

    let about_path = source.join("about.md");
    let about_body = if about_path.is_file() {
        Some(fs::read_to_string(&about_path)?)
    } else {
        None
    };

    let sections = SectionId::ALL.to_vec();
    let menu: Vec<MenuItem> = sections.iter().copied().map(MenuItem::from).collect();

    let plan = PagePlan {
        config,
        sections,
        menu,
        about_body,
        assets: list_assets(&source.join("assets"))?,
    };
    validate_plan(&plan)?;
    Ok(plan)
}

/// Check the plan's structural invariants: each section anchor exactly once.
pub fn validate_plan(plan: &PagePlan) -> Result<(), ComposeError> {
    let mut seen = Vec::new();
    for section in &plan.sections {
        if seen.contains(section) {
            return Err(ComposeError::DuplicateAnchor(section.anchor()));
        }
        seen.push(*section);
    }
    for required in SectionId::ALL {
        if !seen.contains(&required) {
            return Err(ComposeError::MissingAnchor(required.anchor()));
        }
    }
    Ok(())
}

/// Relative paths of all files under the assets directory, sorted for a
/// stable manifest. An absent directory is an empty listing, not an error.
fn list_assets(assets_dir: &Path) -> Result<Vec<String>, ComposeError> {
    if !assets_dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut paths = Vec::new();
    for entry in WalkDir::new(assets_dir) {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() {
            let rel = entry
                .path()
                .strip_prefix(assets_dir)
                .expect("walkdir yields children of its root");
            paths.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
    paths.sort();
    Ok(paths)
}

/// Compose and write the plan manifest into the temp directory, returning
/// the plan. The manifest is versioned so a stale temp dir from another
/// binary version is detectable by inspection.
pub fn compose_to_manifest(source: &Path, temp_dir: &Path) -> Result<PagePlan, ComposeError> {
    let plan = compose(source)?;
    fs::create_dir_all(temp_dir)?;
    let manifest = json!({
        "version": env!("CARGO_PKG_VERSION"),
        "plan": &plan,
    });
    fs::write(
        temp_dir.join("plan.json"),
        serde_json::to_string_pretty(&manifest)?,
    )?;
    Ok(plan)
}

/// Read a plan manifest written by [`compose_to_manifest`].
pub fn read_manifest(temp_dir: &Path) -> Result<PagePlan, ComposeError> {
    let content = fs::read_to_string(temp_dir.join("plan.json"))?;
    let manifest: serde_json::Value = serde_json::from_str(&content)?;
    let plan = serde_json::from_value(
        manifest
            .get("plan")
            .cloned()
            .unwrap_or(serde_json::Value::Null),
    )?;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn compose_from_empty_source_uses_stock_defaults() {
        let tmp = TempDir::new().unwrap();
        let plan = compose(tmp.path()).unwrap();
        assert_eq!(plan.config.owner.name, "Hessam Mamagani");
        assert_eq!(plan.sections, SectionId::ALL.to_vec());
        assert_eq!(plan.menu.len(), 4);
        assert!(plan.about_body.is_none());
        assert!(plan.assets.is_empty());
    }

    #[test]
    fn compose_reads_about_md() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("about.md"), "I build **things**.\n").unwrap();
        let plan = compose(tmp.path()).unwrap();
        assert_eq!(plan.about_body.as_deref(), Some("I build **things**.\n"));
    }

    #[test]
    fn compose_lists_assets_recursively_sorted() {
        let tmp = TempDir::new().unwrap();
        let assets = tmp.path().join("assets");
        fs::create_dir_all(assets.join("cv")).unwrap();
        fs::write(assets.join("profile.jpg"), b"jpg").unwrap();
        fs::write(assets.join("cv/resume.pdf"), b"pdf").unwrap();

        let plan = compose(tmp.path()).unwrap();
        assert_eq!(plan.assets, vec!["cv/resume.pdf", "profile.jpg"]);
    }

    #[test]
    fn compose_propagates_config_errors() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[owner]\nemail = \"x\"").unwrap();
        let result = compose(tmp.path());
        assert!(matches!(result, Err(ComposeError::Config(_))));
    }

    #[test]
    fn menu_mirrors_sections() {
        let tmp = TempDir::new().unwrap();
        let plan = compose(tmp.path()).unwrap();
        let hrefs: Vec<&str> = plan.menu.iter().map(|m| m.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#about", "#projects", "#skills", "#contact"]);
    }

    #[test]
    fn validate_rejects_duplicate_anchor() {
        let tmp = TempDir::new().unwrap();
        let mut plan = compose(tmp.path()).unwrap();
        plan.sections.push(SectionId::About);
        let err = validate_plan(&plan).unwrap_err();
        assert!(matches!(err, ComposeError::DuplicateAnchor(a) if a == "#about"));
    }

    #[test]
    fn validate_rejects_missing_anchor() {
        let tmp = TempDir::new().unwrap();
        let mut plan = compose(tmp.path()).unwrap();
        plan.sections.retain(|s| *s != SectionId::Contact);
        let err = validate_plan(&plan).unwrap_err();
        assert!(matches!(err, ComposeError::MissingAnchor(a) if a == "#contact"));
    }

    #[test]
    fn manifest_roundtrip() {
        let source = TempDir::new().unwrap();
        fs::write(source.path().join("about.md"), "hello\n").unwrap();
        let temp = TempDir::new().unwrap();

        let written = compose_to_manifest(source.path(), temp.path()).unwrap();
        let read = read_manifest(temp.path()).unwrap();

        assert_eq!(read.about_body, written.about_body);
        assert_eq!(read.sections, written.sections);
        assert_eq!(read.config.owner.email, written.config.owner.email);

        // The manifest on disk is human-readable JSON with a version stamp
        let raw = fs::read_to_string(temp.path().join("plan.json")).unwrap();
        assert!(raw.contains("\"version\""));
    }
}
