//! Shared test utilities for the folio-one test suite.
//!
//! Provides plan builders and lookup helpers used by module test suites.
//! Lookups panic with a message listing what *was* available, so a failing
//! test names the actual state instead of unwrapping on `None`.

use crate::config::SiteConfig;
use crate::types::{MenuItem, PagePlan, SectionId};

/// A complete plan built from stock defaults, no filesystem involved.
pub fn sample_plan() -> PagePlan {
    plan_with_config(SiteConfig::default())
}

/// A plan around a specific config, with the standard section set.
pub fn plan_with_config(config: SiteConfig) -> PagePlan {
    let sections = SectionId::ALL.to_vec();
    let menu = sections.iter().copied().map(MenuItem::from).collect();
    PagePlan {
        config,
        sections,
        menu,
        about_body: None,
        assets: Vec::new(),
    }
}

/// Find a menu item by label. Panics if not found.
pub fn find_menu_item<'a>(plan: &'a PagePlan, label: &str) -> &'a MenuItem {
    plan.menu
        .iter()
        .find(|m| m.label == label)
        .unwrap_or_else(|| {
            let labels: Vec<&str> = plan.menu.iter().map(|m| m.label.as_str()).collect();
            panic!("menu item '{label}' not found. Available: {labels:?}")
        })
}

/// Count non-overlapping occurrences of a needle in rendered HTML.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
