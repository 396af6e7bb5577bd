//! Shared types used across both pipeline stages.
//!
//! These types are serialized to JSON between stages (compose → render)
//! and must be identical across both modules.

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

/// Identifier of a navigable page section.
///
/// The section set is closed: a one-page portfolio always carries these four
/// anchors, in this order, each exactly once. The hero and footer are not
/// navigation targets and have no `SectionId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 4] = [
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// URL slug without the leading `#`: `about`, `projects`, ...
    pub fn slug(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Anchor href including the leading `#`.
    pub fn anchor(self) -> String {
        format!("#{}", self.slug())
    }

    /// Menu label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    /// Parse a URL fragment (`#contact` or `contact`) into a section id.
    pub fn from_fragment(fragment: &str) -> Option<SectionId> {
        let slug = fragment.strip_prefix('#').unwrap_or(fragment);
        SectionId::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

/// A navigation bar entry: label plus anchor href.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub href: String,
}

impl From<SectionId> for MenuItem {
    fn from(id: SectionId) -> Self {
        MenuItem {
            label: id.label().to_string(),
            href: id.anchor(),
        }
    }
}

/// The composed page plan — output of stage 1, input of stage 2.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagePlan {
    /// Fully-merged site configuration.
    pub config: SiteConfig,
    /// Sections in document order. Compose guarantees each id appears
    /// exactly once.
    pub sections: Vec<SectionId>,
    /// Navigation bar entries derived from `sections`.
    pub menu: Vec<MenuItem>,
    /// Raw markdown body for the about section, when `about.md` exists in
    /// the source directory. Converted to HTML at render time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_body: Option<String>,
    /// Relative paths of static assets to copy into the output root.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<String>,
}
