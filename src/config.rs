//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Configuration is
//! layered: stock defaults are overridden by the user's `config.toml` in the
//! source directory. The stock defaults are a complete site, so a fresh
//! source directory builds without any config file at all.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown by `folio-one gen-config`
//!
//! [owner]
//! name = "Hessam Mamagani"
//! tagline = "Full-Stack Developer | AI & Cloud Solutions"
//! email = "hessam.mamagani@gmail.com"
//! phone = "+90 539 229 4251"
//! location = "Istanbul, Turkey"
//!
//! [social]
//! github = "https://github.com/hessam-mamagani"
//! linkedin = "https://linkedin.com/in/hessam-mamagani"
//! cv = "cv/Hessam_Mamagani_CV.pdf"
//!
//! [hero]
//! intro = "I craft modern, scalable applications ..."
//! cta_label = "View My Work"
//! portrait = "profile.jpg"
//! portrait_alternate = "images/profile.jpg"
//!
//! [about]
//! role = "Full-Stack Developer"
//! portraits = ["profile.jpg", "profile-2.jpg"]
//! key_skills = ["React", "TypeScript", ...]
//!
//! [[skills.categories]]
//! title = "Frontend"
//! [[skills.categories.items]]
//! name = "React"
//! level = 90
//!
//! [[projects.cards]]
//! title = "InsightfulAI"
//! blurb = "AI-powered workflow assistant ..."
//! tags = ["React", ".NET", "Azure", "AI"]
//! code_url = "https://github.com/hessammamagani/insightful-ai"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the accent color
//! [colors.light]
//! link = "#0f766e"
//! ```
//!
//! Unknown keys are rejected to catch typos early. List-valued sections
//! (skill categories, project cards) replace the default list entirely when
//! present — there is no per-card merging.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Who the page is about: name, tagline, contact details.
    pub owner: OwnerConfig,
    /// External profile links.
    pub social: SocialConfig,
    /// Hero section copy and portrait sources.
    pub hero: HeroConfig,
    /// About section copy and the rotating portrait set.
    pub about: AboutConfig,
    /// Skill categories with 0-100 proficiency levels.
    pub skills: SkillsConfig,
    /// Project cards.
    pub projects: ProjectsConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.name.is_empty() {
            return Err(ConfigError::Validation("owner.name must not be empty".into()));
        }
        if !self.owner.email.contains('@') {
            return Err(ConfigError::Validation(
                "owner.email must be a mail address".into(),
            ));
        }
        if self.about.portraits.is_empty() {
            return Err(ConfigError::Validation(
                "about.portraits must not be empty".into(),
            ));
        }
        if self.skills.categories.is_empty() {
            return Err(ConfigError::Validation(
                "skills.categories must not be empty".into(),
            ));
        }
        for category in &self.skills.categories {
            for item in &category.items {
                if item.level > 100 {
                    return Err(ConfigError::Validation(format!(
                        "skill level for '{}' must be 0-100",
                        item.name
                    )));
                }
            }
        }
        if self.projects.cards.is_empty() {
            return Err(ConfigError::Validation(
                "projects.cards must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Owner identity and contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OwnerConfig {
    /// Full display name; also the document title.
    pub name: String,
    /// One-line role description shown under the name.
    pub tagline: String,
    /// Contact address; the mailto target of the contact form.
    pub email: String,
    /// Phone number shown in the contact section.
    pub phone: String,
    /// City/country line shown in the contact section.
    pub location: String,
    /// Copyright line for the footer.
    pub copyright: String,
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            name: "Hessam Mamagani".to_string(),
            tagline: "Full-Stack Developer | AI & Cloud Solutions".to_string(),
            email: "hessam.mamagani@gmail.com".to_string(),
            phone: "+90 539 229 4251".to_string(),
            location: "Istanbul, Turkey".to_string(),
            copyright: "© 2026 Hessam Mamagani. All rights reserved.".to_string(),
        }
    }
}

/// External profile links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialConfig {
    pub github: String,
    pub linkedin: String,
    /// Relative path to a CV document, copied from assets. Optional.
    pub cv: Option<String>,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            github: "https://github.com/hessam-mamagani".to_string(),
            linkedin: "https://linkedin.com/in/hessam-mamagani".to_string(),
            cv: Some("cv/Hessam_Mamagani_CV.pdf".to_string()),
        }
    }
}

/// Hero section copy and portrait sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    /// Lead paragraph under the tagline.
    pub intro: String,
    /// Call-to-action button label; links to the projects section.
    pub cta_label: String,
    /// Primary portrait image path.
    pub portrait: String,
    /// Alternate path tried once when the primary portrait fails to load.
    pub portrait_alternate: Option<String>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            intro: "I craft modern, scalable applications with cutting-edge \
                    technologies, focusing on exceptional user experiences and \
                    robust backend systems."
                .to_string(),
            cta_label: "View My Work".to_string(),
            portrait: "profile.jpg".to_string(),
            portrait_alternate: Some("images/profile.jpg".to_string()),
        }
    }
}

/// About section copy and the rotating portrait set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutConfig {
    /// Role heading inside the about section.
    pub role: String,
    /// Fallback body paragraphs, used when the source directory has no
    /// `about.md`.
    pub paragraphs: Vec<String>,
    /// Skill chips listed under "Key Skills".
    pub key_skills: Vec<String>,
    /// Image set cycled by the crossfade rotator. A single entry disables
    /// rotation but still renders the portrait.
    pub portraits: Vec<String>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            role: "Full-Stack Developer".to_string(),
            paragraphs: vec![
                "I specialize in building modern, responsive, and scalable web \
                 applications using cutting-edge technologies. With experience in \
                 both frontend and backend development, I bring ideas to life \
                 with clean, maintainable code."
                    .to_string(),
                "My focus areas include React, .NET, cloud architecture, and AI \
                 integration. I'm passionate about creating intuitive user \
                 experiences and efficient, reliable systems."
                    .to_string(),
            ],
            key_skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                ".NET".to_string(),
                "Cloud Architecture".to_string(),
                "Azure".to_string(),
                "SQL".to_string(),
                "NoSQL".to_string(),
                "AI Integration".to_string(),
            ],
            portraits: vec!["profile.jpg".to_string(), "profile-2.jpg".to_string()],
        }
    }
}

/// Skills section: heading plus categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkillsConfig {
    pub heading: String,
    pub categories: Vec<SkillCategory>,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            heading: "Skills & Expertise".to_string(),
            categories: vec![
                SkillCategory {
                    title: "Frontend".to_string(),
                    items: vec![
                        SkillItem::new("React", 90),
                        SkillItem::new("TypeScript", 85),
                        SkillItem::new("HTML/CSS", 95),
                        SkillItem::new("Tailwind CSS", 90),
                        SkillItem::new("Flutter", 75),
                    ],
                },
                SkillCategory {
                    title: "Backend".to_string(),
                    items: vec![
                        SkillItem::new(".NET Core/9", 90),
                        SkillItem::new("Node.js", 80),
                        SkillItem::new("SQL", 85),
                        SkillItem::new("Azure Services", 85),
                        SkillItem::new("API Design", 90),
                    ],
                },
                SkillCategory {
                    title: "DevOps & Tools".to_string(),
                    items: vec![
                        SkillItem::new("Git/GitHub", 90),
                        SkillItem::new("Docker", 75),
                        SkillItem::new("CI/CD", 80),
                        SkillItem::new("Azure DevOps", 85),
                        SkillItem::new("Jest/Testing", 75),
                    ],
                },
            ],
        }
    }
}

/// A titled group of skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub items: Vec<SkillItem>,
}

/// A single skill with a 0-100 proficiency level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillItem {
    pub name: String,
    pub level: u32,
}

impl SkillItem {
    fn new(name: &str, level: u32) -> Self {
        Self {
            name: name.to_string(),
            level,
        }
    }
}

/// Projects section: heading, intro and cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectsConfig {
    pub heading: String,
    pub intro: String,
    pub cards: Vec<Project>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            heading: "Featured Projects".to_string(),
            intro: "A showcase of my recent work, demonstrating my expertise in \
                    full-stack development, AI integration, and cloud solutions."
                .to_string(),
            cards: vec![
                Project {
                    title: "InsightfulAI".to_string(),
                    blurb: "AI-powered workflow assistant built with .NET 9, React, \
                            and Azure. Streamlines business processes with \
                            intelligent automation."
                        .to_string(),
                    emoji: "🚀".to_string(),
                    tags: vec![
                        "React".to_string(),
                        ".NET".to_string(),
                        "Azure".to_string(),
                        "AI".to_string(),
                    ],
                    code_url: Some("https://github.com/hessammamagani/insightful-ai".to_string()),
                    demo_url: Some("#".to_string()),
                    demo_label: "Live Demo".to_string(),
                },
                Project {
                    title: "Pilz Services Automation".to_string(),
                    blurb: "Automated inquiry and response platform with secure \
                            access control. Handles complex service workflows \
                            efficiently."
                        .to_string(),
                    emoji: "🛠️".to_string(),
                    tags: vec![
                        ".NET".to_string(),
                        "Azure".to_string(),
                        "SQL".to_string(),
                        "API".to_string(),
                    ],
                    code_url: None,
                    demo_url: None,
                    demo_label: "Live Demo".to_string(),
                },
                Project {
                    title: "Safety Expert App".to_string(),
                    blurb: "Offline-first mobile app for safety engineering with \
                            multilingual support. Used by professionals worldwide."
                        .to_string(),
                    emoji: "📱".to_string(),
                    tags: vec![
                        "Flutter".to_string(),
                        ".NET".to_string(),
                        "SQL".to_string(),
                        "Offline-First".to_string(),
                    ],
                    code_url: None,
                    demo_url: Some("#".to_string()),
                    demo_label: "App Store".to_string(),
                },
            ],
        }
    }
}

/// A single project card.
///
/// `code_url`/`demo_url` of `None` render as muted "Private Code" /
/// "Private Demo" text instead of links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Project {
    pub title: String,
    pub blurb: String,
    /// Banner glyph shown on the card header strip.
    pub emoji: String,
    pub tags: Vec<String>,
    pub code_url: Option<String>,
    pub demo_url: Option<String>,
    /// Label for the demo link ("Live Demo", "App Store", ...).
    pub demo_label: String,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            title: String::new(),
            blurb: String::new(),
            emoji: "🚀".to_string(),
            tags: Vec::new(),
            code_url: None,
            demo_url: None,
            demo_label: "Live Demo".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background color.
    pub background: String,
    /// Card/panel surface color.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (taglines, captions, private-link text).
    pub text_muted: String,
    /// Border color for cards and the form.
    pub border: String,
    /// Accent color: links, skill bars, the hero gradient start.
    pub accent: String,
    /// Accent hover color; also the hero gradient end.
    pub accent_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f9fafb".to_string(),
            surface: "#ffffff".to_string(),
            text: "#111827".to_string(),
            text_muted: "#4b5563".to_string(),
            border: "#e5e7eb".to_string(),
            accent: "#4f46e5".to_string(),
            accent_hover: "#7c3aed".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0b1020".to_string(),
            surface: "#151b2e".to_string(),
            text: "#e5e7eb".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#273048".to_string(),
            accent: "#818cf8".to_string(),
            accent_hover: "#a78bfa".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely. This covers
///   arrays too: overriding `skills.categories` replaces the whole list.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# folio-one Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as config.toml in your source directory. Each key only
# needs to be present when you want to override the default. Unknown keys
# will cause an error. List-valued sections ([[skills.categories]],
# [[projects.cards]]) replace the default list entirely when present.

# ---------------------------------------------------------------------------
# Owner identity
# ---------------------------------------------------------------------------
[owner]
name = "Hessam Mamagani"
tagline = "Full-Stack Developer | AI & Cloud Solutions"
email = "hessam.mamagani@gmail.com"
phone = "+90 539 229 4251"
location = "Istanbul, Turkey"
copyright = "© 2026 Hessam Mamagani. All rights reserved."

# ---------------------------------------------------------------------------
# Profile links
# ---------------------------------------------------------------------------
[social]
github = "https://github.com/hessam-mamagani"
linkedin = "https://linkedin.com/in/hessam-mamagani"
# Relative path to a CV document inside assets/. Remove to hide the link.
cv = "cv/Hessam_Mamagani_CV.pdf"

# ---------------------------------------------------------------------------
# Hero section
# ---------------------------------------------------------------------------
[hero]
intro = "I craft modern, scalable applications with cutting-edge technologies, focusing on exceptional user experiences and robust backend systems."
cta_label = "View My Work"
portrait = "profile.jpg"
# Tried once when the primary portrait fails to load; after that the
# built-in placeholder graphic takes over. Remove to skip the retry.
portrait_alternate = "images/profile.jpg"

# ---------------------------------------------------------------------------
# About section
# ---------------------------------------------------------------------------
# Body paragraphs come from about.md in the source directory when present;
# the paragraphs below are the fallback.
[about]
role = "Full-Stack Developer"
paragraphs = [
    "I specialize in building modern, responsive, and scalable web applications using cutting-edge technologies. With experience in both frontend and backend development, I bring ideas to life with clean, maintainable code.",
    "My focus areas include React, .NET, cloud architecture, and AI integration. I'm passionate about creating intuitive user experiences and efficient, reliable systems.",
]
key_skills = ["React", "TypeScript", ".NET", "Cloud Architecture", "Azure", "SQL", "NoSQL", "AI Integration"]
# Cycled by the crossfade rotator. A single entry disables rotation.
portraits = ["profile.jpg", "profile-2.jpg"]

# ---------------------------------------------------------------------------
# Skills section
# ---------------------------------------------------------------------------
[skills]
heading = "Skills & Expertise"

[[skills.categories]]
title = "Frontend"
items = [
    { name = "React", level = 90 },
    { name = "TypeScript", level = 85 },
    { name = "HTML/CSS", level = 95 },
    { name = "Tailwind CSS", level = 90 },
    { name = "Flutter", level = 75 },
]

[[skills.categories]]
title = "Backend"
items = [
    { name = ".NET Core/9", level = 90 },
    { name = "Node.js", level = 80 },
    { name = "SQL", level = 85 },
    { name = "Azure Services", level = 85 },
    { name = "API Design", level = 90 },
]

[[skills.categories]]
title = "DevOps & Tools"
items = [
    { name = "Git/GitHub", level = 90 },
    { name = "Docker", level = 75 },
    { name = "CI/CD", level = 80 },
    { name = "Azure DevOps", level = 85 },
    { name = "Jest/Testing", level = 75 },
]

# ---------------------------------------------------------------------------
# Projects section
# ---------------------------------------------------------------------------
[projects]
heading = "Featured Projects"
intro = "A showcase of my recent work, demonstrating my expertise in full-stack development, AI integration, and cloud solutions."

# Omit code_url/demo_url to render muted "Private Code"/"Private Demo" text.
[[projects.cards]]
title = "InsightfulAI"
blurb = "AI-powered workflow assistant built with .NET 9, React, and Azure. Streamlines business processes with intelligent automation."
emoji = "🚀"
tags = ["React", ".NET", "Azure", "AI"]
code_url = "https://github.com/hessammamagani/insightful-ai"
demo_url = "#"
demo_label = "Live Demo"

[[projects.cards]]
title = "Pilz Services Automation"
blurb = "Automated inquiry and response platform with secure access control. Handles complex service workflows efficiently."
emoji = "🛠️"
tags = [".NET", "Azure", "SQL", "API"]

[[projects.cards]]
title = "Safety Expert App"
blurb = "Offline-first mobile app for safety engineering with multilingual support. Used by professionals worldwide."
emoji = "📱"
tags = ["Flutter", ".NET", "SQL", "Offline-First"]
demo_url = "#"
demo_label = "App Store"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f9fafb"
surface = "#ffffff"
text = "#111827"
text_muted = "#4b5563"    # Taglines, captions, private-link text
border = "#e5e7eb"
accent = "#4f46e5"        # Links, skill bars, hero gradient start
accent_hover = "#7c3aed"  # Hover states, hero gradient end

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0b1020"
surface = "#151b2e"
text = "#e5e7eb"
text_muted = "#9ca3af"
border = "#273048"
accent = "#818cf8"
accent_hover = "#a78bfa"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    fn scheme_vars(s: &ColorScheme) -> String {
        format!(
            "    --color-bg: {};\n    --color-surface: {};\n    --color-text: {};\n    \
             --color-text-muted: {};\n    --color-border: {};\n    --color-accent: {};\n    \
             --color-accent-hover: {};",
            s.background, s.surface, s.text, s.text_muted, s.border, s.accent, s.accent_hover
        )
    }
    format!(
        ":root {{\n{}\n}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{}\n    }}\n}}",
        scheme_vars(&colors.light),
        scheme_vars(&colors.dark)
            .lines()
            .map(|l| format!("    {l}"))
            .collect::<Vec<_>>()
            .join("\n")
    )
}
