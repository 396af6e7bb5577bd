//! HTML page rendering.
//!
//! Stage 2 of the folio-one build pipeline. Takes the composed page plan
//! and generates the final single-page site.
//!
//! ## Generated Output
//!
//! ```text
//! dist/
//! ├── index.html          # The whole site: one document, four anchors
//! └── ...                 # assets/ contents copied to the root
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base styles (color variables injected from config)
//! - `static/behavior.js`: reveals, fallback, rotator, counters, the form
//!
//! The behavior script reads every timing constant from a `FOLIO` object
//! rendered into the page head. Those constants are the public values of
//! the [`crate::motion`] modules — the script animates exactly what the
//! fake-clock tests pinned. The reveal start/end styles are likewise
//! generated from the [`Variants`] presets, so the stylesheet cannot drift
//! from the model.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use serde_json::json;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::{self, Project, SiteConfig};
use crate::motion::counter::COUNT_DURATION_MS;
use crate::motion::fallback::{PLACEHOLDER_ALT, PLACEHOLDER_LABEL, placeholder_data_uri};
use crate::motion::form::{
    SEND_FAILED_MESSAGE, SUBMITTED_MESSAGE, SUBMITTED_RESET_MS, VALIDATION_MESSAGE,
};
use crate::motion::page::{FRAGMENT_SCROLL_GRACE_MS, NAV_SOLID_AFTER_PX};
use crate::motion::reveal::Variants;
use crate::motion::rotator::ROTATION_PERIOD_MS;
use crate::motion::visibility::ObserveOptions;
use crate::types::{MenuItem, PagePlan, SectionId};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/behavior.js");

/// Render the site from a plan manifest into the output directory, copying
/// listed assets from the source directory.
pub fn render(
    manifest_path: &Path,
    output_dir: &Path,
    source_dir: &Path,
) -> Result<(), RenderError> {
    let manifest: serde_json::Value = serde_json::from_str(&fs::read_to_string(manifest_path)?)?;
    let plan: PagePlan = serde_json::from_value(
        manifest
            .get("plan")
            .cloned()
            .unwrap_or(serde_json::Value::Null),
    )?;

    fs::create_dir_all(output_dir)?;
    copy_assets(&plan, source_dir, output_dir)?;

    let page = render_page(&plan);
    fs::write(output_dir.join("index.html"), page.into_string())?;
    Ok(())
}

/// Copy the plan's asset listing from `source/assets/` to the output root.
fn copy_assets(plan: &PagePlan, source_dir: &Path, output_dir: &Path) -> Result<(), RenderError> {
    let assets_dir = source_dir.join("assets");
    for rel in &plan.assets {
        let from = assets_dir.join(rel);
        let to = output_dir.join(rel);
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&from, &to)?;
    }
    Ok(())
}

// ============================================================================
// Behavior injection
// ============================================================================

/// The `FOLIO` constants object the behavior script reads. Every value is
/// sourced from the motion modules or the plan — nothing is hand-copied
/// into the script.
fn behavior_constants(config: &SiteConfig) -> String {
    let constants = json!({
        "graceMs": FRAGMENT_SCROLL_GRACE_MS,
        "rotatePeriodMs": ROTATION_PERIOD_MS,
        "countDurationMs": COUNT_DURATION_MS,
        "submitResetMs": SUBMITTED_RESET_MS,
        "navSolidAfterPx": NAV_SOLID_AFTER_PX,
        "revealThreshold": ObserveOptions::default().threshold,
        "placeholder": placeholder_data_uri(PLACEHOLDER_LABEL),
        "placeholderAlt": PLACEHOLDER_ALT,
        "mailto": config.owner.email,
        "msgValidation": VALIDATION_MESSAGE,
        "msgSendFailed": SEND_FAILED_MESSAGE,
        "msgSubmitted": SUBMITTED_MESSAGE,
    });
    format!("window.FOLIO = {constants};")
}

/// The named reveal presets shipped to the stylesheet, keyed by the
/// `data-reveal` attribute value.
fn reveal_presets() -> [(&'static str, Variants); 7] {
    [
        ("fade-in", Variants::fade_in()),
        ("fade-in-up", Variants::fade_in_up()),
        ("slide-in-left", Variants::slide_in_left()),
        ("scale-in", Variants::scale_in()),
        ("card-rise", Variants::card_rise(0)),
        ("nav-drop", Variants::nav_drop()),
        ("menu-item", Variants::menu_item(0)),
    ]
}

/// CSS for the reveal presets: hidden start styles, transition parameters
/// and the visible end state, generated from the same [`Variants`] the
/// model animates. Staggered children override `transition-delay` inline.
fn reveal_css() -> String {
    let mut css = String::new();
    for (name, variants) in reveal_presets() {
        let hidden = variants.hidden;
        css.push_str(&format!(
            "[data-reveal=\"{name}\"] {{\n    opacity: {};\n    transform: {};\n    \
             transition: opacity {dur}ms {ease} {delay}ms, transform {dur}ms {ease} {delay}ms;\n}}\n",
            hidden.opacity,
            hidden.css_transform(),
            dur = variants.duration_ms,
            ease = variants.ease.css_name(),
            delay = variants.delay_ms,
        ));
        css.push_str(&format!(
            "[data-reveal=\"{name}\"].is-visible {{\n    opacity: {};\n    transform: {};\n}}\n\n",
            variants.visible.opacity,
            variants.visible.css_transform(),
        ));
    }
    css
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure.
fn base_document(title: &str, description: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the whole page from a plan.
pub fn render_page(plan: &PagePlan) -> Markup {
    let config = &plan.config;
    let css = format!(
        "{}\n\n{}\n{}",
        config::generate_color_css(&config.colors),
        reveal_css(),
        CSS_STATIC
    );

    let content = html! {
        (render_nav(&plan.menu, &config.owner.name))
        (render_hero(config))
        @for section in &plan.sections {
            @match section {
                SectionId::About => {
                    (render_about(config, plan.about_body.as_deref()))
                }
                SectionId::Projects => {
                    (render_projects(config))
                }
                SectionId::Skills => {
                    (render_skills(config))
                }
                SectionId::Contact => {
                    (render_contact(config))
                }
            }
        }
        (render_footer(config))
        script { (PreEscaped(behavior_constants(config))) }
        script { (PreEscaped(JS)) }
    };

    base_document(&config.owner.name, &config.owner.tagline, &css, content)
}

/// Renders the fixed navigation bar: brand mark, desktop menu, and the
/// checkbox-driven mobile panel with staggered item reveals.
pub fn render_nav(menu: &[MenuItem], owner_name: &str) -> Markup {
    let mut chars = owner_name.chars();
    let brand_mark: String = chars.next().map(|c| c.to_string()).unwrap_or_default();
    let brand_rest: String = chars.collect();

    html! {
        nav.site-nav data-reveal="nav-drop" {
            div.container {
                a.nav-brand href="#" {
                    span.brand-mark { (brand_mark) }
                    (brand_rest)
                }
                ul.nav-menu {
                    @for item in menu {
                        li { a href=(item.href) { (item.label) } }
                    }
                }
                input.menu-toggle type="checkbox" id="menu-toggle";
                label.menu-button for="menu-toggle" aria-label="Open menu" { "☰" }
                div.menu-panel {
                    ul {
                        @for (index, item) in menu.iter().enumerate() {
                            li data-reveal="menu-item"
                                style=(stagger_style(Variants::menu_item(index))) {
                                a href=(item.href) { (item.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Inline `transition-delay` override for the `index`-th child of a
/// staggered group.
fn stagger_style(variants: Variants) -> String {
    format!("transition-delay: {}ms;", variants.delay_ms)
}

/// Renders the hero section: name, tagline, profile links, call to action,
/// and the portrait with its one-shot alternate-path fallback.
fn render_hero(config: &SiteConfig) -> Markup {
    html! {
        header.hero data-reveal="fade-in" {
            div.container {
                div.hero-intro data-reveal="slide-in-left" {
                    h1 { (config.owner.name) }
                    p.hero-tagline { (config.owner.tagline) }
                    p.hero-lead { (config.hero.intro) }
                    div.hero-links {
                        a href=(config.social.github) target="_blank" rel="noreferrer"
                            aria-label="GitHub Profile" { "GitHub" }
                        a href=(config.social.linkedin) target="_blank" rel="noreferrer"
                            aria-label="LinkedIn Profile" { "LinkedIn" }
                        a href={ "mailto:" (config.owner.email) } aria-label="Email Contact" {
                            "Email"
                        }
                        @if let Some(cv) = &config.social.cv {
                            a href=(cv) target="_blank" rel="noreferrer"
                                aria-label="Download CV" { "CV" }
                        }
                    }
                    a.hero-cta href="#projects" { (config.hero.cta_label) }
                }
                div.hero-portrait data-reveal="scale-in" {
                    div.frame {
                        img src=(config.hero.portrait) alt=(config.owner.name)
                            loading="eager"
                            data-alternate=[config.hero.portrait_alternate.as_deref()];
                    }
                }
            }
        }
    }
}

/// Renders the about section: rotating portraits, body copy (markdown when
/// the source has `about.md`, config paragraphs otherwise), key skills.
fn render_about(config: &SiteConfig, about_body: Option<&str>) -> Markup {
    let body: Markup = match about_body {
        Some(markdown) => {
            let mut out = String::new();
            md_html::push_html(&mut out, Parser::new(markdown));
            PreEscaped(out)
        }
        None => html! {
            @for paragraph in &config.about.paragraphs {
                p { (paragraph) }
            }
        },
    };

    html! {
        section #about .section.alt {
            div.container {
                div.section-header data-reveal="fade-in-up" {
                    h2 { "About Me" }
                }
                div.about-grid {
                    div.portrait-rotator data-rotator {
                        @for (index, portrait) in config.about.portraits.iter().enumerate() {
                            img src=(portrait) alt=(config.owner.name)
                                class=[(index == 0).then_some("is-active")]
                                loading="lazy";
                        }
                    }
                    div.about-copy {
                        h3 { (config.about.role) }
                        (body)
                        h4 { "Key Skills:" }
                        div.chip-list {
                            @for skill in &config.about.key_skills {
                                span.chip { (skill) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the projects section with its staggered card reveals.
fn render_projects(config: &SiteConfig) -> Markup {
    html! {
        section #projects .section {
            div.container {
                div.section-header data-reveal="fade-in-up" {
                    h2 { (config.projects.heading) }
                    p { (config.projects.intro) }
                }
                div.project-grid {
                    @for (index, project) in config.projects.cards.iter().enumerate() {
                        (render_project_card(project, index))
                    }
                }
            }
        }
    }
}

fn render_project_card(project: &Project, index: usize) -> Markup {
    html! {
        article.project-card data-reveal="card-rise"
            style=(stagger_style(Variants::card_rise(index))) {
            div.project-banner { span { (project.emoji) } }
            div.project-body {
                h3 { (project.title) }
                p { (project.blurb) }
                div.tag-list {
                    @for tag in &project.tags {
                        span.tag { (tag) }
                    }
                }
                div.project-links {
                    @if let Some(code) = &project.code_url {
                        a href=(code) target="_blank" rel="noreferrer" { "View Code" }
                    } @else {
                        span.private { "Private Code" }
                    }
                    @if let Some(demo) = &project.demo_url {
                        a href=(demo) { (project.demo_label) }
                    } @else {
                        span.private { "Private Demo" }
                    }
                }
            }
        }
    }
}

/// Renders the skills section. Bars and values are fully populated in the
/// static HTML; the script zeroes and animates them only when it can
/// observe visibility (degrades to correct final values).
fn render_skills(config: &SiteConfig) -> Markup {
    html! {
        section #skills .section.alt {
            div.container {
                div.section-header data-reveal="fade-in-up" {
                    h2 { (config.skills.heading) }
                }
                div.skills-grid {
                    @for category in &config.skills.categories {
                        div.skill-card {
                            h3 { (category.title) }
                            @for item in &category.items {
                                div.skill-row {
                                    div.skill-meta {
                                        span { (item.name) }
                                        span.skill-value data-counter=(item.level) {
                                            (item.level) "%"
                                        }
                                    }
                                    div.skill-track {
                                        div.skill-fill
                                            style={ "width: " (item.level) "%;" } {}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the contact section: info column plus the mailto form.
fn render_contact(config: &SiteConfig) -> Markup {
    html! {
        section #contact .section {
            div.container {
                div.section-header data-reveal="fade-in-up" {
                    h2 { "Get In Touch" }
                }
                div.contact-grid {
                    div.contact-info-col {
                        h3 { "Contact Information" }
                        ul.contact-info {
                            li {
                                span.label { "Email" }
                                a href={ "mailto:" (config.owner.email) } {
                                    (config.owner.email)
                                }
                            }
                            li {
                                span.label { "Phone" }
                                a href={ "tel:" (phone_href(&config.owner.phone)) } {
                                    (config.owner.phone)
                                }
                            }
                            li {
                                span.label { "Location" }
                                span { (config.owner.location) }
                            }
                            li {
                                span.label { "GitHub" }
                                a href=(config.social.github) target="_blank" rel="noreferrer" {
                                    (strip_scheme(&config.social.github))
                                }
                            }
                            li {
                                span.label { "LinkedIn" }
                                a href=(config.social.linkedin) target="_blank" rel="noreferrer" {
                                    (strip_scheme(&config.social.linkedin))
                                }
                            }
                        }
                    }
                    div {
                        h3 { "Send Me a Message" }
                        form.contact-form #contact-form novalidate {
                            label for="name" { "Name" }
                            input type="text" id="name" name="name" required;
                            label for="email" { "Email" }
                            input type="email" id="email" name="email" required;
                            label for="message" { "Message" }
                            textarea id="message" name="message" rows="4" required {}
                            button type="submit" { "Send Message" }
                            p.form-status aria-live="polite" {}
                        }
                    }
                }
            }
        }
    }
}

fn render_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            div.container {
                div.footer-row {
                    div {
                        h3 { (config.owner.name) }
                        p.tagline { (config.owner.tagline) }
                    }
                    div.footer-links {
                        a href=(config.social.github) target="_blank" rel="noreferrer"
                            aria-label="GitHub Profile" { "GitHub" }
                        a href=(config.social.linkedin) target="_blank" rel="noreferrer"
                            aria-label="LinkedIn Profile" { "LinkedIn" }
                        a href={ "mailto:" (config.owner.email) } aria-label="Email Contact" {
                            "Email"
                        }
                    }
                }
                p.copyright { (config.owner.copyright) }
            }
        }
    }
}

/// `tel:` href form of a display phone number: digits and a leading plus.
fn phone_href(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Display form of a profile URL without its scheme.
fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

// ============================================================================
// Tests
// ============================================================================
