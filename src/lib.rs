//! # folio-one
//!
//! A minimal generator for single-page developer portfolio sites. A single
//! `config.toml` is the data source: owner identity, skills, projects and
//! colors become a one-page site with hero, about, skills, projects and
//! contact sections under a fixed navigation bar.
//!
//! # Architecture: Two-Stage Pipeline plus a Behavior Core
//!
//! The generator processes content through two independent stages, with a
//! JSON manifest between them:
//!
//! ```text
//! 1. Compose   config.toml + content/  →  plan.json   (config → page plan)
//! 2. Render    plan                    →  dist/       (final HTML site)
//! ```
//!
//! This separation exists for the same reasons as any staged build:
//!
//! - **Debuggability**: the plan is human-readable JSON you can inspect.
//! - **Testability**: compose and render are pure functions from input to
//!   output, so tests can exercise either stage without the other.
//!
//! The third piece is the [`motion`] module tree: a deterministic model of
//! everything the page does client-side — scroll-triggered reveals, the
//! image fallback chain, the portrait crossfade rotator, skill counters and
//! the contact form state machine. Render injects its constants (durations,
//! stagger delays, the placeholder graphic, the mailto endpoint) into the
//! shipped stylesheet and script, and the test suite drives the same model
//! against a simulated clock. What the browser animates is exactly what the
//! tests pinned.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`compose`] | Stage 1 — loads and validates config + content, produces the page plan |
//! | [`render`] | Stage 2 — renders the final HTML page from the plan using Maud |
//! | [`config`] | `config.toml` loading, merging, validation, and color CSS generation |
//! | [`types`] | Shared types serialized between stages (`SectionId`, `PagePlan`) |
//! | [`motion`] | The behavior core: visibility, reveals, fallback, rotator, counters, form |
//! | [`output`] | CLI output formatting — tree-based display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Malformed HTML is a
//! build error, template variables are Rust expressions, interpolation is
//! auto-escaped, and there is no template directory to ship or get out of
//! sync.
//!
//! ## The Behavior Core Lives in Rust
//!
//! The page's client-side logic is small but stateful: one-shot visibility
//! latches, staggered transitions, timers that must be released on
//! teardown, a form state machine with a delayed reset. Shipping that as
//! ad-hoc script and hoping is how such pages rot. Here each primitive is
//! an explicit state machine over a millisecond clock the caller owns
//! ([`motion::page::PageRuntime`] for the whole page), so every invariant —
//! a latch that never reverts, a counter that stops exactly at its target,
//! a timer that cannot fire after `stop()` — is enforced by a unit test
//! with a fake clock. The shipped script is a thin mirror whose constants
//! come from these modules at render time.
//!
//! ## One Page, Fixed Sections
//!
//! The section set is closed ([`types::SectionId`]): about, projects,
//! skills, contact. Each anchor appears exactly once in the document —
//! compose rejects a plan that breaks this, and a direct load with a URL
//! fragment scrolls the matching section into view after a short grace
//! delay. No router, no per-page builds, no client-side navigation beyond
//! anchors.
//!
//! # The "Forever Stack"
//!
//! The output is plain HTML, established CSS and a small vanilla script.
//! The binary has zero runtime dependencies. The generated site can be
//! dropped on any file server — no Node, no PHP, no database. If a browser
//! can render HTML, it can show the portfolio; if it cannot run the script,
//! every section is simply visible (the behavior degrades open, never
//! closed).

pub mod compose;
pub mod config;
pub mod motion;
pub mod output;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
