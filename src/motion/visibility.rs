//! Viewport visibility tracking.
//!
//! Each tracker owns its observation of one vertical region: attached when
//! the element joins the page, detached when it leaves, nothing shared.
//! Visibility is a fraction of the region's height inside the viewport,
//! compared against a threshold. With `trigger_once` set (the page's
//! default), the first sighting latches — scrolling away never un-reveals
//! a section.
//!
//! When the observation mechanism is unavailable the tracker reports
//! always-visible. This is cosmetic machinery; it fails open.

use serde::{Deserialize, Serialize};

/// A vertical extent in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Height of the overlap between two spans. Zero when disjoint.
    pub fn overlap(&self, other: &Span) -> f64 {
        let top = self.top.max(other.top);
        let bottom = self.bottom().min(other.bottom());
        (bottom - top).max(0.0)
    }
}

/// Observation configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObserveOptions {
    /// Fraction of the region's height that must be inside the viewport,
    /// in `[0, 1]`. A threshold of 0 fires on any overlap at all.
    pub threshold: f64,
    /// Latch on the first sighting; later out-of-view updates are ignored.
    pub trigger_once: bool,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        // The page's sections observe with a shallow threshold and latch.
        Self {
            threshold: 0.1,
            trigger_once: true,
        }
    }
}

/// Tracks whether one region is inside the viewport.
///
/// The handle is the value itself: `attach` begins observation, `detach`
/// ends it, and a detached (or dropped) tracker can never change state
/// again. Symmetric acquire/release is the contract — the page runtime
/// detaches every tracker on teardown.
#[derive(Clone, Debug)]
pub struct VisibilityTracker {
    options: ObserveOptions,
    target: Option<Span>,
    supported: bool,
    in_view: bool,
    has_been_visible: bool,
}

impl VisibilityTracker {
    /// A detached tracker. Not visible until attached and updated.
    pub fn new(options: ObserveOptions) -> Self {
        Self {
            options,
            target: None,
            supported: true,
            in_view: false,
            has_been_visible: false,
        }
    }

    /// A tracker for an environment without intersection observation:
    /// permanently visible (fail open).
    pub fn unsupported(options: ObserveOptions) -> Self {
        Self {
            options,
            target: None,
            supported: false,
            in_view: true,
            has_been_visible: true,
        }
    }

    /// Begin observing a region.
    pub fn attach(&mut self, target: Span) {
        if !self.supported {
            return;
        }
        self.target = Some(target);
    }

    /// Stop observing. Idempotent; all later `update` calls are no-ops, so
    /// a torn-down element cannot receive a late visibility flip.
    pub fn detach(&mut self) {
        self.target = None;
    }

    pub fn is_attached(&self) -> bool {
        self.target.is_some()
    }

    /// Recompute visibility against a viewport span. Returns the `in_view`
    /// signal after the update.
    pub fn update(&mut self, viewport: Span) -> bool {
        if !self.supported {
            return true;
        }
        let Some(target) = self.target else {
            return self.in_view;
        };

        let fraction = fraction_visible(&target, &viewport);
        let now_visible = fraction > 0.0 && fraction >= effective_threshold(&self.options);

        if now_visible {
            self.in_view = true;
            self.has_been_visible = true;
        } else if !self.options.trigger_once {
            self.in_view = false;
        }
        // trigger_once: a latched tracker ignores out-of-view updates
        self.in_view
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn has_been_visible(&self) -> bool {
        self.has_been_visible
    }
}

/// Fraction of `target`'s height inside `viewport`. A zero-height target
/// counts as fully visible when its top edge is inside the viewport.
fn fraction_visible(target: &Span, viewport: &Span) -> f64 {
    if target.height <= 0.0 {
        return if target.top >= viewport.top && target.top <= viewport.bottom() {
            1.0
        } else {
            0.0
        };
    }
    target.overlap(viewport) / target.height
}

/// A threshold of exactly 0 means "any overlap"; the strictly-positive
/// fraction check in `update` carries that case.
fn effective_threshold(options: &ObserveOptions) -> f64 {
    options.threshold.clamp(0.0, 1.0)
}
