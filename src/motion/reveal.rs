//! One-shot reveal transitions.
//!
//! A reveal is a pair of style variants — hidden and visible — plus a
//! duration, delay and easing. The [`RevealDriver`] holds the current
//! stage and answers "what style is this element showing at time t" as a
//! pure interpolation; nothing here touches the document. The named
//! constructors on [`Variants`] are the motion vocabulary of the page
//! (hero fade, card rise, menu slide, ...), and render injects the same
//! numbers into the shipped stylesheet.

use serde::{Deserialize, Serialize};

use super::ease::Ease;

/// Linear interpolation between two values of a type.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// An element's animatable style: opacity, translation offset (CSS pixels)
/// and scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleDelta {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl StyleDelta {
    /// The resting style of a fully revealed element.
    pub const NEUTRAL: StyleDelta = StyleDelta {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// CSS `transform` value for this delta.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            trim_float(self.x),
            trim_float(self.y),
            trim_float(self.scale)
        )
    }
}

/// Format a float without a trailing `.0` so the CSS reads like hand-written
/// CSS (`20px`, not `20.0px`).
fn trim_float(v: f64) -> String {
    if v == v.trunc() {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

impl Lerp for StyleDelta {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        StyleDelta {
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            x: f64::lerp(&a.x, &b.x, t),
            y: f64::lerp(&a.y, &b.y, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
        }
    }
}

/// Two-state variant map plus transition parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variants {
    pub hidden: StyleDelta,
    pub visible: StyleDelta,
    /// Wait before the transition starts, from the moment the stage flips.
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub ease: Ease,
}

impl Variants {
    fn from_hidden(hidden: StyleDelta, delay_ms: u64, duration_ms: u64) -> Self {
        Self {
            hidden,
            visible: StyleDelta::NEUTRAL,
            delay_ms,
            duration_ms,
            ease: Ease::OutCubic,
        }
    }

    /// Hero section: plain fade, 800 ms.
    pub fn fade_in() -> Self {
        Self::from_hidden(
            StyleDelta {
                opacity: 0.0,
                ..StyleDelta::NEUTRAL
            },
            0,
            800,
        )
    }

    /// Hero intro column: slides in from 30 px left, 800 ms after a 200 ms
    /// delay.
    pub fn slide_in_left() -> Self {
        Self::from_hidden(
            StyleDelta {
                opacity: 0.0,
                x: -30.0,
                ..StyleDelta::NEUTRAL
            },
            200,
            800,
        )
    }

    /// Hero portrait: scales up from 0.8, 800 ms after a 400 ms delay.
    pub fn scale_in() -> Self {
        Self::from_hidden(
            StyleDelta {
                opacity: 0.0,
                scale: 0.8,
                ..StyleDelta::NEUTRAL
            },
            400,
            800,
        )
    }

    /// Section headers: rise 20 px while fading, 600 ms.
    pub fn fade_in_up() -> Self {
        Self::from_hidden(
            StyleDelta {
                opacity: 0.0,
                y: 20.0,
                ..StyleDelta::NEUTRAL
            },
            0,
            600,
        )
    }

    /// Project cards: rise 30 px, 600 ms, staggered 200 ms apart after a
    /// 200 ms base delay (card 0 at 200 ms, card 1 at 400 ms, ...).
    pub fn card_rise(index: usize) -> Self {
        Self::from_hidden(
            StyleDelta {
                opacity: 0.0,
                y: 30.0,
                ..StyleDelta::NEUTRAL
            },
            200,
            600,
        )
        .with_stagger(index, 200)
    }

    /// Navigation bar: drops in from 20 px above, 500 ms.
    pub fn nav_drop() -> Self {
        Self::from_hidden(
            StyleDelta {
                opacity: 0.0,
                y: -20.0,
                ..StyleDelta::NEUTRAL
            },
            0,
            500,
        )
    }

    /// Mobile menu items: slide in from 20 px left, 300 ms, staggered
    /// 100 ms per index.
    pub fn menu_item(index: usize) -> Self {
        Self::from_hidden(
            StyleDelta {
                opacity: 0.0,
                x: -20.0,
                ..StyleDelta::NEUTRAL
            },
            0,
            300,
        )
        .with_stagger(index, 100)
    }

    /// Offset this variant's delay for the `index`-th child of a staggered
    /// group: child transitions start `index * step_ms` apart.
    pub fn with_stagger(mut self, index: usize, step_ms: u64) -> Self {
        self.delay_ms += index as u64 * step_ms;
        self
    }

    /// The resting style for a stage.
    pub fn target(&self, stage: Stage) -> StyleDelta {
        match stage {
            Stage::Hidden => self.hidden,
            Stage::Visible => self.visible,
        }
    }
}

/// The two declarative stages of a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Hidden,
    Visible,
}

/// Drives one element's reveal: current stage plus the in-flight
/// transition, sampled as a pure function of time.
#[derive(Clone, Debug)]
pub struct RevealDriver {
    variants: Variants,
    stage: Stage,
    /// Style at the moment the current transition started. Retargeting
    /// mid-flight samples the interpolated value into here, so a reveal
    /// never snaps.
    from: StyleDelta,
    started_at_ms: Option<u64>,
}

impl RevealDriver {
    /// A driver resting in the hidden stage.
    pub fn new(variants: Variants) -> Self {
        Self {
            variants,
            stage: Stage::Hidden,
            from: variants.hidden,
            started_at_ms: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn variants(&self) -> &Variants {
        &self.variants
    }

    /// Flip the stage from a visibility signal. A no-op when the stage
    /// already matches; otherwise a transition starts at `now_ms` from the
    /// element's current interpolated style.
    pub fn set_in_view(&mut self, in_view: bool, now_ms: u64) {
        let desired = if in_view { Stage::Visible } else { Stage::Hidden };
        if desired == self.stage {
            return;
        }
        self.from = self.style_at(now_ms);
        self.stage = desired;
        self.started_at_ms = Some(now_ms);
    }

    /// The instantaneous style at `now_ms`. Pure: no side effects, safe to
    /// sample at any rate.
    pub fn style_at(&self, now_ms: u64) -> StyleDelta {
        let Some(started) = self.started_at_ms else {
            return self.variants.target(self.stage);
        };
        let target = self.variants.target(self.stage);
        let elapsed = now_ms.saturating_sub(started);
        if elapsed < self.variants.delay_ms {
            return self.from;
        }
        if self.variants.duration_ms == 0 {
            return target;
        }
        let t = (elapsed - self.variants.delay_ms) as f64 / self.variants.duration_ms as f64;
        StyleDelta::lerp(&self.from, &target, self.variants.ease.apply(t))
    }

    /// True once the current transition (including its delay) has run to
    /// completion, or when no transition was ever started.
    pub fn is_settled(&self, now_ms: u64) -> bool {
        match self.started_at_ms {
            None => true,
            Some(started) => {
                now_ms.saturating_sub(started) >= self.variants.delay_ms + self.variants.duration_ms
            }
        }
    }
}
