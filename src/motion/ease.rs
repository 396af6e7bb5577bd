//! Easing curves for reveal transitions.

use serde::{Deserialize, Serialize};

/// Easing applied to a transition's normalized progress.
///
/// `OutCubic` is the default for reveals: a fast start that settles gently,
/// close enough to the spring the original page used without modeling
/// oscillation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    OutQuad,
    InOutQuad,
    #[default]
    OutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }

    /// CSS `transition-timing-function` equivalent, injected into the
    /// shipped stylesheet.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::OutQuad => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Self::InOutQuad => "cubic-bezier(0.455, 0.03, 0.515, 0.955)",
            Self::OutCubic => "cubic-bezier(0.215, 0.61, 0.355, 1)",
        }
    }
}
