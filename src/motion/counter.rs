//! Count-up animation for skill levels.

use super::timer::Interval;

/// Total duration of a count-up, regardless of target.
pub const COUNT_DURATION_MS: u64 = 2000;

/// Increments a displayed integer from 0 to `target` once its section
/// first becomes visible.
///
/// The cadence is `floor(2000 / target)` milliseconds per increment
/// (clamped to 1 ms for targets beyond 2000), so every counter lands on
/// its target after exactly `target` ticks in roughly two seconds. A zero
/// target is finished on arrival — no timer is ever scheduled, and no
/// division happens.
#[derive(Clone, Debug)]
pub struct CounterAnimator {
    target: u64,
    value: u64,
    suffix: &'static str,
    started: bool,
    finished: bool,
    timer: Option<Interval>,
}

impl CounterAnimator {
    pub fn new(target: u64) -> Self {
        Self::with_suffix(target, "")
    }

    /// A counter whose display carries a fixed suffix, e.g. `%`.
    pub fn with_suffix(target: u64, suffix: &'static str) -> Self {
        Self {
            target,
            value: 0,
            suffix,
            started: false,
            finished: target == 0,
            timer: None,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The displayed string: current value plus the fixed suffix.
    pub fn display(&self) -> String {
        format!("{}{}", self.value, self.suffix)
    }

    /// Feed the visibility signal. The first `true` starts the count; any
    /// signal after that — including losing and regaining visibility — is
    /// ignored, so the animation runs at most once.
    pub fn set_in_view(&mut self, in_view: bool, now_ms: u64) {
        if !in_view || self.started || self.finished {
            return;
        }
        self.started = true;
        let period = (COUNT_DURATION_MS / self.target).max(1);
        self.timer = Some(Interval::starting_at(now_ms, period));
    }

    /// Deliver due increments. The value saturates at `target`; reaching it
    /// releases the timer.
    pub fn poll(&mut self, now_ms: u64) {
        let Some(timer) = self.timer.as_mut() else {
            return;
        };
        let ticks = timer.ticks_due(now_ms);
        self.value = (self.value + ticks).min(self.target);
        if self.value == self.target {
            self.finished = true;
            self.timer = None;
        }
    }

    /// Release the timer without finishing. Used on teardown.
    pub fn stop(&mut self) {
        self.timer = None;
    }
}
