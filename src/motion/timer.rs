//! Value-owned timer handles.
//!
//! A timer lives inside the component that scheduled it and dies with it.
//! There is no global timer registry: releasing a timer is dropping (or
//! `take()`ing) the handle, so a torn-down component structurally cannot
//! receive a late tick.

/// A repeating timer.
///
/// The owner polls with the current time; [`Interval::ticks_due`] returns
/// how many periods have elapsed since the last poll and advances the
/// internal deadline past `now`. Polling late therefore delivers the missed
/// ticks (catch-up) rather than dropping them.
#[derive(Debug, Clone)]
pub struct Interval {
    period_ms: u64,
    next_due_ms: u64,
}

impl Interval {
    /// Schedule a repeating timer whose first fire is `start_ms + period_ms`.
    ///
    /// `period_ms` must be nonzero; callers clamp degenerate periods up to
    /// 1 ms (see the counter's cadence computation).
    pub fn starting_at(start_ms: u64, period_ms: u64) -> Self {
        debug_assert!(period_ms > 0, "Interval period must be nonzero");
        Self {
            period_ms,
            next_due_ms: start_ms + period_ms,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Number of ticks due at `now_ms`, consuming them.
    pub fn ticks_due(&mut self, now_ms: u64) -> u64 {
        if now_ms < self.next_due_ms {
            return 0;
        }
        let fires = 1 + (now_ms - self.next_due_ms) / self.period_ms;
        self.next_due_ms += fires * self.period_ms;
        fires
    }

    /// Restart the cadence so the next fire is `now_ms + period`.
    ///
    /// Used by manual overrides (the rotator's jump) so a tick does not land
    /// immediately after an explicit state change.
    pub fn rephase(&mut self, now_ms: u64) {
        self.next_due_ms = now_ms + self.period_ms;
    }
}

/// A one-shot deadline.
#[derive(Debug, Clone)]
pub struct Deadline {
    due_ms: u64,
    fired: bool,
}

impl Deadline {
    pub fn at(due_ms: u64) -> Self {
        Self {
            due_ms,
            fired: false,
        }
    }

    /// True exactly once, the first time it is polled at or past the due time.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        if self.fired || now_ms < self.due_ms {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn due_ms(&self) -> u64 {
        self.due_ms
    }
}
