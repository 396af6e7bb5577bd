//! Periodic image rotation for the about-portrait crossfade.

use super::timer::Interval;

/// Rotation period between slides.
pub const ROTATION_PERIOD_MS: u64 = 3000;

/// Cycles an index over a fixed slide set on a repeating timer.
///
/// The timer is owned by the rotator: `start` creates it, `stop` (or drop)
/// releases it, and a stopped rotator's index can never change again. A
/// single-slide set never schedules a timer at all — there is nothing to
/// rotate to.
#[derive(Clone, Debug)]
pub struct Rotator {
    len: usize,
    index: usize,
    timer: Option<Interval>,
}

impl Rotator {
    /// A stopped rotator over `len` slides, showing slide 0.
    ///
    /// `len` must be at least 1.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "rotator needs at least one slide");
        Self {
            len,
            index: 0,
            timer: None,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Start the repeating timer. A no-op when already running or when
    /// there is only one slide.
    pub fn start(&mut self, now_ms: u64) {
        if self.timer.is_some() || self.len < 2 {
            return;
        }
        self.timer = Some(Interval::starting_at(now_ms, ROTATION_PERIOD_MS));
    }

    /// Release the timer. Safe on every exit path; idempotent.
    pub fn stop(&mut self) {
        self.timer = None;
    }

    /// Deliver due ticks: each advances the index by one, modulo the slide
    /// count. Returns the number of ticks applied.
    pub fn poll(&mut self, now_ms: u64) -> u64 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let ticks = timer.ticks_due(now_ms);
        if ticks > 0 {
            self.index = (self.index + (ticks as usize % self.len)) % self.len;
        }
        ticks
    }

    /// Jump straight to slide `k` and re-phase the timer so the next
    /// automatic advance happens a full period after the jump. Every
    /// slide's opacity flag is consistent immediately (exactly one active).
    pub fn jump_to(&mut self, k: usize, now_ms: u64) {
        assert!(k < self.len, "slide index out of range");
        self.index = k;
        if let Some(timer) = self.timer.as_mut() {
            timer.rephase(now_ms);
        }
    }

    /// Opacity flag for one slide: only the active slide is opaque. The
    /// renderer maps this to the crossfade classes.
    pub fn is_active(&self, slide: usize) -> bool {
        slide == self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_k_mod_n_after_k_ticks() {
        let mut r = Rotator::new(2);
        r.start(0);
        for k in 1..=7u64 {
            r.poll(k * ROTATION_PERIOD_MS);
            assert_eq!(r.index(), (k % 2) as usize, "after tick {k}");
        }
    }

    #[test]
    fn catch_up_applies_missed_ticks_at_once() {
        let mut r = Rotator::new(3);
        r.start(0);
        // 5 periods late: 5 mod 3 == 2
        assert_eq!(r.poll(5 * ROTATION_PERIOD_MS), 5);
        assert_eq!(r.index(), 2);
    }

    #[test]
    fn stop_leaves_no_pending_timer() {
        let mut r = Rotator::new(2);
        r.start(0);
        r.poll(ROTATION_PERIOD_MS);
        assert_eq!(r.index(), 1);
        r.stop();
        assert!(!r.is_running());
        // A fake clock far in the future: no further state change
        assert_eq!(r.poll(100 * ROTATION_PERIOD_MS), 0);
        assert_eq!(r.index(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut r = Rotator::new(2);
        r.start(0);
        r.stop();
        r.stop();
        assert!(!r.is_running());
    }

    #[test]
    fn single_slide_never_schedules() {
        let mut r = Rotator::new(1);
        r.start(0);
        assert!(!r.is_running());
        assert_eq!(r.poll(10 * ROTATION_PERIOD_MS), 0);
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn jump_resets_slide_flags_and_rephases() {
        let mut r = Rotator::new(2);
        r.start(0);
        r.poll(ROTATION_PERIOD_MS);
        assert_eq!(r.index(), 1);

        // Jump mid-cycle, half a period before the next tick
        let jump_at = ROTATION_PERIOD_MS + ROTATION_PERIOD_MS / 2;
        r.jump_to(0, jump_at);
        assert_eq!(r.index(), 0);
        assert!(r.is_active(0));
        assert!(!r.is_active(1));

        // The old tick boundary passes without advancing
        assert_eq!(r.poll(2 * ROTATION_PERIOD_MS), 0);
        assert_eq!(r.index(), 0);
        // A full period after the jump, rotation resumes
        assert_eq!(r.poll(jump_at + ROTATION_PERIOD_MS), 1);
        assert_eq!(r.index(), 1);
    }

    #[test]
    fn exactly_one_slide_active() {
        let mut r = Rotator::new(3);
        r.start(0);
        for k in 0..6u64 {
            r.poll(k * ROTATION_PERIOD_MS);
            let active: Vec<usize> = (0..3).filter(|&s| r.is_active(s)).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0], r.index());
        }
    }

    #[test]
    #[should_panic(expected = "slide index out of range")]
    fn jump_out_of_range_panics() {
        let mut r = Rotator::new(2);
        r.jump_to(2, 0);
    }
}
