//! The behavior core: a deterministic model of everything the page does
//! client-side.
//!
//! Every primitive here is an explicit state machine over a millisecond
//! clock that the *caller* owns and advances — there are no threads, no
//! wall-clock reads, and no shared mutable state. [`page::PageRuntime`]
//! composes the primitives into a headless model of the mounted page and is
//! what the integration tests drive.
//!
//! # Time and scheduling
//!
//! Timestamps are plain `u64` milliseconds since the page mounted. Timers
//! are value-owned handles ([`timer::Interval`], [`timer::Deadline`])
//! living inside the component that scheduled them: created by `start()`,
//! released by `stop()` or drop. A component that has been stopped holds no
//! handle, so nothing can fire against it — cancellation is structural, not
//! a flag. Due work is delivered when the owner polls with the current
//! time; polling late delivers the missed ticks in order (catch-up), never
//! drops them.
//!
//! # Ordering
//!
//! Within one page, effects run in declaration order: visibility trackers
//! update before any timer ticks are delivered, matching the mount
//! lifecycle (observation attaches before child timers start).
//!
//! # Degradation
//!
//! Everything in this tree is cosmetic. When a capability is missing —
//! no intersection observation, a broken image, no mail client — the model
//! fails open: content visible, placeholder shown, a human-readable message
//! on the form. Nothing here has a fatal error path.

pub mod counter;
pub mod ease;
pub mod fallback;
pub mod form;
pub mod page;
pub mod reveal;
pub mod rotator;
pub mod timer;
pub mod visibility;
