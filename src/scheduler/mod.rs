//! Turn scheduling for autonomous seats.
//!
//! ## Key Types
//!
//! - `TurnScheduler`: Resumable step machine pairing a policy with an
//!   engine
//! - `StepOutcome`: What one step did and whether the turn continues
//!
//! The scheduler holds no state beyond its policy and a pacing hint, so a
//! UI can interleave human commands and bot steps on one thread.

pub mod driver;

pub use driver::{StepOutcome, TurnScheduler};
