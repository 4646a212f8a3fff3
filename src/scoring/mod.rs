//! End conditions, victory points, and match outcomes.
//!
//! ## Key Types
//!
//! - `EndReason`: Which supply trigger ended the match
//! - `MatchOutcome`: Winner, reason, and per-seat totals
//!
//! `check_end` is called by the engine after the two operations that can
//! change pile counts or hand the turn off: a purchase and cleanup.

pub mod outcome;

pub use outcome::{check_end, decide_outcome, player_vp, score, EndReason, MatchOutcome};
