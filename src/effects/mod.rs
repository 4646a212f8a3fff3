//! Card effects and their application.
//!
//! Effects are the building blocks of card behavior:
//! - `Effect`: Enumeration of the closed set of effect kinds
//! - `apply_effects`: Executes a card's effects against match state
//!
//! ## Design Notes
//!
//! The effect set is intentionally closed: every card, custom ones
//! included, composes these seven kinds. Effects never read or write the
//! supply; card-granting effects mint fresh instances instead, which keeps
//! pile counts a pure record of purchases and makes the end triggers easy
//! to reason about.

mod apply;
mod effect;

pub use apply::{apply_effect, apply_effects};
pub use effect::Effect;
