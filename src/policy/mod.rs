//! Decision policies for autonomous seats.
//!
//! ## Key Types
//!
//! - `DecisionPolicy`: Pure ranking over match state, one move at a time
//! - `Recommendation`: The move a policy proposes
//! - `TieredPolicy`: The built-in big-money-with-actions rule

pub mod decision;

pub use decision::{DecisionPolicy, Recommendation, TieredPolicy};
