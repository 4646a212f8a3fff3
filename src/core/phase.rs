//! Turn phases.
//!
//! A turn always runs `Action → Buy → Cleanup`; cleanup is transient and
//! resolves into the next player's Action phase, so observed state only ever
//! rests in Action or Buy.

use serde::{Deserialize, Serialize};

/// The three stages of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Action cards may be played while actions remain.
    Action,
    /// Treasures are played and purchases made while buys remain.
    Buy,
    /// Hand and play area swept to discard, new hand drawn, turn handed off.
    Cleanup,
}

impl Phase {
    /// The phase that follows this one within a turn.
    ///
    /// Cleanup wraps to Action for the next player.
    #[must_use]
    pub fn next(self) -> Phase {
        match self {
            Phase::Action => Phase::Buy,
            Phase::Buy => Phase::Cleanup,
            Phase::Cleanup => Phase::Action,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Action => "action",
            Phase::Buy => "buy",
            Phase::Cleanup => "cleanup",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_cycle() {
        assert_eq!(Phase::Action.next(), Phase::Buy);
        assert_eq!(Phase::Buy.next(), Phase::Cleanup);
        assert_eq!(Phase::Cleanup.next(), Phase::Action);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Action.to_string(), "action");
        assert_eq!(Phase::Buy.to_string(), "buy");
        assert_eq!(Phase::Cleanup.to_string(), "cleanup");
    }
}
