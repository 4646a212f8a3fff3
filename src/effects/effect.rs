//! The closed effect vocabulary.
//!
//! Every card's behavior is an ordered list of these kinds, applied strictly
//! in declaration order; no effect may be skipped or reordered. Application
//! lives next door in `apply` so that matching stays exhaustive in one
//! place.

use serde::{Deserialize, Serialize};

/// One effect on a card template.
///
/// Magnitudes are fixed when the template is defined. Target scope is
/// implied by the kind: `Attack` hits every opponent, everything else acts
/// on the card's player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Draw N cards, reshuffling the discard into the deck as needed.
    Draw(u32),
    /// Add N coins to the player's turn counter.
    GainCoins(u32),
    /// Add N actions to the player's turn counter.
    GainActions(u32),
    /// Add N buys to the player's turn counter.
    GainBuys(u32),
    /// Gain a fresh copy of the best catalog card costing at most `max_cost`
    /// into the player's discard. Minted, never taken from a supply pile.
    GainCard { max_cost: u32 },
    /// Each opponent gains `curses` fresh Curse copies into their discard.
    Attack { curses: u32 },
    /// Externally authored behavior: the note is recorded in the match log
    /// and nothing else happens inside the engine.
    Custom { note: String },
}

impl Effect {
    /// Cards drawn by this effect (0 for non-draw kinds).
    #[must_use]
    pub fn draw_count(&self) -> u32 {
        match self {
            Effect::Draw(n) => *n,
            _ => 0,
        }
    }

    /// Coins granted by this effect (0 for non-coin kinds).
    #[must_use]
    pub fn coin_count(&self) -> u32 {
        match self {
            Effect::GainCoins(n) => *n,
            _ => 0,
        }
    }

    /// Actions granted by this effect (0 for non-action kinds).
    #[must_use]
    pub fn action_count(&self) -> u32 {
        match self {
            Effect::GainActions(n) => *n,
            _ => 0,
        }
    }

    /// Buys granted by this effect (0 for non-buy kinds).
    #[must_use]
    pub fn buy_count(&self) -> u32 {
        match self {
            Effect::GainBuys(n) => *n,
            _ => 0,
        }
    }

    /// The magnitude carried by this effect, for validation.
    ///
    /// `Custom` has no magnitude and reports 0.
    #[must_use]
    pub fn magnitude(&self) -> u32 {
        match self {
            Effect::Draw(n)
            | Effect::GainCoins(n)
            | Effect::GainActions(n)
            | Effect::GainBuys(n) => *n,
            Effect::GainCard { max_cost } => *max_cost,
            Effect::Attack { curses } => *curses,
            Effect::Custom { .. } => 0,
        }
    }
}
