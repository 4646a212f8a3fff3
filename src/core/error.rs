//! Typed command errors.
//!
//! Every guard failure on the command surface maps to exactly one of these
//! kinds. All of them are recoverable: the caller (a UI or the autonomous
//! turn driver) gets the error back, the state is untouched, and the match
//! continues.

use thiserror::Error;

use super::phase::Phase;
use super::player::PlayerId;
use crate::cards::{InstanceId, TemplateId};

/// Why a command was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Command issued outside the phase that permits it.
    #[error("command requires the {required} phase but the match is in {actual}")]
    WrongPhase { required: Phase, actual: Phase },

    /// Command issued by a player who does not hold the turn.
    #[error("{player} does not hold the turn ({current} does)")]
    NotCurrentPlayer { player: PlayerId, current: PlayerId },

    /// Not enough actions, buys, or coins for the requested command.
    #[error("not enough {resource}: need {needed}, have {available}")]
    InsufficientResource {
        resource: ResourceKind,
        needed: u32,
        available: u32,
    },

    /// Referenced card id absent from the expected zone.
    #[error("{card} not found in {zone}")]
    CardNotFound { card: CardRef, zone: ZoneKind },

    /// Requested pile has zero remaining copies.
    #[error("supply pile {pile} is exhausted")]
    SupplyExhausted { pile: TemplateId },

    /// Any command issued after the match concluded.
    #[error("the match has already ended")]
    MatchAlreadyEnded,
}

/// The per-turn resources a command can run short of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Actions,
    Buys,
    Coins,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Actions => "actions",
            ResourceKind::Buys => "buys",
            ResourceKind::Coins => "coins",
        };
        write!(f, "{name}")
    }
}

/// A card reference as a command named it: a concrete instance for play
/// commands, a supply pile for buy commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardRef {
    Instance(InstanceId),
    Pile(TemplateId),
}

impl std::fmt::Display for CardRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardRef::Instance(id) => write!(f, "card {id}"),
            CardRef::Pile(id) => write!(f, "pile {id}"),
        }
    }
}

/// Where a command expected to find a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneKind {
    Deck,
    Hand,
    Discard,
    PlayArea,
    Supply,
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ZoneKind::Deck => "deck",
            ZoneKind::Hand => "hand",
            ZoneKind::Discard => "discard",
            ZoneKind::PlayArea => "play area",
            ZoneKind::Supply => "supply",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failure() {
        let err = CommandError::WrongPhase {
            required: Phase::Buy,
            actual: Phase::Action,
        };
        assert_eq!(
            err.to_string(),
            "command requires the buy phase but the match is in action"
        );

        let err = CommandError::InsufficientResource {
            resource: ResourceKind::Coins,
            needed: 5,
            available: 2,
        };
        assert_eq!(err.to_string(), "not enough coins: need 5, have 2");

        let err = CommandError::NotCurrentPlayer {
            player: PlayerId::new(1),
            current: PlayerId::new(0),
        };
        assert_eq!(err.to_string(), "P1 does not hold the turn (P0 does)");
    }

    #[test]
    fn test_card_not_found_display_distinguishes_refs() {
        let in_hand = CommandError::CardNotFound {
            card: CardRef::Instance(InstanceId::new(9)),
            zone: ZoneKind::Hand,
        };
        assert_eq!(in_hand.to_string(), "card #9 not found in hand");

        let in_supply = CommandError::CardNotFound {
            card: CardRef::Pile(TemplateId::new(3)),
            zone: ZoneKind::Supply,
        };
        assert_eq!(in_supply.to_string(), "pile T3 not found in supply");
    }
}
