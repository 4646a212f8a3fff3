//! End conditions and final scoring.
//!
//! The two end triggers are both functions of the supply alone: the top
//! victory pile running out, or any three piles running out. They are
//! checked after a purchase and after cleanup, the only operations that
//! change pile counts or hand the turn off.
//!
//! Scores count victory points over every card a player owns, wherever it
//! sits. The deck is not privileged over the hand, discard, or play area.

use serde::{Deserialize, Serialize};

use crate::cards::{CardKind, TemplateId};
use crate::core::player::{PlayerId, PlayerMap};
use crate::engine::state::MatchState;
use crate::supply::SupplyPile;

/// Why the match ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The highest-cost victory pile ran out.
    TopVictoryPileExhausted { pile: TemplateId },
    /// At least three piles ran out; `piles` lists every empty one.
    ThreePilesExhausted { piles: Vec<TemplateId> },
}

/// The final result of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: PlayerId,
    pub reason: EndReason,
    /// Final victory point total per seat.
    pub totals: PlayerMap<i32>,
}

/// Check whether an end condition holds.
///
/// The top-victory-pile trigger wins when both hold at once, so the reason
/// in the outcome is stable however the final purchase emptied the supply.
#[must_use]
pub fn check_end(state: &MatchState) -> Option<EndReason> {
    let top_victory = state
        .catalog()
        .iter()
        .filter(|t| t.kind == CardKind::Victory && state.supply.contains(t.id))
        .max_by_key(|t| (t.cost, t.id));

    if let Some(top) = top_victory {
        if state
            .supply
            .pile(top.id)
            .is_some_and(SupplyPile::is_exhausted)
        {
            return Some(EndReason::TopVictoryPileExhausted { pile: top.id });
        }
    }

    let exhausted = state.supply.exhausted_piles();
    if exhausted.len() >= 3 {
        return Some(EndReason::ThreePilesExhausted { piles: exhausted });
    }

    None
}

/// Victory points for one player, summed across all four zones.
#[must_use]
pub fn player_vp(state: &MatchState, player: PlayerId) -> i32 {
    state.players[player]
        .zones
        .all_cards()
        .filter_map(|card| state.template_of(card))
        .map(|template| state.catalog().get_unchecked(template).victory_points())
        .sum()
}

/// Victory point totals for every seat.
#[must_use]
pub fn score(state: &MatchState) -> PlayerMap<i32> {
    PlayerMap::new(state.player_count(), |player| player_vp(state, player))
}

/// Settle the match: score every seat and pick the winner.
///
/// Ties go to the earliest seat.
#[must_use]
pub fn decide_outcome(state: &MatchState, reason: EndReason) -> MatchOutcome {
    let totals = score(state);
    let mut winner = PlayerId::new(0);
    for (player, &total) in totals.iter() {
        if total > totals[winner] {
            winner = player;
        }
    }
    MatchOutcome {
        winner,
        reason,
        totals,
    }
}
