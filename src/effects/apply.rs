//! Applying card effects to match state.
//!
//! Effects run in the order the card declares them, each to completion
//! before the next. None of them touches the supply: effects that grant
//! cards mint fresh instances, so pile counts stay a pure record of
//! purchases.

use std::cmp::Reverse;

use crate::cards::catalog;
use crate::core::log::LogEvent;
use crate::core::player::PlayerId;
use crate::engine::state::MatchState;

use super::Effect;

/// Apply a card's effects in declared order.
pub fn apply_effects(state: &mut MatchState, actor: PlayerId, effects: &[Effect]) {
    for effect in effects {
        apply_effect(state, actor, effect);
    }
}

/// Apply one effect for `actor`.
pub fn apply_effect(state: &mut MatchState, actor: PlayerId, effect: &Effect) {
    match effect {
        Effect::Draw(n) => {
            state.draw_cards(actor, *n);
        }
        Effect::GainCoins(n) => {
            let player = &mut state.players[actor];
            player.coins = player.coins.saturating_add(*n);
        }
        Effect::GainActions(n) => {
            let player = &mut state.players[actor];
            player.actions = player.actions.saturating_add(*n);
        }
        Effect::GainBuys(n) => {
            let player = &mut state.players[actor];
            player.buys = player.buys.saturating_add(*n);
        }
        Effect::GainCard { max_cost } => gain_best_card(state, actor, *max_cost),
        Effect::Attack { curses } => deal_curses(state, actor, *curses),
        Effect::Custom { note } => {
            state.push_log(actor, LogEvent::CustomNote { note: note.clone() });
        }
    }
}

/// Mint the most expensive catalog card costing at most `max_cost` into
/// `actor`'s discard. Cost ties break toward the lower template id, so the
/// choice is stable run to run.
fn gain_best_card(state: &mut MatchState, actor: PlayerId, max_cost: u32) {
    let chosen = state
        .catalog()
        .iter()
        .filter(|t| t.cost <= max_cost)
        .max_by_key(|t| (t.cost, Reverse(t.id)))
        .map(|t| t.id);

    if let Some(template) = chosen {
        state.mint_to_discard(template, actor);
        state.push_log(actor, LogEvent::CardGained { card: template });
    }
}

/// Mint `curses` curse cards into every opponent's discard, in seat order.
fn deal_curses(state: &mut MatchState, actor: PlayerId, curses: u32) {
    // A catalog without a curse template turns the attack into a no-op.
    if !state.catalog().contains(catalog::CURSE) {
        return;
    }
    let victims: Vec<PlayerId> = PlayerId::all(state.player_count())
        .filter(|&p| p != actor)
        .collect();
    for victim in victims {
        for _ in 0..curses {
            state.mint_to_discard(catalog::CURSE, victim);
            state.push_log(victim, LogEvent::CardGained { card: catalog::CURSE });
        }
    }
}
