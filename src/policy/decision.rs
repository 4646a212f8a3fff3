//! Decision policies for autonomous seats.
//!
//! A policy looks at the state and recommends one move. It never touches
//! the engine: the scheduler issues the command and feeds any rejection
//! back, so the policy can stay a pure ranking function over what it sees.

use std::cmp::Reverse;

use rustc_hash::FxHashSet;

use crate::cards::{catalog, CardTemplate, InstanceId, TemplateId};
use crate::core::phase::Phase;
use crate::core::player::PlayerId;
use crate::engine::state::MatchState;

/// What an autonomous seat should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Recommendation {
    PlayAction(InstanceId),
    PlayTreasure(InstanceId),
    Buy(TemplateId),
    /// Nothing worth doing; advance the phase.
    Pass,
}

/// A deterministic decision rule for one seat.
///
/// `decide` must be a pure function of the state, the seat, and the
/// rejection set: same inputs, same recommendation. The scheduler records
/// refused recommendations through `note_rejected` so they are not
/// repeated, and clears the set with `phase_reset` when the phase moves
/// on.
pub trait DecisionPolicy {
    /// Recommend the next move for `me`.
    fn decide(&self, state: &MatchState, me: PlayerId) -> Recommendation;

    /// Record that the engine refused `rec` during this phase.
    fn note_rejected(&mut self, rec: Recommendation);

    /// Forget recorded rejections.
    fn phase_reset(&mut self);
}

/// How strongly the policy wants to play an action card.
///
/// Card draw dominates, extra actions keep a chain going, buys and coins
/// are tiebreakers.
fn action_strength(template: &CardTemplate) -> u32 {
    100 * template.total_draw()
        + 10 * template.total_actions()
        + template.total_buys()
        + template.total_coins()
}

/// The built-in big-money-with-actions policy.
///
/// Purchases follow three tiers by turn number:
/// - Turns 1-3: silver, otherwise a cheap action
/// - Turns 4-7: gold, otherwise the strongest non-terminal action costing
///   up to 5
/// - Turn 8 on: victory cards, dearest first
///
/// In the action phase it plays the strongest action it holds. In the buy
/// phase it plays every treasure before deciding what to buy, so the
/// purchase sees the full coin total.
#[derive(Debug, Default)]
pub struct TieredPolicy {
    rejected: FxHashSet<Recommendation>,
}

impl TieredPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allowed(&self, rec: Recommendation) -> bool {
        !self.rejected.contains(&rec)
    }

    fn best_action_in_hand(&self, state: &MatchState, me: PlayerId) -> Option<InstanceId> {
        let catalog = state.catalog();
        state.players[me]
            .zones
            .hand()
            .iter()
            .filter_map(|&card| state.template_of(card).map(|t| (card, t)))
            .filter(|&(card, template)| {
                catalog.get_unchecked(template).kind.is_action_like()
                    && self.allowed(Recommendation::PlayAction(card))
            })
            .max_by_key(|&(card, template)| {
                let strength = action_strength(catalog.get_unchecked(template));
                (strength, Reverse(template), Reverse(card))
            })
            .map(|(card, _)| card)
    }

    fn next_treasure_in_hand(&self, state: &MatchState, me: PlayerId) -> Option<InstanceId> {
        let catalog = state.catalog();
        state.players[me]
            .zones
            .hand()
            .iter()
            .filter_map(|&card| state.template_of(card).map(|t| (card, t)))
            .filter(|&(card, template)| {
                catalog.get_unchecked(template).kind.is_treasure()
                    && self.allowed(Recommendation::PlayTreasure(card))
            })
            .min_by_key(|&(card, template)| (template, card))
            .map(|(card, _)| card)
    }

    fn preferred_purchase(&self, state: &MatchState, me: PlayerId) -> Option<TemplateId> {
        let shortlist: Vec<TemplateId> = if state.turn <= 3 {
            vec![
                catalog::SILVER,
                catalog::VILLAGE,
                catalog::SMITHY,
                catalog::MOAT,
            ]
        } else if state.turn <= 7 {
            let mut list = vec![catalog::GOLD];
            list.extend(strong_cheap_actions(state));
            list
        } else {
            vec![catalog::PROVINCE, catalog::DUCHY, catalog::ESTATE]
        };

        shortlist
            .into_iter()
            .find(|&pile| self.allowed(Recommendation::Buy(pile)) && affordable(state, me, pile))
    }
}

/// Non-terminal action piles costing up to 5, strongest first. Custom
/// cards qualify like any other action, as long as they grant an action
/// back.
fn strong_cheap_actions(state: &MatchState) -> Vec<TemplateId> {
    let mut actions: Vec<&CardTemplate> = state
        .catalog()
        .iter()
        .filter(|t| t.kind.is_action_like() && t.cost <= 5 && t.total_actions() >= 1)
        .collect();
    actions.sort_by_key(|t| (Reverse(action_strength(t)), t.id));
    actions.into_iter().map(|t| t.id).collect()
}

fn affordable(state: &MatchState, me: PlayerId, pile: TemplateId) -> bool {
    match state.supply.pile(pile) {
        Some(p) => !p.is_exhausted() && state.players[me].coins >= p.cost,
        None => false,
    }
}

impl DecisionPolicy for TieredPolicy {
    fn decide(&self, state: &MatchState, me: PlayerId) -> Recommendation {
        if state.is_ended() || state.current_player != me {
            return Recommendation::Pass;
        }
        match state.phase {
            Phase::Action => {
                if state.players[me].actions == 0 {
                    return Recommendation::Pass;
                }
                self.best_action_in_hand(state, me)
                    .map_or(Recommendation::Pass, Recommendation::PlayAction)
            }
            Phase::Buy => {
                if state.players[me].buys == 0 {
                    return Recommendation::Pass;
                }
                if let Some(card) = self.next_treasure_in_hand(state, me) {
                    return Recommendation::PlayTreasure(card);
                }
                self.preferred_purchase(state, me)
                    .map_or(Recommendation::Pass, Recommendation::Buy)
            }
            Phase::Cleanup => Recommendation::Pass,
        }
    }

    fn note_rejected(&mut self, rec: Recommendation) {
        self.rejected.insert(rec);
    }

    fn phase_reset(&mut self) {
        self.rejected.clear();
    }
}
