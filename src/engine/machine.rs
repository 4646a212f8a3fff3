//! The match engine: setup, command validation, and execution.
//!
//! ## Commands
//!
//! Four commands mutate a match, all issued on behalf of a player:
//! - `play_action_card`: Action phase, costs one action
//! - `play_treasure_card`: Buy phase, free
//! - `buy_card`: Buy phase, costs one buy and the pile's coin cost
//! - `advance_phase`: moves Action to Buy, or Buy through cleanup into the
//!   next player's turn
//!
//! Every command validates completely before mutating anything, so a
//! rejected command leaves the match byte-for-byte unchanged. Guards run
//! in a fixed order: match over, then turn ownership, then phase, then
//! resources, then the card itself. After each successful command the
//! engine captures one snapshot and broadcasts it to observers.
//!
//! ## End conditions
//!
//! Checked after a purchase and after cleanup. Once one fires the outcome
//! is settled and every further command is rejected.

use tracing::debug;

use crate::cards::{catalog, Catalog, InstanceId, TemplateId};
use crate::core::error::{CardRef, CommandError, ResourceKind, ZoneKind};
use crate::core::log::LogEvent;
use crate::core::phase::Phase;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::MatchRng;
use crate::effects::apply_effects;
use crate::scoring::{check_end, decide_outcome};
use crate::supply::{admit_custom_cards, CustomCardDef, Supply};

use super::observer::{MatchObserver, ObserverRegistry};
use super::snapshot::Snapshot;
use super::state::{Controller, MatchState, PlayerState};

const STARTING_COPPERS: u32 = 7;
const STARTING_ESTATES: u32 = 3;
const HAND_SIZE: u32 = 5;

/// One seat in the match to be.
#[derive(Clone, Debug)]
pub struct PlayerSpec {
    pub name: String,
    pub controller: Controller,
}

impl PlayerSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, controller: Controller) -> Self {
        Self {
            name: name.into(),
            controller,
        }
    }
}

/// Everything needed to start a match.
#[derive(Clone, Debug, Default)]
pub struct MatchSetup {
    players: Vec<PlayerSpec>,
    custom_cards: Vec<CustomCardDef>,
    seed: u64,
}

impl MatchSetup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a seat. Seats become player ids in the order added.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>, controller: Controller) -> Self {
        self.players.push(PlayerSpec::new(name, controller));
        self
    }

    /// Submit a custom card for validation at start.
    #[must_use]
    pub fn custom_card(mut self, def: CustomCardDef) -> Self {
        self.custom_cards.push(def);
        self
    }

    /// Seed for the match RNG. The same setup and seed replays identically.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A running match.
pub struct MatchEngine {
    state: MatchState,
    observers: ObserverRegistry,
}

impl MatchEngine {
    /// Start a match: admit custom cards, build the supply, deal starting
    /// decks of 7 copper and 3 estates, shuffle, and draw opening hands.
    #[must_use]
    pub fn start(setup: MatchSetup) -> Self {
        let player_count = setup.players.len();
        assert!(
            (2..=4).contains(&player_count),
            "Player count must be 2-4"
        );

        let mut catalog = Catalog::base_set();
        let admitted = admit_custom_cards(setup.custom_cards, &mut catalog);
        let supply = Supply::standard(&catalog, player_count as u8);
        let rng = MatchRng::new(setup.seed);

        let players = PlayerMap::new(player_count, |id| {
            let spec = &setup.players[id.index()];
            PlayerState::new(id, spec.name.clone(), spec.controller)
        });

        let mut state = MatchState::new(players, catalog, supply, rng);

        for player in PlayerId::all(player_count) {
            for _ in 0..STARTING_COPPERS {
                let card = state.mint_instance(catalog::COPPER, player);
                state.players[player].zones.place_on_deck(card);
            }
            for _ in 0..STARTING_ESTATES {
                let card = state.mint_instance(catalog::ESTATE, player);
                state.players[player].zones.place_on_deck(card);
            }
            state.shuffle_deck(player);
            state.draw_cards(player, HAND_SIZE);
        }

        state.push_log(
            PlayerId::new(0),
            LogEvent::MatchStarted {
                players: player_count as u8,
            },
        );
        debug!(
            players = player_count,
            seed = state.rng.seed(),
            custom_cards = admitted.len(),
            "Match started"
        );

        Self {
            state,
            observers: ObserverRegistry::new(),
        }
    }

    // === Commands ===

    /// Play an action (or custom) card from hand during the action phase.
    pub fn play_action_card(
        &mut self,
        player: PlayerId,
        card: InstanceId,
    ) -> Result<(), CommandError> {
        Self::trace_rejection(player, self.try_play_action_card(player, card))
    }

    fn try_play_action_card(
        &mut self,
        player: PlayerId,
        card: InstanceId,
    ) -> Result<(), CommandError> {
        self.guard_turn(player)?;
        self.guard_phase(Phase::Action)?;
        let actions = self.state.players[player].actions;
        if actions == 0 {
            return Err(CommandError::InsufficientResource {
                resource: ResourceKind::Actions,
                needed: 1,
                available: 0,
            });
        }
        let template = self.card_in_hand(player, card)?;
        if !self.state.catalog().get_unchecked(template).kind.is_action_like() {
            return Err(CommandError::CardNotFound {
                card: CardRef::Instance(card),
                zone: ZoneKind::Hand,
            });
        }

        self.state.players[player].actions -= 1;
        let moved = self.state.players[player].zones.move_to_play(card);
        debug_assert!(moved);
        self.state
            .push_log(player, LogEvent::ActionPlayed { card: template });

        let effects = self.state.catalog().get_unchecked(template).effects.clone();
        apply_effects(&mut self.state, player, &effects);

        debug!(%player, card = %template, "Action played");
        self.finish_command();
        Ok(())
    }

    /// Play a treasure from hand during the buy phase, banking its coins.
    pub fn play_treasure_card(
        &mut self,
        player: PlayerId,
        card: InstanceId,
    ) -> Result<(), CommandError> {
        Self::trace_rejection(player, self.try_play_treasure_card(player, card))
    }

    fn try_play_treasure_card(
        &mut self,
        player: PlayerId,
        card: InstanceId,
    ) -> Result<(), CommandError> {
        self.guard_turn(player)?;
        self.guard_phase(Phase::Buy)?;
        let template = self.card_in_hand(player, card)?;
        if !self.state.catalog().get_unchecked(template).kind.is_treasure() {
            return Err(CommandError::CardNotFound {
                card: CardRef::Instance(card),
                zone: ZoneKind::Hand,
            });
        }

        let moved = self.state.players[player].zones.move_to_play(card);
        debug_assert!(moved);
        let effects = self.state.catalog().get_unchecked(template).effects.clone();
        apply_effects(&mut self.state, player, &effects);

        let coins_after = self.state.players[player].coins;
        self.state.push_log(
            player,
            LogEvent::TreasurePlayed {
                card: template,
                coins_after,
            },
        );

        debug!(%player, card = %template, coins_after, "Treasure played");
        self.finish_command();
        Ok(())
    }

    /// Buy a card from a supply pile during the buy phase.
    ///
    /// The sole operation that changes pile counts. The bought copy is
    /// minted into the buyer's discard.
    pub fn buy_card(&mut self, player: PlayerId, pile: TemplateId) -> Result<(), CommandError> {
        Self::trace_rejection(player, self.try_buy_card(player, pile))
    }

    fn try_buy_card(&mut self, player: PlayerId, pile: TemplateId) -> Result<(), CommandError> {
        self.guard_turn(player)?;
        self.guard_phase(Phase::Buy)?;
        let buys = self.state.players[player].buys;
        if buys == 0 {
            return Err(CommandError::InsufficientResource {
                resource: ResourceKind::Buys,
                needed: 1,
                available: 0,
            });
        }
        let (cost, remaining) = match self.state.supply.pile(pile) {
            None => {
                return Err(CommandError::CardNotFound {
                    card: CardRef::Pile(pile),
                    zone: ZoneKind::Supply,
                })
            }
            Some(p) => (p.cost, p.remaining()),
        };
        if remaining == 0 {
            return Err(CommandError::SupplyExhausted { pile });
        }
        let coins = self.state.players[player].coins;
        if coins < cost {
            return Err(CommandError::InsufficientResource {
                resource: ResourceKind::Coins,
                needed: cost,
                available: coins,
            });
        }

        self.state.players[player].buys -= 1;
        self.state.players[player].coins -= cost;
        self.state.supply.deduct_for_purchase(pile);
        self.state.mint_to_discard(pile, player);
        self.state
            .push_log(player, LogEvent::CardBought { card: pile, cost });

        debug!(%player, card = %pile, cost, "Card bought");
        self.check_match_end();
        self.finish_command();
        Ok(())
    }

    /// Advance out of the current phase.
    ///
    /// From the action phase this moves to buy. From the buy phase it runs
    /// the whole cleanup step: sweep hand and play area to discard, draw a
    /// fresh hand of five, reset resources, and hand the turn to the next
    /// seat.
    pub fn advance_phase(&mut self, player: PlayerId) -> Result<(), CommandError> {
        Self::trace_rejection(player, self.try_advance_phase(player))
    }

    fn try_advance_phase(&mut self, player: PlayerId) -> Result<(), CommandError> {
        self.guard_turn(player)?;

        match self.state.phase {
            Phase::Action => {
                self.state.phase = Phase::Buy;
                self.state.push_log(
                    player,
                    LogEvent::PhaseAdvanced {
                        from: Phase::Action,
                        to: Phase::Buy,
                    },
                );
            }
            Phase::Buy => {
                self.state.phase = Phase::Cleanup;
                self.state.push_log(
                    player,
                    LogEvent::PhaseAdvanced {
                        from: Phase::Buy,
                        to: Phase::Cleanup,
                    },
                );
                self.run_cleanup();
            }
            // The resting phase is always Action or Buy; cleanup runs to
            // completion within the command that enters it.
            Phase::Cleanup => self.run_cleanup(),
        }

        self.finish_command();
        Ok(())
    }

    fn run_cleanup(&mut self) {
        let player = self.state.current_player;
        self.state.players[player].zones.sweep_to_discard();
        let drawn = self.state.draw_cards(player, HAND_SIZE);
        self.state.players[player].reset_for_turn();

        let next = player.next_in(self.state.player_count());
        self.state.push_log(
            player,
            LogEvent::TurnEnded {
                next_player: next,
                drawn,
            },
        );
        self.state.advance_current_player();
        self.state.phase = Phase::Action;

        debug!(%player, next = %next, drawn, "Turn ended");
        self.check_match_end();
    }

    fn check_match_end(&mut self) {
        if self.state.is_ended() {
            return;
        }
        if let Some(reason) = check_end(&self.state) {
            let outcome = decide_outcome(&self.state, reason);
            let actor = self.state.current_player;
            self.state.push_log(
                actor,
                LogEvent::MatchEnded {
                    reason: outcome.reason.clone(),
                    winner: outcome.winner,
                },
            );
            debug!(winner = %outcome.winner, "Match ended");
            self.state.set_outcome(outcome);
        }
    }

    fn finish_command(&mut self) {
        let snapshot = Snapshot::capture(&self.state);
        self.observers.broadcast(&snapshot);
    }

    /// Record a scheduler anomaly in the match log.
    ///
    /// Observers see the entry with the next snapshot; the anomaly itself
    /// is not a command.
    pub(crate) fn record_anomaly(&mut self, actor: PlayerId, detail: String) {
        self.state
            .push_log(actor, LogEvent::SchedulerAnomaly { detail });
    }

    // === Guards ===

    /// Trace a rejected command on its way back to the caller.
    fn trace_rejection<T>(
        player: PlayerId,
        result: Result<T, CommandError>,
    ) -> Result<T, CommandError> {
        if let Err(err) = &result {
            debug!(%player, %err, "Command rejected");
        }
        result
    }

    fn guard_turn(&self, player: PlayerId) -> Result<(), CommandError> {
        if self.state.is_ended() {
            return Err(CommandError::MatchAlreadyEnded);
        }
        let current = self.state.current_player;
        if player != current {
            return Err(CommandError::NotCurrentPlayer { player, current });
        }
        Ok(())
    }

    fn guard_phase(&self, required: Phase) -> Result<(), CommandError> {
        let actual = self.state.phase;
        if actual != required {
            return Err(CommandError::WrongPhase { required, actual });
        }
        Ok(())
    }

    fn card_in_hand(
        &self,
        player: PlayerId,
        card: InstanceId,
    ) -> Result<TemplateId, CommandError> {
        let not_found = CommandError::CardNotFound {
            card: CardRef::Instance(card),
            zone: ZoneKind::Hand,
        };
        if !self.state.players[player].zones.hand().contains(&card) {
            return Err(not_found);
        }
        self.state.template_of(card).ok_or(not_found)
    }

    // === Queries ===

    /// The live match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    /// Who drives the seat whose turn it is.
    #[must_use]
    pub fn current_controller(&self) -> Controller {
        self.state.current().controller
    }

    /// Capture a snapshot of the state right now.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Subscribe an observer.
    ///
    /// The observer immediately receives the current state, then one
    /// snapshot per successful command.
    pub fn subscribe(&mut self, observer: impl MatchObserver + 'static) {
        let mut observer = Box::new(observer);
        let snapshot = self.snapshot();
        observer.on_snapshot(&snapshot);
        self.observers.add(observer);
    }
}
