//! Match state: everything one match knows.
//!
//! ## PlayerState
//!
//! One seat's mutable state:
//! - Controller (human or autonomous)
//! - Four card zones
//! - Turn resources (actions, buys, coins)
//!
//! ## MatchState
//!
//! Complete match state including:
//! - Phase, turn, current player
//! - Per-player state
//! - Supply piles and the per-match catalog
//! - Card instance registry
//! - RNG and the append-only match log

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, Catalog, InstanceId, TemplateId};
use crate::core::log::{LogEntry, LogEvent};
use crate::core::phase::Phase;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::MatchRng;
use crate::scoring::MatchOutcome;
use crate::supply::Supply;
use crate::zones::PlayerZones;

/// Who drives a seat's turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    /// Commands arrive from outside the engine.
    Human,
    /// The turn scheduler plays this seat with a decision policy.
    Autonomous,
}

/// One player's mutable state for the match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub name: String,
    pub controller: Controller,
    /// Deck, hand, discard, play area.
    pub zones: PlayerZones,
    /// Action plays left this turn.
    pub actions: u32,
    /// Purchases left this turn.
    pub buys: u32,
    /// Coins accumulated this turn from played treasures and effects.
    pub coins: u32,
}

impl PlayerState {
    /// Create a player with empty zones and fresh turn resources.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, controller: Controller) -> Self {
        Self {
            id,
            name: name.into(),
            controller,
            zones: PlayerZones::new(),
            actions: 1,
            buys: 1,
            coins: 0,
        }
    }

    /// Whether the scheduler drives this seat.
    #[must_use]
    pub fn is_autonomous(&self) -> bool {
        self.controller == Controller::Autonomous
    }

    /// Reset turn resources to one action, one buy, zero coins.
    pub(crate) fn reset_for_turn(&mut self) {
        self.actions = 1;
        self.buys = 1;
        self.coins = 0;
    }
}

/// Full match state.
///
/// Fields that commands guard (phase, resources, zone membership) are read
/// freely; the command layer in `engine::machine` owns mutation ordering.
/// The whole state serializes, so a snapshot carries everything needed to
/// interpret it, including custom card templates admitted at setup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    /// Turn number (starts at 1, increments when the turn wraps to seat 0).
    pub turn: u32,

    /// Current phase of the current player's turn.
    pub phase: Phase,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Per-player state, indexed by `PlayerId`.
    pub players: PlayerMap<PlayerState>,

    /// Shared purchasable piles.
    pub supply: Supply,

    /// Deterministic RNG for shuffles.
    pub rng: MatchRng,

    /// Card templates for this match: base set plus admitted customs.
    catalog: Catalog,

    /// Every minted card instance by id.
    instances: FxHashMap<InstanceId, CardInstance>,

    /// Next instance id to allocate.
    next_instance: u32,

    /// Append-only match log.
    log: Vector<LogEntry>,

    /// Set once an end condition fires; commands are rejected afterwards.
    outcome: Option<MatchOutcome>,
}

impl MatchState {
    /// Assemble a match state from its setup-time parts.
    pub(crate) fn new(
        players: PlayerMap<PlayerState>,
        catalog: Catalog,
        supply: Supply,
        rng: MatchRng,
    ) -> Self {
        Self {
            turn: 1,
            phase: Phase::Action,
            current_player: PlayerId::new(0),
            players,
            supply,
            rng,
            catalog,
            instances: FxHashMap::default(),
            next_instance: 0,
            log: Vector::new(),
            outcome: None,
        }
    }

    /// Number of seats in the match.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The current player's state.
    #[must_use]
    pub fn current(&self) -> &PlayerState {
        &self.players[self.current_player]
    }

    /// The card templates in play this match.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // === Card Instances ===

    /// Mint a fresh card instance owned by `owner`.
    ///
    /// The caller places the returned id into a zone; minting alone leaves
    /// the card nowhere.
    pub(crate) fn mint_instance(&mut self, template: TemplateId, owner: PlayerId) -> InstanceId {
        let id = InstanceId::new(self.next_instance);
        self.next_instance += 1;
        self.instances
            .insert(id, CardInstance::new(id, template, owner));
        id
    }

    /// Look up a minted instance.
    #[must_use]
    pub fn instance(&self, id: InstanceId) -> Option<&CardInstance> {
        self.instances.get(&id)
    }

    /// Which template a minted instance copies.
    #[must_use]
    pub fn template_of(&self, id: InstanceId) -> Option<TemplateId> {
        self.instances.get(&id).map(|c| c.template)
    }

    /// How many instances have been minted so far.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Draw up to `n` cards for `player`, reshuffling as needed.
    pub(crate) fn draw_cards(&mut self, player: PlayerId, n: u32) -> u32 {
        let Self { players, rng, .. } = self;
        players[player].zones.draw(n, rng)
    }

    /// Shuffle `player`'s deck in place.
    pub(crate) fn shuffle_deck(&mut self, player: PlayerId) {
        let Self { players, rng, .. } = self;
        players[player].zones.shuffle_deck(rng);
    }

    /// Mint a fresh copy of `template` straight into `owner`'s discard.
    pub(crate) fn mint_to_discard(&mut self, template: TemplateId, owner: PlayerId) -> InstanceId {
        let card = self.mint_instance(template, owner);
        self.players[owner].zones.gain_to_discard(card);
        card
    }

    // === Match Log ===

    /// Append a log entry attributed to `actor` on the current turn.
    pub(crate) fn push_log(&mut self, actor: PlayerId, event: LogEvent) {
        self.log.push_back(LogEntry {
            turn: self.turn,
            actor,
            event,
        });
    }

    /// The append-only match log.
    #[must_use]
    pub fn log(&self) -> &Vector<LogEntry> {
        &self.log
    }

    // === Outcome ===

    /// The final outcome, once an end condition has fired.
    #[must_use]
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.outcome.is_some()
    }

    pub(crate) fn set_outcome(&mut self, outcome: MatchOutcome) {
        self.outcome = Some(outcome);
    }

    // === Turn Handoff ===

    /// Hand the turn to the next seat, bumping the turn number on wrap.
    pub(crate) fn advance_current_player(&mut self) {
        let next = self.current_player.next_in(self.player_count());
        if next.index() == 0 {
            self.turn += 1;
        }
        self.current_player = next;
    }
}
