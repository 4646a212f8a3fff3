//! # deckline
//!
//! A deck-building card game engine with an autonomous opponent.
//!
//! ## Design Principles
//!
//! 1. **Commands Validate First**: Every command checks its guards before
//!    touching state, so a rejection leaves the match exactly as it was.
//!
//! 2. **The Supply Only Shrinks Through Purchases**: Effects that grant
//!    cards mint fresh instances instead of taking from piles. Pile counts
//!    are a pure record of buys, which keeps the end triggers simple.
//!
//! 3. **Determinism From the Seed**: One seeded RNG drives every shuffle.
//!    The same setup and seed replays the same match, bot decisions
//!    included.
//!
//! ## Architecture
//!
//! - **Synchronous Step Machine**: The bot is driven one recommendation at
//!   a time by a resumable scheduler, so a UI can interleave human
//!   commands and bot steps on one thread.
//!
//! - **Snapshot Broadcasting**: One `Arc`-backed snapshot per successful
//!   command, delivered synchronously to observers.
//!
//! - **Persistent Match Log**: The log is an `im::Vector`, cheap to carry
//!   in every snapshot.
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, phases, errors, the match log
//! - `cards`: Templates, the catalog, minted instances
//! - `zones`: Per-player deck, hand, discard, and play area
//! - `supply`: Purchasable piles and custom card intake
//! - `effects`: The closed effect set and its application
//! - `engine`: Match state, commands, snapshots, observers
//! - `scoring`: End conditions and victory points
//! - `policy`: Decision policies for autonomous seats
//! - `scheduler`: The resumable turn driver

pub mod cards;
pub mod core;
pub mod effects;
pub mod engine;
pub mod policy;
pub mod scheduler;
pub mod scoring;
pub mod supply;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    CardRef, CommandError, LogEntry, LogEvent, MatchRng, MatchRngState, Phase, PlayerId,
    PlayerMap, ResourceKind, ZoneKind,
};

pub use crate::cards::{CardInstance, CardKind, CardTemplate, Catalog, InstanceId, TemplateId};

pub use crate::zones::PlayerZones;

pub use crate::supply::{admit_custom_cards, CustomCardDef, Supply, SupplyPile};

pub use crate::effects::{apply_effects, Effect};

pub use crate::engine::{
    Controller, MatchEngine, MatchObserver, MatchSetup, MatchState, PlayerSpec, PlayerState,
    Snapshot,
};

pub use crate::scoring::{check_end, player_vp, EndReason, MatchOutcome};

pub use crate::policy::{DecisionPolicy, Recommendation, TieredPolicy};

pub use crate::scheduler::{StepOutcome, TurnScheduler};
