//! Structured match log entries.
//!
//! Every successful command appends at least one entry to the match log,
//! which lives in the state as an `im::Vector` (cheap to clone into
//! snapshots, append-only by construction). The log is domain data, the
//! record a UI replays to narrate the match; `tracing` diagnostics are
//! separate.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::player::PlayerId;
use crate::cards::TemplateId;
use crate::scoring::EndReason;

/// One entry in the append-only match log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Turn number the event happened on (1-based).
    pub turn: u32,
    /// Player the event is attributed to.
    pub actor: PlayerId,
    /// What happened.
    pub event: LogEvent,
}

/// The events a match log records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LogEvent {
    /// Match setup finished; decks dealt and first hands drawn.
    MatchStarted { players: u8 },
    /// An action card left the actor's hand for the play area.
    ActionPlayed { card: TemplateId },
    /// A treasure was played; `coins_after` is the actor's new coin total.
    TreasurePlayed { card: TemplateId, coins_after: u32 },
    /// A supply purchase: pile decremented, fresh copy gained to discard.
    CardBought { card: TemplateId, cost: u32 },
    /// A card granted outside purchase (attack or gain effect).
    CardGained { card: TemplateId },
    /// A custom effect fired; its note is recorded verbatim.
    CustomNote { note: String },
    /// The actor moved from one phase to the next.
    PhaseAdvanced { from: Phase, to: Phase },
    /// Cleanup ran: zones swept, `drawn` new cards taken, turn handed off.
    TurnEnded { next_player: PlayerId, drawn: u32 },
    /// The autonomous turn driver hit an unexpected rejection and bailed out.
    SchedulerAnomaly { detail: String },
    /// An end condition fired after the actor's command.
    MatchEnded { reason: EndReason, winner: PlayerId },
}
