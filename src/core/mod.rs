//! Core engine types: players, phases, RNG, log entries, command errors.
//!
//! These are the building blocks every other module leans on; none of them
//! know anything about concrete cards or rules.

pub mod error;
pub mod log;
pub mod phase;
pub mod player;
pub mod rng;

pub use error::{CardRef, CommandError, ResourceKind, ZoneKind};
pub use log::{LogEntry, LogEvent};
pub use phase::Phase;
pub use player::{PlayerId, PlayerMap};
pub use rng::{MatchRng, MatchRngState};
