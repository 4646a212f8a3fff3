//! The match engine: state, commands, snapshots, observers.
//!
//! ## Key Types
//!
//! - `MatchEngine`: Validates and executes commands for a running match
//! - `MatchSetup`: Builder for seats, custom cards, and the seed
//! - `MatchState`: Everything one match knows, fully serializable
//! - `Snapshot`: Arc-backed immutable view, one per successful command
//! - `MatchObserver`: Synchronous snapshot subscriber

pub mod machine;
pub mod observer;
pub mod snapshot;
pub mod state;

pub use machine::{MatchEngine, MatchSetup, PlayerSpec};
pub use observer::MatchObserver;
pub use snapshot::Snapshot;
pub use state::{Controller, MatchState, PlayerState};
