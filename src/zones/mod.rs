//! Zone system for card locations.
//!
//! Every card a player owns lives in exactly one of four per-player zones:
//! deck, hand, discard, or play area. `PlayerZones` owns the membership and
//! the moves between them, including the reshuffle that folds the discard
//! back into the deck when it runs dry.
//!
//! ## Key Types
//!
//! - `PlayerZones`: One player's four zones and the moves between them

pub mod lifecycle;

pub use lifecycle::PlayerZones;
