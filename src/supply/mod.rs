//! The shared supply of purchasable card piles.
//!
//! Built once at setup from the catalog (base set plus any admitted custom
//! cards) and consumed one card at a time by purchases. Pile exhaustion
//! drives the end-of-match triggers.
//!
//! ## Key Types
//!
//! - `Supply`: All piles for one match, iterated in stable order
//! - `SupplyPile`: One pile with its cost and remaining count
//! - `CustomCardDef`: A player-submitted card awaiting validation

pub mod custom;
pub mod pile;

pub use custom::{admit_custom_cards, CustomCardDef, MAX_CUSTOM_CARDS};
pub use pile::{Supply, SupplyPile};
