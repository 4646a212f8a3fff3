//! Card system: templates, the catalog, and in-match card copies.
//!
//! ## Key Types
//!
//! - `TemplateId`: identifier for a card identity (shared with supply piles)
//! - `CardKind`: the closed kind set (Action/Treasure/Victory/Curse/Custom)
//! - `CardTemplate`: immutable card data with an ordered effect list
//! - `InstanceId` / `CardInstance`: one concrete copy circulating in a match
//! - `Catalog`: template lookup, seeded with the standard base set

pub mod catalog;
pub mod instance;
pub mod template;

pub use catalog::Catalog;
pub use instance::{CardInstance, InstanceId};
pub use template::{CardKind, CardTemplate, TemplateId};
