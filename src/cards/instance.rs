//! Card instances - the concrete copies that circulate through zones.
//!
//! A `CardInstance` is one copy of a template, minted at setup, at purchase,
//! or by a gain effect. Instances carry no mutable state of their own: which
//! zone a copy sits in is recorded by its owner's zones, so moving a card is
//! a pure id shuffle.

use serde::{Deserialize, Serialize};

use super::template::TemplateId;
use crate::core::player::PlayerId;

/// Unique identifier for one card copy within a match.
///
/// Allocated sequentially by the match state; never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One copy of a card template in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique ID for this copy.
    pub id: InstanceId,

    /// The template this copy was minted from.
    pub template: TemplateId,

    /// The player this copy was granted to.
    pub owner: PlayerId,
}

impl CardInstance {
    /// Create a card instance owned by `owner`.
    #[must_use]
    pub fn new(id: InstanceId, template: TemplateId, owner: PlayerId) -> Self {
        Self {
            id,
            template,
            owner,
        }
    }
}
