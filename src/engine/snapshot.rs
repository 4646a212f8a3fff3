//! Immutable snapshots of match state.
//!
//! The engine captures a snapshot after every successful command and hands
//! it to observers. Snapshots are `Arc`-backed, so cloning one is a pointer
//! bump and holding one never blocks the engine. The byte codec exists for
//! storage and replay tooling.

use std::ops::Deref;
use std::sync::Arc;

use super::state::MatchState;

/// One immutable view of the match.
///
/// Derefs to [`MatchState`], so queries read naturally:
/// `snapshot.log()`, `snapshot.players[id]`, and so on.
#[derive(Clone, Debug)]
pub struct Snapshot {
    state: Arc<MatchState>,
}

impl Snapshot {
    /// Freeze the current state into a snapshot.
    pub(crate) fn capture(state: &MatchState) -> Self {
        Self {
            state: Arc::new(state.clone()),
        }
    }

    /// The frozen state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Encode the snapshot for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(&*self.state)
    }

    /// Decode a snapshot produced by [`Snapshot::to_bytes`].
    ///
    /// The encoding carries the whole state, custom card templates
    /// included, so no side channel is needed to interpret it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        let state: MatchState = bincode::deserialize(bytes)?;
        Ok(Self {
            state: Arc::new(state),
        })
    }
}

impl Deref for Snapshot {
    type Target = MatchState;

    fn deref(&self) -> &MatchState {
        &self.state
    }
}
