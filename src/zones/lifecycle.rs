//! Per-player card zones and the deck lifecycle.
//!
//! Each player owns four disjoint zones: deck (ordered, end of the vec is
//! the top), hand, discard, and play area. Every card instance a player has
//! ever been granted sits in exactly one of the four at any time; the only
//! way the total changes is a gain (purchase, attack, gain effects).
//!
//! Hand and discard are unordered sets in rules terms; they are stored as
//! vecs so iteration is deterministic.

use serde::{Deserialize, Serialize};

use crate::cards::InstanceId;
use crate::core::error::ZoneKind;
use crate::core::rng::MatchRng;

/// The four zones belonging to one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerZones {
    deck: Vec<InstanceId>,
    hand: Vec<InstanceId>,
    discard: Vec<InstanceId>,
    play_area: Vec<InstanceId>,
}

impl PlayerZones {
    /// Create empty zones.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a card on top of the deck. Used while building starting decks.
    pub fn place_on_deck(&mut self, card: InstanceId) {
        self.deck.push(card);
    }

    /// Shuffle the deck in place. Never touches the other three zones.
    pub fn shuffle_deck(&mut self, rng: &mut MatchRng) {
        rng.shuffle(&mut self.deck);
    }

    /// Draw up to `n` cards from deck to hand.
    ///
    /// When the deck runs out mid-draw and the discard is non-empty, the
    /// discard is shuffled into the deck and drawing continues. When both
    /// are empty the draw stops short; partial draws are valid and common
    /// near match end. Returns the number actually drawn.
    pub fn draw(&mut self, n: u32, rng: &mut MatchRng) -> u32 {
        let mut drawn = 0;
        for _ in 0..n {
            if self.deck.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.deck.append(&mut self.discard);
                rng.shuffle(&mut self.deck);
            }
            if let Some(card) = self.deck.pop() {
                self.hand.push(card);
                drawn += 1;
            }
        }
        drawn
    }

    /// Move the whole hand to the discard.
    pub fn discard_hand(&mut self) {
        self.discard.append(&mut self.hand);
    }

    /// Move a card from hand to the play area.
    ///
    /// Returns `false` (and changes nothing) when the card is not in hand.
    pub fn move_to_play(&mut self, card: InstanceId) -> bool {
        match self.hand.iter().position(|&c| c == card) {
            Some(idx) => {
                let card = self.hand.remove(idx);
                self.play_area.push(card);
                true
            }
            None => false,
        }
    }

    /// Sweep hand and play area into the discard (cleanup step).
    pub fn sweep_to_discard(&mut self) {
        self.discard.append(&mut self.hand);
        self.discard.append(&mut self.play_area);
    }

    /// Gain a freshly granted card into the discard.
    ///
    /// Purchases and attack/gain effects land here, never in hand: the card
    /// is unavailable until it cycles through a reshuffle.
    pub fn gain_to_discard(&mut self, card: InstanceId) {
        self.discard.push(card);
    }

    /// The hand contents in storage order.
    #[must_use]
    pub fn hand(&self) -> &[InstanceId] {
        &self.hand
    }

    /// The play area contents in play order.
    #[must_use]
    pub fn play_area(&self) -> &[InstanceId] {
        &self.play_area
    }

    /// The discard contents.
    #[must_use]
    pub fn discard(&self) -> &[InstanceId] {
        &self.discard
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Total cards across all four zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len() + self.play_area.len()
    }

    /// Which zone currently holds `card`, if any.
    #[must_use]
    pub fn zone_of(&self, card: InstanceId) -> Option<ZoneKind> {
        if self.deck.contains(&card) {
            Some(ZoneKind::Deck)
        } else if self.hand.contains(&card) {
            Some(ZoneKind::Hand)
        } else if self.discard.contains(&card) {
            Some(ZoneKind::Discard)
        } else if self.play_area.contains(&card) {
            Some(ZoneKind::PlayArea)
        } else {
            None
        }
    }

    /// Iterate over every card in all four zones.
    pub fn all_cards(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.deck
            .iter()
            .chain(self.hand.iter())
            .chain(self.discard.iter())
            .chain(self.play_area.iter())
            .copied()
    }
}
