//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties of a card identity: its
//! kind, cost, ordered effect list, and victory-point value. For example,
//! "Smithy" costs 4 and draws 3 cards - these are part of the template.
//!
//! Per-copy data (which player owns it, which zone it sits in) is stored
//! separately via `CardInstance`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::Effect;

/// Unique identifier for a card template.
///
/// This identifies the card identity (e.g., "Smithy"), not a specific copy
/// in a match. Supply piles are keyed by the same id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u16);

impl TemplateId {
    /// Create a new template ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// The closed set of card kinds.
///
/// `Custom` marks externally authored cards; they play like action cards
/// but keep their own kind so a UI can badge them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Action,
    Treasure,
    Victory,
    Curse,
    Custom,
}

impl CardKind {
    /// Whether a card of this kind may be played during the action phase.
    #[must_use]
    pub fn is_action_like(self) -> bool {
        matches!(self, CardKind::Action | CardKind::Custom)
    }

    /// Whether a card of this kind may be played during the buy phase.
    #[must_use]
    pub fn is_treasure(self) -> bool {
        matches!(self, CardKind::Treasure)
    }

    /// Whether cards of this kind carry victory points (including negative).
    #[must_use]
    pub fn is_scoring(self) -> bool {
        matches!(self, CardKind::Victory | CardKind::Curse)
    }
}

/// Static card template.
///
/// Immutable once defined; every in-match copy refers back to one of these.
/// Effects apply strictly in list order.
///
/// ## Example
///
/// ```
/// use deckline::cards::{CardKind, CardTemplate, TemplateId};
/// use deckline::effects::Effect;
///
/// let smithy = CardTemplate::new(TemplateId::new(10), "Smithy", CardKind::Action, 4)
///     .with_effect(Effect::Draw(3));
///
/// assert_eq!(smithy.cost, 4);
/// assert_eq!(smithy.effects.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Unique identifier for this template.
    pub id: TemplateId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Which of the closed kinds this card is.
    pub kind: CardKind,

    /// Purchase cost in coins.
    pub cost: u32,

    /// Ordered effects applied when the card is played.
    pub effects: SmallVec<[Effect; 4]>,

    /// Victory points this card is worth at scoring, if any.
    pub vp: Option<i32>,
}

impl CardTemplate {
    /// Create a new template with no effects and no victory points.
    #[must_use]
    pub fn new(id: TemplateId, name: impl Into<String>, kind: CardKind, cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            cost,
            effects: SmallVec::new(),
            vp: None,
        }
    }

    /// Append one effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set the victory-point value (builder pattern).
    #[must_use]
    pub fn with_vp(mut self, vp: i32) -> Self {
        self.vp = Some(vp);
        self
    }

    /// Victory points this card contributes at scoring (0 when none).
    #[must_use]
    pub fn victory_points(&self) -> i32 {
        self.vp.unwrap_or(0)
    }

    /// Total cards drawn across this template's effects.
    #[must_use]
    pub fn total_draw(&self) -> u32 {
        self.effects.iter().map(Effect::draw_count).sum()
    }

    /// Total actions granted across this template's effects.
    #[must_use]
    pub fn total_actions(&self) -> u32 {
        self.effects.iter().map(Effect::action_count).sum()
    }

    /// Total coins granted across this template's effects.
    #[must_use]
    pub fn total_coins(&self) -> u32 {
        self.effects.iter().map(Effect::coin_count).sum()
    }

    /// Total buys granted across this template's effects.
    #[must_use]
    pub fn total_buys(&self) -> u32 {
        self.effects.iter().map(Effect::buy_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_id() {
        let id = TemplateId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "T42");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(CardKind::Action.is_action_like());
        assert!(CardKind::Custom.is_action_like());
        assert!(!CardKind::Treasure.is_action_like());

        assert!(CardKind::Treasure.is_treasure());
        assert!(!CardKind::Victory.is_treasure());

        assert!(CardKind::Victory.is_scoring());
        assert!(CardKind::Curse.is_scoring());
        assert!(!CardKind::Action.is_scoring());
    }

    #[test]
    fn test_template_builder() {
        let market = CardTemplate::new(TemplateId::new(13), "Market", CardKind::Action, 5)
            .with_effect(Effect::Draw(1))
            .with_effect(Effect::GainActions(1))
            .with_effect(Effect::GainBuys(1))
            .with_effect(Effect::GainCoins(1));

        assert_eq!(market.name, "Market");
        assert_eq!(market.effects.len(), 4);
        assert_eq!(market.total_draw(), 1);
        assert_eq!(market.total_actions(), 1);
        assert_eq!(market.total_buys(), 1);
        assert_eq!(market.total_coins(), 1);
        assert_eq!(market.victory_points(), 0);
    }

    #[test]
    fn test_victory_points() {
        let duchy = CardTemplate::new(TemplateId::new(5), "Duchy", CardKind::Victory, 5)
            .with_vp(3);
        assert_eq!(duchy.victory_points(), 3);

        let curse = CardTemplate::new(TemplateId::new(7), "Curse", CardKind::Curse, 0)
            .with_vp(-1);
        assert_eq!(curse.victory_points(), -1);
    }

    #[test]
    fn test_effects_keep_declaration_order() {
        let card = CardTemplate::new(TemplateId::new(1), "Ordered", CardKind::Action, 3)
            .with_effect(Effect::GainActions(2))
            .with_effect(Effect::Draw(1));

        assert_eq!(card.effects[0], Effect::GainActions(2));
        assert_eq!(card.effects[1], Effect::Draw(1));
    }

    #[test]
    fn test_template_serialization() {
        let smithy = CardTemplate::new(TemplateId::new(10), "Smithy", CardKind::Action, 4)
            .with_effect(Effect::Draw(3));

        let json = serde_json::to_string(&smithy).unwrap();
        let back: CardTemplate = serde_json::from_str(&json).unwrap();

        assert_eq!(smithy, back);
    }
}
