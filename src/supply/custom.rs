//! Player-submitted custom card definitions.
//!
//! A match may admit a handful of custom action cards at setup. Definitions
//! are validated against hard bounds; anything out of range, or not declared
//! as an action card, is dropped with a warning instead of failing setup, so
//! a bad submission never blocks the match.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cards::{CardKind, CardTemplate, Catalog, TemplateId};
use crate::effects::Effect;

/// Most custom cards admitted into one match.
pub const MAX_CUSTOM_CARDS: usize = 3;
/// Highest coin cost a custom card may declare.
pub const MAX_CUSTOM_COST: u32 = 8;
/// Most effects a single custom card may carry.
pub const MAX_CUSTOM_EFFECTS: usize = 4;
/// Largest magnitude any single effect may declare.
pub const MAX_EFFECT_MAGNITUDE: u32 = 9;

/// A custom card as submitted at setup, before validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCardDef {
    /// Template id the card will occupy. Must not collide with the catalog.
    pub id: TemplateId,
    pub name: String,
    /// Kind the submission declares. Only action cards are admitted.
    pub kind: CardKind,
    pub cost: u32,
    pub effects: Vec<Effect>,
    /// Display text for the UI; the engine carries it but never reads it.
    pub description: String,
}

impl CustomCardDef {
    /// Start a definition with no effects and no description.
    #[must_use]
    pub fn new(id: TemplateId, name: impl Into<String>, kind: CardKind, cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            cost,
            effects: Vec::new(),
            description: String::new(),
        }
    }

    /// Add an effect (builder style).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Attach display text (builder style).
    #[must_use]
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }
}

/// Validate submitted definitions and register the survivors.
///
/// Definitions are considered in submission order. Invalid ones are dropped
/// with a warning; once [`MAX_CUSTOM_CARDS`] have been admitted the rest
/// are dropped too. Admitted cards enter the catalog as
/// [`CardKind::Custom`], which plays like an action. Returns the admitted
/// template ids in order.
pub fn admit_custom_cards(defs: Vec<CustomCardDef>, catalog: &mut Catalog) -> Vec<TemplateId> {
    let mut admitted = Vec::new();
    for def in defs {
        if admitted.len() == MAX_CUSTOM_CARDS {
            warn!(
                card = %def.name,
                limit = MAX_CUSTOM_CARDS,
                "Dropping custom card over the per-match limit"
            );
            continue;
        }
        if let Err(reason) = validate(&def, catalog) {
            warn!(card = %def.name, reason, "Dropping invalid custom card");
            continue;
        }
        let mut template = CardTemplate::new(def.id, def.name, CardKind::Custom, def.cost);
        for effect in def.effects {
            template = template.with_effect(effect);
        }
        catalog.register(template);
        admitted.push(def.id);
    }
    admitted
}

fn validate(def: &CustomCardDef, catalog: &Catalog) -> Result<(), &'static str> {
    if def.name.trim().is_empty() {
        return Err("name is empty");
    }
    if def.cost > MAX_CUSTOM_COST {
        return Err("cost is out of range");
    }
    if def.effects.is_empty() {
        return Err("card has no effects");
    }
    if def.effects.len() > MAX_CUSTOM_EFFECTS {
        return Err("too many effects");
    }
    if def
        .effects
        .iter()
        .any(|e| e.magnitude() > MAX_EFFECT_MAGNITUDE)
    {
        return Err("effect magnitude is out of range");
    }
    if def.kind != CardKind::Action {
        return Err("declared kind is not action");
    }
    if catalog.contains(def.id) {
        return Err("template id is already taken");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog;

    fn def(id: u16, name: &str) -> CustomCardDef {
        CustomCardDef::new(TemplateId::new(id), name, CardKind::Action, 4)
            .with_effect(Effect::Draw(2))
            .with_effect(Effect::Custom {
                note: "flip the table".into(),
            })
    }

    #[test]
    fn test_valid_definition_is_admitted() {
        let mut catalog = Catalog::base_set();
        let tinker = def(100, "Tinker").with_description("mends one thing, breaks another");
        let admitted = admit_custom_cards(vec![tinker], &mut catalog);

        assert_eq!(admitted, vec![TemplateId::new(100)]);
        let template = catalog.get_unchecked(TemplateId::new(100));
        assert_eq!(template.kind, CardKind::Custom);
        assert!(template.kind.is_action_like());
        assert_eq!(template.cost, 4);
        assert_eq!(template.effects.len(), 2);
    }

    #[test]
    fn test_invalid_definitions_are_dropped() {
        let mut catalog = Catalog::base_set();
        let no_name = CustomCardDef::new(TemplateId::new(100), "  ", CardKind::Action, 2)
            .with_effect(Effect::Draw(1));
        let too_dear = CustomCardDef::new(TemplateId::new(101), "Palace", CardKind::Action, 9)
            .with_effect(Effect::Draw(1));
        let empty = CustomCardDef::new(TemplateId::new(102), "Blank", CardKind::Action, 2);
        let too_big = CustomCardDef::new(TemplateId::new(103), "Engine", CardKind::Action, 2)
            .with_effect(Effect::Draw(10));
        let mut overloaded = CustomCardDef::new(TemplateId::new(104), "Pile", CardKind::Action, 2);
        for _ in 0..5 {
            overloaded = overloaded.with_effect(Effect::GainCoins(1));
        }

        let admitted = admit_custom_cards(
            vec![no_name, too_dear, empty, too_big, overloaded],
            &mut catalog,
        );

        assert!(admitted.is_empty());
        assert_eq!(catalog.len(), 15);
    }

    #[test]
    fn test_non_action_kind_is_dropped() {
        let mut catalog = Catalog::base_set();
        let relic = CustomCardDef::new(TemplateId::new(100), "Relic", CardKind::Treasure, 3)
            .with_effect(Effect::GainCoins(2));

        let admitted = admit_custom_cards(vec![relic], &mut catalog);

        assert!(admitted.is_empty());
        assert!(!catalog.contains(TemplateId::new(100)));
    }

    #[test]
    fn test_id_collisions_are_dropped() {
        let mut catalog = Catalog::base_set();
        let shadows_copper = CustomCardDef::new(catalog::COPPER, "Shadow", CardKind::Action, 1)
            .with_effect(Effect::Draw(1));
        let first = def(100, "First");
        let duplicate = def(100, "Second");

        let admitted = admit_custom_cards(vec![shadows_copper, first, duplicate], &mut catalog);

        assert_eq!(admitted, vec![TemplateId::new(100)]);
        assert_eq!(catalog.get_unchecked(TemplateId::new(100)).name, "First");
    }

    #[test]
    fn test_admissions_clamp_at_the_limit() {
        let mut catalog = Catalog::base_set();
        let defs: Vec<CustomCardDef> = (0..5).map(|i| def(100 + i, "Extra")).collect();

        let admitted = admit_custom_cards(defs, &mut catalog);

        assert_eq!(admitted.len(), MAX_CUSTOM_CARDS);
        assert_eq!(catalog.len(), 15 + MAX_CUSTOM_CARDS);
        assert!(!catalog.contains(TemplateId::new(103)));
    }

    #[test]
    fn test_log_only_effect_is_valid() {
        let mut catalog = Catalog::base_set();
        let quiet = CustomCardDef::new(TemplateId::new(100), "Town Crier", CardKind::Action, 0)
            .with_effect(Effect::Custom {
                note: "shouts".into(),
            });

        let admitted = admit_custom_cards(vec![quiet], &mut catalog);
        assert_eq!(admitted.len(), 1);
    }
}
