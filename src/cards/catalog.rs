//! Card catalog: template lookup plus the standard base set.
//!
//! The `Catalog` stores every template a match can mint copies of. The base
//! set is the classic deck-builder spread: three treasures, three victory
//! cards, the Curse, and a shelf of action cards. Custom action cards are
//! registered on top of the base set at match setup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::template::{CardKind, CardTemplate, TemplateId};
use crate::effects::Effect;

/// Base-set template ids. Stable across matches so logs and tests can refer
/// to cards by constant.
pub const COPPER: TemplateId = TemplateId::new(1);
pub const SILVER: TemplateId = TemplateId::new(2);
pub const GOLD: TemplateId = TemplateId::new(3);
pub const ESTATE: TemplateId = TemplateId::new(4);
pub const DUCHY: TemplateId = TemplateId::new(5);
pub const PROVINCE: TemplateId = TemplateId::new(6);
pub const CURSE: TemplateId = TemplateId::new(7);
pub const MOAT: TemplateId = TemplateId::new(8);
pub const VILLAGE: TemplateId = TemplateId::new(9);
pub const SMITHY: TemplateId = TemplateId::new(10);
pub const LABORATORY: TemplateId = TemplateId::new(11);
pub const FESTIVAL: TemplateId = TemplateId::new(12);
pub const MARKET: TemplateId = TemplateId::new(13);
pub const COUNCIL_ROOM: TemplateId = TemplateId::new(14);
pub const WITCH: TemplateId = TemplateId::new(15);

/// Registry of card templates for one match.
///
/// ## Example
///
/// ```
/// use deckline::cards::{catalog, Catalog};
///
/// let catalog = Catalog::base_set();
/// let smithy = catalog.get_unchecked(catalog::SMITHY);
/// assert_eq!(smithy.name, "Smithy");
/// assert_eq!(smithy.total_draw(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    templates: FxHashMap<TemplateId, CardTemplate>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the standard base set.
    #[must_use]
    pub fn base_set() -> Self {
        let mut catalog = Self::new();

        catalog.register(
            CardTemplate::new(COPPER, "Copper", CardKind::Treasure, 0)
                .with_effect(Effect::GainCoins(1)),
        );
        catalog.register(
            CardTemplate::new(SILVER, "Silver", CardKind::Treasure, 3)
                .with_effect(Effect::GainCoins(2)),
        );
        catalog.register(
            CardTemplate::new(GOLD, "Gold", CardKind::Treasure, 6)
                .with_effect(Effect::GainCoins(3)),
        );

        catalog.register(CardTemplate::new(ESTATE, "Estate", CardKind::Victory, 2).with_vp(1));
        catalog.register(CardTemplate::new(DUCHY, "Duchy", CardKind::Victory, 5).with_vp(3));
        catalog.register(CardTemplate::new(PROVINCE, "Province", CardKind::Victory, 8).with_vp(6));
        catalog.register(CardTemplate::new(CURSE, "Curse", CardKind::Curse, 0).with_vp(-1));

        catalog.register(
            CardTemplate::new(MOAT, "Moat", CardKind::Action, 2).with_effect(Effect::Draw(2)),
        );
        catalog.register(
            CardTemplate::new(VILLAGE, "Village", CardKind::Action, 3)
                .with_effect(Effect::Draw(1))
                .with_effect(Effect::GainActions(2)),
        );
        catalog.register(
            CardTemplate::new(SMITHY, "Smithy", CardKind::Action, 4).with_effect(Effect::Draw(3)),
        );
        catalog.register(
            CardTemplate::new(LABORATORY, "Laboratory", CardKind::Action, 5)
                .with_effect(Effect::Draw(2))
                .with_effect(Effect::GainActions(1)),
        );
        catalog.register(
            CardTemplate::new(FESTIVAL, "Festival", CardKind::Action, 5)
                .with_effect(Effect::GainActions(2))
                .with_effect(Effect::GainBuys(1))
                .with_effect(Effect::GainCoins(2)),
        );
        catalog.register(
            CardTemplate::new(MARKET, "Market", CardKind::Action, 5)
                .with_effect(Effect::Draw(1))
                .with_effect(Effect::GainActions(1))
                .with_effect(Effect::GainBuys(1))
                .with_effect(Effect::GainCoins(1)),
        );
        catalog.register(
            CardTemplate::new(COUNCIL_ROOM, "Council Room", CardKind::Action, 5)
                .with_effect(Effect::Draw(4))
                .with_effect(Effect::GainBuys(1)),
        );
        catalog.register(
            CardTemplate::new(WITCH, "Witch", CardKind::Action, 5)
                .with_effect(Effect::Draw(2))
                .with_effect(Effect::Attack { curses: 1 }),
        );

        catalog
    }

    /// Register a template.
    ///
    /// Panics if a template with the same ID already exists. Use
    /// [`Catalog::contains`] first when the ID comes from outside.
    pub fn register(&mut self, template: CardTemplate) {
        if self.templates.contains_key(&template.id) {
            panic!("Template with ID {} already registered", template.id);
        }
        self.templates.insert(template.id, template);
    }

    /// Get a template by ID.
    #[must_use]
    pub fn get(&self, id: TemplateId) -> Option<&CardTemplate> {
        self.templates.get(&id)
    }

    /// Get a template by ID, panicking if not found.
    ///
    /// Use for ids that were minted through this catalog.
    #[must_use]
    pub fn get_unchecked(&self, id: TemplateId) -> &CardTemplate {
        self.templates.get(&id).expect("Template not in catalog")
    }

    /// Check if a template ID is registered.
    #[must_use]
    pub fn contains(&self, id: TemplateId) -> bool {
        self.templates.contains_key(&id)
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over all templates (no particular order).
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.templates.values()
    }

    /// Find templates matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardTemplate>
    where
        F: Fn(&CardTemplate) -> bool,
    {
        self.templates.values().filter(move |t| predicate(t))
    }
}
