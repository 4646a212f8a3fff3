//! The shared supply and its purchasable piles.
//!
//! The supply is built once at setup from the catalog and after that only
//! ever shrinks, one card at a time, through purchases. Effects that grant
//! cards mint fresh instances and never touch pile counts, so the supply is
//! also the sole input to the end-of-match triggers.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{catalog, CardKind, CardTemplate, Catalog, TemplateId};

const COPPER_PILE: u32 = 30;
const SILVER_PILE: u32 = 20;
const GOLD_PILE: u32 = 15;
const ACTION_PILE: u32 = 10;

/// One pile of identical purchasable cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyPile {
    /// Which card the pile sells.
    pub template: TemplateId,
    /// Cost in coins, copied from the template at setup.
    pub cost: u32,
    remaining: u32,
}

impl SupplyPile {
    fn new(template: TemplateId, cost: u32, remaining: u32) -> Self {
        Self {
            template,
            cost,
            remaining,
        }
    }

    /// Cards left in the pile.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// True once the last card has been bought.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// All purchasable piles for one match.
///
/// Iteration order is stable: piles are visited in ascending template id,
/// whatever the hash map does internally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supply {
    piles: FxHashMap<TemplateId, SupplyPile>,
    order: Vec<TemplateId>,
}

impl Supply {
    /// Build the standard supply for every template in the catalog.
    ///
    /// Victory piles hold 8 cards for two players and 12 for more; the
    /// curse pile holds 10 per opponent. Treasure pile sizes are fixed and
    /// action piles (including admitted custom cards) hold 10 each.
    #[must_use]
    pub fn standard(catalog: &Catalog, player_count: u8) -> Self {
        let victory_count = if player_count > 2 { 12 } else { 8 };
        let curse_count = 10 * u32::from(player_count.saturating_sub(1).max(1));

        let mut templates: Vec<&CardTemplate> = catalog.iter().collect();
        templates.sort_by_key(|t| t.id);

        let mut supply = Self {
            piles: FxHashMap::default(),
            order: Vec::new(),
        };
        for template in templates {
            let count = match template.kind {
                CardKind::Treasure => match template.id {
                    catalog::COPPER => COPPER_PILE,
                    catalog::SILVER => SILVER_PILE,
                    _ => GOLD_PILE,
                },
                CardKind::Victory => victory_count,
                CardKind::Curse => curse_count,
                CardKind::Action | CardKind::Custom => ACTION_PILE,
            };
            supply.add_pile(template, count);
        }
        supply
    }

    /// Add a pile. Panics if the template already has one.
    fn add_pile(&mut self, template: &CardTemplate, count: u32) {
        if self.piles.contains_key(&template.id) {
            panic!("Supply pile for {} already exists", template.id);
        }
        self.order.push(template.id);
        self.piles
            .insert(template.id, SupplyPile::new(template.id, template.cost, count));
    }

    /// Look up a pile.
    #[must_use]
    pub fn pile(&self, template: TemplateId) -> Option<&SupplyPile> {
        self.piles.get(&template)
    }

    /// Cards left in a pile, or `None` when the template has no pile.
    #[must_use]
    pub fn remaining(&self, template: TemplateId) -> Option<u32> {
        self.piles.get(&template).map(|p| p.remaining)
    }

    /// Whether the template has a pile at all.
    #[must_use]
    pub fn contains(&self, template: TemplateId) -> bool {
        self.piles.contains_key(&template)
    }

    /// Number of piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the supply has no piles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over piles in ascending template id.
    pub fn iter(&self) -> impl Iterator<Item = &SupplyPile> + '_ {
        self.order.iter().map(|id| &self.piles[id])
    }

    /// Template ids of every exhausted pile, in iteration order.
    #[must_use]
    pub fn exhausted_piles(&self) -> Vec<TemplateId> {
        self.iter()
            .filter(|p| p.is_exhausted())
            .map(|p| p.template)
            .collect()
    }

    /// How many piles are exhausted.
    #[must_use]
    pub fn exhausted_count(&self) -> usize {
        self.iter().filter(|p| p.is_exhausted()).count()
    }

    /// Remove one card from a pile for a validated purchase.
    ///
    /// The buy command checks existence and emptiness before calling this;
    /// reaching a missing or empty pile here is a bug in that guard.
    pub(crate) fn deduct_for_purchase(&mut self, template: TemplateId) {
        let pile = match self.piles.get_mut(&template) {
            Some(pile) => pile,
            None => panic!("No supply pile for {template}"),
        };
        assert!(
            pile.remaining > 0,
            "Supply pile {template} is already empty"
        );
        pile.remaining -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_two_player_counts() {
        let catalog = Catalog::base_set();
        let supply = Supply::standard(&catalog, 2);

        assert_eq!(supply.len(), catalog.len());
        assert_eq!(supply.remaining(catalog::COPPER), Some(30));
        assert_eq!(supply.remaining(catalog::SILVER), Some(20));
        assert_eq!(supply.remaining(catalog::GOLD), Some(15));
        assert_eq!(supply.remaining(catalog::PROVINCE), Some(8));
        assert_eq!(supply.remaining(catalog::CURSE), Some(10));
        assert_eq!(supply.remaining(catalog::VILLAGE), Some(10));
    }

    #[test]
    fn test_standard_scales_with_player_count() {
        let catalog = Catalog::base_set();
        let supply = Supply::standard(&catalog, 4);

        assert_eq!(supply.remaining(catalog::ESTATE), Some(12));
        assert_eq!(supply.remaining(catalog::PROVINCE), Some(12));
        assert_eq!(supply.remaining(catalog::CURSE), Some(30));
    }

    #[test]
    fn test_iteration_order_is_ascending_template_id() {
        let catalog = Catalog::base_set();
        let supply = Supply::standard(&catalog, 2);

        let ids: Vec<u16> = supply.iter().map(|p| p.template.raw()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(ids[0], catalog::COPPER.raw());
    }

    #[test]
    fn test_deduct_for_purchase() {
        let catalog = Catalog::base_set();
        let mut supply = Supply::standard(&catalog, 2);

        supply.deduct_for_purchase(catalog::SILVER);
        assert_eq!(supply.remaining(catalog::SILVER), Some(19));
        assert_eq!(supply.exhausted_count(), 0);
    }

    #[test]
    fn test_exhausted_piles() {
        let catalog = Catalog::base_set();
        let mut supply = Supply::standard(&catalog, 2);

        for _ in 0..8 {
            supply.deduct_for_purchase(catalog::PROVINCE);
        }
        for _ in 0..10 {
            supply.deduct_for_purchase(catalog::MOAT);
        }

        assert!(supply.pile(catalog::PROVINCE).is_some_and(SupplyPile::is_exhausted));
        assert_eq!(supply.exhausted_count(), 2);
        assert_eq!(
            supply.exhausted_piles(),
            vec![catalog::PROVINCE, catalog::MOAT]
        );
    }

    #[test]
    #[should_panic(expected = "already empty")]
    fn test_deduct_from_empty_pile_panics() {
        let catalog = Catalog::base_set();
        let mut supply = Supply::standard(&catalog, 2);
        for _ in 0..9 {
            supply.deduct_for_purchase(catalog::PROVINCE);
        }
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_duplicate_pile_panics() {
        let catalog = Catalog::base_set();
        let mut supply = Supply::standard(&catalog, 2);
        let copper = catalog.get_unchecked(catalog::COPPER).clone();
        supply.add_pile(&copper, 5);
    }

    #[test]
    fn test_supply_serde_round_trip() {
        let catalog = Catalog::base_set();
        let mut supply = Supply::standard(&catalog, 2);
        supply.deduct_for_purchase(catalog::COPPER);

        let json = serde_json::to_string(&supply).unwrap();
        let restored: Supply = serde_json::from_str(&json).unwrap();
        assert_eq!(supply, restored);
    }
}
