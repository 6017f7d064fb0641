//! Constructors for every item the dungeon hands out.

use super::types::{Item, ItemKind};
use crate::core::config::ItemConfig;
use crate::core::constants::{FIREBALL_ID, SPELLBOOK_ID, SUPER_POTION_ID};

pub fn super_potion(config: &ItemConfig) -> Item {
    Item::new(
        SUPER_POTION_ID,
        "Super-potion",
        "Restores the hero's health completely when used.",
        "⚗️",
        ItemKind::Potion,
    )
    .with_stack(1, config.super_potion_max_stack)
}

pub fn spellbook() -> Item {
    Item::new(
        SPELLBOOK_ID,
        "Spellbook",
        "An ancient tome imbued with magical knowledge.",
        "📔",
        ItemKind::Relic,
    )
}

pub fn fireball() -> Item {
    Item::new(
        FIREBALL_ID,
        "Fireball",
        "A devastating burst of fiery magic.",
        "🔥",
        ItemKind::Relic,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_potion_stacks_per_config() {
        let config = ItemConfig::default();
        let potion = super_potion(&config);
        assert_eq!(potion.uuid, "spotion");
        assert_eq!(potion.amount, 1);
        assert_eq!(potion.max_amount, 5);
        assert!(potion.is_stackable());
    }

    #[test]
    fn test_single_charge_super_potion() {
        let config = ItemConfig {
            super_potion_max_stack: 1,
            ..Default::default()
        };
        assert!(!super_potion(&config).is_stackable());
    }

    #[test]
    fn test_spellbook_and_fireball_are_relics() {
        assert_eq!(spellbook().kind, ItemKind::Relic);
        assert_eq!(fireball().kind, ItemKind::Relic);
        assert!(!spellbook().is_stackable());
    }
}
