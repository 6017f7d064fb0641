use log::debug;
use rand::Rng;

use super::combatant::Combatant;
use super::stats::{ActorState, Character};
use crate::actions::ActionKind;
use crate::core::combat_math::roll_dodge;
use crate::core::config::{ChanceConfig, GameConfig};
use crate::core::events::GameEvent;
use crate::items::{Inventory, Item};

/// The player's character: stats plus experience, dodge and a backpack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub character: Character,
    pub dodge_chance: u32,
    pub inventory: Inventory,
    experience: u32,
}

impl Hero {
    pub const ACTIONS: [ActionKind; 4] = [
        ActionKind::Attack,
        ActionKind::Flee,
        ActionKind::UseItem,
        ActionKind::Continue,
    ];

    pub fn new(name: &str, config: &GameConfig) -> Self {
        let character = Character::new(name, &config.hero.icon, config.hero.health, config.hero.damage)
            .with_chances(config.chances.crit, config.chances.flee)
            .with_actions(&Self::ACTIONS);

        Self {
            character,
            dodge_chance: config.hero.dodge_chance,
            inventory: Inventory::new(config.items.inventory_capacity),
            experience: 0,
        }
    }

    pub fn name(&self) -> &str {
        self.character.name()
    }

    pub fn alive(&self) -> bool {
        self.character.alive()
    }

    pub fn health(&self) -> i32 {
        self.character.health()
    }

    pub fn state(&self) -> ActorState {
        self.character.state()
    }

    pub fn set_state(&mut self, state: ActorState) {
        self.character.set_state(state);
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn add_experience(&mut self, amount: u32) {
        self.experience += amount;
        debug!("{} gained {amount} xp, now {}", self.name(), self.experience);
    }

    pub fn has_item(&self, uuid: &str) -> bool {
        self.inventory.contains(uuid)
    }

    /// Puts an item in the backpack, reporting whether it fit.
    pub fn receive_item(&mut self, item: Item, events: &mut Vec<GameEvent>) -> bool {
        let icon = item.icon.clone();
        let name = item.name.clone();
        let stored = self.inventory.add(item);
        if !stored {
            events.push(GameEvent::InventoryFull { icon, name });
        }
        stored
    }
}

impl Combatant for Hero {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    fn pre_damage(&mut self, chances: &ChanceConfig, rng: &mut impl Rng) -> bool {
        roll_dodge(chances.dodge_rule, self.dodge_chance, rng)
    }

    fn use_item(&mut self, uuid: &str, events: &mut Vec<GameEvent>) -> bool {
        self.inventory.use_item(uuid, &mut self.character, events)
    }
}
