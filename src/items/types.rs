use std::fmt;

use crate::character::Character;
use crate::core::events::GameEvent;

/// What happens when an item is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Restores the user to full health, consuming one charge.
    Potion,
    /// Flavor item; using it only shows the description.
    Relic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Stable identifier used for lookup and stacking (e.g. `spotion`).
    pub uuid: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub amount: u32,
    pub max_amount: u32,
    pub kind: ItemKind,
}

impl Item {
    /// Creates a single, non-stackable item.
    pub fn new(uuid: &str, name: &str, description: &str, icon: &str, kind: ItemKind) -> Self {
        Self {
            uuid: uuid.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            amount: 1,
            max_amount: 1,
            kind,
        }
    }

    pub fn with_stack(mut self, amount: u32, max_amount: u32) -> Self {
        self.amount = amount;
        self.max_amount = max_amount;
        self
    }

    pub fn is_stackable(&self) -> bool {
        self.max_amount > 1
    }

    pub fn is_depleted(&self) -> bool {
        self.amount == 0
    }

    /// Applies the item's effect to `user`. Returns true once the item is used up.
    pub fn use_on(&mut self, user: &mut Character, events: &mut Vec<GameEvent>) -> bool {
        match self.kind {
            ItemKind::Potion => {
                user.set_health(user.health_max());
                events.push(GameEvent::HealthRestored {
                    name: user.name().to_string(),
                });
                self.consume_one()
            }
            ItemKind::Relic => {
                events.push(GameEvent::ItemDescribed {
                    icon: self.icon.clone(),
                    name: self.name.clone(),
                    description: self.description.clone(),
                });
                false
            }
        }
    }

    /// Called right before a non-stackable item leaves the inventory.
    pub fn on_remove(&self, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::ItemDiscarded {
            icon: self.icon.clone(),
            name: self.name.clone(),
        });
    }

    fn consume_one(&mut self) -> bool {
        self.amount = self.amount.saturating_sub(1);
        self.is_depleted()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)?;
        if self.is_stackable() {
            write!(f, " x{}", self.amount)?;
        }
        write!(f, " [{}]: {}", self.uuid, self.description)
    }
}
