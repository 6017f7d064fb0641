//! Fixed-capacity hero inventory.

use log::{debug, trace};

use super::types::Item;
use crate::character::Character;
use crate::core::constants::INVENTORY_CAPACITY;
use crate::core::events::GameEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(INVENTORY_CAPACITY)
    }
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds an item, stacking onto a matching slot when there is room.
    ///
    /// Returns false when the inventory is full; the item is dropped.
    pub fn add(&mut self, item: Item) -> bool {
        if item.is_stackable() {
            if let Some(slot) = self
                .items
                .iter_mut()
                .find(|slot| slot.uuid == item.uuid && slot.amount + item.amount <= slot.max_amount)
            {
                slot.amount += item.amount;
                debug!("stacked {} -> x{}", slot.uuid, slot.amount);
                return true;
            }
        }

        if self.is_full() {
            debug!("inventory full, cannot add {}", item.uuid);
            return false;
        }

        debug!("added {} to slot {}", item.uuid, self.items.len());
        self.items.push(item);
        true
    }

    pub fn find(&self, uuid: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.uuid == uuid)
    }

    pub fn contains(&self, uuid: &str) -> bool {
        self.find(uuid).is_some()
    }

    /// Removes `amount` units of an item.
    ///
    /// Stackable slots shrink and are deleted at zero; the deleted item is
    /// returned, a partial removal returns `None`. Non-stackable items are
    /// removed outright after their on-remove hook runs.
    pub fn remove(&mut self, uuid: &str, amount: u32, events: &mut Vec<GameEvent>) -> Option<Item> {
        let index = self.position(uuid)?;
        let slot = &mut self.items[index];

        if slot.is_stackable() {
            slot.amount = slot.amount.saturating_sub(amount);
            trace!("removed {amount} of {uuid}, {} left", slot.amount);
            if slot.is_depleted() {
                return Some(self.items.remove(index));
            }
            return None;
        }

        slot.on_remove(events);
        Some(self.items.remove(index))
    }

    /// Uses an item on `user`, deleting its slot once it is used up.
    ///
    /// Returns false when no item with `uuid` is held.
    pub fn use_item(
        &mut self,
        uuid: &str,
        user: &mut Character,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        let Some(index) = self.position(uuid) else {
            events.push(GameEvent::UnknownItem {
                uuid: uuid.to_string(),
            });
            return false;
        };

        if self.items[index].use_on(user, events) {
            let spent = self.items.remove(index);
            debug!("{} used up", spent.uuid);
        }
        true
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn position(&self, uuid: &str) -> Option<usize> {
        self.items.iter().position(|item| item.uuid == uuid)
    }
}
