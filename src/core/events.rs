//! Narrative events produced by the pure game logic.
//!
//! Engines push events instead of printing; the UI layer turns each one into
//! a line of text. This keeps the logic testable without a terminal.

/// Something that happened and should be told to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A blow landed.
    Attack {
        attacker: String,
        target: String,
        target_icon: String,
        damage: i32,
        critical: bool,
    },
    /// The target dodged an incoming blow.
    Dodged { name: String },
    /// Attack was chosen with no one to hit.
    AttackFailed,
    /// The typed token is not an action this actor can take right now.
    InvalidAction { token: String },
    Fled { name: String },
    FleeFailed { name: String },
    /// A potion set health back to max.
    HealthRestored { name: String },
    /// A flavor item was used; it only shows its text.
    ItemDescribed {
        icon: String,
        name: String,
        description: String,
    },
    /// A non-stackable item left the inventory.
    ItemDiscarded { icon: String, name: String },
    ItemFound {
        hero: String,
        icon: String,
        name: String,
    },
    SpellLearned {
        hero: String,
        icon: String,
        name: String,
    },
    InventoryFull { icon: String, name: String },
    UnknownItem { uuid: String },
    /// The hero walked away from a fight.
    FightDeclined { hero: String },
    Victory {
        enemy: String,
        damage_taken: i32,
        xp_gained: u32,
    },
    HeroDied { name: String },
    /// An unlabelled potion turned up after avoiding a fight.
    PotionFound { hero: String },
    PotionDrunk { effect: i32 },
    PotionRefused { hero: String },
}
