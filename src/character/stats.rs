use crate::actions::ActionKind;
use crate::core::constants::{CRIT_CHANCE, FLEE_CHANCE};

/// Whether a character is currently fighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorState {
    #[default]
    Idle,
    InCombat,
}

/// Stats and action table shared by the hero and every enemy.
///
/// Health is only ever capped from above; a heavy blow may leave it negative
/// until the character is checked with [`Character::alive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    icon: String,
    health: i32,
    health_max: i32,
    damage: i32,
    pub crit_chance: u32,
    pub flee_chance: u32,
    state: ActorState,
    actions: Vec<ActionKind>,
}

impl Character {
    /// Starts at full health with the stock crit and flee chances and no actions.
    pub fn new(name: &str, icon: &str, health: i32, damage: i32) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            health,
            health_max: health,
            damage,
            crit_chance: CRIT_CHANCE,
            flee_chance: FLEE_CHANCE,
            state: ActorState::Idle,
            actions: Vec::new(),
        }
    }

    pub fn with_chances(mut self, crit_chance: u32, flee_chance: u32) -> Self {
        self.crit_chance = crit_chance;
        self.flee_chance = flee_chance;
        self
    }

    pub fn with_actions(mut self, actions: &[ActionKind]) -> Self {
        self.actions = actions.to_vec();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Stores `min(health, health_max)`.
    pub fn set_health(&mut self, health: i32) {
        self.health = health.min(self.health_max);
    }

    pub fn health_max(&self) -> i32 {
        self.health_max
    }

    pub fn set_health_max(&mut self, health_max: i32) {
        self.health_max = health_max;
        self.health = self.health.min(health_max);
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn set_damage(&mut self, damage: i32) {
        self.damage = damage;
    }

    pub fn alive(&self) -> bool {
        self.health > 0
    }

    pub fn state(&self) -> ActorState {
        self.state
    }

    pub fn set_state(&mut self, state: ActorState) {
        self.state = state;
    }

    /// The action table, in menu order.
    pub fn actions(&self) -> &[ActionKind] {
        &self.actions
    }

    pub fn has_action(&self, action: ActionKind) -> bool {
        self.actions.contains(&action)
    }
}
