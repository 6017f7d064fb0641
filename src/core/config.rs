//! Game configuration.
//!
//! Every tunable the engines read lives in one immutable [`GameConfig`]. The
//! defaults reproduce the stock game; a TOML file can override any subset:
//!
//! ```toml
//! game_speed = 0.0
//!
//! [chances]
//! flee = 40
//! dodge_rule = "roll_at_most"
//!
//! [days]
//! max_days = 5
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use super::combat_math::DodgeRule;
use super::constants::*;
use super::error::{GameError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Multiplier applied to every pacing delay; 0 disables them.
    pub game_speed: f64,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    pub hero: HeroConfig,
    pub goblin: GoblinConfig,
    pub chances: ChanceConfig,
    pub days: DayConfig,
    pub items: ItemConfig,
    pub text: TextConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub icon: String,
    pub health: i32,
    pub damage: i32,
    pub dodge_chance: u32,
    /// Inclusive experience reward range for a won fight.
    pub xp_gain_range: (u32, u32),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GoblinConfig {
    pub icon: String,
    pub health: i32,
    pub damage: i32,
    pub names: Vec<String>,
}

/// Percent chances, each compared against a uniform roll in 1..=100.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChanceConfig {
    pub crit: u32,
    pub crit_multiplier: f64,
    pub flee: u32,
    pub dodge_rule: DodgeRule,
    pub potion_find: u32,
    pub super_potion_find: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DayConfig {
    pub max_days: u32,
    pub starting_day: u32,
    pub spellbook_day: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ItemConfig {
    pub inventory_capacity: usize,
    /// Inclusive health change range of a found (unlabelled) potion.
    pub potion_effect_range: (i32, i32),
    pub super_potion_max_stack: u32,
    /// Experience needed before the spellbook teaches Fireball.
    pub fireball_xp: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub title: String,
    pub start_templates: Vec<String>,
    pub move_templates: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_speed: GAME_SPEED,
            seed: None,
            hero: HeroConfig::default(),
            goblin: GoblinConfig::default(),
            chances: ChanceConfig::default(),
            days: DayConfig::default(),
            items: ItemConfig::default(),
            text: TextConfig::default(),
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            icon: HERO_ICON.to_string(),
            health: HERO_HEALTH,
            damage: HERO_DAMAGE,
            dodge_chance: HERO_DODGE_CHANCE,
            xp_gain_range: HERO_XP_GAIN_RANGE,
        }
    }
}

impl Default for GoblinConfig {
    fn default() -> Self {
        Self {
            icon: GOBLIN_ICON.to_string(),
            health: GOBLIN_HEALTH,
            damage: GOBLIN_DAMAGE,
            names: GOBLIN_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for ChanceConfig {
    fn default() -> Self {
        Self {
            crit: CRIT_CHANCE,
            crit_multiplier: CRIT_MULTIPLIER,
            flee: FLEE_CHANCE,
            dodge_rule: DodgeRule::default(),
            potion_find: POTION_FIND_CHANCE,
            super_potion_find: SUPER_POTION_FIND_CHANCE,
        }
    }
}

impl Default for DayConfig {
    fn default() -> Self {
        Self {
            max_days: MAX_DAYS,
            starting_day: STARTING_DAY,
            spellbook_day: SPELLBOOK_DAY,
        }
    }
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            inventory_capacity: INVENTORY_CAPACITY,
            potion_effect_range: POTION_EFFECT_RANGE,
            super_potion_max_stack: SUPER_POTION_MAX_STACK,
            fireball_xp: FIREBALL_XP,
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            title: GAME_TITLE.to_string(),
            start_templates: START_TEMPLATES.iter().map(|s| s.to_string()).collect(),
            move_templates: MOVE_TEMPLATES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GameConfig {
    /// Reads, parses and validates a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Quick config for headless runs: no pacing delays.
    pub fn instant() -> Self {
        Self {
            game_speed: 0.0,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        fn percent(name: &str, value: u32, max: u32) -> Result<()> {
            if value > max {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be within 0..={max}, got {value}"
                )));
            }
            Ok(())
        }

        percent("chances.crit", self.chances.crit, 100)?;
        percent("chances.flee", self.chances.flee, 100)?;
        percent("chances.potion_find", self.chances.potion_find, 100)?;
        percent("chances.super_potion_find", self.chances.super_potion_find, 100)?;
        // 101 lets the roll-at-least rule express "never dodges"
        percent("hero.dodge_chance", self.hero.dodge_chance, 101)?;

        if !(self.game_speed >= 0.0 && self.game_speed.is_finite()) {
            return Err(GameError::InvalidConfig(format!(
                "game_speed must be a finite non-negative number, got {}",
                self.game_speed
            )));
        }
        if !(self.chances.crit_multiplier >= 1.0 && self.chances.crit_multiplier.is_finite()) {
            return Err(GameError::InvalidConfig(format!(
                "chances.crit_multiplier must be at least 1.0, got {}",
                self.chances.crit_multiplier
            )));
        }

        let (xp_min, xp_max) = self.hero.xp_gain_range;
        if xp_min > xp_max {
            return Err(GameError::InvalidConfig(format!(
                "hero.xp_gain_range is reversed: ({xp_min}, {xp_max})"
            )));
        }
        let (fx_min, fx_max) = self.items.potion_effect_range;
        if fx_min > fx_max {
            return Err(GameError::InvalidConfig(format!(
                "items.potion_effect_range is reversed: ({fx_min}, {fx_max})"
            )));
        }

        if self.hero.health <= 0 || self.goblin.health <= 0 {
            return Err(GameError::InvalidConfig(
                "hero.health and goblin.health must be positive".to_string(),
            ));
        }
        if self.items.inventory_capacity == 0 {
            return Err(GameError::InvalidConfig(
                "items.inventory_capacity must be at least 1".to_string(),
            ));
        }
        if self.items.super_potion_max_stack == 0 {
            return Err(GameError::InvalidConfig(
                "items.super_potion_max_stack must be at least 1".to_string(),
            ));
        }
        if self.days.starting_day > self.days.max_days {
            return Err(GameError::InvalidConfig(format!(
                "days.starting_day ({}) is past days.max_days ({})",
                self.days.starting_day, self.days.max_days
            )));
        }

        if self.goblin.names.is_empty() {
            return Err(GameError::InvalidConfig(
                "goblin.names must not be empty".to_string(),
            ));
        }
        if self.text.start_templates.is_empty() || self.text.move_templates.is_empty() {
            return Err(GameError::InvalidConfig(
                "text templates must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_thresholds() {
        let config = GameConfig::default();
        assert_eq!(config.chances.crit, 50);
        assert_eq!(config.chances.flee, 25);
        assert_eq!(config.hero.dodge_chance, 50);
        assert_eq!(config.chances.potion_find, 50);
        assert_eq!(config.chances.super_potion_find, 100);
        assert_eq!(config.items.inventory_capacity, 5);
        assert_eq!(config.days.max_days, 10);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            game_speed = 0.0

            [chances]
            flee = 40
            dodge_rule = "roll_at_most"

            [hero]
            xp_gain_range = [1, 2]
            "#,
        )
        .unwrap();

        assert_eq!(config.game_speed, 0.0);
        assert_eq!(config.chances.flee, 40);
        assert_eq!(config.chances.dodge_rule, DodgeRule::RollAtMost);
        assert_eq!(config.chances.crit, 50);
        assert_eq!(config.hero.xp_gain_range, (1, 2));
        assert_eq!(config.hero.health, 100);
        assert_eq!(config.goblin.names.len(), 20);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_rejects_out_of_range_chance() {
        let err = GameConfig::from_toml_str("[chances]\ncrit = 150\n").unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_reversed_range() {
        let err = GameConfig::from_toml_str("[hero]\nxp_gain_range = [30, 15]\n").unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_empty_name_table() {
        let err = GameConfig::from_toml_str("[goblin]\nnames = []\n").unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = GameConfig::from_toml_str("game_speed = \"fast\"").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }
}
