use rand::seq::SliceRandom;
use rand::Rng;

use super::combatant::Combatant;
use super::stats::Character;
use crate::actions::ActionKind;
use crate::core::config::GameConfig;

/// A non-player combatant. Its only action is attack, and it never dodges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub character: Character,
}

impl Enemy {
    pub fn new(name: &str, icon: &str, health: i32, damage: i32) -> Self {
        Self {
            character: Character::new(name, icon, health, damage).with_actions(&[ActionKind::Attack]),
        }
    }

    pub fn name(&self) -> &str {
        self.character.name()
    }

    pub fn alive(&self) -> bool {
        self.character.alive()
    }
}

impl Combatant for Enemy {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }
}

pub fn generate_goblin_name(config: &GameConfig, rng: &mut impl Rng) -> String {
    config
        .goblin
        .names
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| "Goblin".to_string())
}

/// Spawns a goblin with a random name and the configured stats.
pub fn generate_goblin(config: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let name = generate_goblin_name(config, rng);
    let mut goblin = Enemy::new(&name, &config.goblin.icon, config.goblin.health, config.goblin.damage);
    goblin.character.crit_chance = config.chances.crit;
    goblin.character.flee_chance = config.chances.flee;
    goblin
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_goblin_uses_config_stats() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(21);
        let goblin = generate_goblin(&config, &mut rng);

        assert_eq!(goblin.character.health(), 100);
        assert_eq!(goblin.character.damage(), 15);
        assert_eq!(goblin.character.icon(), "👺");
        assert!(config.goblin.names.iter().any(|n| n == goblin.name()));
        assert_eq!(goblin.character.actions(), &[ActionKind::Attack]);
    }

    #[test]
    fn test_goblin_names_vary() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(22);
        let first = generate_goblin_name(&config, &mut rng);
        let differs = (0..50).any(|_| generate_goblin_name(&config, &mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn test_enemy_never_dodges() {
        let mut goblin = Enemy::new("Zorg", "👺", 100, 15);
        let mut rng = StdRng::seed_from_u64(23);
        let chances = crate::core::config::ChanceConfig::default();
        assert!((0..100).all(|_| !goblin.pre_damage(&chances, &mut rng)));
    }
}
