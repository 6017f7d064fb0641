//! Attack resolution between any two combatants.

use log::debug;
use rand::Rng;

use super::stats::Character;
use crate::core::combat_math::{crit_damage, roll_chance};
use crate::core::config::ChanceConfig;
use crate::core::events::GameEvent;

/// Anything that can trade blows.
pub trait Combatant {
    fn character(&self) -> &Character;

    fn character_mut(&mut self) -> &mut Character;

    /// Runs right before a hit lands. Returning true negates the hit.
    fn pre_damage(&mut self, _chances: &ChanceConfig, _rng: &mut impl Rng) -> bool {
        false
    }

    /// Uses an item from this combatant's inventory, if it has one.
    fn use_item(&mut self, uuid: &str, events: &mut Vec<GameEvent>) -> bool {
        events.push(GameEvent::UnknownItem {
            uuid: uuid.to_string(),
        });
        false
    }
}

/// Result of one swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackReport {
    /// Damage rolled, after the crit multiplier; zero was applied if dodged.
    pub damage: i32,
    pub critical: bool,
    pub dodged: bool,
}

/// `attacker` swings at `target`: roll crit, give the target its avoidance
/// hook, then subtract health.
pub fn attack(
    attacker: &impl Combatant,
    target: &mut impl Combatant,
    chances: &ChanceConfig,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) -> AttackReport {
    let striker = attacker.character();
    let mut damage = striker.damage();
    let critical = roll_chance(striker.crit_chance, rng);
    if critical {
        damage = crit_damage(damage, chances.crit_multiplier);
    }

    if target.pre_damage(chances, rng) {
        debug!("{} dodged {}", target.character().name(), striker.name());
        events.push(GameEvent::Dodged {
            name: target.character().name().to_string(),
        });
        return AttackReport {
            damage,
            critical,
            dodged: true,
        };
    }

    let victim = target.character_mut();
    let remaining = victim.health() - damage;
    victim.set_health(remaining);
    debug!(
        "{} hit {} for {damage} (crit: {critical}), {} hp left",
        striker.name(),
        victim.name(),
        victim.health()
    );

    events.push(GameEvent::Attack {
        attacker: striker.name().to_string(),
        target: victim.name().to_string(),
        target_icon: victim.icon().to_string(),
        damage,
        critical,
    });

    AttackReport {
        damage,
        critical,
        dodged: false,
    }
}
