//! Day progression and the item events between fights.

use log::{debug, info};
use rand::Rng;

use super::state::{GameState, RunOutcome};
use crate::character::Hero;
use crate::core::combat_math::roll_range_i32;
use crate::core::config::GameConfig;
use crate::core::constants::{FIREBALL_ID, SPELLBOOK_ID};
use crate::core::events::GameEvent;
use crate::items::catalog;

/// Starts the next day. Returns false once the last day has been played.
pub fn advance_day(state: &mut GameState, config: &GameConfig) -> bool {
    if state.day >= config.days.max_days {
        return false;
    }
    state.day += 1;
    info!("day {} begins", state.day);
    true
}

/// Spellbook delivery and Fireball learning, checked as each day closes.
pub fn end_of_day_events(state: &mut GameState, config: &GameConfig, events: &mut Vec<GameEvent>) {
    let hero = &mut state.hero;

    if state.day == config.days.spellbook_day {
        let book = catalog::spellbook();
        let (icon, name) = (book.icon.clone(), book.name.clone());
        if hero.receive_item(book, events) {
            events.push(GameEvent::ItemFound {
                hero: hero.name().to_string(),
                icon,
                name,
            });
        }
    }

    if hero.has_item(SPELLBOOK_ID)
        && !hero.has_item(FIREBALL_ID)
        && hero.experience() >= config.items.fireball_xp
    {
        let spell = catalog::fireball();
        let (icon, name) = (spell.icon.clone(), spell.name.clone());
        if hero.receive_item(spell, events) {
            events.push(GameEvent::SpellLearned {
                hero: hero.name().to_string(),
                icon,
                name,
            });
        }
    }
}

/// Drinks an unlabelled potion found in the dungeon.
///
/// The effect is random in the configured range; a spellbook holder always
/// gets the healing side. Returns the applied effect.
pub fn drink_found_potion(
    hero: &mut Hero,
    config: &GameConfig,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) -> i32 {
    let mut effect = roll_range_i32(config.items.potion_effect_range, rng);
    if hero.has_item(SPELLBOOK_ID) {
        effect = effect.abs();
    }

    let health = hero.health() + effect;
    hero.character.set_health(health);
    debug!("potion effect {effect:+}, health now {}", hero.health());
    events.push(GameEvent::PotionDrunk { effect });

    if !hero.alive() {
        events.push(GameEvent::HeroDied {
            name: hero.name().to_string(),
        });
    }
    effect
}

/// Verdict once every day has been played.
pub fn final_outcome(state: &GameState) -> RunOutcome {
    if state.hero.experience() > 0 {
        RunOutcome::Survived {
            experience: state.hero.experience(),
        }
    } else {
        RunOutcome::NoExperience { day: state.day }
    }
}
