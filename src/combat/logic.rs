//! Turn-based encounter between the hero and one enemy.
//!
//! Every transition is pure: it takes the hero, the config and an RNG, moves
//! the phase forward and pushes [`GameEvent`]s. Prompting and printing live
//! in the UI layer.

use log::{debug, info, warn};
use rand::Rng;

use super::types::{CombatPhase, CombatResolution};
use crate::actions::{perform_action, ActionKind, ActionOutcome};
use crate::character::{ActorState, Enemy, Hero};
use crate::core::combat_math::{roll_chance, roll_range_u32};
use crate::core::config::GameConfig;
use crate::core::constants::SPELLBOOK_ID;
use crate::core::events::GameEvent;
use crate::items::catalog;

#[derive(Debug, Clone)]
pub struct Combat {
    enemy: Enemy,
    phase: CombatPhase,
    turn: u32,
    starting_health: i32,
}

impl Combat {
    pub fn new(enemy: Enemy) -> Self {
        Self {
            enemy,
            phase: CombatPhase::AwaitingFight,
            turn: 0,
            starting_health: 0,
        }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    /// Current turn, starting at 1 once the fight begins.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn resolution(&self) -> Option<CombatResolution> {
        match self.phase {
            CombatPhase::Resolved(resolution) => Some(resolution),
            _ => None,
        }
    }

    /// The hero accepts the fight.
    pub fn engage(&mut self, hero: &mut Hero) {
        if self.phase != CombatPhase::AwaitingFight {
            warn!("engage called in {:?}", self.phase);
            return;
        }

        hero.set_state(ActorState::InCombat);
        self.enemy.character.set_state(ActorState::InCombat);
        self.starting_health = hero.health();
        self.turn = 1;
        self.phase = CombatPhase::HeroTurn;
        info!("{} engages {}", hero.name(), self.enemy.name());
    }

    /// The hero walks away; there is a chance of finding a potion on the way.
    pub fn decline(
        &mut self,
        hero: &Hero,
        config: &GameConfig,
        rng: &mut impl Rng,
        events: &mut Vec<GameEvent>,
    ) -> CombatResolution {
        if self.phase != CombatPhase::AwaitingFight {
            warn!("decline called in {:?}", self.phase);
            return self.resolution().unwrap_or(CombatResolution::Fled);
        }

        events.push(GameEvent::FightDeclined {
            hero: hero.name().to_string(),
        });

        let potion_found = roll_chance(config.chances.potion_find, rng);
        if potion_found {
            events.push(GameEvent::PotionFound {
                hero: hero.name().to_string(),
            });
        }

        let resolution = CombatResolution::Declined { potion_found };
        self.phase = CombatPhase::Resolved(resolution);
        resolution
    }

    /// Runs one hero action.
    ///
    /// `NoOp` leaves the hero on the same turn. `Continue` hands the turn to
    /// the enemy. `End` is a successful flee and resolves the fight at once.
    pub fn hero_action(
        &mut self,
        hero: &mut Hero,
        action: ActionKind,
        item: Option<&str>,
        config: &GameConfig,
        rng: &mut impl Rng,
        events: &mut Vec<GameEvent>,
    ) -> ActionOutcome {
        if self.phase != CombatPhase::HeroTurn {
            warn!("hero_action called in {:?}", self.phase);
            return ActionOutcome::NoOp;
        }
        if !hero.character.has_action(action) || !action.can_perform(&hero.character) {
            events.push(GameEvent::InvalidAction {
                token: action.token().to_string(),
            });
            return ActionOutcome::NoOp;
        }

        let outcome = action.perform(hero, Some(&mut self.enemy), item, config, rng, events);
        match outcome {
            ActionOutcome::NoOp => {}
            ActionOutcome::Continue => self.phase = CombatPhase::EnemyTurn,
            ActionOutcome::End => {
                hero.set_state(ActorState::Idle);
                self.enemy.character.set_state(ActorState::Idle);
                self.phase = CombatPhase::Resolved(CombatResolution::Fled);
            }
        }
        outcome
    }

    /// The enemy strikes back, or the fight is won if it already fell.
    pub fn enemy_turn(
        &mut self,
        hero: &mut Hero,
        config: &GameConfig,
        rng: &mut impl Rng,
        events: &mut Vec<GameEvent>,
    ) -> CombatPhase {
        if self.phase != CombatPhase::EnemyTurn {
            warn!("enemy_turn called in {:?}", self.phase);
            return self.phase;
        }

        if !self.enemy.alive() {
            return self.finish_victory(hero, config, rng, events);
        }

        perform_action(
            &mut self.enemy,
            ActionKind::Attack.token(),
            Some(&mut *hero),
            config,
            rng,
            events,
        );

        if !hero.alive() {
            debug!("{} fell on turn {}", hero.name(), self.turn);
            events.push(GameEvent::HeroDied {
                name: hero.name().to_string(),
            });
            self.phase = CombatPhase::Resolved(CombatResolution::Defeat);
            return self.phase;
        }

        self.turn += 1;
        self.phase = CombatPhase::HeroTurn;
        self.phase
    }

    fn finish_victory(
        &mut self,
        hero: &mut Hero,
        config: &GameConfig,
        rng: &mut impl Rng,
        events: &mut Vec<GameEvent>,
    ) -> CombatPhase {
        let damage_taken = self.starting_health - hero.health();
        let xp_gained = roll_range_u32(config.hero.xp_gain_range, rng);
        hero.add_experience(xp_gained);
        hero.set_state(ActorState::Idle);
        self.enemy.character.set_state(ActorState::Idle);

        events.push(GameEvent::Victory {
            enemy: self.enemy.name().to_string(),
            damage_taken,
            xp_gained,
        });

        // Spellbook holders are rewarded with super-potions
        let mut super_potion_found = false;
        if hero.has_item(SPELLBOOK_ID) && roll_chance(config.chances.super_potion_find, rng) {
            let potion = catalog::super_potion(&config.items);
            let (icon, name) = (potion.icon.clone(), potion.name.clone());
            if hero.receive_item(potion, events) {
                super_potion_found = true;
                events.push(GameEvent::ItemFound {
                    hero: hero.name().to_string(),
                    icon,
                    name,
                });
            }
        }

        info!(
            "{} defeated {} in {} turns (+{xp_gained} xp)",
            hero.name(),
            self.enemy.name(),
            self.turn
        );
        self.phase = CombatPhase::Resolved(CombatResolution::Victory {
            damage_taken,
            xp_gained,
            super_potion_found,
        });
        self.phase
    }
}
