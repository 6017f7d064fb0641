use log::{debug, trace};
use rand::Rng;

use super::types::{ActionKind, ActionOutcome};
use crate::character::{attack, ActorState, Character, Combatant};
use crate::core::combat_math::roll_chance;
use crate::core::config::GameConfig;
use crate::core::events::GameEvent;

impl ActionKind {
    /// Whether `actor` may take this action in its current state.
    pub fn can_perform(&self, actor: &Character) -> bool {
        match self {
            ActionKind::Attack | ActionKind::Flee => actor.state() == ActorState::InCombat,
            ActionKind::UseItem => true,
            ActionKind::Continue => actor.state() == ActorState::Idle,
        }
    }

    /// Runs the action's effect.
    ///
    /// `target` is the opponent for attacks; `item` is the identifier picked
    /// at the item prompt for [`ActionKind::UseItem`]. Eligibility is not
    /// rechecked here; see [`perform_action`].
    pub fn perform<A, T, R>(
        &self,
        actor: &mut A,
        target: Option<&mut T>,
        item: Option<&str>,
        config: &GameConfig,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) -> ActionOutcome
    where
        A: Combatant,
        T: Combatant,
        R: Rng,
    {
        match self {
            ActionKind::Attack => match target {
                Some(target) => {
                    attack(&*actor, target, &config.chances, rng, events);
                    ActionOutcome::Continue
                }
                None => {
                    events.push(GameEvent::AttackFailed);
                    ActionOutcome::NoOp
                }
            },
            ActionKind::Flee => {
                let name = actor.character().name().to_string();
                if roll_chance(actor.character().flee_chance, rng) {
                    debug!("{name} fled");
                    events.push(GameEvent::Fled { name });
                    ActionOutcome::End
                } else {
                    events.push(GameEvent::FleeFailed { name });
                    ActionOutcome::Continue
                }
            }
            ActionKind::UseItem => {
                if let Some(uuid) = item {
                    actor.use_item(uuid, events);
                }
                ActionOutcome::NoOp
            }
            ActionKind::Continue => ActionOutcome::End,
        }
    }
}

/// Actions from `actor`'s table it may take right now, in menu order.
pub fn eligible_actions(actor: &Character) -> Vec<ActionKind> {
    actor
        .actions()
        .iter()
        .copied()
        .filter(|action| action.can_perform(actor))
        .collect()
}

/// Maps typed input to an eligible action: either its token or its 1-based
/// position in the eligible list.
pub fn resolve_choice(actor: &Character, input: &str) -> Option<ActionKind> {
    let eligible = eligible_actions(actor);
    let input = input.trim();

    if let Ok(index) = input.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| eligible.get(i).copied());
    }

    ActionKind::from_token(input).filter(|kind| eligible.contains(kind))
}

/// Looks up `input` in the actor's table and performs it.
///
/// Unknown or ineligible input reports an invalid action and changes nothing.
pub fn perform_action<A, T, R>(
    actor: &mut A,
    input: &str,
    target: Option<&mut T>,
    config: &GameConfig,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> ActionOutcome
where
    A: Combatant,
    T: Combatant,
    R: Rng,
{
    let Some(action) = resolve_choice(actor.character(), input) else {
        trace!("rejected action input {input:?}");
        events.push(GameEvent::InvalidAction {
            token: input.trim().to_string(),
        });
        return ActionOutcome::NoOp;
    };

    action.perform(actor, target, None, config, rng, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Enemy, Hero};
    use crate::items::catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fighting_pair(config: &GameConfig) -> (Hero, Enemy) {
        let mut hero = Hero::new("Ayla", config);
        hero.set_state(ActorState::InCombat);
        let mut goblin = Enemy::new("Zorg", "👺", 100, 15);
        goblin.character.set_state(ActorState::InCombat);
        (hero, goblin)
    }

    #[test]
    fn test_eligibility_by_state() {
        let config = GameConfig::default();
        let mut hero = Hero::new("Ayla", &config);

        assert_eq!(
            eligible_actions(&hero.character),
            vec![ActionKind::UseItem, ActionKind::Continue]
        );

        hero.set_state(ActorState::InCombat);
        assert_eq!(
            eligible_actions(&hero.character),
            vec![ActionKind::Attack, ActionKind::Flee, ActionKind::UseItem]
        );
    }

    #[test]
    fn test_enemy_table_only_attacks() {
        let mut goblin = Enemy::new("Zorg", "👺", 100, 15);
        assert!(eligible_actions(&goblin.character).is_empty());
        goblin.character.set_state(ActorState::InCombat);
        assert_eq!(eligible_actions(&goblin.character), vec![ActionKind::Attack]);
    }

    #[test]
    fn test_resolve_choice_by_token_and_number() {
        let config = GameConfig::default();
        let (hero, _) = fighting_pair(&config);

        assert_eq!(resolve_choice(&hero.character, "attack"), Some(ActionKind::Attack));
        assert_eq!(resolve_choice(&hero.character, "2"), Some(ActionKind::Flee));
        assert_eq!(resolve_choice(&hero.character, "3"), Some(ActionKind::UseItem));
        assert_eq!(resolve_choice(&hero.character, "4"), None);
        assert_eq!(resolve_choice(&hero.character, "0"), None);
        // Continue is in the table but not while fighting
        assert_eq!(resolve_choice(&hero.character, "continue"), None);
    }

    #[test]
    fn test_attack_hits_target() {
        let mut config = GameConfig::default();
        config.chances.crit = 0;
        let (mut hero, mut goblin) = fighting_pair(&config);
        hero.character.crit_chance = 0;
        let mut rng = StdRng::seed_from_u64(31);
        let mut events = Vec::new();

        let outcome = perform_action(&mut hero, "attack", Some(&mut goblin), &config, &mut rng, &mut events);

        assert_eq!(outcome, ActionOutcome::Continue);
        assert_eq!(goblin.character.health(), 80);
    }

    #[test]
    fn test_attack_without_target_is_noop() {
        let config = GameConfig::default();
        let (mut hero, _) = fighting_pair(&config);
        let mut rng = StdRng::seed_from_u64(32);
        let mut events = Vec::new();

        let outcome = ActionKind::Attack.perform(
            &mut hero,
            None::<&mut Enemy>,
            None,
            &config,
            &mut rng,
            &mut events,
        );

        assert_eq!(outcome, ActionOutcome::NoOp);
        assert_eq!(events, vec![GameEvent::AttackFailed]);
    }

    #[test]
    fn test_flee_certain_and_impossible() {
        let config = GameConfig::default();
        let (mut hero, mut goblin) = fighting_pair(&config);
        let mut rng = StdRng::seed_from_u64(33);

        hero.character.flee_chance = 100;
        let outcome = perform_action(&mut hero, "flee", Some(&mut goblin), &config, &mut rng, &mut Vec::new());
        assert_eq!(outcome, ActionOutcome::End);

        hero.character.flee_chance = 0;
        let mut events = Vec::new();
        let outcome = perform_action(&mut hero, "flee", Some(&mut goblin), &config, &mut rng, &mut events);
        assert_eq!(outcome, ActionOutcome::Continue);
        assert_eq!(
            events,
            vec![GameEvent::FleeFailed {
                name: "Ayla".to_string()
            }]
        );
    }

    #[test]
    fn test_flee_rate_over_hundred_attempts() {
        let config = GameConfig::default();
        let (mut hero, mut goblin) = fighting_pair(&config);
        let mut rng = StdRng::seed_from_u64(34);

        let mut fled = 0;
        let mut stayed = 0;
        for _ in 0..100 {
            match perform_action(&mut hero, "flee", Some(&mut goblin), &config, &mut rng, &mut Vec::new()) {
                ActionOutcome::End => fled += 1,
                ActionOutcome::Continue => stayed += 1,
                ActionOutcome::NoOp => panic!("flee never re-prompts"),
            }
        }

        assert_eq!(fled + stayed, 100);
        assert!((12..=38).contains(&fled), "fled = {fled}");
    }

    #[test]
    fn test_use_item_keeps_turn() {
        let config = GameConfig::default();
        let (mut hero, _) = fighting_pair(&config);
        hero.character.set_health(30);
        hero.inventory.add(catalog::super_potion(&config.items));
        let mut rng = StdRng::seed_from_u64(35);

        let outcome = ActionKind::UseItem.perform(
            &mut hero,
            None::<&mut Enemy>,
            Some("spotion"),
            &config,
            &mut rng,
            &mut Vec::new(),
        );

        assert_eq!(outcome, ActionOutcome::NoOp);
        assert_eq!(hero.health(), 100);
        assert!(!hero.has_item("spotion"));
    }

    #[test]
    fn test_continue_only_when_idle() {
        let config = GameConfig::default();
        let mut hero = Hero::new("Ayla", &config);
        let mut rng = StdRng::seed_from_u64(36);

        let outcome = perform_action(&mut hero, "continue", None::<&mut Enemy>, &config, &mut rng, &mut Vec::new());
        assert_eq!(outcome, ActionOutcome::End);

        hero.set_state(ActorState::InCombat);
        let mut events = Vec::new();
        let outcome = perform_action(&mut hero, "continue", None::<&mut Enemy>, &config, &mut rng, &mut events);
        assert_eq!(outcome, ActionOutcome::NoOp);
        assert_eq!(
            events,
            vec![GameEvent::InvalidAction {
                token: "continue".to_string()
            }]
        );
    }

    #[test]
    fn test_unknown_input_is_invalid() {
        let config = GameConfig::default();
        let (mut hero, mut goblin) = fighting_pair(&config);
        let mut rng = StdRng::seed_from_u64(37);
        let mut events = Vec::new();

        let outcome = perform_action(&mut hero, " dance ", Some(&mut goblin), &config, &mut rng, &mut events);

        assert_eq!(outcome, ActionOutcome::NoOp);
        assert_eq!(goblin.character.health(), 100);
        assert_eq!(
            events,
            vec![GameEvent::InvalidAction {
                token: "dance".to_string()
            }]
        );
    }
}
