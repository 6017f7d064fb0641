//! The interactive day loop, driving the pure engines through a [`Console`].

use log::{debug, info};
use rand::Rng;

use super::logic::{advance_day, drink_found_potion, end_of_day_events, final_outcome};
use super::state::{GameState, RunOutcome};
use crate::actions::{eligible_actions, resolve_choice, ActionKind, ActionOutcome};
use crate::character::{generate_goblin, Enemy, Hero};
use crate::combat::{Combat, CombatPhase, CombatResolution};
use crate::core::config::GameConfig;
use crate::core::constants::ITEM_PROMPT_DONE;
use crate::core::error::Result;
use crate::core::events::GameEvent;
use crate::ui::{self, render, Console, Theme};

const ACTION_PROMPT: &str = "\n> Choose an action: ";
const ITEM_PROMPT: &str = "\n> Item id to use, 'drop <id>' to discard, or 'continue': ";

/// Result of one playthrough.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub state: GameState,
    pub outcome: RunOutcome,
}

pub struct Game<C: Console, R: Rng> {
    console: C,
    rng: R,
    config: GameConfig,
    theme: Theme,
}

impl<C: Console, R: Rng> Game<C, R> {
    pub fn new(console: C, rng: R, config: GameConfig) -> Self {
        let theme = Theme::new(console.styled());
        Self {
            console,
            rng,
            config,
            theme,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays until the player quits at the end screen, returning the last run.
    pub fn run(&mut self) -> Result<RunReport> {
        loop {
            let report = self.play_once()?;
            info!("run ended: {:?}", report.outcome);

            self.console.clear()?;
            let lines = render::end_screen(&self.theme, report.state.hero.name(), &report.outcome);
            self.console.write_lines(&lines)?;

            if !ui::ask_play_again(&mut self.console)? {
                self.console.write_line("Thanks for playing! Exiting...")?;
                return Ok(report);
            }
        }
    }

    /// One playthrough, from the name prompt to death or the last day.
    pub fn play_once(&mut self) -> Result<RunReport> {
        let mut state = self.intro()?;

        while advance_day(&mut state, &self.config) {
            self.console.pause(0.5);
            self.console
                .write_lines(&render::banner(&format!(" ☀️ Day {} begins...", state.day)))?;
            self.console
                .write_lines(&render::hero_status(&self.theme, &state.hero))?;

            self.morning(&mut state.hero)?;
            self.console.pause(1.5);

            let flavor = ui::move_message(&self.config.text, &mut self.rng);
            self.console.write_line(&format!("\n{flavor}"))?;
            self.console.pause(1.5);

            self.encounter(&mut state.hero)?;
            if !state.hero.alive() {
                let day = state.day;
                return Ok(RunReport {
                    state,
                    outcome: RunOutcome::Died { day },
                });
            }

            let mut events = Vec::new();
            end_of_day_events(&mut state, &self.config, &mut events);
            self.show_events(&events)?;

            self.console.pause(1.0);
            self.console
                .write_lines(&render::banner(&format!(" 🌑 Day {} ends...", state.day)))?;
            ui::press_enter(&mut self.console, "to continue...")?;
            self.console.clear()?;
        }

        let outcome = final_outcome(&state);
        Ok(RunReport { state, outcome })
    }

    fn intro(&mut self) -> Result<GameState> {
        self.console.clear()?;
        self.console.write_line(&self.config.text.title)?;

        let name = ui::ask_hero_name(&mut self.console)?;
        let state = GameState::new(&name, &self.config);
        info!("new run for {name}");

        self.console.pause(1.0);
        let start = ui::start_message(&self.config.text, &name, &mut self.rng);
        self.console.write_line(&format!("\n{start}"))?;
        self.console.pause(1.0);

        ui::press_enter(&mut self.console, "to start")?;
        self.console.clear()?;
        Ok(state)
    }

    /// Idle menu before setting out: use items until the hero continues.
    fn morning(&mut self, hero: &mut Hero) -> Result<()> {
        loop {
            let actions = eligible_actions(&hero.character);
            self.console.write_line("")?;
            self.console
                .write_lines(&render::action_menu(&self.theme, &actions))?;

            let input = self.console.read_line(ACTION_PROMPT)?;
            match resolve_choice(&hero.character, &input) {
                Some(ActionKind::UseItem) => self.item_prompt(hero, None)?,
                Some(action) => {
                    let mut events = Vec::new();
                    let outcome = action.perform::<Hero, Enemy, R>(
                        hero,
                        None,
                        None,
                        &self.config,
                        &mut self.rng,
                        &mut events,
                    );
                    self.show_events(&events)?;
                    if outcome == ActionOutcome::End {
                        return Ok(());
                    }
                }
                None => self.show_event(&GameEvent::InvalidAction {
                    token: input.trim().to_string(),
                })?,
            }
        }
    }

    /// Item identifiers until the sentinel. Inside a fight each use goes
    /// through the combat engine so turn rules still apply.
    fn item_prompt(&mut self, hero: &mut Hero, mut combat: Option<&mut Combat>) -> Result<()> {
        loop {
            self.console.write_line("")?;
            self.console
                .write_lines(&render::inventory_lines(&hero.inventory))?;

            let input = self.console.read_line(ITEM_PROMPT)?;
            let input = input.trim();
            if input.eq_ignore_ascii_case(ITEM_PROMPT_DONE) {
                return Ok(());
            }

            let mut events = Vec::new();
            if let Some(uuid) = input.strip_prefix("drop ") {
                let uuid = uuid.trim();
                if hero.has_item(uuid) {
                    hero.inventory.remove(uuid, 1, &mut events);
                } else {
                    events.push(GameEvent::UnknownItem {
                        uuid: uuid.to_string(),
                    });
                }
            } else {
                match combat.as_deref_mut() {
                    Some(combat) => {
                        combat.hero_action(
                            hero,
                            ActionKind::UseItem,
                            Some(input),
                            &self.config,
                            &mut self.rng,
                            &mut events,
                        );
                    }
                    None => {
                        ActionKind::UseItem.perform::<Hero, Enemy, R>(
                            hero,
                            None,
                            Some(input),
                            &self.config,
                            &mut self.rng,
                            &mut events,
                        );
                    }
                }
            }
            self.show_events(&events)?;
        }
    }

    fn encounter(&mut self, hero: &mut Hero) -> Result<()> {
        let enemy = generate_goblin(&self.config, &mut self.rng);
        debug!("encounter with {}", enemy.name());

        self.console.write_line("")?;
        self.console.write_lines(&render::banner("⚠️ ENEMY ALERT"))?;
        self.console.write_line(&format!(
            "⚔️ {} encounters:",
            self.theme.bold(hero.name())
        ))?;
        self.console
            .write_lines(&render::character_status(&self.theme, &enemy.character))?;

        let mut combat = Combat::new(enemy);
        if ui::ask_yes_no(&mut self.console, "\n> 🤺 Fight? [Y/n] ")? {
            self.fight(hero, &mut combat)
        } else {
            self.avoid(hero, &mut combat)
        }
    }

    fn fight(&mut self, hero: &mut Hero, combat: &mut Combat) -> Result<()> {
        self.console.clear()?;
        combat.engage(hero);

        while !combat.phase().is_resolved() {
            self.console.pause(1.0);
            self.console.write_lines(&render::turn_header(combat.turn()))?;
            self.console
                .write_lines(&render::hero_status(&self.theme, hero))?;
            self.console.write_line("")?;
            self.console
                .write_lines(&render::character_status(&self.theme, &combat.enemy().character))?;
            self.console.write_line("")?;

            if self.hero_turn(hero, combat)? == ActionOutcome::End {
                return Ok(());
            }
            self.console.pause(1.5);

            let mut events = Vec::new();
            if !combat.enemy().alive() {
                ui::press_enter(&mut self.console, "to finish the fight")?;
                self.console.clear()?;
                combat.enemy_turn(hero, &self.config, &mut self.rng, &mut events);
                self.show_events(&events)?;
                continue;
            }

            self.console.write_line("")?;
            self.console.write_lines(&render::banner("👺 ENEMY'S TURN"))?;
            let phase = combat.enemy_turn(hero, &self.config, &mut self.rng, &mut events);
            self.show_events(&events)?;
            if phase == CombatPhase::Resolved(CombatResolution::Defeat) {
                return Ok(());
            }

            self.console.pause(0.5);
            ui::press_enter(&mut self.console, "to continue your next turn...")?;
            self.console.clear()?;
        }
        Ok(())
    }

    /// Prompts until the hero spends the turn or escapes.
    fn hero_turn(&mut self, hero: &mut Hero, combat: &mut Combat) -> Result<ActionOutcome> {
        self.console.write_lines(&render::banner("⚔️ HERO'S TURN"))?;
        let actions = eligible_actions(&hero.character);
        self.console
            .write_lines(&render::action_menu(&self.theme, &actions))?;

        loop {
            let input = self.console.read_line(ACTION_PROMPT)?;
            self.console.write_line("")?;
            self.console.pause(1.0);

            let Some(action) = resolve_choice(&hero.character, &input) else {
                self.show_event(&GameEvent::InvalidAction {
                    token: input.trim().to_string(),
                })?;
                continue;
            };

            if action == ActionKind::UseItem {
                self.item_prompt(hero, Some(&mut *combat))?;
                continue;
            }

            let mut events = Vec::new();
            let outcome =
                combat.hero_action(hero, action, None, &self.config, &mut self.rng, &mut events);
            self.show_events(&events)?;
            if outcome != ActionOutcome::NoOp {
                return Ok(outcome);
            }
        }
    }

    fn avoid(&mut self, hero: &mut Hero, combat: &mut Combat) -> Result<()> {
        let mut events = Vec::new();
        let resolution = combat.decline(hero, &self.config, &mut self.rng, &mut events);
        self.show_events(&events)?;

        if resolution != (CombatResolution::Declined { potion_found: true }) {
            return Ok(());
        }

        let drink = ui::ask_yes_no(
            &mut self.console,
            "    > Potion may be poisonous or healing. Consume it? [Y/n] ",
        )?;
        let mut events = Vec::new();
        if drink {
            drink_found_potion(hero, &self.config, &mut self.rng, &mut events);
        } else {
            events.push(GameEvent::PotionRefused {
                hero: hero.name().to_string(),
            });
        }
        self.show_events(&events)
    }

    fn show_event(&mut self, event: &GameEvent) -> Result<()> {
        let line = render::event_line(&self.theme, event);
        self.console.write_line(&line)
    }

    fn show_events(&mut self, events: &[GameEvent]) -> Result<()> {
        for event in events {
            self.show_event(event)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ScriptedConsole;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Two short days with no randomness in the fights.
    fn config() -> GameConfig {
        let mut config = GameConfig::instant();
        config.days.max_days = 2;
        config.chances.crit = 0;
        config.hero.dodge_chance = 101;
        config.chances.potion_find = 0;
        config
    }

    fn game(inputs: &[&str], config: GameConfig) -> Game<ScriptedConsole, StdRng> {
        Game::new(ScriptedConsole::new(inputs), StdRng::seed_from_u64(71), config)
    }

    #[test]
    fn test_avoid_every_fight_ends_without_experience() {
        let mut game = game(
            &[
                "Ayla", "", // name, start
                "continue", "n", "", // day 1
                "continue", "n", "", // day 2
                "q",
            ],
            config(),
        );

        let report = game.run().unwrap();

        assert_eq!(report.outcome, RunOutcome::NoExperience { day: 2 });
        assert_eq!(report.state.day, 2);
        let transcript = game.console().transcript();
        assert!(transcript.contains("Day 1 begins"));
        assert!(transcript.contains("Day 2 ends"));
        assert!(transcript.contains("reached day 2 with no experience"));
        assert!(transcript.ends_with("Thanks for playing! Exiting..."));
    }

    #[test]
    fn test_bad_menu_input_is_reported() {
        let mut config = config();
        config.days.max_days = 1;
        let mut game = game(&["Ayla", "", "dance", "9", "2", "n", "", "q"], config);

        game.run().unwrap();

        let transcript = game.console().transcript();
        assert!(transcript.contains("Invalid action: 'dance'"));
        assert!(transcript.contains("Invalid action: '9'"));
    }

    #[test]
    fn test_fight_through_to_victory() {
        let mut config = config();
        config.days.max_days = 1;
        let mut inputs = vec!["Ayla", "", "continue", "y"];
        // Four exchanges, then the killing blow
        for _ in 0..4 {
            inputs.extend(["attack", ""]);
        }
        inputs.extend(["1", "", "", "q"]);
        let mut game = game(&inputs, config);

        let report = game.run().unwrap();

        assert_eq!(report.state.hero.health(), 40);
        assert!(report.outcome.survived());
        let transcript = game.console().transcript();
        assert!(transcript.contains("TURN: 5"));
        assert!(transcript.contains("Damage taken: 60"));
        assert!(transcript.contains("press ENTER to finish the fight"));
    }

    #[test]
    fn test_closed_input_surfaces_as_error() {
        let mut game = game(&["Ayla"], config());
        assert!(game.run().is_err());
    }
}
