//! Turns game state and [`GameEvent`]s into lines of narrative text.

use crossterm::style::{style, Stylize};

use crate::actions::ActionKind;
use crate::character::{Character, Hero};
use crate::core::events::GameEvent;
use crate::game::RunOutcome;
use crate::items::Inventory;

const RULE: &str = "============================";

/// Text styling switch; plain when output is not a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    pub styled: bool,
}

impl Theme {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.styled {
            style(text).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn banner(title: &str) -> Vec<String> {
    vec![RULE.to_string(), format!("      {title}"), RULE.to_string()]
}

pub fn turn_header(turn: u32) -> Vec<String> {
    vec![format!("        🕰️ TURN: {turn}"), RULE.to_string()]
}

pub fn character_status(theme: &Theme, character: &Character) -> Vec<String> {
    vec![
        theme.bold(&format!("{} {}'s status:", character.icon(), character.name())),
        format!(
            "    ❤️ Health: {} / {}",
            character.health(),
            character.health_max()
        ),
        format!("    💥 Damage: {}", character.damage()),
    ]
}

pub fn hero_status(theme: &Theme, hero: &Hero) -> Vec<String> {
    let mut lines = character_status(theme, &hero.character);
    lines.push(format!("    ✨ Experience: {}", hero.experience()));
    lines.push(String::new());
    lines.extend(inventory_lines(&hero.inventory));
    lines
}

pub fn inventory_lines(inventory: &Inventory) -> Vec<String> {
    let mut lines = vec![format!(
        "🎒 Inventory ({}/{}):",
        inventory.len(),
        inventory.capacity()
    )];
    if inventory.is_empty() {
        lines.push("    Inventory is empty.".to_string());
    } else {
        lines.extend(inventory.items().iter().map(|item| format!("    {item}")));
    }
    lines
}

pub fn action_menu(theme: &Theme, actions: &[ActionKind]) -> Vec<String> {
    let mut lines = vec![format!("🎭 {}", theme.bold("Actions:"))];
    lines.extend(
        actions
            .iter()
            .enumerate()
            .map(|(i, action)| format!("    [{}] {} ({})", i + 1, action.label(), action.token())),
    );
    lines
}

/// One line of narrative for an event.
pub fn event_line(theme: &Theme, event: &GameEvent) -> String {
    match event {
        GameEvent::Attack {
            attacker,
            target,
            target_icon,
            damage,
            critical,
        } => {
            let crit = if *critical {
                format!("{} ", theme.bold("CRIT!"))
            } else {
                String::new()
            };
            format!(
                "🗡️ {crit}{} attacked {target_icon} {} for {}",
                theme.bold(attacker),
                theme.bold(target),
                theme.bold(&format!("{damage} damage!"))
            )
        }
        GameEvent::Dodged { name } => {
            format!("💨 {} swiftly dodged the attack!", theme.bold(name))
        }
        GameEvent::AttackFailed => "❌ Attack failed: Invalid actor or target.".to_string(),
        GameEvent::InvalidAction { token } if token.is_empty() => "❌ Invalid action.".to_string(),
        GameEvent::InvalidAction { token } => format!("❌ Invalid action: '{token}'."),
        GameEvent::Fled { name } => format!("💨 {} fled the fight!", theme.bold(name)),
        GameEvent::FleeFailed { name } => format!(
            "⚠️ {} failed to flee and must continue fighting!",
            theme.bold(name)
        ),
        GameEvent::HealthRestored { name } => {
            format!("🩵 {}'s health fully restored", theme.bold(name))
        }
        GameEvent::ItemDescribed {
            icon,
            name,
            description,
        } => format!("{icon} {}: {description}", theme.bold(name)),
        GameEvent::ItemDiscarded { icon, name } => {
            format!("🗑️ {icon} {} was discarded.", theme.bold(name))
        }
        GameEvent::ItemFound { hero, icon, name } => {
            format!("{icon} {} found a {}!", theme.bold(hero), theme.bold(name))
        }
        GameEvent::SpellLearned { hero, icon, name } => format!(
            "{icon} {} learned the {} spell!",
            theme.bold(hero),
            theme.bold(name)
        ),
        GameEvent::InventoryFull { icon, name } => {
            format!("🎒 Inventory full! {icon} {name} was left behind.")
        }
        GameEvent::UnknownItem { uuid } => format!("❌ No item '{uuid}' in the inventory."),
        GameEvent::FightDeclined { hero } => {
            format!("\n💨 {} decided to avoid this fight...", theme.bold(hero))
        }
        GameEvent::Victory {
            enemy,
            damage_taken,
            xp_gained,
        } => [
            String::new(),
            banner("  🎉 VICTORY!").join("\n"),
            format!("⚔️ {enemy} defeated!"),
            format!("    🩸 Damage taken: {damage_taken}"),
            format!("    ✨ Experience gained: {xp_gained}"),
        ]
        .join("\n"),
        GameEvent::HeroDied { name } => format!("💀 {} has fallen!", theme.bold(name)),
        GameEvent::PotionFound { hero } => format!("🧪 {} found a potion!", theme.bold(hero)),
        GameEvent::PotionDrunk { effect } => {
            let face = if *effect > 0 { "😇" } else { "🤮" };
            format!("\n{face} {effect:+} health")
        }
        GameEvent::PotionRefused { hero } => {
            format!("\n{} decided not to drink the potion...", theme.bold(hero))
        }
    }
}

pub fn end_screen(theme: &Theme, hero_name: &str, outcome: &RunOutcome) -> Vec<String> {
    match outcome {
        RunOutcome::Survived { experience } => vec![
            format!("🥳 {} survived!", theme.bold(hero_name)),
            format!("With ✨ {}", theme.bold(&format!("{experience} experience"))),
            String::new(),
        ],
        RunOutcome::Died { .. } => vec![
            format!("💀 {} has died...", theme.bold(hero_name)),
            String::new(),
        ],
        RunOutcome::NoExperience { day } => vec![
            format!("💀 {} has died...", theme.bold(hero_name)),
            String::new(),
            format!("...because they reached day {day} with no experience."),
            String::new(),
        ],
    }
}
