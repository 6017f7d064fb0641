use crate::character::Hero;
use crate::core::config::GameConfig;

/// Everything one run carries from day to day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub hero: Hero,
    pub day: u32,
}

impl GameState {
    pub fn new(hero_name: &str, config: &GameConfig) -> Self {
        Self {
            hero: Hero::new(hero_name, config),
            day: config.days.starting_day,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Reached the last day with experience to show for it.
    Survived { experience: u32 },
    /// Killed in battle or by a bad potion on `day`.
    Died { day: u32 },
    /// Reached the last day without ever winning a fight.
    NoExperience { day: u32 },
}

impl RunOutcome {
    pub fn survived(&self) -> bool {
        matches!(self, RunOutcome::Survived { .. })
    }
}
