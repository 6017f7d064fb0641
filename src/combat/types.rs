/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatResolution {
    /// Enemy defeated with the hero still standing.
    Victory {
        damage_taken: i32,
        xp_gained: u32,
        super_potion_found: bool,
    },
    /// The hero fell.
    Defeat,
    /// The hero escaped mid-fight.
    Fled,
    /// The hero never engaged.
    Declined { potion_found: bool },
}

/// Where an encounter currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatPhase {
    /// Enemy shown, waiting on fight-or-not.
    AwaitingFight,
    HeroTurn,
    EnemyTurn,
    Resolved(CombatResolution),
}

impl CombatPhase {
    pub fn is_resolved(&self) -> bool {
        matches!(self, CombatPhase::Resolved(_))
    }
}
