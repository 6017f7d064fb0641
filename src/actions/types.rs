/// What the enclosing loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Nothing was spent; ask again.
    NoOp,
    /// The turn is over; move on.
    Continue,
    /// Leave the enclosing loop (combat or the morning menu).
    End,
}

/// Every action a character can have in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Attack,
    Flee,
    UseItem,
    Continue,
}

impl ActionKind {
    pub fn all() -> [ActionKind; 4] {
        [
            ActionKind::Attack,
            ActionKind::Flee,
            ActionKind::UseItem,
            ActionKind::Continue,
        ]
    }

    /// The word typed at the action prompt.
    pub fn token(&self) -> &'static str {
        match self {
            ActionKind::Attack => "attack",
            ActionKind::Flee => "flee",
            ActionKind::UseItem => "use",
            ActionKind::Continue => "continue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Attack => "Attack",
            ActionKind::Flee => "Flee",
            ActionKind::UseItem => "Use an item",
            ActionKind::Continue => "Continue",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::all()
            .into_iter()
            .find(|kind| kind.token().eq_ignore_ascii_case(token))
    }
}
