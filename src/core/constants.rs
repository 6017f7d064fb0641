// Hero
pub const HERO_ICON: &str = "🧍";
pub const HERO_HEALTH: i32 = 100;
pub const HERO_DAMAGE: i32 = 20;
pub const HERO_DODGE_CHANCE: u32 = 50;
pub const HERO_XP_GAIN_RANGE: (u32, u32) = (15, 30);

// Shared combat chances (percent, rolled against a uniform 1..=100 draw)
pub const CRIT_CHANCE: u32 = 50;
pub const FLEE_CHANCE: u32 = 25;
pub const CRIT_MULTIPLIER: f64 = 1.5;

// Goblin
pub const GOBLIN_ICON: &str = "👺";
pub const GOBLIN_HEALTH: i32 = 100;
pub const GOBLIN_DAMAGE: i32 = 15;
pub const GOBLIN_NAMES: [&str; 20] = [
    "Grukk", "Zorg", "Ragdug", "Thrak", "Vog", "Krog", "Dorg", "Zarnok", "Brog", "Narg", "Wog",
    "Kruuk", "Grog", "Skrag", "Ruk", "Vrak", "Korr", "Lurt", "Snagg", "Gulth",
];

// Days
pub const GAME_SPEED: f64 = 0.5;
pub const MAX_DAYS: u32 = 10;
pub const STARTING_DAY: u32 = 0;
pub const SPELLBOOK_DAY: u32 = 2;

// Potions
pub const POTION_EFFECT_RANGE: (i32, i32) = (-20, 20);
pub const POTION_FIND_CHANCE: u32 = 50;
pub const SUPER_POTION_FIND_CHANCE: u32 = 100;
pub const SUPER_POTION_MAX_STACK: u32 = 5;

// Magic
pub const FIREBALL_XP: u32 = 0;

// Inventory
pub const INVENTORY_CAPACITY: usize = 5;

// Item identifiers
pub const SUPER_POTION_ID: &str = "spotion";
pub const SPELLBOOK_ID: &str = "spellbook";
pub const FIREBALL_ID: &str = "fireball";

// Sentinel that ends the item prompt loop
pub const ITEM_PROMPT_DONE: &str = "continue";

pub const GAME_TITLE: &str = r"
______                                      _____                    _
|  _  \                                    /  __ \                  | |
| | | |_   _ _ __   __ _  ___  ___  _ __   | /  \/_ __ __ ___      _| | ___ _ __
| | | | | | | '_ \ / _` |/ _ \/ _ \| '_ \  | |   | '__/ _` \ \ /\ / / |/ _ \ '__|
| |/ /| |_| | | | | (_| |  __/ (_) | | | | | \__/\ | | (_| |\ V  V /| |  __/ |
|___/  \__,_|_| |_|\__, |\___|\___/|_| |_|  \____/_|  \__,_| \_/\_/ |_|\___|_|
                    __/ |
                   |___/
";

// Story templates; `{name}` is replaced with the hero's name
pub const START_TEMPLATES: [&str; 5] = [
    "🏰 {name} wakes up in the dark dungeon. The stench of goblins fills the air.",
    "🌑 {name} stretches their weary limbs, the dim light barely illuminating the cold stone walls.",
    "👂 {name} hears faint growls echoing in the distance. Another day of survival begins.",
    "💧 A drop of water echoes in the stillness as {name} rises to face the unknown.",
    "⚠️ The dungeon feels more oppressive today, and {name} can sense danger lurking nearby.",
];

pub const MOVE_TEMPLATES: [&str; 8] = [
    "🕯️ The dungeon is quiet, and your footsteps echo against the cold stone walls. You feel uneasy, but nothing stirs... yet.",
    "👣 Your footsteps grow louder in the silence. Shadows flicker along the walls as you move deeper into the dungeon.",
    "🕸️ A web of spider silk covers the path ahead. You push through, careful not to disturb anything...",
    "🔈 The distant sound of claws scraping against stone sends a shiver down your spine... Someone or something is near.",
    "👻 A cold breeze sweeps through the corridor, carrying with it a faint, eerie whisper... You feel watched.",
    "⚔️ As you turn a corner, a pair of glowing eyes meet yours in the darkness. A figure steps forward, an enemy approaches!",
    "💀 The dungeon's air grows heavier with each step. Suddenly, a guttural growl breaks the silence. A goblin leaps from the shadows!",
    "🦇 The sound of flapping wings fills the air. A swarm of bats flies overhead, but something more sinister lurks in the shadows.",
];
