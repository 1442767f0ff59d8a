// Hit/crit formula (percent scale)
pub const IDOLS_BASE_HIT: f64 = 85.0;
pub const IDOLS_BASE_CRIT: f64 = 15.0;
pub const VICES_BASE_HIT: f64 = 90.0;
pub const VICES_BASE_CRIT: f64 = 10.0;
pub const DAMAGE_ROLL_MIN: i32 = 45;
pub const DAMAGE_ROLL_MAX: i32 = 55;
pub const CRIT_MULTIPLIER: i32 = 2;
pub const MIN_STAT_FOR_RATIO: i32 = 1;

// Percent draws are uniform in PERCENT_ROLL_MIN..=PERCENT_ROLL_MAX
pub const PERCENT_ROLL_MIN: i32 = 0;
pub const PERCENT_ROLL_MAX: i32 = 99;

// Player starting pools
pub const DUEL_PLAYER_HP: i32 = 99;
pub const PLAYER_HP: i32 = 100;
pub const PLAYER_MANA: i32 = 10;
pub const PLAYER_GOLD_START: i32 = 50;
pub const PLAYER_GOLD_MAX: i32 = 999;
pub const PLAYER_BASE_STAT: i32 = 50;
pub const IDOLS_STARTING_MEDICINE: usize = 4;
pub const VICES_MAX_BAG: usize = 5;
// Four medicines plus the nectar gift
pub const IDOLS_MAX_BAG: usize = 5;

// Duel enemy
pub const DUEL_ENEMY_HP: i32 = 666;

// Duel outcome tables: ten equally likely faces per action
pub const DUEL_TABLE_FACES: i32 = 10;
pub const DUEL_FIGHT_HIT: (i32, i32) = (55, 60);
pub const DUEL_FIGHT_CRIT: (i32, i32) = (115, 120);
pub const DUEL_PRAY_HEAL: (i32, i32) = (25, 30);
pub const DUEL_PRAY_MIRACLE: (i32, i32) = (55, 60);
pub const DUEL_PITY_DAMAGE: (i32, i32) = (25, 30);
pub const DUEL_ENEMY_HIT: (i32, i32) = (10, 15);
pub const DUEL_ENEMY_CRIT: (i32, i32) = (25, 30);

// Items
pub const MEDICINE_HEAL: i32 = 50;
pub const IDOLS_NECTAR_HEAL: i32 = 100;

// Spells: (mana cost)
pub const ZAP_COST: i32 = 5;
pub const IGNITE_COST: i32 = 7;
pub const CONGEAL_COST: i32 = 8;
pub const ZAP_DAMAGE: (i32, i32) = (95, 105);

// Status effects
pub const BURN_TURNS: u32 = 5;
pub const FREEZE_TURNS: u32 = 4;
pub const CHARGE_TURNS: u32 = 1;
pub const BURN_TICK_DAMAGE: (i32, i32) = (25, 35);
pub const CHARGE_RELEASE_DAMAGE: (i32, i32) = (65, 75);

// Boss scripts
pub const SLOTH_HP_DIVISOR: f64 = 3.0;
pub const GLUTTONY_HP_DIVISOR: f64 = 3.0;
pub const GLUTTONY_HEAL: (i32, i32) = (50, 100);
pub const LUST_SHARE_DIVISOR: f64 = 10.0;
pub const WRATH_RAGE_DIVISOR: f64 = 20.0;
pub const ENVY_LEECH_DIVISOR: f64 = 5.0;
pub const GREED_STEAL_CHANCE: i32 = 50;
pub const GREED_STEAL: (i32, i32) = (1, 3);
pub const ORIGINAL_SIN_PHASE_FRACTION: f64 = 0.6;
pub const ORIGINAL_SIN_PHASE_BONUS: i32 = 10;
pub const ORIGINAL_SIN_CHARGE_DIVISOR: f64 = 5.0;

// Progression rewards
pub const BLESSING_BONUS: i32 = 10;
pub const NECTAR_GIFT_AFTER_WINS: usize = 3;

// Perks
pub const ENERGISER_MANA_PER_ROUND: i32 = 1;
pub const HEARTSTONE_MAX_HP: i32 = 200;

// Shop
pub const SHOP_DISPLAY_LIMIT: usize = 5;

// Menu labels
pub const EXIT_LABEL: &str = "(EXIT)";
pub const SHOP_LABEL: &str = "SHOP!";
