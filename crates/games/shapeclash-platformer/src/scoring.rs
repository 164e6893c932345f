use crate::config::INITIAL_HEALTH;

/// Points for picking up a coin.
pub const COIN: i32 = 10;
/// Points for defeating an enemy.
pub const ENEMY_DEFEAT: i32 = 100;
/// Flat bonus for completing the level.
pub const LEVEL_COMPLETE: i32 = 500;
/// Bonus per remaining heart at completion.
pub const PER_HEART: i32 = 50;
/// Extra bonus for finishing at full health.
pub const NO_DEATH: i32 = 200;

/// Total bonus awarded when the goal is reached with `health` remaining.
pub fn completion_bonus(health: i32) -> i32 {
    let no_death = if health == INITIAL_HEALTH { NO_DEATH } else { 0 };
    LEVEL_COMPLETE + health * PER_HEART + no_death
}
