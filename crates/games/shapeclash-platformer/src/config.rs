use serde::{Deserialize, Serialize};

/// Viewport width in pixels, used for camera framing only.
pub const VIEW_WIDTH: f32 = 800.0;
/// Viewport height in pixels.
pub const VIEW_HEIGHT: f32 = 600.0;
/// Level width in pixels.
pub const LEVEL_WIDTH: f32 = 2400.0;
/// Level height in pixels; falling past it is the pit-fall hazard.
pub const LEVEL_HEIGHT: f32 = 600.0;
/// Tile edge length in pixels.
pub const TILE_SIZE: f32 = 16.0;
/// Gravity acceleration (px/s^2, downward is +y).
pub const GRAVITY: f32 = 900.0;
/// Starting health.
pub const INITIAL_HEALTH: i32 = 5;
/// Orbs needed to activate the goal.
pub const ORBS_REQUIRED: u32 = 3;

/// Player movement and jump tuning, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub size: f32,
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Ground friction multiplier applied to vx each tick without input.
    pub friction: f32,
    pub jump_impulse: f32,
    /// Grace window after leaving a ledge during which a jump is still legal.
    pub coyote_time: f32,
    /// Window during which an early jump press stays queued.
    pub jump_buffer_time: f32,
    /// Maximum time the jump key can extend a jump.
    pub jump_hold_max: f32,
    /// Extra upward acceleration while the jump key is held (negative is up).
    pub jump_hold_boost: f32,
    /// vy multiplier applied once when the key is released mid-ascent.
    pub jump_release_scale: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            size: 32.0,
            walk_speed: 120.0,
            run_speed: 180.0,
            friction: 0.8,
            jump_impulse: -420.0,
            coyote_time: 0.1,
            jump_buffer_time: 0.1,
            jump_hold_max: 0.2,
            jump_hold_boost: -600.0,
            jump_release_scale: 0.5,
        }
    }
}

/// Enemy behavior tuning shared by all three variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub size: f32,
    pub patrol_range: f32,
    pub circle_speed: f32,
    pub square_speed: f32,
    pub triangle_speed: f32,
    /// Radius within which a flyer locks onto the player.
    pub detection_range: f32,
    pub chase_speed: f32,
    /// Hover oscillation rate (rad/s) and per-axis amplitudes.
    pub hover_speed: f32,
    pub hover_vx: f32,
    pub hover_vy: f32,
    /// Uniform range the hopper draws its next grounded wait from (seconds).
    pub hop_interval_min: f32,
    pub hop_interval_max: f32,
    /// Uniform range the hopper draws its impulse from (negative is up).
    pub hop_impulse_min: f32,
    pub hop_impulse_max: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            size: 32.0,
            patrol_range: 200.0,
            circle_speed: 60.0,
            square_speed: 50.0,
            triangle_speed: 70.0,
            detection_range: 200.0,
            chase_speed: 80.0,
            hover_speed: 2.0,
            hover_vx: 20.0,
            hover_vy: 10.0,
            hop_interval_min: 1.0,
            hop_interval_max: 3.0,
            hop_impulse_min: -300.0,
            hop_impulse_max: -180.0,
        }
    }
}

/// Combat outcome side-effect tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    /// Post-hit invulnerability after losing an encounter.
    pub invulnerability: f32,
    /// Longer invulnerability after a hazard respawn.
    pub respawn_invulnerability: f32,
    pub win_bounce_vx: f32,
    pub lose_knockback_vx: f32,
    pub draw_bounce_vx: f32,
    /// Shared upward bounce velocity for all outcomes.
    pub bounce_vy: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            invulnerability: 1.2,
            respawn_invulnerability: 2.0,
            win_bounce_vx: 100.0,
            lose_knockback_vx: 200.0,
            draw_bounce_vx: 100.0,
            bounce_vy: -200.0,
        }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub gravity: f32,
    pub seed: u64,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub combat: CombatTuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            seed: 42,
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
            combat: CombatTuning::default(),
        }
    }
}

impl GameConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("SHAPECLASH_CONFIG")
            .unwrap_or_else(|_| "config/shapeclash.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<GameConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    GameConfig::default()
                },
            },
            Err(_) => GameConfig::default(),
        }
    }
}
