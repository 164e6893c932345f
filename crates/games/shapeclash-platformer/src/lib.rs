pub mod body;
pub mod collision;
pub mod combat;
pub mod config;
pub mod effects;
pub mod enemy;
pub mod level;
pub mod pickups;
pub mod player;
pub mod scoring;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use shapeclash_core::camera::Camera;
use shapeclash_core::events::AudioCue;
use shapeclash_core::input::{InputState, Key};
use shapeclash_core::timestep::FixedTimestep;

use combat::{Outcome, Shape};
use config::{GameConfig, INITIAL_HEALTH, ORBS_REQUIRED, VIEW_HEIGHT, VIEW_WIDTH};
use effects::{FloatingText, Particle, ParticleSystem};
use enemy::Enemy;
use level::LevelData;
use pickups::{Checkpoint, Coin, Goal, Orb, Spike};
use player::Player;

/// Session-scoped game state, owned by the loop and mutated only by its
/// handlers. `game_over` and `level_complete` are one-way until restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub health: i32,
    pub score: i32,
    pub orbs_collected: u32,
    pub paused: bool,
    pub game_over: bool,
    pub level_complete: bool,
}

impl GameState {
    fn new() -> Self {
        Self {
            health: INITIAL_HEALTH,
            score: 0,
            orbs_collected: 0,
            paused: false,
            game_over: false,
            level_complete: false,
        }
    }
}

/// Read-only HUD view for the UI collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub health: i32,
    pub score: i32,
    pub orbs_collected: u32,
    pub paused: bool,
    pub game_over: bool,
    pub level_complete: bool,
    pub player_shape: Shape,
}

/// Immutable-for-the-frame entity views for the rendering collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub orbs: Vec<Orb>,
    pub spikes: Vec<Spike>,
    pub checkpoints: Vec<Checkpoint>,
    pub goal: Goal,
    pub goal_active: bool,
    pub particles: Vec<Particle>,
    pub texts: Vec<FloatingText>,
    pub camera_offset: (f32, f32),
}

struct EntitySet {
    player: Player,
    enemies: Vec<Enemy>,
    coins: Vec<Coin>,
    orbs: Vec<Orb>,
    spikes: Vec<Spike>,
    checkpoints: Vec<Checkpoint>,
    goal: Goal,
}

fn build_entities(level: &LevelData, config: &GameConfig, rng: &mut StdRng) -> EntitySet {
    use rand::Rng;

    let player = Player::new(level.spawn_x, level.spawn_y, &config.player);
    let enemies = level
        .enemies
        .iter()
        .map(|p| Enemy::from_placement(p, &config.enemy, rng))
        .collect();
    let coins = level
        .coins
        .iter()
        .map(|&(x, y)| Coin::new(x, y, rng.random_range(0.0..std::f32::consts::TAU)))
        .collect();
    let orbs = level
        .orbs
        .iter()
        .map(|&(x, y)| Orb::new(x, y, rng.random_range(0.0..std::f32::consts::TAU)))
        .collect();
    let spikes = level.spikes.iter().map(|&(x, y)| Spike::new(x, y)).collect();
    let checkpoints = level
        .checkpoints
        .iter()
        .map(|&(x, y)| Checkpoint::new(x, y))
        .collect();
    let goal = Goal::new(level.goal.0, level.goal.1);

    EntitySet {
        player,
        enemies,
        coins,
        orbs,
        spikes,
        checkpoints,
        goal,
    }
}

/// The Clash of Shapes simulation.
///
/// Hosts drive it with `advance(frame_dt)` once per rendered frame; the
/// accumulator turns that into 0..N fixed steps of 1/60 s. Each step runs
/// the subsystems in a fixed order, so two runs fed the same seed and the
/// same per-step inputs produce identical trajectories.
pub struct Game {
    config: GameConfig,
    level: LevelData,
    state: GameState,
    player: Player,
    enemies: Vec<Enemy>,
    coins: Vec<Coin>,
    orbs: Vec<Orb>,
    spikes: Vec<Spike>,
    checkpoints: Vec<Checkpoint>,
    goal: Goal,
    spawn_point: (f32, f32),
    input: InputState,
    timestep: FixedTimestep,
    camera: Camera,
    particles: ParticleSystem,
    texts: Vec<FloatingText>,
    rng: StdRng,
    fx_rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let level = level::default_level();
        Self::with_level(config, level)
    }

    pub fn with_level(config: GameConfig, level: LevelData) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let fx_rng = StdRng::seed_from_u64(config.seed.wrapping_add(0x9E37_79B9));
        let entities = build_entities(&level, &config, &mut rng);
        let camera = Camera::new(VIEW_WIDTH, VIEW_HEIGHT, level.width, level.height);
        let spawn_point = (level.spawn_x, level.spawn_y);
        Self {
            config,
            level,
            state: GameState::new(),
            player: entities.player,
            enemies: entities.enemies,
            coins: entities.coins,
            orbs: entities.orbs,
            spikes: entities.spikes,
            checkpoints: entities.checkpoints,
            goal: entities.goal,
            spawn_point,
            input: InputState::new(),
            timestep: FixedTimestep::default(),
            camera,
            particles: ParticleSystem::new(),
            texts: Vec::new(),
            rng,
            fx_rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// The host's keyboard wiring feeds presses/releases through this.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Advance by one rendered frame's wall-clock delta: 0..N fixed steps
    /// followed by one camera update. Returns the cues fired along the way.
    pub fn advance(&mut self, frame_dt: f32) -> Vec<AudioCue> {
        let steps = self.timestep.advance(frame_dt);
        let dt = self.timestep.fixed_dt();
        let mut cues = Vec::new();
        for _ in 0..steps {
            cues.extend(self.step(dt));
        }
        if !(self.state.paused || self.state.game_over || self.state.level_complete) {
            let (cx, cy) = self.player.body.center();
            self.camera.follow(cx, cy);
            self.camera.update(&mut self.fx_rng);
        }
        cues
    }

    /// One fixed simulation step. Subsystem order is load-bearing: collision
    /// resolution must precede the combat/hazard checks so `on_ground`
    /// reflects this tick before jump logic consumes it next tick.
    pub fn step(&mut self, dt: f32) -> Vec<AudioCue> {
        let mut cues = Vec::new();

        // 1. Menu input, consumed immediately so catch-up steps in the same
        // frame cannot re-fire it.
        if self.input.is_pressed(Key::Pause) {
            self.input.consume(Key::Pause);
            self.state.paused = !self.state.paused;
        }
        if (self.state.game_over || self.state.level_complete) && self.input.is_pressed(Key::Restart)
        {
            self.input.consume(Key::Restart);
            self.reset();
            return cues;
        }
        if self.state.paused || self.state.game_over || self.state.level_complete {
            return cues;
        }

        // 2. Player controller.
        let player_events = self.player.update(
            dt,
            &mut self.input,
            &self.config.player,
            self.config.gravity,
            self.level.width,
        );
        if player_events.jumped {
            cues.push(AudioCue::Jump);
        }
        if player_events.morphed {
            let (cx, cy) = self.player.body.center();
            self.particles
                .emit_radial(cx, cy, 5, effects::MORPH_BLUE, 100.0, 0.3, &mut self.fx_rng);
        }

        // 3. Player vs. static geometry.
        self.player.body.on_ground = false;
        for tile in &self.level.tiles {
            collision::resolve(&mut self.player.body, &tile.bounds());
        }

        // 4. Enemy controllers; flyers never touch tiles.
        let player_center = self.player.body.center();
        for enemy in &mut self.enemies {
            if !enemy.alive {
                continue;
            }
            enemy.update(
                dt,
                player_center,
                &self.config.enemy,
                self.config.gravity,
                self.level.width,
                self.level.height,
                &mut self.rng,
            );
            if enemy.collides_with_tiles() {
                for tile in &self.level.tiles {
                    collision::resolve(&mut enemy.body, &tile.bounds());
                }
            }
        }

        // 5. Combat. A loss grants invulnerability, which also ends this
        // tick's remaining checks.
        for idx in 0..self.enemies.len() {
            if self.player.invulnerable {
                break;
            }
            if self.enemies[idx].alive
                && collision::overlaps(&self.player.bounds(), &self.enemies[idx].bounds())
            {
                self.handle_combat(idx, &mut cues);
            }
        }

        // 6. Collectibles.
        for coin in &mut self.coins {
            coin.update(dt);
            if collision::overlaps(&self.player.bounds(), &coin.bounds()) && coin.collect() {
                self.state.score += scoring::COIN;
                cues.push(AudioCue::PickupCoin);
                self.texts.push(FloatingText::new(
                    coin.x + coin.size / 2.0,
                    coin.y,
                    format!("+{}", scoring::COIN),
                    effects::TEXT_COIN,
                    16.0,
                    0.5,
                ));
                tracing::debug!(score = self.state.score, "coin collected");
            }
        }
        for orb in &mut self.orbs {
            orb.update(dt);
            if collision::overlaps(&self.player.bounds(), &orb.bounds()) && orb.collect() {
                self.state.orbs_collected += 1;
                cues.push(AudioCue::PickupOrb);
                self.texts.push(FloatingText::new(
                    orb.x + orb.size / 2.0,
                    orb.y,
                    "ORB!",
                    effects::TEXT_ORB,
                    18.0,
                    0.7,
                ));
                tracing::debug!(orbs = self.state.orbs_collected, "orb collected");
                if self.state.orbs_collected == ORBS_REQUIRED {
                    let (cx, cy) = self.player.body.center();
                    self.texts.push(FloatingText::new(
                        cx,
                        cy - 20.0,
                        "GOAL ACTIVATED!",
                        effects::TEXT_GREEN,
                        20.0,
                        1.0,
                    ));
                }
            }
        }

        // 7. Goal animation clock.
        self.goal.update(dt);

        // 8. Hazards and pit-fall, both through the shared damage handler.
        for idx in 0..self.spikes.len() {
            if self.player.invulnerable {
                break;
            }
            if collision::overlaps(&self.player.bounds(), &self.spikes[idx].bounds()) {
                self.hazard_damage(&mut cues);
            }
        }
        if !self.player.invulnerable && self.player.body.y > self.level.height {
            self.hazard_damage(&mut cues);
        }

        // 9. Checkpoints: first touch arms the respawn point, later touches
        // are no-ops.
        for cp in &mut self.checkpoints {
            if collision::overlaps(&self.player.bounds(), &cp.bounds()) && cp.activate() {
                self.spawn_point = (cp.x, cp.y);
                cues.push(AudioCue::Checkpoint);
                self.texts.push(FloatingText::new(
                    cp.x + cp.width / 2.0,
                    cp.y,
                    "CHECKPOINT!",
                    effects::TEXT_CYAN,
                    18.0,
                    0.7,
                ));
                tracing::debug!(x = cp.x, "checkpoint activated");
            }
        }

        // 10. Goal completion, gated on the orb threshold.
        if self.goal.is_active(self.state.orbs_collected)
            && collision::overlaps(&self.player.bounds(), &self.goal.bounds())
        {
            let bonus = scoring::completion_bonus(self.state.health);
            self.state.score += bonus;
            self.state.level_complete = true;
            cues.push(AudioCue::LevelComplete);
            tracing::debug!(bonus, score = self.state.score, "level complete");
        }

        // 11. Transient effects advance and prune.
        self.particles.update(dt);
        for text in &mut self.texts {
            text.update(dt);
        }
        self.texts.retain(|t| !t.is_expired());

        cues
    }

    fn handle_combat(&mut self, idx: usize, cues: &mut Vec<AudioCue>) {
        let player_shape = self.player.shape;
        let enemy_shape = self.enemies[idx].shape;
        let outcome = combat::resolve(player_shape, enemy_shape);
        let enemy_center = self.enemies[idx].body.center();
        let direction = if self.player.body.x < self.enemies[idx].body.x {
            -1.0
        } else {
            1.0
        };
        let tuning = self.config.combat.clone();

        match outcome {
            Outcome::Win => {
                self.enemies[idx].alive = false;
                self.state.score += scoring::ENEMY_DEFEAT;
                self.player.body.vx = direction * tuning.win_bounce_vx;
                self.player.body.vy = tuning.bounce_vy;
                cues.push(AudioCue::Pow);
                self.particles.emit(
                    enemy_center.0,
                    enemy_center.1,
                    10,
                    effects::VICTORY_RED,
                    100.0,
                    0.5,
                    &mut self.fx_rng,
                );
                self.texts.push(FloatingText::new(
                    enemy_center.0,
                    enemy_center.1,
                    "POW!",
                    effects::TEXT_GOLD,
                    24.0,
                    0.5,
                ));
                self.texts.push(FloatingText::new(
                    enemy_center.0,
                    enemy_center.1 - 20.0,
                    format!("+{}", scoring::ENEMY_DEFEAT),
                    effects::TEXT_GREEN,
                    18.0,
                    0.6,
                ));
                self.camera.shake(4.0, 2);
                tracing::debug!(?player_shape, ?enemy_shape, "combat won");
            },
            Outcome::Lose => {
                self.state.health -= 1;
                self.player.set_invulnerable(tuning.invulnerability);
                self.player.body.vx = direction * tuning.lose_knockback_vx;
                self.player.body.vy = tuning.bounce_vy;
                cues.push(AudioCue::Damaged);
                let (px, py) = self.player.body.center();
                self.particles.emit_radial(
                    px,
                    py,
                    10,
                    effects::DAMAGE_RED,
                    150.0,
                    0.3,
                    &mut self.fx_rng,
                );
                self.camera.shake(6.0, 3);
                tracing::debug!(?player_shape, ?enemy_shape, health = self.state.health, "combat lost");
                if self.state.health <= 0 {
                    self.state.game_over = true;
                    cues.push(AudioCue::GameOver);
                    tracing::debug!("game over");
                }
            },
            Outcome::Draw => {
                self.player.body.vx = direction * tuning.draw_bounce_vx;
                self.player.body.vy = tuning.bounce_vy;
                self.enemies[idx].body.vx = -direction * tuning.draw_bounce_vx;
                self.enemies[idx].body.vy = tuning.bounce_vy;
                cues.push(AudioCue::Clash);
                let (px, py) = self.player.body.center();
                let mid = ((px + enemy_center.0) / 2.0, (py + enemy_center.1) / 2.0);
                self.particles.emit_radial(
                    mid.0,
                    mid.1,
                    5,
                    effects::CLASH_WHITE,
                    50.0,
                    0.5,
                    &mut self.fx_rng,
                );
                self.texts.push(FloatingText::new(
                    mid.0,
                    mid.1,
                    "CLASH!",
                    effects::CLASH_WHITE,
                    18.0,
                    0.3,
                ));
                tracing::debug!(?player_shape, "combat draw");
            },
        }
    }

    /// Spike and pit-fall share this: damage, long invulnerability, respawn
    /// at the armed checkpoint (or level start), velocity zeroed.
    fn hazard_damage(&mut self, cues: &mut Vec<AudioCue>) {
        self.state.health -= 1;
        self.player
            .set_invulnerable(self.config.combat.respawn_invulnerability);
        self.player.body.x = self.spawn_point.0;
        self.player.body.y = self.spawn_point.1;
        self.player.body.vx = 0.0;
        self.player.body.vy = 0.0;
        cues.push(AudioCue::Damaged);
        tracing::debug!(health = self.state.health, "hazard damage");
        if self.state.health <= 0 {
            self.state.game_over = true;
            cues.push(AudioCue::GameOver);
            tracing::debug!("game over");
        }
    }

    /// Rebuild every entity and restore the initial game state. The RNGs are
    /// re-seeded, so a restarted session replays identically.
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.config.seed);
        self.fx_rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(0x9E37_79B9));
        let entities = build_entities(&self.level, &self.config, &mut self.rng);
        self.player = entities.player;
        self.enemies = entities.enemies;
        self.coins = entities.coins;
        self.orbs = entities.orbs;
        self.spikes = entities.spikes;
        self.checkpoints = entities.checkpoints;
        self.goal = entities.goal;
        self.spawn_point = (self.level.spawn_x, self.level.spawn_y);
        self.state = GameState::new();
        self.particles.clear();
        self.texts.clear();
        self.timestep.reset();
        self.camera.reset();
        tracing::debug!("game reset");
    }

    /// Read-only HUD projection for the UI collaborator.
    pub fn hud(&self) -> Hud {
        Hud {
            health: self.state.health,
            score: self.state.score,
            orbs_collected: self.state.orbs_collected,
            paused: self.state.paused,
            game_over: self.state.game_over,
            level_complete: self.state.level_complete,
            player_shape: self.player.shape,
        }
    }

    /// Clone out everything the renderer needs for one frame.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            player: self.player.clone(),
            enemies: self.enemies.clone(),
            coins: self.coins.clone(),
            orbs: self.orbs.clone(),
            spikes: self.spikes.clone(),
            checkpoints: self.checkpoints.clone(),
            goal: self.goal,
            goal_active: self.goal.is_active(self.state.orbs_collected),
            particles: self.particles.particles().to_vec(),
            texts: self.texts.clone(),
            camera_offset: self.camera.offset(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests;
