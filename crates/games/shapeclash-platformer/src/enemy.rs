use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::body::{Aabb, KinematicBody};
use crate::combat::Shape;
use crate::config::EnemyTuning;
use crate::level::EnemyPlacement;

/// Behavior-specific state for the three enemy variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// Walks back and forth on the ground (circle).
    Patrol,
    /// Ignores gravity and tiles; chases the player or hovers (square).
    Fly { phase: f32 },
    /// Ground patrol with randomized mini-hops (triangle).
    Hop {
        grounded: bool,
        timer: f32,
        interval: f32,
    },
}

/// A patrolling enemy. Shared fields live here, behavior-specific state in
/// the `Behavior` payload; the shape both picks the variant and feeds the
/// combat resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub body: KinematicBody,
    pub shape: Shape,
    pub alive: bool,
    pub direction: f32,
    start_x: f32,
    patrol_range: f32,
    speed: f32,
    pub behavior: Behavior,
}

impl Enemy {
    pub fn from_placement(p: &EnemyPlacement, cfg: &EnemyTuning, rng: &mut StdRng) -> Self {
        let (speed, behavior) = match p.shape {
            Shape::Circle => (cfg.circle_speed, Behavior::Patrol),
            Shape::Square => (
                cfg.square_speed,
                Behavior::Fly {
                    phase: rng.random_range(0.0..std::f32::consts::TAU),
                },
            ),
            Shape::Triangle => (
                cfg.triangle_speed,
                Behavior::Hop {
                    grounded: false,
                    timer: 0.0,
                    interval: rng.random_range(cfg.hop_interval_min..=cfg.hop_interval_max),
                },
            ),
        };
        Self {
            body: KinematicBody::new(p.x, p.y, cfg.size, cfg.size),
            shape: p.shape,
            alive: true,
            direction: 1.0,
            start_x: p.x,
            patrol_range: cfg.patrol_range,
            speed,
            behavior,
        }
    }

    /// Flyers never touch level geometry.
    pub fn collides_with_tiles(&self) -> bool {
        !matches!(self.behavior, Behavior::Fly { .. })
    }

    pub fn bounds(&self) -> Aabb {
        self.body.bounds()
    }

    /// Advance one fixed step. Dead enemies are inert.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        dt: f32,
        player_center: (f32, f32),
        cfg: &EnemyTuning,
        gravity: f32,
        level_width: f32,
        level_height: f32,
        rng: &mut StdRng,
    ) {
        if !self.alive {
            return;
        }
        match self.behavior {
            Behavior::Patrol => self.update_patrol(dt, gravity, level_width),
            Behavior::Fly { .. } => self.update_fly(dt, player_center, cfg, level_width, level_height),
            Behavior::Hop { .. } => self.update_hop(dt, cfg, gravity, level_width, rng),
        }
    }

    fn update_patrol(&mut self, dt: f32, gravity: f32, level_width: f32) {
        self.body.on_ground = false;

        self.body.vx = self.direction * self.speed;
        self.body.vy += gravity * dt;
        self.body.x += self.body.vx * dt;
        self.body.y += self.body.vy * dt;

        self.reverse_at_patrol_bounds();
        self.body.x = self.body.x.clamp(0.0, level_width - self.body.width);
    }

    fn update_fly(
        &mut self,
        dt: f32,
        player_center: (f32, f32),
        cfg: &EnemyTuning,
        level_width: f32,
        level_height: f32,
    ) {
        let (cx, cy) = self.body.center();
        let dx = player_center.0 - cx;
        let dy = player_center.1 - cy;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < cfg.detection_range && distance > 0.0 {
            // Lock on and fly straight at the player.
            self.body.vx = dx / distance * cfg.chase_speed;
            self.body.vy = dy / distance * cfg.chase_speed;
        } else if let Behavior::Fly { phase } = &mut self.behavior {
            // Idle hover: small sine/cosine drift around the current spot.
            *phase += cfg.hover_speed * dt;
            self.body.vx = phase.cos() * cfg.hover_vx;
            self.body.vy = phase.sin() * cfg.hover_vy;
        }

        self.body.x += self.body.vx * dt;
        self.body.y += self.body.vy * dt;

        // Flyers clamp on both axes; there is no floor for them.
        self.body.x = self.body.x.clamp(0.0, level_width - self.body.width);
        self.body.y = self.body.y.clamp(0.0, level_height - self.body.height);
    }

    fn update_hop(
        &mut self,
        dt: f32,
        cfg: &EnemyTuning,
        gravity: f32,
        level_width: f32,
        rng: &mut StdRng,
    ) {
        // The resolver's flag from the previous tick; read before the reset
        // so a freshly-landed hopper still counts as grounded.
        let was_on_ground = self.body.on_ground;
        self.body.on_ground = false;

        self.body.vx = self.direction * self.speed;
        self.body.vy += gravity * dt;
        self.body.x += self.body.vx * dt;
        self.body.y += self.body.vy * dt;

        if let Behavior::Hop {
            grounded,
            timer,
            interval,
        } = &mut self.behavior
        {
            *grounded = was_on_ground && self.body.vy >= 0.0;

            // The wait only elapses while grounded; airborne time doesn't count.
            if *grounded {
                *timer += dt;
                if *timer >= *interval {
                    self.body.vy = rng.random_range(cfg.hop_impulse_min..=cfg.hop_impulse_max);
                    *grounded = false;
                    *timer = 0.0;
                    *interval = rng.random_range(cfg.hop_interval_min..=cfg.hop_interval_max);
                    tracing::debug!(x = self.body.x, vy = self.body.vy, "hopper jumped");
                }
            }
        }

        self.reverse_at_patrol_bounds();
        self.body.x = self.body.x.clamp(0.0, level_width - self.body.width);
    }

    fn reverse_at_patrol_bounds(&mut self) {
        if self.body.x > self.start_x + self.patrol_range {
            self.direction = -1.0;
            self.body.x = self.start_x + self.patrol_range;
        } else if self.body.x < self.start_x - self.patrol_range {
            self.direction = 1.0;
            self.body.x = self.start_x - self.patrol_range;
        }
    }
}
