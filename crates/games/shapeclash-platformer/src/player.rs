use serde::{Deserialize, Serialize};

use shapeclash_core::input::{InputState, Key};

use crate::body::{Aabb, KinematicBody};
use crate::combat::Shape;
use crate::config::PlayerTuning;

/// What a player step did, for cue/effect dispatch by the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStepEvents {
    pub jumped: bool,
    pub morphed: bool,
}

/// The player-controlled shape.
///
/// Jumping uses four cooperating timers: a coyote window refreshed while
/// grounded, a buffer window armed on a fresh press, a hold budget for
/// variable height, and the invulnerability countdown. All count down by dt
/// and floor at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: KinematicBody,
    pub shape: Shape,
    pub invulnerable: bool,
    pub invulnerability_timer: f32,
    jumping: bool,
    jump_hold_time: f32,
    coyote_timer: f32,
    was_on_ground: bool,
    jump_buffer_timer: f32,
    jump_was_down: bool,
}

impl Player {
    pub fn new(x: f32, y: f32, cfg: &PlayerTuning) -> Self {
        Self {
            body: KinematicBody::new(x, y, cfg.size, cfg.size),
            shape: Shape::Square,
            invulnerable: false,
            invulnerability_timer: 0.0,
            jumping: false,
            jump_hold_time: 0.0,
            coyote_timer: 0.0,
            was_on_ground: false,
            jump_buffer_timer: 0.0,
            jump_was_down: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        self.body.bounds()
    }

    pub fn set_invulnerable(&mut self, duration: f32) {
        self.invulnerable = true;
        self.invulnerability_timer = duration;
    }

    /// Advance one fixed step. `body.on_ground` still holds the previous
    /// tick's resolution; the loop clears it afterward, before re-resolving.
    pub fn update(
        &mut self,
        dt: f32,
        input: &mut InputState,
        cfg: &PlayerTuning,
        gravity: f32,
        level_width: f32,
    ) -> PlayerStepEvents {
        let mut events = PlayerStepEvents::default();

        // Morph keys are consumed so one press cycles exactly one step.
        if input.is_pressed(Key::MorphForward) {
            input.consume(Key::MorphForward);
            self.shape = self.shape.next();
            events.morphed = true;
            tracing::debug!(shape = ?self.shape, "player morphed");
        }
        if input.is_pressed(Key::MorphBackward) {
            input.consume(Key::MorphBackward);
            self.shape = self.shape.prev();
            events.morphed = true;
            tracing::debug!(shape = ?self.shape, "player morphed");
        }

        // Horizontal: snap to speed on input, exponential friction decay off.
        let speed = if input.is_pressed(Key::Run) {
            cfg.run_speed
        } else {
            cfg.walk_speed
        };
        let dir = input.move_dir();
        if dir != 0.0 {
            self.body.vx = dir * speed;
        } else {
            self.body.vx *= cfg.friction;
        }
        self.body.x += self.body.vx * dt;

        // Coyote window: full while grounded, draining while airborne.
        let grounded = self.body.on_ground;
        if grounded {
            self.coyote_timer = cfg.coyote_time;
            if !self.was_on_ground {
                // Just landed.
                self.jumping = false;
                self.jump_hold_time = 0.0;
            }
        } else {
            self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        }
        self.was_on_ground = grounded;

        // Buffer a fresh press; edge-detected against the previous tick so a
        // held key can't re-arm itself.
        let jump_down = input.is_pressed(Key::Jump);
        let fresh_press = jump_down && !self.jump_was_down;
        self.jump_was_down = jump_down;
        if fresh_press && !self.jumping && self.jump_buffer_timer <= 0.0 {
            self.jump_buffer_timer = cfg.jump_buffer_time;
        }

        if self.jump_buffer_timer > 0.0 && (grounded || self.coyote_timer > 0.0) {
            self.body.vy = cfg.jump_impulse;
            self.jumping = true;
            self.jump_hold_time = 0.0;
            self.coyote_timer = 0.0;
            self.jump_buffer_timer = 0.0;
            events.jumped = true;
        } else {
            self.jump_buffer_timer = (self.jump_buffer_timer - dt).max(0.0);
        }

        // Variable height: holding extends the ascent until the budget runs
        // out; releasing early cuts vy once and closes the budget.
        if self.jumping && self.body.vy < 0.0 && self.jump_hold_time < cfg.jump_hold_max {
            if jump_down {
                self.body.vy += cfg.jump_hold_boost * dt;
                self.jump_hold_time += dt;
            } else {
                self.body.vy *= cfg.jump_release_scale;
                self.jump_hold_time = cfg.jump_hold_max;
            }
        }

        // Gravity applies unconditionally after jump logic.
        self.body.vy += gravity * dt;
        self.body.y += self.body.vy * dt;

        self.body.x = self.body.x.clamp(0.0, level_width - self.body.width);

        if self.invulnerable {
            self.invulnerability_timer -= dt;
            if self.invulnerability_timer <= 0.0 {
                self.invulnerable = false;
                self.invulnerability_timer = 0.0;
            }
        }

        events
    }
}
