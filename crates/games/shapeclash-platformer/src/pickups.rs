use serde::{Deserialize, Serialize};

use crate::body::Aabb;
use crate::config::ORBS_REQUIRED;

/// Coin collectible: one-shot score pickup with a cosmetic bob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub collected: bool,
    base_y: f32,
    bob_time: f32,
}

impl Coin {
    const BOB_SPEED: f32 = 2.0;
    const BOB_AMPLITUDE: f32 = 8.0;

    pub fn new(x: f32, y: f32, bob_phase: f32) -> Self {
        Self {
            x,
            y,
            size: 16.0,
            collected: false,
            base_y: y,
            bob_time: bob_phase,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.collected {
            return;
        }
        self.bob_time += Self::BOB_SPEED * dt;
        self.y = self.base_y + self.bob_time.sin() * Self::BOB_AMPLITUDE;
    }

    /// First call returns true and marks the coin consumed; later calls are
    /// no-ops.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.size, self.size)
    }
}

/// Orb collectible: one-shot progress pickup toward goal activation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orb {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub collected: bool,
    base_y: f32,
    bob_time: f32,
}

impl Orb {
    const BOB_SPEED: f32 = 1.5;
    const BOB_AMPLITUDE: f32 = 12.0;

    pub fn new(x: f32, y: f32, bob_phase: f32) -> Self {
        Self {
            x,
            y,
            size: 16.0,
            collected: false,
            base_y: y,
            bob_time: bob_phase,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.collected {
            return;
        }
        self.bob_time += Self::BOB_SPEED * dt;
        self.y = self.base_y + self.bob_time.sin() * Self::BOB_AMPLITUDE;
    }

    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.size, self.size)
    }
}

/// Spike hazard: static trigger, damage handled by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Spike {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: 16.0,
            height: 16.0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.width, self.height)
    }
}

/// Respawn checkpoint. Activation is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub active: bool,
}

impl Checkpoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: 32.0,
            height: 32.0,
            active: false,
        }
    }

    /// Returns true only on the first activation.
    pub fn activate(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        true
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.width, self.height)
    }
}

/// Level exit. Inert until enough orbs are collected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Accumulated time, for the renderer's pulse animation.
    pub time: f32,
}

impl Goal {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: 64.0,
            height: 64.0,
            time: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.time += dt;
    }

    pub fn is_active(&self, orbs_collected: u32) -> bool {
        orbs_collected >= ORBS_REQUIRED
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.width, self.height)
    }
}
