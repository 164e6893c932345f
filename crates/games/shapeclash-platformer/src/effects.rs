use rand::Rng;
use serde::{Deserialize, Serialize};

/// Render color token for particles and floating texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const VICTORY_RED: Rgb = Rgb {
    r: 0xE2,
    g: 0x4A,
    b: 0x4A,
};
pub const DAMAGE_RED: Rgb = Rgb {
    r: 0xE7,
    g: 0x4C,
    b: 0x3C,
};
pub const CLASH_WHITE: Rgb = Rgb {
    r: 0xFF,
    g: 0xFF,
    b: 0xFF,
};
pub const MORPH_BLUE: Rgb = Rgb {
    r: 0x4A,
    g: 0x90,
    b: 0xE2,
};
pub const TEXT_GOLD: Rgb = Rgb {
    r: 0xFF,
    g: 0xD7,
    b: 0x00,
};
pub const TEXT_GREEN: Rgb = Rgb {
    r: 0x00,
    g: 0xFF,
    b: 0x00,
};
pub const TEXT_COIN: Rgb = Rgb {
    r: 0xF4,
    g: 0xD0,
    b: 0x3F,
};
pub const TEXT_ORB: Rgb = Rgb {
    r: 0x9B,
    g: 0x59,
    b: 0xB6,
};
pub const TEXT_CYAN: Rgb = Rgb {
    r: 0x00,
    g: 0xFF,
    b: 0xFF,
};

/// Gravity applied to particles (weaker than world gravity, reads better).
const PARTICLE_GRAVITY: f32 = 300.0;

/// A single transient spark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: Rgb,
    lifetime: f32,
    max_lifetime: f32,
}

impl Particle {
    pub fn update(&mut self, dt: f32) {
        self.vy += PARTICLE_GRAVITY * dt;
        self.x += self.vx * dt;
        self.y += self.vy * dt;
        self.lifetime -= dt;
    }

    /// Remaining-life fraction, for renderer fade-out.
    pub fn alpha(&self) -> f32 {
        (self.lifetime / self.max_lifetime).max(0.0)
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime <= 0.0
    }
}

/// Pool of transient sparks emitted by combat, morphs, and pickups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `count` sparks evenly around a circle at constant speed.
    #[allow(clippy::too_many_arguments)]
    pub fn emit(
        &mut self,
        x: f32,
        y: f32,
        count: u32,
        color: Rgb,
        speed: f32,
        lifetime: f32,
        rng: &mut impl Rng,
    ) {
        for i in 0..count {
            let angle = std::f32::consts::TAU * i as f32 / count as f32;
            self.particles.push(Particle {
                x,
                y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                size: rng.random_range(2.0..6.0),
                color,
                lifetime,
                max_lifetime: lifetime,
            });
        }
    }

    /// Emit sparks radially with per-spark speed jitter.
    #[allow(clippy::too_many_arguments)]
    pub fn emit_radial(
        &mut self,
        x: f32,
        y: f32,
        count: u32,
        color: Rgb,
        speed: f32,
        lifetime: f32,
        rng: &mut impl Rng,
    ) {
        for i in 0..count {
            let angle = std::f32::consts::TAU * i as f32 / count as f32;
            let jitter = 0.5 + rng.random::<f32>() * 0.5;
            self.particles.push(Particle {
                x,
                y,
                vx: angle.cos() * speed * jitter,
                vy: angle.sin() * speed * jitter,
                size: rng.random_range(2.0..6.0),
                color,
                lifetime,
                max_lifetime: lifetime,
            });
        }
    }

    /// Advance all sparks and prune the expired ones.
    pub fn update(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.update(dt);
        }
        self.particles.retain(|p| !p.is_expired());
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

/// A short status text that rises and fades ("POW!", "+100", "ORB!").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingText {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub color: Rgb,
    pub size: f32,
    remaining: f32,
    duration: f32,
}

impl FloatingText {
    const RISE_SPEED: f32 = -50.0;

    pub fn new(x: f32, y: f32, text: impl Into<String>, color: Rgb, size: f32, duration: f32) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color,
            size,
            remaining: duration,
            duration,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.y += Self::RISE_SPEED * dt;
        self.remaining -= dt;
    }

    pub fn alpha(&self) -> f32 {
        (self.remaining / self.duration).max(0.0)
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}
