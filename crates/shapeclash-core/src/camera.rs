use rand::Rng;
use serde::{Deserialize, Serialize};

/// Viewport framing for the rendering collaborator.
///
/// Purely cosmetic: nothing here feeds back into the simulation. The camera
/// lerps toward the followed target, clamps to the level, and supports a
/// frame-counted shake whose jitter comes from a caller-supplied RNG.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    level_width: f32,
    level_height: f32,
    lerp_factor: f32,
    shake_intensity: f32,
    shake_frames: u32,
    shake_x: f32,
    shake_y: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32, level_width: f32, level_height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            level_width,
            level_height,
            lerp_factor: 0.1,
            shake_intensity: 0.0,
            shake_frames: 0,
            shake_x: 0.0,
            shake_y: 0.0,
        }
    }

    /// Lerp toward centering `(cx, cy)` in the viewport, clamped to the level.
    pub fn follow(&mut self, cx: f32, cy: f32) {
        let target_x = cx - self.width / 2.0;
        let target_y = cy - self.height / 2.0;
        self.x += (target_x - self.x) * self.lerp_factor;
        self.y += (target_y - self.y) * self.lerp_factor;
        self.x = self.x.clamp(0.0, (self.level_width - self.width).max(0.0));
        self.y = self.y.clamp(0.0, (self.level_height - self.height).max(0.0));
    }

    /// Start a shake of `intensity` pixels lasting `frames` render frames.
    pub fn shake(&mut self, intensity: f32, frames: u32) {
        self.shake_intensity = intensity;
        self.shake_frames = frames;
    }

    /// Advance the shake by one render frame.
    pub fn update(&mut self, rng: &mut impl Rng) {
        if self.shake_frames > 0 {
            self.shake_x = (rng.random::<f32>() - 0.5) * self.shake_intensity * 2.0;
            self.shake_y = (rng.random::<f32>() - 0.5) * self.shake_intensity * 2.0;
            self.shake_frames -= 1;
        } else {
            self.shake_x = 0.0;
            self.shake_y = 0.0;
        }
    }

    /// World-space translation the renderer applies, shake included.
    pub fn offset(&self) -> (f32, f32) {
        (self.x - self.shake_x, self.y - self.shake_y)
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
        self.shake_x = 0.0;
        self.shake_y = 0.0;
        self.shake_frames = 0;
    }
}
