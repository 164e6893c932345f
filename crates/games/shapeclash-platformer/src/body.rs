use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in level space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left: x,
            right: x + width,
            top: y,
            bottom: y + height,
        }
    }
}

/// Position/velocity/size state shared by every dynamic actor.
///
/// `on_ground` is recomputed every tick by the collision resolver and never
/// persisted across ticks; controllers read the previous tick's value before
/// the loop clears it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
}

impl KinematicBody {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
