use serde::{Deserialize, Serialize};

/// The fixed alphabet of game keys the simulation reads.
///
/// The host maps physical keyboard events onto these; the simulation never
/// sees raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Run,
    Jump,
    MorphForward,
    MorphBackward,
    Pause,
    Restart,
}

impl Key {
    /// All keys, in index order.
    pub const ALL: [Key; 8] = [
        Key::Left,
        Key::Right,
        Key::Run,
        Key::Jump,
        Key::MorphForward,
        Key::MorphBackward,
        Key::Pause,
        Key::Restart,
    ];

    fn index(self) -> usize {
        match self {
            Key::Left => 0,
            Key::Right => 1,
            Key::Run => 2,
            Key::Jump => 3,
            Key::MorphForward => 4,
            Key::MorphBackward => 5,
            Key::Pause => 6,
            Key::Restart => 7,
        }
    }
}

/// Pressed-key state fed by the host and consumed by the simulation.
///
/// `consume` clears a pressed flag so a single physical press is not re-read
/// by the next fixed step; the host's key-up still calls `release` as usual.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputState {
    pressed: [bool; Key::ALL.len()],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.pressed[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.pressed[key.index()] = false;
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// Clear a pressed flag. Idempotent: consuming an unpressed key is a no-op.
    pub fn consume(&mut self, key: Key) {
        self.pressed[key.index()] = false;
    }

    /// Horizontal intent: -1 (left), 0, +1 (right). Both held cancels out.
    pub fn move_dir(&self) -> f32 {
        let mut dir = 0.0;
        if self.is_pressed(Key::Left) {
            dir -= 1.0;
        }
        if self.is_pressed(Key::Right) {
            dir += 1.0;
        }
        dir
    }
}
