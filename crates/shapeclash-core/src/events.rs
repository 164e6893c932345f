use serde::{Deserialize, Serialize};

/// Discrete sound cues fired by the simulation, at most once per triggering
/// gameplay event. Playback is the audio collaborator's job; the simulation
/// never waits on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    #[serde(rename = "jump")]
    Jump,
    #[serde(rename = "pow")]
    Pow,
    #[serde(rename = "clash")]
    Clash,
    #[serde(rename = "damaged")]
    Damaged,
    #[serde(rename = "pickupCoin")]
    PickupCoin,
    #[serde(rename = "pickupOrb")]
    PickupOrb,
    #[serde(rename = "checkpoint")]
    Checkpoint,
    #[serde(rename = "levelComplete")]
    LevelComplete,
    #[serde(rename = "gameOver")]
    GameOver,
}
