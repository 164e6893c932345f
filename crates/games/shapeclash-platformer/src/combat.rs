use serde::{Deserialize, Serialize};

/// The three combatant shapes. Rock-paper-scissors roles: circle is rock,
/// square is paper, triangle is scissors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Square,
    Circle,
    Triangle,
}

impl Shape {
    /// Morph cycle: square → circle → triangle → square.
    pub fn next(self) -> Shape {
        match self {
            Shape::Square => Shape::Circle,
            Shape::Circle => Shape::Triangle,
            Shape::Triangle => Shape::Square,
        }
    }

    pub fn prev(self) -> Shape {
        match self {
            Shape::Square => Shape::Triangle,
            Shape::Circle => Shape::Square,
            Shape::Triangle => Shape::Circle,
        }
    }
}

/// Encounter result from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

/// Adjudicate a player-enemy encounter.
///
/// Draw on identical shapes; the player wins exactly the three dominant
/// pairs (circle beats triangle, square beats circle, triangle beats
/// square); every other pairing is a loss.
pub fn resolve(player: Shape, enemy: Shape) -> Outcome {
    if player == enemy {
        return Outcome::Draw;
    }
    match (player, enemy) {
        (Shape::Circle, Shape::Triangle)
        | (Shape::Square, Shape::Circle)
        | (Shape::Triangle, Shape::Square) => Outcome::Win,
        _ => Outcome::Lose,
    }
}
