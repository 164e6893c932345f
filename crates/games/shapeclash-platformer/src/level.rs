use serde::{Deserialize, Serialize};

use crate::body::Aabb;
use crate::combat::Shape;
use crate::config::{LEVEL_HEIGHT, LEVEL_WIDTH, TILE_SIZE};

/// Static level geometry tile. Collision-only, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Tile {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: TILE_SIZE,
            height: TILE_SIZE,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.width, self.height)
    }
}

/// Enemy placement entry: the shape selects the behavior variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyPlacement {
    pub x: f32,
    pub y: f32,
    pub shape: Shape,
}

/// Static construction data for one level: geometry plus entity placements.
///
/// Supplied to the game at (re)start; the simulation never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub width: f32,
    pub height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub tiles: Vec<Tile>,
    pub enemies: Vec<EnemyPlacement>,
    pub coins: Vec<(f32, f32)>,
    pub orbs: Vec<(f32, f32)>,
    pub spikes: Vec<(f32, f32)>,
    pub checkpoints: Vec<(f32, f32)>,
    pub goal: (f32, f32),
}

/// Lay a horizontal run of tiles covering `[x0, x1)` at height `y`.
fn tile_run(tiles: &mut Vec<Tile>, x0: f32, x1: f32, y: f32) {
    let mut x = x0;
    while x < x1 {
        tiles.push(Tile::new(x, y));
        x += TILE_SIZE;
    }
}

/// The built-in 2400x600 level: three screens of rising difficulty.
pub fn default_level() -> LevelData {
    let mut tiles = Vec::new();
    let mut enemies = Vec::new();
    let mut coins = Vec::new();
    let mut orbs = Vec::new();

    // Ground floor across the entire level.
    tile_run(&mut tiles, 0.0, LEVEL_WIDTH, 550.0);

    // Screen 1 (0-800): tutorial section.
    tile_run(&mut tiles, 300.0, 450.0, 450.0);
    tile_run(&mut tiles, 550.0, 700.0, 350.0);
    tile_run(&mut tiles, 650.0, 750.0, 300.0);
    enemies.push(EnemyPlacement {
        x: 200.0,
        y: 500.0,
        shape: Shape::Circle,
    });
    enemies.push(EnemyPlacement {
        x: 350.0,
        y: 400.0,
        shape: Shape::Square,
    });
    enemies.push(EnemyPlacement {
        x: 600.0,
        y: 300.0,
        shape: Shape::Triangle,
    });
    coins.extend([
        (250.0, 500.0),
        (350.0, 420.0),
        (420.0, 420.0),
        (600.0, 320.0),
        (680.0, 320.0),
    ]);
    orbs.push((700.0, 270.0));

    // Screen 2 (800-1600): platform-jumping challenge.
    tile_run(&mut tiles, 850.0, 950.0, 450.0);
    tile_run(&mut tiles, 1050.0, 1150.0, 400.0);
    tile_run(&mut tiles, 1250.0, 1350.0, 350.0);
    tile_run(&mut tiles, 1450.0, 1600.0, 450.0);
    enemies.push(EnemyPlacement {
        x: 900.0,
        y: 400.0,
        shape: Shape::Circle,
    });
    enemies.push(EnemyPlacement {
        x: 1300.0,
        y: 300.0,
        shape: Shape::Circle,
    });
    enemies.push(EnemyPlacement {
        x: 1100.0,
        y: 350.0,
        shape: Shape::Square,
    });
    enemies.push(EnemyPlacement {
        x: 1500.0,
        y: 400.0,
        shape: Shape::Triangle,
    });
    coins.extend([
        (900.0, 420.0),
        (1100.0, 370.0),
        (1200.0, 500.0),
        (1300.0, 320.0),
        (1400.0, 500.0),
        (1500.0, 420.0),
    ]);
    orbs.push((1550.0, 420.0));

    // Screen 3 (1600-2400): final section.
    tile_run(&mut tiles, 1650.0, 1900.0, 350.0);
    tile_run(&mut tiles, 1950.0, 2100.0, 450.0);
    tile_run(&mut tiles, 2150.0, 2230.0, 400.0);
    tile_run(&mut tiles, 2250.0, 2350.0, 300.0);
    enemies.push(EnemyPlacement {
        x: 1700.0,
        y: 300.0,
        shape: Shape::Triangle,
    });
    enemies.push(EnemyPlacement {
        x: 1800.0,
        y: 300.0,
        shape: Shape::Square,
    });
    enemies.push(EnemyPlacement {
        x: 2000.0,
        y: 400.0,
        shape: Shape::Circle,
    });
    coins.extend([
        (1650.0, 500.0),
        (1750.0, 320.0),
        (1850.0, 320.0),
        (1950.0, 500.0),
        (2000.0, 420.0),
        (2180.0, 370.0),
        (2280.0, 270.0),
    ]);
    orbs.push((2300.0, 270.0));

    LevelData {
        width: LEVEL_WIDTH,
        height: LEVEL_HEIGHT,
        spawn_x: 100.0,
        spawn_y: 400.0,
        tiles,
        enemies,
        coins,
        orbs,
        spikes: vec![(1380.0, 534.0), (1396.0, 534.0), (1412.0, 534.0)],
        checkpoints: vec![(800.0, 518.0)],
        goal: (2300.0, 218.0),
    }
}
