use super::*;

use shapeclash_core::test_helpers::set_pressed;
use shapeclash_core::timestep::FIXED_DT;

use crate::config::{LEVEL_HEIGHT, LEVEL_WIDTH, TILE_SIZE};
use crate::level::Tile;

const DT: f32 = FIXED_DT;
/// Player top when standing on the floor row (550 - player height).
const FLOOR_STAND_Y: f32 = 518.0;

/// A level with just a full-width floor; entities are added per test.
fn bare_level() -> LevelData {
    let mut tiles = Vec::new();
    let mut x = 0.0;
    while x < LEVEL_WIDTH {
        tiles.push(Tile::new(x, 550.0));
        x += TILE_SIZE;
    }
    LevelData {
        width: LEVEL_WIDTH,
        height: LEVEL_HEIGHT,
        spawn_x: 100.0,
        spawn_y: FLOOR_STAND_Y,
        tiles,
        enemies: Vec::new(),
        coins: Vec::new(),
        orbs: Vec::new(),
        spikes: Vec::new(),
        checkpoints: Vec::new(),
        goal: (2300.0, 218.0),
    }
}

fn game_with(level: LevelData) -> Game {
    Game::with_level(GameConfig::default(), level)
}

fn run(game: &mut Game, steps: usize) -> Vec<AudioCue> {
    let mut cues = Vec::new();
    for _ in 0..steps {
        cues.extend(game.step(DT));
    }
    cues
}

// ================================================================
// Loop control: pause, restart, short-circuits
// ================================================================

#[test]
fn pause_freezes_simulation() {
    let mut game = game_with(bare_level());
    game.input.press(Key::Pause);
    game.step(DT);
    assert!(game.state.paused);
    let before = game.player.body;
    run(&mut game, 10);
    assert_eq!(game.player.body, before, "Nothing moves while paused");
    game.input.press(Key::Pause);
    game.step(DT);
    assert!(!game.state.paused);
}

#[test]
fn pause_press_consumed_once_across_catchup_steps() {
    let mut game = game_with(bare_level());
    game.input.press(Key::Pause);
    // One frame with three catch-up steps must toggle exactly once.
    game.advance(DT * 3.0 + 1e-4);
    assert!(game.state.paused, "A single press toggles a single time");
}

#[test]
fn restart_ignored_while_running() {
    let mut game = game_with(bare_level());
    game.state.score = 123;
    game.input.press(Key::Restart);
    game.step(DT);
    assert_eq!(game.state.score, 123, "Restart only applies after a terminal state");
}

#[test]
fn restart_after_game_over_resets_everything() {
    let mut game = game_with(bare_level());
    game.state.score = 500;
    game.state.orbs_collected = 2;
    game.state.health = 0;
    game.state.game_over = true;
    game.player.body.x = 900.0;
    game.input.press(Key::Restart);
    game.step(DT);
    assert!(!game.state.game_over);
    assert_eq!(game.state.health, INITIAL_HEALTH);
    assert_eq!(game.state.score, 0);
    assert_eq!(game.state.orbs_collected, 0);
    assert_eq!(game.player.body.x, 100.0, "Player back at spawn");
}

#[test]
fn terminal_states_halt_updates() {
    let mut game = game_with(bare_level());
    game.state.level_complete = true;
    let before = game.goal.time;
    run(&mut game, 10);
    assert_eq!(game.goal.time, before, "No subsystem runs after completion");
}

// ================================================================
// Physics integration: falling, landing, jumping
// ================================================================

#[test]
fn falling_player_lands_on_floor() {
    let mut level = bare_level();
    level.spawn_y = 400.0;
    let mut game = game_with(level);
    run(&mut game, 180);
    assert!(game.player.body.on_ground);
    assert_eq!(game.player.body.vy, 0.0);
    assert_eq!(game.player.body.y, FLOOR_STAND_Y);
}

#[test]
fn jump_rises_then_relands() {
    let mut game = game_with(bare_level());
    run(&mut game, 5); // settle ground contact
    set_pressed(&mut game.input, &[Key::Jump]);
    let cues = run(&mut game, 1);
    assert!(cues.contains(&AudioCue::Jump));
    assert!(game.player.body.vy < 0.0);
    set_pressed(&mut game.input, &[]);
    let mut peak = game.player.body.y;
    for _ in 0..240 {
        game.step(DT);
        peak = peak.min(game.player.body.y);
    }
    assert!(peak < FLOOR_STAND_Y - 20.0, "Jump should gain real height");
    assert_eq!(game.player.body.y, FLOOR_STAND_Y, "And come back down");
    assert!(game.player.body.on_ground);
}

// ================================================================
// Combat end-to-end scenarios
// ================================================================

fn enemy_at_spawn(shape: Shape) -> LevelData {
    let mut level = bare_level();
    level.enemies.push(level::EnemyPlacement {
        x: level.spawn_x,
        y: level.spawn_y,
        shape,
    });
    level
}

#[test]
fn draw_bounces_both_parties_apart() {
    // Player square vs square enemy: same shape, a draw.
    let mut game = game_with(enemy_at_spawn(Shape::Square));
    let cues = run(&mut game, 1);
    assert!(cues.contains(&AudioCue::Clash));
    assert_eq!(game.state.health, INITIAL_HEALTH, "Draw costs nothing");
    assert_eq!(game.state.score, 0);
    let pvx = game.player.body.vx;
    let evx = game.enemies[0].body.vx;
    assert_eq!(pvx.abs(), 100.0);
    assert_eq!(evx, -pvx, "Equal magnitude, opposite sign");
    assert_eq!(game.player.body.vy, -200.0);
    assert_eq!(game.enemies[0].body.vy, -200.0);
}

#[test]
fn circle_defeats_triangle() {
    let mut game = game_with(enemy_at_spawn(Shape::Triangle));
    game.player.shape = Shape::Circle;
    let cues = run(&mut game, 1);
    assert!(cues.contains(&AudioCue::Pow));
    assert!(!game.enemies[0].alive);
    assert_eq!(game.state.score, scoring::ENEMY_DEFEAT);
    assert_eq!(game.player.body.vy, -200.0, "Winner still bounces away");

    // The dead enemy never scores, moves, or collides again.
    let body = game.enemies[0].body;
    run(&mut game, 120);
    assert_eq!(game.state.score, scoring::ENEMY_DEFEAT);
    assert_eq!(game.enemies[0].body, body);
    assert_eq!(game.state.health, INITIAL_HEALTH);
}

#[test]
fn losing_costs_health_and_grants_invulnerability() {
    // Player square vs triangle: not a draw, not a winning pair, so a loss.
    let mut game = game_with(enemy_at_spawn(Shape::Triangle));
    let cues = run(&mut game, 1);
    assert!(cues.contains(&AudioCue::Damaged));
    assert_eq!(game.state.health, INITIAL_HEALTH - 1);
    assert!(game.player.invulnerable);
    assert_eq!(game.player.body.vx.abs(), 200.0, "Knockback beats win-bounce");
    assert_eq!(game.player.body.vy, -200.0);
}

#[test]
fn health_never_drops_while_invulnerable() {
    let mut game = game_with(enemy_at_spawn(Shape::Triangle));
    // Pin the player onto the enemy so the overlap never ends.
    for _ in 0..60 {
        game.player.body.x = game.enemies[0].body.x;
        game.player.body.y = game.enemies[0].body.y;
        game.step(DT);
        if game.player.invulnerable {
            assert!(game.player.invulnerability_timer > 0.0);
        }
    }
    // 60 steps = 1.0s, still inside the 1.2s window: exactly one hit.
    assert_eq!(game.state.health, INITIAL_HEALTH - 1);
}

#[test]
fn game_over_on_exactly_the_fifth_hit() {
    let mut game = game_with(enemy_at_spawn(Shape::Triangle));
    let mut damaged = 0;
    for _ in 0..1000 {
        game.player.body.x = game.enemies[0].body.x;
        game.player.body.y = game.enemies[0].body.y;
        let cues = game.step(DT);
        damaged += cues.iter().filter(|c| **c == AudioCue::Damaged).count();
        assert_eq!(
            game.state.game_over,
            game.state.health <= 0,
            "Game over exactly when health runs out"
        );
        if game.state.game_over {
            break;
        }
    }
    assert!(game.state.game_over);
    assert_eq!(damaged, 5, "Five qualifying hits from full health");
    assert_eq!(game.state.health, 0);
}

#[test]
fn game_over_fires_cue_once() {
    let mut game = game_with(enemy_at_spawn(Shape::Triangle));
    let mut over_cues = 0;
    for _ in 0..1000 {
        game.player.body.x = game.enemies[0].body.x;
        game.player.body.y = game.enemies[0].body.y;
        let cues = game.step(DT);
        over_cues += cues.iter().filter(|c| **c == AudioCue::GameOver).count();
    }
    assert_eq!(over_cues, 1);
}

// ================================================================
// Collectibles, hazards, checkpoints, goal
// ================================================================

#[test]
fn coin_scores_exactly_once() {
    let mut level = bare_level();
    level.coins.push((100.0, 526.0));
    let mut game = game_with(level);
    let cues = run(&mut game, 1);
    assert_eq!(game.state.score, scoring::COIN);
    assert_eq!(
        cues.iter().filter(|c| **c == AudioCue::PickupCoin).count(),
        1
    );
    run(&mut game, 120);
    assert_eq!(game.state.score, scoring::COIN, "A coin only pays out once");
}

#[test]
fn spike_damages_and_respawns_at_start() {
    let mut level = bare_level();
    level.spikes.push((200.0, 534.0));
    let mut game = game_with(level);
    game.player.body.x = 200.0;
    game.player.body.y = 530.0;
    let cues = run(&mut game, 1);
    assert!(cues.contains(&AudioCue::Damaged));
    assert_eq!(game.state.health, INITIAL_HEALTH - 1);
    assert_eq!(game.player.body.x, 100.0, "Back at level start");
    assert_eq!(game.player.body.vx, 0.0);
    assert_eq!(game.player.body.vy, 0.0);
    assert!(game.player.invulnerable);
    assert!(
        game.player.invulnerability_timer > 1.2,
        "Respawn invulnerability outlasts the combat one"
    );
}

#[test]
fn pit_fall_uses_the_hazard_handler() {
    let mut game = game_with(bare_level());
    game.player.body.y = LEVEL_HEIGHT + 10.0;
    let cues = run(&mut game, 1);
    assert!(cues.contains(&AudioCue::Damaged));
    assert_eq!(game.state.health, INITIAL_HEALTH - 1);
    assert_eq!(game.player.body.y, FLOOR_STAND_Y, "Respawned at spawn");
}

#[test]
fn checkpoint_activates_once_and_moves_respawn() {
    let mut level = bare_level();
    level.checkpoints.push((300.0, 518.0));
    let mut game = game_with(level);
    game.player.body.x = 300.0;
    let cues = run(&mut game, 1);
    assert_eq!(
        cues.iter().filter(|c| **c == AudioCue::Checkpoint).count(),
        1
    );
    assert!(game.checkpoints[0].active);
    assert_eq!(game.spawn_point, (300.0, 518.0));

    // Lingering on it fires nothing further.
    let cues = run(&mut game, 30);
    assert!(!cues.contains(&AudioCue::Checkpoint));

    // Damage now respawns at the checkpoint, not the level start.
    game.player.body.y = LEVEL_HEIGHT + 10.0;
    run(&mut game, 1);
    assert_eq!(game.player.body.x, 300.0);
    assert_eq!(game.player.body.y, 518.0);
}

#[test]
fn goal_inert_until_three_orbs() {
    let mut level = bare_level();
    // Two orbs on the player, the third far away; goal overlaps the spawn.
    level.orbs.push((100.0, 526.0));
    level.orbs.push((110.0, 526.0));
    level.orbs.push((2000.0, 526.0));
    level.goal = (90.0, 500.0);
    let mut game = game_with(level);

    let cues = run(&mut game, 1);
    assert_eq!(game.state.orbs_collected, 2);
    assert_eq!(cues.iter().filter(|c| **c == AudioCue::PickupOrb).count(), 2);
    assert!(
        !game.state.level_complete,
        "Standing on the goal with 2 orbs must not complete"
    );
    run(&mut game, 30);
    assert!(!game.state.level_complete);

    // Bring the third orb to the player: completion happens the same step.
    game.orbs[2].x = 100.0;
    let cues = run(&mut game, 1);
    assert_eq!(game.state.orbs_collected, 3);
    assert!(game.state.level_complete);
    assert!(cues.contains(&AudioCue::PickupOrb));
    assert!(cues.contains(&AudioCue::LevelComplete));
}

#[test]
fn completion_bonus_includes_health_and_no_death() {
    let mut level = bare_level();
    level.orbs.push((100.0, 526.0));
    level.orbs.push((110.0, 526.0));
    level.orbs.push((120.0, 526.0));
    level.goal = (90.0, 500.0);
    let mut game = game_with(level);
    run(&mut game, 1);
    assert!(game.state.level_complete);
    assert_eq!(
        game.state.score,
        scoring::completion_bonus(INITIAL_HEALTH),
        "Untouched run earns the full bonus"
    );
}

// ================================================================
// Determinism
// ================================================================

/// Scripted per-step inputs shared by determinism runs.
fn script_keys(step: usize) -> Vec<Key> {
    let mut keys = Vec::new();
    if step % 200 < 120 {
        keys.push(Key::Right);
    } else {
        keys.push(Key::Left);
    }
    if step % 50 == 0 {
        keys.push(Key::Jump);
    }
    if step % 300 > 250 {
        keys.push(Key::Run);
    }
    keys
}

#[test]
fn identical_runs_are_bit_identical() {
    let mut a = Game::new(GameConfig::default());
    let mut b = Game::new(GameConfig::default());
    for step in 0..900 {
        set_pressed(&mut a.input, &script_keys(step));
        set_pressed(&mut b.input, &script_keys(step));
        a.step(DT);
        b.step(DT);
        assert_eq!(a.player.body, b.player.body, "diverged at step {step}");
    }
    assert_eq!(a.enemies, b.enemies);
    assert_eq!(a.state, b.state);
}

#[test]
fn different_seeds_diverge() {
    let mut a = Game::new(GameConfig {
        seed: 1,
        ..GameConfig::default()
    });
    let mut b = Game::new(GameConfig {
        seed: 2,
        ..GameConfig::default()
    });
    run(&mut a, 900);
    run(&mut b, 900);
    // Hop intervals and impulses come from the seed; the hoppers drift apart.
    assert_ne!(a.enemies, b.enemies);
}

#[test]
fn restart_replays_identically() {
    let mut a = Game::new(GameConfig::default());
    run(&mut a, 300);
    let mut b = Game::new(GameConfig::default());
    run(&mut b, 120);
    b.reset();
    run(&mut b, 300);
    assert_eq!(a.player.body, b.player.body);
    assert_eq!(a.enemies, b.enemies);
}

// ================================================================
// Render/UI boundary
// ================================================================

#[test]
fn hud_mirrors_game_state() {
    let mut game = game_with(bare_level());
    game.state.score = 420;
    game.state.orbs_collected = 2;
    game.player.shape = Shape::Triangle;
    let hud = game.hud();
    assert_eq!(hud.score, 420);
    assert_eq!(hud.orbs_collected, 2);
    assert_eq!(hud.health, INITIAL_HEALTH);
    assert_eq!(hud.player_shape, Shape::Triangle);
    assert!(!hud.game_over);
}

#[test]
fn snapshot_serializes_and_tracks_goal_gate() {
    let mut game = Game::new(GameConfig::default());
    run(&mut game, 5);
    let snap = game.snapshot();
    assert!(!snap.goal_active);
    assert_eq!(snap.enemies.len(), 10);
    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.contains("\"square\""), "Shapes use their wire names");

    game.state.orbs_collected = 3;
    assert!(game.snapshot().goal_active);
}

#[test]
fn advance_runs_whole_steps_only() {
    let mut game = game_with(bare_level());
    game.advance(DT * 0.4);
    assert_eq!(game.goal.time, 0.0, "Partial frame buffers, no step runs");
    game.advance(DT * 0.7);
    assert!((game.goal.time - DT).abs() < 1e-6, "Remainder completed a step");
}

#[test]
fn effects_expire_and_prune() {
    let mut game = game_with(enemy_at_spawn(Shape::Square));
    run(&mut game, 1); // draw: sparks and a CLASH! text
    assert!(!game.particles.particles().is_empty());
    assert!(!game.texts.is_empty());
    // Push the player away so no further clashes keep re-emitting.
    game.player.body.x = 600.0;
    game.player.body.y = FLOOR_STAND_Y;
    run(&mut game, 120);
    assert!(game.particles.particles().is_empty());
    assert!(game.texts.is_empty());
}

#[test]
fn reset_restores_world_and_state() {
    let mut game = Game::new(GameConfig::default());
    run(&mut game, 300);
    game.state.score = 77;
    game.enemies[0].alive = false;
    game.coins[0].collect();
    game.reset();
    assert_eq!(game.state, GameState::new());
    assert!(game.enemies.iter().all(|e| e.alive));
    assert!(game.coins.iter().all(|c| !c.collected));
    assert_eq!(game.player.body.x, 100.0);
    assert_eq!(game.player.shape, Shape::Square);
}

// ================================================================
// Whole-session properties
// ================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        // Score never decreases, health never increases, and the player
        // stays inside the level regardless of input.
        #[test]
        fn session_invariants_hold(
            seed in 0u64..50,
            script in proptest::collection::vec(0u8..16, 50..200)
        ) {
            let mut game = Game::new(GameConfig {
                seed,
                ..GameConfig::default()
            });
            let mut last_score = 0;
            let mut last_health = INITIAL_HEALTH;
            for code in script {
                let mut keys = Vec::new();
                if code & 1 != 0 { keys.push(Key::Left); }
                if code & 2 != 0 { keys.push(Key::Right); }
                if code & 4 != 0 { keys.push(Key::Jump); }
                if code & 8 != 0 { keys.push(Key::Run); }
                set_pressed(&mut game.input, &keys);
                game.step(DT);

                prop_assert!(game.state.score >= last_score, "score regressed");
                prop_assert!(game.state.health <= last_health, "health grew");
                prop_assert!(game.state.orbs_collected <= config::ORBS_REQUIRED);
                prop_assert!(game.player.body.x >= 0.0);
                prop_assert!(game.player.body.x <= LEVEL_WIDTH - game.player.body.width);
                prop_assert!(
                    game.player.invulnerable == (game.player.invulnerability_timer > 0.0)
                );
                last_score = game.state.score;
                last_health = game.state.health;
            }
        }
    }
}
