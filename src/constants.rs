//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{IVec2, UVec2, Vec2};

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of each board tile, in pixels.
pub const TILE_SIZE: u32 = 24;
/// The size of the game board, in tiles.
pub const BOARD_SIZE: UVec2 = UVec2::new(28, 31);
/// Vertical offset of the board below the score strip, in pixels.
pub const SCORE_OFFSET: u32 = 27;
/// The size of the window, in pixels.
pub const WINDOW_SIZE: UVec2 = UVec2::new(
    BOARD_SIZE.x * TILE_SIZE,
    BOARD_SIZE.y * TILE_SIZE + SCORE_OFFSET,
);

/// Movement speeds, in pixels per second.
pub const PLAYER_SPEED: f32 = 150.0;
pub const GHOST_NORMAL_SPEED: f32 = 140.0;
pub const GHOST_FRIGHTENED_SPEED: f32 = 90.0;
pub const GHOST_EATEN_SPEED: f32 = 240.0;

/// Length of the start jingle pause before the first simulation tick.
pub const START_JINGLE_LENGTH: f32 = 4.23;
/// Cooldown after a successful player turn.
pub const TURN_COOLDOWN: f32 = 0.2;
/// The staggered-release window: two pursuers are active immediately, the
/// third after half of this delay, the fourth after the full delay.
pub const GHOST_RELEASE_DELAY: f32 = 2.0;
pub const SCATTER_LENGTH: f32 = 15.0;
pub const CHASE_LENGTH: f32 = 20.0;
pub const FRIGHTENED_LENGTH: f32 = 8.0;
/// Frightened time after which the warning animation phase is signaled.
pub const FRIGHTENED_WARNING_AT: f32 = 5.0;
pub const RESPAWN_DELAY: f32 = 4.0;
pub const LEVEL_CLEAR_DELAY: f32 = 3.0;

/// Score values.
pub const SMALL_PELLET_SCORE: u32 = 10;
pub const POWER_PELLET_SCORE: u32 = 50;
/// Capture scores by consumption order within one power-pellet window.
pub const CAPTURE_SCORES: [u32; 4] = [200, 400, 800, 1600];

pub const INITIAL_LIVES: i32 = 4;

/// Leading-edge probe offsets used by the tile containment test.
pub const PLAYER_PROBE: f32 = 19.0 / 2.0;
pub const GHOST_PROBE: f32 = 10.0;

/// Horizontal spawn nudges that center the sprites on their lanes.
pub const PLAYER_SPAWN_NUDGE: f32 = 14.0;
pub const GHOST_SPAWN_NUDGE: f32 = 12.0;
/// Offset applied when the player snaps to its tile on a turn or while idle.
pub const PLAYER_ALIGN_NUDGE: Vec2 = Vec2::new(2.0, 1.0);

/// Sprite draw offsets relative to the continuous position.
pub const PLAYER_DRAW_OFFSET: Vec2 = Vec2::new(-9.5, -9.5);
pub const GHOST_DRAW_OFFSET: Vec2 = Vec2::new(-9.0, -9.0);

/// How far past the board edge a mover must travel before the tunnel
/// teleport fires.
pub const TELEPORT_THRESHOLD: f32 = 30.0;

/// Spawn and landmark tiles.
pub const PLAYER_START_TILE: IVec2 = IVec2::new(13, 23);
pub const HOUSE_EXIT_TILE: IVec2 = IVec2::new(13, 11);
pub const HOUSE_TARGET_TILE: IVec2 = IVec2::new(13, 14);
pub const LEFT_TUNNEL_TILE: IVec2 = IVec2::new(0, 14);
pub const RIGHT_TUNNEL_TILE: IVec2 = IVec2::new(27, 14);

/// Distance (in tiles) above which the proximity-fleer chases the player.
pub const FLEE_DISTANCE: f32 = 8.0;

/// The fixed maze layout: 0 = small pellet, 1 = wall, 2 = ghost house,
/// 3 = power pellet, 5 = open. The tunnel row sits at y = 14.
pub const LAYOUT: [[u8; BOARD_SIZE.x as usize]; BOARD_SIZE.y as usize] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1],
    [1, 3, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 3, 1],
    [1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 1],
    [1, 0, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 5, 1, 1, 5, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 5, 1, 1, 5, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 1, 1, 0, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 5, 1, 1, 1, 2, 2, 1, 1, 1, 5, 1, 1, 0, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 5, 1, 2, 2, 2, 2, 2, 2, 1, 5, 1, 1, 0, 1, 1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 5, 5, 5, 1, 2, 2, 2, 2, 2, 2, 1, 5, 5, 5, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 5, 1, 2, 2, 2, 2, 2, 2, 1, 5, 1, 1, 0, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 5, 1, 1, 1, 1, 1, 1, 1, 1, 5, 1, 1, 0, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 1, 1, 0, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 5, 1, 1, 1, 1, 1, 1, 1, 1, 5, 1, 1, 0, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 0, 1, 1, 5, 1, 1, 1, 1, 1, 1, 1, 1, 5, 1, 1, 0, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1],
    [1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1],
    [1, 3, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 5, 5, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 3, 1],
    [1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 1],
    [1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];
