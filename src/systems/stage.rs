//! Session flow: timed stage pauses, collision resolution, lives, and
//! win/lose handling.

use bevy_ecs::{
    event::{EventReader, EventWriter},
    query::Without,
    system::{Query, Res, ResMut},
};
use bevy_ecs::resource::Resource;
use glam::Vec2;
use tracing::{debug, info};

use crate::constants::{
    CAPTURE_SCORES, GHOST_SPAWN_NUDGE, INITIAL_LIVES, LEVEL_CLEAR_DELAY, PLAYER_SPAWN_NUDGE,
    PLAYER_START_TILE, RESPAWN_DELAY, START_JINGLE_LENGTH,
};
use crate::events::GameEvent;
use crate::map::{direction::Direction, Map, Occupant};

use super::audio::{AudioEvent, OneShot};
use super::components::{
    BufferedDirection, DeltaTime, Ghost, GhostMode, ModeController, Movable, Paused,
    PlayerControlled, PlayerLives, Position, ResetPending, Route, Score, TilePosition, TurnCooldown,
};
use super::ghost::enter_mode;

/// High-level flow of a play session. Gameplay systems only run while
/// `Playing`; the timed stages reproduce the original's start-jingle,
/// respawn, and level-clear pauses.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub enum GameStage {
    Starting { remaining: f32 },
    Playing,
    Respawning { remaining: f32 },
    LevelClear { remaining: f32 },
    GameOver,
}

impl GameStage {
    pub fn session_start() -> Self {
        GameStage::Starting {
            remaining: START_JINGLE_LENGTH,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GameStage::Playing)
    }
}

type GhostQuery<'w, 's> = Query<
    'w,
    's,
    (&'static Ghost, &'static mut GhostMode, &'static mut Movable, &'static mut Position, &'static mut TilePosition, &'static mut Route),
    Without<PlayerControlled>,
>;

type PlayerQuery<'w, 's> = Query<
    'w,
    's,
    (&'static mut PlayerControlled, &'static mut Position, &'static mut TilePosition, &'static mut Movable, &'static mut BufferedDirection, &'static mut TurnCooldown),
    Without<Ghost>,
>;

#[allow(clippy::too_many_arguments)]
pub fn stage_system(
    time: Res<DeltaTime>,
    paused: Res<Paused>,
    mut stage: ResMut<GameStage>,
    mut score: ResMut<Score>,
    mut lives: ResMut<PlayerLives>,
    mut controller: ResMut<ModeController>,
    mut map: ResMut<Map>,
    mut reset: ResMut<ResetPending>,
    mut events: EventReader<GameEvent>,
    mut audio: EventWriter<AudioEvent>,
    mut ghosts: GhostQuery,
    mut players: PlayerQuery,
) {
    if paused.0 {
        return;
    }

    // A shell-requested reset restarts the whole session.
    if reset.0 {
        reset.0 = false;
        score.0 = 0;
        lives.0 = INITIAL_LIVES;
        map.regenerate_pellets();
        reset_entities(&mut map, &mut controller, &mut ghosts, &mut players);
        *stage = GameStage::session_start();
        audio.write(AudioEvent::Play(OneShot::GameStart));
        events.clear();
        info!("Session reset");
        return;
    }

    match &mut *stage {
        GameStage::Starting { remaining }
        | GameStage::Respawning { remaining }
        | GameStage::LevelClear { remaining } => {
            *remaining -= time.0;
            if *remaining <= 0.0 {
                *stage = GameStage::Playing;
            }
            events.clear();
            return;
        }
        GameStage::GameOver => {
            events.clear();
            return;
        }
        GameStage::Playing => {}
    }

    let mut player_died = false;
    let mut level_cleared = false;
    for event in events.read() {
        match event {
            GameEvent::GhostCaught { ghost } => {
                let tier = (controller.capture_streak as usize).min(CAPTURE_SCORES.len() - 1);
                score.0 += CAPTURE_SCORES[tier];
                controller.capture_streak += 1;
                audio.write(AudioEvent::Play(OneShot::EatGhost));
                if let Ok((g, mut mode, mut movable, _, _, mut route)) = ghosts.get_mut(*ghost) {
                    enter_mode(&mut mode, &mut movable, &mut route, GhostMode::Eaten);
                    debug!(ghost = g.0.as_ref(), score = CAPTURE_SCORES[tier], "Pursuer captured");
                }
            }
            GameEvent::PlayerCaught { .. } => player_died = true,
            GameEvent::LevelCleared => level_cleared = true,
            GameEvent::PelletEaten { .. } => {}
        }
    }

    if player_died {
        lives.0 -= 1;
        audio.write(AudioEvent::Play(OneShot::Death));
        if lives.0 < 0 {
            *stage = GameStage::GameOver;
            info!(score = score.0, "Game over");
            return;
        }
        reset_entities(&mut map, &mut controller, &mut ghosts, &mut players);
        *stage = GameStage::Respawning {
            remaining: RESPAWN_DELAY,
        };
        debug!(lives = lives.0, "Player caught, respawning");
        return;
    }

    if level_cleared {
        map.regenerate_pellets();
        reset_entities(&mut map, &mut controller, &mut ghosts, &mut players);
        *stage = GameStage::LevelClear {
            remaining: LEVEL_CLEAR_DELAY,
        };
        info!(score = score.0, "Level cleared");
    }
}

/// Returns every mover to its spawn arrangement and restarts the shared
/// timers. Pellets are left alone; callers regenerate them when the level
/// itself restarts.
pub(crate) fn reset_entities(
    map: &mut Map,
    controller: &mut ModeController,
    ghosts: &mut GhostQuery,
    players: &mut PlayerQuery,
) {
    for (mut player, mut position, mut tile, mut movable, mut buffered, mut cooldown) in players.iter_mut() {
        map.clear_occupant(tile.current);
        *tile = TilePosition::at(PLAYER_START_TILE);
        position.0 = map.tile_origin(PLAYER_START_TILE) + Vec2::new(PLAYER_SPAWN_NUDGE, 0.0);
        movable.heading = Some(Direction::Right);
        player.facing = Direction::Right;
        buffered.0 = None;
        cooldown.remaining = 0.0;
        map.mark_occupant(PLAYER_START_TILE, Occupant::Player);
    }

    for (ghost, mut mode, mut movable, mut position, mut tile, mut route) in ghosts.iter_mut() {
        let kind = ghost.0;
        map.clear_occupant(tile.current);
        *tile = TilePosition::at(kind.spawn_tile());
        position.0 = map.tile_origin(kind.spawn_tile()) + Vec2::new(GHOST_SPAWN_NUDGE, 0.0);
        movable.heading = Some(kind.spawn_facing());
        enter_mode(&mut mode, &mut movable, &mut route, GhostMode::Scatter);
        map.mark_occupant(kind.spawn_tile(), Occupant::Pursuer);
    }

    controller.reset();
}
