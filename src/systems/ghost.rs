//! Pursuer state timers, route planning, and movement.

use bevy_ecs::{
    event::EventWriter,
    query::Without,
    system::{Query, Res, ResMut},
};
use glam::{IVec2, Vec2};
use tracing::{debug, trace};

use crate::constants::{FRIGHTENED_LENGTH, HOUSE_TARGET_TILE};
use crate::error::GameError;
use crate::map::{direction::Direction, Map, Occupant};
use crate::pathfind::find_route;

use super::components::{
    DeltaTime, GameRng, Ghost, GhostKind, GhostMode, GhostRoster, ModeController, Movable, Paused,
    PlayerControlled, Position, Route, TilePosition,
};
use super::movement::{self, TileUpdate};
use super::stage::GameStage;
use super::targeting::{self, TargetContext};

/// Switches a pursuer's behavior state: speed is reset for the new state and
/// the in-flight route is dropped, forcing an immediate recomputation.
pub fn enter_mode(mode: &mut GhostMode, movable: &mut Movable, route: &mut Route, next: GhostMode) {
    *mode = next;
    movable.speed = next.speed();
    route.clear();
}

/// Advances per-pursuer state timers. Inactive pursuers (still inside the
/// staggered-release window) are skipped, so a frightened timer does not run
/// down before the pursuer ever moves.
pub fn ghost_timer_system(
    stage: Res<GameStage>,
    paused: Res<Paused>,
    time: Res<DeltaTime>,
    controller: Res<ModeController>,
    roster: Res<GhostRoster>,
    mut ghosts: Query<(&Ghost, &mut GhostMode, &mut Movable, &mut Route)>,
) {
    if paused.0 || !stage.is_playing() {
        return;
    }

    for &entity in roster.0.iter() {
        let Ok((ghost, mut mode, mut movable, mut route)) = ghosts.get_mut(entity) else {
            continue;
        };
        if !controller.ghost_active(ghost.0) {
            continue;
        }

        let expired = match &mut *mode {
            GhostMode::Frightened { timer } => {
                *timer += time.0;
                *timer >= FRIGHTENED_LENGTH
            }
            _ => false,
        };
        if expired {
            enter_mode(&mut mode, &mut movable, &mut route, GhostMode::Chase);
            debug!(ghost = ghost.0.as_ref(), "Frightened expired, resuming chase");
        }
    }
}

/// Plans and moves every active pursuer, in fixed roster order.
///
/// The direct chaser updates first; the predictors that consume its tile
/// read the value already updated this tick.
#[allow(clippy::type_complexity, clippy::too_many_arguments)]
pub fn ghost_ai_system(
    stage: Res<GameStage>,
    paused: Res<Paused>,
    time: Res<DeltaTime>,
    controller: Res<ModeController>,
    mut map: ResMut<Map>,
    mut rng: ResMut<GameRng>,
    roster: Res<GhostRoster>,
    players: Query<(&TilePosition, &PlayerControlled), Without<Ghost>>,
    mut ghosts: Query<
        (&Ghost, &mut GhostMode, &mut Movable, &mut Position, &mut TilePosition, &mut Route),
        Without<PlayerControlled>,
    >,
    mut errors: EventWriter<GameError>,
) {
    if paused.0 || !stage.is_playing() {
        return;
    }

    let Some((player_tile, player)) = players.iter().next() else {
        return;
    };
    let player_tile = player_tile.current;
    let player_facing = player.facing;
    let mut blinky_tile = IVec2::ZERO;

    for &entity in roster.0.iter() {
        let Ok((ghost, mut mode, mut movable, mut position, mut tile, mut route)) = ghosts.get_mut(entity) else {
            errors.write(GameError::InvalidState(format!(
                "Pursuer roster entity {entity:?} is missing its components"
            )));
            continue;
        };
        let kind = ghost.0;
        if !controller.ghost_active(kind) {
            continue;
        }

        // An eaten pursuer reverts the moment it occupies the house target.
        if *mode == GhostMode::Eaten && tile.current == HOUSE_TARGET_TILE {
            enter_mode(&mut mode, &mut movable, &mut route, GhostMode::Chase);
            debug!(ghost = kind.as_ref(), "Reached the house, rejoining the chase");
        }

        // Replan only after physically entering a new tile.
        if route.anchor != Some(tile.current) {
            let ctx = TargetContext {
                player_tile,
                player_facing,
                blinky_tile,
            };
            let target = match *mode {
                GhostMode::Scatter => targeting::scatter_target(&map, kind),
                GhostMode::Chase => targeting::chase_target(kind, tile.current, &map, &ctx),
                GhostMode::Frightened { .. } => {
                    targeting::frightened_target(&map, tile.current, movable.heading, &mut rng.0)
                }
                GhostMode::Eaten => HOUSE_TARGET_TILE,
            };
            route.tiles = find_route(&map, tile.current, target, movable.heading);
            route.anchor = Some(tile.current);
            trace!(ghost = kind.as_ref(), ?target, steps = route.tiles.len(), "Route recomputed");

            // An empty route holds the pursuer at its tile — except at the
            // tunnel mouths, where the self-target glide carries it through
            // the wrap.
            if route.tiles.is_empty() && !map.is_tunnel(tile.current) {
                movable.heading = None;
            }
        }

        // Head toward the next route tile; the horizontal delta is checked
        // first, and the perpendicular axis snaps to the lane.
        if let Some(next) = route.next_tile() {
            let delta = next - tile.current;
            let heading = if delta.x > 0 {
                Some(Direction::Right)
            } else if delta.x < 0 {
                Some(Direction::Left)
            } else if delta.y > 0 {
                Some(Direction::Down)
            } else if delta.y < 0 {
                Some(Direction::Up)
            } else {
                None
            };
            if let Some(direction) = heading {
                movable.heading = Some(direction);
                movement::align_to_tile(&mut position, tile.current, direction, &map, Vec2::ZERO);
            }
        }

        match movable.heading {
            Some(direction) => movement::advance(&mut position, direction, movable.speed, time.0),
            None => position.0 = map.tile_origin(tile.current),
        }

        match movement::update_tile_position(&mut position, &mut tile, movable.heading, movable.probe, &map) {
            TileUpdate::Entered(entered) | TileUpdate::Teleported(entered) => {
                map.clear_occupant(tile.previous);
                map.mark_occupant(entered, Occupant::Pursuer);
            }
            TileUpdate::Unchanged => {}
        }

        if kind == GhostKind::Blinky {
            blinky_tile = tile.current;
        }
    }
}
