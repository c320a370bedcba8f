//! Player control and movement.
//!
//! Turn input is buffered: a requested direction persists until it can be
//! applied at a legal tile boundary or is overwritten by a newer request. A
//! successful turn starts a short cooldown so a single held key cannot
//! double-turn through an intersection.

use bevy_ecs::{
    event::EventReader,
    query::{With, Without},
    system::{Query, Res, ResMut},
};
use tracing::trace;

use crate::constants::{PLAYER_ALIGN_NUDGE, TURN_COOLDOWN};
use crate::events::GameCommand;
use crate::map::{Map, Occupant, TraversalFlags};

use super::components::{
    BufferedDirection, DeltaTime, Ghost, Movable, Paused, PlayerControlled, Position, TilePosition,
    TurnCooldown,
};
use super::movement::{self, TileUpdate};
use super::stage::GameStage;

/// Records buffered turn requests and applies them at legal opportunities.
#[allow(clippy::type_complexity)]
pub fn player_control_system(
    stage: Res<GameStage>,
    paused: Res<Paused>,
    map: Res<Map>,
    time: Res<DeltaTime>,
    mut commands: EventReader<GameCommand>,
    mut players: Query<
        (
            &mut PlayerControlled,
            &mut BufferedDirection,
            &mut TurnCooldown,
            &mut Movable,
            &mut Position,
            &TilePosition,
        ),
        Without<Ghost>,
    >,
) {
    let mut requested = None;
    for command in commands.read() {
        if let GameCommand::MovePlayer(direction) = command {
            requested = Some(*direction);
        }
    }

    let gated = paused.0 || !stage.is_playing();

    for (mut player, mut buffered, mut cooldown, mut movable, mut position, tile) in players.iter_mut() {
        // A new request overwrites the buffered one even while gated, so a
        // pre-turn pressed during a pause window is not lost.
        if let Some(direction) = requested {
            buffered.0 = Some(direction);
        }
        if gated {
            continue;
        }

        if !cooldown.ready() {
            cooldown.remaining -= time.0;
        }

        if cooldown.ready() {
            if let Some(direction) = buffered.0 {
                if map.is_walkable(tile.current, direction, TraversalFlags::PLAYER) {
                    movable.heading = Some(direction);
                    player.facing = direction;
                    movement::align_to_tile(&mut position, tile.current, direction, &map, PLAYER_ALIGN_NUDGE);
                    buffered.0 = None;
                    cooldown.remaining = TURN_COOLDOWN;
                    trace!(?direction, tile = ?tile.current, "Player turned");
                }
            }
        }

        // A heading that runs into a wall drops to idle; the buffered
        // request (if any) stays put for the next legal opportunity.
        if let Some(direction) = movable.heading {
            if !map.is_walkable(tile.current, direction, TraversalFlags::PLAYER) {
                movable.heading = None;
            }
        }
    }
}

/// Advances the player and re-derives its tile.
#[allow(clippy::type_complexity)]
pub fn player_movement_system(
    stage: Res<GameStage>,
    paused: Res<Paused>,
    time: Res<DeltaTime>,
    mut map: ResMut<Map>,
    mut players: Query<(&mut Position, &mut TilePosition, &Movable), (With<PlayerControlled>, Without<Ghost>)>,
) {
    if paused.0 || !stage.is_playing() {
        return;
    }

    for (mut position, mut tile, movable) in players.iter_mut() {
        match movable.heading {
            Some(direction) => movement::advance(&mut position, direction, movable.speed, time.0),
            // Idle movers pin to their tile so drift cannot accumulate.
            None => position.0 = map.tile_origin(tile.current) + PLAYER_ALIGN_NUDGE,
        }

        match movement::update_tile_position(&mut position, &mut tile, movable.heading, movable.probe, &map) {
            TileUpdate::Entered(entered) | TileUpdate::Teleported(entered) => {
                map.clear_occupant(tile.previous);
                map.mark_occupant(entered, Occupant::Player);
            }
            TileUpdate::Unchanged => {}
        }
    }
}
