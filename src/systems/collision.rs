//! Player/pursuer contact detection.
//!
//! Contact is tile equality, matching the grid logic everywhere else.
//! Detection only — the stage system resolves the events the same tick.

use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    query::{With, Without},
    system::{Query, Res},
};

use crate::events::GameEvent;

use super::components::{Ghost, GhostMode, Paused, PlayerControlled, TilePosition};
use super::stage::GameStage;

pub fn collision_system(
    stage: Res<GameStage>,
    paused: Res<Paused>,
    players: Query<&TilePosition, (With<PlayerControlled>, Without<Ghost>)>,
    ghosts: Query<(Entity, &TilePosition, &GhostMode), With<Ghost>>,
    mut events: EventWriter<GameEvent>,
) {
    if paused.0 || !stage.is_playing() {
        return;
    }

    let Some(player_tile) = players.iter().next() else {
        return;
    };

    for (entity, tile, mode) in ghosts.iter() {
        if tile.current != player_tile.current {
            continue;
        }
        match mode {
            GhostMode::Frightened { .. } => {
                events.write(GameEvent::GhostCaught { ghost: entity });
            }
            // Eaten pursuers are just eyes on their way home.
            GhostMode::Eaten => {}
            _ => {
                events.write(GameEvent::PlayerCaught { ghost: entity });
            }
        }
    }
}
