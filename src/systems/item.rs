//! Pellet consumption and its immediate side effects.

use bevy_ecs::{
    event::EventWriter,
    query::{With, Without},
    system::{Query, Res, ResMut},
};
use tracing::debug;

use crate::events::GameEvent;
use crate::map::{Map, PelletKind};

use super::audio::{AudioEvent, OneShot};
use super::components::{
    Ghost, GhostMode, ModeController, Movable, Paused, PlayerControlled, Route, Score, TilePosition,
};
use super::ghost::enter_mode;
use super::stage::GameStage;

/// Consumes the pellet under the player, if any. A power pellet frightens
/// every pursuer that is not already eaten and resets the capture streak.
#[allow(clippy::type_complexity)]
pub fn pellet_system(
    stage: Res<GameStage>,
    paused: Res<Paused>,
    mut map: ResMut<Map>,
    mut score: ResMut<Score>,
    mut controller: ResMut<ModeController>,
    players: Query<&TilePosition, (With<PlayerControlled>, Without<Ghost>)>,
    mut ghosts: Query<(&mut GhostMode, &mut Movable, &mut Route), With<Ghost>>,
    mut events: EventWriter<GameEvent>,
    mut audio: EventWriter<AudioEvent>,
) {
    if paused.0 || !stage.is_playing() {
        return;
    }

    for tile in players.iter() {
        let Some(kind) = map.take_pellet(tile.current) else {
            continue;
        };

        score.0 += kind.score();
        audio.write(AudioEvent::Play(OneShot::Munch));
        events.write(GameEvent::PelletEaten { tile: tile.current, kind });

        if kind == PelletKind::Power {
            audio.write(AudioEvent::Play(OneShot::PowerPellet));
            controller.capture_streak = 0;
            for (mut mode, mut movable, mut route) in ghosts.iter_mut() {
                if !mode.is_eaten() {
                    enter_mode(&mut mode, &mut movable, &mut route, GhostMode::Frightened { timer: 0.0 });
                }
            }
            debug!(tile = ?tile.current, "Power pellet eaten, pursuers frightened");
        }

        if map.pellets_remaining() == 0 {
            events.write(GameEvent::LevelCleared);
        }
    }
}
