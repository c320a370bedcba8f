//! The global mode controller.
//!
//! Alternates all non-special pursuers between Scatter and Chase on fixed
//! durations. The alternation clock starts only after the staggered-release
//! window and freezes while any pursuer is frightened or eaten.

use bevy_ecs::system::{Query, Res, ResMut};
use tracing::debug;

use crate::constants::{CHASE_LENGTH, GHOST_RELEASE_DELAY, SCATTER_LENGTH};

use super::components::{AmbientMode, DeltaTime, Ghost, GhostMode, ModeController, Movable, Paused, Route};
use super::ghost::enter_mode;
use super::stage::GameStage;

pub fn mode_system(
    stage: Res<GameStage>,
    paused: Res<Paused>,
    time: Res<DeltaTime>,
    mut controller: ResMut<ModeController>,
    mut ghosts: Query<(&Ghost, &mut GhostMode, &mut Movable, &mut Route)>,
) {
    if paused.0 || !stage.is_playing() {
        return;
    }

    if controller.release_timer < GHOST_RELEASE_DELAY {
        controller.release_timer += time.0;
        return;
    }

    if ghosts.iter().any(|(_, mode, _, _)| mode.is_special()) {
        return;
    }

    controller.phase_timer += time.0;
    let phase_length = match controller.ambient {
        AmbientMode::Scatter => SCATTER_LENGTH,
        AmbientMode::Chase => CHASE_LENGTH,
    };
    if controller.phase_timer < phase_length {
        return;
    }

    controller.phase_timer = 0.0;
    controller.ambient = match controller.ambient {
        AmbientMode::Scatter => AmbientMode::Chase,
        AmbientMode::Chase => AmbientMode::Scatter,
    };
    debug!(mode = ?controller.ambient, "Ambient mode switched");

    let broadcast = match controller.ambient {
        AmbientMode::Scatter => GhostMode::Scatter,
        AmbientMode::Chase => GhostMode::Chase,
    };
    for (_, mut mode, mut movable, mut route) in ghosts.iter_mut() {
        if !mode.is_special() {
            enter_mode(&mut mode, &mut movable, &mut route, broadcast);
        }
    }
}
