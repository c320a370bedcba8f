//! Session-level command handling.

use bevy_ecs::{event::EventReader, system::ResMut};
use tracing::debug;

use crate::events::GameCommand;

use super::audio::AudioState;
use super::components::{GlobalState, Paused, ResetPending};

/// Applies non-movement commands from the shell. Movement commands are left
/// for the player control system to consume.
pub fn command_system(
    mut commands: EventReader<GameCommand>,
    mut paused: ResMut<Paused>,
    mut state: ResMut<GlobalState>,
    mut audio_state: ResMut<AudioState>,
    mut reset: ResMut<ResetPending>,
) {
    for command in commands.read() {
        match command {
            GameCommand::TogglePause => {
                paused.0 = !paused.0;
                debug!(paused = paused.0, "Pause toggled");
            }
            GameCommand::MuteAudio => {
                // The soundtrack reconciler stops and restarts the loops.
                audio_state.muted = !audio_state.muted;
                debug!(muted = audio_state.muted, "Audio mute toggled");
            }
            GameCommand::ResetLevel => {
                reset.0 = true;
            }
            GameCommand::Exit => {
                state.exit = true;
            }
            GameCommand::MovePlayer(_) => {}
        }
    }
}
