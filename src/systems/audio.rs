//! Audio interface: gameplay systems emit events, the backend plays them.
//!
//! The core never polls audio state. One-shots fire on transitions; the
//! three looping beds are reconciled from game state once per tick so a
//! missed stop cannot leave a loop running.

use bevy_ecs::{
    event::{Event, EventReader, EventWriter},
    query::With,
    resource::Resource,
    system::{NonSendMut, Query, Res, ResMut},
};
use tracing::{debug, trace};

use super::components::{Ghost, GhostMode, Paused};
use super::stage::GameStage;

/// One-shot effects fired on gameplay transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShot {
    GameStart,
    Munch,
    PowerPellet,
    EatGhost,
    Death,
}

/// The three looping beds the core starts and stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopChannel {
    Siren,
    PowerPellet,
    Retreating,
}

/// Fire-and-forget playback surface supplied by the shell.
pub trait AudioBackend {
    fn play(&mut self, sound: OneShot);
    fn set_loop(&mut self, channel: LoopChannel, playing: bool);
}

/// Backend that discards everything; used headless and in tests.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn play(&mut self, _sound: OneShot) {}
    fn set_loop(&mut self, _channel: LoopChannel, _playing: bool) {}
}

/// Non-send wrapper for the shell's audio backend.
pub struct AudioOutput(pub Box<dyn AudioBackend>);

/// Events for triggering audio playback.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    Play(OneShot),
    StartLoop(LoopChannel),
    StopLoop(LoopChannel),
}

/// Resource for tracking audio state.
#[derive(Resource, Debug, Clone, Default)]
pub struct AudioState {
    /// Whether audio is currently muted.
    pub muted: bool,
    pub siren: bool,
    pub power_pellet: bool,
    pub retreating: bool,
}

/// Derives which loops should sound from the current game state and emits
/// start/stop events for the differences. Mute silences everything; the
/// reconciliation restarts the right loops on unmute.
pub fn soundtrack_system(
    stage: Res<GameStage>,
    paused: Res<Paused>,
    mut state: ResMut<AudioState>,
    ghosts: Query<&GhostMode, With<Ghost>>,
    mut audio: EventWriter<AudioEvent>,
) {
    let playing = stage.is_playing() && !paused.0 && !state.muted;
    let any_frightened = playing && ghosts.iter().any(GhostMode::is_frightened);
    let any_eaten = playing && ghosts.iter().any(GhostMode::is_eaten);

    let desired = [
        (LoopChannel::Siren, playing && !any_frightened && !any_eaten, state.siren),
        (LoopChannel::PowerPellet, any_frightened, state.power_pellet),
        (LoopChannel::Retreating, any_eaten, state.retreating),
    ];
    for (channel, wanted, current) in desired {
        if wanted != current {
            trace!(?channel, wanted, "Loop state changed");
            audio.write(if wanted {
                AudioEvent::StartLoop(channel)
            } else {
                AudioEvent::StopLoop(channel)
            });
        }
    }

    state.siren = playing && !any_frightened && !any_eaten;
    state.power_pellet = any_frightened;
    state.retreating = any_eaten;
}

/// Forwards audio events to the backend, honoring mute. Stops always pass
/// through so muting cannot strand a loop.
pub fn audio_system(
    mut output: NonSendMut<AudioOutput>,
    state: Res<AudioState>,
    mut events: EventReader<AudioEvent>,
) {
    for event in events.read() {
        match event {
            AudioEvent::Play(sound) => {
                if !state.muted {
                    trace!(?sound, "Playing sound");
                    output.0.play(*sound);
                } else {
                    debug!(?sound, "Skipping sound while muted");
                }
            }
            AudioEvent::StartLoop(channel) => {
                if !state.muted {
                    output.0.set_loop(*channel, true);
                }
            }
            AudioEvent::StopLoop(channel) => {
                output.0.set_loop(*channel, false);
            }
        }
    }
}
