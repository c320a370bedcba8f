//! Commands consumed from the shell and gameplay events emitted to it.

use bevy_ecs::{entity::Entity, event::Event};
use glam::IVec2;

use crate::map::{direction::Direction, PelletKind};

/// A per-tick command from the input collaborator. Movement commands carry
/// the highest-priority currently-held direction; resolution of simultaneous
/// keys is the shell's concern.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    MovePlayer(Direction),
    TogglePause,
    MuteAudio,
    ResetLevel,
    Exit,
}

/// Gameplay events produced during a tick. Collision events are resolved by
/// the stage system the same tick; the rest are informational for shells.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    PelletEaten { tile: IVec2, kind: PelletKind },
    /// The player touched a frightened pursuer.
    GhostCaught { ghost: Entity },
    /// A non-frightened, non-eaten pursuer touched the player.
    PlayerCaught { ghost: Entity },
    /// The last pellet was consumed.
    LevelCleared,
}
