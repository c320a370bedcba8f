//! Simulation systems and their shared components.
//!
//! Each tick runs the systems in the fixed order wired by [`crate::game`]:
//! commands, global mode, player control + movement, pellets, pursuer timers,
//! pursuer planning + movement, collision, stage resolution, then the audio
//! and render interfaces.

pub mod audio;
pub mod collision;
pub mod components;
pub mod control;
pub mod ghost;
pub mod item;
pub mod mode;
pub mod movement;
pub mod player;
pub mod render;
pub mod stage;
pub mod targeting;

pub use audio::{
    audio_system, soundtrack_system, AudioBackend, AudioEvent, AudioOutput, AudioState, LoopChannel,
    NullAudio, OneShot,
};
pub use collision::collision_system;
pub use components::*;
pub use control::command_system;
pub use ghost::{enter_mode, ghost_ai_system, ghost_timer_system};
pub use item::pellet_system;
pub use mode::mode_system;
pub use movement::{advance, align_to_tile, update_tile_position, TileUpdate};
pub use player::{player_control_system, player_movement_system};
pub use render::{
    render_system, ActorSprite, FrameRect, NullRenderer, RenderTarget, Renderer, SpritePhase,
};
pub use stage::{stage_system, GameStage};
pub use targeting::{chase_target, frightened_target, scatter_target, TargetContext};
