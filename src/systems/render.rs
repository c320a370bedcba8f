//! Draw-pass interface to the rendering collaborator.
//!
//! The core asks the collaborator for the current frame rectangle of an
//! actor and issues draw calls with screen positions; animation timing and
//! pixel output are entirely the collaborator's concern.

use bevy_ecs::{
    query::{With, Without},
    system::{NonSendMut, Query, Res},
};
use glam::Vec2;

use crate::constants::{GHOST_DRAW_OFFSET, PLAYER_DRAW_OFFSET};
use crate::map::{direction::Direction, Map, PelletKind};

use super::components::{Ghost, GhostKind, GhostMode, Movable, PlayerControlled, Position};
use super::stage::GameStage;

/// What to look up in the collaborator's sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorSprite {
    Player,
    Ghost(GhostKind),
    Pellet(PelletKind),
}

/// Animation family selector for pursuers. `FrightenedWarning` carries the
/// end-of-frightened sub-phase to the renderer; it has no effect on logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpritePhase {
    Normal,
    Frightened,
    FrightenedWarning,
    Eyes,
}

/// A region of the collaborator's sprite sheet, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Frame query + draw surface supplied by the shell.
pub trait Renderer {
    /// The current animation frame for an actor, or None to skip drawing it.
    fn frame(&mut self, actor: ActorSprite, facing: Direction, phase: SpritePhase) -> Option<FrameRect>;
    fn draw(&mut self, frame: FrameRect, position: Vec2);
}

/// Renderer that draws nothing; used headless and in tests.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn frame(&mut self, _actor: ActorSprite, _facing: Direction, _phase: SpritePhase) -> Option<FrameRect> {
        None
    }
    fn draw(&mut self, _frame: FrameRect, _position: Vec2) {}
}

/// Non-send wrapper for the shell's renderer.
pub struct RenderTarget(pub Box<dyn Renderer>);

/// Issues this tick's draw calls: pellets first, then the player, pursuers
/// on top.
pub fn render_system(
    mut target: NonSendMut<RenderTarget>,
    map: Res<Map>,
    stage: Res<GameStage>,
    players: Query<(&Position, &PlayerControlled), Without<Ghost>>,
    ghosts: Query<(&Ghost, &GhostMode, &Movable, &Position), Without<PlayerControlled>>,
) {
    for (tile, kind) in map.pellets() {
        if let Some(frame) = target.0.frame(ActorSprite::Pellet(kind), Direction::default(), SpritePhase::Normal) {
            let origin = map.tile_origin(tile);
            target.0.draw(frame, origin);
        }
    }

    if matches!(*stage, GameStage::GameOver) {
        return;
    }

    for (position, player) in players.iter() {
        if let Some(frame) = target.0.frame(ActorSprite::Player, player.facing, SpritePhase::Normal) {
            target.0.draw(frame, position.0 + PLAYER_DRAW_OFFSET);
        }
    }

    for (ghost, mode, movable, position) in ghosts.iter() {
        let phase = match mode {
            GhostMode::Eaten => SpritePhase::Eyes,
            GhostMode::Frightened { .. } if mode.in_warning() => SpritePhase::FrightenedWarning,
            GhostMode::Frightened { .. } => SpritePhase::Frightened,
            _ => SpritePhase::Normal,
        };
        let facing = movable.heading.unwrap_or(Direction::Up);
        if let Some(frame) = target.0.frame(ActorSprite::Ghost(ghost.0), facing, phase) {
            target.0.draw(frame, position.0 + GHOST_DRAW_OFFSET);
        }
    }
}
