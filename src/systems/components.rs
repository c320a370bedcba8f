//! Components and resources shared across the simulation systems.

use bevy_ecs::{bundle::Bundle, component::Component, entity::Entity, resource::Resource};
use glam::{IVec2, Vec2};
use rand::rngs::SmallRng;
use strum_macros::AsRefStr;

use crate::constants::{
    FRIGHTENED_WARNING_AT, GHOST_EATEN_SPEED, GHOST_FRIGHTENED_SPEED, GHOST_NORMAL_SPEED,
    GHOST_RELEASE_DELAY, INITIAL_LIVES,
};
use crate::map::direction::Direction;

/// A tag component for the entity controlled by the player.
#[derive(Component, Debug)]
pub struct PlayerControlled {
    /// Last non-idle facing; read by predictor targeting and the renderer.
    pub facing: Direction,
}

/// Continuous pixel-space position.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// Authoritative discrete tile, kept consistent with [`Position`] by the
/// movement systems.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePosition {
    pub current: IVec2,
    pub previous: IVec2,
}

impl TilePosition {
    pub fn at(tile: IVec2) -> Self {
        Self {
            current: tile,
            previous: tile,
        }
    }
}

/// Shared movement state for anything that glides across the board.
#[derive(Component, Debug, Clone, Copy)]
pub struct Movable {
    /// Pixels per second.
    pub speed: f32,
    /// None = idle at the current tile.
    pub heading: Option<Direction>,
    /// Leading-edge probe offset used by the tile containment test.
    pub probe: f32,
}

/// A buffered turn request; persists until applied or overwritten.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct BufferedDirection(pub Option<Direction>);

/// Rate-limits successful turns.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct TurnCooldown {
    pub remaining: f32,
}

impl TurnCooldown {
    pub fn ready(&self) -> bool {
        self.remaining <= 0.0
    }
}

/// The four pursuer archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum GhostKind {
    /// Direct chaser: targets the player's tile.
    Blinky,
    /// Ahead predictor: targets four tiles ahead of the player.
    Pinky,
    /// Pincer predictor: reflects a pivot ahead of the player through the
    /// direct chaser's position.
    Inky,
    /// Proximity fleer: chases when far, retreats to its corner when close.
    Clyde,
}

impl GhostKind {
    /// All archetypes, in roster update order. The direct chaser goes first
    /// so the predictors read its already-updated tile the same tick.
    pub const ALL: [GhostKind; 4] = [GhostKind::Blinky, GhostKind::Pinky, GhostKind::Inky, GhostKind::Clyde];

    /// The fixed scatter corner. These sit in the surrounding wall band and
    /// are anchored to the nearest walkable tile before route search.
    pub const fn scatter_corner(self) -> IVec2 {
        match self {
            GhostKind::Blinky => IVec2::new(25, 0),
            GhostKind::Pinky => IVec2::new(2, 0),
            GhostKind::Inky => IVec2::new(27, 30),
            GhostKind::Clyde => IVec2::new(0, 30),
        }
    }

    pub const fn spawn_tile(self) -> IVec2 {
        match self {
            GhostKind::Blinky => IVec2::new(13, 11),
            GhostKind::Pinky => IVec2::new(13, 14),
            GhostKind::Inky => IVec2::new(11, 14),
            GhostKind::Clyde => IVec2::new(15, 14),
        }
    }

    pub const fn spawn_facing(self) -> Direction {
        match self {
            GhostKind::Blinky => Direction::Left,
            GhostKind::Pinky => Direction::Down,
            GhostKind::Inky => Direction::Up,
            GhostKind::Clyde => Direction::Up,
        }
    }
}

/// A tag component denoting a pursuer and its archetype.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ghost(pub GhostKind);

/// Per-pursuer behavior state.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum GhostMode {
    Scatter,
    Chase,
    Frightened { timer: f32 },
    Eaten,
}

impl GhostMode {
    pub fn speed(self) -> f32 {
        match self {
            GhostMode::Frightened { .. } => GHOST_FRIGHTENED_SPEED,
            GhostMode::Eaten => GHOST_EATEN_SPEED,
            _ => GHOST_NORMAL_SPEED,
        }
    }

    pub fn is_frightened(&self) -> bool {
        matches!(self, GhostMode::Frightened { .. })
    }

    pub fn is_eaten(&self) -> bool {
        matches!(self, GhostMode::Eaten)
    }

    /// Frightened and eaten pursuers are excluded from the ambient
    /// scatter/chase broadcast.
    pub fn is_special(&self) -> bool {
        self.is_frightened() || self.is_eaten()
    }

    /// Whether the frightened warning animation phase should be signaled.
    pub fn in_warning(&self) -> bool {
        matches!(self, GhostMode::Frightened { timer } if *timer > FRIGHTENED_WARNING_AT)
    }
}

/// A pursuer's planned route and the tile it was computed at.
#[derive(Component, Debug, Default, Clone)]
pub struct Route {
    /// Ordered tiles from the one after the pursuer's tile to the target.
    pub tiles: Vec<IVec2>,
    /// Cache key: the tile the route was computed at. A pursuer replans only
    /// after physically entering a different tile.
    pub anchor: Option<IVec2>,
}

impl Route {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.anchor = None;
    }

    pub fn next_tile(&self) -> Option<IVec2> {
        self.tiles.first().copied()
    }
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub tile: TilePosition,
    pub movable: Movable,
    pub buffered: BufferedDirection,
    pub cooldown: TurnCooldown,
}

#[derive(Bundle)]
pub struct GhostBundle {
    pub ghost: Ghost,
    pub mode: GhostMode,
    pub position: Position,
    pub tile: TilePosition,
    pub movable: Movable,
    pub route: Route,
}

#[derive(Resource, Debug, Default)]
pub struct Score(pub u32);

#[derive(Resource, Debug)]
pub struct PlayerLives(pub i32);

impl Default for PlayerLives {
    fn default() -> Self {
        Self(INITIAL_LIVES)
    }
}

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct DeltaTime(pub f32);

#[derive(Resource, Debug, Default)]
pub struct Paused(pub bool);

#[derive(Resource, Debug, Default)]
pub struct GlobalState {
    pub exit: bool,
}

/// Set when the shell requests a full session reset; consumed by the stage
/// system.
#[derive(Resource, Debug, Default)]
pub struct ResetPending(pub bool);

/// Pursuer entities in fixed update order.
#[derive(Resource, Debug)]
pub struct GhostRoster(pub Vec<Entity>);

/// The ambient mode all non-special pursuers share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientMode {
    Scatter,
    Chase,
}

/// The global mode controller: scatter/chase alternation, the staggered
/// release window, and the capture streak for score tiers.
#[derive(Resource, Debug)]
pub struct ModeController {
    pub ambient: AmbientMode,
    pub phase_timer: f32,
    pub release_timer: f32,
    pub capture_streak: u32,
}

impl Default for ModeController {
    fn default() -> Self {
        Self {
            ambient: AmbientMode::Scatter,
            phase_timer: 0.0,
            release_timer: 0.0,
            capture_streak: 0,
        }
    }
}

impl ModeController {
    /// Staggered release: two pursuers are active immediately, the third
    /// after half the initial delay, the fourth after the full delay.
    pub fn ghost_active(&self, kind: GhostKind) -> bool {
        match kind {
            GhostKind::Blinky | GhostKind::Pinky => true,
            GhostKind::Inky => self.release_timer >= GHOST_RELEASE_DELAY / 2.0,
            GhostKind::Clyde => self.release_timer >= GHOST_RELEASE_DELAY,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Seedable RNG behind the frightened random walk.
#[derive(Resource)]
pub struct GameRng(pub SmallRng);
