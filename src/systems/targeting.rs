//! Per-archetype target selection.
//!
//! Each archetype reduces to a pure function from observed state to a target
//! tile; the ghost system feeds the result to route search. Targets that may
//! land on walls are substituted here — the route engine itself only checks
//! reachability.

use glam::IVec2;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use smallvec::SmallVec;

use crate::constants::{BOARD_SIZE, FLEE_DISTANCE, HOUSE_EXIT_TILE};
use crate::map::{direction::Direction, Map, TileKind, TraversalFlags};

use super::components::GhostKind;

/// Observed state a chase-targeting decision may read. The direct chaser's
/// tile is the value already updated this tick.
#[derive(Debug, Clone, Copy)]
pub struct TargetContext {
    pub player_tile: IVec2,
    /// The player's last non-idle facing.
    pub player_facing: Direction,
    pub blinky_tile: IVec2,
}

/// Chase-mode target for an archetype.
pub fn chase_target(kind: GhostKind, own_tile: IVec2, map: &Map, ctx: &TargetContext) -> IVec2 {
    match kind {
        GhostKind::Blinky => ctx.player_tile,
        GhostKind::Pinky => ahead_target(map, ctx, 4),
        GhostKind::Inky => pincer_target(map, ctx),
        GhostKind::Clyde => {
            let distance = own_tile.as_vec2().distance(ctx.player_tile.as_vec2());
            if distance > FLEE_DISTANCE {
                ctx.player_tile
            } else {
                map.anchored(GhostKind::Clyde.scatter_corner())
            }
        }
    }
}

/// Scatter-mode target: the archetype's corner, anchored onto the board.
pub fn scatter_target(map: &Map, kind: GhostKind) -> IVec2 {
    map.anchored(kind.scatter_corner())
}

/// Frightened random walk: an adjacent tile in a uniformly chosen legal
/// direction, excluding the reverse of `facing` and any step into the ghost
/// house. Inside the house the target is the exit; at a tunnel mouth it is
/// the tile itself, which yields an empty route and lets the pursuer glide
/// through the wrap.
pub fn frightened_target(map: &Map, own_tile: IVec2, facing: Option<Direction>, rng: &mut SmallRng) -> IVec2 {
    if map.is_tunnel(own_tile) {
        return own_tile;
    }
    if map.base_kind(own_tile) == TileKind::GhostHouse {
        return HOUSE_EXIT_TILE;
    }

    let banned = facing.map(Direction::opposite);
    let mut options: SmallVec<[Direction; 3]> = SmallVec::new();
    for direction in Direction::DIRECTIONS {
        if banned == Some(direction) {
            continue;
        }
        if !map.is_walkable(own_tile, direction, TraversalFlags::GHOST) {
            continue;
        }
        let adjacent = own_tile + direction.as_ivec2();
        if !map.in_bounds(adjacent) || map.base_kind(adjacent) == TileKind::GhostHouse {
            continue;
        }
        options.push(direction);
    }

    match options.choose(rng) {
        Some(direction) => own_tile + direction.as_ivec2(),
        None => own_tile,
    }
}

fn clamp_to_board(tile: IVec2) -> IVec2 {
    IVec2::new(
        tile.x.clamp(0, BOARD_SIZE.x as i32 - 1),
        tile.y.clamp(0, BOARD_SIZE.y as i32 - 1),
    )
}

/// Four tiles ahead of the player along its facing; clamped, and a wall
/// falls back to the player's tile.
fn ahead_target(map: &Map, ctx: &TargetContext, lead: i32) -> IVec2 {
    let target = clamp_to_board(ctx.player_tile + ctx.player_facing.as_ivec2() * lead);
    if map.base_kind(target) == TileKind::Wall {
        ctx.player_tile
    } else {
        target
    }
}

/// Reflects a pivot two tiles ahead of the player through the direct
/// chaser's tile; clamped, and a wall falls back to the player's tile.
fn pincer_target(map: &Map, ctx: &TargetContext) -> IVec2 {
    let pivot = ctx.player_tile + ctx.player_facing.as_ivec2() * 2;
    let target = clamp_to_board(ctx.blinky_tile + (pivot - ctx.blinky_tile) * 2);
    if map.base_kind(target) == TileKind::Wall {
        ctx.player_tile
    } else {
        target
    }
}
