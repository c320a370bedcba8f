//! Shared movement and tile-tracking helpers.
//!
//! Every gliding entity advances its continuous position along a cardinal
//! heading and then re-derives its occupied tile with a directional
//! leading-edge containment test: the probe point is offset along the travel
//! axis and the tile interval is half-open away from the travel direction, so
//! an entity enters a tile the moment its leading edge crosses the boundary.
//! This is what produces the characteristic turn-before-the-center feel; it
//! is not a rounding of the position.

use glam::{IVec2, Vec2};
use tracing::trace;

use crate::constants::{
    BOARD_SIZE, LEFT_TUNNEL_TILE, RIGHT_TUNNEL_TILE, SCORE_OFFSET, TELEPORT_THRESHOLD, TILE_SIZE,
    WINDOW_SIZE,
};
use crate::map::{direction::Direction, Map};

use super::components::{Position, TilePosition};

/// Outcome of a tile-tracking pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileUpdate {
    /// Still inside the current tile, or off the grid mid-tunnel.
    Unchanged,
    Entered(IVec2),
    /// Screen-wrap fired; tile and position were updated together.
    Teleported(IVec2),
}

/// Advances `position` along `heading` by `speed * dt` pixels.
pub fn advance(position: &mut Position, heading: Direction, speed: f32, dt: f32) {
    position.0 += heading.as_ivec2().as_vec2() * speed * dt;
}

/// Snaps the coordinate perpendicular to `heading` onto the tile's lane
/// (plus `nudge`), preventing drift across turns.
pub fn align_to_tile(position: &mut Position, tile: IVec2, heading: Direction, map: &Map, nudge: Vec2) {
    let origin = map.tile_origin(tile);
    if heading.is_horizontal() {
        position.0.y = origin.y + nudge.y;
    } else {
        position.0.x = origin.x + nudge.x;
    }
}

/// Re-derives the occupied tile after a movement step.
///
/// The tunnel threshold is checked first; while the mover sits beyond it the
/// containment scan is skipped entirely, so tile and position only disagree
/// inside the one-tick teleport window. An idle mover (`heading == None`)
/// never changes tile.
pub fn update_tile_position(
    position: &mut Position,
    tile: &mut TilePosition,
    heading: Option<Direction>,
    probe: f32,
    map: &Map,
) -> TileUpdate {
    if let Some(outcome) = check_teleport(position, tile, heading, map) {
        return outcome;
    }

    let Some(heading) = heading else {
        return TileUpdate::Unchanged;
    };

    if let Some(entered) = containing_tile(position.0, heading, probe) {
        if entered != tile.current {
            tile.previous = tile.current;
            tile.current = entered;
            return TileUpdate::Entered(entered);
        }
    }
    TileUpdate::Unchanged
}

/// The screen-wrap check. Only armed while the mover is heading in the
/// tunnel-exiting direction; a mover beyond the threshold for any other
/// reason just skips containment until it comes back.
fn check_teleport(
    position: &mut Position,
    tile: &mut TilePosition,
    heading: Option<Direction>,
    map: &Map,
) -> Option<TileUpdate> {
    if tile.current == LEFT_TUNNEL_TILE && position.0.x < -TELEPORT_THRESHOLD {
        if heading == Some(Direction::Left) {
            position.0.x = WINDOW_SIZE.x as f32 + TELEPORT_THRESHOLD;
            tile.previous = tile.current;
            tile.current = RIGHT_TUNNEL_TILE;
            trace!(tile = ?tile.current, "Wrapped through the left tunnel");
            return Some(TileUpdate::Teleported(RIGHT_TUNNEL_TILE));
        }
        return Some(TileUpdate::Unchanged);
    }

    if tile.current == RIGHT_TUNNEL_TILE {
        let right_edge = map.tile_origin(RIGHT_TUNNEL_TILE).x;
        if position.0.x > right_edge + TELEPORT_THRESHOLD {
            if heading == Some(Direction::Right) {
                position.0.x = -TELEPORT_THRESHOLD;
                tile.previous = tile.current;
                tile.current = LEFT_TUNNEL_TILE;
                trace!(tile = ?tile.current, "Wrapped through the right tunnel");
                return Some(TileUpdate::Teleported(LEFT_TUNNEL_TILE));
            }
            return Some(TileUpdate::Unchanged);
        }
    }

    None
}

/// The directional leading-edge containment test.
///
/// For rightward/downward travel the probe sits ahead of the position and
/// tiles span `[origin, origin + size)`; for leftward/upward travel the probe
/// trails negative and the span flips to `(origin - size, origin]` on the
/// travel axis.
fn containing_tile(position: Vec2, heading: Direction, probe: f32) -> Option<IVec2> {
    let (px, py) = match heading {
        Direction::Right | Direction::Down => (position.x + probe, position.y + probe),
        Direction::Left => (position.x - probe, position.y + probe),
        Direction::Up => (position.x + probe, position.y - probe),
    };

    let tile_size = TILE_SIZE as f32;
    let gx = px / tile_size;
    let gy = (py - SCORE_OFFSET as f32) / tile_size;

    let (x, y) = match heading {
        Direction::Right | Direction::Down => (gx.floor(), gy.floor()),
        Direction::Left => (gx.ceil(), gy.floor()),
        Direction::Up => (gx.floor(), gy.ceil()),
    };

    let tile = IVec2::new(x as i32, y as i32);
    if tile.x < 0 || tile.x >= BOARD_SIZE.x as i32 || tile.y < 0 || tile.y >= BOARD_SIZE.y as i32 {
        return None;
    }
    Some(tile)
}
