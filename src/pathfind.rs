//! Tile route search for pursuers.
//!
//! Breadth-first search over the 4-connected grid, with successors generated
//! in the fixed preference order Up > Left > Down > Right so the first-listed
//! direction wins among equally short routes.

use glam::IVec2;
use pathfinding::prelude::bfs;
use smallvec::SmallVec;

use crate::map::{direction::Direction, Map, TraversalFlags};

/// Computes the route from `source` toward `target` over pursuer-walkable
/// tiles.
///
/// The returned sequence starts at the tile *after* `source` and ends at
/// `target`; it is empty when the target is unreachable, out of bounds, or
/// equal to the source. The reverse of `facing` is excluded from the source
/// tile's candidates on the first attempt only — a mover boxed in on three
/// sides is allowed the reversal on the retry.
pub fn find_route(map: &Map, source: IVec2, target: IVec2, facing: Option<Direction>) -> Vec<IVec2> {
    if source == target || !map.in_bounds(target) {
        return Vec::new();
    }

    let banned = facing.map(Direction::opposite);
    if let Some(route) = search(map, source, target, banned) {
        return route;
    }
    if banned.is_some() {
        if let Some(route) = search(map, source, target, None) {
            return route;
        }
    }
    Vec::new()
}

fn search(map: &Map, source: IVec2, target: IVec2, banned_first: Option<Direction>) -> Option<Vec<IVec2>> {
    let mut path = bfs(
        &source,
        |&tile| {
            let mut next: SmallVec<[IVec2; 4]> = SmallVec::new();
            for direction in Direction::PREFERENCE {
                if tile == source && banned_first == Some(direction) {
                    continue;
                }
                if !map.is_walkable(tile, direction, TraversalFlags::GHOST) {
                    continue;
                }
                let adjacent = tile + direction.as_ivec2();
                // The tunnel mouths report the off-board step walkable; the
                // search itself never leaves the board.
                if map.in_bounds(adjacent) {
                    next.push(adjacent);
                }
            }
            next
        },
        |&tile| tile == target,
    )?;

    Some(path.split_off(1))
}
