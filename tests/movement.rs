use glam::{IVec2, Vec2};
use pretty_assertions::assert_eq;

use chomp::constants::{
    GHOST_PROBE, LEFT_TUNNEL_TILE, RIGHT_TUNNEL_TILE, TELEPORT_THRESHOLD, WINDOW_SIZE,
};
use chomp::map::{direction::Direction, Map};
use chomp::systems::{advance, align_to_tile, update_tile_position, Position, TilePosition, TileUpdate};

mod common;

fn mover_at(map: &Map, tile: IVec2) -> (Position, TilePosition) {
    (Position(map.tile_origin(tile)), TilePosition::at(tile))
}

#[test]
fn test_advance_moves_along_the_heading() {
    let mut position = Position(Vec2::new(100.0, 100.0));
    advance(&mut position, Direction::Left, 140.0, 0.5);
    assert_eq!(position.0, Vec2::new(30.0, 100.0));
    advance(&mut position, Direction::Down, 140.0, 0.5);
    assert_eq!(position.0, Vec2::new(30.0, 170.0));
}

#[test]
fn test_align_snaps_only_the_perpendicular_axis() {
    let map = Map::new().unwrap();
    let tile = IVec2::new(5, 5);
    let origin = map.tile_origin(tile);

    let mut position = Position(origin + Vec2::new(3.0, 7.0));
    align_to_tile(&mut position, tile, Direction::Left, &map, Vec2::ZERO);
    assert_eq!(position.0, origin + Vec2::new(3.0, 0.0));

    let mut position = Position(origin + Vec2::new(3.0, 7.0));
    align_to_tile(&mut position, tile, Direction::Up, &map, Vec2::ZERO);
    assert_eq!(position.0, origin + Vec2::new(0.0, 7.0));
}

#[test]
fn test_leading_edge_entry_while_gliding_right() {
    let map = Map::new().unwrap();
    let (mut position, mut tile) = mover_at(&map, IVec2::new(1, 5));

    // Just shy of the boundary: no transition.
    position.0.x = map.tile_origin(IVec2::new(2, 5)).x - GHOST_PROBE - 0.1;
    let outcome = update_tile_position(&mut position, &mut tile, Some(Direction::Right), GHOST_PROBE, &map);
    assert_eq!(outcome, TileUpdate::Unchanged);
    assert_eq!(tile.current, IVec2::new(1, 5));

    // The probe crosses: the mover has entered the next tile.
    position.0.x += 0.2;
    let outcome = update_tile_position(&mut position, &mut tile, Some(Direction::Right), GHOST_PROBE, &map);
    assert_eq!(outcome, TileUpdate::Entered(IVec2::new(2, 5)));
    assert_eq!(tile.previous, IVec2::new(1, 5));
}

#[test]
fn test_idle_mover_keeps_its_tile() {
    let map = Map::new().unwrap();
    let (mut position, mut tile) = mover_at(&map, IVec2::new(1, 5));
    position.0 += Vec2::new(100.0, 0.0);

    let outcome = update_tile_position(&mut position, &mut tile, None, GHOST_PROBE, &map);
    assert_eq!(outcome, TileUpdate::Unchanged);
    assert_eq!(tile.current, IVec2::new(1, 5));
}

#[test]
fn test_left_tunnel_wraps_to_the_right() {
    let map = Map::new().unwrap();
    let (mut position, mut tile) = mover_at(&map, LEFT_TUNNEL_TILE);
    position.0.x = -TELEPORT_THRESHOLD - 0.5;

    let outcome = update_tile_position(&mut position, &mut tile, Some(Direction::Left), GHOST_PROBE, &map);

    // Tile and position update atomically in the same call.
    assert_eq!(outcome, TileUpdate::Teleported(RIGHT_TUNNEL_TILE));
    assert_eq!(tile.current, RIGHT_TUNNEL_TILE);
    assert_eq!(position.0.x, WINDOW_SIZE.x as f32 + TELEPORT_THRESHOLD);
}

#[test]
fn test_right_tunnel_wraps_to_the_left() {
    let map = Map::new().unwrap();
    let (mut position, mut tile) = mover_at(&map, RIGHT_TUNNEL_TILE);
    position.0.x = map.tile_origin(RIGHT_TUNNEL_TILE).x + TELEPORT_THRESHOLD + 0.5;

    let outcome = update_tile_position(&mut position, &mut tile, Some(Direction::Right), GHOST_PROBE, &map);

    assert_eq!(outcome, TileUpdate::Teleported(LEFT_TUNNEL_TILE));
    assert_eq!(tile.current, LEFT_TUNNEL_TILE);
    assert_eq!(position.0.x, -TELEPORT_THRESHOLD);
}

#[test]
fn test_wrap_round_trip_is_mirrored() {
    let map = Map::new().unwrap();
    let (mut position, mut tile) = mover_at(&map, RIGHT_TUNNEL_TILE);
    let lane_y = position.0.y;
    position.0.x = map.tile_origin(RIGHT_TUNNEL_TILE).x + TELEPORT_THRESHOLD + 1.0;

    update_tile_position(&mut position, &mut tile, Some(Direction::Right), GHOST_PROBE, &map);
    assert_eq!(tile.current, LEFT_TUNNEL_TILE);
    assert_eq!(position.0.y, lane_y);

    // Turn around and exit left: back to the right mouth's mirror position.
    position.0.x = -TELEPORT_THRESHOLD - 1.0;
    update_tile_position(&mut position, &mut tile, Some(Direction::Left), GHOST_PROBE, &map);
    assert_eq!(tile.current, RIGHT_TUNNEL_TILE);
    assert_eq!(position.0.x, WINDOW_SIZE.x as f32 + TELEPORT_THRESHOLD);
}

#[test]
fn test_teleport_only_arms_in_the_exit_direction() {
    let map = Map::new().unwrap();
    let (mut position, mut tile) = mover_at(&map, LEFT_TUNNEL_TILE);
    position.0.x = -TELEPORT_THRESHOLD - 5.0;

    // Beyond the threshold but heading the wrong way: no wrap, and the
    // containment scan is skipped for the tick.
    let outcome = update_tile_position(&mut position, &mut tile, Some(Direction::Right), GHOST_PROBE, &map);
    assert_eq!(outcome, TileUpdate::Unchanged);
    assert_eq!(tile.current, LEFT_TUNNEL_TILE);
    assert_eq!(position.0.x, -TELEPORT_THRESHOLD - 5.0);
}

#[test]
fn test_off_board_probe_keeps_the_tile() {
    let map = Map::new().unwrap();
    let (mut position, mut tile) = mover_at(&map, LEFT_TUNNEL_TILE);
    // Inside the corridor, before the threshold.
    position.0.x = -20.0;

    let outcome = update_tile_position(&mut position, &mut tile, Some(Direction::Left), GHOST_PROBE, &map);
    assert_eq!(outcome, TileUpdate::Unchanged);
    assert_eq!(tile.current, LEFT_TUNNEL_TILE);
}
