#![allow(dead_code)]

use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use chomp::constants::{BOARD_SIZE, GHOST_RELEASE_DELAY};
use chomp::game::Game;
use chomp::map::Map;
use chomp::systems::{
    AmbientMode, GameRng, GameStage, Ghost, GhostKind, ModeController, PlayerControlled, Position,
    TilePosition,
};

/// A layout that is solid wall everywhere; carve what the test needs.
pub fn walled_layout() -> [[u8; BOARD_SIZE.x as usize]; BOARD_SIZE.y as usize] {
    [[1; BOARD_SIZE.x as usize]; BOARD_SIZE.y as usize]
}

pub fn carve(layout: &mut [[u8; BOARD_SIZE.x as usize]; BOARD_SIZE.y as usize], tiles: &[(usize, usize)]) {
    for &(x, y) in tiles {
        layout[y][x] = 5;
    }
}

pub fn carved_map(tiles: &[(usize, usize)]) -> Map {
    let mut layout = walled_layout();
    carve(&mut layout, tiles);
    Map::from_layout(&layout).expect("test layout should parse")
}

/// A game skipped past the start jingle with every pursuer released and a
/// seeded RNG, so tests drive gameplay directly.
pub fn playing_game() -> Game {
    let mut game = Game::new().expect("game should construct");
    game.world.insert_resource(GameStage::Playing);
    game.world.insert_resource(GameRng(SmallRng::seed_from_u64(7)));
    let mut controller = game.world.resource_mut::<ModeController>();
    controller.release_timer = GHOST_RELEASE_DELAY;
    controller.ambient = AmbientMode::Scatter;
    game
}

pub fn player_entity(game: &mut Game) -> Entity {
    let mut query = game.world.query_filtered::<Entity, With<PlayerControlled>>();
    query.iter(&game.world).next().expect("player should exist")
}

pub fn ghost_entity(game: &mut Game, kind: GhostKind) -> Entity {
    let mut query = game.world.query::<(Entity, &Ghost)>();
    query
        .iter(&game.world)
        .find(|(_, ghost)| ghost.0 == kind)
        .map(|(entity, _)| entity)
        .expect("ghost should exist")
}

/// Moves an entity's discrete tile and continuous position together, keeping
/// the two views of its location consistent.
pub fn place(game: &mut Game, entity: Entity, tile: IVec2) {
    let origin = {
        let map = game.world.resource::<Map>();
        map.tile_origin(tile)
    };
    let mut entry = game.world.entity_mut(entity);
    if let Some(mut position) = entry.get_mut::<Position>() {
        position.0 = origin;
    }
    if let Some(mut tile_position) = entry.get_mut::<TilePosition>() {
        *tile_position = TilePosition::at(tile);
    }
}

pub fn tile(game: &mut Game, entity: Entity) -> IVec2 {
    game.world
        .entity(entity)
        .get::<TilePosition>()
        .expect("entity should have a tile")
        .current
}
