use glam::IVec2;
use pretty_assertions::assert_eq;

use chomp::constants::{
    GHOST_EATEN_SPEED, GHOST_FRIGHTENED_SPEED, HOUSE_TARGET_TILE, PLAYER_START_TILE,
};
use chomp::systems::{GameStage, GhostKind, GhostMode, Movable, Route};

mod common;

fn set_mode(game: &mut chomp::game::Game, kind: GhostKind, mode: GhostMode) {
    let entity = common::ghost_entity(game, kind);
    let mut entry = game.world.entity_mut(entity);
    *entry.get_mut::<GhostMode>().unwrap() = mode;
    let speed = mode.speed();
    entry.get_mut::<Movable>().unwrap().speed = speed;
    entry.get_mut::<Route>().unwrap().clear();
}

fn mode_of(game: &mut chomp::game::Game, kind: GhostKind) -> GhostMode {
    let entity = common::ghost_entity(game, kind);
    *game.world.entity(entity).get::<GhostMode>().unwrap()
}

/// Parks the player on its tile so collision scenarios stay put.
fn park_player(game: &mut chomp::game::Game) {
    let player = common::player_entity(game);
    game.world
        .entity_mut(player)
        .get_mut::<Movable>()
        .unwrap()
        .heading = None;
}

#[test]
fn test_capturing_frightened_pursuers_escalates_the_score() {
    let mut game = common::playing_game();
    let player = common::player_entity(&mut game);
    let blinky = common::ghost_entity(&mut game, GhostKind::Blinky);
    park_player(&mut game);

    set_mode(&mut game, GhostKind::Blinky, GhostMode::Frightened { timer: 0.0 });
    let player_tile = common::tile(&mut game, player);
    common::place(&mut game, blinky, player_tile);
    game.tick(1.0 / 60.0);

    // First capture of the window: 200 points, pursuer eaten.
    assert_eq!(game.score(), 200);
    assert_eq!(mode_of(&mut game, GhostKind::Blinky), GhostMode::Eaten);
    {
        let entry = game.world.entity(blinky);
        assert_eq!(entry.get::<Movable>().unwrap().speed, GHOST_EATEN_SPEED);
    }

    // Second capture in the same window: 400 points.
    let pinky = common::ghost_entity(&mut game, GhostKind::Pinky);
    set_mode(&mut game, GhostKind::Pinky, GhostMode::Frightened { timer: 0.0 });
    let player_tile = common::tile(&mut game, player);
    common::place(&mut game, pinky, player_tile);
    game.tick(1.0 / 60.0);

    assert_eq!(game.score(), 600);
    assert_eq!(mode_of(&mut game, GhostKind::Pinky), GhostMode::Eaten);
}

#[test]
fn test_eaten_pursuers_route_to_the_house() {
    let mut game = common::playing_game();
    let player = common::player_entity(&mut game);
    let blinky = common::ghost_entity(&mut game, GhostKind::Blinky);
    park_player(&mut game);

    set_mode(&mut game, GhostKind::Blinky, GhostMode::Frightened { timer: 0.0 });
    let player_tile = common::tile(&mut game, player);
    common::place(&mut game, blinky, player_tile);
    game.tick(1.0 / 60.0);
    assert_eq!(mode_of(&mut game, GhostKind::Blinky), GhostMode::Eaten);

    // The next planning pass routes straight at the house interior.
    game.tick(1.0 / 60.0);
    let route = game.world.entity(blinky).get::<Route>().unwrap().clone();
    assert_eq!(route.tiles.last().copied(), Some(HOUSE_TARGET_TILE));
}

#[test]
fn test_eaten_pursuer_reverts_on_reaching_the_house() {
    let mut game = common::playing_game();
    let blinky = common::ghost_entity(&mut game, GhostKind::Blinky);

    set_mode(&mut game, GhostKind::Blinky, GhostMode::Eaten);
    common::place(&mut game, blinky, HOUSE_TARGET_TILE);
    game.tick(1.0 / 60.0);

    assert_eq!(mode_of(&mut game, GhostKind::Blinky), GhostMode::Chase);
    let entry = game.world.entity(blinky);
    assert_eq!(entry.get::<Movable>().unwrap().speed, chomp::constants::GHOST_NORMAL_SPEED);
}

#[test]
fn test_touching_a_hostile_pursuer_costs_a_life_and_resets() {
    let mut game = common::playing_game();
    let player = common::player_entity(&mut game);
    let blinky = common::ghost_entity(&mut game, GhostKind::Blinky);
    park_player(&mut game);

    set_mode(&mut game, GhostKind::Blinky, GhostMode::Chase);
    let player_tile = common::tile(&mut game, player);
    common::place(&mut game, blinky, player_tile);
    game.tick(1.0 / 60.0);

    assert_eq!(game.lives(), 3);
    assert!(matches!(game.stage(), GameStage::Respawning { .. }));

    // Everyone is back at spawn.
    assert_eq!(common::tile(&mut game, player), PLAYER_START_TILE);
    assert_eq!(common::tile(&mut game, blinky), GhostKind::Blinky.spawn_tile());
    assert_eq!(mode_of(&mut game, GhostKind::Blinky), GhostMode::Scatter);
}

#[test]
fn test_power_pellet_frightens_the_pack() {
    let mut game = common::playing_game();
    let player = common::player_entity(&mut game);

    // Stand on a power pellet.
    common::place(&mut game, player, IVec2::new(1, 3));
    {
        let mut entry = game.world.entity_mut(player);
        entry.get_mut::<Movable>().unwrap().heading = None;
    }
    game.tick(1.0 / 60.0);

    assert_eq!(game.score(), 50);
    for kind in GhostKind::ALL {
        let mode = mode_of(&mut game, kind);
        assert!(mode.is_frightened(), "{kind:?} should be frightened, was {mode:?}");
        let entity = common::ghost_entity(&mut game, kind);
        assert_eq!(
            game.world.entity(entity).get::<Movable>().unwrap().speed,
            GHOST_FRIGHTENED_SPEED
        );
    }
}

#[test]
fn test_frightened_expires_back_to_chase() {
    let mut game = common::playing_game();
    let player = common::player_entity(&mut game);
    let blinky = common::ghost_entity(&mut game, GhostKind::Blinky);

    // Park the player in the far corner so nothing collides while the
    // frightened timer runs down.
    common::place(&mut game, player, IVec2::new(21, 29));
    park_player(&mut game);
    set_mode(&mut game, GhostKind::Blinky, GhostMode::Frightened { timer: 0.0 });
    common::place(&mut game, blinky, IVec2::new(1, 5));

    // Eight seconds of frightened wandering.
    for _ in 0..(8.5 * 60.0) as u32 {
        game.tick(1.0 / 60.0);
        if !mode_of(&mut game, GhostKind::Blinky).is_frightened() {
            break;
        }
    }

    assert_eq!(mode_of(&mut game, GhostKind::Blinky), GhostMode::Chase);
}

#[test]
fn test_pursuers_leave_spawn_and_plan_routes() {
    let mut game = common::playing_game();
    let blinky = common::ghost_entity(&mut game, GhostKind::Blinky);
    let start = common::tile(&mut game, blinky);

    for _ in 0..120 {
        game.tick(1.0 / 60.0);
    }

    let entry = game.world.entity(blinky);
    let route = entry.get::<Route>().unwrap();
    let movable = entry.get::<Movable>().unwrap();
    assert!(route.anchor.is_some(), "route was never computed");
    assert!(movable.heading.is_some(), "pursuer is stuck");
    assert!(common::tile(&mut game, blinky) != start, "pursuer never moved");
}
