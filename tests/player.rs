use glam::IVec2;
use speculoos::prelude::*;

use chomp::events::GameCommand;
use chomp::map::direction::Direction;
use chomp::systems::{BufferedDirection, Movable, PlayerControlled, TilePosition};

mod common;

#[test]
fn test_blocked_buffered_turn_is_not_applied() {
    let mut game = common::playing_game();
    let player = common::player_entity(&mut game);

    // The dead-end corner at (1, 23): left is a wall, up is open.
    common::place(&mut game, player, IVec2::new(1, 23));
    {
        let mut entry = game.world.entity_mut(player);
        entry.get_mut::<Movable>().unwrap().heading = Some(Direction::Left);
        entry.get_mut::<BufferedDirection>().unwrap().0 = Some(Direction::Left);
    }

    game.tick(0.01);

    // The request could not be applied and the heading hit the wall.
    let entry = game.world.entity(player);
    assert_that(&entry.get::<Movable>().unwrap().heading).is_equal_to(None);
    assert_that(&entry.get::<BufferedDirection>().unwrap().0).is_equal_to(Some(Direction::Left));
    assert_that(&entry.get::<TilePosition>().unwrap().current).is_equal_to(IVec2::new(1, 23));

    // An upward request snaps the heading up at the next tick.
    game.queue_command(GameCommand::MovePlayer(Direction::Up));
    game.tick(0.01);

    let entry = game.world.entity(player);
    assert_that(&entry.get::<Movable>().unwrap().heading).is_equal_to(Some(Direction::Up));
    assert_that(&entry.get::<PlayerControlled>().unwrap().facing).is_equal_to(Direction::Up);
    assert_that(&entry.get::<BufferedDirection>().unwrap().0).is_equal_to(None);
}

#[test]
fn test_turn_cooldown_rate_limits_turns() {
    let mut game = common::playing_game();
    let player = common::player_entity(&mut game);

    // A four-way intersection.
    common::place(&mut game, player, IVec2::new(6, 5));
    {
        let mut entry = game.world.entity_mut(player);
        entry.get_mut::<Movable>().unwrap().heading = None;
    }

    game.queue_command(GameCommand::MovePlayer(Direction::Up));
    game.tick(0.0);
    {
        let entry = game.world.entity(player);
        assert_that(&entry.get::<Movable>().unwrap().heading).is_equal_to(Some(Direction::Up));
    }

    // A second legal request inside the cooldown stays buffered.
    game.queue_command(GameCommand::MovePlayer(Direction::Left));
    game.tick(0.0);
    {
        let entry = game.world.entity(player);
        assert_that(&entry.get::<Movable>().unwrap().heading).is_equal_to(Some(Direction::Up));
        assert_that(&entry.get::<BufferedDirection>().unwrap().0).is_equal_to(Some(Direction::Left));
    }

    // Once the cooldown elapses the buffered turn applies.
    game.tick(0.25);
    {
        let entry = game.world.entity(player);
        assert_that(&entry.get::<Movable>().unwrap().heading).is_equal_to(Some(Direction::Left));
    }
}

#[test]
fn test_new_request_overwrites_the_buffer() {
    let mut game = common::playing_game();
    let player = common::player_entity(&mut game);
    common::place(&mut game, player, IVec2::new(1, 23));
    {
        let mut entry = game.world.entity_mut(player);
        entry.get_mut::<Movable>().unwrap().heading = None;
        entry.get_mut::<BufferedDirection>().unwrap().0 = Some(Direction::Left);
    }

    game.queue_command(GameCommand::MovePlayer(Direction::Down));
    game.tick(0.0);

    // Down is a wall here too, so it stays buffered — but the older left
    // request is gone.
    let entry = game.world.entity(player);
    assert_that(&entry.get::<BufferedDirection>().unwrap().0).is_equal_to(Some(Direction::Down));
}

#[test]
fn test_player_glides_and_enters_tiles() {
    let mut game = common::playing_game();
    let player = common::player_entity(&mut game);

    // Long open corridor: row 5. Head right and watch tiles advance.
    common::place(&mut game, player, IVec2::new(2, 5));
    {
        let mut entry = game.world.entity_mut(player);
        entry.get_mut::<Movable>().unwrap().heading = Some(Direction::Right);
    }

    // 150 px/s for a second crosses several 24 px tiles.
    for _ in 0..60 {
        game.tick(1.0 / 60.0);
    }

    let tile = common::tile(&mut game, player);
    assert_that(&(tile.y)).is_equal_to(5);
    assert!(tile.x > 2, "player never advanced: {tile:?}");
}
