//! Runs the simulation without a shell: fixed 60 Hz ticks, scripted input,
//! state logged at the end. Useful for smoke-testing the core.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chomp::constants::LOOP_TIME;
use chomp::events::GameCommand;
use chomp::game::Game;
use chomp::map::direction::Direction;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut game = Game::new()?;
    let dt = LOOP_TIME.as_secs_f32();

    // A minute of play: start out left, pre-turn upward at the first
    // intersection, then wander.
    for tick in 0..3600u32 {
        match tick {
            300 => game.queue_command(GameCommand::MovePlayer(Direction::Left)),
            420 => game.queue_command(GameCommand::MovePlayer(Direction::Up)),
            900 => game.queue_command(GameCommand::MovePlayer(Direction::Right)),
            1800 => game.queue_command(GameCommand::MovePlayer(Direction::Down)),
            _ => {}
        }
        if game.tick(dt) {
            break;
        }
    }

    info!(
        score = game.score(),
        lives = game.lives(),
        stage = ?game.stage(),
        "Headless run complete"
    );
    Ok(())
}
