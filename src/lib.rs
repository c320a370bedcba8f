//! Maze-chase arcade core library crate.
//!
//! Implements the ghost AI, tile-grid pathfinding, and movement bookkeeping
//! of a classic maze-chase game. Rendering, audio, and input are reached
//! through the collaborator interfaces in [`systems::render`] and
//! [`systems::audio`]; the shell drives the simulation one [`game::Game::tick`]
//! per frame.

pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod map;
pub mod pathfind;
pub mod systems;
