//! Simulation assembly and the per-tick entry point.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::constants::{
    GHOST_NORMAL_SPEED, GHOST_PROBE, GHOST_SPAWN_NUDGE, PLAYER_PROBE, PLAYER_SPAWN_NUDGE,
    PLAYER_SPEED, PLAYER_START_TILE,
};
use crate::error::{GameError, GameResult};
use crate::events::{GameCommand, GameEvent};
use crate::map::{direction::Direction, Map, Occupant};
use crate::systems::{
    audio_system, collision_system, command_system, ghost_ai_system, ghost_timer_system,
    mode_system, pellet_system, player_control_system, player_movement_system, render_system,
    soundtrack_system, stage_system, AudioBackend, AudioEvent, AudioOutput, AudioState,
    BufferedDirection, DeltaTime, GameRng, GameStage, Ghost, GhostBundle, GhostKind, GhostMode,
    GhostRoster, GlobalState, ModeController, Movable, NullAudio, NullRenderer, OneShot, Paused,
    PlayerBundle, PlayerControlled, PlayerLives, Position, RenderTarget, Renderer, ResetPending,
    Route, Score, TilePosition, TurnCooldown,
};

/// The `Game` struct is the main entry point for the simulation.
///
/// It owns the ECS world and the chained per-tick schedule; the shell feeds
/// it commands and a delta time, and reads score/lives/stage back out.
pub struct Game {
    pub world: World,
    schedule: Schedule,
}

impl Game {
    pub fn new() -> GameResult<Game> {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<GameCommand>(&mut world);
        EventRegistry::register_event::<GameEvent>(&mut world);
        EventRegistry::register_event::<AudioEvent>(&mut world);
        EventRegistry::register_event::<GameError>(&mut world);

        let mut map = Map::new()?;

        world.spawn(PlayerBundle {
            player: PlayerControlled {
                facing: Direction::Right,
            },
            position: Position(map.tile_origin(PLAYER_START_TILE) + Vec2::new(PLAYER_SPAWN_NUDGE, 0.0)),
            tile: TilePosition::at(PLAYER_START_TILE),
            movable: Movable {
                speed: PLAYER_SPEED,
                heading: Some(Direction::Right),
                probe: PLAYER_PROBE,
            },
            buffered: BufferedDirection::default(),
            cooldown: TurnCooldown::default(),
        });
        map.mark_occupant(PLAYER_START_TILE, Occupant::Player);

        let mut roster = Vec::with_capacity(GhostKind::ALL.len());
        for kind in GhostKind::ALL {
            let spawn = kind.spawn_tile();
            let entity = world
                .spawn(GhostBundle {
                    ghost: Ghost(kind),
                    mode: GhostMode::Scatter,
                    position: Position(map.tile_origin(spawn) + Vec2::new(GHOST_SPAWN_NUDGE, 0.0)),
                    tile: TilePosition::at(spawn),
                    movable: Movable {
                        speed: GHOST_NORMAL_SPEED,
                        heading: Some(kind.spawn_facing()),
                        probe: GHOST_PROBE,
                    },
                    route: Route::default(),
                })
                .id();
            map.mark_occupant(spawn, Occupant::Pursuer);
            roster.push(entity);
        }

        world.insert_resource(map);
        world.insert_resource(GhostRoster(roster));
        world.insert_resource(DeltaTime::default());
        world.insert_resource(Score::default());
        world.insert_resource(PlayerLives::default());
        world.insert_resource(ModeController::default());
        world.insert_resource(Paused::default());
        world.insert_resource(ResetPending::default());
        world.insert_resource(GlobalState::default());
        world.insert_resource(GameStage::session_start());
        world.insert_resource(AudioState::default());
        world.insert_resource(GameRng(SmallRng::from_os_rng()));
        world.insert_non_send_resource(AudioOutput(Box::new(NullAudio)));
        world.insert_non_send_resource(RenderTarget(Box::new(NullRenderer)));

        schedule.add_systems(
            (
                command_system,
                mode_system,
                player_control_system,
                player_movement_system,
                pellet_system,
                ghost_timer_system,
                ghost_ai_system,
                collision_system,
                stage_system,
                soundtrack_system,
                audio_system,
                render_system,
            )
                .chain(),
        );

        world.send_event(AudioEvent::Play(OneShot::GameStart));

        Ok(Game { world, schedule })
    }

    /// Queues a per-tick command from the input collaborator.
    pub fn queue_command(&mut self, command: GameCommand) {
        self.world.send_event(command);
    }

    /// Installs the shell's audio backend, replacing the null one.
    pub fn set_audio_backend(&mut self, backend: Box<dyn AudioBackend>) {
        self.world.insert_non_send_resource(AudioOutput(backend));
    }

    /// Installs the shell's renderer, replacing the null one.
    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.world.insert_non_send_resource(RenderTarget(renderer));
    }

    /// Ticks the simulation by `dt` seconds.
    ///
    /// Returns true when the shell should exit.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.world.insert_resource(DeltaTime(dt));
        self.schedule.run(&mut self.world);

        // Event buffers are double-buffered; rotate them once per tick.
        self.world.resource_mut::<Events<GameCommand>>().update();
        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<AudioEvent>>().update();
        self.world.resource_mut::<Events<GameError>>().update();

        self.world.resource::<GlobalState>().exit
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<Score>().0
    }

    pub fn lives(&self) -> i32 {
        self.world.resource::<PlayerLives>().0
    }

    pub fn stage(&self) -> GameStage {
        *self.world.resource::<GameStage>()
    }
}
