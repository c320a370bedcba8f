//! This module defines the game map and provides functions for interacting with it.

pub mod direction;

use std::collections::HashMap;

use bevy_ecs::resource::Resource;
use bitflags::bitflags;
use glam::{IVec2, Vec2};

use crate::constants::{
    BOARD_SIZE, LAYOUT, LEFT_TUNNEL_TILE, POWER_PELLET_SCORE, RIGHT_TUNNEL_TILE, SCORE_OFFSET,
    SMALL_PELLET_SCORE, TILE_SIZE,
};
use crate::error::{GameResult, MapError};
use direction::Direction;

bitflags! {
    /// Which movers may step onto a tile class.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TraversalFlags: u8 {
        const PLAYER = 1 << 0;
        const GHOST = 1 << 1;
    }
}

/// Classification of a single board tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Open,
    Wall,
    GhostHouse,
    Pellet,
    OccupiedByPlayer,
    OccupiedByPursuer,
    /// Sentinel for queries outside the board.
    OutOfBounds,
}

/// The two pellet varieties and their score values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PelletKind {
    Small,
    Power,
}

impl PelletKind {
    pub const fn score(self) -> u32 {
        match self {
            PelletKind::Small => SMALL_PELLET_SCORE,
            PelletKind::Power => POWER_PELLET_SCORE,
        }
    }
}

/// Who is transiently standing on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Player,
    Pursuer,
}

/// The game board: fixed wall/house topology, the consumable pellet
/// registry, and a transient occupancy overlay.
#[derive(Resource)]
pub struct Map {
    base: [[TileKind; BOARD_SIZE.x as usize]; BOARD_SIZE.y as usize],
    pellets: HashMap<IVec2, PelletKind>,
    pellet_spawns: Vec<(IVec2, PelletKind)>,
    occupancy: HashMap<IVec2, Occupant>,
}

impl Map {
    /// Builds the map from the fixed board layout.
    pub fn new() -> GameResult<Map> {
        Self::from_layout(&LAYOUT)
    }

    /// Builds a map from an arbitrary layout using the standard tile codes
    /// (0 = small pellet, 1 = wall, 2 = ghost house, 3 = power pellet,
    /// 5 = open). Unknown codes are rejected.
    pub fn from_layout(
        layout: &[[u8; BOARD_SIZE.x as usize]; BOARD_SIZE.y as usize],
    ) -> GameResult<Map> {
        let mut base = [[TileKind::Open; BOARD_SIZE.x as usize]; BOARD_SIZE.y as usize];
        let mut pellet_spawns = Vec::new();

        for (y, row) in layout.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                let tile = IVec2::new(x as i32, y as i32);
                base[y][x] = match code {
                    0 => {
                        pellet_spawns.push((tile, PelletKind::Small));
                        TileKind::Open
                    }
                    1 => TileKind::Wall,
                    2 => TileKind::GhostHouse,
                    3 => {
                        pellet_spawns.push((tile, PelletKind::Power));
                        TileKind::Open
                    }
                    5 => TileKind::Open,
                    code => {
                        return Err(MapError::UnknownTileCode {
                            code,
                            x: tile.x,
                            y: tile.y,
                        }
                        .into())
                    }
                };
            }
        }

        let pellets = pellet_spawns.iter().copied().collect();
        Ok(Map {
            base,
            pellets,
            pellet_spawns,
            occupancy: HashMap::new(),
        })
    }

    pub fn in_bounds(&self, tile: IVec2) -> bool {
        tile.x >= 0 && tile.x < BOARD_SIZE.x as i32 && tile.y >= 0 && tile.y < BOARD_SIZE.y as i32
    }

    /// The fixed topology class of a tile, ignoring pellets and occupancy.
    pub fn base_kind(&self, tile: IVec2) -> TileKind {
        if !self.in_bounds(tile) {
            return TileKind::OutOfBounds;
        }
        self.base[tile.y as usize][tile.x as usize]
    }

    /// Full classification: occupancy overlay first, then the pellet
    /// registry, then the fixed topology.
    pub fn classify(&self, tile: IVec2) -> TileKind {
        if !self.in_bounds(tile) {
            return TileKind::OutOfBounds;
        }
        match self.occupancy.get(&tile) {
            Some(Occupant::Player) => TileKind::OccupiedByPlayer,
            Some(Occupant::Pursuer) => TileKind::OccupiedByPursuer,
            None if self.pellets.contains_key(&tile) => TileKind::Pellet,
            None => self.base_kind(tile),
        }
    }

    pub fn is_tunnel(&self, tile: IVec2) -> bool {
        tile == LEFT_TUNNEL_TILE || tile == RIGHT_TUNNEL_TILE
    }

    /// Whether a mover standing on `tile` may step toward `direction`.
    ///
    /// Walls block everyone and the ghost house blocks the player. The two
    /// tunnel mouths permit horizontal movement only — including the step
    /// off the board, which is how movers glide into the wrap corridor.
    pub fn is_walkable(&self, tile: IVec2, direction: Direction, mover: TraversalFlags) -> bool {
        if self.is_tunnel(tile) {
            return direction.is_horizontal();
        }

        let next = tile + direction.as_ivec2();
        if !self.in_bounds(next) {
            return false;
        }
        match self.base_kind(next) {
            TileKind::Wall => false,
            TileKind::GhostHouse => mover.contains(TraversalFlags::GHOST),
            _ => true,
        }
    }

    /// World-space top-left corner of a tile, in pixels.
    pub fn tile_origin(&self, tile: IVec2) -> Vec2 {
        Vec2::new(
            (tile.x * TILE_SIZE as i32) as f32,
            (tile.y * TILE_SIZE as i32 + SCORE_OFFSET as i32) as f32,
        )
    }

    /// Substitutes the nearest pursuer-walkable tile for a target that sits
    /// in a wall (the fixed scatter corners do). Deterministic: smallest
    /// squared distance, ties broken by (y, x).
    pub fn anchored(&self, target: IVec2) -> IVec2 {
        if self.in_bounds(target) && self.base_kind(target) != TileKind::Wall {
            return target;
        }

        let mut best = target;
        let mut best_distance = i32::MAX;
        for y in 0..BOARD_SIZE.y as i32 {
            for x in 0..BOARD_SIZE.x as i32 {
                let tile = IVec2::new(x, y);
                if self.base_kind(tile) == TileKind::Wall {
                    continue;
                }
                let delta = tile - target;
                let distance = delta.x * delta.x + delta.y * delta.y;
                if distance < best_distance {
                    best_distance = distance;
                    best = tile;
                }
            }
        }
        best
    }

    pub fn pellet_at(&self, tile: IVec2) -> Option<PelletKind> {
        self.pellets.get(&tile).copied()
    }

    /// Removes and returns the pellet on `tile`, if any.
    pub fn take_pellet(&mut self, tile: IVec2) -> Option<PelletKind> {
        self.pellets.remove(&tile)
    }

    pub fn pellets_remaining(&self) -> usize {
        self.pellets.len()
    }

    pub fn pellets(&self) -> impl Iterator<Item = (IVec2, PelletKind)> + '_ {
        self.pellets.iter().map(|(&tile, &kind)| (tile, kind))
    }

    /// Restores every pellet the layout spawns; used at level reset.
    pub fn regenerate_pellets(&mut self) {
        self.pellets = self.pellet_spawns.iter().copied().collect();
    }

    pub fn mark_occupant(&mut self, tile: IVec2, occupant: Occupant) {
        if self.in_bounds(tile) {
            self.occupancy.insert(tile, occupant);
        }
    }

    pub fn clear_occupant(&mut self, tile: IVec2) {
        self.occupancy.remove(&tile);
    }
}
