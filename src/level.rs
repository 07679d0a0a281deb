//! Level layout built from a maze
//!
//! Turns a connection set into static wall segments and a player spawn,
//! ready to be handed to the physics world. Cell `(x, y)` is centred on
//! `(x * grid_size, y * grid_size)`, so cell 0 sits at the origin and walls
//! run along half-cell offsets.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_MASS, PLAYER_RADIUS, WALL_RADIUS};
use crate::maze::{CellIndex, ConnectionSet, EdgeState, Grid};

/// A static wall segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub a: Vec2,
    pub b: Vec2,
    /// Segment thickness (bevel radius)
    pub radius: f32,
}

impl WallSegment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            a,
            b,
            radius: WALL_RADIUS,
        }
    }

    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }
}

/// Controllable circular body placed inside the maze
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpawn {
    pub position: Vec2,
    pub mass: f32,
    pub radius: f32,
}

impl PlayerSpawn {
    /// Moment of inertia of a solid disc
    pub fn moment(&self) -> f32 {
        0.5 * self.mass * self.radius * self.radius
    }
}

/// Everything the physics world needs to host a maze
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Outer boundary first (top, bottom, left, right), then inner walls
    pub walls: Vec<WallSegment>,
    pub player: PlayerSpawn,
    pub grid_size: f32,
}

impl Level {
    /// Number of outer boundary segments at the front of `walls`
    pub const BOUNDARY_SEGMENTS: usize = 4;

    pub fn boundary(&self) -> &[WallSegment] {
        &self.walls[..Self::BOUNDARY_SEGMENTS]
    }

    pub fn inner_walls(&self) -> &[WallSegment] {
        &self.walls[Self::BOUNDARY_SEGMENTS..]
    }
}

/// World position of a cell's centre
pub fn cell_center(grid: &Grid, cell: CellIndex, grid_size: f32) -> Option<Vec2> {
    let (x, y) = grid.coords(cell)?;
    Some(Vec2::new(x as f32, y as f32) * grid_size)
}

/// Lay out walls for every closed edge plus the fixed outer boundary
pub fn build_level(maze: &ConnectionSet, grid_size: f32) -> Level {
    let grid = maze.grid();
    let (width, height) = (grid.width(), grid.height());
    let half = grid_size / 2.0;
    // Wall line `i` sits half a cell before cell column/row `i`
    let line = |i: usize| i as f32 * grid_size - half;

    let min = Vec2::splat(-half);
    let max = Vec2::new(line(width), line(height));

    let mut walls = Vec::with_capacity(
        Level::BOUNDARY_SEGMENTS + grid.edge_count() - maze.open_edge_count(),
    );
    walls.push(WallSegment::new(min, Vec2::new(max.x, min.y)));
    walls.push(WallSegment::new(Vec2::new(min.x, max.y), max));
    walls.push(WallSegment::new(min, Vec2::new(min.x, max.y)));
    walls.push(WallSegment::new(Vec2::new(max.x, min.y), max));

    // Horizontal walls between row j - 1 and row j
    for j in 1..height {
        for i in 0..width {
            let cell = i + j * width;
            if maze.edge_state(cell, cell - width) == Some(EdgeState::Closed) {
                walls.push(WallSegment::new(
                    Vec2::new(line(i), line(j)),
                    Vec2::new(line(i + 1), line(j)),
                ));
            }
        }
    }

    // Vertical walls between column i - 1 and column i
    for i in 1..width {
        for j in 0..height {
            let cell = i + j * width;
            if maze.edge_state(cell, cell - 1) == Some(EdgeState::Closed) {
                walls.push(WallSegment::new(
                    Vec2::new(line(i), line(j)),
                    Vec2::new(line(i), line(j + 1)),
                ));
            }
        }
    }

    log::debug!(
        "Level {}x{} @ {}: {} wall segments",
        width,
        height,
        grid_size,
        walls.len()
    );

    Level {
        walls,
        player: PlayerSpawn {
            position: Vec2::ZERO,
            mass: PLAYER_MASS,
            radius: PLAYER_RADIUS,
        },
        grid_size,
    }
}
