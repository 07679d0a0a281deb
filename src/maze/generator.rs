//! Row-wise randomized spanning tree maze generation
//!
//! Rows are processed top to bottom. Each row gets:
//! 1. fresh labels for every cell not already claimed from the row above
//! 2. a horizontal pass joining neighbours with different labels at random
//!    (every join is forced on the last row)
//! 3. a vertical pass carving downward passages, at least one per run of
//!    equal labels, so no class is stranded
//!
//! Labels are scratch state for a single call and are dropped on return.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::connections::{ConnectionSet, EdgeState};
use super::grid::{CellIndex, Grid};
use crate::consts::{DEFAULT_HORIZONTAL_CHANCE, DEFAULT_VERTICAL_CHANCE};
use crate::error::{MazeError, Result};

/// How a horizontal join relabels the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelMerge {
    /// Every cell in the row carrying the right-hand label takes the
    /// left-hand label, so equal labels always mean "already connected".
    #[default]
    Class,
    /// Only the right-hand cell is relabelled. Cells already connected
    /// through an earlier row can end up with different labels and be
    /// joined again, leaving a loop in the maze.
    AdjacentOnly,
}

/// Tunable chances for the generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    /// Chance of joining two differently labelled neighbours in a row
    pub horizontal_chance: f32,
    /// Chance of carving down from any given cell
    pub vertical_chance: f32,
    pub label_merge: LabelMerge,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            horizontal_chance: DEFAULT_HORIZONTAL_CHANCE,
            vertical_chance: DEFAULT_VERTICAL_CHANCE,
            label_merge: LabelMerge::Class,
        }
    }
}

impl GeneratorParams {
    /// Check both chances lie in `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        let chances = [
            ("horizontal_chance", self.horizontal_chance),
            ("vertical_chance", self.vertical_chance),
        ];
        for (name, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(MazeError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}

/// Seeded generator for reproducible mazes
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Generate a perfect maze with the default chances
pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<ConnectionSet> {
    generate_with(width, height, &GeneratorParams::default(), rng)
}

/// Generate a maze with explicit parameters.
///
/// Fails before allocating anything if the dimensions or chances are invalid.
pub fn generate_with<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    params: &GeneratorParams,
    rng: &mut R,
) -> Result<ConnectionSet> {
    let grid = Grid::new(width, height)?;
    params.validate()?;

    let mut builder = Builder::new(grid, params, rng);
    for row in 0..height - 1 {
        builder.join_row(row, false);
        builder.carve_down(row);
    }
    builder.join_row(height - 1, true);

    let maze = builder.finish();
    log::info!(
        "Generated {}x{} maze: {} of {} walls open",
        width,
        height,
        maze.open_edge_count(),
        grid.edge_count()
    );
    Ok(maze)
}

/// Label 0 marks a cell no row has claimed yet
const UNASSIGNED: usize = 0;

struct Builder<'a, R: ?Sized> {
    grid: Grid,
    params: &'a GeneratorParams,
    rng: &'a mut R,
    labels: Vec<usize>,
    next_label: usize,
    maze: ConnectionSet,
}

impl<'a, R: Rng + ?Sized> Builder<'a, R> {
    fn new(grid: Grid, params: &'a GeneratorParams, rng: &'a mut R) -> Self {
        Self {
            grid,
            params,
            rng,
            labels: vec![UNASSIGNED; grid.cell_count()],
            next_label: UNASSIGNED + 1,
            maze: ConnectionSet::closed(grid),
        }
    }

    fn finish(self) -> ConnectionSet {
        self.maze
    }

    fn row_cells(&self, row: usize) -> std::ops::Range<CellIndex> {
        let start = row * self.grid.width();
        start..start + self.grid.width()
    }

    /// Label pass followed by the horizontal join pass
    fn join_row(&mut self, row: usize, last: bool) {
        let cells = self.row_cells(row);

        for label in &mut self.labels[cells.clone()] {
            if *label == UNASSIGNED {
                *label = self.next_label;
                self.next_label += 1;
            }
        }

        let chance = if last { 1.0 } else { self.params.horizontal_chance };
        for cell in cells.start + 1..cells.end {
            let (left, right) = (self.labels[cell - 1], self.labels[cell]);
            if left == right || !roll(&mut *self.rng, chance) {
                continue;
            }

            self.open(cell - 1, cell);
            match self.params.label_merge {
                LabelMerge::Class => {
                    for label in &mut self.labels[cells.clone()] {
                        if *label == right {
                            *label = left;
                        }
                    }
                }
                LabelMerge::AdjacentOnly => self.labels[cell] = left,
            }
        }

        log::debug!(
            "Row {} joined ({} labels issued so far)",
            row,
            self.next_label - 1
        );
    }

    /// Vertical pass: every run of equal labels carves at least one
    /// passage into the next row.
    fn carve_down(&mut self, row: usize) {
        let cells = self.row_cells(row);
        let mut run_label = self.labels[cells.start];
        let mut carved = false;

        for cell in cells.clone() {
            if self.labels[cell] != run_label {
                if !carved {
                    self.open_down(cell - 1, run_label);
                }
                run_label = self.labels[cell];
                carved = false;
            }

            if roll(&mut *self.rng, self.params.vertical_chance) {
                self.open_down(cell, run_label);
                carved = true;
            }
        }

        if !carved {
            self.open_down(cells.end - 1, run_label);
        }
    }

    fn open_down(&mut self, cell: CellIndex, label: usize) {
        let below = cell + self.grid.width();
        self.labels[below] = label;
        self.open(cell, below);
    }

    fn open(&mut self, a: CellIndex, b: CellIndex) {
        let previous = self.maze.set_edge(a, b, EdgeState::Open);
        debug_assert_eq!(previous, Some(EdgeState::Closed), "edge {a}-{b} opened twice");
    }
}

/// Uniform roll against `chance`; a certain chance consumes no randomness
fn roll<R: Rng + ?Sized>(rng: &mut R, chance: f32) -> bool {
    if chance >= 1.0 {
        return true;
    }
    let value: f32 = rng.random();
    let hit = value < chance;
    log::trace!("roll {value:.4} < {chance}: {hit}");
    hit
}
