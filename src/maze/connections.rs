//! Connection set: one open/closed state per pair of adjacent cells

use super::grid::{CellIndex, EdgeKind, Grid};

/// State of the wall between two adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeState {
    /// Wall present
    #[default]
    Closed,
    /// Wall removed, cells are connected
    Open,
}

impl EdgeState {
    #[inline]
    pub fn is_open(self) -> bool {
        self == EdgeState::Open
    }
}

/// A single edge as seen by iteration: its two cells (upper/left first),
/// orientation and state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: CellIndex,
    pub b: CellIndex,
    pub kind: EdgeKind,
    pub state: EdgeState,
}

/// Generated maze: every wall of a grid, open or closed.
///
/// Queries for cells that are not 4-adjacent return `None` instead of
/// aliasing onto another edge's slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSet {
    grid: Grid,
    edges: Vec<EdgeState>,
}

impl ConnectionSet {
    /// Every wall closed
    pub fn closed(grid: Grid) -> Self {
        Self {
            grid,
            edges: vec![EdgeState::Closed; grid.edge_count()],
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// State of the wall between `a` and `b`
    pub fn edge_state(&self, a: CellIndex, b: CellIndex) -> Option<EdgeState> {
        let edge = self.grid.edge_index(a, b)?;
        self.edges.get(edge).copied()
    }

    /// Whether the wall between `a` and `b` has been removed.
    ///
    /// `None` means the cells share no edge.
    pub fn edge_is_open(&self, a: CellIndex, b: CellIndex) -> Option<bool> {
        self.edge_state(a, b).map(EdgeState::is_open)
    }

    /// Set the wall between `a` and `b`, returning its previous state
    pub fn set_edge(&mut self, a: CellIndex, b: CellIndex, state: EdgeState) -> Option<EdgeState> {
        let edge = self.grid.edge_index(a, b)?;
        let slot = self.edges.get_mut(edge)?;
        Some(std::mem::replace(slot, state))
    }

    /// Number of removed walls
    pub fn open_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_open()).count()
    }

    /// All edges in slot order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().enumerate().filter_map(|(slot, &state)| {
            let (a, b) = self.grid.edge_cells(slot)?;
            let kind = self.grid.edge_kind(slot)?;
            Some(Edge { a, b, kind, state })
        })
    }

    /// Neighbours reachable from `cell` through an open wall
    pub fn open_neighbours(&self, cell: CellIndex) -> impl Iterator<Item = CellIndex> + '_ {
        self.grid
            .neighbours(cell)
            .filter(move |&n| self.edge_is_open(cell, n) == Some(true))
    }
}
