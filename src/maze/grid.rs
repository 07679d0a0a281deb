//! Grid geometry: cell indices and the edge slot layout
//!
//! Cells are addressed linearly as `x + y * width`. Every pair of 4-adjacent
//! cells owns exactly one edge slot:
//! - horizontal walls (separating a cell from the one below it) occupy
//!   `[0, width * (height - 1))`, addressed by the upper cell as `x + y * width`
//! - vertical walls (separating a cell from the one to its right) follow,
//!   addressed by the left cell as `y + x * height`
//!
//! Level builders depend on this layout, so it must not change.

use crate::error::{MazeError, Result};

/// Linear cell index (`x + y * width`)
pub type CellIndex = usize;

/// Orientation of the wall an edge slot stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Wall between a cell and the cell below it
    Horizontal,
    /// Wall between a cell and the cell to its right
    Vertical,
}

/// Validated maze dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid, rejecting empty dimensions and cell counts that
    /// cannot be indexed.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let fits = width
            .checked_mul(height)
            .and_then(|cells| cells.checked_mul(2))
            .is_some();
        if width == 0 || height == 0 || !fits {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of horizontal walls (between vertically stacked cells)
    #[inline]
    pub fn horizontal_edge_count(&self) -> usize {
        self.width * (self.height - 1)
    }

    /// Number of vertical walls (between side-by-side cells)
    #[inline]
    pub fn vertical_edge_count(&self) -> usize {
        self.height * (self.width - 1)
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.horizontal_edge_count() + self.vertical_edge_count()
    }

    /// Linear index of the cell at column `x`, row `y`
    pub fn cell_index(&self, x: usize, y: usize) -> Option<CellIndex> {
        (x < self.width && y < self.height).then(|| x + y * self.width)
    }

    /// Column and row of a cell
    pub fn coords(&self, cell: CellIndex) -> Option<(usize, usize)> {
        (cell < self.cell_count()).then(|| (cell % self.width, cell / self.width))
    }

    /// Edge slot shared by two cells, or `None` when they are not 4-adjacent
    /// or either lies outside the grid.
    pub fn edge_index(&self, a: CellIndex, b: CellIndex) -> Option<usize> {
        let (ax, ay) = self.coords(a)?;
        let (bx, by) = self.coords(b)?;

        if ax == bx && ay.abs_diff(by) == 1 {
            let upper = ay.min(by);
            Some(ax + upper * self.width)
        } else if ay == by && ax.abs_diff(bx) == 1 {
            let left = ax.min(bx);
            Some(self.horizontal_edge_count() + ay + left * self.height)
        } else {
            None
        }
    }

    /// Inverse of [`Grid::edge_index`]: the two cells of an edge slot,
    /// upper/left cell first.
    pub fn edge_cells(&self, edge: usize) -> Option<(CellIndex, CellIndex)> {
        let horizontal = self.horizontal_edge_count();
        if edge < horizontal {
            let upper = edge;
            Some((upper, upper + self.width))
        } else if edge < self.edge_count() {
            let slot = edge - horizontal;
            let (y, x) = (slot % self.height, slot / self.height);
            let left = x + y * self.width;
            Some((left, left + 1))
        } else {
            None
        }
    }

    /// Which wall orientation an edge slot stands for
    pub fn edge_kind(&self, edge: usize) -> Option<EdgeKind> {
        if edge < self.horizontal_edge_count() {
            Some(EdgeKind::Horizontal)
        } else if edge < self.edge_count() {
            Some(EdgeKind::Vertical)
        } else {
            None
        }
    }

    /// 4-connected neighbours of a cell inside the grid
    pub fn neighbours(&self, cell: CellIndex) -> impl Iterator<Item = CellIndex> {
        let (width, height) = (self.width, self.height);

        self.coords(cell)
            .into_iter()
            .flat_map(move |(x, y)| {
                [
                    (y > 0).then(|| cell - width),
                    (x > 0).then(|| cell - 1),
                    (x + 1 < width).then(|| cell + 1),
                    (y + 1 < height).then(|| cell + width),
                ]
            })
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_dimensions() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(MazeError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(usize::MAX, 2).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_edge_counts() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.horizontal_edge_count(), 8);
        assert_eq!(grid.vertical_edge_count(), 9);
        assert_eq!(grid.edge_count(), 17);

        let column = Grid::new(1, 6).unwrap();
        assert_eq!(column.horizontal_edge_count(), 5);
        assert_eq!(column.vertical_edge_count(), 0);
    }

    #[test]
    fn test_edge_index_layout() {
        let grid = Grid::new(4, 3).unwrap();
        // Cell (1, 0) above (1, 1)
        assert_eq!(grid.edge_index(1, 5), Some(1));
        assert_eq!(grid.edge_index(5, 1), Some(1));
        // Cell (2, 1) above (2, 2)
        assert_eq!(grid.edge_index(6, 10), Some(6));
        // Cell (0, 0) left of (1, 0): offset 8 + y 0 + x 0 * 3
        assert_eq!(grid.edge_index(0, 1), Some(8));
        // Cell (2, 1) left of (3, 1): 8 + 1 + 2 * 3
        assert_eq!(grid.edge_index(7, 6), Some(15));
    }

    #[test]
    fn test_edge_index_is_bijective() {
        let grid = Grid::new(5, 4).unwrap();
        let mut seen = vec![false; grid.edge_count()];
        for a in 0..grid.cell_count() {
            for b in grid.neighbours(a).filter(|&b| b > a) {
                let edge = grid.edge_index(a, b).unwrap();
                assert!(!seen[edge], "slot {edge} reused");
                seen[edge] = true;
                assert_eq!(grid.edge_cells(edge), Some((a, b)));
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_non_adjacent_cells_have_no_edge() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.edge_index(0, 0), None);
        assert_eq!(grid.edge_index(0, 5), None); // diagonal
        assert_eq!(grid.edge_index(0, 2), None); // two apart
        // (3, 0) and (0, 1) are consecutive indices but not neighbours
        assert_eq!(grid.edge_index(3, 4), None);
        assert_eq!(grid.edge_index(11, 12), None); // out of range
        assert_eq!(grid.edge_cells(grid.edge_count()), None);
    }

    #[test]
    fn test_neighbours() {
        let grid = Grid::new(3, 3).unwrap();
        let corner: Vec<_> = grid.neighbours(0).collect();
        assert_eq!(corner, vec![1, 3]);
        let centre: Vec<_> = grid.neighbours(4).collect();
        assert_eq!(centre, vec![1, 3, 5, 7]);
        assert_eq!(grid.neighbours(9).count(), 0);
    }
}
