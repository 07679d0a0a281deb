//! Structural checks on a generated maze

use std::collections::VecDeque;

use super::connections::ConnectionSet;
use super::grid::CellIndex;

/// Disjoint sets over cell indices
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Root of `x`, halving the path on the way up
    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Join the sets of `x` and `y`; false if they were already one set
    fn union(&mut self, x: usize, y: usize) -> bool {
        let (x, y) = (self.find(x), self.find(y));
        if x == y {
            return false;
        }
        self.parent[x] = y;
        true
    }
}

/// Whether every cell can be reached from cell 0 through open walls
pub fn is_connected(maze: &ConnectionSet) -> bool {
    let cells = maze.grid().cell_count();
    let mut seen = vec![false; cells];
    let mut queue = VecDeque::from([0]);
    seen[0] = true;
    let mut reached = 1;

    while let Some(cell) = queue.pop_front() {
        for next in maze.open_neighbours(cell) {
            if !seen[next] {
                seen[next] = true;
                reached += 1;
                queue.push_back(next);
            }
        }
    }

    reached == cells
}

/// First open wall (in slot order) whose cells were already connected by
/// earlier open walls, i.e. a wall that closes a loop.
pub fn first_redundant_edge(maze: &ConnectionSet) -> Option<(CellIndex, CellIndex)> {
    let mut sets = DisjointSet::new(maze.grid().cell_count());
    maze.edges()
        .filter(|edge| edge.state.is_open())
        .find(|edge| !sets.union(edge.a, edge.b))
        .map(|edge| (edge.a, edge.b))
}

/// Component id for every cell; cells share an id iff a path of open walls
/// joins them. Ids are the smallest cell index in each component.
pub fn components(maze: &ConnectionSet) -> Vec<CellIndex> {
    let cells = maze.grid().cell_count();
    let mut sets = DisjointSet::new(cells);
    for edge in maze.edges().filter(|edge| edge.state.is_open()) {
        sets.union(edge.a, edge.b);
    }

    let mut smallest = vec![usize::MAX; cells];
    for cell in 0..cells {
        let root = sets.find(cell);
        smallest[root] = smallest[root].min(cell);
    }
    (0..cells).map(|cell| smallest[sets.find(cell)]).collect()
}

/// Connected, loop-free, and exactly `cells - 1` open walls
pub fn is_perfect(maze: &ConnectionSet) -> bool {
    maze.open_edge_count() + 1 == maze.grid().cell_count()
        && is_connected(maze)
        && first_redundant_edge(maze).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{EdgeState, Grid};

    fn open_all(maze: &mut ConnectionSet, pairs: &[(usize, usize)]) {
        for &(a, b) in pairs {
            assert!(maze.set_edge(a, b, EdgeState::Open).is_some());
        }
    }

    #[test]
    fn test_closed_maze_is_disconnected() {
        let maze = ConnectionSet::closed(Grid::new(2, 2).unwrap());
        assert!(!is_connected(&maze));
        assert!(!is_perfect(&maze));
        assert_eq!(components(&maze), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_single_cell_is_perfect() {
        let maze = ConnectionSet::closed(Grid::new(1, 1).unwrap());
        assert!(is_perfect(&maze));
    }

    #[test]
    fn test_detects_loop() {
        let mut maze = ConnectionSet::closed(Grid::new(2, 2).unwrap());
        open_all(&mut maze, &[(0, 2), (1, 3), (0, 1), (2, 3)]);
        assert!(is_connected(&maze));
        // Slots: (0,2), (1,3), (0,1) build a tree; (2,3) closes the loop
        assert_eq!(first_redundant_edge(&maze), Some((2, 3)));
        assert!(!is_perfect(&maze));
    }

    #[test]
    fn test_spanning_tree_is_perfect() {
        let mut maze = ConnectionSet::closed(Grid::new(3, 2).unwrap());
        open_all(&mut maze, &[(0, 1), (1, 2), (0, 3), (3, 4), (4, 5)]);
        assert!(is_perfect(&maze));
        assert!(components(&maze).iter().all(|&c| c == 0));
    }

    #[test]
    fn test_components_split() {
        let mut maze = ConnectionSet::closed(Grid::new(3, 1).unwrap());
        open_all(&mut maze, &[(1, 2)]);
        assert_eq!(components(&maze), vec![0, 1, 1]);
        assert!(!is_connected(&maze));
    }
}
