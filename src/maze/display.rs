//! Text rendering of a maze
//!
//! ```text
//! +---+---+---+
//! |       |   |
//! +---+   +   +
//! |           |
//! +---+---+---+
//! ```

use std::fmt;

use super::connections::ConnectionSet;

const CORNER: &str = "+";
const WALL_H: &str = "---";
const GAP_H: &str = "   ";
const WALL_V: &str = "|";
const GAP_V: &str = " ";

impl fmt::Display for ConnectionSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let grid = *self.grid();
        let (width, height) = (grid.width(), grid.height());

        write!(f, "{CORNER}")?;
        for _ in 0..width {
            write!(f, "{WALL_H}{CORNER}")?;
        }
        writeln!(f)?;

        for y in 0..height {
            let row = y * width;

            write!(f, "{WALL_V}")?;
            for x in 0..width {
                let cell = row + x;
                let east = if self.edge_is_open(cell, cell + 1) == Some(true) {
                    GAP_V
                } else {
                    WALL_V
                };
                write!(f, "{GAP_H}{east}")?;
            }
            writeln!(f)?;

            write!(f, "{CORNER}")?;
            for x in 0..width {
                let cell = row + x;
                let south = if self.edge_is_open(cell, cell + width) == Some(true) {
                    GAP_H
                } else {
                    WALL_H
                };
                write!(f, "{south}{CORNER}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::maze::{ConnectionSet, EdgeState, Grid};

    #[test]
    fn test_render_closed() {
        let maze = ConnectionSet::closed(Grid::new(2, 1).unwrap());
        assert_eq!(maze.to_string(), "+---+---+\n|   |   |\n+---+---+\n");
    }

    #[test]
    fn test_render_openings() {
        let mut maze = ConnectionSet::closed(Grid::new(2, 2).unwrap());
        maze.set_edge(0, 1, EdgeState::Open);
        maze.set_edge(1, 3, EdgeState::Open);
        maze.set_edge(2, 3, EdgeState::Open);
        let expected = "\
+---+---+
|       |
+---+   +
|       |
+---+---+
";
        assert_eq!(maze.to_string(), expected);
    }
}
