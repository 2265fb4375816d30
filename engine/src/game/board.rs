use super::types::{Cell, GRID_SIZE, Outcome, Player, Position};
use super::win_detector::compute_outcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.row][position.col]
    }

    pub fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.row][position.col] = cell;
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Empty {
                    positions.push(Position::new(row, col));
                }
            }
        }
        positions
    }

    #[cfg(test)]
    pub fn from_rows(rows: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells: rows }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    turn: Player,
    outcome: Outcome,
}

impl Board {
    pub fn new() -> Self {
        Self {
            grid: Grid::empty(),
            turn: Player::X,
            outcome: Outcome::Unresolved,
        }
    }

    #[cfg(test)]
    pub fn with_grid(grid: Grid, turn: Player) -> Self {
        Self {
            grid,
            turn,
            outcome: compute_outcome(&grid),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn cell(&self, position: Position) -> Cell {
        self.grid.get(position)
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub(crate) fn set_cell(&mut self, position: Position, cell: Cell) {
        self.grid.set(position, cell);
        if self.outcome == Outcome::Unresolved {
            self.outcome = compute_outcome(&self.grid);
        }
    }

    pub(crate) fn end_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    pub fn reset(&mut self) {
        self.grid = Grid::empty();
        self.turn = Player::X;
        self.outcome = Outcome::Unresolved;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
