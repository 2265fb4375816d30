use super::board::Grid;
use super::types::{Outcome, Position, WinningLine};

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn compute_outcome(grid: &Grid) -> Outcome {
    if let Some(line) = winning_line(grid) {
        return Outcome::Won(line.player);
    }

    if grid.is_full() {
        return Outcome::Draw;
    }

    Outcome::Unresolved
}

pub fn winning_line(grid: &Grid) -> Option<WinningLine> {
    for line in LINES {
        let [start, middle, end] = line.map(|(row, col)| Position::new(row, col));

        let Some(player) = grid.get(start).player() else {
            continue;
        };

        if grid.get(middle) == player.mark() && grid.get(end) == player.mark() {
            return Some(WinningLine::new(player, start, end));
        }
    }

    None
}
