use super::board::Grid;
use super::types::{Cell, GRID_SIZE, Outcome, Player, Position};
use super::win_detector::compute_outcome;

// Exploration mutates the grid in place; every tentative placement is undone
// before returning, so the caller's grid is unchanged after the call.
pub fn search(grid: &mut Grid, player: Player) -> (i32, Position) {
    assert_eq!(
        compute_outcome(grid),
        Outcome::Unresolved,
        "search invoked on a finished board"
    );

    let mut best_score = i32::MIN;
    let mut best_move = None;

    for position in grid.empty_positions() {
        grid.set(position, player.mark());
        let score = -minimax(grid, player.opponent());
        grid.set(position, Cell::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    let position = best_move.expect("an unfinished grid has at least one empty cell");
    (best_score, position)
}

fn minimax(grid: &mut Grid, player: Player) -> i32 {
    match compute_outcome(grid) {
        Outcome::Won(winner) => {
            if winner == player {
                1
            } else {
                -1
            }
        }
        Outcome::Draw => 0,
        Outcome::Unresolved => {
            let mut best_score = i32::MIN;

            for row in 0..GRID_SIZE {
                for col in 0..GRID_SIZE {
                    let position = Position::new(row, col);
                    if grid.get(position) != Cell::Empty {
                        continue;
                    }

                    grid.set(position, player.mark());
                    let score = -minimax(grid, player.opponent());
                    grid.set(position, Cell::Empty);

                    if score > best_score {
                        best_score = score;
                    }
                }
            }

            best_score
        }
    }
}
