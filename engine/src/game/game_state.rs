use std::fmt;

use super::board::{Board, Grid};
use super::bot_controller::search;
use super::types::{Cell, Outcome, Player, Position, WinningLine};
use super::win_detector::winning_line;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    GameFinished,
    OutOfBounds,
    CellOccupied,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameFinished => write!(f, "the game is already over"),
            MoveError::OutOfBounds => write!(f, "position is outside the grid"),
            MoveError::CellOccupied => write!(f, "cell is already marked"),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    human: Player,
}

impl GameState {
    pub fn new(human: Player) -> Self {
        Self {
            board: Board::new(),
            human,
        }
    }

    #[cfg(test)]
    pub fn with_board(board: Board, human: Player) -> Self {
        Self { board, human }
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn automated(&self) -> Player {
        self.human.opponent()
    }

    pub fn grid(&self) -> Grid {
        self.board.grid()
    }

    pub fn cell(&self, position: Position) -> Cell {
        self.board.cell(position)
    }

    pub fn turn(&self) -> Player {
        self.board.turn()
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn is_finished(&self) -> bool {
        self.board.outcome().is_terminal()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board.grid())
    }

    pub fn apply_move(&mut self, position: Position) -> Result<(), MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameFinished);
        }

        if !position.in_bounds() {
            return Err(MoveError::OutOfBounds);
        }

        if self.board.cell(position) != Cell::Empty {
            return Err(MoveError::CellOccupied);
        }

        let mark = self.board.turn().mark();
        self.board.set_cell(position, mark);
        self.board.end_turn();

        Ok(())
    }

    pub fn take_automated_turn(&mut self) -> Option<Position> {
        if self.is_finished() {
            return None;
        }

        let automated = self.automated();
        let (_score, position) = search(self.board.grid_mut(), automated);
        self.apply_move(position)
            .expect("searched move lands on an open cell of a live board");

        Some(position)
    }

    pub fn reset(&mut self) {
        self.board.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark_counts(state: &GameState) -> (usize, usize) {
        let mut x_count = 0;
        let mut o_count = 0;
        for row in 0..3 {
            for col in 0..3 {
                match state.cell(Position::new(row, col)) {
                    Cell::X => x_count += 1,
                    Cell::O => o_count += 1,
                    Cell::Empty => {}
                }
            }
        }
        (x_count, o_count)
    }

    fn near_win_state() -> GameState {
        let grid = Grid::from_rows([
            [Cell::X, Cell::X, Cell::Empty],
            [Cell::O, Cell::X, Cell::Empty],
            [Cell::Empty, Cell::Empty, Cell::O],
        ]);
        GameState::with_board(Board::with_grid(grid, Player::X), Player::X)
    }

    #[test]
    fn test_new_game_starts_empty_with_x_to_move() {
        let state = GameState::new(Player::X);

        assert_eq!(state.turn(), Player::X);
        assert_eq!(state.outcome(), Outcome::Unresolved);
        assert!(!state.is_finished());
        assert_eq!(state.grid(), Grid::empty());
    }

    #[test]
    fn test_symbol_binding_pairs_human_and_automated() {
        let state = GameState::new(Player::O);

        assert_eq!(state.human(), Player::O);
        assert_eq!(state.automated(), Player::X);
    }

    #[test]
    fn test_apply_move_places_current_mark_and_flips_turn() {
        let mut state = GameState::new(Player::X);

        state.apply_move(Position::new(1, 1)).unwrap();

        assert_eq!(state.cell(Position::new(1, 1)), Cell::X);
        assert_eq!(state.turn(), Player::O);

        state.apply_move(Position::new(0, 0)).unwrap();

        assert_eq!(state.cell(Position::new(0, 0)), Cell::O);
        assert_eq!(state.turn(), Player::X);
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let mut state = GameState::new(Player::X);
        state.apply_move(Position::new(1, 1)).unwrap();

        let result = state.apply_move(Position::new(1, 1));

        assert_eq!(result, Err(MoveError::CellOccupied));
        assert_eq!(state.cell(Position::new(1, 1)), Cell::X);
        assert_eq!(state.turn(), Player::O);
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds_position() {
        let mut state = GameState::new(Player::X);

        assert_eq!(
            state.apply_move(Position::new(3, 0)),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(
            state.apply_move(Position::new(0, 7)),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(state.turn(), Player::X);
    }

    #[test]
    fn test_completing_a_row_finishes_the_game() {
        let mut state = near_win_state();

        state.apply_move(Position::new(0, 2)).unwrap();

        assert_eq!(state.outcome(), Outcome::Won(Player::X));
        assert!(state.is_finished());
    }

    #[test]
    fn test_apply_move_rejects_moves_after_the_game_ended() {
        let mut state = near_win_state();
        state.apply_move(Position::new(0, 2)).unwrap();

        let grid_before = state.grid();
        let result = state.apply_move(Position::new(2, 0));

        assert_eq!(result, Err(MoveError::GameFinished));
        assert_eq!(state.grid(), grid_before);
        assert_eq!(state.outcome(), Outcome::Won(Player::X));
    }

    #[test]
    fn test_take_automated_turn_is_a_no_op_after_the_game_ended() {
        let mut state = near_win_state();
        state.apply_move(Position::new(0, 2)).unwrap();

        let grid_before = state.grid();

        assert_eq!(state.take_automated_turn(), None);
        assert_eq!(state.grid(), grid_before);
    }

    #[test]
    fn test_take_automated_turn_plays_the_automated_mark() {
        let mut state = GameState::new(Player::X);
        state.apply_move(Position::new(1, 1)).unwrap();

        let position = state.take_automated_turn().unwrap();

        assert_eq!(state.cell(position), Cell::O);
        assert_eq!(state.turn(), Player::X);
        assert_eq!(state.outcome(), Outcome::Unresolved);
    }

    #[test]
    fn test_automated_player_can_open_the_game() {
        let mut state = GameState::new(Player::O);

        let position = state.take_automated_turn().unwrap();

        assert_eq!(position, Position::new(0, 0));
        assert_eq!(state.cell(position), Cell::X);
        assert_eq!(state.turn(), Player::O);
    }

    #[test]
    fn test_automated_reply_to_center_opening_takes_a_corner() {
        let mut state = GameState::new(Player::X);
        state.apply_move(Position::new(1, 1)).unwrap();

        let position = state.take_automated_turn().unwrap();

        assert_eq!(position, Position::new(0, 0));
        assert_eq!(state.outcome(), Outcome::Unresolved);
    }

    #[test]
    fn test_take_automated_turn_blocks_a_threat() {
        let grid = Grid::from_rows([
            [Cell::X, Cell::X, Cell::Empty],
            [Cell::Empty, Cell::O, Cell::Empty],
            [Cell::Empty, Cell::Empty, Cell::Empty],
        ]);
        let mut state = GameState::with_board(Board::with_grid(grid, Player::O), Player::X);

        let position = state.take_automated_turn().unwrap();

        assert_eq!(position, Position::new(0, 2));
        assert_eq!(state.cell(position), Cell::O);
        assert_eq!(state.turn(), Player::X);
        assert_eq!(state.outcome(), Outcome::Unresolved);
    }

    #[test]
    fn test_full_grid_without_line_is_a_draw() {
        let mut state = GameState::new(Player::X);
        let moves = [
            (1, 1),
            (0, 0),
            (2, 2),
            (0, 2),
            (0, 1),
            (2, 1),
            (1, 0),
            (1, 2),
            (2, 0),
        ];

        for (row, col) in moves {
            state.apply_move(Position::new(row, col)).unwrap();
        }

        assert_eq!(state.outcome(), Outcome::Draw);
        assert!(state.is_finished());
    }

    #[test]
    fn test_reset_restores_a_fresh_game() {
        let mut state = near_win_state();
        state.apply_move(Position::new(0, 2)).unwrap();
        assert!(state.is_finished());

        state.reset();

        assert_eq!(state.turn(), Player::X);
        assert_eq!(state.outcome(), Outcome::Unresolved);
        assert_eq!(state.grid(), Grid::empty());
        assert_eq!(state.human(), Player::X);
    }

    #[test]
    fn test_mark_counts_stay_balanced_through_play() {
        let mut state = GameState::new(Player::O);

        while !state.is_finished() {
            let (x_count, o_count) = mark_counts(&state);
            assert!(x_count == o_count || x_count == o_count + 1);

            if state.turn() == state.automated() {
                state.take_automated_turn();
            } else {
                let open = state.grid().empty_positions();
                state.apply_move(open[0]).unwrap();
            }
        }

        let (x_count, o_count) = mark_counts(&state);
        assert!(x_count == o_count || x_count == o_count + 1);
    }

    #[test]
    fn test_winning_line_is_reported_after_a_win() {
        let mut state = near_win_state();
        assert!(state.winning_line().is_none());

        state.apply_move(Position::new(0, 2)).unwrap();

        let line = state.winning_line().unwrap();
        assert_eq!(line.player, Player::X);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_move_error_messages() {
        assert_eq!(
            MoveError::GameFinished.to_string(),
            "the game is already over"
        );
        assert_eq!(
            MoveError::OutOfBounds.to_string(),
            "position is outside the grid"
        );
        assert_eq!(MoveError::CellOccupied.to_string(), "cell is already marked");
    }
}
