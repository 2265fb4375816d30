use eframe::egui;
use egui::{Color32, Stroke};
use engine::game::{Cell, GRID_SIZE, GameState, Outcome, Position};
use engine::log;

use super::take_opening_turn_if_automated;

pub struct GameView {
    hovered_cell: Option<Position>,
}

impl GameView {
    const BOARD_PADDING: f32 = 40.0;
    const INFO_PANEL_WIDTH: f32 = 220.0;
    const MIN_CELL_SIZE: f32 = 40.0;
    const MAX_CELL_SIZE: f32 = 160.0;
    const GRID_LINE_WIDTH: f32 = 2.0;
    const MARK_STROKE_WIDTH: f32 = 4.0;

    pub fn new() -> Self {
        Self { hovered_cell: None }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, state: &mut GameState) {
        let cell_size = Self::cell_size(ui.available_width(), ui.available_height());
        let board_side = cell_size * GRID_SIZE as f32;

        ui.horizontal(|ui| {
            ui.allocate_ui(
                egui::vec2(board_side + Self::BOARD_PADDING * 2.0, ui.available_height()),
                |ui| {
                    self.render_board(ui, state, cell_size);
                },
            );

            ui.separator();

            ui.vertical(|ui| {
                self.render_info_panel(ui, state);
            });
        });
    }

    fn cell_size(available_width: f32, available_height: f32) -> f32 {
        let board_width = available_width - Self::INFO_PANEL_WIDTH - Self::BOARD_PADDING * 2.0;
        let board_height = available_height - Self::BOARD_PADDING * 2.0;

        let cell_size = (board_width / GRID_SIZE as f32).min(board_height / GRID_SIZE as f32);

        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn render_board(&mut self, ui: &mut egui::Ui, state: &mut GameState, cell_size: f32) {
        let board_side = cell_size * GRID_SIZE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_side, board_side), egui::Sense::click());

        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, Color32::from_rgb(240, 240, 240));

        for i in 0..=GRID_SIZE {
            let x = rect.left() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                Stroke::new(Self::GRID_LINE_WIDTH, Color32::BLACK),
            );

            let y = rect.top() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                Stroke::new(Self::GRID_LINE_WIDTH, Color32::BLACK),
            );
        }

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let cell_rect = Self::cell_rect(rect, cell_size, row, col);
                match state.cell(Position::new(row, col)) {
                    Cell::X => Self::draw_x(painter, cell_rect),
                    Cell::O => Self::draw_o(painter, cell_rect),
                    Cell::Empty => {}
                }
            }
        }

        if let Some(line) = state.winning_line() {
            painter.line_segment(
                [
                    Self::cell_center(rect, cell_size, line.start),
                    Self::cell_center(rect, cell_size, line.end),
                ],
                Stroke::new(6.0, Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
            );
        }

        if !state.is_finished() && state.turn() == state.human() {
            self.track_hover(painter, rect, cell_size, state, &response);

            if response.clicked()
                && let Some(position) = self.hovered_cell
            {
                self.play_human_move(state, position);
            }
        } else {
            self.hovered_cell = None;
        }
    }

    fn track_hover(
        &mut self,
        painter: &egui::Painter,
        rect: egui::Rect,
        cell_size: f32,
        state: &GameState,
        response: &egui::Response,
    ) {
        self.hovered_cell = None;

        let Some(hover_pos) = response.hover_pos() else {
            return;
        };

        let col = ((hover_pos.x - rect.left()) / cell_size) as usize;
        let row = ((hover_pos.y - rect.top()) / cell_size) as usize;
        let position = Position::new(row, col);

        if position.in_bounds() && state.cell(position) == Cell::Empty {
            painter.rect_filled(
                Self::cell_rect(rect, cell_size, row, col),
                0.0,
                Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
            self.hovered_cell = Some(position);
        }
    }

    fn play_human_move(&mut self, state: &mut GameState, position: Position) {
        if state.apply_move(position).is_err() {
            return;
        }

        log!(
            "Human {} played at ({}, {})",
            state.human(),
            position.row,
            position.col
        );
        self.hovered_cell = None;

        if !state.is_finished()
            && let Some(reply) = state.take_automated_turn()
        {
            log!(
                "Automated {} replied at ({}, {})",
                state.automated(),
                reply.row,
                reply.col
            );
        }

        match state.outcome() {
            Outcome::Won(player) => log!("Game over, {} wins", player),
            Outcome::Draw => log!("Game over, draw"),
            Outcome::Unresolved => {}
        }
    }

    fn cell_rect(board: egui::Rect, cell_size: f32, row: usize, col: usize) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                board.left() + col as f32 * cell_size,
                board.top() + row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn cell_center(board: egui::Rect, cell_size: f32, position: Position) -> egui::Pos2 {
        egui::pos2(
            board.left() + (position.col as f32 + 0.5) * cell_size,
            board.top() + (position.row as f32 + 0.5) * cell_size,
        )
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = Stroke::new(Self::MARK_STROKE_WIDTH, Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = rect.width() / 2.0 - padding;
        let stroke = Stroke::new(Self::MARK_STROKE_WIDTH, Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }

    fn render_info_panel(&self, ui: &mut egui::Ui, state: &mut GameState) {
        ui.heading("Tic-Tac-Toe");
        ui.separator();

        ui.label(format!("You: {}", state.human()));
        ui.label(format!("Opponent: {}", state.automated()));
        ui.separator();

        match state.outcome() {
            Outcome::Unresolved => {
                if state.turn() == state.human() {
                    ui.colored_label(Color32::GREEN, format!("Your turn ({})", state.turn()));
                } else {
                    ui.label(format!("Opponent's turn ({})", state.turn()));
                }
            }
            Outcome::Draw => {
                ui.heading("Game Over");
                ui.label("It's a draw!");
            }
            Outcome::Won(player) => {
                ui.heading("Game Over");
                if player == state.human() {
                    ui.colored_label(Color32::GREEN, format!("{} wins. You won!", player));
                } else {
                    ui.colored_label(Color32::RED, format!("{} wins. You lost!", player));
                }
            }
        }

        if state.is_finished() {
            ui.add_space(10.0);
            if ui.button("Play Again").clicked() {
                state.reset();
                log!("Rematch started");
                take_opening_turn_if_automated(state);
            }
        }
    }
}
