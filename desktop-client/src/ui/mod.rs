mod game_view;

use eframe::egui;
use engine::game::{GameState, Player};
use engine::log;

use game_view::GameView;

pub struct GameApp {
    state: GameState,
    view: GameView,
}

impl GameApp {
    pub fn new(human: Player) -> Self {
        let mut state = GameState::new(human);
        take_opening_turn_if_automated(&mut state);

        Self {
            state,
            view: GameView::new(),
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.render(ui, &mut self.state);
        });
    }
}

pub(crate) fn take_opening_turn_if_automated(state: &mut GameState) {
    if state.turn() == state.automated()
        && let Some(position) = state.take_automated_turn()
    {
        log!(
            "Automated {} opened at ({}, {})",
            state.automated(),
            position.row,
            position.col
        );
    }
}
