mod config;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use engine::game::SymbolChoice;
use engine::{log, logger};

use config::ClientConfig;
use ui::GameApp;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[arg(long)]
    mark: Option<SymbolChoice>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = ClientConfig::load(&args.config)?;

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let choice = args.mark.unwrap_or(config.player_mark);
    let human = choice.resolve();
    log!("Starting game, human plays {}", human);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(GameApp::new(human)))),
    )?;

    Ok(())
}
