use std::fs;
use std::path::Path;

use engine::game::SymbolChoice;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_client_config.yaml";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub player_mark: SymbolChoice,
    pub window_width: f32,
    pub window_height: f32,
    #[serde(default)]
    pub use_log_prefix: bool,
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;
        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.window_width.is_finite() || self.window_width < 300.0 {
            return Err("window_width must be at least 300".to_string());
        }
        if !self.window_height.is_finite() || self.window_height < 300.0 {
            return Err("window_height must be at least 300".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            player_mark: SymbolChoice::X,
            window_width: 1280.0,
            window_height: 720.0,
            use_log_prefix: false,
        }
    }
}
