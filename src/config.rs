use std::path::Path;

use crate::error::ConfigError;

/// Rules-facing settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Typed instead of a column to concede; matched case-insensitively.
    pub forfeit_token: String,
    pub player_one_name: String,
    pub player_two_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            forfeit_token: crate::input::FORFEIT_TOKEN.to_string(),
            player_one_name: "Player 1".to_string(),
            player_two_name: "Player 2".to_string(),
        }
    }
}

/// How the console front-end draws the board.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub player_one_symbol: String,
    pub player_two_symbol: String,
    pub empty_symbol: String,
    pub show_column_numbers: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            player_one_symbol: "X".to_string(),
            player_two_symbol: "O".to_string(),
            empty_symbol: ".".to_string(),
            show_column_numbers: true,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    /// The file was missing and built-in defaults were used.
    Defaults,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. The returned [`ConfigSource`] says which one was used.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let token = self.game.forfeit_token.trim();
        if token.is_empty() {
            return Err(ConfigError::Validation(
                "game.forfeit_token must not be empty".into(),
            ));
        }
        if token != self.game.forfeit_token {
            return Err(ConfigError::Validation(
                "game.forfeit_token must not contain surrounding whitespace".into(),
            ));
        }
        if token.parse::<i64>().is_ok() {
            return Err(ConfigError::Validation(
                "game.forfeit_token must not be a number".into(),
            ));
        }
        if self.game.player_one_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.player_one_name must not be empty".into(),
            ));
        }
        if self.game.player_two_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.player_two_name must not be empty".into(),
            ));
        }

        let symbols = [
            ("display.player_one_symbol", &self.display.player_one_symbol),
            ("display.player_two_symbol", &self.display.player_two_symbol),
            ("display.empty_symbol", &self.display.empty_symbol),
        ];
        for (name, symbol) in symbols {
            let mut chars = symbol.chars();
            let single = matches!((chars.next(), chars.next()), (Some(c), None) if !c.is_whitespace());
            if !single {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a single visible character"
                )));
            }
        }
        if self.display.player_one_symbol == self.display.player_two_symbol
            || self.display.player_one_symbol == self.display.empty_symbol
            || self.display.player_two_symbol == self.display.empty_symbol
        {
            return Err(ConfigError::Validation(
                "display symbols must all be distinct".into(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Display name configured for a player.
    pub fn player_name(&self, player: crate::game::Player) -> &str {
        match player {
            crate::game::Player::One => &self.game.player_one_name,
            crate::game::Player::Two => &self.game.player_two_name,
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
