use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use config::{AppStrategy, constants, create_strategy, resolve_dir};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Game directory replacing `<documents>/Plants vs Zombies GW2`
    pub game_dir: Option<PathBuf>,
    /// Profile file to edit, skipping the lookup entirely
    pub profile: Option<PathBuf>,
    /// Ask for the game directory when the profile is missing
    pub prompt: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game_dir: None,
            profile: None,
            prompt: true,
        }
    }
}

const EXAMPLE_CONFIG: &str = r#"# bettergw2 configuration
#
# Created on first run. Every key is optional.

# Game directory, used when the game does not live under your documents folder
# game-dir = "D:/Documents/Plants vs Zombies GW2"

# Profile to edit directly
# profile = "D:/Documents/Plants vs Zombies GW2/settings/PROF_SAVE_profile"

# Ask for the game directory when the profile cannot be found
# prompt = true
"#;

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    pub fn load() -> Result<Config> {
        let strategy = create_strategy()?;
        let config_path = resolve_dir("CONFIG_DIRECTORY", &strategy, |s| Some(s.config_dir()))
            .join(constants::CLI_CONFIG_FILE_NAME);

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => {
                tracing::debug!("Loading configuration from {:?}", config_path);
                Self::load_str(&user_config_str)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Err(e) = Self::create_example_config(&config_path) {
                    tracing::warn!("Cannot create example configuration {:?}: {}", config_path, e);
                }
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, EXAMPLE_CONFIG)?;

        tracing::info!("Created configuration file {:?}", config_path);
        Ok(())
    }
}
