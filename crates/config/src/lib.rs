pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::env;
use std::path::{Path, PathBuf};


pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

/// The per-user documents directory, falling back to `~/Documents` when the
/// platform has no registered one.
pub fn documents_dir() -> Option<PathBuf> {
    dirs::document_dir().or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
}

/// Game directory the game itself creates, e.g. `~/Documents/Plants vs Zombies GW2`.
pub fn default_game_dir() -> Option<PathBuf> {
    documents_dir().map(|documents| documents.join(constants::GAME_DIR_NAME))
}

/// Sub-path of the profile relative to a game directory.
pub fn profile_sub_path() -> PathBuf {
    Path::new(constants::SETTINGS_DIR_NAME).join(constants::PROFILE_FILE_NAME)
}

pub fn profile_path_in(game_dir: &Path) -> PathBuf {
    game_dir.join(profile_sub_path())
}
