pub const TOP_LEVEL_DOMAIN: &str = "io.github";
pub const AUTHOR: &str = "bettergw2";
pub const APP_NAME: &str = "bettergw2";

pub const CLI_CONFIG_FILE_NAME: &str = "bettergw2.toml";

/// Folder the game creates under the user's documents directory.
pub const GAME_DIR_NAME: &str = "Plants vs Zombies GW2";
pub const SETTINGS_DIR_NAME: &str = "settings";
pub const PROFILE_FILE_NAME: &str = "PROF_SAVE_profile";
