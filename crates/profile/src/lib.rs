//! Locate, read and patch the display settings stored in a
//! *Plants vs Zombies GW2* profile (`PROF_SAVE_profile`).

pub mod error;
pub mod locate;
pub mod record;
pub mod setting;
pub mod store;

pub use error::{Error, Result};
pub use locate::{DirectoryPrompt, NoPrompt, locate};
pub use record::SettingsRecord;
pub use setting::{SETTING_DEFINITIONS, Setting, SettingDef};
pub use store::{load, save};
