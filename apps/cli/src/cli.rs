use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this profile file instead of looking for one.
    #[arg(long, global = true, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Game directory containing `settings/PROF_SAVE_profile`.
    #[arg(long, global = true, value_name = "DIR")]
    pub game_dir: Option<PathBuf>,

    /// Never ask for the game directory when the profile is missing.
    #[arg(long, global = true)]
    pub no_prompt: bool,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the path of the profile that would be edited
    Locate,
    /// Print the current display settings
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change one or more display settings
    Set(SetArgs),
    /// Edit the display settings interactively
    Edit,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SetArgs {
    /// Field of view in degrees
    #[arg(long, value_name = "DEGREES")]
    pub fov: Option<f64>,

    /// Refresh rate used in fullscreen mode
    #[arg(long, value_name = "HZ")]
    pub fullscreen_refresh_rate: Option<f64>,

    /// Refresh rate used in windowed mode
    #[arg(long, value_name = "HZ")]
    pub windowed_refresh_rate: Option<f64>,
}
