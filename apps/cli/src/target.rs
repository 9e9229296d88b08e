use crate::cli::Cli;
use crate::config::Config;
use crate::error::{OptionExt, Result, WrapErr};
use crate::prompt::TerminalPrompt;
use profile::{DirectoryPrompt, NoPrompt};
use std::io;
use std::path::PathBuf;

/// Where the profile to edit comes from, after merging command line and
/// configuration file.
#[derive(Debug, Clone)]
pub struct Target {
    pub profile: Option<PathBuf>,
    pub game_dir: Option<PathBuf>,
    pub prompt: bool,
}

impl Target {
    pub fn new(cfg: &Config, cli: &Cli) -> Self {
        Self {
            profile: cli.profile.clone().or_else(|| cfg.profile.clone()),
            game_dir: cli.game_dir.clone().or_else(|| cfg.game_dir.clone()),
            prompt: cfg.prompt && !cli.no_prompt,
        }
    }

    pub fn resolve(&self) -> Result<PathBuf> {
        let path = if self.prompt {
            let mut prompt = TerminalPrompt::new(io::stdin().lock(), io::stderr());
            self.resolve_with(&mut prompt)
        } else {
            self.resolve_with(&mut NoPrompt)
        }
        .wrap_err("Locate profile error")?;

        tracing::info!("Using profile {:?}", path);
        Ok(path)
    }

    fn resolve_with<P>(&self, prompt: &mut P) -> Result<PathBuf>
    where
        P: DirectoryPrompt + ?Sized,
    {
        if let Some(profile) = &self.profile {
            return Ok(profile::locate(profile, &mut NoPrompt)?);
        }

        let game_dir = self
            .game_dir
            .clone()
            .or_else(config::default_game_dir)
            .ok_or_eyre("Cannot find the documents directory, pass --game-dir")?;

        Ok(profile::locate(&config::profile_path_in(&game_dir), prompt)?)
    }
}
