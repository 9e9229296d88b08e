use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Asks the user for the game directory when the profile is not where the
/// game normally puts it.
pub trait DirectoryPrompt {
    /// `None` means the user declined.
    fn request_directory(&mut self) -> Option<PathBuf>;
}

impl<F> DirectoryPrompt for F
where
    F: FnMut() -> Option<PathBuf>,
{
    fn request_directory(&mut self) -> Option<PathBuf> {
        self()
    }
}

/// A prompt that always declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl DirectoryPrompt for NoPrompt {
    fn request_directory(&mut self) -> Option<PathBuf> {
        None
    }
}

/// Returns `default_path` if it exists. Otherwise asks `prompt` for a game
/// directory and looks for the profile underneath it.
pub fn locate<P>(default_path: &Path, prompt: &mut P) -> Result<PathBuf>
where
    P: DirectoryPrompt + ?Sized,
{
    if default_path.exists() {
        tracing::debug!("Profile found at default location {:?}", default_path);
        return Ok(default_path.to_path_buf());
    }

    tracing::info!("Profile not found at {:?}, asking for the game directory", default_path);

    let Some(dir) = prompt.request_directory() else {
        return Err(Error::NotFound {
            default: default_path.to_path_buf(),
            candidate: default_path.to_path_buf(),
        });
    };

    let candidate = config::profile_path_in(&dir);
    if candidate.exists() {
        tracing::debug!("Profile found under chosen directory {:?}", candidate);
        Ok(candidate)
    } else {
        tracing::warn!("No profile under chosen directory {:?}", dir);
        Err(Error::NotFound {
            default: default_path.to_path_buf(),
            candidate,
        })
    }
}
