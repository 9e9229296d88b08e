use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither the default location nor the user supplied directory holds a profile.
    #[error("profile not found at {} (last candidate: {})", .default.display(), .candidate.display())]
    NotFound { default: PathBuf, candidate: PathBuf },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid value for {key} on line {line} of {}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        key: &'static str,
        reason: String,
    },

    /// The file carries `key` but the record has no value to write for it.
    #[error("no value given for {key}, which is present in the profile")]
    MissingValue { key: &'static str },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
