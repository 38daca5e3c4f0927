use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    /// Static path does not end with a path separator.
    #[error("The path '{path}' is invalid\n> Exiting installer")]
    InvalidPath { path: String },

    /// Any failure while copying the asset tree. The io error is kept as the source.
    #[error("copying {} to {}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("removing {}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config parsed but holds a value the installer cannot use.
    #[error("invalid config: {reason}")]
    Config { reason: String },
}

impl InstallError {
    pub fn copy(from: impl Into<PathBuf>, to: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Copy {
            from: from.into(),
            to: to.into(),
            source,
        }
    }
}
