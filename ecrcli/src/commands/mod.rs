pub mod config;
pub mod image;
pub mod login;
pub mod repo;
pub mod version;

use libecr::EcrError;
use thiserror::Error;

/// Failure of a command handler
#[derive(Debug, Error)]
pub enum CommandError {
    /// The registry operation failed
    #[error(transparent)]
    Registry(#[from] EcrError),

    /// The arguments were rejected before any remote call
    #[error("{0}")]
    InvalidArgument(String),

    /// The result could not be rendered
    #[error("{0}")]
    Output(String),

    /// Reading or writing the config file failed
    #[error("{0}")]
    Config(String),
}

pub type CommandResult<T = ()> = Result<T, CommandError>;

#[cfg(test)]
pub(crate) mod test_support;
