use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] mono_operations::OperationError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("no command given to run")]
    MissingCommand,
}

pub type Result<T> = std::result::Result<T, CliError>;
