use runtime::RuntimeError;

/// Failures that end a console session.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
