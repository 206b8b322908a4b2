use thiserror::Error;

/// Runtime failures observable while driving an AI subprocess or a match.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("failed to spawn AI process: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("AI process crashed: {0}")]
    AiCrashed(String),

    #[error("no pyratready within the handshake timeout")]
    HandshakeTimeout,

    #[error("I/O error talking to AI process: {0}")]
    Io(#[from] std::io::Error),

    #[error("AI process stdin/stdout pipe was not captured")]
    PipeUnavailable,
}
