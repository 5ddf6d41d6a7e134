//! Error types for playback control

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Playback errors
///
/// Every backend-level failure is translated into one of these at the
/// adapter boundary; the controller never sees a raw backend error.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Backend failed to initialize (bad source URL, embed script missing)
    #[error("backend failed to load: {0}")]
    Load(String),

    /// Backend loaded but refused to play (autoplay policy, decode error)
    #[error("backend refused to play: {0}")]
    Play(String),

    /// Backend rejected a seek; not evidence the backend is unusable
    #[error("seek rejected: {0}")]
    Seek(String),

    /// Skip requested on a track with no Fibonacci points
    #[error("no Fibonacci points defined for this track")]
    EmptyPointSet,

    /// Every backend in the fallback chain has failed
    #[error("all playback backends exhausted")]
    ChainExhausted,
}

/// Coarse error classification carried in the playback snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Load,
    Play,
    Seek,
    EmptyPointSet,
    ChainExhausted,
}

impl PlaybackError {
    /// The snapshot-level classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Load(_) => ErrorKind::Load,
            Self::Play(_) => ErrorKind::Play,
            Self::Seek(_) => ErrorKind::Seek,
            Self::EmptyPointSet => ErrorKind::EmptyPointSet,
            Self::ChainExhausted => ErrorKind::ChainExhausted,
        }
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classification() {
        assert_eq!(
            PlaybackError::Load("no script".into()).kind(),
            ErrorKind::Load
        );
        assert_eq!(PlaybackError::ChainExhausted.kind(), ErrorKind::ChainExhausted);
    }

    #[test]
    fn display_messages() {
        let err = PlaybackError::Play("autoplay blocked".to_string());
        assert_eq!(err.to_string(), "backend refused to play: autoplay blocked");
    }
}
