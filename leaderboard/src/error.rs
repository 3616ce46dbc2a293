use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure reading or writing the persisted leaderboard
#[derive(Debug)]
pub enum LeaderboardError {
    /// The store exists but could not be read or written
    Io { path: PathBuf, source: io::Error },
    /// The stored bytes are not a valid leaderboard
    Parse(serde_json::Error),
    /// Entries could not be serialized
    Encode(serde_json::Error),
    /// The store refuses writes
    ReadOnly,
}

impl fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderboardError::Io { path, source } => {
                write!(f, "leaderboard store {}: {source}", path.display())
            }
            LeaderboardError::Parse(err) => write!(f, "malformed leaderboard: {err}"),
            LeaderboardError::Encode(err) => write!(f, "failed to encode leaderboard: {err}"),
            LeaderboardError::ReadOnly => write!(f, "leaderboard store is read-only"),
        }
    }
}

impl std::error::Error for LeaderboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeaderboardError::Io { source, .. } => Some(source),
            LeaderboardError::Parse(err) | LeaderboardError::Encode(err) => Some(err),
            LeaderboardError::ReadOnly => None,
        }
    }
}

/// Convenience alias: a `Result` using `LeaderboardError` as the error type.
pub type LeaderboardResult<T> = Result<T, LeaderboardError>;
