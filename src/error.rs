use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapctlError {
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Restore target {requested} does not match snapshot {expected}; refusing to restore")]
    SnapshotMismatch { requested: String, expected: String },

    #[error("Snapshot not found: {snapshot} in repository {repository}")]
    SnapshotNotFound { repository: String, snapshot: String },

    #[error("Restore aborted by operator")]
    Aborted,

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SnapctlError {
    /// Process exit code for this failure. Each operator-facing refusal
    /// gets its own code so wrapper scripts can tell them apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            SnapctlError::Http(_) | SnapctlError::Io(_) => 1,
            SnapctlError::MissingArgument(_) => 2,
            SnapctlError::SnapshotMismatch { .. } => 3,
            SnapctlError::SnapshotNotFound { .. } => 4,
            SnapctlError::Aborted => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, SnapctlError>;
