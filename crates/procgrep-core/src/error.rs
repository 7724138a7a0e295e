use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The target process exited, never existed, or its introspection files
    /// cannot be opened with the caller's privileges.
    #[error("Process {pid} unavailable: {source}")]
    ProcessUnavailable {
        pid: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("Process not found: {0}")]
    ProcessNotFound(String),

    #[error("Malformed mapping line: {line:?}")]
    MalformedMapping { line: String },

    /// A read request that could not be satisfied in full. Reads are
    /// all-or-nothing; no truncated buffer accompanies this error.
    #[error("Cannot read {count} bytes at position {position:#x}: {message}")]
    UnreadableRange {
        position: i64,
        count: u64,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
