use std::fmt;

/// Export-boundary failures. Computed comparison results are plain
/// values owned by the caller, so any of these can be retried by
/// re-running serialization without recomputation.
#[derive(Debug)]
pub enum ExportError {
    /// The serialization capability could not become ready.
    Unavailable(String),
    /// Serializing an already-built workbook model failed.
    Serialize(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "export unavailable: {msg}"),
            Self::Serialize(msg) => write!(f, "workbook serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}
