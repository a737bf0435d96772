// ---------------------------------------------------------------------------
// LoadError: typed failures when reading a layout document
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while reading a persisted layout.
///
/// Records that merely cannot be resolved (unknown catalog ids, dangling
/// road edges) are skipped with a log line instead.
#[derive(Debug)]
pub enum LoadError {
    /// The document is not valid layout JSON.
    Json(serde_json::Error),
    /// A building carries a rotation other than 0, 45, 90 or 135.
    UnsupportedRotation { building: String, degrees: u16 },
    /// The document is blank or `null`.
    EmptyDocument,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Json(e) => write!(f, "Invalid layout JSON: {e}"),
            LoadError::UnsupportedRotation { building, degrees } => write!(
                f,
                "Building {building} has unsupported rotation {degrees}° (expected 0, 45, 90 or 135)"
            ),
            LoadError::EmptyDocument => write!(f, "Layout document is empty"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}
