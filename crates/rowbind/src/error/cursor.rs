use super::Error;

/// Error raised when the cursor collaborator fails to supply column names at
/// construction time. Non-retryable.
#[derive(Debug)]
pub(super) struct CursorError {
    pub(super) message: String,
}

impl std::error::Error for CursorError {}

impl core::fmt::Display for CursorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cursor error: {}", self.message)
    }
}

impl Error {
    /// Creates a cursor error.
    pub fn cursor(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Cursor(CursorError {
            message: message.into(),
        }))
    }

    /// Returns `true` if this error is a cursor error.
    pub fn is_cursor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Cursor(_))
    }
}
