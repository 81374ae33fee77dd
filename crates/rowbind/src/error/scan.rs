use super::Error;

/// Error raised when the cursor collaborator fails to read the current row
/// into the scratch slots. The cursor may be left at an indeterminate
/// position; callers should treat the mapper as unusable afterwards.
#[derive(Debug)]
pub(super) struct ScanError {
    pub(super) message: String,
}

impl std::error::Error for ScanError {}

impl core::fmt::Display for ScanError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "scan error: {}", self.message)
    }
}

impl Error {
    /// Creates a scan error.
    pub fn scan(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Scan(ScanError {
            message: message.into(),
        }))
    }

    /// Returns `true` if this error is a scan error.
    pub fn is_scan(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Scan(_))
    }
}
