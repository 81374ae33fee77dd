use super::Error;

/// Error raised when a row value cannot be copied back into a destination
/// field: the scratch slot's kind does not match what the binding expects, or
/// the value is out of range for the field's declared width.
///
/// These failures surface as returned errors at the `fetch_next` boundary;
/// they never unwind past it.
#[derive(Debug)]
pub(super) struct MappingError {
    pub(super) message: String,
}

impl std::error::Error for MappingError {}

impl core::fmt::Display for MappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "mapping error: {}", self.message)
    }
}

impl Error {
    /// Creates a mapping error.
    pub fn mapping(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Mapping(MappingError {
            message: message.into(),
        }))
    }

    /// Returns `true` if this error is a mapping error.
    pub fn is_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Mapping(_))
    }
}
