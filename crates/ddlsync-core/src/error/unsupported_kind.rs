use super::Error;

/// Error when a scalar kind has no SQL type mapping.
#[derive(Debug)]
pub(super) struct UnsupportedKindError {
    kind: Box<str>,
}

impl std::error::Error for UnsupportedKindError {}

impl core::fmt::Display for UnsupportedKindError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no SQL type mapping for kind `{}`", self.kind)
    }
}

impl Error {
    /// Creates an unsupported kind error.
    ///
    /// An unmapped kind never reaches DDL as an empty type; the model is
    /// rejected instead.
    pub fn unsupported_kind(kind: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedKind(UnsupportedKindError {
            kind: kind.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported kind error.
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedKind(_))
    }
}
