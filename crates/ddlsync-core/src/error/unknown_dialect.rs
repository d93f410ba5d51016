use super::Error;

/// Error when the configured dialect is not one ddlsync can target.
#[derive(Debug)]
pub(super) struct UnknownDialectError {
    name: Box<str>,
}

impl std::error::Error for UnknownDialectError {}

impl core::fmt::Display for UnknownDialectError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown dialect `{}`; expected one of: mysql, postgres",
            self.name
        )
    }
}

impl Error {
    /// Creates an unknown dialect error.
    ///
    /// Raised while reading configuration, before any statement is issued.
    pub fn unknown_dialect(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownDialect(UnknownDialectError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown dialect error.
    pub fn is_unknown_dialect(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownDialect(_))
    }
}
