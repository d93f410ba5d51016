use super::Error;

/// The database refused `ADD COLUMN` because the column already exists.
///
/// Drivers classify this from the server's error code (MySQL 1060, Postgres
/// SQLSTATE 42701).
#[derive(Debug)]
pub(super) struct DuplicateColumnError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DuplicateColumnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DuplicateColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("column already exists: ")?;
        core::fmt::Display::fmt(&self.inner, f)
    }
}

impl Error {
    pub fn duplicate_column(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::DuplicateColumn(DuplicateColumnError {
            inner: Box::new(err),
        }))
    }

    pub fn is_duplicate_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateColumn(_))
    }
}
