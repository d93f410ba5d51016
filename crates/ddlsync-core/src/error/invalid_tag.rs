use super::Error;

/// Error when a field tag cannot be parsed.
///
/// Tags are validated when a model is described: unknown keys and items
/// without a value are rejected rather than dropped.
#[derive(Debug)]
pub(super) struct InvalidTagError {
    tag: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidTagError {}

impl core::fmt::Display for InvalidTagError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid tag `{}`: {}", self.tag, self.reason)
    }
}

impl Error {
    /// Creates an invalid tag error for `tag`, explaining why with `reason`.
    pub fn invalid_tag(tag: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidTag(InvalidTagError {
            tag: tag.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid tag error.
    pub fn is_invalid_tag(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidTag(_))
    }
}
