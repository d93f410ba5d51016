use super::Error;

/// Error when a model descriptor cannot become a table descriptor.
#[derive(Debug)]
pub(super) struct InvalidModelError {
    model: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidModelError {}

impl core::fmt::Display for InvalidModelError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid model `{}`: {}", self.model, self.message)
    }
}

impl Error {
    pub fn invalid_model(model: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidModel(InvalidModelError {
            model: model.into().into(),
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_model(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidModel(_))
    }
}
