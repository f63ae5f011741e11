use super::Error;

/// Error when a comment directive carries a value that is not understood.
///
/// Recoverable: the option the directive would have produced is omitted.
#[derive(Debug)]
pub(super) struct InvalidDirective {
    subject: Box<str>,
    directive: Box<str>,
    value: Box<str>,
}

impl std::error::Error for InvalidDirective {}

impl core::fmt::Display for InvalidDirective {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid directive: `{}` value `{}` on {} is not recognized",
            self.directive, self.value, self.subject
        )
    }
}

impl Error {
    /// Creates an invalid directive error. `subject` describes where the
    /// directive was found, e.g. "foreign key `fk_book_author`".
    pub fn invalid_directive(
        subject: impl Into<String>,
        directive: impl Into<String>,
        value: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidDirective(InvalidDirective {
            subject: subject.into().into(),
            directive: directive.into().into(),
            value: value.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid directive error.
    pub fn is_invalid_directive(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDirective(_))
    }
}
