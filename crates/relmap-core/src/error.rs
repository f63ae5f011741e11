mod adhoc;
mod invalid_directive;
mod invalid_schema;
mod unresolved_reference;

use adhoc::AdhocError;
use invalid_directive::InvalidDirective;
use invalid_schema::InvalidSchema;
use std::sync::Arc;
use unresolved_reference::UnresolvedReference;

/// An error raised while building or resolving a schema.
///
/// Errors fall in two classes. Fatal errors (invalid schema, unresolved
/// references) stop processing of the affected table. Recoverable errors
/// (unrecognized directives) are reported and processing continues with the
/// offending option omitted; see [`Error::is_recoverable`].
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    InvalidSchema(InvalidSchema),
    UnresolvedReference(UnresolvedReference),
    InvalidDirective(InvalidDirective),
}

impl Error {
    /// Creates an error from a formatted message.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }

    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        debug_assert!(
            consequent.inner.cause.is_none(),
            "consequent error must not already have a cause"
        );

        let kind = match Arc::try_unwrap(consequent.inner) {
            Ok(inner) => inner.kind,
            Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
        };

        Error {
            inner: Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            }),
        }
    }

    /// Returns `true` when processing can continue past this error.
    ///
    /// Only the outermost error in a context chain is considered.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidDirective(_))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            UnresolvedReference(err) => core::fmt::Display::fmt(err, f),
            InvalidDirective(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        assert_eq!(
            core::mem::size_of::<usize>(),
            core::mem::size_of::<Error>()
        );
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("table {} is broken", "book"));
        assert_eq!(err.to_string(), "table book is broken");
    }

    #[test]
    fn context_chain_display() {
        let err = Error::unresolved_reference("book", "author_id", Some("writer.id"))
            .context(Error::from_args(format_args!("failed to build entity `Book`")));

        assert_eq!(
            err.to_string(),
            "failed to build entity `Book`: unresolved reference: `book.author_id` \
             references `writer.id`, which does not exist"
        );
        assert!(!err.is_recoverable());
    }

    #[test]
    fn directive_errors_are_recoverable() {
        let err = Error::invalid_directive("foreign key `fk_book_author`", "fetch", "sometimes");
        assert!(err.is_recoverable());
        assert!(err.is_invalid_directive());
        assert!(!err.is_invalid_schema());
    }

    #[test]
    fn schema_errors_are_fatal() {
        let err = Error::invalid_schema("duplicate table `book`");
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "invalid schema: duplicate table `book`");
    }
}
