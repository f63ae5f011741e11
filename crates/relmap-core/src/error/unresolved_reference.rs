use super::Error;

/// Error when a foreign key points at a table or column that does not exist.
///
/// `table` and `column` identify the owning side of the foreign key. When
/// `target` is `None`, the owning column itself is missing.
#[derive(Debug)]
pub(super) struct UnresolvedReference {
    table: Box<str>,
    column: Box<str>,
    target: Option<Box<str>>,
}

impl std::error::Error for UnresolvedReference {}

impl core::fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.target {
            Some(target) => write!(
                f,
                "unresolved reference: `{}.{}` references `{}`, which does not exist",
                self.table, self.column, target
            ),
            None => write!(
                f,
                "unresolved reference: column `{}.{}` does not exist",
                self.table, self.column
            ),
        }
    }
}

impl Error {
    /// Creates an unresolved reference error for the foreign key owned by
    /// `table.column`.
    pub fn unresolved_reference(
        table: impl Into<String>,
        column: impl Into<String>,
        target: Option<&str>,
    ) -> Error {
        Error::from(super::ErrorKind::UnresolvedReference(UnresolvedReference {
            table: table.into().into(),
            column: column.into().into(),
            target: target.map(Into::into),
        }))
    }

    /// Returns `true` if this error is an unresolved reference error.
    pub fn is_unresolved_reference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvedReference(_))
    }

    /// The owning `(table, column)` of an unresolved reference.
    pub fn unresolved_source(&self) -> Option<(&str, &str)> {
        match self.kind() {
            super::ErrorKind::UnresolvedReference(err) => Some((&*err.table, &*err.column)),
            _ => None,
        }
    }
}
