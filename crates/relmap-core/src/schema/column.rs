use super::{DefaultValue, ForeignKeyId, TableId};

use std::fmt;

#[derive(Debug)]
pub struct Column {
    /// Uniquely identifies the column in the schema.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    /// Semantic column type as declared in the schema, e.g. `VARCHAR`.
    pub ty: String,

    /// Declared length. `-1` means unset.
    pub length: Option<i64>,

    /// Declared precision. `-1` means unset.
    pub precision: Option<i64>,

    /// Declared scale. `-1` means unset.
    pub scale: Option<i64>,

    pub unsigned: bool,

    /// False when the column is declared `NOT NULL`.
    pub nullable: bool,

    pub unique: bool,

    /// Descriptive comment with directives stripped.
    pub comment: Option<String>,

    /// Raw default as supplied by the schema parser.
    pub default: Option<DefaultValue>,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,

    pub auto_increment: bool,

    /// The foreign key this column owns, if any.
    pub local: Option<ForeignKeyId>,

    /// Foreign keys referencing this column.
    pub foreigns: Vec<ForeignKeyId>,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

/// Value the schema uses for "not set" on length, precision and scale.
pub(crate) const UNSET: i64 = -1;

impl Column {
    /// Declared length, ignoring the unset sentinel.
    pub fn length(&self) -> Option<i64> {
        self.length.filter(|length| *length != UNSET)
    }

    /// Declared `(precision, scale)` when both are set and non-zero.
    pub fn precision_scale(&self) -> Option<(i64, i64)> {
        let precision = self.precision.filter(|p| *p != UNSET && *p != 0)?;
        let scale = self.scale.filter(|s| *s != UNSET && *s != 0)?;
        Some((precision, scale))
    }

    pub fn is_foreign_key(&self) -> bool {
        self.local.is_some()
    }
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
