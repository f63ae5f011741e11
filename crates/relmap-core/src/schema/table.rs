use super::{Column, ColumnId, ForeignKeyId, Name, TableDirectives};
use crate::Error;

use std::fmt;

/// A database table
#[derive(Debug)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Name of the table in the database
    pub name: String,

    /// Name of the entity generated for the table
    pub model_name: Name,

    /// The table's columns, in schema order
    pub columns: Vec<Column>,

    /// Foreign keys owned by columns of this table
    pub foreign_keys: Vec<ForeignKeyId>,

    /// Foreign keys of other tables (or this one) referencing this table
    pub references: Vec<ForeignKeyId>,

    /// Table comment with directives stripped
    pub comment: Option<String>,

    pub directives: TableDirectives,

    /// True if the table is a pure junction table backing a many-to-many
    /// relation.
    pub many_to_many: bool,

    /// Foreign keys of this table that could not be resolved. They are left
    /// out of the graph; generating the table reports the first one.
    pub unresolved: Vec<Error>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct TableId(pub usize);

impl Table {
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        assert_eq!(id.table, self.id, "column belongs to another table");
        &self.columns[id.index]
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.primary_key)
    }

    pub fn is_many_to_many(&self) -> bool {
        self.many_to_many
    }

    pub fn has_unresolved_references(&self) -> bool {
        !self.unresolved.is_empty()
    }

    /// Tables flagged with the `skip` directive produce no entity.
    pub fn is_skipped(&self) -> bool {
        self.directives.skip
    }
}

impl TableId {
    pub fn column(self, index: usize) -> ColumnId {
        ColumnId { table: self, index }
    }
}

impl From<&Table> for TableId {
    fn from(value: &Table) -> Self {
        value.id
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
