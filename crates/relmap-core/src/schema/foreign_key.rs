use super::{Column, ColumnId, DeleteRule, Directives, Schema, Table, TableId};

use std::fmt;

/// Relates a local column (owning the key) to a referenced key column.
#[derive(Debug)]
pub struct ForeignKey {
    pub id: ForeignKeyId,

    /// Constraint name
    pub name: String,

    /// The column holding the key
    pub local: ColumnId,

    /// The primary key or unique column the key points to
    pub referenced: ColumnId,

    pub on_delete: Option<DeleteRule>,

    pub directives: Directives,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ForeignKeyId(pub usize);

/// Cardinality of a foreign key, seen from the owning table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Many owning rows reference one row; the inverse is one-to-many.
    ManyToOne,

    /// The local column is unique, so at most one owning row references a
    /// given row.
    OneToOne,
}

impl ForeignKey {
    pub fn owning_table(&self) -> TableId {
        self.local.table
    }

    pub fn referenced_table(&self) -> TableId {
        self.referenced.table
    }

    pub fn owner<'a>(&self, schema: &'a Schema) -> &'a Table {
        schema.table(self.owning_table())
    }

    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Table {
        schema.table(self.referenced_table())
    }

    pub fn local<'a>(&self, schema: &'a Schema) -> &'a Column {
        schema.column(self.local)
    }

    pub fn referenced<'a>(&self, schema: &'a Schema) -> &'a Column {
        schema.column(self.referenced)
    }

    pub fn is_self_reference(&self) -> bool {
        self.owning_table() == self.referenced_table()
    }

    pub fn is_unidirectional(&self) -> bool {
        self.directives.unidirectional
    }

    /// Derived from the uniqueness of the local column, never stored.
    pub fn cardinality(&self, schema: &Schema) -> Cardinality {
        if self.local(schema).unique {
            Cardinality::OneToOne
        } else {
            Cardinality::ManyToOne
        }
    }
}

impl fmt::Debug for ForeignKeyId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ForeignKeyId({})", self.0)
    }
}
