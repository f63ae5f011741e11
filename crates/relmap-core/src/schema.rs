mod builder;

mod column;
pub use column::{Column, ColumnId};

pub mod def;

mod default;
pub use default::DefaultValue;

pub mod directive;
pub use directive::{Cascade, CascadeOp, DeleteRule, Directives, Fetch, TableDirectives};

mod foreign_key;
pub use foreign_key::{Cardinality, ForeignKey, ForeignKeyId};

mod name;
pub use name::Name;

mod table;
pub use table::{Table, TableId};

use crate::{Error, Result};
use std::collections::HashMap;

/// The frozen table/column/foreign-key graph.
///
/// Built once by [`Schema::from_defs`]; everything derived from it (pair
/// counts, junction classification, parsed directives) is computed during
/// construction so resolution never mutates the graph.
#[derive(Debug, Default)]
pub struct Schema {
    pub(crate) tables: Vec<Table>,

    pub(crate) foreign_keys: Vec<ForeignKey>,

    /// Number of foreign keys connecting an unordered pair of tables, keyed
    /// with the smaller id first.
    pub(crate) pair_counts: HashMap<(TableId, TableId), usize>,

    /// Recoverable errors found while building the graph.
    pub(crate) diagnostics: Vec<Error>,
}

impl Schema {
    /// Builds the schema graph from an external parse result.
    pub fn from_defs(def: &def::SchemaDef) -> Result<Schema> {
        builder::Builder::build(def)
    }

    pub fn tables(&self) -> impl ExactSizeIterator<Item = &Table> + '_ {
        self.tables.iter()
    }

    /// Get a table by ID
    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        self.tables.get(id.into().0).expect("invalid table ID")
    }

    /// Look up a table by its raw name.
    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Get a column by ID
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        self.table(id.table).column(id)
    }

    pub fn foreign_keys(&self) -> impl ExactSizeIterator<Item = &ForeignKey> + '_ {
        self.foreign_keys.iter()
    }

    /// Get a foreign key by ID
    pub fn foreign_key(&self, id: ForeignKeyId) -> &ForeignKey {
        self.foreign_keys.get(id.0).expect("invalid foreign key ID")
    }

    /// Number of foreign keys directly connecting `a` and `b`, in either
    /// direction. A self-referencing key counts toward `(a, a)`.
    pub fn pair_count(&self, a: TableId, b: TableId) -> usize {
        self.pair_counts
            .get(&pair_key(a, b))
            .copied()
            .unwrap_or(0)
    }

    /// Recoverable errors (unrecognized directives) collected while building.
    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }
}

pub(crate) fn pair_key(a: TableId, b: TableId) -> (TableId, TableId) {
    if a.0 <= b.0 {
        (a, b)
    } else {
        (b, a)
    }
}
