//! Plain description of a parsed schema, as handed over by a schema parser.
//!
//! The definitions reference each other by name. [`Schema::from_defs`]
//! resolves the names into a graph and rejects dangling references.
//!
//! [`Schema::from_defs`]: super::Schema::from_defs

use super::DefaultValue;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDef {
    pub tables: Vec<TableDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableDef {
    pub name: String,

    /// Entity name override. Derived from `name` when absent.
    pub model: Option<String>,

    pub comment: Option<String>,

    pub columns: Vec<ColumnDef>,

    pub foreign_keys: Vec<ForeignKeyDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDef {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    pub length: Option<i64>,
    pub precision: Option<i64>,
    pub scale: Option<i64>,
    pub unsigned: bool,
    pub not_null: bool,
    pub unique: bool,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub comment: Option<String>,
    pub default: Option<DefaultValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForeignKeyDef {
    /// Constraint name
    pub name: String,

    /// Local column holding the key
    pub column: String,

    pub references: ReferenceDef,

    /// Schema-level delete rule, e.g. `CASCADE` or `SET NULL`
    pub on_delete: Option<String>,

    /// Comment carrying relation directives
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDef {
    pub table: String,
    pub column: String,
}

impl SchemaDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: TableDef) -> Self {
        self.tables.push(table);
        self
    }
}

impl TableDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn foreign_key(mut self, foreign_key: ForeignKeyDef) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// An auto-incremented, not-null integer primary key.
    pub fn id(name: impl Into<String>) -> Self {
        Self::new(name, "INT").primary_key().auto_increment()
    }

    pub fn length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn precision(mut self, precision: i64, scale: i64) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Marks the column as primary key, which implies `NOT NULL`.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.not_null = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default = Some(value.into());
        self
    }
}

impl ForeignKeyDef {
    pub fn new(
        name: impl Into<String>,
        column: impl Into<String>,
        table: impl Into<String>,
        referenced_column: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            references: ReferenceDef {
                table: table.into(),
                column: referenced_column.into(),
            },
            ..Self::default()
        }
    }

    pub fn on_delete(mut self, rule: impl Into<String>) -> Self {
        self.on_delete = Some(rule.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
