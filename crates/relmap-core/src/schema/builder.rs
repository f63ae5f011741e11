use super::{
    def::{ColumnDef, ForeignKeyDef, SchemaDef, TableDef},
    directive::{Comment, Reporter},
    pair_key, Column, DeleteRule, Directives, ForeignKey, ForeignKeyId, Name, Schema, Table,
    TableDirectives, TableId,
};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::collections::HashMap;

#[derive(Default)]
pub(super) struct Builder {
    /// Tables indexed by raw name, in definition order
    tables: IndexMap<String, Table>,

    foreign_keys: Vec<ForeignKey>,

    diagnostics: Vec<Error>,
}

impl Builder {
    pub(super) fn build(def: &SchemaDef) -> Result<Schema> {
        let mut builder = Self::default();

        // Register every table first so foreign keys can reference tables
        // defined later.
        for table in &def.tables {
            builder.register_table(table)?;
        }

        for table in &def.tables {
            for foreign_key in &table.foreign_keys {
                builder.link_foreign_key(table, foreign_key)?;
            }
        }

        builder.into_schema()
    }

    fn register_table(&mut self, def: &TableDef) -> Result<()> {
        if self.tables.contains_key(&def.name) {
            return Err(Error::invalid_schema(format!(
                "table `{}` is defined more than once",
                def.name
            )));
        }

        let id = TableId(self.tables.len());
        let comment = Comment::parse(def.comment.as_deref());
        let mut reporter = Reporter::new(format!("table `{}`", def.name), &mut self.diagnostics);
        let directives = TableDirectives::parse(&comment.directives, &mut reporter);

        let model_name = match &def.model {
            Some(model) => Name::new(model),
            None => Name::new(&def.name).singular(),
        };

        let columns = def
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| build_column(id, index, column))
            .collect::<Vec<_>>();

        for (index, column) in columns.iter().enumerate() {
            if columns[..index].iter().any(|prev| prev.name == column.name) {
                return Err(Error::invalid_schema(format!(
                    "column `{}.{}` is defined more than once",
                    def.name, column.name
                )));
            }
        }

        self.tables.insert(
            def.name.clone(),
            Table {
                id,
                name: def.name.clone(),
                model_name,
                columns,
                foreign_keys: vec![],
                references: vec![],
                comment: comment.text,
                directives,
                many_to_many: false,
                unresolved: vec![],
            },
        );

        Ok(())
    }

    fn link_foreign_key(&mut self, owner: &TableDef, def: &ForeignKeyDef) -> Result<()> {
        let owning = &self.tables[&owner.name];

        let (local, local_has_key) = match owning.column_by_name(&def.column) {
            Some(column) => (column.id, column.local.is_some()),
            None => {
                let err = Error::unresolved_reference(&owner.name, &def.column, None);
                self.record_unresolved(&owner.name, err);
                return Ok(());
            }
        };

        let target = format!("{}.{}", def.references.table, def.references.column);
        let referenced = match self.tables.get(&def.references.table) {
            Some(table) => match table.column_by_name(&def.references.column) {
                Some(column) => column,
                None => {
                    let err = Error::unresolved_reference(
                        &owner.name,
                        &def.column,
                        Some(target.as_str()),
                    );
                    self.record_unresolved(&owner.name, err);
                    return Ok(());
                }
            },
            None => {
                let err = Error::unresolved_reference(
                    &owner.name,
                    &def.column,
                    Some(def.references.table.as_str()),
                );
                self.record_unresolved(&owner.name, err);
                return Ok(());
            }
        };

        if !referenced.primary_key && !referenced.unique {
            return Err(Error::invalid_schema(format!(
                "foreign key `{}` on `{}.{}` references `{target}`, which is neither a \
                 primary key nor unique",
                def.name, owner.name, def.column,
            )));
        }

        if local_has_key {
            return Err(Error::invalid_schema(format!(
                "column `{}.{}` holds more than one foreign key",
                owner.name, def.column,
            )));
        }

        let id = ForeignKeyId(self.foreign_keys.len());
        let referenced = referenced.id;

        let subject = format!("foreign key `{}`", def.name);
        let comment = Comment::parse(def.comment.as_deref());
        let mut reporter = Reporter::new(subject, &mut self.diagnostics);
        let directives = Directives::parse(&comment.directives, &mut reporter);

        let on_delete = match def.on_delete.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(rule) => {
                let parsed = DeleteRule::parse(rule);
                if parsed.is_none() {
                    reporter.report("deleteRule", rule);
                }
                parsed
            }
        };

        self.foreign_keys.push(ForeignKey {
            id,
            name: def.name.clone(),
            local,
            referenced,
            on_delete,
            directives,
        });

        let owning = &mut self.tables[local.table.0];
        owning.columns[local.index].local = Some(id);
        owning.foreign_keys.push(id);

        let target = &mut self.tables[referenced.table.0];
        target.columns[referenced.index].foreigns.push(id);
        target.references.push(id);

        Ok(())
    }

    /// The foreign key is left out of the graph. Only its owning table is
    /// affected.
    fn record_unresolved(&mut self, table: &str, err: Error) {
        tracing::warn!(%table, "{err}");
        self.tables[table].unresolved.push(err);
    }

    fn into_schema(self) -> Result<Schema> {
        let mut pair_counts = HashMap::new();

        for foreign_key in &self.foreign_keys {
            let key = pair_key(foreign_key.owning_table(), foreign_key.referenced_table());
            *pair_counts.entry(key).or_insert(0) += 1;
        }

        let mut schema = Schema {
            tables: self.tables.into_values().collect(),
            foreign_keys: self.foreign_keys,
            pair_counts,
            diagnostics: self.diagnostics,
        };

        let junctions: Vec<_> = schema
            .tables
            .iter()
            .filter(|table| is_junction(&schema, table))
            .map(|table| table.id)
            .collect();

        for id in junctions {
            tracing::debug!(table = %schema.tables[id.0].name, "classified as many-to-many junction");
            schema.tables[id.0].many_to_many = true;
        }

        Ok(schema)
    }
}

fn build_column(table: TableId, index: usize, def: &ColumnDef) -> Column {
    let comment = Comment::parse(def.comment.as_deref());

    Column {
        id: table.column(index),
        name: def.name.clone(),
        ty: def.ty.clone(),
        length: def.length,
        precision: def.precision,
        scale: def.scale,
        unsigned: def.unsigned,
        nullable: !def.not_null,
        unique: def.unique,
        comment: comment.text,
        default: def.default.clone(),
        primary_key: def.primary_key,
        auto_increment: def.auto_increment,
        local: None,
        foreigns: vec![],
    }
}

/// A junction table has exactly two foreign keys, to two different tables,
/// and no column other than the two key columns. The `m2m` table directive
/// overrides detection.
fn is_junction(schema: &Schema, table: &Table) -> bool {
    if let Some(many_to_many) = table.directives.many_to_many {
        return many_to_many && table.foreign_keys.len() == 2;
    }

    let &[a, b] = table.foreign_keys.as_slice() else {
        return false;
    };

    let a = schema.foreign_key(a);
    let b = schema.foreign_key(b);

    a.referenced_table() != b.referenced_table()
        && table.columns.len() == 2
        && table.columns.iter().all(|column| column.local.is_some())
}
