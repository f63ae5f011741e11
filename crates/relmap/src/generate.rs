use crate::{
    column_attributes, relation, Accessor, AccessorKind, Attributes, CollectionInit, Config,
    English, Entity, Error, Inflector, NativeType, Param, Property, ResolvedRelation, Result,
    Schema, TypeConverter, Visibility,
};

use relmap_core::schema::{Column, ColumnId, ForeignKeyId, Name, Table, TableId};
use std::collections::HashSet;

/// Produces entity descriptions from a frozen schema graph.
///
/// Generation is a pure function of the schema and configuration: generating
/// the same table twice yields identical output, and tables can be
/// generated independently.
pub struct Generator<'a> {
    pub(crate) schema: &'a Schema,
    pub(crate) config: &'a Config,
    pub(crate) types: &'a dyn TypeConverter,
    pub(crate) inflector: &'a dyn Inflector,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema, config: &'a Config, types: &'a dyn TypeConverter) -> Self {
        Self {
            schema,
            config,
            types,
            inflector: &English,
        }
    }

    /// Use `inflector` instead of English rules for collection names.
    pub fn with_inflector(mut self, inflector: &'a dyn Inflector) -> Self {
        self.inflector = inflector;
        self
    }

    /// Entities for every table except junction and skipped tables, in
    /// schema order. Stops at the first table that fails.
    pub fn entities(&self) -> Result<Vec<Entity>> {
        self.schema
            .tables()
            .filter(|table| maps_to_entity(table))
            .map(|table| {
                self.entity(table.id).map_err(|err| {
                    err.context(Error::from_args(format_args!(
                        "failed to generate entity for table `{}`",
                        table.name
                    )))
                })
            })
            .collect()
    }

    /// Entity for a single table.
    pub fn entity(&self, id: TableId) -> Result<Entity> {
        let table = self.schema.table(id);

        if !maps_to_entity(table) {
            return Err(Error::from_args(format_args!(
                "table `{}` does not map to an entity",
                table.name
            )));
        }

        self.verify_references(table)?;

        let name = table.model_name.upper_camel_case();
        let entity_ty = self.config.qualify(&name);

        let properties = table
            .columns
            .iter()
            .filter(|column| column.primary_key || !self.is_association_column(column))
            .map(|column| self.property(column, &entity_ty))
            .collect();

        let mut associations = vec![];
        let mut constructor: Vec<CollectionInit> = vec![];

        for &foreign_key in &table.foreign_keys {
            if let Some(relation) = self.relation(foreign_key) {
                associations.push(relation::owning(self, &relation));
            }
        }

        for &foreign_key in &table.references {
            let owner = self.schema.foreign_key(foreign_key).owner(self.schema);

            if owner.is_many_to_many() {
                if let Some((association, init)) = relation::many_to_many(self, foreign_key) {
                    associations.push(association);
                    constructor.push(init);
                }
            } else if let Some(relation) = self.relation(foreign_key) {
                if let Some((association, init)) = relation::inverse(self, &relation) {
                    associations.push(association);
                    constructor.extend(init);
                }
            }
        }

        let entity = Entity {
            table: table.name.clone(),
            name,
            namespace: self.config.namespace.clone(),
            comment: table.comment.clone(),
            properties,
            associations,
            constructor,
        };

        verify_unique_fields(&entity)?;

        tracing::debug!(
            table = %table.name,
            entity = %entity.name,
            properties = entity.properties.len(),
            associations = entity.associations.len(),
            "generated entity"
        );

        Ok(entity)
    }

    /// A table with an unresolved foreign key fails, and so does every table
    /// holding a key that references it.
    fn verify_references(&self, table: &Table) -> Result<()> {
        if let Some(err) = table.unresolved.first() {
            return Err(err.clone());
        }

        for &foreign_key in &table.foreign_keys {
            let target = self.schema.foreign_key(foreign_key).target(self.schema);

            if let Some(err) = target.unresolved.first() {
                return Err(err.clone().context(Error::from_args(format_args!(
                    "table `{}` references table `{}`",
                    table.name, target.name
                ))));
            }
        }

        Ok(())
    }

    /// Field names for a foreign key, or `None` when the key maps to no
    /// per-key association.
    pub fn relation(&self, foreign_key: ForeignKeyId) -> Option<ResolvedRelation> {
        relation::resolve(
            self.schema,
            self.config,
            self.inflector,
            self.schema.foreign_key(foreign_key),
        )
    }

    /// Column mapping attributes for a single column.
    pub fn column_attributes(&self, column: ColumnId) -> Attributes {
        column_attributes(self.schema.column(column), self.types, self.config)
    }

    /// Foreign key columns are represented by their association rather than
    /// a scalar field.
    fn is_association_column(&self, column: &Column) -> bool {
        column
            .local
            .is_some_and(|foreign_key| self.relation(foreign_key).is_some())
    }

    fn property(&self, column: &Column, entity_ty: &str) -> Property {
        let mapped = self.types.mapped_type(column);
        let native_type = self.types.native_type(&mapped);
        let default = column
            .default
            .as_ref()
            .and_then(|raw| crate::coerce_default(raw, NativeType::parse(&native_type)));

        let name = Name::new(&column.name);
        let field = name.camel_case();
        let method = name.upper_camel_case();

        let param = Param {
            name: field.clone(),
            ty: native_type.clone(),
            optional: false,
        };

        let accessors = vec![
            self.setter(format!("set{method}"), param, entity_ty),
            self.getter(format!("get{method}"), &native_type),
        ];

        Property {
            field,
            native_type,
            visibility: Visibility::for_config(self.config.generate_base_classes),
            id: column.primary_key,
            column: column_attributes(column, self.types, self.config),
            generated_value: column
                .auto_increment
                .then(|| Attributes::from_iter([("strategy", "AUTO")])),
            default,
            comment: column.comment.clone(),
            accessors,
        }
    }

    pub(crate) fn setter(&self, name: String, param: Param, returns: &str) -> Accessor {
        self.accessor(AccessorKind::Setter, name, Some(param), returns)
    }

    pub(crate) fn getter(&self, name: String, returns: &str) -> Accessor {
        self.accessor(AccessorKind::Getter, name, None, returns)
    }

    pub(crate) fn adder(&self, name: String, param: Param, returns: &str) -> Accessor {
        self.accessor(AccessorKind::Adder, name, Some(param), returns)
    }

    pub(crate) fn remover(&self, name: String, param: Param, returns: &str) -> Accessor {
        self.accessor(AccessorKind::Remover, name, Some(param), returns)
    }

    fn accessor(
        &self,
        kind: AccessorKind,
        name: String,
        param: Option<Param>,
        returns: &str,
    ) -> Accessor {
        Accessor {
            kind,
            name,
            param,
            returns: returns.to_string(),
            back_reference: None,
            overridable: self.config.generate_base_classes,
        }
    }
}

fn maps_to_entity(table: &Table) -> bool {
    !table.is_many_to_many() && !table.is_skipped()
}

fn verify_unique_fields(entity: &Entity) -> Result<()> {
    let mut seen = HashSet::new();

    for field in entity.fields() {
        if !seen.insert(field) {
            return Err(Error::invalid_schema(format!(
                "entity `{}` has more than one field named `{field}`",
                entity.name
            )));
        }
    }

    Ok(())
}
