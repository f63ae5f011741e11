mod inverse;
pub(crate) use inverse::inverse;

mod many_to_many;
pub(crate) use many_to_many::many_to_many;

mod owning;
pub(crate) use owning::owning;

use crate::{naming, Config, Inflector};

use relmap_core::schema::{Cardinality, ForeignKey, ForeignKeyId, Name, Schema};

/// Field names computed for one foreign key.
///
/// Both sides of a bidirectional relation refer to each other through these
/// names: the inverse side's `mappedBy` is `owning_field` and the owning
/// side's `inversedBy` is `inverse_field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelation {
    pub foreign_key: ForeignKeyId,

    pub cardinality: Cardinality,

    /// Disambiguation tag, set when more than one foreign key connects the
    /// two tables or the key references its own table.
    pub tag: Option<Name>,

    /// Field on the table holding the key
    pub owning_field: String,

    /// Field on the referenced table. `None` for unidirectional relations.
    pub inverse_field: Option<String>,
}

impl ResolvedRelation {
    pub fn is_bidirectional(&self) -> bool {
        self.inverse_field.is_some()
    }
}

/// Resolves the field names of a foreign key.
///
/// Returns `None` when the key maps to no per-key association: keys held by
/// a junction table (see [`many_to_many`]), keys referencing a junction
/// table, which has no entity, and keys touching a skipped table.
pub(crate) fn resolve(
    schema: &Schema,
    config: &Config,
    inflector: &dyn Inflector,
    foreign_key: &ForeignKey,
) -> Option<ResolvedRelation> {
    let owner = foreign_key.owner(schema);
    let target = foreign_key.target(schema);

    if owner.is_many_to_many()
        || target.is_many_to_many()
        || owner.is_skipped()
        || target.is_skipped()
    {
        return None;
    }

    let cardinality = foreign_key.cardinality(schema);
    let tag = naming::tag(schema, foreign_key, &config.strip_suffixes);

    let owning_field = match &tag {
        Some(tag) => tag.camel_case(),
        None => target.model_name.camel_case(),
    };

    let inverse_field = if foreign_key.is_unidirectional() {
        None
    } else {
        let owner_name = match cardinality {
            Cardinality::ManyToOne => naming::plural(inflector, &owner.model_name),
            Cardinality::OneToOne => owner.model_name.clone(),
        };

        Some(match &tag {
            Some(tag) => tag.join(&owner_name).camel_case(),
            None => owner_name.camel_case(),
        })
    };

    tracing::debug!(
        foreign_key = %foreign_key.name,
        ?cardinality,
        owning_field = %owning_field,
        ?inverse_field,
        "resolved relation"
    );

    Some(ResolvedRelation {
        foreign_key: foreign_key.id,
        cardinality,
        tag,
        owning_field,
        inverse_field,
    })
}
