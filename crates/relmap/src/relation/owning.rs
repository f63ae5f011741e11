use crate::{
    options, Association, AssociationKind, Attributes, Generator, Param, ResolvedRelation, Side,
    Visibility,
};

use relmap_core::schema::Cardinality;
use std_util::str::upper_first;

/// The to-one association on the table holding the foreign key.
///
/// Options go on the inverse side of bidirectional relations. Unidirectional
/// relations have no inverse side, so the owning side carries them. A
/// one-to-one owning side always carries `cascade`.
pub(crate) fn owning(
    generator: &Generator<'_>,
    relation: &ResolvedRelation,
) -> Association {
    let schema = generator.schema;
    let foreign_key = schema.foreign_key(relation.foreign_key);
    let directives = &foreign_key.directives;
    let owner = foreign_key.owner(schema);
    let target = foreign_key.target(schema);

    let entity = generator.config.qualify(&owner.model_name.upper_camel_case());
    let target_entity = generator.config.qualify(&target.model_name.upper_camel_case());
    let field = relation.owning_field.clone();

    let mut mapping = Attributes::new();
    mapping.insert("targetEntity", target_entity.as_str());
    mapping.insert_opt("inversedBy", relation.inverse_field.clone());

    let kind = match relation.cardinality {
        Cardinality::ManyToOne => {
            if !relation.is_bidirectional() {
                mapping.insert_opt("cascade", options::cascade(directives));
                mapping.insert_opt("fetch", options::fetch(directives));
            }
            AssociationKind::ManyToOne
        }
        Cardinality::OneToOne => {
            mapping.insert_opt("cascade", options::cascade(directives));
            if !relation.is_bidirectional() {
                mapping.insert_opt("fetch", options::fetch(directives));
                mapping.insert_opt("orphanRemoval", options::orphan_removal(directives));
            }
            AssociationKind::OneToOne
        }
    };

    let method = upper_first(&field);
    let param = Param {
        name: target.model_name.camel_case(),
        ty: target_entity.clone(),
        optional: foreign_key.local(schema).nullable,
    };

    let mut setter = generator.setter(format!("set{method}"), param, &entity);
    if relation.cardinality == Cardinality::OneToOne {
        setter.back_reference = relation
            .inverse_field
            .as_deref()
            .map(|inverse| format!("set{}", upper_first(inverse)));
    }

    let getter = generator.getter(format!("get{method}"), &target_entity);

    Association {
        field,
        kind,
        side: Side::Owning,
        target_entity,
        visibility: Visibility::Protected,
        mapping,
        join_column: Some(options::join_column(schema, foreign_key)),
        join_table: None,
        accessors: vec![setter, getter],
    }
}
