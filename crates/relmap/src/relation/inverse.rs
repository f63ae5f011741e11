use crate::{
    naming, options, Association, AssociationKind, Attributes, CollectionInit, Generator, Param,
    ResolvedRelation, Side, Visibility,
};

use relmap_core::schema::Cardinality;
use std_util::str::upper_first;

/// The association on the referenced table, designated by `mappedBy`.
///
/// Returns `None` for unidirectional relations. One-to-many associations
/// also return the constructor initializer of their collection.
pub(crate) fn inverse(
    generator: &Generator<'_>,
    relation: &ResolvedRelation,
) -> Option<(Association, Option<CollectionInit>)> {
    let field = relation.inverse_field.clone()?;

    let schema = generator.schema;
    let foreign_key = schema.foreign_key(relation.foreign_key);
    let directives = &foreign_key.directives;
    let owner = foreign_key.owner(schema);
    let target = foreign_key.target(schema);

    let entity = generator.config.qualify(&target.model_name.upper_camel_case());
    let target_entity = generator.config.qualify(&owner.model_name.upper_camel_case());

    let mut mapping = Attributes::new();
    mapping.insert("targetEntity", target_entity.as_str());
    mapping.insert("mappedBy", relation.owning_field.as_str());
    mapping.insert_opt("cascade", options::cascade(directives));
    mapping.insert_opt("fetch", options::fetch(directives));
    mapping.insert_opt("orphanRemoval", options::orphan_removal(directives));

    let param = Param {
        name: owner.model_name.camel_case(),
        ty: target_entity.clone(),
        optional: false,
    };

    let (kind, accessors, init) = match relation.cardinality {
        Cardinality::ManyToOne => {
            let tag = relation
                .tag
                .as_ref()
                .map(|tag| tag.upper_camel_case())
                .unwrap_or_default();
            let model = owner.model_name.upper_camel_case();
            let plural =
                naming::plural(generator.inflector, &owner.model_name).upper_camel_case();

            let accessors = vec![
                generator.adder(format!("add{model}{tag}"), param.clone(), &entity),
                generator.remover(format!("remove{model}{tag}"), param, &entity),
                generator.getter(
                    format!("get{plural}{tag}"),
                    &generator.config.collection_interface_name,
                ),
            ];

            let init = CollectionInit {
                field: field.clone(),
                class: generator.config.collection_implementation_name.clone(),
            };

            (AssociationKind::OneToMany, accessors, Some(init))
        }
        Cardinality::OneToOne => {
            let method = upper_first(&field);
            let accessors = vec![
                generator.setter(format!("set{method}"), param, &entity),
                generator.getter(format!("get{method}"), &target_entity),
            ];

            (AssociationKind::OneToOne, accessors, None)
        }
    };

    let association = Association {
        field,
        kind,
        side: Side::Inverse,
        target_entity,
        visibility: Visibility::Protected,
        mapping,
        join_column: None,
        join_table: None,
        accessors,
    };

    Some((association, init))
}
