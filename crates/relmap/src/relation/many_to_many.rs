use crate::{
    naming, options, Association, AssociationKind, Attributes, CollectionInit, Generator, Param,
    Side, Value, Visibility,
};

use relmap_core::schema::{ForeignKey, ForeignKeyId, Table};

/// The many-to-many collection `foreign_key` contributes to the table it
/// references. `foreign_key` must be held by a junction table.
///
/// The junction key flagged with the `owningSide` directive, or else the
/// first key, makes its referenced table the owning side. The owning
/// collection carries the join table description. The inverse collection
/// is dropped when either junction key is unidirectional or both keys
/// reference the same table.
pub(crate) fn many_to_many(
    generator: &Generator<'_>,
    foreign_key: ForeignKeyId,
) -> Option<(Association, CollectionInit)> {
    let schema = generator.schema;
    let junction = schema.foreign_key(foreign_key).owner(schema);

    let (owning, inverse) = sides(generator, junction)?;
    let owning_table = owning.target(schema);
    let inverse_table = inverse.target(schema);

    if owning_table.is_skipped() || inverse_table.is_skipped() {
        return None;
    }

    let bidirectional = !owning.is_unidirectional()
        && !inverse.is_unidirectional()
        && owning_table.id != inverse_table.id;

    let owning_field = collection_field(generator, inverse_table);
    let inverse_field = collection_field(generator, owning_table);

    let (side, this, other, field, this_key) = if foreign_key == owning.id {
        (Side::Owning, owning_table, inverse_table, owning_field.clone(), owning)
    } else if bidirectional {
        (Side::Inverse, inverse_table, owning_table, inverse_field.clone(), inverse)
    } else {
        return None;
    };

    let entity = generator.config.qualify(&this.model_name.upper_camel_case());
    let target_entity = generator.config.qualify(&other.model_name.upper_camel_case());

    let mut mapping = Attributes::new();
    mapping.insert("targetEntity", target_entity.as_str());
    match side {
        Side::Owning if bidirectional => mapping.insert("inversedBy", inverse_field),
        Side::Owning => {}
        Side::Inverse => mapping.insert("mappedBy", owning_field),
    }
    mapping.insert_opt("cascade", options::cascade(&this_key.directives));
    mapping.insert_opt("fetch", options::fetch(&this_key.directives));

    let join_table = (side == Side::Owning).then(|| {
        let mut join_table = Attributes::new();
        join_table.insert("name", junction.name.as_str());
        join_table.insert(
            "joinColumns",
            vec![Value::Map(options::join_column(schema, owning))],
        );
        join_table.insert(
            "inverseJoinColumns",
            vec![Value::Map(options::join_column(schema, inverse))],
        );
        join_table
    });

    let model = other.model_name.upper_camel_case();
    let plural = naming::plural(generator.inflector, &other.model_name).upper_camel_case();
    let param = Param {
        name: other.model_name.camel_case(),
        ty: target_entity.clone(),
        optional: false,
    };

    let accessors = vec![
        generator.adder(format!("add{model}"), param.clone(), &entity),
        generator.remover(format!("remove{model}"), param, &entity),
        generator.getter(
            format!("get{plural}"),
            &generator.config.collection_interface_name,
        ),
    ];

    tracing::debug!(
        junction = %junction.name,
        field = %field,
        ?side,
        "resolved many-to-many collection"
    );

    let init = CollectionInit {
        field: field.clone(),
        class: generator.config.collection_implementation_name.clone(),
    };

    let association = Association {
        field,
        kind: AssociationKind::ManyToMany,
        side,
        target_entity,
        visibility: Visibility::Protected,
        mapping,
        join_column: None,
        join_table,
        accessors,
    };

    Some((association, init))
}

/// Splits the two keys of a junction table into (owning, inverse).
fn sides<'a>(
    generator: &Generator<'a>,
    junction: &Table,
) -> Option<(&'a ForeignKey, &'a ForeignKey)> {
    let &[a, b] = junction.foreign_keys.as_slice() else {
        return None;
    };

    let a = generator.schema.foreign_key(a);
    let b = generator.schema.foreign_key(b);

    if b.directives.owning_side && !a.directives.owning_side {
        Some((b, a))
    } else {
        Some((a, b))
    }
}

fn collection_field(generator: &Generator<'_>, table: &Table) -> String {
    naming::plural(generator.inflector, &table.model_name).camel_case()
}
