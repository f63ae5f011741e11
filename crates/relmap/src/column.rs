use crate::{Attributes, Config, TypeConverter};

use relmap_core::schema::Column;

/// Builds the physical mapping attributes of a column:
/// `{name, type, length?, unique?, precision?, scale?, nullable, options?}`.
///
/// Optional attributes are omitted when unset; `nullable` is always present.
pub fn column_attributes(
    column: &Column,
    types: &dyn TypeConverter,
    config: &Config,
) -> Attributes {
    let mut attrs = Attributes::new();

    attrs.insert("name", quote(&column.name, config));
    attrs.insert("type", types.mapped_type(column));
    attrs.insert_opt("length", column.length());

    if column.unique {
        attrs.insert("unique", true);
    }

    if let Some((precision, scale)) = column.precision_scale() {
        attrs.insert("precision", precision);
        attrs.insert("scale", scale);
    }

    attrs.insert("nullable", column.nullable);

    let mut options = Attributes::new();
    if column.unsigned {
        options.insert("unsigned", true);
    }
    options.insert_opt("comment", column.comment.clone());

    if !options.is_empty() {
        attrs.insert("options", options);
    }

    attrs
}

fn quote(identifier: &str, config: &Config) -> String {
    if config.quote_identifiers {
        format!("`{identifier}`")
    } else {
        identifier.to_string()
    }
}
