//! Identifier inflection used to derive field and accessor names.

use relmap_core::schema::{ForeignKey, Name, Schema};
use std_util::str;

/// Pluralizes and singularizes words. Swap the implementation to change how
/// collection fields are named.
pub trait Inflector {
    fn pluralize(&self, word: &str) -> String;

    fn singularize(&self, word: &str) -> String;
}

/// English inflection rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Inflector for English {
    fn pluralize(&self, word: &str) -> String {
        str::pluralize(word)
    }

    fn singularize(&self, word: &str) -> String {
        str::singularize(word)
    }
}

/// Plural form of `name`, inflecting only its last word.
pub(crate) fn plural(inflector: &dyn Inflector, name: &Name) -> Name {
    Name::new(&inflector.pluralize(&name.snake_case()))
}

/// Tag distinguishing a relation from other relations between the same two
/// tables.
///
/// A tag is needed when more than one foreign key connects the two tables, or
/// when the key references its own table. The `name` directive wins;
/// otherwise the tag is the local column name with the first matching
/// suffix removed. When that clashes with the tag of another key between the
/// same tables, the full column name is used instead.
pub(crate) fn tag(schema: &Schema, foreign_key: &ForeignKey, suffixes: &[String]) -> Option<Name> {
    let pair_count = schema.pair_count(foreign_key.owning_table(), foreign_key.referenced_table());

    if pair_count <= 1 && !foreign_key.is_self_reference() {
        return None;
    }

    if let Some(name) = &foreign_key.directives.name {
        return Some(Name::new(name));
    }

    let tag = preferred_tag(schema, foreign_key, suffixes);

    let clashes = schema
        .foreign_keys()
        .filter(|other| other.id != foreign_key.id && connects_same_tables(foreign_key, other))
        .any(|other| preferred_tag(schema, other, suffixes) == tag);

    if clashes {
        Some(Name::new(&foreign_key.local(schema).name))
    } else {
        Some(tag)
    }
}

fn preferred_tag(schema: &Schema, foreign_key: &ForeignKey, suffixes: &[String]) -> Name {
    if let Some(name) = &foreign_key.directives.name {
        return Name::new(name);
    }

    let column = &foreign_key.local(schema).name;
    let tag = Name::new(strip_suffix(column, suffixes));

    if tag.is_empty() {
        Name::new(column)
    } else {
        tag
    }
}

fn connects_same_tables(a: &ForeignKey, b: &ForeignKey) -> bool {
    let (a_owner, a_target) = (a.owning_table(), a.referenced_table());
    let (b_owner, b_target) = (b.owning_table(), b.referenced_table());

    (a_owner == b_owner && a_target == b_target) || (a_owner == b_target && a_target == b_owner)
}

/// Removes the first suffix of `suffixes` that `name` ends with, ignoring
/// ASCII case. A suffix spanning the whole name is not removed.
pub(crate) fn strip_suffix<'a>(name: &'a str, suffixes: &[String]) -> &'a str {
    suffixes
        .iter()
        .filter(|suffix| !suffix.is_empty() && suffix.len() < name.len())
        .find_map(|suffix| {
            let at = name.len() - suffix.len();
            (name.is_char_boundary(at) && name[at..].eq_ignore_ascii_case(suffix))
                .then(|| &name[..at])
        })
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffixes() -> Vec<String> {
        vec!["_id".to_string(), "_fk".to_string(), "id".to_string()]
    }

    #[test]
    fn strip_first_matching_suffix() {
        assert_eq!(strip_suffix("from_address_id", &suffixes()), "from_address");
        assert_eq!(strip_suffix("owner_fk", &suffixes()), "owner");
        assert_eq!(strip_suffix("managerId", &suffixes()), "manager");
        assert_eq!(strip_suffix("ADDRESS_ID", &suffixes()), "ADDRESS");
    }

    #[test]
    fn strip_leaves_unmatched_names() {
        assert_eq!(strip_suffix("author", &suffixes()), "author");
        assert_eq!(strip_suffix("id", &suffixes()), "id");
        assert_eq!(strip_suffix("author_id", &[]), "author_id");
    }

    #[test]
    fn english_plural_of_compound_name() {
        let name = Name::new("ShipmentItem");
        assert_eq!(plural(&English, &name).upper_camel_case(), "ShipmentItems");
        assert_eq!(plural(&English, &Name::new("Address")).camel_case(), "addresses");
    }
}
