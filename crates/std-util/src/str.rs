//! Case conversion and English inflection for identifiers.
//!
//! Inflection works on the last word of a snake_case name, so compound
//! names like `ShipmentItem` pluralize to `shipment_items` rather than
//! being treated as a single unknown word.

use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

pub fn upper_snake_case(src: &str) -> String {
    src.to_shouty_snake_case()
}

pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn upper_first(src: &str) -> String {
    let mut chars = src.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns the plural form of `src`, in snake_case.
pub fn pluralize(src: &str) -> String {
    inflect_last(src, |word| pluralizer::pluralize(word, 2, false))
}

/// Returns the singular form of `src`, in snake_case.
pub fn singularize(src: &str) -> String {
    inflect_last(src, |word| pluralizer::pluralize(word, 1, false))
}

fn inflect_last(src: &str, f: impl Fn(&str) -> String) -> String {
    let snake = snake_case(src);

    match snake.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", f(last)),
        None => f(&snake),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_conversions() {
        assert_eq!(snake_case("fromAddressId"), "from_address_id");
        assert_eq!(camel_case("from_address"), "fromAddress");
        assert_eq!(upper_camel_case("shipment_item"), "ShipmentItem");
        assert_eq!(upper_snake_case("ShipmentItem"), "SHIPMENT_ITEM");
        assert_eq!(upper_first("fromAddress"), "FromAddress");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn pluralize_last_word() {
        assert_eq!(pluralize("book"), "books");
        assert_eq!(pluralize("Address"), "addresses");
        assert_eq!(pluralize("ShipmentItem"), "shipment_items");
        assert_eq!(pluralize("person"), "people");
    }

    #[test]
    fn singularize_last_word() {
        assert_eq!(singularize("authors"), "author");
        assert_eq!(singularize("order_lines"), "order_line");
        assert_eq!(singularize("address"), "address");
    }
}
