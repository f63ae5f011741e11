use pretty_assertions::assert_eq;
use relmap::schema::def::*;
use relmap::schema::TableId;
use relmap::{column_attributes, Attributes, Config, MysqlTypes, Schema, Value};
use std_util::assert_ok;

fn attributes(column: ColumnDef, config: &Config) -> Attributes {
    let def = SchemaDef::new().table(TableDef::new("item").column(column));
    let schema = assert_ok!(Schema::from_defs(&def));
    column_attributes(schema.column(TableId(0).column(0)), &MysqlTypes, config)
}

fn keys(attrs: &Attributes) -> Vec<&str> {
    attrs.keys().collect()
}

#[test]
fn varchar_with_length() {
    let attrs = attributes(
        ColumnDef::new("title", "VARCHAR").length(255).not_null(),
        &Config::default(),
    );

    assert_eq!(keys(&attrs), ["name", "type", "length", "nullable"]);
    assert_eq!(attrs.get("name"), Some(&Value::from("title")));
    assert_eq!(attrs.get("type"), Some(&Value::from("string")));
    assert_eq!(attrs.get("length"), Some(&Value::I64(255)));
    assert_eq!(attrs.get("nullable"), Some(&Value::Bool(false)));
}

#[test]
fn decimal_with_options() {
    let attrs = attributes(
        ColumnDef::new("price", "DECIMAL")
            .precision(10, 2)
            .unsigned()
            .comment("net price {d:ignored}x{/d:ignored}"),
        &Config::default(),
    );

    assert_eq!(
        keys(&attrs),
        ["name", "type", "precision", "scale", "nullable", "options"]
    );
    assert_eq!(attrs.get("type"), Some(&Value::from("decimal")));
    assert_eq!(attrs.get("precision"), Some(&Value::I64(10)));
    assert_eq!(attrs.get("scale"), Some(&Value::I64(2)));
    assert_eq!(attrs.get("nullable"), Some(&Value::Bool(true)));

    let options = attrs.get("options").and_then(Value::as_map);
    let expected = Attributes::from_iter([
        ("unsigned", Value::Bool(true)),
        ("comment", Value::from("net price")),
    ]);
    assert_eq!(options, Some(&expected));
}

#[test]
fn unset_parameters_are_omitted() {
    let attrs = attributes(
        ColumnDef::new("code", "CHAR").length(-1).precision(-1, -1).unique(),
        &Config::default(),
    );

    assert_eq!(keys(&attrs), ["name", "type", "unique", "nullable"]);
    assert_eq!(attrs.get("unique"), Some(&Value::Bool(true)));
}

#[test]
fn precision_without_scale_is_omitted() {
    let attrs = attributes(
        ColumnDef::new("ratio", "DECIMAL").precision(8, 0),
        &Config::default(),
    );

    assert!(!attrs.contains_key("precision"));
    assert!(!attrs.contains_key("scale"));
}

#[test]
fn quoted_identifiers() {
    let attrs = attributes(
        ColumnDef::new("order", "INT"),
        &Config::new().quote_identifiers(true),
    );

    assert_eq!(attrs.get("name"), Some(&Value::from("`order`")));
    assert_eq!(attrs.get("type"), Some(&Value::from("integer")));
}

#[test]
fn tinyint_one_is_boolean() {
    let attrs = attributes(ColumnDef::new("active", "TINYINT").length(1), &Config::default());
    assert_eq!(attrs.get("type"), Some(&Value::from("boolean")));

    let attrs = attributes(ColumnDef::new("rank", "TINYINT").length(4), &Config::default());
    assert_eq!(attrs.get("type"), Some(&Value::from("smallint")));
}

#[test]
fn nullable_is_always_present() {
    for not_null in [false, true] {
        let mut column = ColumnDef::new("value", "TEXT");
        column.not_null = not_null;

        let attrs = attributes(column, &Config::default());
        assert_eq!(attrs.get("nullable"), Some(&Value::Bool(!not_null)));
    }
}
