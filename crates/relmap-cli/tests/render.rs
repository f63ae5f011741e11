use pretty_assertions::assert_eq;
use relmap::Config;
use relmap_cli::generate::render;
use std_util::{assert_err, assert_ok};

const SCHEMA: &str = r#"{
    "tables": [
        {
            "name": "author",
            "columns": [
                { "name": "id", "type": "INT", "primary_key": true, "not_null": true, "auto_increment": true },
                { "name": "name", "type": "VARCHAR", "length": 255 }
            ]
        },
        {
            "name": "book",
            "columns": [
                { "name": "id", "type": "INT", "primary_key": true, "not_null": true },
                { "name": "author_id", "type": "INT", "not_null": true }
            ],
            "foreign_keys": [
                {
                    "name": "fk_book_author",
                    "column": "author_id",
                    "references": { "table": "author", "column": "id" },
                    "on_delete": "CASCADE",
                    "comment": "{d:fetch}LAZY{/d:fetch}"
                }
            ]
        }
    ]
}"#;

#[test]
fn renders_every_table() {
    let entities = assert_ok!(render(SCHEMA, &Config::default(), &[]));

    let names: Vec<_> = entities.iter().map(|entity| entity.name.as_str()).collect();
    assert_eq!(names, ["Author", "Book"]);

    let books = entities[0].association("books").map(|books| books.mapped_by());
    assert_eq!(books, Some(Some("author")));
}

#[test]
fn renders_selected_tables() {
    let entities = assert_ok!(render(SCHEMA, &Config::default(), &["book".to_string()]));

    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].name, "Book");
}

#[test]
fn unknown_table_is_an_error() {
    let err = assert_err!(render(SCHEMA, &Config::default(), &["shelf".to_string()]));
    assert_eq!(err.to_string(), "table `shelf` does not exist");
}

#[test]
fn malformed_schema_is_an_error() {
    let err = assert_err!(render("{ \"tables\": 3 }", &Config::default(), &[]));
    assert_eq!(err.to_string(), "failed to parse schema");
}

#[test]
fn unresolved_reference_is_reported() {
    let source = SCHEMA.replace(r#""table": "author""#, r#""table": "writer""#);

    let err = assert_err!(render(&source, &Config::default(), &[]));
    assert_eq!(
        err.to_string(),
        "failed to generate entity for table `book`: unresolved reference: \
         `book.author_id` references `writer`, which does not exist"
    );

    let err = assert_err!(render(&source, &Config::default(), &["book".to_string()]));
    assert_eq!(
        err.to_string(),
        "unresolved reference: `book.author_id` references `writer`, which does not exist"
    );
}

#[test]
fn unresolved_reference_leaves_other_tables() {
    let source = SCHEMA.replace(r#""table": "author""#, r#""table": "writer""#);

    let entities = assert_ok!(render(&source, &Config::default(), &["author".to_string()]));
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].name, "Author");
    assert!(entities[0].associations.is_empty());
}
