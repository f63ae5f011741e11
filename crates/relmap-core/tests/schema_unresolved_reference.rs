use relmap_core::schema::def::*;
use relmap_core::Schema;
use std_util::{assert_err, assert_ok, assert_some};

fn author() -> TableDef {
    TableDef::new("author")
        .column(ColumnDef::id("id"))
        .column(ColumnDef::new("name", "VARCHAR").length(255))
}

fn book(foreign_key: ForeignKeyDef) -> TableDef {
    TableDef::new("book")
        .column(ColumnDef::id("id"))
        .column(ColumnDef::new("author_id", "INT").not_null())
        .foreign_key(foreign_key)
}

/// Builds the schema and returns the single unresolved reference recorded on
/// `book`.
fn unresolved_on_book(def: &SchemaDef) -> relmap_core::Error {
    let schema = assert_ok!(Schema::from_defs(def));
    assert_eq!(schema.foreign_keys().len(), 0);

    let book = assert_some!(schema.table_by_name("book"));
    assert!(book.has_unresolved_references());
    assert_eq!(book.unresolved.len(), 1);
    assert!(book.foreign_keys.is_empty());

    book.unresolved[0].clone()
}

fn assert_unresolved(err: &relmap_core::Error, target: &str) {
    assert!(err.is_unresolved_reference(), "unexpected error: {err}");
    assert!(!err.is_recoverable());
    assert_eq!(err.unresolved_source(), Some(("book", "author_id")));

    let msg = err.to_string();
    assert!(msg.contains(target), "error should mention `{target}`, got: {msg}");
}

#[test]
fn referenced_table_missing() {
    let def = SchemaDef::new().table(book(ForeignKeyDef::new(
        "fk_book_author",
        "author_id",
        "writer",
        "id",
    )));

    let err = unresolved_on_book(&def);
    assert_unresolved(&err, "writer");
}

#[test]
fn referenced_column_missing() {
    let def = SchemaDef::new()
        .table(author())
        .table(book(ForeignKeyDef::new(
            "fk_book_author",
            "author_id",
            "author",
            "uid",
        )));

    let err = unresolved_on_book(&def);
    assert_unresolved(&err, "author.uid");
}

#[test]
fn local_column_missing() {
    let def = SchemaDef::new().table(author()).table(
        TableDef::new("book")
            .column(ColumnDef::id("id"))
            .foreign_key(ForeignKeyDef::new("fk_book_author", "author_id", "author", "id")),
    );

    let err = unresolved_on_book(&def);
    assert!(err.is_unresolved_reference());
    assert_eq!(err.unresolved_source(), Some(("book", "author_id")));
    assert_eq!(
        err.to_string(),
        "unresolved reference: column `book.author_id` does not exist"
    );
}

#[test]
fn unresolved_reference_affects_only_its_table() {
    let def = SchemaDef::new()
        .table(author())
        .table(book(ForeignKeyDef::new("fk_book_author", "author_id", "author", "id")))
        .table(
            TableDef::new("orphan")
                .column(ColumnDef::id("id"))
                .column(ColumnDef::new("ghost_id", "INT"))
                .foreign_key(ForeignKeyDef::new("fk_orphan_ghost", "ghost_id", "ghost", "id")),
        );

    let schema = assert_ok!(Schema::from_defs(&def));
    assert_eq!(schema.foreign_keys().len(), 1);

    let orphan = assert_some!(schema.table_by_name("orphan"));
    assert!(orphan.has_unresolved_references());
    assert_eq!(orphan.columns[1].local, None);

    for name in ["author", "book"] {
        let table = assert_some!(schema.table_by_name(name));
        assert!(!table.has_unresolved_references());
    }
    assert!(schema.diagnostics().is_empty());
}

#[test]
fn referenced_column_must_be_a_key() {
    let def = SchemaDef::new()
        .table(author())
        .table(book(ForeignKeyDef::new(
            "fk_book_author",
            "author_id",
            "author",
            "name",
        )));

    let err = assert_err!(Schema::from_defs(&def));
    assert!(err.is_invalid_schema(), "unexpected error: {err}");
    assert!(err.to_string().contains("neither a primary key nor unique"));
}

#[test]
fn duplicate_table() {
    let def = SchemaDef::new().table(author()).table(author());

    let err = assert_err!(Schema::from_defs(&def));
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: table `author` is defined more than once"
    );
}

#[test]
fn column_with_two_foreign_keys() {
    let def = SchemaDef::new().table(author()).table(
        book(ForeignKeyDef::new("fk_book_author", "author_id", "author", "id")).foreign_key(
            ForeignKeyDef::new("fk_book_author_again", "author_id", "author", "id"),
        ),
    );

    let err = assert_err!(Schema::from_defs(&def));
    assert!(err.is_invalid_schema());
    assert!(err.to_string().contains("more than one foreign key"));
}
