use relmap_core::schema::def::*;
use relmap_core::schema::{Cascade, CascadeOp, DeleteRule, Directives, Fetch};
use relmap_core::Schema;
use std_util::{assert_ok, assert_some};

fn schema(comment: &str, on_delete: Option<&str>) -> Schema {
    let mut fk = ForeignKeyDef::new("fk_book_author", "author_id", "author", "id").comment(comment);
    if let Some(rule) = on_delete {
        fk = fk.on_delete(rule);
    }

    let def = SchemaDef::new()
        .table(TableDef::new("author").column(ColumnDef::id("id")))
        .table(
            TableDef::new("book")
                .column(ColumnDef::id("id"))
                .column(ColumnDef::new("author_id", "INT"))
                .foreign_key(fk),
        );

    assert_ok!(Schema::from_defs(&def))
}

fn directives(schema: &Schema) -> &Directives {
    &assert_some!(schema.foreign_keys().next()).directives
}

#[test]
fn no_comment_means_defaults() {
    let schema = schema("", None);

    assert_eq!(directives(&schema), &Directives::default());
    assert!(schema.diagnostics().is_empty());
}

#[test]
fn all_directives_parsed() {
    let schema = schema(
        "{d:unidirectional}TRUE{/d:unidirectional}\
         {d:cascade}persist, Remove{/d:cascade}\
         {d:fetch}extra_lazy{/d:fetch}\
         {d:orphanRemoval}false{/d:orphanRemoval}\
         {d:name}writer{/d:name}",
        Some("SET NULL"),
    );

    assert_eq!(
        directives(&schema),
        &Directives {
            unidirectional: true,
            cascade: Some(Cascade::new([CascadeOp::Persist, CascadeOp::Remove])),
            fetch: Some(Fetch::ExtraLazy),
            orphan_removal: Some(false),
            name: Some("writer".to_string()),
            owning_side: false,
        }
    );

    let fk = assert_some!(schema.foreign_keys().next());
    assert_eq!(fk.on_delete, Some(DeleteRule::SetNull));
    assert!(schema.diagnostics().is_empty());
}

#[test]
fn unknown_values_become_recoverable_diagnostics() {
    let schema = schema(
        "{d:cascade}persist, explode{/d:cascade}\
         {d:fetch}sometimes{/d:fetch}\
         {d:orphanRemoval}yes{/d:orphanRemoval}",
        Some("DETONATE"),
    );

    let directives = directives(&schema);
    assert_eq!(directives.cascade, Some(Cascade::new([CascadeOp::Persist])));
    assert_eq!(directives.fetch, None);
    assert_eq!(directives.orphan_removal, None);
    assert_eq!(assert_some!(schema.foreign_keys().next()).on_delete, None);

    let diagnostics = schema.diagnostics();
    assert_eq!(diagnostics.len(), 4);
    assert!(diagnostics.iter().all(|err| err.is_recoverable()));
    assert!(diagnostics[0].to_string().contains("`explode`"));
    assert!(diagnostics[0].to_string().contains("foreign key `fk_book_author`"));
}

#[test]
fn cascade_of_only_unknown_keywords_is_none() {
    let schema = schema("{d:cascade}nothing{/d:cascade}", None);

    assert_eq!(directives(&schema).cascade, None);
    assert_eq!(schema.diagnostics().len(), 1);
}

#[test]
fn cascade_all_is_kept_once() {
    let schema = schema("{d:cascade}all, ALL{/d:cascade}", Some("no action"));

    let cascade = assert_some!(directives(&schema).cascade.as_ref());
    assert!(cascade.is_all());
    assert_eq!(cascade.ops(), [CascadeOp::All]);

    let fk = assert_some!(schema.foreign_keys().next());
    assert_eq!(fk.on_delete, Some(DeleteRule::NoAction));
}

#[test]
fn unknown_directive_keys_are_ignored() {
    let schema = schema("{d:color}blue{/d:color}", None);

    assert_eq!(directives(&schema), &Directives::default());
    assert!(schema.diagnostics().is_empty());
}

#[test]
fn skip_table_directive() {
    let def = SchemaDef::new().table(
        TableDef::new("audit_log")
            .comment("{d:skip}true{/d:skip}")
            .column(ColumnDef::id("id")),
    );
    let schema = assert_ok!(Schema::from_defs(&def));

    assert!(assert_some!(schema.table_by_name("audit_log")).is_skipped());
}
