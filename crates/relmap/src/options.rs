//! Association options derived from relation directives and the foreign key
//! definition.
//!
//! Every builder returns `None` when the option should not be emitted.

use crate::{Attributes, Value};

use relmap_core::schema::{Column, DeleteRule, Directives, ForeignKey, Schema};

/// `cascade` as a list of operation keywords. A cascade including `all`
/// collapses to `["all"]`.
pub fn cascade(directives: &Directives) -> Option<Value> {
    let cascade = directives.cascade.as_ref()?;

    if cascade.is_all() {
        return Some(Value::List(vec!["all".into()]));
    }

    Some(Value::List(
        cascade.ops().iter().map(|op| Value::from(op.as_str())).collect(),
    ))
}

pub fn fetch(directives: &Directives) -> Option<Value> {
    directives.fetch.map(|fetch| fetch.as_str().into())
}

pub fn orphan_removal(directives: &Directives) -> Option<Value> {
    directives.orphan_removal.map(Value::Bool)
}

/// `onDelete` value. `NO ACTION` is the default and is not emitted.
pub fn on_delete(rule: Option<DeleteRule>) -> Option<Value> {
    match rule? {
        DeleteRule::NoAction => None,
        rule => Some(rule.as_str().into()),
    }
}

/// Join column `nullable`: omitted for nullable columns, explicit `false`
/// otherwise.
pub fn join_nullable(column: &Column) -> Option<Value> {
    (!column.nullable).then_some(Value::Bool(false))
}

/// Join column description on the owning side of a relation:
/// `{name, referencedColumnName, onDelete?, nullable?}`.
pub fn join_column(schema: &Schema, foreign_key: &ForeignKey) -> Attributes {
    let local = foreign_key.local(schema);

    let mut attrs = Attributes::new();
    attrs.insert("name", local.name.as_str());
    attrs.insert("referencedColumnName", foreign_key.referenced(schema).name.as_str());
    attrs.insert_opt("onDelete", on_delete(foreign_key.on_delete));
    attrs.insert_opt("nullable", join_nullable(local));
    attrs
}
