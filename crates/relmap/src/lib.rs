//! Resolves a relational schema graph into object-relational mapping
//! metadata: per-column attribute records and, per foreign key, the
//! association kind, field names on both sides and association options.
//!
//! The output is a structural [`Entity`] description per table, meant to be
//! rendered by an external templating layer.

mod column;
pub use column::column_attributes;

mod config;
pub use config::Config;

mod default;
pub use default::coerce_default;

mod entity;
pub use entity::{
    Accessor, AccessorKind, Association, AssociationKind, CollectionInit, Entity, Param, Property,
    Side, Visibility,
};

mod generate;
pub use generate::Generator;

pub mod naming;
pub use naming::{English, Inflector};

pub mod options;

mod relation;
pub use relation::ResolvedRelation;

pub mod types;
pub use types::{MysqlTypes, NativeType, TypeConverter};

mod value;
pub use value::{Attributes, Value};

pub use relmap_core::{schema, Error, Result, Schema};
