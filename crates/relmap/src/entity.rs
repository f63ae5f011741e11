use crate::{Attributes, Value};

use serde::Serialize;

/// Structural description of the class generated for one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    /// Raw table name
    pub table: String,

    /// Entity class name
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Table comment with directives stripped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Scalar fields, one per mapped column
    pub properties: Vec<Property>,

    pub associations: Vec<Association>,

    /// Collection fields initialized by the constructor
    pub constructor: Vec<CollectionInit>,
}

/// A scalar field backed by a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Field name
    pub field: String,

    /// Native type of the field
    pub native_type: String,

    pub visibility: Visibility,

    /// True when the column is part of the primary key
    pub id: bool,

    /// Column mapping attributes
    pub column: Attributes,

    /// Generation strategy for auto-incremented columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_value: Option<Attributes>,

    /// Default literal, already coerced to the native type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    pub accessors: Vec<Accessor>,
}

/// A relation field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Association {
    /// Field name
    pub field: String,

    pub kind: AssociationKind,

    pub side: Side,

    /// Qualified name of the related entity
    pub target_entity: String,

    pub visibility: Visibility,

    /// Association attributes: `targetEntity`, `mappedBy` or `inversedBy`,
    /// and the cascade/fetch/orphanRemoval options.
    pub mapping: Attributes,

    /// Present on the owning side of to-one relations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_column: Option<Attributes>,

    /// Present on the owning side of many-to-many relations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_table: Option<Attributes>,

    pub accessors: Vec<Accessor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssociationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

/// Which end of a relation an association describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The side holding the foreign key (or, for many-to-many, the join table)
    Owning,

    /// The side pointed at, designated by `mappedBy`
    Inverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Protected,
}

/// A generated method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Accessor {
    pub kind: AccessorKind,

    /// Method name
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<Param>,

    /// Return type. Mutators return the entity itself.
    pub returns: String,

    /// Setter on the other side to call with `$this`, keeping a bidirectional
    /// one-to-one relation consistent in memory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_reference: Option<String>,

    /// Marked for override in generated subclasses
    pub overridable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    Getter,
    Setter,
    Adder,
    Remover,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,

    pub ty: String,

    /// The argument defaults to null
    pub optional: bool,
}

/// `$this->field = new Class();` in the constructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionInit {
    pub field: String,
    pub class: String,
}

impl Entity {
    pub fn property(&self, field: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.field == field)
    }

    pub fn association(&self, field: &str) -> Option<&Association> {
        self.associations.iter().find(|association| association.field == field)
    }

    /// All field names, scalar fields first.
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.properties
            .iter()
            .map(|property| property.field.as_str())
            .chain(self.associations.iter().map(|association| association.field.as_str()))
    }
}

impl Property {
    pub fn accessor(&self, kind: AccessorKind) -> Option<&Accessor> {
        self.accessors.iter().find(|accessor| accessor.kind == kind)
    }
}

impl Association {
    pub fn accessor(&self, kind: AccessorKind) -> Option<&Accessor> {
        self.accessors.iter().find(|accessor| accessor.kind == kind)
    }

    /// `mappedBy` designator, set on the inverse side.
    pub fn mapped_by(&self) -> Option<&str> {
        self.mapping.get("mappedBy").and_then(Value::as_str)
    }

    /// `inversedBy` designator, set on the owning side of a bidirectional
    /// relation.
    pub fn inversed_by(&self) -> Option<&str> {
        self.mapping.get("inversedBy").and_then(Value::as_str)
    }
}

impl Visibility {
    pub(crate) fn for_config(generate_base_classes: bool) -> Self {
        if generate_base_classes {
            Self::Protected
        } else {
            Self::Private
        }
    }
}
