use serde::{Deserialize, Serialize};

/// Options controlling entity generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generated accessors are meant to be overridden in hand-written
    /// subclasses. Fields become `protected` and accessors overridable.
    pub generate_base_classes: bool,

    /// Class instantiated for collection fields in constructors
    pub collection_implementation_name: String,

    /// Type returned by collection getters
    pub collection_interface_name: String,

    /// Quote physical column names with back-ticks
    pub quote_identifiers: bool,

    /// Suffixes stripped from a foreign key column name to derive a relation
    /// tag. The first matching suffix wins.
    pub strip_suffixes: Vec<String>,

    /// Namespace entities are generated in
    pub namespace: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generate_base_classes: false,
            collection_implementation_name: "ArrayCollection".to_string(),
            collection_interface_name: "Collection".to_string(),
            quote_identifiers: false,
            strip_suffixes: vec!["_id".to_string(), "_fk".to_string(), "id".to_string()],
            namespace: None,
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_base_classes(mut self, value: bool) -> Self {
        self.generate_base_classes = value;
        self
    }

    pub fn collection_implementation_name(mut self, name: impl Into<String>) -> Self {
        self.collection_implementation_name = name.into();
        self
    }

    pub fn collection_interface_name(mut self, name: impl Into<String>) -> Self {
        self.collection_interface_name = name.into();
        self
    }

    pub fn quote_identifiers(mut self, value: bool) -> Self {
        self.quote_identifiers = value;
        self
    }

    /// Replace the suffixes stripped when deriving relation tags
    pub fn strip_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strip_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Qualifies a model name with the configured namespace.
    pub(crate) fn qualify(&self, model: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}\\{model}"),
            None => model.to_string(),
        }
    }
}
