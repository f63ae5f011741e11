//! Column type translation.
//!
//! A [`TypeConverter`] maps a column's semantic type to the mapped storage
//! type written in column attributes, and the mapped type to the native
//! type of the generated field.

use relmap_core::schema::Column;

pub trait TypeConverter {
    /// Storage type of the column, e.g. `string` for a `VARCHAR` column.
    fn mapped_type(&self, column: &Column) -> String;

    /// Native field type for a mapped type, e.g. `integer` for `bigint`.
    fn native_type(&self, mapped: &str) -> String;
}

/// Native field types the generator knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    Array,
    Boolean,
    Integer,
    String,
    Float,
    Object,
    DateTime,
    Other,
}

impl NativeType {
    pub fn parse(native: &str) -> Self {
        match native.trim().to_ascii_lowercase().as_str() {
            "array" => Self::Array,
            "boolean" | "bool" => Self::Boolean,
            "integer" | "int" => Self::Integer,
            "string" => Self::String,
            "float" | "double" => Self::Float,
            "object" => Self::Object,
            "datetime" => Self::DateTime,
            _ => Self::Other,
        }
    }
}

/// Built-in converter for common MySQL column types.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlTypes;

impl TypeConverter for MysqlTypes {
    fn mapped_type(&self, column: &Column) -> String {
        let ty = column.ty.trim().to_ascii_uppercase();

        let mapped = match ty.as_str() {
            "TINYINT" if column.length() == Some(1) => "boolean",
            "BOOL" | "BOOLEAN" => "boolean",
            "TINYINT" | "SMALLINT" | "YEAR" => "smallint",
            "MEDIUMINT" | "INT" | "INTEGER" => "integer",
            "BIGINT" => "bigint",
            "DECIMAL" | "NUMERIC" | "DEC" | "FIXED" => "decimal",
            "FLOAT" | "DOUBLE" | "DOUBLE PRECISION" | "REAL" => "float",
            "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" => "text",
            "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" | "BINARY" | "VARBINARY" => "blob",
            "DATE" => "date",
            "DATETIME" | "TIMESTAMP" => "datetime",
            "TIME" => "time",
            "JSON" => "json",
            _ => "string",
        };

        mapped.to_string()
    }

    fn native_type(&self, mapped: &str) -> String {
        let native = match mapped {
            "smallint" | "integer" | "bigint" => "integer",
            "decimal" | "float" => "float",
            "boolean" => "boolean",
            "date" | "datetime" | "time" => "datetime",
            "json" | "array" | "simple_array" => "array",
            "object" => "object",
            _ => "string",
        };

        native.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_type_names() {
        assert_eq!(NativeType::parse("integer"), NativeType::Integer);
        assert_eq!(NativeType::parse("Boolean"), NativeType::Boolean);
        assert_eq!(NativeType::parse("datetime"), NativeType::DateTime);
        assert_eq!(NativeType::parse("resource"), NativeType::Other);
    }

    #[test]
    fn mysql_native_types() {
        let types = MysqlTypes;
        assert_eq!(types.native_type("bigint"), "integer");
        assert_eq!(types.native_type("decimal"), "float");
        assert_eq!(types.native_type("text"), "string");
        assert_eq!(types.native_type("json"), "array");
        assert_eq!(types.native_type("datetime"), "datetime");
    }
}
