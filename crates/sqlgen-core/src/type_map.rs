use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Semantic type key that extractors substitute for every enum-typed field.
///
/// Enum types are never looked up by their concrete name.
pub const ENUM_SENTINEL_TYPE: &str = "java.util.Enumeration";

/// SQL column type rendered into `CREATE TABLE` statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnTypeTag {
    BigInt,
    Int,
    SmallInt,
    TinyInt,
    Bit,
    Double,
    Float,
    Decimal,
    Varchar,
    Json,
}

impl ColumnTypeTag {
    /// SQL keyword for this tag.
    pub fn keyword(self) -> &'static str {
        match self {
            ColumnTypeTag::BigInt => "BIGINT",
            ColumnTypeTag::Int => "INT",
            ColumnTypeTag::SmallInt => "SMALLINT",
            ColumnTypeTag::TinyInt => "TINYINT",
            ColumnTypeTag::Bit => "BIT",
            ColumnTypeTag::Double => "DOUBLE",
            ColumnTypeTag::Float => "FLOAT",
            ColumnTypeTag::Decimal => "DECIMAL",
            ColumnTypeTag::Varchar => "VARCHAR",
            ColumnTypeTag::Json => "JSON",
        }
    }

    /// Leading digit count for fractional types: `FLOAT(10,p)`,
    /// `DOUBLE(20,p)`, `DECIMAL(20,p)`. Not configurable.
    pub fn numeric_width(self) -> Option<u8> {
        match self {
            ColumnTypeTag::Float => Some(10),
            ColumnTypeTag::Double | ColumnTypeTag::Decimal => Some(20),
            _ => None,
        }
    }

    /// Returns true when the rendered type carries a length, i.e. `VARCHAR(n)`.
    pub fn has_length(self) -> bool {
        matches!(self, ColumnTypeTag::Varchar)
    }
}

impl fmt::Display for ColumnTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Map a semantic type name (primitive keyword or fully-qualified class name)
/// to its SQL column type.
///
/// Matching is exact and case-sensitive. Unknown names map to
/// [`ColumnTypeTag::Json`]. Date and time types are stored as epoch values,
/// hence `BIGINT`.
pub fn map_semantic_type(semantic_type: &str) -> ColumnTypeTag {
    match semantic_type {
        "long" | "java.lang.Long" => ColumnTypeTag::BigInt,
        "int" | "java.lang.Integer" => ColumnTypeTag::Int,
        "short" | "java.lang.Short" => ColumnTypeTag::SmallInt,
        "byte" | "java.lang.Byte" => ColumnTypeTag::TinyInt,
        "boolean" | "java.lang.Boolean" => ColumnTypeTag::Bit,
        "double" | "java.lang.Double" => ColumnTypeTag::Double,
        "float" | "java.lang.Float" => ColumnTypeTag::Float,
        "char" | "java.lang.Character" => ColumnTypeTag::Varchar,

        "java.lang.String" => ColumnTypeTag::Varchar,
        "java.math.BigDecimal" => ColumnTypeTag::Decimal,
        "java.util.Date" | "java.time.LocalDateTime" | "java.time.LocalDate" => {
            ColumnTypeTag::BigInt
        }

        ENUM_SENTINEL_TYPE => ColumnTypeTag::TinyInt,

        _ => ColumnTypeTag::Json,
    }
}

/// Returns true for the primitive keywords the type mapper understands.
///
/// Extractors use this to tell primitives apart from class references.
pub fn is_primitive_keyword(name: &str) -> bool {
    matches!(
        name,
        "long" | "int" | "short" | "byte" | "boolean" | "double" | "float" | "char"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("long", ColumnTypeTag::BigInt)]
    #[case("java.lang.Long", ColumnTypeTag::BigInt)]
    #[case("int", ColumnTypeTag::Int)]
    #[case("java.lang.Integer", ColumnTypeTag::Int)]
    #[case("short", ColumnTypeTag::SmallInt)]
    #[case("java.lang.Short", ColumnTypeTag::SmallInt)]
    #[case("byte", ColumnTypeTag::TinyInt)]
    #[case("java.lang.Byte", ColumnTypeTag::TinyInt)]
    #[case("boolean", ColumnTypeTag::Bit)]
    #[case("java.lang.Boolean", ColumnTypeTag::Bit)]
    #[case("double", ColumnTypeTag::Double)]
    #[case("java.lang.Double", ColumnTypeTag::Double)]
    #[case("float", ColumnTypeTag::Float)]
    #[case("java.lang.Float", ColumnTypeTag::Float)]
    #[case("char", ColumnTypeTag::Varchar)]
    #[case("java.lang.Character", ColumnTypeTag::Varchar)]
    #[case("java.lang.String", ColumnTypeTag::Varchar)]
    #[case("java.math.BigDecimal", ColumnTypeTag::Decimal)]
    #[case("java.util.Date", ColumnTypeTag::BigInt)]
    #[case("java.time.LocalDateTime", ColumnTypeTag::BigInt)]
    #[case("java.time.LocalDate", ColumnTypeTag::BigInt)]
    #[case(ENUM_SENTINEL_TYPE, ColumnTypeTag::TinyInt)]
    fn test_map_known_types(#[case] key: &str, #[case] expected: ColumnTypeTag) {
        assert_eq!(map_semantic_type(key), expected);
    }

    #[rstest]
    #[case("java.util.List")]
    #[case("com.acme.Address")]
    #[case("Long")]
    #[case("String")]
    #[case("LONG")]
    #[case("")]
    fn test_map_unknown_falls_back_to_json(#[case] key: &str) {
        assert_eq!(map_semantic_type(key), ColumnTypeTag::Json);
    }

    #[test]
    fn test_numeric_width() {
        assert_eq!(ColumnTypeTag::Float.numeric_width(), Some(10));
        assert_eq!(ColumnTypeTag::Double.numeric_width(), Some(20));
        assert_eq!(ColumnTypeTag::Decimal.numeric_width(), Some(20));
        assert_eq!(ColumnTypeTag::BigInt.numeric_width(), None);
        assert_eq!(ColumnTypeTag::Varchar.numeric_width(), None);
    }

    #[test]
    fn test_display_is_keyword() {
        assert_eq!(ColumnTypeTag::BigInt.to_string(), "BIGINT");
        assert_eq!(ColumnTypeTag::SmallInt.to_string(), "SMALLINT");
        assert_eq!(ColumnTypeTag::Varchar.to_string(), "VARCHAR");
        assert_eq!(ColumnTypeTag::Json.to_string(), "JSON");
    }

    #[test]
    fn test_serde_uses_keyword() {
        let json = serde_json::to_string(&ColumnTypeTag::TinyInt).unwrap();
        assert_eq!(json, "\"TINYINT\"");
        let tag: ColumnTypeTag = serde_json::from_str("\"DECIMAL\"").unwrap();
        assert_eq!(tag, ColumnTypeTag::Decimal);
    }

    #[test]
    fn test_is_primitive_keyword() {
        assert!(is_primitive_keyword("long"));
        assert!(is_primitive_keyword("char"));
        assert!(!is_primitive_keyword("java.lang.Long"));
        assert!(!is_primitive_keyword("void"));
    }
}
