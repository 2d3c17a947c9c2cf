//! Naming and type mapping
//!
//! Turns wire names and JDBC types into what generated code refers to:
//! identifiers, type expressions and test literals. Every function here is
//! pure and total over its input.
//!
//! # Example
//!
//! ```
//! use daogen::config::DateTimeBinding;
//! use daogen::naming::TypeMapper;
//! use daogen::schema::{Column, SqlType};
//!
//! let mapper = TypeMapper::new(DateTimeBinding::JavaTime);
//! let mapped = mapper.map_column(&Column::nullable("birth_day", SqlType::Date));
//!
//! assert_eq!(mapped.identifier, "birthDay");
//! assert_eq!(mapped.type_expression, "Option[LocalDate]");
//! assert!(mapped.is_temporal);
//! ```

mod helpers;
mod types;

pub use helpers::NameHelpers;
pub use types::SemanticType;

use crate::config::DateTimeBinding;
use crate::schema::Column;

/// A column as generated code sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedColumn {
    /// Wire name
    pub name: String,
    /// Identifier in generated code, backtick-quoted when needed
    pub identifier: String,
    /// Semantic type
    pub semantic: SemanticType,
    /// Type name without the `Option` wrapper
    pub raw_type: &'static str,
    /// Declared type, `Option[T]` when nullable
    pub type_expression: String,
    /// Whether the column accepts NULL
    pub nullable: bool,
    /// Pulls in the date/time import block
    pub is_temporal: bool,
    /// Pulls in `java.sql` imports
    pub is_opaque_sql_type: bool,
    /// Representative non-null value
    pub literal: &'static str,
}

impl MappedColumn {
    /// Constructor parameter, with `= None` for nullable columns
    #[must_use]
    pub fn parameter(&self) -> String {
        if self.nullable {
            format!("{}: {} = None", self.identifier, self.type_expression)
        } else {
            format!("{}: {}", self.identifier, self.type_expression)
        }
    }

    /// Parameter without a default value
    #[must_use]
    pub fn bare_parameter(&self) -> String {
        format!("{}: {}", self.identifier, self.type_expression)
    }

    /// Value assigned from the generated key of an insert
    #[must_use]
    pub fn generated_key_value(&self) -> String {
        let coerced = self.semantic.generated_key_coercion();
        if self.nullable {
            format!("Some({coerced})")
        } else {
            coerced
        }
    }
}

/// Maps schema columns under a date/time binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapper {
    binding: DateTimeBinding,
}

impl TypeMapper {
    /// Create a mapper for `binding`
    #[must_use]
    pub const fn new(binding: DateTimeBinding) -> Self {
        Self { binding }
    }

    /// Map one column
    #[must_use]
    pub fn map_column(&self, column: &Column) -> MappedColumn {
        let semantic = SemanticType::from(column.sql_type);
        let raw_type = semantic.type_name(self.binding);
        let type_expression = if column.nullable {
            format!("Option[{raw_type}]")
        } else {
            raw_type.to_string()
        };

        MappedColumn {
            name: column.name.clone(),
            identifier: NameHelpers::column_identifier(&column.name),
            semantic,
            raw_type,
            type_expression,
            nullable: column.nullable,
            is_temporal: semantic.is_temporal(),
            is_opaque_sql_type: semantic.is_sql_object(),
            literal: semantic.literal(self.binding),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SqlType;

    #[test]
    fn test_map_not_null_column() {
        let mapper = TypeMapper::new(DateTimeBinding::JodaTime);
        let mapped = mapper.map_column(&Column::not_null("id", SqlType::BigInt));
        assert_eq!(mapped.identifier, "id");
        assert_eq!(mapped.type_expression, "Long");
        assert_eq!(mapped.literal, "1L");
        assert_eq!(mapped.parameter(), "id: Long");
        assert!(!mapped.is_temporal);
    }

    #[test]
    fn test_map_nullable_timestamp() {
        let mapper = TypeMapper::new(DateTimeBinding::JodaTime);
        let mapped = mapper.map_column(&Column::nullable("created_at", SqlType::Timestamp));
        assert_eq!(mapped.identifier, "createdAt");
        assert_eq!(mapped.type_expression, "Option[DateTime]");
        assert_eq!(mapped.parameter(), "createdAt: Option[DateTime] = None");
        assert_eq!(mapped.bare_parameter(), "createdAt: Option[DateTime]");
    }

    #[test]
    fn test_opaque_sql_type() {
        let mapper = TypeMapper::new(DateTimeBinding::JavaTime);
        let mapped = mapper.map_column(&Column::not_null("photo", SqlType::Blob));
        assert!(mapped.is_opaque_sql_type);
        assert_eq!(mapped.literal, "null");
    }

    #[test]
    fn test_nullable_generated_key_is_wrapped() {
        let mapper = TypeMapper::new(DateTimeBinding::JavaTime);
        let mapped = mapper.map_column(&Column::nullable("seq", SqlType::Integer));
        assert_eq!(mapped.generated_key_value(), "Some(generatedKey.toInt)");
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let mapper = TypeMapper::new(DateTimeBinding::JavaTime);
        let column = Column::nullable("type", SqlType::NVarChar);
        assert_eq!(mapper.map_column(&column), mapper.map_column(&column));
        assert_eq!(mapper.map_column(&column).identifier, "`type`");
    }
}
