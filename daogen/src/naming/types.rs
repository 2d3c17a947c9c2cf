//! Semantic types of generated fields

use crate::config::DateTimeBinding;
use crate::schema::SqlType;

/// Scala-side type a column maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    /// `Byte`
    Byte,
    /// `Short`
    Short,
    /// `Int`
    Int,
    /// `Long`
    Long,
    /// `Float`
    Float,
    /// `Double`
    Double,
    /// `BigDecimal`
    BigDecimal,
    /// `String`
    String,
    /// `Boolean`
    Boolean,
    /// `Any`, for types without a dedicated binder
    Any,
    /// `Array[Any]`
    AnyArray,
    /// `Array[Byte]`
    ByteArray,
    /// `LocalDate`
    LocalDate,
    /// `LocalTime`
    LocalTime,
    /// Timestamp: `DateTime` or `ZonedDateTime` depending on the binding
    DateTime,
    /// `java.sql.Blob`
    Blob,
    /// `java.sql.Clob`
    Clob,
    /// `java.sql.NClob`
    NClob,
    /// `java.sql.Ref`
    Ref,
    /// `java.sql.Struct`
    Struct,
    /// `java.sql.SQLXML`
    SqlXml,
}

impl From<SqlType> for SemanticType {
    fn from(sql_type: SqlType) -> Self {
        match sql_type {
            SqlType::Array => Self::AnyArray,
            SqlType::BigInt => Self::Long,
            SqlType::Binary | SqlType::VarBinary | SqlType::LongVarBinary => Self::ByteArray,
            SqlType::Bit | SqlType::Boolean => Self::Boolean,
            SqlType::Blob => Self::Blob,
            SqlType::Char
            | SqlType::VarChar
            | SqlType::LongVarChar
            | SqlType::NChar
            | SqlType::NVarChar
            | SqlType::LongNVarChar => Self::String,
            SqlType::Clob => Self::Clob,
            SqlType::NClob => Self::NClob,
            SqlType::Datalink
            | SqlType::Distinct
            | SqlType::JavaObject
            | SqlType::Null
            | SqlType::Other => Self::Any,
            SqlType::Date => Self::LocalDate,
            SqlType::Decimal | SqlType::Numeric => Self::BigDecimal,
            SqlType::Double | SqlType::Float => Self::Double,
            SqlType::Integer => Self::Int,
            SqlType::Real => Self::Float,
            SqlType::Ref => Self::Ref,
            SqlType::SmallInt => Self::Short,
            SqlType::SqlXml => Self::SqlXml,
            SqlType::Struct => Self::Struct,
            SqlType::Time | SqlType::TimeWithTimezone => Self::LocalTime,
            SqlType::Timestamp | SqlType::TimestampWithTimezone => Self::DateTime,
            SqlType::TinyInt => Self::Byte,
        }
    }
}

impl SemanticType {
    /// Type name as written in generated code
    #[must_use]
    pub const fn type_name(self, binding: DateTimeBinding) -> &'static str {
        match self {
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::BigDecimal => "BigDecimal",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Any => "Any",
            Self::AnyArray => "Array[Any]",
            Self::ByteArray => "Array[Byte]",
            Self::LocalDate => "LocalDate",
            Self::LocalTime => "LocalTime",
            Self::DateTime => match binding {
                DateTimeBinding::JodaTime => "DateTime",
                DateTimeBinding::JavaTime => "ZonedDateTime",
            },
            Self::Blob => "Blob",
            Self::Clob => "Clob",
            Self::NClob => "NClob",
            Self::Ref => "Ref",
            Self::Struct => "Struct",
            Self::SqlXml => "SQLXML",
        }
    }

    /// Belongs to the date/time library import block
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::LocalDate | Self::LocalTime | Self::DateTime)
    }

    /// Raw `java.sql` object type
    #[must_use]
    pub const fn is_sql_object(self) -> bool {
        matches!(
            self,
            Self::Blob | Self::Clob | Self::NClob | Self::Ref | Self::Struct | Self::SqlXml
        )
    }

    /// Read with `rs.any` rather than a typed binder
    #[must_use]
    pub const fn is_any(self) -> bool {
        matches!(self, Self::Any)
    }

    /// Representative non-null value used in generated tests
    #[must_use]
    pub const fn literal(self, binding: DateTimeBinding) -> &'static str {
        match self {
            Self::Long => "1L",
            Self::Int | Self::Short => "123",
            Self::Byte => "1",
            Self::Boolean => "false",
            Self::String => "\"MyString\"",
            Self::Double => "0.1D",
            Self::Float => "0.1F",
            Self::BigDecimal => "new java.math.BigDecimal(\"1\")",
            Self::ByteArray => "Array[Byte]()",
            Self::AnyArray => "Array[Any]()",
            Self::LocalDate => "LocalDate.now",
            Self::LocalTime => "LocalTime.now",
            Self::DateTime => match binding {
                DateTimeBinding::JodaTime => "DateTime.now",
                DateTimeBinding::JavaTime => "ZonedDateTime.now",
            },
            Self::Any
            | Self::Blob
            | Self::Clob
            | Self::NClob
            | Self::Ref
            | Self::Struct
            | Self::SqlXml => "null",
        }
    }

    /// Narrow the `Long` generated key to this type
    #[must_use]
    pub fn generated_key_coercion(self) -> String {
        match self {
            Self::Byte => "generatedKey.toByte".to_string(),
            Self::Int => "generatedKey.toInt".to_string(),
            Self::Short => "generatedKey.toShort".to_string(),
            Self::Float => "generatedKey.toFloat".to_string(),
            Self::Double => "generatedKey.toDouble".to_string(),
            Self::String => "generatedKey.toString".to_string(),
            Self::BigDecimal => "BigDecimal.valueOf(generatedKey)".to_string(),
            _ => "generatedKey".to_string(),
        }
    }
}
