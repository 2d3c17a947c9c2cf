//! JDBC type families
//!
//! Mirrors the constants of `java.sql.Types`. Schema files spell them the way
//! JDBC metadata reports them (`VARCHAR`, `BIGINT`, ...), case-insensitively.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// JDBC type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SqlType {
    /// `ARRAY`
    Array,
    /// `BIGINT`
    BigInt,
    /// `BINARY`
    Binary,
    /// `BIT`
    Bit,
    /// `BLOB`
    Blob,
    /// `BOOLEAN`
    Boolean,
    /// `CHAR`
    Char,
    /// `CLOB`
    Clob,
    /// `DATALINK`
    Datalink,
    /// `DATE`
    Date,
    /// `DECIMAL`
    Decimal,
    /// `DISTINCT`
    Distinct,
    /// `DOUBLE`
    Double,
    /// `FLOAT`
    Float,
    /// `INTEGER`
    Integer,
    /// `JAVA_OBJECT`
    JavaObject,
    /// `LONGNVARCHAR`
    LongNVarChar,
    /// `LONGVARBINARY`
    LongVarBinary,
    /// `LONGVARCHAR`
    LongVarChar,
    /// `NCHAR`
    NChar,
    /// `NCLOB`
    NClob,
    /// `NULL`
    Null,
    /// `NUMERIC`
    Numeric,
    /// `NVARCHAR`
    NVarChar,
    /// `OTHER`, also used for vendor types without a JDBC constant
    Other,
    /// `REAL`
    Real,
    /// `REF`
    Ref,
    /// `SMALLINT`
    SmallInt,
    /// `SQLXML`
    SqlXml,
    /// `STRUCT`
    Struct,
    /// `TIME`
    Time,
    /// `TIME_WITH_TIMEZONE`
    TimeWithTimezone,
    /// `TIMESTAMP`
    Timestamp,
    /// `TIMESTAMP_WITH_TIMEZONE`
    TimestampWithTimezone,
    /// `TINYINT`
    TinyInt,
    /// `VARBINARY`
    VarBinary,
    /// `VARCHAR`
    VarChar,
}

impl SqlType {
    /// Map a `java.sql.Types` integer code
    ///
    /// Codes without a counterpart (`ROWID`, `REF_CURSOR`, vendor codes) map
    /// to [`SqlType::Other`].
    ///
    /// ```
    /// use daogen::schema::SqlType;
    ///
    /// assert_eq!(SqlType::from_jdbc_code(12), SqlType::VarChar);
    /// assert_eq!(SqlType::from_jdbc_code(-5), SqlType::BigInt);
    /// assert_eq!(SqlType::from_jdbc_code(-8), SqlType::Other);
    /// ```
    #[must_use]
    pub const fn from_jdbc_code(code: i32) -> Self {
        match code {
            2003 => Self::Array,
            -5 => Self::BigInt,
            -2 => Self::Binary,
            -7 => Self::Bit,
            2004 => Self::Blob,
            16 => Self::Boolean,
            1 => Self::Char,
            2005 => Self::Clob,
            70 => Self::Datalink,
            91 => Self::Date,
            3 => Self::Decimal,
            2001 => Self::Distinct,
            8 => Self::Double,
            6 => Self::Float,
            4 => Self::Integer,
            2000 => Self::JavaObject,
            -16 => Self::LongNVarChar,
            -4 => Self::LongVarBinary,
            -1 => Self::LongVarChar,
            -15 => Self::NChar,
            2011 => Self::NClob,
            0 => Self::Null,
            2 => Self::Numeric,
            -9 => Self::NVarChar,
            7 => Self::Real,
            2006 => Self::Ref,
            5 => Self::SmallInt,
            2009 => Self::SqlXml,
            2002 => Self::Struct,
            92 => Self::Time,
            2013 => Self::TimeWithTimezone,
            93 => Self::Timestamp,
            2014 => Self::TimestampWithTimezone,
            -6 => Self::TinyInt,
            -3 => Self::VarBinary,
            12 => Self::VarChar,
            _ => Self::Other,
        }
    }

    /// JDBC constant name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Array => "ARRAY",
            Self::BigInt => "BIGINT",
            Self::Binary => "BINARY",
            Self::Bit => "BIT",
            Self::Blob => "BLOB",
            Self::Boolean => "BOOLEAN",
            Self::Char => "CHAR",
            Self::Clob => "CLOB",
            Self::Datalink => "DATALINK",
            Self::Date => "DATE",
            Self::Decimal => "DECIMAL",
            Self::Distinct => "DISTINCT",
            Self::Double => "DOUBLE",
            Self::Float => "FLOAT",
            Self::Integer => "INTEGER",
            Self::JavaObject => "JAVA_OBJECT",
            Self::LongNVarChar => "LONGNVARCHAR",
            Self::LongVarBinary => "LONGVARBINARY",
            Self::LongVarChar => "LONGVARCHAR",
            Self::NChar => "NCHAR",
            Self::NClob => "NCLOB",
            Self::Null => "NULL",
            Self::Numeric => "NUMERIC",
            Self::NVarChar => "NVARCHAR",
            Self::Other => "OTHER",
            Self::Real => "REAL",
            Self::Ref => "REF",
            Self::SmallInt => "SMALLINT",
            Self::SqlXml => "SQLXML",
            Self::Struct => "STRUCT",
            Self::Time => "TIME",
            Self::TimeWithTimezone => "TIME_WITH_TIMEZONE",
            Self::Timestamp => "TIMESTAMP",
            Self::TimestampWithTimezone => "TIMESTAMP_WITH_TIMEZONE",
            Self::TinyInt => "TINYINT",
            Self::VarBinary => "VARBINARY",
            Self::VarChar => "VARCHAR",
        }
    }
}

impl FromStr for SqlType {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parsed = match input.trim().to_uppercase().as_str() {
            "ARRAY" => Self::Array,
            "BIGINT" | "INT8" => Self::BigInt,
            "BINARY" => Self::Binary,
            "BIT" => Self::Bit,
            "BLOB" => Self::Blob,
            "BOOLEAN" | "BOOL" => Self::Boolean,
            "CHAR" => Self::Char,
            "CLOB" => Self::Clob,
            "DATALINK" => Self::Datalink,
            "DATE" => Self::Date,
            "DECIMAL" => Self::Decimal,
            "DISTINCT" => Self::Distinct,
            "DOUBLE" => Self::Double,
            "FLOAT" => Self::Float,
            "INTEGER" | "INT" | "INT4" => Self::Integer,
            "JAVA_OBJECT" => Self::JavaObject,
            "LONGNVARCHAR" => Self::LongNVarChar,
            "LONGVARBINARY" => Self::LongVarBinary,
            "LONGVARCHAR" | "TEXT" => Self::LongVarChar,
            "NCHAR" => Self::NChar,
            "NCLOB" => Self::NClob,
            "NULL" => Self::Null,
            "NUMERIC" => Self::Numeric,
            "NVARCHAR" => Self::NVarChar,
            "OTHER" => Self::Other,
            "REAL" => Self::Real,
            "REF" => Self::Ref,
            "SMALLINT" | "INT2" => Self::SmallInt,
            "SQLXML" => Self::SqlXml,
            "STRUCT" => Self::Struct,
            "TIME" => Self::Time,
            "TIME_WITH_TIMEZONE" => Self::TimeWithTimezone,
            "TIMESTAMP" | "DATETIME" => Self::Timestamp,
            "TIMESTAMP_WITH_TIMEZONE" => Self::TimestampWithTimezone,
            "TINYINT" => Self::TinyInt,
            "VARBINARY" => Self::VarBinary,
            "VARCHAR" => Self::VarChar,
            _ => return Err(Error::UnknownSqlType(input.to_string())),
        };
        Ok(parsed)
    }
}

impl TryFrom<String> for SqlType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SqlType> for String {
    fn from(value: SqlType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
