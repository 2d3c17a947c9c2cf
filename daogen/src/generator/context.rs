//! Entity context shared by every section

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::naming::{MappedColumn, NameHelpers, TypeMapper};
use crate::schema::Table;
use crate::select::{ExecutionStrategy, SqlTarget};
use std::collections::HashMap;

/// Widest value type emitted as a `case class`
pub const MAX_SIMPLE_VALUE_FIELDS: usize = 22;

/// Names generated code binds in every companion
///
/// A column whose identifier lands on one of these would shadow it inside
/// `create` or the row mapper.
const RESERVED_NAMES: &[&str] = &["column", "entity", "session", "generatedKey", "autoSession", "rs"];

/// Types generated code names unqualified
///
/// An entity class with one of these names would capture every later
/// reference inside its companion.
const SHADOWED_TYPES: &[&str] = &[
    "Any", "Array", "BigDecimal", "Boolean", "Byte", "Double", "Float", "Int", "List", "Long",
    "Option", "Seq", "Short", "String", "Vector", "Future", "ExecutionContext", "CanBuildFrom",
    "DBSession", "AutoSession", "SQLSyntax", "SQLSyntaxSupport", "WrappedResultSet",
    "SyntaxProvider", "ResultName", "LocalDate", "LocalTime", "DateTime", "ZonedDateTime", "Blob",
    "Clob", "NClob", "Ref", "Struct", "SQLXML",
];

/// Accessor parameters the syntax alias must not shadow
const ACCESSOR_PARAMS: &[&str] = &["where", "cbf", "rn"];

/// Everything sections need about one table under one configuration
#[derive(Debug)]
pub struct EntityContext<'a> {
    /// Source table
    pub table: &'a Table,
    /// Generator options
    pub config: &'a GeneratorConfig,
    /// Value type and companion name
    pub class_name: String,
    /// Syntax alias
    pub alias: String,
    /// Mapped columns in declaration order
    pub columns: Vec<MappedColumn>,
    /// Indices of the key columns, in key order
    pub keys: Vec<usize>,
    /// Index of the honoured auto-increment column
    pub auto_increment: Option<usize>,
    /// Blocking or deferred execution
    pub strategy: &'static dyn ExecutionStrategy,
}

impl<'a> EntityContext<'a> {
    /// Map and validate `table` under `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails [`GeneratorConfig::validate`], the
    /// table fails [`Table::validate`], the class name is not an identifier or
    /// shadows a type the generated code uses, a
    /// column maps onto a reserved name, two columns share an identifier, or no
    /// column is left to insert.
    pub fn new(table: &'a Table, config: &'a GeneratorConfig) -> Result<Self> {
        config.validate()?;
        table.validate()?;

        let class_name = NameHelpers::class_name(&table.name, config.target_class_name.as_deref());
        if !NameHelpers::is_plain_identifier(&class_name) {
            return Err(Error::InvalidClassName { value: class_name });
        }
        let strategy = config.execution_mode.strategy();
        let mapper = TypeMapper::new(config.date_time_binding);
        let columns: Vec<MappedColumn> = table.columns.iter().map(|c| mapper.map_column(c)).collect();

        let shadows = SHADOWED_TYPES.contains(&class_name.as_str())
            || columns.iter().any(|c| c.raw_type == class_name);
        if shadows {
            return Err(Error::ReservedClassName {
                table: table.name.clone(),
                class_name,
            });
        }

        let reserved = std::iter::once(class_name.as_str())
            .chain(RESERVED_NAMES.iter().copied())
            .chain(strategy.reserved_names().iter().copied());
        for name in reserved {
            if let Some(column) = columns.iter().find(|c| c.identifier == name) {
                return Err(Error::ReservedNameCollision {
                    table: table.name.clone(),
                    column: column.name.clone(),
                    identifier: column.identifier.clone(),
                });
            }
        }

        let mut seen: HashMap<&str, &str> = HashMap::new();
        for column in &columns {
            if let Some(first) = seen.insert(&column.identifier, &column.name) {
                return Err(Error::DuplicateIdentifier {
                    table: table.name.clone(),
                    identifier: column.identifier.clone(),
                    first: first.to_string(),
                    second: column.name.clone(),
                });
            }
        }

        let alias = Self::free_alias(&class_name, &columns, strategy);
        let keys = table.key_indices();
        let auto_increment = table.auto_increment_index();

        if auto_increment.is_some() && columns.len() == 1 {
            return Err(Error::EmptyInsertColumns {
                table: table.name.clone(),
            });
        }

        tracing::debug!(
            table = %table.name,
            class = %class_name,
            alias = %alias,
            columns = columns.len(),
            keys = keys.len(),
            auto_increment = auto_increment.is_some(),
            "Resolved entity context"
        );

        Ok(Self {
            table,
            config,
            class_name,
            alias,
            columns,
            keys,
            auto_increment,
            strategy,
        })
    }

    /// Syntax alias with an `x` appended until it shadows nothing in scope
    fn free_alias(
        class_name: &str,
        columns: &[MappedColumn],
        strategy: &dyn ExecutionStrategy,
    ) -> String {
        let taken = |name: &str| {
            name == class_name
                || RESERVED_NAMES.contains(&name)
                || ACCESSOR_PARAMS.contains(&name)
                || strategy.reserved_names().contains(&name)
                || columns.iter().any(|c| c.identifier == name)
        };
        let mut alias = NameHelpers::syntax_alias(class_name);
        while taken(alias.as_str()) {
            alias.push('x');
        }
        alias
    }

    /// Whether the value type is a plain `class` with an explicit `copy`
    #[must_use]
    pub fn is_wide(&self) -> bool {
        !self.config.force_simple_value_type && self.columns.len() > MAX_SIMPLE_VALUE_FIELDS
    }

    /// Expression constructing the value type
    #[must_use]
    pub fn constructor(&self) -> String {
        if self.is_wide() {
            format!("new {}", self.class_name)
        } else {
            self.class_name.clone()
        }
    }

    /// Columns `create` takes and inserts, in declaration order
    #[must_use]
    pub fn insert_columns(&self) -> Vec<usize> {
        (0..self.columns.len())
            .filter(|&i| Some(i) != self.auto_increment)
            .collect()
    }

    /// Key columns as mapped columns
    pub fn key_columns(&self) -> impl Iterator<Item = &MappedColumn> {
        self.keys.iter().map(|&i| &self.columns[i])
    }

    /// Names statements render against
    #[must_use]
    pub fn target(&self) -> SqlTarget<'_> {
        SqlTarget {
            class_name: &self.class_name,
            alias: &self.alias,
            columns: &self.columns,
        }
    }

    /// `implicit ...` parameter list, `qualifier` naming the companion
    #[must_use]
    pub fn implicits(&self, qualifier: Option<&str>, extra: Option<String>) -> String {
        let params = self
            .strategy
            .session_params(qualifier, self.config.default_session_injection);
        match extra {
            Some(extra) => format!("(implicit {params}, {extra})"),
            None => format!("(implicit {params})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExecutionMode;
    use crate::schema::{Column, SqlType};

    fn member() -> Table {
        Table::new("member")
            .column(Column::not_null("id", SqlType::BigInt))
            .column(Column::not_null("name", SqlType::VarChar))
            .column(Column::nullable("birthday", SqlType::Date))
            .primary_key(["id"])
            .auto_increment(["id"])
    }

    #[test]
    fn test_context_for_member() {
        let table = member();
        let config = GeneratorConfig::default();
        let ctx = EntityContext::new(&table, &config).unwrap();
        assert_eq!(ctx.class_name, "Member");
        assert_eq!(ctx.alias, "m");
        assert_eq!(ctx.keys, vec![0]);
        assert_eq!(ctx.auto_increment, Some(0));
        assert_eq!(ctx.insert_columns(), vec![1, 2]);
        assert!(!ctx.is_wide());
        assert_eq!(ctx.implicits(None, None), "(implicit session: DBSession = autoSession)");
    }

    #[test]
    fn test_reserved_column_is_rejected() {
        let table = Table::new("member")
            .column(Column::not_null("id", SqlType::BigInt))
            .column(Column::not_null("session", SqlType::VarChar));
        let config = GeneratorConfig::default();
        let err = EntityContext::new(&table, &config).unwrap_err();
        assert!(matches!(err, Error::ReservedNameCollision { column, .. } if column == "session"));
    }

    #[test]
    fn test_alias_steps_around_column_names() {
        let table = Table::new("member")
            .column(Column::not_null("id", SqlType::BigInt))
            .column(Column::not_null("m", SqlType::VarChar));
        let config = GeneratorConfig::default();
        assert_eq!(EntityContext::new(&table, &config).unwrap().alias, "mx");
    }

    #[test]
    fn test_alias_matching_a_key_column_is_renamed() {
        let table = Table::new("image_data")
            .column(Column::not_null("id", SqlType::BigInt))
            .column(Column::nullable("payload", SqlType::Blob))
            .primary_key(["id"]);
        let config = GeneratorConfig::default();
        let ctx = EntityContext::new(&table, &config).unwrap();
        assert_eq!(ctx.class_name, "ImageData");
        assert_eq!(ctx.alias, "idx");
    }

    #[test]
    fn test_alias_avoids_result_set_parameter() {
        let table = Table::new("result_set")
            .column(Column::not_null("id", SqlType::BigInt))
            .primary_key(["id"]);
        let config = GeneratorConfig::default();
        assert_eq!(EntityContext::new(&table, &config).unwrap().alias, "rsx");
    }

    #[test]
    fn test_auto_session_and_rs_columns_are_rejected() {
        for name in ["autoSession", "rs"] {
            let table = Table::new("member")
                .column(Column::not_null("id", SqlType::BigInt))
                .column(Column::not_null(name, SqlType::VarChar));
            let config = GeneratorConfig::default();
            assert!(matches!(
                EntityContext::new(&table, &config).unwrap_err(),
                Error::ReservedNameCollision { column, .. } if column == name
            ));
        }
    }

    #[test]
    fn test_invalid_config_is_rejected_before_mapping() {
        let table = member();
        let package = GeneratorConfig::default().with_package("com..bad pkg");
        assert!(matches!(
            EntityContext::new(&table, &package).unwrap_err(),
            Error::InvalidPackageName { .. }
        ));
        let class = GeneratorConfig::default().with_class_name("../../etc/Evil");
        assert!(matches!(
            EntityContext::new(&table, &class).unwrap_err(),
            Error::InvalidClassName { value } if value == "../../etc/Evil"
        ));
    }

    #[test]
    fn test_class_name_shadowing_scala_type_is_rejected() {
        let cases = [
            ("list", "List"),
            ("option", "Option"),
            ("wrapped_result_set", "WrappedResultSet"),
        ];
        for (name, class) in cases {
            let table = Table::new(name)
                .column(Column::not_null("id", SqlType::BigInt))
                .primary_key(["id"]);
            let config = GeneratorConfig::default();
            assert!(matches!(
                EntityContext::new(&table, &config).unwrap_err(),
                Error::ReservedClassName { class_name, .. } if class_name == class
            ));
        }
    }

    #[test]
    fn test_shadowing_class_name_can_be_overridden() {
        let table = Table::new("list")
            .column(Column::not_null("id", SqlType::BigInt))
            .primary_key(["id"]);
        let config = GeneratorConfig::default().with_class_name("TodoList");
        assert_eq!(EntityContext::new(&table, &config).unwrap().class_name, "TodoList");
    }

    #[test]
    fn test_repeated_primary_key_is_rejected() {
        let table = member().primary_key(["id", "id"]);
        let config = GeneratorConfig::default();
        assert!(matches!(
            EntityContext::new(&table, &config).unwrap_err(),
            Error::DuplicatePrimaryKeyColumn { column, .. } if column == "id"
        ));
    }

    #[test]
    fn test_cxt_is_reserved_only_in_async_mode() {
        let table = Table::new("member")
            .column(Column::not_null("id", SqlType::BigInt))
            .column(Column::not_null("cxt", SqlType::VarChar));
        let sync = GeneratorConfig::default();
        assert!(EntityContext::new(&table, &sync).is_ok());
        let deferred = GeneratorConfig::default().with_execution_mode(ExecutionMode::Async);
        assert!(EntityContext::new(&table, &deferred).is_err());
    }

    #[test]
    fn test_duplicate_identifier_is_rejected() {
        let table = Table::new("member")
            .column(Column::not_null("user_id", SqlType::BigInt))
            .column(Column::not_null("userId", SqlType::BigInt));
        let config = GeneratorConfig::default();
        let err = EntityContext::new(&table, &config).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateIdentifier { first, second, .. } if first == "user_id" && second == "userId"
        ));
    }

    #[test]
    fn test_lone_auto_increment_column_is_rejected() {
        let table = Table::new("sequence")
            .column(Column::not_null("id", SqlType::BigInt))
            .auto_increment(["id"]);
        let config = GeneratorConfig::default();
        assert!(matches!(
            EntityContext::new(&table, &config).unwrap_err(),
            Error::EmptyInsertColumns { .. }
        ));
    }

    #[test]
    fn test_keys_fall_back_to_all_columns() {
        let table = Table::new("tag")
            .column(Column::not_null("label", SqlType::VarChar))
            .column(Column::not_null("weight", SqlType::Integer));
        let config = GeneratorConfig::default();
        let ctx = EntityContext::new(&table, &config).unwrap();
        assert_eq!(ctx.keys, vec![0, 1]);
        assert_eq!(ctx.alias, "t");
    }
}
