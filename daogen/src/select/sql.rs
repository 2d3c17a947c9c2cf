//! SQL statements and their two renderings
//!
//! Accessors describe their SQL once as a [`Statement`]; [`SqlStyle`] only
//! decides the spelling. Column lists and predicates therefore agree between
//! `sql"""..."""` interpolation and `withSQL { ... }` output by construction.

use crate::config::SqlStyle;
use crate::fragment::Line;
use crate::naming::MappedColumn;

/// What a select returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Every column of the entity
    Entity,
    /// `count(1)`
    Count,
}

/// Row filter of a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// No filter
    All,
    /// Conjunction of equalities on the given column indices, in order
    KeyEquals(Vec<usize>),
    /// Caller-supplied `where: SQLSyntax`
    Dynamic,
}

/// A statement an accessor executes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Read rows through the syntax alias
    Select {
        /// Selected columns
        projection: Projection,
        /// Filter
        predicate: Predicate,
    },
    /// Insert the given columns from same-named parameters
    Insert {
        /// Column indices in insert order
        columns: Vec<usize>,
    },
    /// Overwrite the given columns from `entity`
    Update {
        /// Column indices in assignment order
        columns: Vec<usize>,
        /// Key column indices matched against `entity`
        keys: Vec<usize>,
    },
    /// Delete the row matching `entity`
    Delete {
        /// Key column indices matched against `entity`
        keys: Vec<usize>,
    },
}

/// Names a statement renders against
#[derive(Debug, Clone, Copy)]
pub struct SqlTarget<'a> {
    /// Companion object name
    pub class_name: &'a str,
    /// Syntax alias
    pub alias: &'a str,
    /// Mapped columns in declaration order
    pub columns: &'a [MappedColumn],
}

impl SqlTarget<'_> {
    fn ident(&self, index: usize) -> &str {
        &self.columns[index].identifier
    }
}

impl Statement {
    /// Render as lines relative to depth 0
    ///
    /// The last line is left open so the caller can chain `.map(...)` or
    /// `.update` onto it.
    #[must_use]
    pub fn render(&self, style: SqlStyle, target: &SqlTarget<'_>) -> Vec<Line> {
        match style {
            SqlStyle::Interpolation => self.render_interpolation(target),
            SqlStyle::QueryDsl => self.render_query_dsl(target),
        }
    }

    fn render_interpolation(&self, t: &SqlTarget<'_>) -> Vec<Line> {
        let class = t.class_name;
        let alias = t.alias;
        match self {
            Self::Select { projection, predicate } => {
                let from = match (projection, predicate) {
                    (Projection::Entity, _) => {
                        format!("select ${{{alias}.result.*}} from ${{{class} as {alias}}}")
                    }
                    (Projection::Count, Predicate::All) => {
                        format!("select count(1) from ${{{class}.table}}")
                    }
                    (Projection::Count, _) => {
                        format!("select count(1) from ${{{class} as {alias}}}")
                    }
                };
                let filter = match predicate {
                    Predicate::All => String::new(),
                    Predicate::Dynamic => " where ${where}".to_string(),
                    Predicate::KeyEquals(keys) => {
                        let terms: Vec<String> = keys
                            .iter()
                            .map(|&k| format!("${{{alias}.{0}}} = ${{{0}}}", t.ident(k)))
                            .collect();
                        format!(" where {}", terms.join(" and "))
                    }
                };
                vec![Line::new(0, format!("sql\"\"\"{from}{filter}\"\"\""))]
            }
            Self::Insert { columns } => {
                let mut lines = vec![
                    Line::new(0, "sql\"\"\""),
                    Line::new(1, format!("insert into ${{{class}.table}} (")),
                ];
                push_separated(&mut lines, 2, columns.iter().map(|&c| format!("${{column.{}}}", t.ident(c))));
                lines.push(Line::new(1, ") values ("));
                push_separated(&mut lines, 2, columns.iter().map(|&c| format!("${{{}}}", t.ident(c))));
                lines.push(Line::new(1, ")"));
                lines.push(Line::new(1, "\"\"\""));
                lines
            }
            Self::Update { columns, keys } => {
                let mut lines = vec![
                    Line::new(0, "sql\"\"\""),
                    Line::new(1, "update"),
                    Line::new(2, format!("${{{class}.table}}")),
                    Line::new(1, "set"),
                ];
                push_separated(
                    &mut lines,
                    2,
                    columns
                        .iter()
                        .map(|&c| format!("${{column.{0}}} = ${{entity.{0}}}", t.ident(c))),
                );
                lines.push(Line::new(1, "where"));
                lines.push(Line::new(2, entity_equalities(t, keys)));
                lines.push(Line::new(1, "\"\"\""));
                lines
            }
            Self::Delete { keys } => vec![Line::new(
                0,
                format!(
                    "sql\"\"\"delete from ${{{class}.table}} where {}\"\"\"",
                    entity_equalities(t, keys)
                ),
            )],
        }
    }

    fn render_query_dsl(&self, t: &SqlTarget<'_>) -> Vec<Line> {
        let class = t.class_name;
        let alias = t.alias;
        match self {
            Self::Select { projection, predicate } => {
                let select = match projection {
                    Projection::Entity => format!("select.from({class} as {alias})"),
                    Projection::Count => format!("select(sqls.count).from({class} as {alias})"),
                };
                match predicate {
                    Predicate::All => vec![Line::new(0, format!("withSQL({select})"))],
                    Predicate::Dynamic => wrap_with_sql(vec![Line::new(
                        0,
                        format!("{select}.where.append(where)"),
                    )]),
                    Predicate::KeyEquals(keys) => {
                        let chain = dsl_equalities(keys.iter().map(|&k| {
                            format!("{alias}.{0}, {0}", t.ident(k))
                        }));
                        wrap_with_sql(vec![Line::new(0, format!("{select}{chain}"))])
                    }
                }
            }
            Self::Insert { columns } => {
                let mut body = vec![Line::new(0, format!("insert.into({class}).namedValues("))];
                push_separated(&mut body, 1, columns.iter().map(|&c| format!("column.{0} -> {0}", t.ident(c))));
                body.push(Line::new(0, ")"));
                wrap_with_sql(body)
            }
            Self::Update { columns, keys } => {
                let mut body = vec![Line::new(0, format!("update({class}).set("))];
                push_separated(
                    &mut body,
                    1,
                    columns
                        .iter()
                        .map(|&c| format!("column.{0} -> entity.{0}", t.ident(c))),
                );
                body.push(Line::new(0, format!("){}", entity_dsl_equalities(t, keys))));
                wrap_with_sql(body)
            }
            Self::Delete { keys } => wrap_with_sql(vec![Line::new(
                0,
                format!("delete.from({class}){}", entity_dsl_equalities(t, keys)),
            )]),
        }
    }
}

fn push_separated(lines: &mut Vec<Line>, depth: usize, items: impl Iterator<Item = String>) {
    let items: Vec<String> = items.collect();
    let count = items.len();
    for (index, item) in items.into_iter().enumerate() {
        let text = if index + 1 == count { item } else { format!("{item},") };
        lines.push(Line::new(depth, text));
    }
}

fn wrap_with_sql(body: Vec<Line>) -> Vec<Line> {
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(Line::new(0, "withSQL {"));
    lines.extend(body.into_iter().map(|l| Line::new(l.depth + 1, l.text)));
    lines.push(Line::new(0, "}"));
    lines
}

fn entity_equalities(t: &SqlTarget<'_>, keys: &[usize]) -> String {
    keys.iter()
        .map(|&k| format!("${{column.{0}}} = ${{entity.{0}}}", t.ident(k)))
        .collect::<Vec<_>>()
        .join(" and ")
}

fn entity_dsl_equalities(t: &SqlTarget<'_>, keys: &[usize]) -> String {
    dsl_equalities(
        keys.iter()
            .map(|&k| format!("column.{0}, entity.{0}", t.ident(k))),
    )
}

/// `.where.eq(a, b).and.eq(c, d)`
fn dsl_equalities(pairs: impl Iterator<Item = String>) -> String {
    let mut out = String::new();
    for (index, pair) in pairs.enumerate() {
        out.push_str(if index == 0 { ".where.eq(" } else { ".and.eq(" });
        out.push_str(&pair);
        out.push(')');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateTimeBinding;
    use crate::naming::TypeMapper;
    use crate::schema::{Column, SqlType};

    fn columns() -> Vec<MappedColumn> {
        let mapper = TypeMapper::new(DateTimeBinding::JavaTime);
        [
            Column::not_null("id", SqlType::BigInt),
            Column::not_null("name", SqlType::VarChar),
            Column::nullable("birthday", SqlType::Date),
        ]
        .iter()
        .map(|c| mapper.map_column(c))
        .collect()
    }

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| format!("{}{}", "  ".repeat(l.depth), l.text))
            .collect()
    }

    #[test]
    fn test_interpolated_find() {
        let cols = columns();
        let target = SqlTarget { class_name: "Member", alias: "m", columns: &cols };
        let stmt = Statement::Select {
            projection: Projection::Entity,
            predicate: Predicate::KeyEquals(vec![0]),
        };
        assert_eq!(
            text(&stmt.render(SqlStyle::Interpolation, &target)),
            vec!["sql\"\"\"select ${m.result.*} from ${Member as m} where ${m.id} = ${id}\"\"\""]
        );
    }

    #[test]
    fn test_dsl_find_with_composite_key() {
        let cols = columns();
        let target = SqlTarget { class_name: "Member", alias: "m", columns: &cols };
        let stmt = Statement::Select {
            projection: Projection::Entity,
            predicate: Predicate::KeyEquals(vec![1, 0]),
        };
        assert_eq!(
            text(&stmt.render(SqlStyle::QueryDsl, &target)),
            vec![
                "withSQL {",
                "  select.from(Member as m).where.eq(m.name, name).and.eq(m.id, id)",
                "}",
            ]
        );
    }

    #[test]
    fn test_dsl_find_all_is_one_line() {
        let cols = columns();
        let target = SqlTarget { class_name: "Member", alias: "m", columns: &cols };
        let stmt = Statement::Select {
            projection: Projection::Count,
            predicate: Predicate::All,
        };
        assert_eq!(
            text(&stmt.render(SqlStyle::QueryDsl, &target)),
            vec!["withSQL(select(sqls.count).from(Member as m))"]
        );
        assert_eq!(
            text(&stmt.render(SqlStyle::Interpolation, &target)),
            vec!["sql\"\"\"select count(1) from ${Member.table}\"\"\""]
        );
    }

    #[test]
    fn test_insert_lists_columns_in_order() {
        let cols = columns();
        let target = SqlTarget { class_name: "Member", alias: "m", columns: &cols };
        let stmt = Statement::Insert { columns: vec![1, 2] };
        assert_eq!(
            text(&stmt.render(SqlStyle::Interpolation, &target)),
            vec![
                "sql\"\"\"",
                "  insert into ${Member.table} (",
                "    ${column.name},",
                "    ${column.birthday}",
                "  ) values (",
                "    ${name},",
                "    ${birthday}",
                "  )",
                "  \"\"\"",
            ]
        );
        assert_eq!(
            text(&stmt.render(SqlStyle::QueryDsl, &target)),
            vec![
                "withSQL {",
                "  insert.into(Member).namedValues(",
                "    column.name -> name,",
                "    column.birthday -> birthday",
                "  )",
                "}",
            ]
        );
    }

    #[test]
    fn test_update_and_delete_match_entity_keys() {
        let cols = columns();
        let target = SqlTarget { class_name: "Member", alias: "m", columns: &cols };
        let update = Statement::Update { columns: vec![0, 1], keys: vec![0] };
        assert_eq!(
            text(&update.render(SqlStyle::QueryDsl, &target)),
            vec![
                "withSQL {",
                "  update(Member).set(",
                "    column.id -> entity.id,",
                "    column.name -> entity.name",
                "  ).where.eq(column.id, entity.id)",
                "}",
            ]
        );
        let delete = Statement::Delete { keys: vec![0, 1] };
        assert_eq!(
            text(&delete.render(SqlStyle::Interpolation, &target)),
            vec!["sql\"\"\"delete from ${Member.table} where ${column.id} = ${entity.id} and ${column.name} = ${entity.name}\"\"\""]
        );
    }
}
