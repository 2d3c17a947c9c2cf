//! Section builders of the model file
//!
//! Each builder reads only the shared [`EntityContext`] and returns its own
//! [`Fragment`]; no section depends on another's output.

use super::context::EntityContext;
use crate::config::DateTimeBinding;
use crate::fragment::{Fragment, Line, SectionKind};
use crate::select::{Predicate, Projection, Statement};

/// Quote `value` as a Scala string literal
pub(crate) fn string_literal(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

const fn temporal_package(binding: DateTimeBinding) -> &'static str {
    match binding {
        DateTimeBinding::JodaTime => "org.joda.time",
        DateTimeBinding::JavaTime => "java.time",
    }
}

/// `import java.time.{...}` for the temporal types used, first-seen order
pub(crate) fn temporal_import(ctx: &EntityContext<'_>) -> Option<String> {
    let mut names: Vec<&str> = Vec::new();
    for column in ctx.columns.iter().filter(|c| c.is_temporal) {
        if !names.contains(&column.raw_type) {
            names.push(column.raw_type);
        }
    }
    (!names.is_empty()).then(|| {
        format!(
            "import {}.{{{}}}",
            temporal_package(ctx.config.date_time_binding),
            names.join(", ")
        )
    })
}

fn sql_object_import(ctx: &EntityContext<'_>) -> Option<String> {
    let mut names: Vec<&str> = Vec::new();
    for column in ctx.columns.iter().filter(|c| c.is_opaque_sql_type) {
        if !names.contains(&column.raw_type) {
            names.push(column.raw_type);
        }
    }
    (!names.is_empty()).then(|| format!("import java.sql.{{{}}}", names.join(", ")))
}

pub(crate) fn package(ctx: &EntityContext<'_>) -> Fragment {
    let mut out = Fragment::new(SectionKind::Package);
    out.line(0, format!("package {}", ctx.config.package_name)).blank();
    out
}

pub(crate) fn imports(ctx: &EntityContext<'_>) -> Fragment {
    let mut out = Fragment::new(SectionKind::Imports);
    out.line(0, "import scalikejdbc._");
    for import in ctx.strategy.imports() {
        out.line(0, *import);
    }
    if let Some(import) = ctx.config.collection_shape.import() {
        out.line(0, import);
    }
    if let Some(import) = temporal_import(ctx) {
        out.line(0, import);
    }
    if let Some(import) = sql_object_import(ctx) {
        out.line(0, import);
    }
    out.blank();
    out
}

pub(crate) fn value_type(ctx: &EntityContext<'_>) -> Fragment {
    let mut out = Fragment::new(SectionKind::ValueType);
    let class = &ctx.class_name;

    if ctx.is_wide() {
        out.line(0, format!("class {class}("));
        out.list(
            1,
            ctx.columns.iter().map(|c| format!("val {}", c.parameter())),
            ",",
            ") {",
        );
        out.blank();
        out.line(1, "def copy(");
        out.list(
            2,
            ctx.columns
                .iter()
                .map(|c| format!("{0}: {1} = this.{0}", c.identifier, c.type_expression)),
            ",",
            &format!("): {class} = {{"),
        );
        out.line(2, format!("new {class}("));
        out.list(
            3,
            ctx.columns.iter().map(|c| format!("{0} = {0}", c.identifier)),
            ",",
            ")",
        );
        out.line(1, "}");
    } else {
        out.line(0, format!("case class {class}("));
        out.list(1, ctx.columns.iter().map(|c| c.parameter()), ",", ") {");
    }

    let implicits = ctx.implicits(Some(class), None);
    let args = ctx.strategy.session_args();
    out.blank();
    out.line(
        1,
        format!(
            "def save(){implicits}: {} = {class}.save(this)({args})",
            ctx.strategy.wrap_result(class)
        ),
    );
    out.blank();
    out.line(
        1,
        format!(
            "def destroy(){implicits}: {} = {class}.destroy(this)({args})",
            ctx.strategy.wrap_result("Int")
        ),
    );
    out.blank();
    out.line(0, "}");
    out.blank();
    out.blank();
    out
}

pub(crate) fn table_binding(ctx: &EntityContext<'_>) -> Fragment {
    let mut out = Fragment::new(SectionKind::TableBinding);
    let class = &ctx.class_name;
    out.line(0, format!("object {class} extends SQLSyntaxSupport[{class}] {{"));
    out.blank();
    if let Some(schema) = &ctx.table.schema {
        out.line(
            1,
            format!("override val schemaName = Some({})", string_literal(schema)),
        );
        out.blank();
    }
    out.line(
        1,
        format!("override val tableName = {}", string_literal(&ctx.table.name)),
    );
    out.blank();
    out
}

pub(crate) fn columns(ctx: &EntityContext<'_>) -> Fragment {
    let mut out = Fragment::new(SectionKind::Columns);
    let names: Vec<String> = ctx.columns.iter().map(|c| string_literal(&c.name)).collect();
    out.line(1, format!("override val columns = Seq({})", names.join(", ")));
    out.blank();
    out
}

pub(crate) fn row_mapper(ctx: &EntityContext<'_>) -> Fragment {
    let mut out = Fragment::new(SectionKind::RowMapper);
    let class = &ctx.class_name;
    let alias = &ctx.alias;

    if ctx.config.auto_derive_mapping {
        out.line(
            1,
            format!("def apply({alias}: SyntaxProvider[{class}])(rs: WrappedResultSet): {class} = autoConstruct(rs, {alias})"),
        );
        out.line(
            1,
            format!("def apply({alias}: ResultName[{class}])(rs: WrappedResultSet): {class} = autoConstruct(rs, {alias})"),
        );
    } else {
        out.line(
            1,
            format!("def apply({alias}: SyntaxProvider[{class}])(rs: WrappedResultSet): {class} = apply({alias}.resultName)(rs)"),
        );
        out.line(
            1,
            format!("def apply({alias}: ResultName[{class}])(rs: WrappedResultSet): {class} = new {class}("),
        );
        out.list(
            2,
            ctx.columns.iter().map(|c| {
                let getter = match (c.semantic.is_any(), c.nullable) {
                    (true, false) => "rs.any",
                    (true, true) => "rs.anyOpt",
                    (false, _) => "rs.get",
                };
                format!("{0} = {getter}({alias}.{0})", c.identifier)
            }),
            ",",
            "",
        );
        out.line(1, ")");
    }
    out.blank();
    out
}

pub(crate) fn syntax(ctx: &EntityContext<'_>) -> Fragment {
    let mut out = Fragment::new(SectionKind::Syntax);
    out.line(
        1,
        format!(
            "val {} = {}.syntax({})",
            ctx.alias,
            ctx.class_name,
            string_literal(&ctx.alias)
        ),
    );
    out.blank();
    out
}

pub(crate) fn auto_session(ctx: &EntityContext<'_>) -> Option<Fragment> {
    ctx.strategy.declares_auto_session().then(|| {
        let mut out = Fragment::new(SectionKind::AutoSession);
        out.line(1, "override val autoSession = AutoSession").blank();
        out
    })
}

/// Accessor around a single statement with a chained tail
fn simple_accessor(
    ctx: &EntityContext<'_>,
    kind: SectionKind,
    signature: String,
    statement: &Statement,
    tail: &str,
) -> Fragment {
    let mut out = Fragment::new(kind);
    out.line(1, signature);
    out.extend_at(2, statement.render(ctx.config.sql_style, &ctx.target()));
    out.append_to_last(tail);
    out.line(1, "}").blank();
    out
}

fn entity_mapper(ctx: &EntityContext<'_>) -> String {
    format!(".map({}({}.resultName))", ctx.class_name, ctx.alias)
}

fn single_row(ctx: &EntityContext<'_>, kind: SectionKind, name: &str, params: &str, predicate: Predicate) -> Fragment {
    let signature = format!(
        "def {name}({params}){}: {} = {{",
        ctx.implicits(None, None),
        ctx.strategy.wrap_result(&format!("Option[{}]", ctx.class_name))
    );
    let statement = Statement::Select {
        projection: Projection::Entity,
        predicate,
    };
    let tail = format!("{}.single{}", entity_mapper(ctx), ctx.strategy.terminal(None));
    simple_accessor(ctx, kind, signature, &statement, &tail)
}

fn many_rows(ctx: &EntityContext<'_>, kind: SectionKind, name: &str, params: &str, predicate: Predicate) -> Fragment {
    let shape = ctx.config.collection_shape;
    let signature = format!(
        "def {name}{}({params}){}: {} = {{",
        shape.type_params(),
        ctx.implicits(None, shape.builder_implicit(&ctx.class_name)),
        ctx.strategy.wrap_result(&shape.result_type(&ctx.class_name))
    );
    let statement = Statement::Select {
        projection: Projection::Entity,
        predicate,
    };
    let tail = format!(
        "{}{}{}",
        entity_mapper(ctx),
        shape.fetch(),
        ctx.strategy.terminal(shape.type_arg())
    );
    simple_accessor(ctx, kind, signature, &statement, &tail)
}

fn counter(ctx: &EntityContext<'_>, kind: SectionKind, name: &str, params: &str, predicate: Predicate) -> Fragment {
    let signature = format!(
        "def {name}({params}){}: {} = {{",
        ctx.implicits(None, None),
        ctx.strategy.wrap_result("Long")
    );
    let mapper = if matches!(predicate, Predicate::All) {
        ".map(rs => rs.long(1))"
    } else {
        ".map(_.long(1))"
    };
    let statement = Statement::Select {
        projection: Projection::Count,
        predicate,
    };
    let tail = format!(
        "{mapper}.single{}{}",
        ctx.strategy.terminal(None),
        ctx.strategy.unwrap_option()
    );
    simple_accessor(ctx, kind, signature, &statement, &tail)
}

pub(crate) fn find(ctx: &EntityContext<'_>) -> Fragment {
    let params: Vec<String> = ctx.key_columns().map(|c| c.bare_parameter()).collect();
    single_row(
        ctx,
        SectionKind::Find,
        "find",
        &params.join(", "),
        Predicate::KeyEquals(ctx.keys.clone()),
    )
}

pub(crate) fn find_all(ctx: &EntityContext<'_>) -> Fragment {
    many_rows(ctx, SectionKind::FindAll, "findAll", "", Predicate::All)
}

pub(crate) fn count_all(ctx: &EntityContext<'_>) -> Fragment {
    counter(ctx, SectionKind::CountAll, "countAll", "", Predicate::All)
}

pub(crate) fn find_by(ctx: &EntityContext<'_>) -> Fragment {
    single_row(ctx, SectionKind::FindBy, "findBy", "where: SQLSyntax", Predicate::Dynamic)
}

pub(crate) fn find_all_by(ctx: &EntityContext<'_>) -> Fragment {
    many_rows(ctx, SectionKind::FindAllBy, "findAllBy", "where: SQLSyntax", Predicate::Dynamic)
}

pub(crate) fn count_by(ctx: &EntityContext<'_>) -> Fragment {
    counter(ctx, SectionKind::CountBy, "countBy", "where: SQLSyntax", Predicate::Dynamic)
}

pub(crate) fn create(ctx: &EntityContext<'_>) -> Fragment {
    let mut out = Fragment::new(SectionKind::Create);
    let insert = ctx.insert_columns();

    out.line(1, "def create(");
    out.list(
        2,
        insert.iter().map(|&i| ctx.columns[i].parameter()),
        ",",
        &format!(
            "){}: {} = {{",
            ctx.implicits(None, None),
            ctx.strategy.wrap_result(&ctx.class_name)
        ),
    );

    let mut result = vec![Line::new(0, format!("{}(", ctx.constructor()))];
    let count = ctx.columns.len();
    for (index, column) in ctx.columns.iter().enumerate() {
        let value = if Some(index) == ctx.auto_increment {
            column.generated_key_value()
        } else {
            column.identifier.clone()
        };
        let tail = if index + 1 == count { ")" } else { "," };
        result.push(Line::new(1, format!("{} = {value}{tail}", column.identifier)));
    }

    let statement = Statement::Insert { columns: insert }.render(ctx.config.sql_style, &ctx.target());
    if ctx.auto_increment.is_some() {
        ctx.strategy.continue_with(
            &mut out,
            2,
            statement,
            ".updateAndReturnGeneratedKey",
            Some("generatedKey"),
            result,
        );
    } else {
        ctx.strategy
            .continue_with(&mut out, 2, statement, ".update", None, result);
    }
    out.line(1, "}").blank();
    out
}

pub(crate) fn save(ctx: &EntityContext<'_>) -> Fragment {
    let mut out = Fragment::new(SectionKind::Save);
    out.line(
        1,
        format!(
            "def save(entity: {}){}: {} = {{",
            ctx.class_name,
            ctx.implicits(None, None),
            ctx.strategy.wrap_result(&ctx.class_name)
        ),
    );
    let statement = Statement::Update {
        columns: (0..ctx.columns.len()).collect(),
        keys: ctx.keys.clone(),
    }
    .render(ctx.config.sql_style, &ctx.target());
    ctx.strategy.continue_with(
        &mut out,
        2,
        statement,
        ".update",
        None,
        vec![Line::new(0, "entity")],
    );
    out.line(1, "}").blank();
    out
}

pub(crate) fn destroy(ctx: &EntityContext<'_>) -> Fragment {
    let signature = format!(
        "def destroy(entity: {}){}: {} = {{",
        ctx.class_name,
        ctx.implicits(None, None),
        ctx.strategy.wrap_result("Int")
    );
    let statement = Statement::Delete {
        keys: ctx.keys.clone(),
    };
    let tail = format!(".update{}", ctx.strategy.terminal(None));
    simple_accessor(ctx, SectionKind::Destroy, signature, &statement, &tail)
}

pub(crate) fn footer() -> Fragment {
    let mut out = Fragment::new(SectionKind::Footer);
    out.line(0, "}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneratorConfig, LineBreak, SqlStyle};
    use crate::schema::{Column, SqlType, Table};

    fn member() -> Table {
        Table::new("member")
            .column(Column::not_null("id", SqlType::BigInt))
            .column(Column::not_null("name", SqlType::VarChar))
            .column(Column::nullable("birthday", SqlType::Date))
            .primary_key(["id"])
            .auto_increment(["id"])
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("a\"b"), "\"a\\\"b\"");
    }

    #[test]
    fn test_imports_dedupe_temporal_types() {
        let table = Table::new("event")
            .column(Column::not_null("starts_on", SqlType::Date))
            .column(Column::not_null("created_at", SqlType::Timestamp))
            .column(Column::nullable("ends_on", SqlType::Date))
            .column(Column::nullable("payload", SqlType::Clob))
            .column(Column::nullable("thumbnail", SqlType::Blob))
            .column(Column::nullable("original", SqlType::Blob));
        let config = GeneratorConfig::default();
        let ctx = EntityContext::new(&table, &config).unwrap();
        assert_eq!(
            imports(&ctx).render(LineBreak::Lf),
            "import scalikejdbc._\nimport java.time.{LocalDate, ZonedDateTime}\nimport java.sql.{Clob, Blob}\n\n"
        );
    }

    #[test]
    fn test_find_signature_and_body() {
        let table = member();
        let config = GeneratorConfig::default().with_sql_style(SqlStyle::Interpolation);
        let ctx = EntityContext::new(&table, &config).unwrap();
        assert_eq!(
            find(&ctx).render(LineBreak::Lf),
            concat!(
                "  def find(id: Long)(implicit session: DBSession = autoSession): Option[Member] = {\n",
                "    sql\"\"\"select ${m.result.*} from ${Member as m} where ${m.id} = ${id}\"\"\".map(Member(m.resultName)).single.apply()\n",
                "  }\n",
                "\n",
            )
        );
    }

    #[test]
    fn test_count_all_unwraps_option() {
        let table = member();
        let config = GeneratorConfig::default();
        let ctx = EntityContext::new(&table, &config).unwrap();
        let text = count_all(&ctx).render(LineBreak::Lf);
        assert!(text.contains("withSQL(select(sqls.count).from(Member as m)).map(rs => rs.long(1)).single.apply().get"));
    }

    #[test]
    fn test_manual_row_mapper_uses_any_for_opaque_columns() {
        let table = Table::new("blob_store")
            .column(Column::not_null("id", SqlType::Integer))
            .column(Column::not_null("meta", SqlType::Other))
            .column(Column::nullable("extra", SqlType::JavaObject));
        let config = GeneratorConfig::default();
        let ctx = EntityContext::new(&table, &config).unwrap();
        let text = row_mapper(&ctx).render(LineBreak::Lf);
        assert!(text.contains("id = rs.get(bs.id),"));
        assert!(text.contains("meta = rs.any(bs.meta),"));
        assert!(text.contains("extra = rs.anyOpt(bs.extra)\n"));
    }

    #[test]
    fn test_auto_construct_row_mapper() {
        let table = member();
        let config = GeneratorConfig::default().with_auto_derive_mapping(true);
        let ctx = EntityContext::new(&table, &config).unwrap();
        let text = row_mapper(&ctx).render(LineBreak::Lf);
        assert_eq!(text.matches("autoConstruct(rs, m)").count(), 2);
        assert!(!text.contains("rs.get"));
    }

    #[test]
    fn test_schema_name_is_bound() {
        let table = member().schema("crm");
        let config = GeneratorConfig::default();
        let ctx = EntityContext::new(&table, &config).unwrap();
        let text = table_binding(&ctx).render(LineBreak::Lf);
        assert!(text.contains("  override val schemaName = Some(\"crm\")\n"));
        assert!(text.contains("  override val tableName = \"member\"\n"));
    }

    #[test]
    fn test_create_without_auto_increment_takes_every_column() {
        let table = Table::new("tag")
            .column(Column::not_null("label", SqlType::VarChar))
            .column(Column::not_null("weight", SqlType::Integer));
        let config = GeneratorConfig::default();
        let ctx = EntityContext::new(&table, &config).unwrap();
        let text = create(&ctx).render(LineBreak::Lf);
        assert!(text.contains("    label: String,\n    weight: Int)(implicit"));
        assert!(text.contains("}.update.apply()\n"));
        assert!(!text.contains("generatedKey"));
    }
}
