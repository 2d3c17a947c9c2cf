//! Test spec generation
//!
//! A skeleton per test style, filled from the entity context:
//!
//! - `primary_keys`: literal arguments for `find`
//! - `where_example`: a predicate on the first key column
//! - `create_fields`: named literals for every required column
//! - `syntax_object`: the alias declaration the DSL predicate refers to
//!
//! Every skeleton exercises the nine accessors with one assertion each.

mod skeletons;

use crate::config::{CollectionShape, LineBreak, SqlStyle, TestStyle};
use crate::error::Result;
use crate::generator::{string_literal, temporal_import, EntityContext};
use crate::naming::MappedColumn;
use minijinja::{context, AutoEscape, Environment};

/// Skeleton source for `style`, `None` when tests are off
#[must_use]
pub const fn skeleton(style: TestStyle) -> Option<&'static str> {
    match style {
        TestStyle::FlatSpec => Some(skeletons::FLAT_SPEC),
        TestStyle::UnitSpec => Some(skeletons::UNIT_SPEC),
        TestStyle::AcceptanceSpec => Some(skeletons::ACCEPTANCE_SPEC),
        TestStyle::None => None,
    }
}

fn argument_literal(column: &MappedColumn) -> String {
    if column.nullable {
        format!("Some({})", column.literal)
    } else {
        column.literal.to_string()
    }
}

fn where_example(ctx: &EntityContext<'_>) -> String {
    let Some(first) = ctx.key_columns().next() else {
        return String::new();
    };
    match ctx.config.sql_style {
        SqlStyle::Interpolation => format!("sqls\"{} = ${{{}}}\"", first.name, first.literal),
        SqlStyle::QueryDsl => format!("sqls.eq({}.{}, {})", ctx.alias, first.identifier, first.literal),
    }
}

fn create_fields(ctx: &EntityContext<'_>) -> String {
    ctx.columns
        .iter()
        .enumerate()
        .filter(|(index, column)| !column.nullable && Some(*index) != ctx.auto_increment)
        .map(|(_, column)| format!("{} = {}", column.identifier, column.literal))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the test spec for `ctx`
///
/// # Errors
///
/// Returns [`Error::Template`](crate::Error::Template) if the skeleton fails
/// to render.
pub fn render(ctx: &EntityContext<'_>) -> Result<Option<String>> {
    let Some(source) = skeleton(ctx.config.test_style) else {
        tracing::debug!(table = %ctx.table.name, "Test spec generation disabled");
        return Ok(None);
    };

    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);

    let mut imports: Vec<String> = ctx
        .strategy
        .test_imports()
        .iter()
        .map(ToString::to_string)
        .collect();
    imports.extend(temporal_import(ctx));

    let syntax_object = match ctx.config.sql_style {
        SqlStyle::QueryDsl => Some(format!(
            "val {} = {}.syntax({})",
            ctx.alias,
            ctx.class_name,
            string_literal(&ctx.alias)
        )),
        SqlStyle::Interpolation => None,
    };

    let primary_keys: Vec<String> = ctx.key_columns().map(argument_literal).collect();
    let collection_arg = match ctx.config.collection_shape {
        CollectionShape::ParametricBuilder => "[List]",
        CollectionShape::List | CollectionShape::Vector | CollectionShape::Array => "",
    };
    let (open, close) = ctx.strategy.await_bounds();

    let rendered = env.render_str(
        source,
        context! {
            package => &ctx.config.package_name,
            class_name => &ctx.class_name,
            imports => imports,
            syntax_object => syntax_object,
            primary_keys => primary_keys.join(", "),
            where_example => where_example(ctx),
            create_fields => create_fields(ctx),
            collection_arg => collection_arg,
            open => open,
            close => close,
        },
    )?;

    tracing::debug!(
        table = %ctx.table.name,
        style = %ctx.config.test_style,
        "Rendered test spec"
    );

    Ok(Some(match ctx.config.line_break {
        LineBreak::Lf => rendered,
        LineBreak::Crlf => rendered.replace('\n', "\r\n"),
    }))
}
