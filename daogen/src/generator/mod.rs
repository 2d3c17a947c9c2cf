//! Code assembly engine
//!
//! [`CodeGenerator`] validates a table once, then assembles the model file
//! from independent sections in a fixed order and renders the test spec from
//! the configured skeleton. Output depends only on the table and the
//! configuration.

mod context;
mod sections;

pub use context::{EntityContext, MAX_SIMPLE_VALUE_FIELDS};
pub(crate) use sections::{string_literal, temporal_import};

use crate::artifact::{GeneratedArtifact, GeneratedFile};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::fragment::{self, Fragment};
use crate::schema::Table;
use crate::testspec;

/// Generator for one table under one configuration
#[derive(Debug)]
pub struct CodeGenerator<'a> {
    ctx: EntityContext<'a>,
}

impl<'a> CodeGenerator<'a> {
    /// Validate `table` and prepare generation
    ///
    /// # Errors
    ///
    /// Returns an error if the table is malformed or its columns collide with
    /// names the generated code uses. See [`EntityContext::new`].
    pub fn new(table: &'a Table, config: &'a GeneratorConfig) -> Result<Self> {
        Ok(Self {
            ctx: EntityContext::new(table, config)?,
        })
    }

    /// Model file sections in output order
    #[must_use]
    pub fn model_fragments(&self) -> Vec<Fragment> {
        let ctx = &self.ctx;
        let mut fragments = vec![
            sections::package(ctx),
            sections::imports(ctx),
            sections::value_type(ctx),
            sections::table_binding(ctx),
            sections::columns(ctx),
            sections::row_mapper(ctx),
            sections::syntax(ctx),
        ];
        fragments.extend(sections::auto_session(ctx));
        fragments.extend([
            sections::find(ctx),
            sections::find_all(ctx),
            sections::count_all(ctx),
            sections::find_by(ctx),
            sections::find_all_by(ctx),
            sections::count_by(ctx),
            sections::create(ctx),
            sections::save(ctx),
            sections::destroy(ctx),
            sections::footer(),
        ]);

        for fragment in &fragments {
            tracing::debug!(
                table = %ctx.table.name,
                section = ?fragment.kind,
                lines = fragment.lines.len(),
                "Assembled section"
            );
        }
        fragments
    }

    /// Model and accessor source text
    #[must_use]
    pub fn generate_model(&self) -> String {
        fragment::render_all(&self.model_fragments(), self.ctx.config.line_break)
    }

    /// Test spec source text, `None` when test generation is off
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`](crate::Error::Template) if the skeleton
    /// fails to render.
    pub fn generate_test_spec(&self) -> Result<Option<String>> {
        testspec::render(&self.ctx)
    }

    /// Both files with their output paths
    ///
    /// # Errors
    ///
    /// Returns an error if the test spec fails to render.
    pub fn generate(&self) -> Result<GeneratedArtifact> {
        let config = self.ctx.config;
        let class_name = &self.ctx.class_name;

        let model = GeneratedFile::new(
            GeneratedArtifact::model_path(config, class_name),
            self.generate_model(),
            format!("{class_name} model and accessors"),
        );
        let test_spec = self.generate_test_spec()?.map(|content| {
            GeneratedFile::new(
                GeneratedArtifact::test_spec_path(config, class_name),
                content,
                format!("{class_name} test spec"),
            )
        });

        tracing::info!(
            table = %self.ctx.table.name,
            class = %class_name,
            test_spec = test_spec.is_some(),
            "Generated artifact"
        );

        Ok(GeneratedArtifact {
            class_name: class_name.clone(),
            model,
            test_spec,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestStyle;
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
    fn test_sections_follow_fixed_order() {
        use crate::fragment::SectionKind::*;
        let table = member();
        let config = GeneratorConfig::default();
        let generator = CodeGenerator::new(&table, &config).unwrap();
        let kinds: Vec<_> = generator.model_fragments().iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                Package, Imports, ValueType, TableBinding, Columns, RowMapper, Syntax, AutoSession,
                Find, FindAll, CountAll, FindBy, FindAllBy, CountBy, Create, Save, Destroy, Footer,
            ]
        );
    }

    #[test]
    fn test_model_ends_with_single_newline() {
        let table = member();
        let config = GeneratorConfig::default();
        let model = CodeGenerator::new(&table, &config).unwrap().generate_model();
        assert!(model.starts_with("package models\n\nimport scalikejdbc._\n"));
        assert!(model.ends_with("  }\n\n}\n"));
    }

    #[test]
    fn test_generate_without_test_spec() {
        let table = member();
        let config = GeneratorConfig::default().with_test_style(TestStyle::None);
        let artifact = CodeGenerator::new(&table, &config).unwrap().generate().unwrap();
        assert!(artifact.test_spec.is_none());
        assert_eq!(artifact.files().len(), 1);
    }
}
