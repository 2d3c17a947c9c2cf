//! Structured source fragments
//!
//! Sections are assembled as lines tagged with an indentation depth and only
//! turned into text at the end, so the line terminator and indentation are
//! applied in one place.

use crate::config::LineBreak;

/// Spaces per indentation level
pub const INDENT: &str = "  ";

/// Which part of the generated file a fragment holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// `package ...`
    Package,
    /// Import block
    Imports,
    /// `case class` or wide `class`
    ValueType,
    /// `object X extends SQLSyntaxSupport[X]` header with table and schema names
    TableBinding,
    /// `override val columns`
    Columns,
    /// `apply(...)(rs: WrappedResultSet)` pair
    RowMapper,
    /// `val m = X.syntax("m")`
    Syntax,
    /// `override val autoSession`
    AutoSession,
    /// `find`
    Find,
    /// `findAll`
    FindAll,
    /// `countAll`
    CountAll,
    /// `findBy`
    FindBy,
    /// `findAllBy`
    FindAllBy,
    /// `countBy`
    CountBy,
    /// `create`
    Create,
    /// `save`
    Save,
    /// `destroy`
    Destroy,
    /// Closing brace of the companion object
    Footer,
}

/// One output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Indentation level
    pub depth: usize,
    /// Text without indentation; empty for a blank line
    pub text: String,
}

impl Line {
    /// Create a line
    #[must_use]
    pub fn new(depth: usize, text: impl Into<String>) -> Self {
        Self {
            depth,
            text: text.into(),
        }
    }
}

/// A section of generated source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Section this fragment holds
    pub kind: SectionKind,
    /// Lines in output order
    pub lines: Vec<Line>,
}

impl Fragment {
    /// Create an empty fragment
    #[must_use]
    pub const fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
        }
    }

    /// Append a line
    pub fn line(&mut self, depth: usize, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line::new(depth, text));
        self
    }

    /// Append a blank line
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(Line::new(0, String::new()));
        self
    }

    /// Append one line per item, separated by `separator`
    ///
    /// `last_suffix` is glued to the final item, so a list can close its own
    /// parenthesis.
    pub fn list<I, S>(&mut self, depth: usize, items: I, separator: &str, last_suffix: &str) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: Vec<S> = items.into_iter().collect();
        let count = items.len();
        for (index, item) in items.iter().enumerate() {
            let tail = if index + 1 == count { last_suffix } else { separator };
            self.lines
                .push(Line::new(depth, format!("{}{tail}", item.as_ref())));
        }
        self
    }

    /// Append relative lines shifted by `depth`
    pub fn extend_at(&mut self, depth: usize, lines: impl IntoIterator<Item = Line>) -> &mut Self {
        self.lines.extend(lines.into_iter().map(|l| Line {
            depth: l.depth + depth,
            text: l.text,
        }));
        self
    }

    /// Glue text onto the last line
    pub fn append_to_last(&mut self, text: &str) -> &mut Self {
        match self.lines.last_mut() {
            Some(last) => last.text.push_str(text),
            None => self.lines.push(Line::new(0, text)),
        }
        self
    }

    /// Render with `line_break` after every line
    #[must_use]
    pub fn render(&self, line_break: LineBreak) -> String {
        let mut out = String::new();
        self.render_into(&mut out, line_break);
        out
    }

    fn render_into(&self, out: &mut String, line_break: LineBreak) {
        for line in &self.lines {
            if !line.text.is_empty() {
                out.push_str(&INDENT.repeat(line.depth));
                out.push_str(&line.text);
            }
            out.push_str(line_break.value());
        }
    }
}

/// Render fragments back to back
#[must_use]
pub fn render_all(fragments: &[Fragment], line_break: LineBreak) -> String {
    let mut out = String::new();
    for fragment in fragments {
        fragment.render_into(&mut out, line_break);
    }
    out
}
