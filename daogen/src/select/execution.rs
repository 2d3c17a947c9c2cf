//! Execution strategies
//!
//! One assembly engine serves blocking and future-returning accessors; every
//! place the two differ goes through [`ExecutionStrategy`]. The SQL itself is
//! never touched here.

use crate::config::ExecutionMode;
use crate::fragment::{Fragment, Line};
use std::fmt;

/// How accessors obtain a session and hand back their result
pub trait ExecutionStrategy: fmt::Debug + Send + Sync {
    /// Session parameter type
    fn session_type(&self) -> &'static str;

    /// Default session value, `qualifier` naming the companion when called from
    /// the value type
    fn default_session(&self, qualifier: Option<&str>) -> String;

    /// Implicit parameter following the session, if any
    fn context_param(&self) -> Option<&'static str>;

    /// Arguments forwarding the implicit parameter list
    fn session_args(&self) -> &'static str;

    /// Declared return type for a result of type `ty`
    fn wrap_result(&self, ty: &str) -> String;

    /// Call that runs the statement
    fn terminal(&self, type_arg: Option<&str>) -> String;

    /// Suffix turning an `Option[Long]` count into a `Long`
    fn unwrap_option(&self) -> &'static str;

    /// Imports beyond `scalikejdbc._`
    fn imports(&self) -> &'static [&'static str];

    /// Whether the companion declares `override val autoSession`
    fn declares_auto_session(&self) -> bool;

    /// Names generated code binds besides the entity-derived ones
    fn reserved_names(&self) -> &'static [&'static str];

    /// Text placed around an accessor call in a generated test
    fn await_bounds(&self) -> (&'static str, &'static str);

    /// Imports a generated test needs
    fn test_imports(&self) -> &'static [&'static str];

    /// Emit `statement` followed by `chain`, then `result` once it completes
    ///
    /// `binding` names the statement's value inside `result`.
    fn continue_with(
        &self,
        out: &mut Fragment,
        depth: usize,
        statement: Vec<Line>,
        chain: &str,
        binding: Option<&str>,
        result: Vec<Line>,
    );

    /// Implicit parameter list without the `implicit` keyword
    fn session_params(&self, qualifier: Option<&str>, inject_default: bool) -> String {
        let session = if inject_default {
            format!(
                "session: {} = {}",
                self.session_type(),
                self.default_session(qualifier)
            )
        } else {
            format!("session: {}", self.session_type())
        };
        match self.context_param() {
            Some(context) => format!("{session}, {context}"),
            None => session,
        }
    }
}

/// `DBSession` accessors returning values directly
#[derive(Debug, Clone, Copy, Default)]
pub struct Blocking;

/// `AsyncDBSession` accessors returning `Future`s
#[derive(Debug, Clone, Copy, Default)]
pub struct Deferred;

impl ExecutionStrategy for Blocking {
    fn session_type(&self) -> &'static str {
        "DBSession"
    }

    fn default_session(&self, qualifier: Option<&str>) -> String {
        qualifier.map_or_else(|| "autoSession".to_string(), |q| format!("{q}.autoSession"))
    }

    fn context_param(&self) -> Option<&'static str> {
        None
    }

    fn session_args(&self) -> &'static str {
        "session"
    }

    fn wrap_result(&self, ty: &str) -> String {
        ty.to_string()
    }

    fn terminal(&self, type_arg: Option<&str>) -> String {
        type_arg.map_or_else(|| ".apply()".to_string(), |t| format!(".apply[{t}]()"))
    }

    fn unwrap_option(&self) -> &'static str {
        ".get"
    }

    fn imports(&self) -> &'static [&'static str] {
        &[]
    }

    fn declares_auto_session(&self) -> bool {
        true
    }

    fn reserved_names(&self) -> &'static [&'static str] {
        &[]
    }

    fn await_bounds(&self) -> (&'static str, &'static str) {
        ("", "")
    }

    fn test_imports(&self) -> &'static [&'static str] {
        &[]
    }

    fn continue_with(
        &self,
        out: &mut Fragment,
        depth: usize,
        mut statement: Vec<Line>,
        chain: &str,
        binding: Option<&str>,
        result: Vec<Line>,
    ) {
        if let (Some(name), Some(first)) = (binding, statement.first_mut()) {
            first.text.insert_str(0, &format!("val {name} = "));
        }
        out.extend_at(depth, statement);
        out.append_to_last(&format!("{chain}{}", self.terminal(None)));
        if result.len() > 1 {
            out.blank();
        }
        out.extend_at(depth, result);
    }
}

impl ExecutionStrategy for Deferred {
    fn session_type(&self) -> &'static str {
        "AsyncDBSession"
    }

    fn default_session(&self, _qualifier: Option<&str>) -> String {
        "AsyncDB.sharedSession".to_string()
    }

    fn context_param(&self) -> Option<&'static str> {
        Some("cxt: EC = ECGlobal")
    }

    fn session_args(&self) -> &'static str {
        "session, cxt"
    }

    fn wrap_result(&self, ty: &str) -> String {
        format!("Future[{ty}]")
    }

    fn terminal(&self, type_arg: Option<&str>) -> String {
        type_arg.map_or_else(|| ".future()".to_string(), |t| format!(".future[{t}]()"))
    }

    fn unwrap_option(&self) -> &'static str {
        ".map(_.get)"
    }

    fn imports(&self) -> &'static [&'static str] {
        &[
            "import scalikejdbc.async._",
            "import scalikejdbc.async.FutureImplicits._",
            "import scalikejdbc.async.ShortenedNames._",
            "import scala.concurrent._",
        ]
    }

    fn declares_auto_session(&self) -> bool {
        false
    }

    fn reserved_names(&self) -> &'static [&'static str] {
        &["cxt"]
    }

    fn await_bounds(&self) -> (&'static str, &'static str) {
        ("Await.result(", ", 5.seconds)")
    }

    fn test_imports(&self) -> &'static [&'static str] {
        &["import scala.concurrent._", "import scala.concurrent.duration._"]
    }

    fn continue_with(
        &self,
        out: &mut Fragment,
        depth: usize,
        statement: Vec<Line>,
        chain: &str,
        binding: Option<&str>,
        result: Vec<Line>,
    ) {
        out.extend_at(depth, statement);
        out.append_to_last(&format!(
            "{chain}{}.map {{ {} =>",
            self.terminal(None),
            binding.unwrap_or("_")
        ));
        out.extend_at(depth + 1, result);
        out.line(depth, "}");
    }
}

static BLOCKING: Blocking = Blocking;
static DEFERRED: Deferred = Deferred;

impl ExecutionMode {
    /// Strategy implementing this mode
    #[must_use]
    pub fn strategy(self) -> &'static dyn ExecutionStrategy {
        match self {
            Self::Sync => &BLOCKING,
            Self::Async => &DEFERRED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineBreak;
    use crate::fragment::SectionKind;

    #[test]
    fn test_session_params() {
        let sync = ExecutionMode::Sync.strategy();
        assert_eq!(sync.session_params(None, true), "session: DBSession = autoSession");
        assert_eq!(
            sync.session_params(Some("Member"), true),
            "session: DBSession = Member.autoSession"
        );
        assert_eq!(sync.session_params(None, false), "session: DBSession");

        let deferred = ExecutionMode::Async.strategy();
        assert_eq!(
            deferred.session_params(Some("Member"), true),
            "session: AsyncDBSession = AsyncDB.sharedSession, cxt: EC = ECGlobal"
        );
        assert_eq!(
            deferred.session_params(None, false),
            "session: AsyncDBSession, cxt: EC = ECGlobal"
        );
    }

    #[test]
    fn test_result_and_terminal() {
        let sync = ExecutionMode::Sync.strategy();
        let deferred = ExecutionMode::Async.strategy();
        assert_eq!(sync.wrap_result("Option[Member]"), "Option[Member]");
        assert_eq!(deferred.wrap_result("Option[Member]"), "Future[Option[Member]]");
        assert_eq!(sync.terminal(Some("Vector")), ".apply[Vector]()");
        assert_eq!(deferred.terminal(None), ".future()");
    }

    #[test]
    fn test_blocking_continuation_binds_a_val() {
        let mut out = Fragment::new(SectionKind::Create);
        ExecutionMode::Sync.strategy().continue_with(
            &mut out,
            2,
            vec![Line::new(0, "withSQL(stmt)")],
            ".updateAndReturnGeneratedKey",
            Some("generatedKey"),
            vec![Line::new(0, "Member("), Line::new(1, "id = generatedKey)")],
        );
        assert_eq!(
            out.render(LineBreak::Lf),
            "    val generatedKey = withSQL(stmt).updateAndReturnGeneratedKey.apply()\n\n    Member(\n      id = generatedKey)\n"
        );
    }

    #[test]
    fn test_deferred_continuation_maps_the_future() {
        let mut out = Fragment::new(SectionKind::Save);
        ExecutionMode::Async.strategy().continue_with(
            &mut out,
            2,
            vec![Line::new(0, "withSQL(stmt)")],
            ".update",
            None,
            vec![Line::new(0, "entity")],
        );
        assert_eq!(
            out.render(LineBreak::Lf),
            "    withSQL(stmt).update.future().map { _ =>\n      entity\n    }\n"
        );
    }

    #[test]
    fn test_async_reserves_context_name() {
        assert!(ExecutionMode::Async.strategy().reserved_names().contains(&"cxt"));
        assert!(ExecutionMode::Sync.strategy().reserved_names().is_empty());
    }
}
