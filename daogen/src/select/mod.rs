//! Template selection
//!
//! Each configuration axis owns one piece of the selection:
//!
//! - [`sql`]: statements rendered by [`SqlStyle`](crate::config::SqlStyle)
//! - [`collection`]: result shapes of multi-row accessors
//! - [`execution`]: blocking and future-returning accessors

pub mod collection;
pub mod execution;
pub mod sql;

pub use execution::{Blocking, Deferred, ExecutionStrategy};
pub use sql::{Predicate, Projection, SqlTarget, Statement};
