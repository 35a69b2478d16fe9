//! Page fixtures
//!
//! A page fixture describes one rendered facets form (its source, config and
//! widgets) plus a script of user edits. Replaying it drives the real
//! notifier and records what a browser would have observed.

pub mod format_v0;
pub mod parser;
pub mod replay;

pub use format_v0::{PageForm, PageV0, PageWidget, ScriptStep};
pub use parser::{parse_page_file, parse_page_str};
pub use replay::{replay, ReplayReport, StepReport};
