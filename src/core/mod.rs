//! Core functionality of the shell
//!
//! Contains the command grammar, the completion engine and the
//! inventory reports.

pub mod report;
pub mod suggest;
pub mod tree;

pub use report::{address_table, link_table};
pub use suggest::{Candidate, Completion, complete, filter_by_prefix, suggest};
pub use tree::{Branch, CommandNode, CommandTree, ValueSource};
