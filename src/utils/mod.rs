//! Utility modules for common functionality
//!
//! Provides plain-text table rendering.

pub mod table;

pub use table::Table;
