//! Display formatting for terminal output

pub mod summary;

pub use summary::format_summary;
