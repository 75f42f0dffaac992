//! Output formatting

pub mod formatter;

pub use formatter::RunFormatter;
