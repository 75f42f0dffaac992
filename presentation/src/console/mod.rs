//! Terminal adapter for the console port

pub mod terminal;

pub use terminal::TerminalConsole;
