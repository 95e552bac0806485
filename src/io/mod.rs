//! I/O helpers: the stdout/stderr `Console` sinks and the non-recursive
//! directory listing used when an input is a directory.
pub mod console;
pub use console::Console;

pub mod listing;
pub use listing::directory_files;
