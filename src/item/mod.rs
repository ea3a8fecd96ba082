/// This module provides CSV item reader and writer implementations.
pub mod csv;

/// Visitor printing each item to stdout or any `io::Write` target.
pub mod console;

/// Visitor logging each item.
pub mod logger;
