use std::{
    cell::RefCell,
    fmt::Display,
    io::{self, Stdout, Write},
};

use log::warn;

use crate::core::item::ItemVisitor;

/// Prints every visited item on its own line.
///
/// Output goes to stdout by default; [`ConsoleVisitor::from_writer`] accepts
/// any `io::Write` target. A failed print is logged and does not stop the
/// pass.
///
/// # Examples
///
/// ```
/// use csv_copy_batch::core::item::ItemVisitor;
/// use csv_copy_batch::item::console::ConsoleVisitor;
/// use csv_copy_batch::record::User;
///
/// let visitor = ConsoleVisitor::from_writer(Vec::new());
/// visitor.visit(&User::new(1, "Jim", "Todd", 43, "WV"));
///
/// assert_eq!(visitor.into_inner(), b"{1 Jim Todd 43 WV}\n");
/// ```
pub struct ConsoleVisitor<W: Write> {
    out: RefCell<W>,
}

impl ConsoleVisitor<Stdout> {
    pub fn new() -> Self {
        Self::from_writer(io::stdout())
    }
}

impl Default for ConsoleVisitor<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleVisitor<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<T: Display, W: Write> ItemVisitor<T> for ConsoleVisitor<W> {
    fn visit(&self, item: &T) {
        if let Err(error) = writeln!(self.out.borrow_mut(), "{}", item) {
            warn!("Unable to print record: {}", error);
        }
    }
}
