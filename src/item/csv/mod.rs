//! CSV support for reading and writing rows of typed items.
//!
//! # Module Architecture
//!
//! The CSV module consists of two main components:
//!
//! 1. **CsvItemReader**: pulls rows from any `Read` source and decodes them
//!    with a [`RowMapper`](crate::core::item::RowMapper).
//!
//! 2. **CsvItemWriter**: encodes items with the same mapper and writes them
//!    to any `Write` target.
//!
//! Both components follow the builder pattern. The dialect is fixed: comma
//! delimiter, standard double-quote escaping, `\n` line terminator on output,
//! no header row in either direction.
//!
//! # Ownership and Borrowing Considerations
//!
//! Writers own their destination and hold it until dropped or turned back
//! with `into_inner`. File handles are closed when the reader or writer is
//! dropped.
//!
//! # Examples
//!
//! ```
//! use csv_copy_batch::item::csv::csv_reader::CsvItemReaderBuilder;
//! use csv_copy_batch::item::csv::csv_writer::CsvItemWriterBuilder;
//! use csv_copy_batch::core::step::{dump, load};
//! use csv_copy_batch::record::{User, UserRowMapper};
//!
//! let input = "1,Jim,Todd,43,WV\n2,Ann,Lee,29,CA\n";
//!
//! let reader = CsvItemReaderBuilder::new()
//!     .row_mapper(UserRowMapper::default())
//!     .from_reader(input.as_bytes());
//! let users = load::<User>(&reader).unwrap();
//!
//! let writer = CsvItemWriterBuilder::new()
//!     .row_mapper(UserRowMapper::default())
//!     .from_writer(Vec::new());
//! dump::<User>(&writer, &users).unwrap();
//!
//! let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
//! assert_eq!(output, input);
//! ```

/// A module providing facilities for reading CSV data records.
pub mod csv_reader;

/// A module providing facilities for writing CSV data records.
pub mod csv_writer;
