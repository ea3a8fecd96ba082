use csv::{ReaderBuilder, StringRecordsIntoIter, Trim};
use std::{cell::RefCell, fs::File, io::Read, path::Path};

use crate::{
    core::item::{ItemReader, ItemReaderResult, RowMapper},
    error::BatchError,
};

/// A CSV item reader that implements the `ItemReader` trait.
///
/// Rows are pulled one at a time from the underlying CSV parser and handed to
/// a [`RowMapper`] which turns them into items. The reader never looks at a
/// header: every row, the first one included, is data.
///
/// # Type Parameters
///
/// - `R`: The type of reader providing the CSV data. Must implement `Read`.
/// - `M`: The row mapper used to decode each row.
///
/// # Implementation Details
///
/// - Uses a `RefCell` to provide interior mutability for the CSV record iterator
/// - Fields are not trimmed, text is handed to the mapper as stored
/// - Rows may have differing field counts, the mapper decides what is acceptable
/// - CSV parsing errors are converted into [`BatchError::ItemReader`]
///
/// # Examples
///
/// ```
/// use csv_copy_batch::item::csv::csv_reader::CsvItemReaderBuilder;
/// use csv_copy_batch::core::item::ItemReader;
/// use csv_copy_batch::record::{User, UserRowMapper};
///
/// let data = "\
/// 1,Jim,Todd,43,WV
/// 2,Ann,Lee,29,CA
/// ";
///
/// let reader = CsvItemReaderBuilder::new()
///     .row_mapper(UserRowMapper::default())
///     .from_reader(data.as_bytes());
///
/// let user: User = reader.read().unwrap().unwrap();
/// assert_eq!(user.first_name, "Jim");
///
/// let user: User = reader.read().unwrap().unwrap();
/// assert_eq!(user.age, 29);
///
/// let rest: Option<User> = reader.read().unwrap();
/// assert!(rest.is_none());
/// ```
pub struct CsvItemReader<R, M> {
    /// Iterator over the CSV records
    ///
    /// Uses `RefCell` to provide interior mutability so we can iterate
    /// through records while keeping the `read` method signature compatible
    /// with the `ItemReader` trait.
    records: RefCell<StringRecordsIntoIter<R>>,
    row_mapper: M,
}

impl<R: Read, T, M: RowMapper<T>> ItemReader<T> for CsvItemReader<R, M> {
    /// Reads the next item from the CSV source.
    ///
    /// # Returns
    /// - `Ok(Some(item))` if a row is successfully read and decoded
    /// - `Ok(None)` if there are no more rows to read
    /// - `Err(BatchError::ItemReader(error))` if the CSV parser fails
    /// - `Err(BatchError::MalformedRow { .. })` if the mapper rejects the row
    fn read(&self) -> ItemReaderResult<T> {
        match self.records.borrow_mut().next() {
            Some(Ok(string_record)) => self.row_mapper.map_row(&string_record).map(Some),
            Some(Err(error)) => Err(BatchError::ItemReader(error.to_string())),
            None => Ok(None),
        }
    }
}

/// A builder for configuring CSV item reading.
///
/// Delimiter, quoting and header handling are fixed: comma separated, standard
/// double-quote escaping, no header row. Only the row mapper is configurable.
pub struct CsvItemReaderBuilder<M> {
    row_mapper: M,
}

impl CsvItemReaderBuilder<()> {
    /// Creates a new `CsvItemReaderBuilder` without a row mapper.
    ///
    /// # Examples
    ///
    /// ```
    /// use csv_copy_batch::item::csv::csv_reader::CsvItemReaderBuilder;
    /// use csv_copy_batch::record::UserRowMapper;
    ///
    /// let builder = CsvItemReaderBuilder::new().row_mapper(UserRowMapper::default());
    /// ```
    pub fn new() -> Self {
        Self { row_mapper: () }
    }
}

impl Default for CsvItemReaderBuilder<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> CsvItemReaderBuilder<M> {
    /// Sets the mapper used to decode each row.
    pub fn row_mapper<N>(self, row_mapper: N) -> CsvItemReaderBuilder<N> {
        CsvItemReaderBuilder { row_mapper }
    }

    fn reader_builder() -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .trim(Trim::None)
            .delimiter(b',')
            .has_headers(false)
            .flexible(true);
        builder
    }

    /// Creates a `CsvItemReader` from any source implementing `Read`.
    pub fn from_reader<R: Read>(self, rdr: R) -> CsvItemReader<R, M> {
        let records = Self::reader_builder().from_reader(rdr).into_records();

        CsvItemReader {
            records: RefCell::new(records),
            row_mapper: self.row_mapper,
        }
    }

    /// Creates a `CsvItemReader` from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Open`] if the file cannot be opened. The file is
    /// closed when the returned reader is dropped.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csv_copy_batch::item::csv::csv_reader::CsvItemReaderBuilder;
    /// use csv_copy_batch::record::UserRowMapper;
    ///
    /// let reader = CsvItemReaderBuilder::new()
    ///     .row_mapper(UserRowMapper::default())
    ///     .from_path("users.csv")?;
    /// # Ok::<(), csv_copy_batch::BatchError>(())
    /// ```
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<CsvItemReader<File, M>, BatchError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| BatchError::Open {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;

        Ok(self.from_reader(file))
    }
}
