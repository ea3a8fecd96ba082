use std::{
    cell::RefCell,
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    result,
};

use csv::{Writer, WriterBuilder};
use log::debug;

use crate::{
    config::WriteMode,
    core::item::{ItemWriter, ItemWriterResult, RowMapper},
    BatchError,
};

type Opener<T> = Box<dyn FnOnce() -> Result<T, BatchError>>;

/// A CSV item writer that implements the `ItemWriter` trait.
///
/// Writers built with [`CsvItemWriterBuilder::from_path`] do not touch the
/// file system until [`ItemWriter::open`] is called; writing before that is
/// an error. Writers built with [`CsvItemWriterBuilder::from_writer`] are
/// ready immediately.
pub struct CsvItemWriter<T: Write, M> {
    wrapper: RefCell<Option<Writer<T>>>,
    opener: RefCell<Option<Opener<T>>>,
    row_mapper: M,
}

fn build_writer<W: Write>(wtr: W) -> Writer<W> {
    WriterBuilder::new()
        .flexible(false)
        .has_headers(false)
        .delimiter(b',')
        .from_writer(wtr)
}

impl<T: Write, R, M: RowMapper<R>> ItemWriter<R> for CsvItemWriter<T, M> {
    fn write(&self, items: &[R]) -> ItemWriterResult {
        let mut wrapper = self.wrapper.borrow_mut();
        let wrapper = wrapper
            .as_mut()
            .ok_or_else(|| BatchError::ItemWriter("writer is not open".to_owned()))?;

        for item in items {
            let row = self.row_mapper.unmap_row(item);
            wrapper
                .write_record(&row)
                .map_err(|error| BatchError::ItemWriter(error.to_string()))?;
        }
        Ok(())
    }

    /// Flush the contents of the internal buffer to the underlying writer.
    ///
    /// If there was a problem writing to the underlying writer, then an error
    /// is returned.
    ///
    /// Note that this also flushes the underlying writer.
    fn flush(&self) -> ItemWriterResult {
        match self.wrapper.borrow_mut().as_mut() {
            Some(wrapper) => wrapper
                .flush()
                .map_err(|error| BatchError::ItemWriter(error.to_string())),
            None => Err(BatchError::ItemWriter("writer is not open".to_owned())),
        }
    }

    /// Acquires the destination if it has not been acquired yet.
    fn open(&self) -> ItemWriterResult {
        if let Some(opener) = self.opener.borrow_mut().take() {
            let target = opener()?;
            *self.wrapper.borrow_mut() = Some(build_writer(target));
        }
        Ok(())
    }
}

impl<T: Write, M> CsvItemWriter<T, M> {
    pub fn into_inner(self) -> result::Result<T, BatchError> {
        match self.wrapper.into_inner() {
            Some(wrapper) => wrapper
                .into_inner()
                .map_err(|error| BatchError::ItemWriter(error.to_string())),
            None => Err(BatchError::ItemWriter("writer is not open".to_owned())),
        }
    }
}

pub struct CsvItemWriterBuilder<M> {
    row_mapper: M,
    write_mode: WriteMode,
}

impl CsvItemWriterBuilder<()> {
    pub fn new() -> CsvItemWriterBuilder<()> {
        CsvItemWriterBuilder {
            row_mapper: (),
            write_mode: WriteMode::default(),
        }
    }
}

impl Default for CsvItemWriterBuilder<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> CsvItemWriterBuilder<M> {
    pub fn row_mapper<N>(self, row_mapper: N) -> CsvItemWriterBuilder<N> {
        CsvItemWriterBuilder {
            row_mapper,
            write_mode: self.write_mode,
        }
    }

    /// How an existing destination file is treated by [`Self::from_path`].
    pub fn write_mode(mut self, write_mode: WriteMode) -> CsvItemWriterBuilder<M> {
        self.write_mode = write_mode;
        self
    }

    /// Targets `path`, opened or created according to the configured
    /// [`WriteMode`] when the writer is opened.
    ///
    /// Opening fails with [`BatchError::Open`] if the file cannot be opened or
    /// created.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> CsvItemWriter<File, M> {
        let path = path.as_ref().to_path_buf();
        let write_mode = self.write_mode;

        let opener: Opener<File> = Box::new(move || {
            let mut options = OpenOptions::new();
            options.create(true);
            match write_mode {
                WriteMode::Truncate => options.write(true).truncate(true),
                WriteMode::Append => options.append(true),
            };

            debug!("Opening {} in {:?} mode", path.display(), write_mode);
            options.open(&path).map_err(|error| BatchError::Open {
                path: path.clone(),
                reason: error.to_string(),
            })
        });

        CsvItemWriter {
            wrapper: RefCell::new(None),
            opener: RefCell::new(Some(opener)),
            row_mapper: self.row_mapper,
        }
    }

    /// Write rows to any `io::Write` target.
    ///
    /// # Example
    ///
    /// ```
    /// # use std::error::Error;
    /// # use csv_copy_batch::{item::csv::csv_writer::CsvItemWriterBuilder, core::item::ItemWriter};
    /// use csv_copy_batch::record::{User, UserRowMapper};
    ///
    /// # fn main() { example().unwrap(); }
    /// fn example() -> Result<(), Box<dyn Error>> {
    ///     let wtr = CsvItemWriterBuilder::new()
    ///         .row_mapper(UserRowMapper::default())
    ///         .from_writer(vec![]);
    ///
    ///     wtr.write(&[
    ///         User::new(1, "Jim", "Todd", 43, "WV"),
    ///         User::new(2, "Ann", "Lee", 29, "CA"),
    ///     ])?;
    ///
    ///     let data = String::from_utf8(wtr.into_inner()?)?;
    ///     assert_eq!(data, "\
    /// 1,Jim,Todd,43,WV
    /// 2,Ann,Lee,29,CA
    /// ");
    ///     Ok(())
    /// }
    /// ```
    pub fn from_writer<W: Write>(self, wtr: W) -> CsvItemWriter<W, M> {
        CsvItemWriter {
            wrapper: RefCell::new(Some(build_writer(wtr))),
            opener: RefCell::new(None),
            row_mapper: self.row_mapper,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env::temp_dir, error::Error, fs};

    use rand::distr::{Alphanumeric, SampleString};

    use crate::{
        config::WriteMode,
        core::item::ItemWriter,
        item::csv::csv_writer::CsvItemWriterBuilder,
        record::{User, UserRowMapper},
    };

    #[test]
    fn this_test_will_pass() -> Result<(), Box<dyn Error>> {
        let wtr = CsvItemWriterBuilder::new()
            .row_mapper(UserRowMapper::default())
            .from_writer(vec![]);

        wtr.write(&[User::new(1, "Jim", "Todd", 43, "WV")])?;
        wtr.write(&[User::new(2, "Ann", "Lee", 29, "CA")])?;

        let data = String::from_utf8(wtr.into_inner()?)?;
        assert_eq!(
            data,
            "1,Jim,Todd,43,WV
2,Ann,Lee,29,CA
"
        );

        Ok(())
    }

    #[test]
    fn fields_should_be_quoted_when_needed() -> Result<(), Box<dyn Error>> {
        let wtr = CsvItemWriterBuilder::new()
            .row_mapper(UserRowMapper::default())
            .from_writer(vec![]);

        wtr.write(&[User::new(3, "Lee, Ann", "O\"Neil", 29, "line\nbreak")])?;

        let data = String::from_utf8(wtr.into_inner()?)?;
        assert_eq!(data, "3,\"Lee, Ann\",\"O\"\"Neil\",29,\"line\nbreak\"\n");

        Ok(())
    }

    #[test]
    fn records_should_be_written_to_file() -> Result<(), Box<dyn Error>> {
        let path = temp_dir().join(format!(
            "{}.csv",
            Alphanumeric.sample_string(&mut rand::rng(), 16)
        ));
        fs::write(&path, "stale content that is longer than the new rows\n")?;

        {
            let wtr = CsvItemWriterBuilder::new()
                .row_mapper(UserRowMapper::default())
                .from_path(&path);
            ItemWriter::<User>::open(&wtr)?;
            wtr.write(&[User::new(1, "Jim", "Todd", 43, "WV")])?;
            ItemWriter::<User>::flush(&wtr)?;
        }

        assert_eq!(fs::read_to_string(&path)?, "1,Jim,Todd,43,WV\n");

        fs::remove_file(&path).ok();
        Ok(())
    }

    #[test]
    fn append_mode_should_keep_existing_rows() -> Result<(), Box<dyn Error>> {
        let path = temp_dir().join(format!(
            "{}.csv",
            Alphanumeric.sample_string(&mut rand::rng(), 16)
        ));
        fs::write(&path, "1,Jim,Todd,43,WV\n")?;

        {
            let wtr = CsvItemWriterBuilder::new()
                .row_mapper(UserRowMapper::default())
                .write_mode(WriteMode::Append)
                .from_path(&path);
            ItemWriter::<User>::open(&wtr)?;
            wtr.write(&[User::new(2, "Ann", "Lee", 29, "CA")])?;
            ItemWriter::<User>::flush(&wtr)?;
        }

        assert_eq!(
            fs::read_to_string(&path)?,
            "1,Jim,Todd,43,WV\n2,Ann,Lee,29,CA\n"
        );

        fs::remove_file(&path).ok();
        Ok(())
    }
}
