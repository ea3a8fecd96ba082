use csv::StringRecord;

use crate::error::BatchError;

/// Result of a single read: `Ok(None)` once the source is exhausted.
pub type ItemReaderResult<R> = Result<Option<R>, BatchError>;

/// Result of writing a slice of items.
pub type ItemWriterResult = Result<(), BatchError>;

pub trait ItemReader<R> {
    fn read(&self) -> ItemReaderResult<R>;
}

/// A read-only pass over items, used for side effects such as printing.
pub trait ItemVisitor<T> {
    fn visit(&self, item: &T);
}

impl<T, F> ItemVisitor<T> for F
where
    F: Fn(&T),
{
    fn visit(&self, item: &T) {
        self(item)
    }
}

pub trait ItemWriter<W> {
    fn write(&self, items: &[W]) -> ItemWriterResult;
    fn flush(&self) -> ItemWriterResult;
    fn open(&self) -> ItemWriterResult {
        Ok(())
    }
    fn close(&self) -> ItemWriterResult {
        Ok(())
    }
}

/// Maps between a flat CSV row and a typed item.
///
/// `map_row` decodes one row, `unmap_row` is its inverse. Readers and
/// writers in [`crate::item::csv`] delegate all field handling to a mapper so
/// that the positional layout lives in exactly one place.
pub trait RowMapper<T> {
    fn map_row(&self, row: &StringRecord) -> Result<T, BatchError>;
    fn unmap_row(&self, item: &T) -> StringRecord;
}

/// Visitor that does nothing.
#[derive(Default)]
pub struct NoopVisitor {}

impl<T> ItemVisitor<T> for NoopVisitor {
    fn visit(&self, _item: &T) {}
}
