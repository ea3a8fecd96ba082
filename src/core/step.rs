use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use log::{debug, info};
use uuid::Uuid;

use crate::BatchError;

use super::{
    build_name,
    item::{ItemReader, ItemVisitor, ItemWriter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Starting,
    Started,
    Success,
    Error,
}

/// Summary of a successful step run.
#[derive(Debug)]
pub struct StepExecution {
    /// Unique identifier for this run
    pub id: Uuid,
    pub name: String,
    pub status: StepStatus,
    pub start: Instant,
    pub end: Instant,
    pub duration: Duration,
    /// Number of items loaded from the reader
    pub read_count: usize,
    /// Number of items handed to the writer and flushed
    pub write_count: usize,
}

/// Reads every item from `reader`, in order.
///
/// Stops at the first error: no partial sequence is ever returned. An empty
/// source yields an empty `Vec`.
pub fn load<T>(reader: &dyn ItemReader<T>) -> Result<Vec<T>, BatchError> {
    debug!("Start loading items");
    let mut items = Vec::new();
    while let Some(item) = reader.read()? {
        items.push(item);
    }
    debug!("End loading items: {}", items.len());
    Ok(items)
}

/// Hands each item to `visitor`, in order.
pub fn visit<T>(items: &[T], visitor: &dyn ItemVisitor<T>) {
    debug!("Start visiting items");
    items.iter().for_each(|item| visitor.visit(item));
    debug!("End visiting items");
}

/// Writes all `items` and flushes the writer.
///
/// The writer is closed whether or not writing succeeded. A write or flush
/// error takes precedence over a close error.
pub fn dump<T>(writer: &dyn ItemWriter<T>, items: &[T]) -> Result<usize, BatchError> {
    debug!("Start dumping items");
    writer.open()?;

    let written = writer.write(items).and_then(|()| writer.flush());
    let closed = writer.close();

    written?;
    closed?;

    debug!("End dumping items: {}", items.len());
    Ok(items.len())
}

/// A single load → visit → dump pass.
///
/// # Examples
///
/// ```
/// use csv_copy_batch::core::step::{StepBuilder, StepStatus};
/// use csv_copy_batch::item::csv::{csv_reader::CsvItemReaderBuilder, csv_writer::CsvItemWriterBuilder};
/// use csv_copy_batch::record::{User, UserRowMapper};
///
/// let reader = CsvItemReaderBuilder::new()
///     .row_mapper(UserRowMapper::default())
///     .from_reader("1,Jim,Todd,43,WV\n".as_bytes());
/// let writer = CsvItemWriterBuilder::new()
///     .row_mapper(UserRowMapper::default())
///     .from_writer(vec![]);
///
/// let step = StepBuilder::<User>::new(&reader, &writer).name("copy").build();
/// let execution = step.execute().unwrap();
///
/// assert_eq!(execution.write_count, 1);
/// assert_eq!(step.get_status(), StepStatus::Success);
/// ```
pub struct Step<'a, T> {
    name: String,
    reader: &'a dyn ItemReader<T>,
    visitor: Option<&'a dyn ItemVisitor<T>>,
    writer: &'a dyn ItemWriter<T>,
    status: Cell<StepStatus>,
}

impl<T> Step<'_, T> {
    pub fn execute(&self) -> Result<StepExecution, BatchError> {
        let id = Uuid::new_v4();
        let start = Instant::now();

        info!("Start of step: {}, id: {}", self.name, id);
        self.status.set(StepStatus::Started);

        match self.run() {
            Ok((read_count, write_count)) => {
                self.status.set(StepStatus::Success);
                info!(
                    "End of step: {}, id: {}, read: {}, written: {}",
                    self.name, id, read_count, write_count
                );

                Ok(StepExecution {
                    id,
                    name: self.name.clone(),
                    status: StepStatus::Success,
                    start,
                    end: Instant::now(),
                    duration: start.elapsed(),
                    read_count,
                    write_count,
                })
            }
            Err(error) => {
                self.status.set(StepStatus::Error);
                info!("End of step: {}, id: {}, failed", self.name, id);
                Err(error)
            }
        }
    }

    fn run(&self) -> Result<(usize, usize), BatchError> {
        let items = load(self.reader)?;

        if let Some(visitor) = self.visitor {
            visit(&items, visitor);
        }

        let written = dump(self.writer, &items)?;
        Ok((items.len(), written))
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_status(&self) -> StepStatus {
        self.status.get()
    }
}

pub struct StepBuilder<'a, T> {
    name: Option<String>,
    reader: &'a dyn ItemReader<T>,
    visitor: Option<&'a dyn ItemVisitor<T>>,
    writer: &'a dyn ItemWriter<T>,
}

impl<'a, T> StepBuilder<'a, T> {
    pub fn new(reader: &'a dyn ItemReader<T>, writer: &'a dyn ItemWriter<T>) -> Self {
        Self {
            name: None,
            reader,
            visitor: None,
            writer,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    pub fn visitor(mut self, visitor: &'a dyn ItemVisitor<T>) -> Self {
        self.visitor = Some(visitor);
        self
    }

    /// If no name has been provided, a random name is generated.
    pub fn build(self) -> Step<'a, T> {
        Step {
            name: self.name.unwrap_or_else(build_name),
            reader: self.reader,
            visitor: self.visitor,
            writer: self.writer,
            status: Cell::new(StepStatus::Starting),
        }
    }
}
