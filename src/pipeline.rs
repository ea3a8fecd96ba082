use std::fs::File;

use log::info;

use crate::{
    config::PipelineConfig,
    core::{
        item::ItemVisitor,
        step::{self, StepBuilder, StepExecution},
    },
    error::BatchError,
    item::csv::{
        csv_reader::{CsvItemReader, CsvItemReaderBuilder},
        csv_writer::{CsvItemWriter, CsvItemWriterBuilder},
    },
    record::{User, UserRowMapper},
};

/// Copies a user CSV file through typed [`User`] records.
///
/// Each operation opens its own file and closes it before returning, on
/// success and on error alike.
///
/// # Examples
///
/// ```no_run
/// use csv_copy_batch::config::PipelineConfig;
/// use csv_copy_batch::item::console::ConsoleVisitor;
/// use csv_copy_batch::pipeline::FilePipeline;
///
/// let pipeline = FilePipeline::new(PipelineConfig::default());
/// let execution = pipeline.run(&ConsoleVisitor::new())?;
/// println!("copied {} record(s)", execution.write_count);
/// # Ok::<(), csv_copy_batch::BatchError>(())
/// ```
pub struct FilePipeline {
    config: PipelineConfig,
}

impl FilePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn get_config(&self) -> &PipelineConfig {
        &self.config
    }

    fn reader(&self) -> Result<CsvItemReader<File, UserRowMapper>, BatchError> {
        CsvItemReaderBuilder::new()
            .row_mapper(UserRowMapper::default())
            .from_path(self.config.get_input())
    }

    fn writer(&self) -> CsvItemWriter<File, UserRowMapper> {
        CsvItemWriterBuilder::new()
            .row_mapper(UserRowMapper::default())
            .write_mode(self.config.get_write_mode())
            .from_path(self.config.get_output())
    }

    /// Reads every record of the input file, in file order.
    pub fn load(&self) -> Result<Vec<User>, BatchError> {
        info!("Loading {}", self.config.get_input().display());
        step::load(&self.reader()?)
    }

    /// Writes `users` to the output file and flushes it.
    pub fn dump(&self, users: &[User]) -> Result<usize, BatchError> {
        info!("Dumping {}", self.config.get_output().display());
        step::dump(&self.writer(), users)
    }

    /// Load, visit each record, then dump.
    ///
    /// The output file is only opened once the whole input has been read, so
    /// a failing read leaves it untouched.
    pub fn run(&self, visitor: &dyn ItemVisitor<User>) -> Result<StepExecution, BatchError> {
        let reader = self.reader()?;
        let writer = self.writer();

        let step = StepBuilder::<User>::new(&reader, &writer)
            .name("copy-users")
            .visitor(visitor)
            .build();

        step.execute()
    }
}
