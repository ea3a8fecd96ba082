use std::path::{Path, PathBuf};

/// File read by the binary, relative to the working directory.
pub const DEFAULT_INPUT: &str = "users.csv";

/// File written by the binary, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "users_copy.csv";

/// How an existing destination file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Create the file, or empty it if it already exists.
    #[default]
    Truncate,
    /// Create the file, or write after its existing bytes.
    Append,
}

/// Settings for one pipeline run.
///
/// # Examples
///
/// ```
/// use csv_copy_batch::config::{PipelineConfig, WriteMode};
///
/// let config = PipelineConfig::default()
///     .input("in.csv")
///     .output("out.csv")
///     .write_mode(WriteMode::Append);
///
/// assert_eq!(config.get_input().to_str(), Some("in.csv"));
/// assert_eq!(config.get_write_mode(), WriteMode::Append);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    input: PathBuf,
    output: PathBuf,
    write_mode: WriteMode,
}

impl PipelineConfig {
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input: I, output: O) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            write_mode: WriteMode::default(),
        }
    }

    pub fn input<P: Into<PathBuf>>(mut self, input: P) -> Self {
        self.input = input.into();
        self
    }

    pub fn output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = output.into();
        self
    }

    pub fn write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn get_input(&self) -> &Path {
        &self.input
    }

    pub fn get_output(&self) -> &Path {
        &self.output
    }

    pub fn get_write_mode(&self) -> WriteMode {
        self.write_mode
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}
