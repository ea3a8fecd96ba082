/*!
 # csv-copy-batch

 Load a fixed-schema CSV file into typed records, visit every record, and
 write the records back out to a second CSV file.

 Rows are positional, without a header: `id,first_name,last_name,age,state`.

 ## Core Concepts

- **User:** the typed record, see [`record::User`].
- **RowMapper:** the row codec turning a CSV row into an item and back. Numeric
  columns use the lenient numeric parse ([`record::lenient_int`]): text that is
  not an integer becomes `0` instead of failing the row.
- **ItemReader / ItemWriter:** sources and sinks of items, one row at a time.
- **ItemVisitor:** a read-only pass over the loaded items, used for printing.
- **Step:** one `load` → `visit` → `dump` pass, stopping at the first error.
- **FilePipeline:** a step wired to the input and output files of a
  [`config::PipelineConfig`].

 ## Getting Started

```rust
# use std::{env::temp_dir, fs};
use csv_copy_batch::{
    config::PipelineConfig,
    item::logger::LoggerVisitor,
    pipeline::FilePipeline,
    record::User,
};

# fn main() -> Result<(), Box<dyn std::error::Error>> {
# let input = temp_dir().join("csv-copy-batch-getting-started.csv");
# let output = temp_dir().join("csv-copy-batch-getting-started-copy.csv");
fs::write(&input, "1,Jim,Todd,43,WV\n2,Ann,Lee,29,CA\n")?;

let pipeline = FilePipeline::new(PipelineConfig::new(&input, &output));
let execution = pipeline.run(&LoggerVisitor::default())?;
assert_eq!(execution.write_count, 2);

let users = FilePipeline::new(PipelineConfig::new(&output, &input)).load()?;
assert_eq!(users[0], User::new(1, "Jim", "Todd", 43, "WV"));
# Ok(())
# }
```

 Errors are returned as [`BatchError`]; nothing in the library exits the
 process.
 */

/// Pipeline settings
pub mod config;

/// Core module for batch operations
pub mod core;

/// Error types for batch operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Set of items readers / writers / visitors
pub mod item;

/// File-to-file copy built on the core step
pub mod pipeline;

/// The user record and its row codec
pub mod record;
