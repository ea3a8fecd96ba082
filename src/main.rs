use std::{env, process};

use anyhow::{Context, Result};
use log::{info, LevelFilter};

use csv_copy_batch::{
    config::PipelineConfig, item::console::ConsoleVisitor, pipeline::FilePipeline,
};

fn init_logging() {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if env::var("RUST_LOG").is_err() {
        builder.filter_module("csv_copy_batch", LevelFilter::Info);
    }
    let _ = builder.format_timestamp_millis().try_init();
}

fn run() -> Result<()> {
    let config = PipelineConfig::default();
    let pipeline = FilePipeline::new(config.clone());

    let execution = pipeline.run(&ConsoleVisitor::new()).with_context(|| {
        format!(
            "Copying {} to {}",
            config.get_input().display(),
            config.get_output().display()
        )
    })?;

    info!(
        "Copied {} record(s) in {:?}",
        execution.write_count, execution.duration
    );
    Ok(())
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}
