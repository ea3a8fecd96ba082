#![allow(dead_code, unused_imports)]

mod mocks;

use std::{env::temp_dir, path::PathBuf};

use rand::distr::{Alphanumeric, SampleString};

pub use mocks::{full_disk_file, unflushable_file};

/// A fresh path in the temp directory.
pub fn temp_csv(prefix: &str) -> PathBuf {
    let file_name = Alphanumeric.sample_string(&mut rand::rng(), 16);
    temp_dir().join(format!("{}_{}.csv", prefix, file_name))
}
