//! Mock destination standing in for `std::fs::File` when writes must fail.
use mockall::mock;

use std::io::{self, ErrorKind, Write};

mock! {
    pub File {}
    impl Write for File {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
        fn flush(&mut self) -> io::Result<()>;
    }
}

/// A file whose every write fails as if the disk were full.
pub fn full_disk_file() -> MockFile {
    let mut file = MockFile::new();
    file.expect_write()
        .returning(|_| Err(io::Error::new(ErrorKind::Other, "no space left on device")));
    file.expect_flush().returning(|| Ok(()));
    file
}

/// A file that accepts writes but fails to flush.
pub fn unflushable_file() -> MockFile {
    let mut file = MockFile::new();
    file.expect_write().returning(|buf| Ok(buf.len()));
    file.expect_flush()
        .returning(|| Err(io::Error::new(ErrorKind::Other, "flush failed")));
    file
}
