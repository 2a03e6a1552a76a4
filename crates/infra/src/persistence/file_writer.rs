// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files. Every handle is dropped before return.
pub struct FileWriter;

impl FileWriter {
    /// Truncate `path` (creating it if needed) and write `data`.
    ///
    /// Writes go through the existing path, so symlinks are followed and the
    /// target keeps its inode and permissions.
    pub fn overwrite<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let mut w = BufWriter::new(File::create(path.as_ref())?);
        w.write_all(data)?;
        w.flush()
    }
}
