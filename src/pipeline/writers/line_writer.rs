use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::data_model::DictEntry;
use crate::error::Result;
use crate::pipeline::writers::BaseWriter;

/// Writes accepted entries to a plain-text file, one entry per line.
///
/// The output file is created (truncated) when the writer is constructed, so
/// prior contents are discarded even if the run ends up emitting nothing.
pub struct LineWriter {
    writer: BufWriter<File>,
}

impl LineWriter {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(LineWriter {
            writer: BufWriter::new(file),
        })
    }
}

impl BaseWriter for LineWriter {
    fn write_batch(&mut self, entries: &[DictEntry]) -> Result<()> {
        for entry in entries {
            self.writer.write_all(entry.text.as_bytes())?;
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn close(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
