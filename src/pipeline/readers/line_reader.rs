use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::data_model::DictEntry;
use crate::error::Result;
use crate::pipeline::readers::BaseReader;

/// Reads a newline-delimited word list, yielding one `DictEntry` per line in
/// input order. The line terminator is stripped (`\n`, and a trailing `\r`
/// for CRLF input); it never counts toward downstream length checks.
pub struct LineReader {
    path: PathBuf,
}

impl LineReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LineReader { path: path.into() }
    }
}

impl BaseReader for LineReader {
    fn read_entries(&self) -> Result<Box<dyn Iterator<Item = Result<DictEntry>>>> {
        // Opening here makes a missing input path fail the run up front.
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let source = self.path.display().to_string();

        let iter = reader
            .lines()
            .enumerate()
            .map(move |(idx, line_result)| match line_result {
                Ok(text) => Ok(DictEntry::new(idx + 1, source.clone(), text)),
                Err(e) => Err(e.into()),
            });

        Ok(Box::new(iter))
    }
}
