use crate::data_model::DictEntry;
use crate::error::Result;

/// Trait for writing batches of DictEntries to an output sink (e.g. file).
pub trait BaseWriter {
    /// Write a batch of entries to the sink, in order.
    fn write_batch(&mut self, entries: &[DictEntry]) -> Result<()>;

    /// Finalize and close the output writer.
    fn close(self) -> Result<()>;
}
