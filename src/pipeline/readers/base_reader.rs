use crate::data_model::DictEntry;
use crate::error::Result;

/// Trait for reading dictionary entries from an input source.
pub trait BaseReader {
    fn read_entries(&self) -> Result<Box<dyn Iterator<Item = Result<DictEntry>>>>;
}
