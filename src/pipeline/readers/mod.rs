// src/pipeline/readers/mod.rs

pub mod base_reader;
pub mod line_reader;

pub use base_reader::BaseReader;
pub use line_reader::LineReader;
