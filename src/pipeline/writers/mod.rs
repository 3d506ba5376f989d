// src/pipeline/writers/mod.rs

pub mod base_writer;
pub mod line_writer;

pub use base_writer::BaseWriter;
pub use line_writer::LineWriter;
