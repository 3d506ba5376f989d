// src/pipeline/filters/mod.rs

mod case_normalizer;
mod length_filter;
mod punctuation_filter;

// Re-export the main types
pub use case_normalizer::LowercaseNormalizer;
pub use length_filter::MinLengthFilter;
pub use punctuation_filter::PunctuationFilter;
