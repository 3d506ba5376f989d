// src/pipeline/mod.rs

pub mod filters;
pub mod readers;
pub mod writers;
