// Declare the modules that form the library's public API.
// The binary uses them via `use dictclean::module_name;`.
pub mod cleaner_logic;
pub mod config;
pub mod data_model;
pub mod error;
pub mod executor;
pub mod pipeline;
pub mod utils;
