//! Model Provider Implementations
//!
//! Concrete implementations of the ModelProvider port.

mod raw_file;

pub use raw_file::RawFileProvider;
