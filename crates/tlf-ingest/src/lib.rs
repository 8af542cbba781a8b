//! CSV readers for the TLF index pipeline.

pub mod export;
pub mod index;

pub use export::read_export;
pub use index::read_index;
