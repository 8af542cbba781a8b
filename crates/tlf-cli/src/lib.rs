//! CLI library components for the TLF index toolchain.

pub mod logging;
pub mod pipeline;
