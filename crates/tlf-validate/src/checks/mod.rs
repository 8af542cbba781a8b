//! Record-level integrity checks.

pub mod encoding;
pub mod identifier;
pub mod ownership;
