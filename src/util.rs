//! Utility modules.

pub mod utf8;
