//! Shared utilities.

pub mod code;
pub mod target_url;
