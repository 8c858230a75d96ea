//! Outbound adapters implementing the store ports.

pub mod file;
pub mod memory;
