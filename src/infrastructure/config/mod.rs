//! Infrastructure configuration modules.

pub mod logging;
pub mod output;
pub mod settings;
