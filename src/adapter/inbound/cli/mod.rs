//! CLI module graph.

pub mod command;
pub mod config;
pub mod fixtures;
pub mod output;
pub mod score;
