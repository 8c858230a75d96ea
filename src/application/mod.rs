//! Application services (use cases).
//!
//! These services coordinate the scoring domain with the outbound ports.

pub mod fixture;
pub mod resolution;

pub use resolution::ResolutionService;
