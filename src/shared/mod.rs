//! Shared value types used across API entities.

pub mod types;

// Re-export commonly used items
pub use types::*;
