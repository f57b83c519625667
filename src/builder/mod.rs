//! Fluent XPath builder modules
//!
//! Provides the complete fluent API for assembling XPath selector strings
//! with method chaining.

pub mod conditions;
pub mod core;
pub mod path;

// Re-export all public types for convenience
pub use conditions::{ConditionBuilder, ConditionExt};
pub use core::{Expression, QuotingMode};
pub use path::PathBuilder;
