//! Fluent XPath Expression Builder
//!
//! Composable, chainable construction of XPath selector strings without
//! manual concatenation. Path steps and predicates read as one fluent
//! expression; predicates are built by nested condition builders handed to
//! closures.
//!
//! ```
//! use xpath_fluent::{ConditionExt, XPath};
//!
//! let selector = XPath::path()
//!     .child_element(["html", "body"])
//!     .any_depth_element("div")
//!     .should(|c| {
//!         c.attribute_equals("id", "main")
//!             .and()
//!             .attribute_contains("class", "card")
//!             .build()
//!     })
//!     .build();
//!
//! assert_eq!(selector, "/html/body//div[@id='main' and contains(@class, 'card')]");
//! ```
//!
//! The builder assembles text, nothing more: no parsing, no validation of
//! arbitrary XPath, no evaluation against a document. See
//! [`PathBuilder::try_build`] and [`QuotingMode`] for the opt-in guard rails
//! around caller-supplied string literals.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod error;

// Re-export all public API components
pub use builder::*;
pub use error::{ErrorKind, XPathError, XPathResult};

/// Main entry point providing static builder shortcuts
pub struct XPath;

impl XPath {
    /// Start a new path expression
    ///
    /// Shorthand for `PathBuilder::create()`
    #[must_use]
    pub fn path() -> PathBuilder {
        PathBuilder::create()
    }

    /// Start a standalone condition expression
    ///
    /// Shorthand for `ConditionBuilder::create()`
    #[must_use]
    pub fn condition() -> ConditionBuilder {
        ConditionBuilder::create()
    }
}

/// Start a new path expression
///
/// Shorthand for `PathBuilder::create()`
#[must_use]
pub fn path() -> PathBuilder {
    PathBuilder::create()
}

/// Start a standalone condition expression
///
/// Shorthand for `ConditionBuilder::create()`
#[must_use]
pub fn condition() -> ConditionBuilder {
    ConditionBuilder::create()
}
