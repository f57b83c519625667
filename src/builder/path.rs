//! Path-step construction and predicate attachment
//!
//! Contains [`PathBuilder`], the entry half of the fluent API: it accumulates
//! path steps (`/x`, `//x`, `//*`), attaches bracketed predicates built by a
//! nested [`ConditionBuilder`], and finalizes the expression text.

use crate::builder::conditions::ConditionBuilder;
use crate::builder::core::{Expression, QuotingMode, has_unclosed_literal};
use crate::error::{XPathError, XPathResult};

/// Fluent builder for XPath path expressions
///
/// Every chain operation appends to an owned text buffer and returns the
/// builder, so a whole selector reads as one expression:
///
/// ```
/// use xpath_fluent::XPath;
///
/// let selector = XPath::path()
///     .child_element(["html", "body"])
///     .any_depth_element("div")
///     .build();
/// assert_eq!(selector, "/html/body//div");
/// ```
///
/// No operation validates its arguments; producing well-formed XPath is the
/// caller's contract. See [`PathBuilder::try_build`] for the opt-in checks.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    /// Accumulated expression text
    pub(crate) expression: String,
    /// Active string-literal quoting policy
    pub(crate) quoting: QuotingMode,
    /// Set when the buffer can no longer be well-formed XPath
    pub(crate) tainted: bool,
}

impl Expression for PathBuilder {
    fn buffer(&self) -> &str {
        &self.expression
    }

    fn buffer_mut(&mut self) -> &mut String {
        &mut self.expression
    }

    fn quoting_mode(&self) -> QuotingMode {
        self.quoting
    }

    fn mark_tainted(&mut self) {
        self.tainted = true;
    }
}

impl PathBuilder {
    /// Start a new builder with an empty expression buffer
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    /// Set the quoting policy for string literals appended from here on
    ///
    /// Sub-builders created by [`should`](Self::should) inherit the mode.
    #[must_use]
    pub fn quoting(mut self, mode: QuotingMode) -> Self {
        self.quoting = mode;
        self
    }

    /// Select direct children, one `/name` segment per name
    ///
    /// Multi-segment paths go in one call:
    ///
    /// ```
    /// use xpath_fluent::XPath;
    ///
    /// let selector = XPath::path().child_element(["html", "body", "main"]).build();
    /// assert_eq!(selector, "/html/body/main");
    /// ```
    #[must_use]
    pub fn child_element<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.expression.push('/');
        for (index, name) in names.into_iter().enumerate() {
            if index > 0 {
                self.expression.push('/');
            }
            self.expression.push_str(name.as_ref());
        }
        self
    }

    /// Select an element at any depth (`//name`)
    #[must_use]
    pub fn any_depth_element(mut self, name: &str) -> Self {
        self.expression.push_str("//");
        self.expression.push_str(name);
        self
    }

    /// Select every element at any depth (`//*`)
    #[must_use]
    pub fn any_element(mut self) -> Self {
        self.expression.push_str("//*");
        self
    }

    /// Attach a bracketed predicate built by a nested condition builder
    ///
    /// The closure receives a fresh [`ConditionBuilder`] with an empty buffer
    /// (the parent's quoting mode carries over, nothing else) and returns its
    /// built text, which lands between `[` and `]`.
    ///
    /// ```
    /// use xpath_fluent::{ConditionExt, XPath};
    ///
    /// let selector = XPath::path()
    ///     .any_depth_element("div")
    ///     .should(|c| c.attribute_equals("id", "main").build())
    ///     .build();
    /// assert_eq!(selector, "//div[@id='main']");
    /// ```
    #[must_use]
    pub fn should<F>(mut self, predicate: F) -> Self
    where
        F: FnOnce(ConditionBuilder) -> String,
    {
        let condition = predicate(ConditionBuilder::create().quoting(self.quoting));
        if has_unclosed_literal(&condition) {
            self.tainted = true;
        }
        self.expression.push('[');
        self.expression.push_str(&condition);
        self.expression.push(']');
        self
    }

    /// Return the accumulated expression text
    ///
    /// Non-destructive: the builder stays usable, and repeated calls without
    /// further chaining return the same string. Emits a `log::debug!` trace
    /// of the buffer, silent unless a logger is installed.
    #[must_use]
    pub fn build(&self) -> String {
        log::debug!("built xpath expression: {}", self.expression);
        self.expression.clone()
    }

    /// Return the expression text, rejecting obviously broken buffers
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind) when no step
    /// or condition was ever appended, or when a verbatim-quoted literal
    /// carried a single quote and the buffer can no longer be well-formed
    /// XPath.
    pub fn try_build(&self) -> XPathResult<String> {
        if self.expression.is_empty() {
            return Err(XPathError::invalid_argument(
                "expression is empty, no steps or conditions were appended",
            ));
        }
        if self.tainted {
            return Err(XPathError::invalid_argument(
                "a string literal contains an unescaped single quote, use QuotingMode::Concat",
            ));
        }
        Ok(self.build())
    }
}
