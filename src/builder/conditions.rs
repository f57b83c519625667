//! Predicate condition primitives and the condition builder
//!
//! The attribute/text comparisons live in [`ConditionExt`], an extension
//! trait over the shared [`Expression`] capability, so they are available on
//! both builder types without one inheriting from the other.
//! [`ConditionBuilder`] adds the predicate-only operators: the current-node
//! reference, the boolean connectives, and parenthesized grouping.

use crate::builder::core::{Expression, QuotingMode, has_unclosed_literal};
use crate::error::{XPathError, XPathResult};

/// Condition primitives shared by both builder types
///
/// These are meaningful inside a predicate context (`[...]`), but nothing
/// stops a caller from appending them elsewhere; the builder never second-
/// guesses call order.
pub trait ConditionExt: Expression + Sized {
    /// Require that an attribute exists (`@attr`)
    #[must_use]
    fn attribute_exists(mut self, attr: &str) -> Self {
        self.push_raw("@");
        self.push_raw(attr);
        self
    }

    /// Require an exact attribute value (`@attr='value'`)
    #[must_use]
    fn attribute_equals(mut self, attr: &str, value: &str) -> Self {
        self.push_raw("@");
        self.push_raw(attr);
        self.push_raw("=");
        self.push_literal(value);
        self
    }

    /// Require exact text content (`text()='value'`)
    #[must_use]
    fn text_equals(mut self, value: &str) -> Self {
        self.push_raw("text()=");
        self.push_literal(value);
        self
    }

    /// Require a substring of the text content (`contains(text(), 'value')`)
    #[must_use]
    fn text_contains(mut self, value: &str) -> Self {
        self.push_raw("contains(text(), ");
        self.push_literal(value);
        self.push_raw(")");
        self
    }

    /// Require a substring of an attribute value (`contains(@attr, 'value')`)
    #[must_use]
    fn attribute_contains(mut self, attr: &str, value: &str) -> Self {
        self.push_raw("contains(@");
        self.push_raw(attr);
        self.push_raw(", ");
        self.push_literal(value);
        self.push_raw(")");
        self
    }
}

impl<T: Expression> ConditionExt for T {}

/// Fluent builder for predicate (boolean) expressions
///
/// Handed to the closures of [`PathBuilder::should`](crate::PathBuilder::should)
/// and [`ConditionBuilder::bracket`]; also usable standalone:
///
/// ```
/// use xpath_fluent::{ConditionExt, XPath};
///
/// let condition = XPath::condition()
///     .attribute_equals("a", "1")
///     .and()
///     .bracket(|b| b.attribute_equals("c", "2").or().attribute_equals("d", "3").build())
///     .build();
/// assert_eq!(condition, "@a='1' and (@c='2' or @d='3')");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConditionBuilder {
    pub(crate) expression: String,
    pub(crate) quoting: QuotingMode,
    pub(crate) tainted: bool,
}

impl Expression for ConditionBuilder {
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

impl ConditionBuilder {
    /// Start a new builder with an empty condition buffer
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    /// Set the quoting policy for string literals appended from here on
    #[must_use]
    pub fn quoting(mut self, mode: QuotingMode) -> Self {
        self.quoting = mode;
        self
    }

    /// Reference the current node (`.`)
    #[must_use]
    pub fn have(mut self) -> Self {
        self.expression.push('.');
        self
    }

    /// Join the previous and next condition with ` and `
    #[must_use]
    pub fn and(mut self) -> Self {
        self.expression.push_str(" and ");
        self
    }

    /// Join the previous and next condition with ` or `
    #[must_use]
    pub fn or(mut self) -> Self {
        self.expression.push_str(" or ");
        self
    }

    /// Group a sub-condition in parentheses
    ///
    /// The closure receives a fresh [`ConditionBuilder`] (empty buffer, the
    /// parent's quoting mode) and returns its built text, which lands between
    /// `(` and `)`.
    #[must_use]
    pub fn bracket<F>(mut self, sub_condition: F) -> Self
    where
        F: FnOnce(ConditionBuilder) -> String,
    {
        let inner = sub_condition(ConditionBuilder::create().quoting(self.quoting));
        if has_unclosed_literal(&inner) {
            self.tainted = true;
        }
        self.expression.push('(');
        self.expression.push_str(&inner);
        self.expression.push(')');
        self
    }

    /// Return the accumulated condition text
    ///
    /// Non-destructive and idempotent, like
    /// [`PathBuilder::build`](crate::PathBuilder::build). Emits the same
    /// `log::debug!` trace.
    #[must_use]
    pub fn build(&self) -> String {
        log::debug!("built xpath condition: {}", self.expression);
        self.expression.clone()
    }

    /// Return the condition text, rejecting obviously broken buffers
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::ErrorKind) when the
    /// buffer is empty or a verbatim-quoted literal carried a single quote.
    pub fn try_build(&self) -> XPathResult<String> {
        if self.expression.is_empty() {
            return Err(XPathError::invalid_argument(
                "condition is empty, nothing was appended",
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
