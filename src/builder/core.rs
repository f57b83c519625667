//! Core expression-accumulation capability and quoting policy
//!
//! Contains the [`Expression`] trait shared by both builder types, the
//! [`QuotingMode`] policy for string literals, and the literal renderer.

/// Quoting policy for string literals inserted into an expression
///
/// XPath 1.0 string literals have no escape syntax, so a single quote inside
/// a single-quoted literal breaks the expression. The policy decides what the
/// builder does when a caller-supplied value contains `'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuotingMode {
    /// Insert the value verbatim between single quotes
    ///
    /// A value containing `'` still produces `'val'ue'` output, matching the
    /// historical behavior, but marks the builder so [`try_build`] can report
    /// it.
    ///
    /// [`try_build`]: crate::PathBuilder::try_build
    #[default]
    Verbatim,
    /// Render quote-bearing values through the XPath 1.0 `concat(...)` idiom
    ///
    /// `it's` becomes `concat('it', "'", 's')`. Values without a single quote
    /// render exactly as [`QuotingMode::Verbatim`] does.
    Concat,
}

/// Render a caller-supplied value as an XPath string literal
///
/// Returns the rendered text and whether the value could not be represented
/// cleanly under the active mode (a quote-bearing value in verbatim mode).
pub(crate) fn render_literal(value: &str, mode: QuotingMode) -> (String, bool) {
    if !value.contains('\'') || mode == QuotingMode::Verbatim {
        return (format!("'{value}'"), value.contains('\''));
    }

    // concat('seg', "'", 'seg', ...) - the quote itself rides in a
    // double-quoted argument, every other segment stays single-quoted.
    let mut parts: Vec<String> = Vec::new();
    for (index, segment) in value.split('\'').enumerate() {
        if index > 0 {
            parts.push("\"'\"".to_string());
        }
        if !segment.is_empty() {
            parts.push(format!("'{segment}'"));
        }
    }
    if parts.len() == 1 {
        // A lone quote needs no concat wrapper, "'" is already a literal.
        return (parts.remove(0), false);
    }
    (format!("concat({})", parts.join(", ")), false)
}

/// Shared expression-accumulation capability
///
/// Both [`PathBuilder`] and [`ConditionBuilder`] implement this trait, which
/// is the seam the condition primitives in
/// [`ConditionExt`](crate::builder::conditions::ConditionExt) hang off of.
/// Composition through a capability trait replaces the inheritance the
/// builder pattern would otherwise invite.
///
/// [`PathBuilder`]: crate::PathBuilder
/// [`ConditionBuilder`]: crate::ConditionBuilder
pub trait Expression {
    /// Read access to the accumulated expression text
    fn buffer(&self) -> &str;

    /// Mutable access to the accumulated expression text
    fn buffer_mut(&mut self) -> &mut String;

    /// The active quoting policy for string literals
    fn quoting_mode(&self) -> QuotingMode;

    /// Record that the buffer now holds text that cannot be well-formed XPath
    fn mark_tainted(&mut self);

    /// Append a raw fragment to the buffer
    fn push_raw(&mut self, fragment: &str) {
        self.buffer_mut().push_str(fragment);
    }

    /// Append a caller-supplied value as a quoted string literal
    fn push_literal(&mut self, value: &str) {
        let (rendered, tainted) = render_literal(value, self.quoting_mode());
        if tainted {
            self.mark_tainted();
        }
        self.buffer_mut().push_str(&rendered);
    }
}

/// Literal-boundary check used when splicing a finished sub-expression into a
/// parent
///
/// Walks the fragment toggling in/out of single- and double-quoted literals;
/// ending inside one means a literal was left unclosed. This is a boundary
/// scan, not a parse.
pub(crate) fn has_unclosed_literal(fragment: &str) -> bool {
    #[derive(PartialEq)]
    enum Quote {
        None,
        Single,
        Double,
    }

    let mut state = Quote::None;
    for ch in fragment.chars() {
        state = match (state, ch) {
            (Quote::None, '\'') => Quote::Single,
            (Quote::None, '"') => Quote::Double,
            (Quote::Single, '\'') | (Quote::Double, '"') => Quote::None,
            (state, _) => state,
        };
    }
    state != Quote::None
}
