//! Literal quoting policy tests
//!
//! Verifies the verbatim default, the taint reporting through try_build, and
//! the opt-in concat rendering for quote-bearing values.

use xpath_fluent::{ConditionExt, QuotingMode, XPath};

#[test]
fn verbatim_is_the_default_and_passes_quotes_through() {
    // Historical behavior: the value lands between the quotes untouched,
    // even when that breaks the expression.
    let condition = XPath::condition().attribute_equals("title", "it's").build();
    assert_eq!(condition, "@title='it's'");
}

#[test]
fn verbatim_quote_taints_try_build() {
    let builder = XPath::condition().attribute_equals("title", "it's");
    assert_eq!(builder.build(), "@title='it's'", "build output stays verbatim");

    let error = builder
        .try_build()
        .expect_err("quote-bearing verbatim literal should be rejected");
    assert_eq!(error.kind, xpath_fluent::ErrorKind::InvalidArgument);
}

#[test]
fn concat_mode_renders_quote_bearing_values() {
    let condition = XPath::condition()
        .quoting(QuotingMode::Concat)
        .attribute_equals("title", "it's")
        .build();
    assert_eq!(condition, "@title=concat('it', \"'\", 's')");
}

#[test]
fn concat_mode_leaves_clean_values_alone() {
    let condition = XPath::condition()
        .quoting(QuotingMode::Concat)
        .attribute_equals("class", "active")
        .build();
    assert_eq!(condition, "@class='active'");
}

#[test]
fn concat_mode_handles_lone_quote() {
    // A value that is nothing but a quote needs no concat wrapper.
    let condition = XPath::condition()
        .quoting(QuotingMode::Concat)
        .text_equals("'")
        .build();
    assert_eq!(condition, "text()=\"'\"");
}

#[test]
fn concat_mode_builds_cleanly() {
    let selector = XPath::path()
        .quoting(QuotingMode::Concat)
        .any_depth_element("div")
        .should(|c| c.text_contains("don't").build())
        .try_build()
        .expect("concat-rendered literal should build");
    assert_eq!(selector, "//div[contains(text(), concat('don', \"'\", 't'))]");
}

#[test]
fn quoting_mode_propagates_into_should() {
    let selector = XPath::path()
        .quoting(QuotingMode::Concat)
        .child_element(["p"])
        .should(|c| c.text_equals("it's").build())
        .build();
    assert_eq!(selector, "/p[text()=concat('it', \"'\", 's')]");
}

#[test]
fn quoting_mode_propagates_into_bracket() {
    let condition = XPath::condition()
        .quoting(QuotingMode::Concat)
        .bracket(|b| b.text_equals("it's").build())
        .build();
    assert_eq!(condition, "(text()=concat('it', \"'\", 's'))");
}

#[test]
fn tainted_predicate_taints_the_parent_path() {
    // The parent only sees the spliced text, the boundary scan catches the
    // unclosed literal.
    let builder = XPath::path()
        .any_depth_element("div")
        .should(|c| c.attribute_equals("title", "it's").build());

    assert_eq!(builder.build(), "//div[@title='it's']");
    builder
        .try_build()
        .expect_err("parent should reject a predicate with an unclosed literal");
}
