//! Condition builder tests
//!
//! Tests for the predicate primitives, boolean connectives, and bracketed
//! grouping, mirroring src/builder/conditions.rs

use xpath_fluent::{ConditionBuilder, ConditionExt, XPath};

#[test]
fn attribute_exists_appends_at_sign() {
    let condition = XPath::condition().attribute_exists("id").build();
    assert_eq!(condition, "@id");
}

#[test]
fn attribute_equals_quotes_value() {
    let condition = XPath::condition().attribute_equals("class", "active").build();
    assert_eq!(condition, "@class='active'");
}

#[test]
fn text_equals_quotes_value() {
    let condition = XPath::condition().text_equals("Hello").build();
    assert_eq!(condition, "text()='Hello'");
}

#[test]
fn text_contains_wraps_in_contains() {
    let condition = XPath::condition().text_contains("world").build();
    assert_eq!(condition, "contains(text(), 'world')");
}

#[test]
fn attribute_contains_wraps_in_contains() {
    let condition = XPath::condition().attribute_contains("class", "card").build();
    assert_eq!(condition, "contains(@class, 'card')");
}

#[test]
fn have_appends_current_node_reference() {
    let condition = XPath::condition().have().build();
    assert_eq!(condition, ".");
}

#[test]
fn connectives_carry_surrounding_spaces() {
    let condition = XPath::condition()
        .attribute_exists("a")
        .and()
        .attribute_exists("b")
        .or()
        .attribute_exists("c")
        .build();
    assert_eq!(condition, "@a and @b or @c");
}

#[test]
fn bracket_groups_sub_condition() {
    let condition = ConditionBuilder::create()
        .attribute_equals("a", "1")
        .and()
        .bracket(|b| {
            b.attribute_equals("c", "2")
                .or()
                .attribute_equals("d", "3")
                .build()
        })
        .build();
    assert_eq!(condition, "@a='1' and (@c='2' or @d='3')");
}

#[test]
fn bracket_receives_fresh_builder() {
    let condition = XPath::condition()
        .attribute_exists("outer")
        .and()
        .bracket(|b| {
            assert_eq!(b.build(), "", "nested builder should start empty");
            b.have().build()
        })
        .build();
    assert_eq!(condition, "@outer and (.)");
}

#[test]
fn brackets_nest() {
    let condition = XPath::condition()
        .bracket(|outer| {
            outer
                .attribute_exists("a")
                .and()
                .bracket(|inner| inner.attribute_exists("b").build())
                .build()
        })
        .build();
    assert_eq!(condition, "(@a and (@b))");
}

#[test]
fn build_is_idempotent() {
    let builder = XPath::condition().have();
    assert_eq!(builder.build(), builder.build());
}

#[test]
fn expression_capability_exposes_buffer() {
    use xpath_fluent::Expression;

    let builder = XPath::condition().have().and().attribute_exists("id");
    assert_eq!(builder.buffer(), ". and @id");
    assert_eq!(builder.build(), builder.buffer());
}

#[test]
fn try_build_rejects_empty_condition() {
    let error = XPath::condition()
        .try_build()
        .expect_err("empty condition should not build");
    assert_eq!(error.kind, xpath_fluent::ErrorKind::InvalidArgument);
}
