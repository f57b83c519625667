//! Example usage of the fluent XPath builder with typical selector patterns

use xpath_fluent::{ConditionExt, QuotingMode, XPath};

fn main() {
    env_logger::init();

    // Direct-child steps, multiple segments in one call.
    let nav_links = XPath::path()
        .child_element(["html", "body", "nav"])
        .any_depth_element("a")
        .build();
    println!("nav links:     {nav_links}");

    // Predicate on an element anywhere in the document.
    let main_cards = XPath::path()
        .any_depth_element("div")
        .should(|c| {
            c.attribute_equals("id", "main")
                .and()
                .attribute_contains("class", "card")
                .build()
        })
        .build();
    println!("main cards:    {main_cards}");

    // Grouped boolean conditions via a nested bracket builder.
    let flagged = XPath::path()
        .any_element()
        .should(|c| {
            c.attribute_exists("data-flag")
                .and()
                .bracket(|b| {
                    b.text_contains("warning")
                        .or()
                        .text_contains("error")
                        .build()
                })
                .build()
        })
        .build();
    println!("flagged nodes: {flagged}");

    // Quote-bearing literals with the concat policy.
    let quoted = XPath::path()
        .quoting(QuotingMode::Concat)
        .any_depth_element("p")
        .should(|c| c.text_contains("don't panic").build())
        .build();
    println!("quoted text:   {quoted}");
}
