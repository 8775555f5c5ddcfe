use super::support::*;
use crate::{Fact, LeafBuilder};

#[test]
fn leaf_renders_inline() {
    assert_eq!(equaled(3, 3).to_string(), "Yes(expected 3, and got 3)");
    assert_eq!(did_not_equal(3, 2).to_string(), "No(expected 3, but got 2)");
}

#[test]
fn negated_leaf_renders_inline() {
    assert_eq!((!equaled(3, 3)).to_string(), "No(3 equaled 3)");
    assert_eq!((!did_not_equal(3, 2)).to_string(), "Yes(3 did not equal 2)");
}

#[test]
fn multi_line_leaf_renders_as_block() {
    let fact = Fact::yes("first line\nsecond line", "first line\nsecond line");
    assert_eq!(fact.to_string(), "Yes(\n  first line\n  second line\n)");
}

#[test]
fn conjunction_of_leaves() {
    let fact = equaled(3, 3).and(|| did_not_equal(3, 4));
    assert_eq!(
        fact.to_string(),
        "No(\n  Yes(expected 3, and got 3) &&\n  No(expected 3, but got 4)\n)"
    );
}

#[test]
fn operator_symbols() {
    let symbols: Vec<String> = vec![
        yes("a").and(|| yes("b")),
        yes("a") & yes("b"),
        no("a").or(|| yes("b")),
        no("a") | yes("b"),
        yes("a").implies(|| yes("b")),
        yes("a").is_eqv_to(yes("b")),
    ]
    .iter()
    .map(|fact| fact.to_string().lines().nth(1).unwrap_or_default().to_string())
    .collect();

    assert_eq!(
        symbols,
        vec![
            "  Yes(a) &&",
            "  Yes(a) &",
            "  No(a) ||",
            "  No(a) |",
            "  Yes(a) implies",
            "  Yes(a) isEqvTo",
        ]
    );
}

#[test]
fn nested_composite_indents_each_level() {
    let fact = (equaled(1, 1) & did_not_equal(2, 3)) | equaled(4, 4);
    insta::assert_snapshot!(fact.to_string(), @r###"
    Yes(
      No(
        Yes(expected 1, and got 1) &
        No(expected 2, but got 3)
      ) |
      Yes(expected 4, and got 4)
    )
    "###);
}

#[test]
fn negated_composite() {
    let fact = !(equaled(1, 1) & equaled(2, 2));
    assert_eq!(
        fact.to_string(),
        "No(\n  !Yes(\n    Yes(expected 1, and got 1) &\n    Yes(expected 2, and got 2)\n  )\n)"
    );
}

#[test]
fn negated_composite_inside_composite() {
    let fact = yes("a").and(|| !(yes("b") | no("c")));
    insta::assert_snapshot!(fact.to_string(), @r###"
    No(
      Yes(a) &&
      No(
        !Yes(
          Yes(b) |
          No(c)
        )
      )
    )
    "###);
}

#[test]
fn vacuous_leaf() {
    assert_eq!(vacuous().to_string(), "VacuousYes(false was true)");
}

#[test]
fn vacuous_composite() {
    let fact = (no("a") & no("b")).implies(|| yes("c"));
    assert_eq!(fact.to_string(), "VacuousYes(\n  No(\n    No(a) &\n    No(b)\n  )\n)");
}

#[test]
fn vacuous_operand_prefix() {
    let fact = vacuous() & yes("b");
    assert_eq!(
        fact.to_string(),
        "VacuousYes(\n  VacuousYes(false was true) &\n  Yes(b)\n)"
    );
}

#[test]
fn multi_line_operand_is_indented() {
    let block = LeafBuilder::no("header\nfirst\nsecond", "header")
        .mid_sentence("header\nfirst\nsecond", "header")
        .build();
    let fact = yes("a") & block;
    assert_eq!(
        fact.to_string(),
        "No(\n  Yes(a) &\n  No(\n    header\n    first\n    second\n  )\n)"
    );
}

#[test]
fn fact_diagram_honours_level() {
    assert_eq!(yes("a").fact_diagram(2), "    Yes(a)");
    assert_eq!(
        (yes("a") & no("b")).fact_diagram(1),
        "  No(\n    Yes(a) &\n    No(b)\n  )"
    );
}
