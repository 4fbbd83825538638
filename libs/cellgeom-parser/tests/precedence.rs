use cellgeom_parser::{parse, Node, Sense};

fn s(n: u32) -> Node {
    Node::surface(n, Sense::Positive)
}

fn neg(n: u32) -> Node {
    Node::surface(n, Sense::Negative)
}

#[test]
fn intersection_before_union() {
    let geometry = parse("1 2 : 3").unwrap();
    assert_eq!(geometry.root(), &Node::or(Node::and(s(1), s(2)), s(3)));
}

#[test]
fn grouping_overrides_precedence() {
    let geometry = parse("(1 : 2) -3").unwrap();
    assert_eq!(geometry.root(), &Node::and(Node::or(s(1), s(2)), neg(3)));
}

#[test]
fn cell_complement_form() {
    assert_eq!(parse("#5").unwrap().root(), &Node::cell_complement(5));
}

#[test]
fn expression_complement_form() {
    let geometry = parse("#(1 2)").unwrap();
    assert_eq!(geometry.root(), &Node::not(Node::and(s(1), s(2))));
}

#[test]
fn complement_applies_to_next_factor_only() {
    let geometry = parse("#(1) 2 : #3 -4").unwrap();
    let expected = Node::or(
        Node::and(Node::not(s(1)), s(2)),
        Node::and(Node::cell_complement(3), neg(4)),
    );
    assert_eq!(geometry.root(), &expected);
}

#[test]
fn plus_sign_is_positive_sense() {
    assert_eq!(parse("+8").unwrap(), parse("8").unwrap());
}

#[test]
fn reference_queries_follow_source_order() {
    let geometry = parse("-4 (2 : #9) 4 #(7 #9)").unwrap();
    assert_eq!(geometry.surface_numbers(), vec![4, 2, 7]);
    assert_eq!(geometry.cell_numbers(), vec![9]);
}
