use jspath_core::{BinaryOp, Expr, Method, UnaryOp};

use super::*;

#[test]
fn tags_match_discriminants() {
    for (i, t) in ItemType::ALL.into_iter().enumerate() {
        assert_eq!(t as u8 as usize, i, "{t:?}");
        assert_eq!(ItemType::from_u8(t as u8), Some(t));
    }
}

#[test]
fn unknown_tag() {
    assert_eq!(ItemType::from_u8(45), None);
    assert_eq!(ItemType::from_u8(0xff), None);
}

#[test]
fn shapes() {
    assert_eq!(ItemType::Root.shape(), Shape::Leaf);
    assert_eq!(ItemType::KeyValue.shape(), Shape::Leaf);
    assert_eq!(ItemType::Variable.shape(), Shape::Text);
    assert_eq!(ItemType::StartsWith.shape(), Shape::Binary);
    assert_eq!(ItemType::Datetime.shape(), Shape::Unary);
    assert_eq!(ItemType::Array.shape(), Shape::Unary);
    assert_eq!(ItemType::Object.shape(), Shape::Object);
}

#[test]
fn optional_arguments() {
    assert!(ItemType::Filter.requires_arg());
    assert!(ItemType::Minus.requires_arg());
    assert!(!ItemType::Datetime.requires_arg());
    assert!(!ItemType::Array.requires_arg());
}

#[test]
fn operation_names() {
    assert_eq!(ItemType::Add.operation_name(), Some("+"));
    assert_eq!(ItemType::Plus.operation_name(), Some("+"));
    assert_eq!(ItemType::StartsWith.operation_name(), Some("starts with"));
    assert_eq!(ItemType::KeyValue.operation_name(), Some("keyvalue"));
    assert_eq!(ItemType::Root.operation_name(), None);
    assert_eq!(ItemType::Sequence.operation_name(), None);
}

#[test]
fn from_expression_kinds() {
    assert_eq!(ItemType::from(&Expr::root().kind), ItemType::Root);
    assert_eq!(
        ItemType::from(&Expr::binary(BinaryOp::Mod, Expr::null(), Expr::null()).kind),
        ItemType::Mod
    );
    assert_eq!(
        ItemType::from(&Expr::unary(UnaryOp::IsUnknown, Expr::null()).kind),
        ItemType::IsUnknown
    );
    assert_eq!(
        ItemType::from(&Expr::method(Method::Ceiling).kind),
        ItemType::Ceiling
    );
    assert_eq!(ItemType::from(&Expr::datetime(None).kind), ItemType::Datetime);
}
