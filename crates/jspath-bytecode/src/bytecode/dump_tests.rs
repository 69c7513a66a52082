use jspath_core::Colors;

use super::test_utils::{add_buffer, chain_buffer};
use super::*;

#[test]
fn dump_accessor_chain() {
    let path = EncodedPath::from_bytes(&chain_buffer()).unwrap();

    insta::assert_snapshot!(dump(&path, Colors::OFF), @r#"
    [header]
    version = 1
    mode = lax
    extensions = false

    [items]
    0000  root -> 0008
    0008  key "a" -> 0022
    0022  any_array -> 0028
    0028  type
    "#);
}

#[test]
fn dump_binary_operands() {
    let path = EncodedPath::from_bytes(&add_buffer()).unwrap();
    let out = dump(&path, Colors::OFF);

    let items: Vec<&str> = out.lines().skip_while(|l| *l != "[items]").skip(1).collect();
    assert_eq!(
        items,
        ["0000  add left@0016 right@0030", "0016  key \"a\"", "0030  numeric 1"]
    );
}

#[test]
fn dump_with_colors() {
    let path = EncodedPath::from_bytes(&chain_buffer()).unwrap();
    let out = dump(&path, Colors::ON);

    assert!(out.contains("\x1b[34mroot\x1b[0m"));
    assert!(out.contains("\x1b[32m\"a\"\x1b[0m"));
}
