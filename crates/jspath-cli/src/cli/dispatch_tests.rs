//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use jspath_lib::VarType;

use super::*;
use crate::cli::commands::{dump_command, encode_command, mutable_command, recv_command};

#[test]
fn encode_requires_output() {
    let result = encode_command().try_get_matches_from(["encode", "path.json"]);
    assert!(result.is_err());

    let m = encode_command()
        .try_get_matches_from(["encode", "path.json", "-o", "path.jsp"])
        .unwrap();
    let params = EncodeParams::from_matches(&m);
    assert_eq!(params.ast_path, PathBuf::from("path.json"));
    assert_eq!(params.output, PathBuf::from("path.jsp"));
    assert_eq!(params.recursion_limit, None);
}

#[test]
fn recursion_limit_is_parsed() {
    let m = recv_command()
        .try_get_matches_from(["recv", "msg.bin", "-o", "out.jsp", "--recursion-limit", "64"])
        .unwrap();
    let params = RecvParams::from_matches(&m);
    assert_eq!(params.recursion_limit, Some(64));

    let zero = recv_command().try_get_matches_from([
        "recv",
        "msg.bin",
        "-o",
        "out.jsp",
        "--recursion-limit",
        "0",
    ]);
    assert!(zero.is_err());
}

#[test]
fn dump_color_choice() {
    let m = dump_command()
        .try_get_matches_from(["dump", "path.jsp", "--color", "never"])
        .unwrap();
    assert_eq!(DumpParams::from_matches(&m).color, ColorChoice::Never);

    let m = dump_command()
        .try_get_matches_from(["dump", "path.jsp"])
        .unwrap();
    assert_eq!(DumpParams::from_matches(&m).color, ColorChoice::Auto);

    let bad = dump_command().try_get_matches_from(["dump", "path.jsp", "--color", "sometimes"]);
    assert!(bad.is_err());
}

#[test]
fn mutable_collects_variables_in_order() {
    let m = mutable_command()
        .try_get_matches_from([
            "mutable",
            "path.jsp",
            "--var",
            "x=timestamptz",
            "--var",
            "y=date",
            "--var",
            "x=text",
        ])
        .unwrap();
    let params = MutableParams::from_matches(&m);

    assert_eq!(
        params.vars,
        [
            ("x".to_string(), VarType::TimestampTz),
            ("y".to_string(), VarType::Date),
            ("x".to_string(), VarType::Other),
        ]
    );
}

#[test]
fn mutable_rejects_malformed_variable() {
    let missing_type = mutable_command().try_get_matches_from(["mutable", "p.jsp", "--var", "x"]);
    let missing_name =
        mutable_command().try_get_matches_from(["mutable", "p.jsp", "--var", "=date"]);

    assert!(missing_type.is_err());
    assert!(missing_name.is_err());
}

#[test]
fn mutable_without_variables() {
    let m = mutable_command()
        .try_get_matches_from(["mutable", "path.jsp"])
        .unwrap();
    assert!(MutableParams::from_matches(&m).vars.is_empty());
}

#[test]
fn top_level_requires_subcommand() {
    assert!(build_cli().try_get_matches_from(["jspath"]).is_err());
    assert!(
        build_cli()
            .try_get_matches_from(["jspath", "print", "path.jsp"])
            .is_ok()
    );
}
