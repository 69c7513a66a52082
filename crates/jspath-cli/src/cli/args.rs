//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so commands can compose the same
//! definitions.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use jspath_lib::VarType;

/// Parsed expression tree as JSON (positional).
pub fn ast_path_arg() -> Arg {
    Arg::new("ast_path")
        .value_name("AST")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Parsed path expression as JSON (use \"-\" for stdin)")
}

/// Encoded path file (positional).
pub fn encoded_path_arg() -> Arg {
    Arg::new("encoded_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Encoded jsonpath file")
}

/// Framed wire message file (positional).
pub fn wire_path_arg() -> Arg {
    Arg::new("wire_path")
        .value_name("WIRE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Framed wire message")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Variable declaration (--var NAME=TYPE), repeatable.
pub fn var_arg() -> Arg {
    Arg::new("var")
        .long("var")
        .value_name("NAME=TYPE")
        .action(ArgAction::Append)
        .value_parser(parse_var)
        .help("Declare the SQL type of a variable (date, time, timetz, timestamp, timestamptz, ...)")
}

/// Maximum operand nesting (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("DEPTH")
        .value_parser(value_parser!(u32).range(1..))
        .help("Maximum operand nesting depth (default: 1024)")
}

fn parse_var(s: &str) -> Result<(String, VarType), String> {
    let (name, ty) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=TYPE, got '{s}'"))?;
    if name.is_empty() {
        return Err("variable name cannot be empty".to_string());
    }
    Ok((name.to_string(), VarType::from_sql_name(ty)))
}
