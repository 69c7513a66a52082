//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("jspath")
        .about("Encode, print and inspect binary jsonpath expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(encode_command())
        .subcommand(print_command())
        .subcommand(dump_command())
        .subcommand(mutable_command())
        .subcommand(send_command())
        .subcommand(recv_command())
}

/// Encode a parsed expression tree.
pub fn encode_command() -> Command {
    Command::new("encode")
        .about("Encode a parsed path expression")
        .after_help(
            r#"EXAMPLES:
  jspath encode path.json -o path.jsp
  jspath encode - -o path.jsp --recursion-limit 64"#,
        )
        .arg(ast_path_arg())
        .arg(output_file_arg())
        .arg(recursion_limit_arg())
}

/// Print canonical text.
pub fn print_command() -> Command {
    Command::new("print")
        .about("Print the canonical text of an encoded path")
        .arg(encoded_path_arg())
        .arg(recursion_limit_arg())
}

/// Show the item layout.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the item layout of an encoded path")
        .after_help(
            r#"EXAMPLES:
  jspath dump path.jsp
  jspath dump path.jsp --color never"#,
        )
        .arg(encoded_path_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
}

/// Classify mutability.
pub fn mutable_command() -> Command {
    Command::new("mutable")
        .about("Tell whether results may depend on the session time zone")
        .after_help(
            r#"EXAMPLES:
  jspath mutable path.jsp
  jspath mutable path.jsp --var x=timestamptz --var y=date"#,
        )
        .arg(encoded_path_arg())
        .arg(var_arg())
        .arg(recursion_limit_arg())
}

/// Frame an encoded path for transport.
pub fn send_command() -> Command {
    Command::new("send")
        .about("Frame an encoded path as a wire message")
        .arg(encoded_path_arg())
        .arg(output_file_arg())
}

/// Unframe and verify a wire message.
pub fn recv_command() -> Command {
    Command::new("recv")
        .about("Verify a wire message and write the encoded path")
        .arg(wire_path_arg())
        .arg(output_file_arg())
        .arg(recursion_limit_arg())
}
