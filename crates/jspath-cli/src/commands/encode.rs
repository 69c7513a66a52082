use std::path::PathBuf;

use jspath_core::Limits;
use jspath_lib::JsonPath;

use super::loader::{fail, parse_ast, read_input, write_output};

pub struct EncodeArgs {
    pub ast_path: PathBuf,
    pub output: PathBuf,
    pub limits: Limits,
}

pub fn run(args: EncodeArgs) {
    let json = read_input(&args.ast_path).unwrap_or_else(|e| fail(e));
    let parsed = parse_ast(&json).unwrap_or_else(|e| fail(e));

    let path = JsonPath::encode_with_limits(&parsed, &args.limits).unwrap_or_else(|e| fail(e));

    write_output(&args.output, path.as_bytes()).unwrap_or_else(|e| fail(e));
    println!("{path}");
}
