use std::path::PathBuf;

use jspath_core::Limits;
use jspath_lib::wire;

use super::loader::{LoadError, fail, load_path, read_input, write_output};

pub struct SendArgs {
    pub encoded_path: PathBuf,
    pub output: PathBuf,
}

pub struct RecvArgs {
    pub wire_path: PathBuf,
    pub output: PathBuf,
    pub limits: Limits,
}

pub fn send(args: SendArgs) {
    let path = load_path(&args.encoded_path, &Limits::default()).unwrap_or_else(|e| fail(e));
    write_output(&args.output, &wire::send(&path)).unwrap_or_else(|e| fail(e));
}

pub fn recv(args: RecvArgs) {
    let message = read_input(&args.wire_path).unwrap_or_else(|e| fail(e));
    let path = wire::recv_with_limits(&message, &args.limits)
        .map_err(|source| LoadError::Path {
            path: args.wire_path.clone(),
            source,
        })
        .unwrap_or_else(|e| fail(e));
    write_output(&args.output, path.as_bytes()).unwrap_or_else(|e| fail(e));
    println!("{path}");
}
