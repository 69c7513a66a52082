use std::path::PathBuf;

use jspath_core::Limits;
use jspath_lib::Bindings;

use super::loader::{fail, load_path};

pub struct MutableArgs {
    pub encoded_path: PathBuf,
    pub bindings: Bindings,
    pub limits: Limits,
}

pub fn run(args: MutableArgs) {
    let path = load_path(&args.encoded_path, &args.limits).unwrap_or_else(|e| fail(e));
    let mutable = path
        .is_mutable_with_limits(&args.bindings, &args.limits)
        .unwrap_or_else(|e| fail(e));
    let verdict = if mutable {
        "mutable"
    } else {
        "immutable"
    };
    println!("{verdict}");
}
