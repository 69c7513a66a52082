use std::path::PathBuf;

use jspath_core::Limits;

use super::loader::{fail, load_path};

pub struct PrintArgs {
    pub encoded_path: PathBuf,
    pub limits: Limits,
}

pub fn run(args: PrintArgs) {
    let path = load_path(&args.encoded_path, &args.limits).unwrap_or_else(|e| fail(e));
    let text = path
        .to_text_with_limits(&args.limits)
        .unwrap_or_else(|e| fail(e));
    println!("{text}");
}
