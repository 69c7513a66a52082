use std::path::PathBuf;

use jspath_bytecode::dump;
use jspath_core::{Colors, Limits};

use super::loader::{fail, load_path};

pub struct DumpArgs {
    pub encoded_path: PathBuf,
    pub limits: Limits,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let path = load_path(&args.encoded_path, &args.limits).unwrap_or_else(|e| fail(e));
    let colors = Colors::new(args.color);
    print!("{}", dump(path.encoded(), colors));
}
