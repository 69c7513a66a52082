//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use jspath_core::Limits;
use jspath_lib::{Bindings, VarType};

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::encode::EncodeArgs;
use crate::commands::mutable::MutableArgs;
use crate::commands::print::PrintArgs;
use crate::commands::wire::{RecvArgs, SendArgs};

pub struct EncodeParams {
    pub ast_path: PathBuf,
    pub output: PathBuf,
    pub recursion_limit: Option<u32>,
}

impl EncodeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            ast_path: required_path(m, "ast_path"),
            output: required_path(m, "output"),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
        }
    }
}

impl From<EncodeParams> for EncodeArgs {
    fn from(p: EncodeParams) -> Self {
        Self {
            ast_path: p.ast_path,
            output: p.output,
            limits: limits(p.recursion_limit),
        }
    }
}

pub struct PrintParams {
    pub encoded_path: PathBuf,
    pub recursion_limit: Option<u32>,
}

impl PrintParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            encoded_path: required_path(m, "encoded_path"),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
        }
    }
}

impl From<PrintParams> for PrintArgs {
    fn from(p: PrintParams) -> Self {
        Self {
            encoded_path: p.encoded_path,
            limits: limits(p.recursion_limit),
        }
    }
}

pub struct DumpParams {
    pub encoded_path: PathBuf,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            encoded_path: required_path(m, "encoded_path"),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            encoded_path: p.encoded_path,
            limits: limits(p.recursion_limit),
            color: p.color.should_colorize(),
        }
    }
}

pub struct MutableParams {
    pub encoded_path: PathBuf,
    pub vars: Vec<(String, VarType)>,
    pub recursion_limit: Option<u32>,
}

impl MutableParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            encoded_path: required_path(m, "encoded_path"),
            vars: m
                .get_many::<(String, VarType)>("var")
                .map(|vars| vars.cloned().collect())
                .unwrap_or_default(),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
        }
    }
}

impl From<MutableParams> for MutableArgs {
    fn from(p: MutableParams) -> Self {
        Self {
            encoded_path: p.encoded_path,
            bindings: p.vars.into_iter().collect::<Bindings>(),
            limits: limits(p.recursion_limit),
        }
    }
}

pub struct SendParams {
    pub encoded_path: PathBuf,
    pub output: PathBuf,
}

impl SendParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            encoded_path: required_path(m, "encoded_path"),
            output: required_path(m, "output"),
        }
    }
}

impl From<SendParams> for SendArgs {
    fn from(p: SendParams) -> Self {
        Self {
            encoded_path: p.encoded_path,
            output: p.output,
        }
    }
}

pub struct RecvParams {
    pub wire_path: PathBuf,
    pub output: PathBuf,
    pub recursion_limit: Option<u32>,
}

impl RecvParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            wire_path: required_path(m, "wire_path"),
            output: required_path(m, "output"),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
        }
    }
}

impl From<RecvParams> for RecvArgs {
    fn from(p: RecvParams) -> Self {
        Self {
            wire_path: p.wire_path,
            output: p.output,
            limits: limits(p.recursion_limit),
        }
    }
}

fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id)
        .cloned()
        .unwrap_or_else(|| unreachable!("clap requires {id}"))
}

fn limits(recursion_limit: Option<u32>) -> Limits {
    match recursion_limit {
        Some(depth) => Limits::new().recursion_limit(depth),
        None => Limits::new(),
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
