//! Reading command inputs.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use jspath_core::{Limits, ParsedPath};
use jspath_lib::JsonPath;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid expression tree: {0}")]
    Ast(#[from] serde_json::Error),

    #[error("{}: {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: jspath_lib::Error,
    },
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<Vec<u8>, LoadError> {
    let read_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(read_error)?;
        return Ok(buf);
    }
    fs::read(path).map_err(read_error)
}

pub fn parse_ast(json: &[u8]) -> Result<ParsedPath, LoadError> {
    Ok(serde_json::from_slice(json)?)
}

/// Read and verify an encoded path.
pub fn load_path(path: &Path, limits: &Limits) -> Result<JsonPath, LoadError> {
    let bytes = read_input(path)?;
    JsonPath::from_bytes_with_limits(&bytes, limits).map_err(|source| LoadError::Path {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), LoadError> {
    fs::write(path, bytes).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Print `err` and exit with status 1.
pub fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
