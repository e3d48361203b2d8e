use std::path::{Path, PathBuf};

use thiserror::Error;

pub const USAGE: &str = "Usage: chuff <file> [-d] [-o <output>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("please supply a file argument")]
    MissingInput,
    #[error("option -o needs a path")]
    MissingOutput,
    #[error("unexpected argument {0:?}")]
    Unexpected(String),
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Config),
}

impl Config {
    /// Parses the arguments following the program name.
    pub fn from_args<I>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut mode = Mode::Encode;
        let mut input = None;
        let mut output = None;
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "-d" => mode = Mode::Decode,
                "-o" => output = Some(args.next().ok_or(ConfigError::MissingOutput)?),
                _ if input.is_none() && !arg.starts_with('-') => input = Some(arg),
                _ => return Err(ConfigError::Unexpected(arg)),
            }
        }

        let input = PathBuf::from(input.ok_or(ConfigError::MissingInput)?);
        let output = match output {
            Some(path) => PathBuf::from(path),
            None => default_output_path(&input, mode),
        };
        Ok(Command::Run(Config {
            mode,
            input,
            output,
        }))
    }
}

/// `dir/name_encoded.hc` when encoding `dir/name.ext`, `dir/name_decoded.txt`
/// when decoding it.
pub fn default_output_path(input: &Path, mode: Mode) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match mode {
        Mode::Encode => format!("{stem}_encoded.hc"),
        Mode::Decode => format!("{stem}_decoded.txt"),
    };
    input.with_file_name(name)
}
