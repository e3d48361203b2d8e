use std::{io, path::PathBuf};

use thiserror::Error;

/// Reasons a code-length table cannot be turned into a canonical prefix code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code lengths are oversubscribed")]
    Oversubscribed,
    #[error("code lengths leave part of the code space unused")]
    Incomplete,
    // a lone symbol is always coded with a single bit
    #[error("single symbol {symbol:#04x} has length {length}, expected 1")]
    SingleSymbol { symbol: u8, length: u8 },
    #[error("symbol {0:#04x} has no codeword")]
    MissingSymbol(u8),
}

/// Everything that can be wrong with a container handed to the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("container is {len} bytes long, at least 257 are required")]
    Truncated { len: usize },
    #[error("payload has no trailer byte")]
    MissingTrailer,
    #[error("trailer byte {0} is outside 1..=8")]
    Trailer(u8),
    #[error(transparent)]
    Code(#[from] CodeError),
    #[error("bit sequence at bit {position} is not a codeword")]
    UnknownCodeword { position: usize },
    #[error("payload ends {bits} bits into an unfinished codeword")]
    DanglingBits { bits: usize },
    #[error("payload holds {bits} bits but the code table is empty")]
    PayloadWithoutCode { bits: usize },
    #[error("code table holds {symbols} symbols but the payload is empty")]
    CodeWithoutPayload { symbols: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {}: {source}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed container: {0}")]
    MalformedContainer(#[from] Malformed),
    #[error("symbol {symbol:#04x} would need a {depth} bit codeword, the format allows 255")]
    EncodeImpossible { symbol: u8, depth: usize },
    #[error("inconsistent code lengths: {0}")]
    InvalidCode(#[from] CodeError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

