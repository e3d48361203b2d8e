pub mod bitutils;
pub mod canonical;
pub mod config;
pub mod container;
pub mod error;
pub mod frequency;
pub mod lengths;
pub mod tree;

use std::{
    fs,
    io::{Read, Write},
    path::Path,
};

use log::{debug, info, trace};

pub use canonical::CanonicalCode;
pub use container::Container;
pub use error::{CodeError, Error, Malformed, Result};
pub use frequency::FrequencyTable;
pub use lengths::CodeLengths;
pub use tree::assign_lengths;

pub fn encode(raw: &[u8]) -> Result<Vec<u8>> {
    let freq = FrequencyTable::count(raw);
    let lengths = assign_lengths(&freq)?;
    debug!("alphabet holds {} symbols", lengths.len());
    trace!("code lengths: {:?}", lengths);

    let code = CanonicalCode::build(&lengths)?;
    let payload = code.encoder().encode(raw)?;
    debug!("payload is {} bits for {} bytes", payload.len(), raw.len());

    Ok(Container { lengths, payload }.to_bytes())
}

pub fn decode(packed: &[u8]) -> Result<Vec<u8>> {
    let Container { lengths, payload } = Container::from_bytes(packed)?;
    trace!("code lengths: {:?}", lengths);
    if lengths.is_empty() && !payload.is_empty() {
        return Err(Malformed::PayloadWithoutCode {
            bits: payload.len(),
        }
        .into());
    }
    if payload.is_empty() && !lengths.is_empty() {
        return Err(Malformed::CodeWithoutPayload {
            symbols: lengths.len(),
        }
        .into());
    }

    let code = CanonicalCode::build(&lengths).map_err(Malformed::from)?;
    let decoded = code.decoder().decode(&payload)?;
    debug!("decoded {} bits into {} bytes", payload.len(), decoded.len());
    Ok(decoded)
}

pub fn hencode(input: &mut impl Read, output: &mut impl Write) -> Result<()> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw)?;
    output.write_all(&encode(&raw)?)?;
    output.flush()?;
    Ok(())
}

pub fn hdecode(input: &mut impl Read, output: &mut impl Write) -> Result<()> {
    let mut packed = Vec::new();
    input.read_to_end(&mut packed)?;
    output.write_all(&decode(&packed)?)?;
    output.flush()?;
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::InputNotFound {
        path: path.to_path_buf(),
        source,
    })
}

/// `output` is only written once the whole input has been encoded.
pub fn encode_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());
    info!("huffman encoding {}", input.display());
    let packed = encode(&read_input(input)?)?;
    fs::write(output, &packed)?;
    info!("wrote {} bytes to {}", packed.len(), output.display());
    Ok(())
}

pub fn decode_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());
    info!("huffman decoding {}", input.display());
    let raw = decode(&read_input(input)?)?;
    fs::write(output, &raw)?;
    info!("wrote {} bytes to {}", raw.len(), output.display());
    Ok(())
}
