use crate::{
    bitutils::{self, BitString},
    error::Malformed,
    lengths::CodeLengths,
};

// one code length per byte value, 0 for absent symbols
pub const HEADER_LEN: usize = 256;

pub const MIN_LEN: usize = HEADER_LEN + 1;

pub fn write_lengths(lengths: &CodeLengths) -> [u8; HEADER_LEN] {
    *lengths.as_raw()
}

pub fn read_lengths(header: &[u8; HEADER_LEN]) -> CodeLengths {
    CodeLengths::from_raw(*header)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub lengths: CodeLengths,
    pub payload: BitString,
}

impl Container {
    pub fn to_bytes(&self) -> Vec<u8> {
        let packed = bitutils::pack(&self.payload);
        let mut bytes = Vec::with_capacity(HEADER_LEN + packed.len());
        bytes.extend_from_slice(&write_lengths(&self.lengths));
        bytes.extend_from_slice(&packed);
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Malformed> {
        if bytes.len() < MIN_LEN {
            return Err(Malformed::Truncated { len: bytes.len() });
        }
        let (header, packed) = bytes.split_at(HEADER_LEN);
        let header: &[u8; HEADER_LEN] = header
            .try_into()
            .map_err(|_| Malformed::Truncated { len: bytes.len() })?;
        Ok(Container {
            lengths: read_lengths(header),
            payload: bitutils::unpack(packed)?,
        })
    }
}
