use std::{fmt, str::FromStr};

use crate::error::Malformed;

/// A string of bits packed MSB-first into bytes.
///
/// Bits past `len` in the final byte are always zero, which lets
/// [`BitString::extend_from`] copy whole bytes instead of single bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bytes: Vec<u8>,
    len: usize,
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Returned when parsing a [`BitString`] from anything but `0` and `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseBitsError(pub char);

impl fmt::Display for ParseBitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid bit digit {:?}", self.0)
    }
}

impl std::error::Error for ParseBitsError {}

impl FromStr for BitString {
    type Err = ParseBitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = BitString::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                other => return Err(ParseBitsError(other)),
            }
        }
        Ok(bits)
    }
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        BitString {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// `len` zero bits
    pub fn zeros(len: usize) -> Self {
        BitString {
            bytes: vec![0; len.div_ceil(8)],
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    fn set(&mut self, index: usize, bit: bool) {
        let mask = 0x80 >> (index % 8);
        if bit {
            self.bytes[index / 8] |= mask;
        } else {
            self.bytes[index / 8] &= !mask;
        }
    }

    pub fn push(&mut self, bit: bool) {
        if self.len.is_multiple_of(8) {
            self.bytes.push(0);
        }
        self.len += 1;
        if bit {
            self.set(self.len - 1, true);
        }
    }

    /// Appends the top `bits` bits of `byte`; the remaining low bits must be zero.
    fn append_byte(&mut self, byte: u8, bits: usize) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(byte);
        } else {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= byte >> offset;
            if offset + bits > 8 {
                self.bytes.push(byte << (8 - offset));
            }
        }
        self.len += bits;
    }

    pub fn extend_from(&mut self, other: &BitString) {
        let full = other.len / 8;
        for &byte in &other.bytes[..full] {
            self.append_byte(byte, 8);
        }
        let rest = other.len % 8;
        if rest > 0 {
            self.append_byte(other.bytes[full], rest);
        }
    }

    /// Treats the bits as an unsigned number and adds one to it.
    ///
    /// Returns `false` if the value was all ones, in which case it wraps to zero.
    pub fn increment(&mut self) -> bool {
        for index in (0..self.len).rev() {
            if self.get(index) == Some(true) {
                self.set(index, false);
            } else {
                self.set(index, true);
                return true;
            }
        }
        false
    }

    pub fn is_all_ones(&self) -> bool {
        self.iter().all(|bit| bit)
    }

    pub fn iter(&self) -> Bits<'_> {
        Bits {
            bits: self,
            index: 0,
        }
    }
}

pub struct Bits<'a> {
    bits: &'a BitString,
    index: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let bit = self.bits.get(self.index)?;
        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.bits.len - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl<'a> IntoIterator for &'a BitString {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

/// Packs `bits` into bytes followed by a trailer byte holding the number of
/// significant bits in the last packed byte (1..=8).
///
/// The empty bit string packs to the lone trailer `[8]`.
pub fn pack(bits: &BitString) -> Vec<u8> {
    let mut packed = Vec::with_capacity(bits.bytes.len() + 1);
    packed.extend_from_slice(&bits.bytes);
    let trailer = match bits.len % 8 {
        0 => 8,
        rest => rest as u8,
    };
    packed.push(trailer);
    packed
}

/// Inverse of [`pack`].
pub fn unpack(packed: &[u8]) -> Result<BitString, Malformed> {
    let Some((&trailer, data)) = packed.split_last() else {
        return Err(Malformed::MissingTrailer);
    };
    if !(1..=8).contains(&trailer) {
        return Err(Malformed::Trailer(trailer));
    }
    if data.is_empty() {
        return match trailer {
            8 => Ok(BitString::new()),
            other => Err(Malformed::Trailer(other)),
        };
    }

    let len = (data.len() - 1) * 8 + trailer as usize;
    let mut bytes = data.to_vec();
    // padding bits are ignored, clear them to keep the zero invariant
    if let Some(last) = bytes.last_mut() {
        *last &= 0xffu8 << (8 - trailer as u32);
    }
    Ok(BitString { bytes, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        s.parse().expect("valid bit digits")
    }

    #[test]
    fn push_inside() {
        let mut empty = BitString::new();
        empty.push(false);
        assert_eq!(vec![0b00000000], empty.bytes);
        assert_eq!(1, empty.len());
    }

    #[test]
    fn push_over_border() {
        let mut full = bits("00000000");
        full.push(true);
        assert_eq!(vec![0b00000000, 0b10000000], full.bytes);
        assert_eq!(9, full.len());
    }

    #[test]
    fn add_less_to_empty() {
        let mut empty = BitString::new();
        empty.extend_from(&bits("1101"));
        assert_eq!(vec![0b11010000], empty.bytes);
        assert_eq!(4, empty.len());
    }

    #[test]
    fn add_nine_to_empty() {
        let mut empty = BitString::new();
        empty.extend_from(&bits("110000011"));
        assert_eq!(vec![0b11000001, 0b10000000], empty.bytes);
        assert_eq!(9, empty.len());
    }

    #[test]
    fn add_two_fitting() {
        let mut acc = BitString::new();
        acc.extend_from(&bits("1100001"));
        acc.extend_from(&bits("1"));
        assert_eq!(vec![0b11000011], acc.bytes);
        assert_eq!(8, acc.len());
    }

    #[test]
    fn add_two_2nd_no_fit() {
        let mut acc = BitString::new();
        acc.extend_from(&bits("1100001"));
        acc.extend_from(&bits("101"));
        assert_eq!(vec![0b11000011, 0b01000000], acc.bytes);
        assert_eq!(10, acc.len());
    }

    #[test]
    fn add_two_both_no_fit() {
        let mut acc = BitString::new();
        acc.extend_from(&bits("110000001"));
        acc.extend_from(&bits("1100000000000001"));
        assert_eq!(
            vec![0b11000000, 0b11100000, 0b00000000, 0b10000000],
            acc.bytes
        );
        assert_eq!(25, acc.len());
        assert_eq!("1100000011100000000000001", acc.to_string());
    }

    #[test]
    fn increment_carries() {
        let mut code = bits("0111");
        assert!(code.increment());
        assert_eq!("1000", code.to_string());

        let mut code = bits("111");
        assert!(!code.increment());
        assert_eq!("000", code.to_string());
    }

    #[test]
    fn increment_across_bytes() {
        let mut code = bits("0000000011111111");
        assert!(code.increment());
        assert_eq!("0000000100000000", code.to_string());
    }

    #[test]
    fn parse_rejects_other_digits() {
        assert_eq!(Err(ParseBitsError('2')), "0120".parse::<BitString>());
    }

    #[test]
    fn pack_partial_last_byte() {
        assert_eq!(vec![0b10110000, 4], pack(&bits("1011")));
        assert_eq!(vec![0xff, 0b10000000, 1], pack(&bits("111111111")));
    }

    #[test]
    fn pack_full_last_byte() {
        assert_eq!(vec![0b10100101, 8], pack(&bits("10100101")));
    }

    #[test]
    fn pack_empty() {
        assert_eq!(vec![8], pack(&BitString::new()));
        assert_eq!(Ok(BitString::new()), unpack(&[8]));
    }

    #[test]
    fn unpack_reads_trailer() {
        let unpacked = unpack(&[0xff, 0b10100000, 3]).expect("valid payload");
        assert_eq!("11111111101", unpacked.to_string());
    }

    #[test]
    fn unpack_ignores_padding() {
        let unpacked = unpack(&[0b10111111, 2]).expect("valid payload");
        assert_eq!(bits("10"), unpacked);
    }

    #[test]
    fn unpack_rejects_bad_trailer() {
        assert_eq!(Err(Malformed::Trailer(0)), unpack(&[0xaa, 0]));
        assert_eq!(Err(Malformed::Trailer(9)), unpack(&[0xaa, 9]));
        assert_eq!(Err(Malformed::Trailer(3)), unpack(&[3]));
        assert_eq!(Err(Malformed::MissingTrailer), unpack(&[]));
    }
}
