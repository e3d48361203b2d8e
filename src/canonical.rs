use crate::{
    bitutils::BitString,
    error::{CodeError, Malformed},
    lengths::CodeLengths,
};

/// Canonical prefix code derived from nothing but a [`CodeLengths`] table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalCode {
    // (symbol, codeword) in canonical order
    codewords: Vec<(u8, BitString)>,
}

impl CanonicalCode {
    /// Assigns codewords in `(length, symbol)` order.
    ///
    /// The first symbol gets all zeros, every following one gets the previous
    /// codeword plus one, shifted left by the growth in length.
    ///
    /// # Errors
    /// The lengths have to describe a complete prefix code, except for a
    /// single symbol which must have length 1.
    pub fn build(lengths: &CodeLengths) -> Result<Self, CodeError> {
        let mut sorted: Vec<(u8, u8)> = lengths.iter().collect();
        sorted.sort_by_key(|&(symbol, length)| (length, symbol));

        let Some(&(first_symbol, first_length)) = sorted.first() else {
            return Ok(CanonicalCode::default());
        };
        if sorted.len() == 1 && first_length != 1 {
            return Err(CodeError::SingleSymbol {
                symbol: first_symbol,
                length: first_length,
            });
        }

        let mut codewords = Vec::with_capacity(sorted.len());
        let mut code = BitString::zeros(first_length as usize);
        codewords.push((first_symbol, code.clone()));
        let mut prev_length = first_length;
        for &(symbol, length) in &sorted[1..] {
            if !code.increment() {
                return Err(CodeError::Oversubscribed);
            }
            code.extend_from(&BitString::zeros((length - prev_length) as usize));
            codewords.push((symbol, code.clone()));
            prev_length = length;
        }

        if sorted.len() > 1 && !code.is_all_ones() {
            return Err(CodeError::Incomplete);
        }
        Ok(CanonicalCode { codewords })
    }

    pub fn len(&self) -> usize {
        self.codewords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitString)> {
        self.codewords.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// The symbol to codeword view.
    pub fn encoder(&self) -> Encoder {
        let mut table = vec![None; 256];
        for (symbol, code) in self.iter() {
            table[symbol as usize] = Some(code.clone());
        }
        Encoder { table }
    }

    /// The codeword to symbol view.
    pub fn decoder(&self) -> Decoder {
        let mut decoder = Decoder {
            nodes: vec![[Link::Empty; 2]],
        };
        for (symbol, code) in self.iter() {
            decoder.insert(symbol, code);
        }
        decoder
    }
}

pub struct Encoder {
    table: Vec<Option<BitString>>,
}

impl Encoder {
    pub fn get(&self, symbol: u8) -> Option<&BitString> {
        self.table[symbol as usize].as_ref()
    }

    pub fn encode(&self, raw: &[u8]) -> Result<BitString, CodeError> {
        let bits = raw
            .iter()
            .map(|&byte| self.get(byte).map_or(0, BitString::len))
            .sum();
        let mut encoded = BitString::with_capacity(bits);
        for &byte in raw {
            let code = self.get(byte).ok_or(CodeError::MissingSymbol(byte))?;
            encoded.extend_from(code);
        }
        Ok(encoded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Empty,
    Node(usize),
    Leaf(u8),
}

/// Binary trie over the codewords; `nodes[0]` is the root, `[zero, one]` branches.
pub struct Decoder {
    nodes: Vec<[Link; 2]>,
}

pub enum Walker {
    Next(usize),
    End(u8),
    Dead,
}

impl Decoder {
    fn insert(&mut self, symbol: u8, code: &BitString) {
        let mut node = 0;
        let last = code.len() - 1;
        for (depth, bit) in code.iter().enumerate() {
            let branch = bit as usize;
            if depth == last {
                self.nodes[node][branch] = Link::Leaf(symbol);
                break;
            }
            node = match self.nodes[node][branch] {
                Link::Node(next) => next,
                _ => {
                    let next = self.nodes.len();
                    self.nodes.push([Link::Empty; 2]);
                    self.nodes[node][branch] = Link::Node(next);
                    next
                }
            };
        }
    }

    pub fn walk(&self, node: usize, bit: bool) -> Walker {
        match self.nodes[node][bit as usize] {
            Link::Empty => Walker::Dead,
            Link::Node(next) => Walker::Next(next),
            Link::Leaf(symbol) => Walker::End(symbol),
        }
    }

    /// Symbol whose codeword is exactly `code`.
    pub fn get(&self, code: &BitString) -> Option<u8> {
        let mut node = 0;
        let mut bits = code.iter();
        while let Some(bit) = bits.next() {
            match self.walk(node, bit) {
                Walker::Next(next) => node = next,
                Walker::End(symbol) => return bits.next().is_none().then_some(symbol),
                Walker::Dead => return None,
            }
        }
        None
    }

    /// Splits `bits` into codewords from the left, emitting a symbol per match.
    pub fn decode(&self, bits: &BitString) -> Result<Vec<u8>, Malformed> {
        let mut decoded = Vec::with_capacity(bits.len() / 2);
        let mut node = 0;
        let mut start = 0;
        for (position, bit) in bits.iter().enumerate() {
            node = match self.walk(node, bit) {
                Walker::Next(next) => next,
                Walker::End(symbol) => {
                    decoded.push(symbol);
                    start = position + 1;
                    0
                }
                Walker::Dead => return Err(Malformed::UnknownCodeword { position: start }),
            };
        }
        if node != 0 {
            return Err(Malformed::DanglingBits {
                bits: bits.len() - start,
            });
        }
        Ok(decoded)
    }
}
