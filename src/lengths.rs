use std::fmt;

/// Code length of every symbol in an alphabet, 0 meaning "not present".
#[derive(Clone, PartialEq, Eq)]
pub struct CodeLengths {
    lengths: [u8; 256],
}

impl Default for CodeLengths {
    fn default() -> Self {
        CodeLengths { lengths: [0; 256] }
    }
}

impl fmt::Debug for CodeLengths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl CodeLengths {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_raw(lengths: [u8; 256]) -> Self {
        CodeLengths { lengths }
    }

    pub(crate) fn as_raw(&self) -> &[u8; 256] {
        &self.lengths
    }

    pub fn set(&mut self, symbol: u8, length: u8) {
        self.lengths[symbol as usize] = length;
    }

    pub fn get(&self, symbol: u8) -> Option<u8> {
        match self.lengths[symbol as usize] {
            0 => None,
            length => Some(length),
        }
    }

    pub fn len(&self) -> usize {
        self.lengths.iter().filter(|&&length| length > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.iter().all(|&length| length == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..=u8::MAX)
            .zip(self.lengths.iter().copied())
            .filter(|&(_, length)| length > 0)
    }
}

impl FromIterator<(u8, u8)> for CodeLengths {
    fn from_iter<I: IntoIterator<Item = (u8, u8)>>(iter: I) -> Self {
        let mut lengths = CodeLengths::new();
        for (symbol, length) in iter {
            lengths.set(symbol, length);
        }
        lengths
    }
}
