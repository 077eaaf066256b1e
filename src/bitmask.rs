use std::ops::BitAnd;

/// A heap-allocated bit set sized for one board (up to 100×100 = 10 000 cells).
/// Bit `i` corresponds to the cell with row-major index `i`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bitmask {
    words: Vec<u64>,
    len: usize,
}

impl Bitmask {
    /// All `len` bits zero.
    pub fn new(len: usize) -> Self {
        Bitmask {
            words: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Number of addressable bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Test whether bit `index` is set.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        (self.words[index / 64] >> (index % 64)) & 1 != 0
    }

    /// Set bit `index` to 1.
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    /// Set bit `index` and report whether it was previously clear.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        let was_set = self.get(index);
        self.set(index);
        !was_set
    }

    /// True if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Population count.
    #[inline]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Bits set in `self` but not in `other`.
    pub fn difference(&self, other: &Bitmask) -> Bitmask {
        debug_assert_eq!(self.len, other.len);
        Bitmask {
            words: self
                .words
                .iter()
                .zip(&other.words)
                .map(|(a, b)| a & !b)
                .collect(),
            len: self.len,
        }
    }

    /// Iterate over indices of set bits, in increasing order.
    #[inline]
    pub fn iter_ones(&self) -> BitIterator<'_> {
        BitIterator {
            words: &self.words,
            current: self.words.first().copied().unwrap_or(0),
            word_index: 0,
        }
    }
}

impl BitAnd for &Bitmask {
    type Output = Bitmask;
    fn bitand(self, rhs: &Bitmask) -> Bitmask {
        debug_assert_eq!(self.len, rhs.len);
        Bitmask {
            words: self.words.iter().zip(&rhs.words).map(|(a, b)| a & b).collect(),
            len: self.len,
        }
    }
}

/// Iterator over set-bit indices in a `Bitmask`.
pub struct BitIterator<'a> {
    words: &'a [u64],
    current: u64,
    word_index: usize,
}

impl Iterator for BitIterator<'_> {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                // Clear lowest set bit
                self.current &= self.current - 1;
                return Some(self.word_index * 64 + bit);
            }
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }
    }
}
