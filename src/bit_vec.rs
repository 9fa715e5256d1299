use crate::constants::ceil_div;

/// Packed candidate flags, one bit per odd number of a window.
///
/// Bits start set and are cleared as multiples get struck. Iterating yields the indices of the
/// bits that are still set, in ascending order, scanning a whole word at a time.
pub struct BitVec {
    bit_vec: Vec<u64>,
    len: usize,
    word_index: usize,
    bit_index: usize,
}

impl Iterator for BitVec {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let word = self.bit_vec.get(self.word_index)?;
            let masked_word = word & BitVec::greater_or_equal_bits(self.bit_index);
            match BitVec::find_first_set(masked_word) {
                Some(bit_index) => {
                    let result = (self.word_index << BitVec::SHIFT) + bit_index;
                    if bit_index + 1 == BitVec::WORD_BITS {
                        self.word_index += 1;
                        self.bit_index = 0;
                    } else {
                        self.bit_index = bit_index + 1;
                    }
                    return Some(result);
                }
                None => {
                    self.word_index += 1;
                    self.bit_index = 0;
                }
            }
        }
    }
}

impl BitVec {
    const WORD_BITS: usize = 64;
    const SHIFT: usize = 6;
    const MASK: usize = 0b11_1111;
    const ONES: u64 = u64::MAX;

    pub fn new(len: usize) -> BitVec {
        let mut bit_vec = vec![BitVec::ONES; ceil_div(len, BitVec::WORD_BITS)];
        // Clear the padding past len in the last word so iteration never reports it.
        if let Some(end) = bit_vec.get_mut(len >> BitVec::SHIFT) {
            *end &= !BitVec::greater_or_equal_bits(len & BitVec::MASK);
        }

        BitVec {
            bit_vec,
            len,
            word_index: 0,
            bit_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn unset(&mut self, index: usize) {
        self.bit_vec[index >> BitVec::SHIFT] &= !(1u64 << (index & BitVec::MASK));
    }

    #[cfg(test)]
    pub fn is_set(&self, index: usize) -> bool {
        index < self.len
            && (self.bit_vec[index >> BitVec::SHIFT] & (1u64 << (index & BitVec::MASK))) != 0
    }

    #[cfg(test)]
    pub fn count_ones(&self) -> usize {
        self.bit_vec.iter().map(|word| word.count_ones() as usize).sum()
    }

    fn greater_or_equal_bits(bit_index: usize) -> u64 {
        BitVec::ONES << bit_index
    }

    /// Find the first set bit in word. This index is equal to the number of word's trailing zeros.
    fn find_first_set(word: u64) -> Option<usize> {
        if word == 0 {
            return None;
        }
        Some(word.trailing_zeros() as usize)
    }
}
