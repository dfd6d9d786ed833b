//! A word-packed atomic bitmap.
//!
//! This is the dense frontier representation: one bit per vertex, packed
//! into `AtomicUsize` words so concurrent scatters from the sparse path and
//! single-owner writes from the dense path share storage without locks.

use core::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

/// Bits per storage word.
pub const WORD_BITS: usize = usize::BITS as usize;

/// A fixed-size, word-packed atomic bitmap.
pub struct AtomicBitmap {
    bits: usize,
    words: Vec<AtomicUsize>,
}

impl AtomicBitmap {
    /// Creates a bitmap with `bits` bits, all cleared.
    pub fn new(bits: usize) -> Self {
        let words = (0..bits.div_ceil(WORD_BITS)).map(|_| AtomicUsize::new(0)).collect();
        Self { bits, words }
    }

    /// Builds a bitmap from raw words.
    ///
    /// Bits at positions `>= bits` in the last word must be zero; the
    /// popcount-based accounting in the frontier relies on it.
    ///
    /// # Panics
    /// Panics if `words.len()` disagrees with `bits`, or a tail bit is set.
    pub fn from_words(bits: usize, words: Vec<usize>) -> Self {
        assert_eq!(words.len(), bits.div_ceil(WORD_BITS), "word count mismatch for {bits} bits");
        if let Some(&last) = words.last() {
            let used = bits - (words.len() - 1) * WORD_BITS;
            if used < WORD_BITS {
                assert_eq!(last & !((1usize << used) - 1), 0, "tail bits beyond {bits} must be clear");
            }
        }
        Self { bits, words: words.into_iter().map(AtomicUsize::new).collect() }
    }

    /// Number of bits.
    #[inline]
    pub fn len_bits(&self) -> usize {
        self.bits
    }

    /// Clears all bits.
    pub fn clear_all(&self) {
        for w in &self.words {
            w.store(0, Ordering::Relaxed);
        }
    }

    /// Sets all bits, leaving the unused tail of the last word clear.
    pub fn set_all(&self) {
        let full = self.bits / WORD_BITS;
        for w in &self.words[..full] {
            w.store(usize::MAX, Ordering::Relaxed);
        }
        let rem = self.bits % WORD_BITS;
        if rem != 0 {
            self.words[full].store((1usize << rem) - 1, Ordering::Relaxed);
        }
    }

    /// Returns whether `bit` is set.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    #[inline]
    pub fn is_set(&self, bit: usize) -> bool {
        assert!(bit < self.bits, "bit {bit} out of bounds for {} bits", self.bits);
        // SAFETY: index checked above.
        unsafe { self.is_set_unchecked(bit) }
    }

    /// Sets `bit`.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    #[inline]
    pub fn set(&self, bit: usize, order: Ordering) {
        assert!(bit < self.bits, "bit {bit} out of bounds for {} bits", self.bits);
        let (word, mask) = bit_word_mask(bit);
        self.words[word].fetch_or(mask, order);
    }

    /// Sets `bit` and returns `true` iff this call observed it previously
    /// cleared. The winner among concurrent callers is unique.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    #[inline]
    pub fn test_and_set(&self, bit: usize, order: Ordering) -> bool {
        assert!(bit < self.bits, "bit {bit} out of bounds for {} bits", self.bits);
        let (word, mask) = bit_word_mask(bit);
        let prev = self.words[word].fetch_or(mask, order);
        (prev & mask) == 0
    }

    /// # Safety
    /// Caller must ensure `bit < len_bits()`.
    #[inline(always)]
    pub unsafe fn is_set_unchecked(&self, bit: usize) -> bool {
        let (word, mask) = bit_word_mask(bit);
        // SAFETY: word index derived from bit < self.bits.
        (self.words.get_unchecked(word).load(Ordering::Relaxed) & mask) != 0
    }

    /// Number of set bits, counted in parallel.
    pub fn count_ones(&self) -> usize {
        self.words
            .par_iter()
            .map(|w| w.load(Ordering::Relaxed).count_ones() as usize)
            .sum()
    }

    /// Invokes `f` once per set bit, in parallel across words.
    ///
    /// Bit order within a word is ascending; no ordering across words.
    pub fn for_each_set<F>(&self, f: F)
    where
        F: Fn(usize) + Sync,
    {
        self.words.par_iter().enumerate().for_each(|(wi, w)| {
            let mut word = w.load(Ordering::Relaxed);
            while word != 0 {
                let b = word.trailing_zeros() as usize;
                word &= word - 1;
                f(wi * WORD_BITS + b);
            }
        });
    }

    /// Collects the set bit positions into an ascending vector, in parallel.
    pub fn to_sorted_indices(&self) -> Vec<usize> {
        self.words
            .par_iter()
            .enumerate()
            .flat_map_iter(|(wi, w)| {
                let mut word = w.load(Ordering::Relaxed);
                core::iter::from_fn(move || {
                    if word == 0 {
                        return None;
                    }
                    let b = word.trailing_zeros() as usize;
                    word &= word - 1;
                    Some(wi * WORD_BITS + b)
                })
            })
            .collect()
    }

    /// The backing words.
    #[inline]
    pub fn words(&self) -> &[AtomicUsize] {
        &self.words
    }
}

#[inline(always)]
fn bit_word_mask(bit: usize) -> (usize, usize) {
    (bit / WORD_BITS, 1usize << (bit % WORD_BITS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_set_reports_first_setter() {
        let b = AtomicBitmap::new(130);
        assert_eq!(b.len_bits(), 130);
        assert!(!b.is_set(0));
        assert!(b.test_and_set(0, Ordering::Relaxed));
        assert!(b.is_set(0));
        assert!(!b.test_and_set(0, Ordering::Relaxed));

        assert!(b.test_and_set(129, Ordering::Relaxed));
        assert!(b.is_set(129));

        b.clear_all();
        assert!(!b.is_set(0));
        assert!(!b.is_set(129));
    }

    #[test]
    fn set_all_masks_the_tail_word() {
        let b = AtomicBitmap::new(70);
        b.set_all();
        assert_eq!(b.count_ones(), 70);
        assert!(b.is_set(69));
    }

    #[test]
    fn sorted_indices_round_trip() {
        let b = AtomicBitmap::new(200);
        for bit in [0, 63, 64, 65, 127, 199] {
            b.set(bit, Ordering::Relaxed);
        }
        assert_eq!(b.to_sorted_indices(), vec![0, 63, 64, 65, 127, 199]);
        assert_eq!(b.count_ones(), 6);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_range_bit_panics() {
        let b = AtomicBitmap::new(10);
        b.is_set(10);
    }
}
