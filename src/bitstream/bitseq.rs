use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::huffman_coding::error::HuffmanError;

/// An ordered sequence of bits. Used for single codes as well as for whole encoded messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitSeq {
    bits: Vec<bool>,
}

impl BitSeq {
    /// Create an empty bit sequence
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create an empty bit sequence with room for `capacity` bits
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Push one bit onto the end of the sequence. *true* is a 1.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append every bit of `other`.
    pub fn extend_from(&mut self, other: &BitSeq) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Return a copy of this sequence with one more bit on the end.
    pub fn with_bit(&self, bit: bool) -> BitSeq {
        let mut next = BitSeq::with_capacity(self.len() + 1);
        next.extend_from(self);
        next.push(bit);
        next
    }

    pub fn clear(&mut self) {
        self.bits.clear();
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Number of bits the sequence can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.bits.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns true if `prefix` matches the start of this sequence.
    pub fn starts_with(&self, prefix: &BitSeq) -> bool {
        self.bits.starts_with(&prefix.bits)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }
}

impl Display for BitSeq {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitSeq {
    type Err = HuffmanError;

    /// Parse text made only of '0' and '1' characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut seq = BitSeq::with_capacity(s.len());
        for (idx, ch) in s.chars().enumerate() {
            match ch {
                '0' => seq.push(false),
                '1' => seq.push(true),
                other => {
                    return Err(HuffmanError::InvalidInput(format!(
                        "character {:?} at offset {} is not a bit",
                        other, idx
                    )))
                }
            }
        }
        Ok(seq)
    }
}

impl From<Vec<bool>> for BitSeq {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}
