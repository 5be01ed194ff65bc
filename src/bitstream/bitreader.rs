//! BitReader: walks a bit sequence one bit at a time for the huffman decoder.
//!
//! The reader never fails. It hands out bits until the sequence is exhausted and then returns None.
//! The current position is always available so callers can report where decoding went wrong.
//!

use super::BitSeq;

/// Reads a BitSeq from the front.
#[derive(Debug)]
pub struct BitReader<'a> {
    bits: &'a [bool],
    cursor: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader positioned at the first bit.
    pub fn new(source: &'a BitSeq) -> Self {
        Self {
            bits: source.as_slice(),
            cursor: 0,
        }
    }

    /// Return the next bit (true for 1), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<bool> {
        let bit = self.bits.get(self.cursor).copied();
        if bit.is_some() {
            self.cursor += 1;
        }
        bit
    }

    /// Offset of the next bit to be read. Equals the number of bits consumed so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Debugging function. Report current position in the stream.
    pub fn loc(&self) -> String {
        format!("[{}/{}]", self.cursor, self.bits.len())
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;
    use crate::bitstream::BitSeq;

    #[test]
    fn basic_test() {
        let seq: BitSeq = "100".parse().unwrap();
        let mut br = BitReader::new(&seq);
        assert_eq!(br.bit(), Some(true));
        assert_eq!(br.bit(), Some(false));
        assert_eq!(br.bit(), Some(false));
        assert_eq!(br.bit(), None);
        assert_eq!(br.bit(), None);
        assert_eq!(br.position(), 3);
    }

    #[test]
    fn loc_test() {
        let seq: BitSeq = "10110".parse().unwrap();
        let mut br = BitReader::new(&seq);
        br.bit();
        br.bit();
        assert_eq!(br.loc(), "[2/5]");
    }
}
