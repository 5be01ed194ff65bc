use log::debug;

use super::codebook::{build_codebook, Codebook};
use super::error::HuffmanError;
use super::node::Symbol;
use crate::bitstream::BitSeq;
use crate::tools::freq_count::frequencies;

/// Replace every symbol of `sequence` with its code, in order.
/// The codebook may come from somewhere else entirely, so every symbol is checked.
pub fn encode<S: Symbol>(sequence: &[S], codebook: &Codebook<S>) -> Result<BitSeq, HuffmanError> {
    // Exact output size; symbols without a code are reported by the loop below.
    let total: usize = sequence
        .iter()
        .filter_map(|symbol| codebook.get(symbol))
        .map(BitSeq::len)
        .sum();
    let mut bits = BitSeq::with_capacity(total);
    for (position, symbol) in sequence.iter().enumerate() {
        let code = codebook
            .get(symbol)
            .ok_or_else(|| HuffmanError::UnknownSymbol {
                symbol: format!("{:?}", symbol),
                position,
            })?;
        bits.extend_from(code);
    }
    debug!(
        "Encoded {} symbols into {} bits",
        sequence.len(),
        bits.len()
    );
    Ok(bits)
}

/// Count the symbols of `sequence`, build their codebook, and encode the sequence with it.
pub fn huffman_encode<S: Symbol>(sequence: &[S]) -> Result<(Codebook<S>, BitSeq), HuffmanError> {
    let codebook = build_codebook(&frequencies(sequence))?;
    let bits = encode(sequence, &codebook)?;
    Ok((codebook, bits))
}
