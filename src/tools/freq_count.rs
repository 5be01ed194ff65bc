use rustc_hash::FxHashMap;

use crate::huffman_coding::node::Symbol;

/// Returns each distinct symbol of the input once, with how often it occurs. Symbols are listed in the
/// order they first appear, which keeps codebooks built from the result reproducible.
pub fn frequencies<S: Symbol>(data: &[S]) -> Vec<(S, u64)> {
    let mut slots: FxHashMap<S, usize> = FxHashMap::default();
    let mut freqs: Vec<(S, u64)> = Vec::new();
    for &symbol in data {
        let slot = *slots.entry(symbol).or_insert_with(|| {
            freqs.push((symbol, 0));
            freqs.len() - 1
        });
        freqs[slot].1 += 1;
    }
    freqs
}

#[cfg(test)]
mod test {
    use super::frequencies;

    #[test]
    fn count_test() {
        let input: Vec<char> = "aaaabbbc".chars().collect();
        assert_eq!(frequencies(&input), vec![('a', 4), ('b', 3), ('c', 1)]);
    }

    #[test]
    fn first_occurrence_order_test() {
        assert_eq!(
            frequencies(b"banana"),
            vec![(b'b', 1), (b'a', 3), (b'n', 2)]
        );
    }

    #[test]
    fn empty_test() {
        assert!(frequencies::<u8>(&[]).is_empty());
    }
}
