//! Byte frequency analysis.
//!
//! The frequency table is the input to tree construction. It is backed by a
//! fixed 256-entry count array rather than a hash map, so iteration order is
//! always ascending symbol value. Tree construction relies on that stable
//! order for deterministic tie-breaking.

/// Number of distinct byte symbols.
pub const ALPHABET_SIZE: usize = 256;

/// Symbol occurrence counts for one input.
///
/// Invariants: the sum of all counts equals the length of the analyzed
/// input, and every symbol present in the input has exactly one non-zero
/// entry.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Box<[u64; ALPHABET_SIZE]>,
}

impl FrequencyTable {
    /// Count symbol occurrences in a single pass.
    ///
    /// Empty input yields an empty table.
    pub fn analyze(input: &[u8]) -> Self {
        let mut counts = Box::new([0u64; ALPHABET_SIZE]);
        for &byte in input {
            counts[byte as usize] += 1;
        }
        Self { counts }
    }

    /// Get the count for one symbol (zero if absent).
    #[inline]
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Iterate over (symbol, count) pairs with non-zero counts, in
    /// ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    /// Number of distinct symbols observed.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Total number of symbols observed (the analyzed input length).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Check whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}

impl std::fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_counts() {
        let table = FrequencyTable::analyze(b"abacabad");
        assert_eq!(table.count(b'a'), 4);
        assert_eq!(table.count(b'b'), 2);
        assert_eq!(table.count(b'c'), 1);
        assert_eq!(table.count(b'd'), 1);
        assert_eq!(table.count(b'z'), 0);
        assert_eq!(table.distinct_symbols(), 4);
        assert_eq!(table.total(), 8);
    }

    #[test]
    fn test_empty_input_empty_table() {
        let table = FrequencyTable::analyze(b"");
        assert!(table.is_empty());
        assert_eq!(table.distinct_symbols(), 0);
        assert_eq!(table.total(), 0);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_iteration_is_ordered() {
        let table = FrequencyTable::analyze(b"dcba");
        let symbols: Vec<u8> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![b'a', b'b', b'c', b'd']);
    }

    #[test]
    fn test_total_matches_input_length() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let table = FrequencyTable::analyze(input);
        assert_eq!(table.total(), input.len() as u64);
    }

    #[test]
    fn test_full_byte_range() {
        let input: Vec<u8> = (0..=255).collect();
        let table = FrequencyTable::analyze(&input);
        assert_eq!(table.distinct_symbols(), 256);
        assert!(table.iter().all(|(_, count)| count == 1));
    }
}
