//! Code generation from a built tree.
//!
//! Each leaf's code is its root-to-leaf path: `0` for a left edge, `1` for
//! a right edge. Codes are prefix-free by construction since symbols only
//! sit at leaves.

use crate::frequency::ALPHABET_SIZE;
use crate::tree::{HuffmanTree, NodeKind};

/// One symbol's code: the path bits right-aligned in `bits`, most
/// significant path bit first.
///
/// 64 bits of code space is enough: a deeper leaf would require a
/// Fibonacci-skewed frequency distribution over an input larger than
/// 2^60 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Code {
    /// Path bits, right-aligned (bit `len - 1` is the first edge).
    pub bits: u64,
    /// Number of bits in the code. Zero means "no code assigned".
    pub len: u8,
}

impl Code {
    /// Render as a 0/1 string, mainly for diagnostics and tests.
    pub fn to_bit_string(&self) -> String {
        (0..self.len)
            .rev()
            .map(|i| if self.bits >> i & 1 == 1 { '1' } else { '0' })
            .collect()
    }
}

/// Symbol-to-code mapping derived from one tree.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Box<[Code; ALPHABET_SIZE]>,
}

impl CodeTable {
    /// Walk the tree and record each leaf's path as its code.
    ///
    /// A bare-leaf root (single-symbol alphabet) gets the one-bit code `0`;
    /// a zero-length code could not delimit symbol boundaries, so this
    /// policy is mandatory, and the decoder mirrors it.
    pub fn generate(tree: &HuffmanTree) -> Self {
        let mut codes = Box::new([Code::default(); ALPHABET_SIZE]);

        if let NodeKind::Leaf { symbol } = tree.node(tree.root()).kind {
            codes[symbol as usize] = Code { bits: 0, len: 1 };
            return Self { codes };
        }

        let mut stack = vec![(tree.root(), 0u64, 0u8)];
        while let Some((id, bits, len)) = stack.pop() {
            match tree.node(id).kind {
                NodeKind::Leaf { symbol } => {
                    codes[symbol as usize] = Code { bits, len };
                }
                NodeKind::Internal { left, right } => {
                    stack.push((left, bits << 1, len + 1));
                    stack.push((right, bits << 1 | 1, len + 1));
                }
            }
        }

        Self { codes }
    }

    /// Look up the code for a symbol, if one was assigned.
    #[inline]
    pub fn get(&self, symbol: u8) -> Option<Code> {
        let code = self.codes[symbol as usize];
        (code.len > 0).then_some(code)
    }

    /// Iterate over (symbol, code) pairs for assigned symbols.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|&(_, code)| code.len > 0)
            .map(|(symbol, &code)| (symbol as u8, code))
    }

    /// Number of symbols with assigned codes.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.len > 0).count()
    }

    /// Check whether no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|code| code.len == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn codes_for(input: &[u8]) -> CodeTable {
        let tree = HuffmanTree::build(&FrequencyTable::analyze(input)).unwrap();
        CodeTable::generate(&tree)
    }

    #[test]
    fn test_one_code_per_distinct_symbol() {
        let table = codes_for(b"abacabad");
        assert_eq!(table.len(), 4);
        assert!(table.get(b'a').is_some());
        assert!(table.get(b'z').is_none());
    }

    #[test]
    fn test_known_example_lengths() {
        // a:4 gets 1 bit; b:2 gets 2 bits; c:1 and d:1 get 3 bits each.
        let table = codes_for(b"abacabad");
        assert_eq!(table.get(b'a').unwrap().len, 1);
        assert_eq!(table.get(b'b').unwrap().len, 2);
        assert_eq!(table.get(b'c').unwrap().len, 3);
        assert_eq!(table.get(b'd').unwrap().len, 3);
    }

    #[test]
    fn test_known_example_paths() {
        let table = codes_for(b"abacabad");
        assert_eq!(table.get(b'a').unwrap().to_bit_string(), "0");
        assert_eq!(table.get(b'b').unwrap().to_bit_string(), "10");
        assert_eq!(table.get(b'c').unwrap().to_bit_string(), "110");
        assert_eq!(table.get(b'd').unwrap().to_bit_string(), "111");
    }

    #[test]
    fn test_single_symbol_gets_zero_code() {
        let table = codes_for(b"aaaa");
        let code = table.get(b'a').unwrap();
        assert_eq!(code.len, 1);
        assert_eq!(code.to_bit_string(), "0");
    }

    #[test]
    fn test_prefix_free() {
        let table = codes_for(b"the quick brown fox jumps over the lazy dog");
        let all: Vec<(u8, Code)> = table.iter().collect();
        for &(sym_a, a) in &all {
            for &(sym_b, b) in &all {
                if sym_a == sym_b {
                    continue;
                }
                let (shorter, longer) = if a.len <= b.len { (a, b) } else { (b, a) };
                let prefix = longer.bits >> (longer.len - shorter.len);
                assert!(
                    shorter.bits != prefix || shorter.len == longer.len,
                    "code for {:?} is a prefix of code for {:?}",
                    sym_a as char,
                    sym_b as char
                );
            }
        }
    }

    #[test]
    fn test_deterministic_codes() {
        let input = b"determinism check with repeated symbols aabbcc";
        let first = codes_for(input);
        let second = codes_for(input);
        for symbol in 0..=255u8 {
            assert_eq!(first.get(symbol), second.get(symbol));
        }
    }

    #[test]
    fn test_bit_string_rendering() {
        let code = Code { bits: 0b101, len: 3 };
        assert_eq!(code.to_bit_string(), "101");
        let code = Code { bits: 0b01, len: 2 };
        assert_eq!(code.to_bit_string(), "01");
    }
}
