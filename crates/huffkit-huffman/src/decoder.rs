//! Bit stream decoding against a code tree.
//!
//! The decoder walks the tree bit by bit: left on `0`, right on `1`,
//! emitting a symbol and resetting to the root at each leaf. It consumes
//! exactly the recorded logical bit count, so trailing pad bits are never
//! interpreted as data.

use huffkit_core::{Error, Result};
use tracing::trace;

use crate::bitstream::{BitReader, PackedBuffer};
use crate::tree::{HuffmanTree, NodeKind};

/// Decode a packed buffer back into the original symbol sequence.
pub fn decode(packed: &PackedBuffer, tree: &HuffmanTree) -> Result<Vec<u8>> {
    decode_bits(&packed.bytes, packed.bit_len, tree)
}

/// Decode `bit_len` logical bits of `bytes` against `tree`.
///
/// Fails with [`Error::TruncatedStream`] when the buffer holds fewer bits
/// than claimed, or when the bits run out in the middle of a root-to-leaf
/// walk.
pub fn decode_bits(bytes: &[u8], bit_len: u64, tree: &HuffmanTree) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(bytes, bit_len)?;
    let mut output = Vec::new();

    // Single-symbol alphabet: the lone leaf was coded as one `0` bit per
    // occurrence, so each consumed bit emits the symbol.
    if let NodeKind::Leaf { symbol } = tree.node(tree.root()).kind {
        while reader.read_bit().is_some() {
            output.push(symbol);
        }
        return Ok(output);
    }

    let mut current = tree.root();
    while let Some(bit) = reader.read_bit() {
        let NodeKind::Internal { left, right } = tree.node(current).kind else {
            unreachable!("walk always restarts from an internal root");
        };
        current = if bit { right } else { left };

        if let NodeKind::Leaf { symbol } = tree.node(current).kind {
            output.push(symbol);
            current = tree.root();
        }
    }

    if current != tree.root() {
        // Bits ran out mid-path: the claimed bit count cuts a code short.
        return Err(Error::truncated(reader.bits_consumed()));
    }

    trace!(bits = bit_len, symbols = output.len(), "decoded bit stream");
    Ok(output)
}
