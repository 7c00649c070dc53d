//! # Huffkit Huffman
//!
//! Tree-based Huffman codec: frequency analysis, greedy tree construction,
//! prefix-free code generation, MSB-first bit packing, and tree
//! serialization for reuse between compress and decompress.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffkit_core::{Compressor, Decompressor};
//! use huffkit_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new();
//! let compressed = codec.compress(b"abacabad").unwrap();
//! let original = codec.decompress(&compressed).unwrap();
//! assert_eq!(original, b"abacabad");
//! ```
//!
//! ## Two workflows
//!
//! The [`Compressor`]/[`Decompressor`] trait surface is self-contained:
//! compressed output is a small frame embedding the serialized tree next
//! to the packed payload, so any frame decompresses on its own.
//!
//! [`compress_with_store`]/[`decompress_with_store`] keep the tree
//! out-of-band instead: compression persists it in an injected
//! [`TreeStore`], decompression loads it back, and only the packed payload
//! travels.
//!
//! ## Architecture
//!
//! ```text
//! frequency -> tree -> code -> bitstream     (compress path)
//! serial/store -> decoder                    (decompress path)
//! transport                                  (optional base64 adapter)
//! ```
//!
//! Every stage is pure, synchronous computation; independent inputs can be
//! processed in parallel since no stage holds shared mutable state.

pub mod bitstream;
pub mod code;
pub mod decoder;
pub mod frequency;
pub mod serial;
pub mod store;
pub mod transport;
pub mod tree;

pub use bitstream::{pack, BitReader, BitWriter, PackedBuffer};
pub use code::{Code, CodeTable};
pub use decoder::{decode, decode_bits};
pub use frequency::{FrequencyTable, ALPHABET_SIZE};
pub use serial::SerializedTree;
pub use store::{FileTreeStore, MemoryTreeStore, TreeStore};
pub use transport::{from_base64, to_base64};
pub use tree::{HuffmanTree, Node, NodeId, NodeKind};

use huffkit_core::{Codec, Compressor, Decompressor, Error, Result};
use tracing::debug;

/// Frame magic ("HUFK", little-endian).
pub const HUFFMAN_MAGIC: u32 = 0x4B46_5548;

/// Fixed frame prefix: magic (4) + bit length (8) + tree length (4).
const FRAME_HEADER_LEN: usize = 16;

/// Upper bound on the JSON form of a full 256-symbol tree (511 nodes).
const MAX_TREE_JSON_LEN: usize = 40 * 1024;

// =============================================================================
// Frame format
// =============================================================================
//
// | magic: u32 LE | bit_len: u64 LE | tree_len: u32 LE | tree JSON | payload |
//
// The payload is exactly ceil(bit_len / 8) bytes. Recording bit_len in the
// frame is what lets the decoder ignore pad bits.

fn encode_frame(tree_json: &[u8], packed: &PackedBuffer) -> Vec<u8> {
    let mut frame =
        Vec::with_capacity(FRAME_HEADER_LEN + tree_json.len() + packed.bytes.len());
    frame.extend_from_slice(&HUFFMAN_MAGIC.to_le_bytes());
    frame.extend_from_slice(&packed.bit_len.to_le_bytes());
    frame.extend_from_slice(&(tree_json.len() as u32).to_le_bytes());
    frame.extend_from_slice(tree_json);
    frame.extend_from_slice(&packed.bytes);
    frame
}

fn decode_frame(input: &[u8]) -> Result<(SerializedTree, PackedBuffer)> {
    if input.len() < FRAME_HEADER_LEN {
        return Err(Error::corrupted(format!(
            "frame too short: {} bytes, need at least {}",
            input.len(),
            FRAME_HEADER_LEN
        )));
    }

    let magic = u32::from_le_bytes(input[0..4].try_into().unwrap());
    if magic != HUFFMAN_MAGIC {
        return Err(Error::corrupted(format!(
            "bad magic 0x{magic:08x}, expected 0x{HUFFMAN_MAGIC:08x}"
        )));
    }

    let bit_len = u64::from_le_bytes(input[4..12].try_into().unwrap());
    let tree_len = u32::from_le_bytes(input[12..16].try_into().unwrap()) as usize;

    let body = &input[FRAME_HEADER_LEN..];
    if body.len() < tree_len {
        return Err(Error::corrupted(format!(
            "frame claims {} tree bytes but holds {}",
            tree_len,
            body.len()
        )));
    }
    let (tree_json, payload) = body.split_at(tree_len);

    let expected_payload = bit_len.div_ceil(8);
    if payload.len() as u64 != expected_payload {
        return Err(Error::corrupted(format!(
            "payload is {} bytes, expected {} for {} bits",
            payload.len(),
            expected_payload,
            bit_len
        )));
    }

    let record: SerializedTree = serde_json::from_slice(tree_json)
        .map_err(|e| Error::corrupt_tree(format!("embedded tree is not valid JSON: {e}")))?;

    Ok((
        record,
        PackedBuffer {
            bytes: payload.to_vec(),
            bit_len,
        },
    ))
}

// =============================================================================
// Out-of-band tree workflow
// =============================================================================

/// Compress, persisting the tree in `store` and returning only the packed
/// payload.
///
/// The tree is saved after packing succeeds, so a failed compression never
/// persists a partial artifact. Empty input is rejected with
/// [`Error::EmptyInput`].
pub fn compress_with_store(input: &[u8], store: &dyn TreeStore) -> Result<PackedBuffer> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let table = FrequencyTable::analyze(input);
    let tree = HuffmanTree::build(&table)?;
    let codes = CodeTable::generate(&tree);
    let packed = pack(input, &codes)?;

    store.save(&SerializedTree::from_tree(&tree))?;

    debug!(
        input_len = input.len(),
        distinct = table.distinct_symbols(),
        bit_len = packed.bit_len,
        "compressed input, tree persisted"
    );
    Ok(packed)
}

/// Decompress a packed payload against the tree persisted in `store`.
///
/// Fails with [`Error::NoStoredTree`] when nothing was persisted.
pub fn decompress_with_store(packed: &PackedBuffer, store: &dyn TreeStore) -> Result<Vec<u8>> {
    let tree = store.load()?.to_tree()?;
    decode(packed, &tree)
}

// =============================================================================
// Codec implementation
// =============================================================================

/// Huffman compressor producing self-contained frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCompressor;

impl HuffmanCompressor {
    /// Create a new compressor.
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for HuffmanCompressor {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let table = FrequencyTable::analyze(input);
        let tree = HuffmanTree::build(&table)?;
        let codes = CodeTable::generate(&tree);
        let packed = pack(input, &codes)?;

        let tree_json = serde_json::to_vec(&SerializedTree::from_tree(&tree))
            .map_err(|e| Error::corrupt_tree(format!("tree failed to serialize: {e}")))?;
        let frame = encode_frame(&tree_json, &packed);

        debug!(
            input_len = input.len(),
            distinct = table.distinct_symbols(),
            bit_len = packed.bit_len,
            frame_len = frame.len(),
            "compressed input into frame"
        );
        Ok(frame)
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let compressed = self.compress(input)?;
        if compressed.len() > output.len() {
            return Err(Error::buffer_too_small(compressed.len(), output.len()));
        }
        output[..compressed.len()].copy_from_slice(&compressed);
        Ok(compressed.len())
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // Code length is bounded by 64 bits (see `Code`), so the payload
        // never exceeds 8 bytes per input symbol.
        FRAME_HEADER_LEN + MAX_TREE_JSON_LEN + input_len.saturating_mul(8)
    }
}

/// Huffman decompressor for self-contained frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanDecompressor;

impl HuffmanDecompressor {
    /// Create a new decompressor.
    pub fn new() -> Self {
        Self
    }
}

impl Decompressor for HuffmanDecompressor {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let (record, packed) = decode_frame(input)?;
        let tree = record.to_tree()?;
        let output = decode(&packed, &tree)?;

        debug!(
            frame_len = input.len(),
            output_len = output.len(),
            "decompressed frame"
        );
        Ok(output)
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let result = self.decompress(input)?;
        if result.len() > output.len() {
            return Err(Error::buffer_too_small(result.len(), output.len()));
        }
        output[..result.len()].copy_from_slice(&result);
        Ok(result.len())
    }
}

/// Huffman codec combining compression and decompression.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    /// Create a new codec.
    pub fn new() -> Self {
        HuffmanCodec
    }
}

impl Compressor for HuffmanCodec {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        HuffmanCompressor::new().compress(input)
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        HuffmanCompressor::new().compress_to(input, output)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        HuffmanCompressor::new().max_compressed_size(input_len)
    }
}

impl Decompressor for HuffmanCodec {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        HuffmanDecompressor::new().decompress(input)
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        HuffmanDecompressor::new().decompress_to(input, output)
    }
}

impl Codec for HuffmanCodec {
    fn new() -> Self {
        HuffmanCodec
    }
}

// =============================================================================
// Tests
// =============================================================================
