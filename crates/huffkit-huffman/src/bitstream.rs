//! Bit-level packing of code sequences.
//!
//! Bits are packed most-significant-bit-first within each byte, matching
//! the order in which the code generator emits path bits. The packed
//! buffer records the exact pre-pad bit count; trailing zero pad bits are
//! storage filler, never logical content. Without that count, pad bits can
//! spuriously decode as extra symbols.

use huffkit_core::{Error, Result};

use crate::code::{Code, CodeTable};

/// A byte-aligned bit stream with its exact logical length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBuffer {
    /// Packed bytes, MSB-first, zero-padded to a byte boundary.
    pub bytes: Vec<u8>,
    /// Number of logical bits; `bytes.len() * 8 - bit_len` bits of the last
    /// byte are padding.
    pub bit_len: u64,
}

impl PackedBuffer {
    /// Number of trailing pad bits in the last byte (0-7).
    pub fn pad_bits(&self) -> u32 {
        ((self.bytes.len() as u64 * 8 - self.bit_len) % 8) as u32
    }
}

/// Accumulates bits MSB-first into a byte vector.
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: u64,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit.
    #[inline]
    pub fn push_bit(&mut self, bit: bool) {
        let index = (self.bit_len / 8) as usize;
        let offset = (self.bit_len % 8) as u8;
        if index == self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[index] |= 1 << (7 - offset);
        }
        self.bit_len += 1;
    }

    /// Append a code's path bits, most significant first.
    pub fn push_code(&mut self, code: Code) {
        for i in (0..code.len).rev() {
            self.push_bit(code.bits >> i & 1 == 1);
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Finish the stream. The last byte is already zero-padded because
    /// bytes are allocated zeroed before bits are set.
    pub fn finish(self) -> PackedBuffer {
        PackedBuffer {
            bytes: self.bytes,
            bit_len: self.bit_len,
        }
    }
}

/// Reads bits MSB-first from a packed byte slice, bounded by the logical
/// bit count.
#[derive(Debug)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    bit_len: u64,
    pos: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `bit_len` logical bits.
    ///
    /// Fails with [`Error::TruncatedStream`] when the buffer holds fewer
    /// bits than claimed.
    pub fn new(bytes: &'a [u8], bit_len: u64) -> Result<Self> {
        if bit_len > bytes.len() as u64 * 8 {
            return Err(Error::truncated(0));
        }
        Ok(Self {
            bytes,
            bit_len,
            pos: 0,
        })
    }

    /// Read the next bit, or `None` when the logical bits are exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.pos >= self.bit_len {
            return None;
        }
        let byte = self.bytes[(self.pos / 8) as usize];
        let bit = byte >> (7 - (self.pos % 8) as u8) & 1 == 1;
        self.pos += 1;
        Some(bit)
    }

    /// Number of bits consumed so far.
    pub fn bits_consumed(&self) -> u64 {
        self.pos
    }

    /// Number of logical bits left.
    pub fn bits_remaining(&self) -> u64 {
        self.bit_len - self.pos
    }
}

/// Pack an input through a code table into a byte-aligned bit stream.
///
/// Fails with [`Error::UnknownSymbol`] when a symbol has no code, which
/// indicates the table was derived from different data.
pub fn pack(input: &[u8], codes: &CodeTable) -> Result<PackedBuffer> {
    let mut writer = BitWriter::new();
    for &symbol in input {
        let code = codes.get(symbol).ok_or(Error::UnknownSymbol { symbol })?;
        writer.push_code(code);
    }
    Ok(writer.finish())
}
