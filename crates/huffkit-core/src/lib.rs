//! # Huffkit Core
//!
//! Core traits, types, and error taxonomy for the Huffkit compression
//! library.
//!
//! ## Design Philosophy
//!
//! - **Algorithm-agnostic**: no codec code lives here, only the contracts
//!   codecs implement
//! - **Pure computation**: every operation is synchronous and deterministic;
//!   errors are returned, never retried
//! - **Explicit dependencies**: persistence and transport are injected by
//!   the caller, never reached through ambient globals
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot compression operations
//! - [`Decompressor`] - One-shot decompression operations
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use huffkit_core::Codec;
//! use huffkit_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new();
//! let compressed = codec.compress(data)?;
//! let original = codec.decompress(&compressed)?;
//! ```

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{Codec, Compressor, Decompressor};
pub use types::CompressionRatio;
