//! Base64 transport adapter.
//!
//! Pure byte/printable-string conversion for sinks that want text
//! transport of packed buffers. The codec itself never depends on it.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use huffkit_core::{Error, Result};

/// Encode bytes as standard base64.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard base64 back into bytes.
pub fn from_base64(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text.trim())
        .map_err(|e| Error::corrupted(format!("invalid base64: {e}")))
}
