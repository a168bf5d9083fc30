//! Base64 wire codec for the packed dot buffer.
//!
//! The wire format is the raw buffer: ⌈side²/8⌉ bytes, row-major, MSB-first,
//! encoded with the standard base64 alphabet and `=` padding. `decode`
//! accepts exactly what `encode` produces and never partially applies a
//! malformed or wrong-length payload.

use base64::{engine::general_purpose, Engine};

use crate::{DotMatrix, Result};

/// Encodes the current buffer contents. Identical buffers always yield
/// identical strings.
pub fn encode(matrix: &DotMatrix) -> String {
    general_purpose::STANDARD.encode(matrix.data())
}

/// Restores a previously encoded canvas into `matrix`.
///
/// # Errors
///
/// `InvalidEncoding` when the text is not valid base64, `LengthMismatch`
/// when the decoded payload does not fit the matrix. The matrix is left
/// unchanged in both cases.
pub fn decode(matrix: &mut DotMatrix, text: &str) -> Result<()> {
    let bytes = general_purpose::STANDARD.decode(text)?;
    matrix.load_bytes(&bytes)
}
