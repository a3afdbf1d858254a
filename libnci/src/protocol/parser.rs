// libnci/src/protocol/parser.rs

use crate::constants::NCI_STATUS_OK;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Ensure the slice has exactly `len` bytes.
pub fn ensure_exact_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(Error::InvalidLength {
            expected: len,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a length-prefixed block starting at `idx`: one length byte
/// followed by that many bytes. Returns the block and the index just
/// past it.
pub fn length_prefixed_at(data: &[u8], idx: usize) -> Result<(&[u8], usize)> {
    let len = byte_at(data, idx)? as usize;
    let block = slice_at(data, idx + 1, len)?;
    Ok((block, idx + 1 + len))
}

/// Read the NCI status byte that opens every response payload.
pub fn response_status(data: &[u8]) -> Result<u8> {
    byte_at(data, 0)
}

/// True when the response payload starts with `NCI_STATUS_OK`. Empty
/// payloads are not OK.
pub fn is_status_ok(data: &[u8]) -> bool {
    matches!(response_status(data), Ok(NCI_STATUS_OK))
}
