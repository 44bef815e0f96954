// crates/guidfmt-core/src/encoder.rs
// ============================================================================
// Module: GUID Encoder
// Description: Bounded, allocation-free GUID text rendering.
// Purpose: Sequence primitive writes in permuted field order for each layout.
// Dependencies: crate::{guid, layout, primitive}, thiserror
// ============================================================================

//! ## Overview
//! The encoder renders the 16 stored bytes of a [`Guid`] as 32 lowercase hex
//! digits in the conventional 8-4-4-4-12 grouping. The three leading fields
//! are stored little-endian, so their bytes are emitted in reverse; the last
//! eight bytes are emitted as stored.
//!
//! Rendering is all-or-nothing from the caller's point of view: either the
//! full text fits and its length is returned, or an error is returned and no
//! count is reported. Bytes already written before a failure are left in the
//! buffer and carry no meaning.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::guid::Guid;
use crate::layout::GuidLayout;
use crate::layout::LayoutParseError;
use crate::primitive::Cursor;
use crate::primitive::DigitCase;
use crate::primitive::OutputEncoding;
use crate::primitive::WriteResult;

// ============================================================================
// SECTION: Byte Order
// ============================================================================

/// Stored byte positions per digit group, in rendering order.
const GROUPS: [&[usize]; 5] =
    [&[3, 2, 1, 0], &[5, 4], &[7, 6], &[8, 9], &[10, 11, 12, 13, 14, 15]];

/// Group separator for dashed layouts.
const HYPHEN: char = '-';

/// Minimum digits per byte; keeps every byte at fixed width.
const BYTE_DIGITS: usize = 2;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while rendering a GUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The buffer ran out before the rendering completed.
    #[error("guid needs {required} bytes but the buffer holds {capacity}")]
    BufferTooSmall {
        /// Bytes the full rendering requires.
        required: usize,
        /// Length of the buffer supplied.
        capacity: usize,
    },
    /// The format text does not select a layout.
    #[error(transparent)]
    UnsupportedFormat(#[from] LayoutParseError),
}

// ============================================================================
// SECTION: Encoding
// ============================================================================

/// Renders `guid` as UTF-8 text into `buffer`.
///
/// Returns the number of bytes written: 32, 36 or 38 depending on `layout`.
///
/// # Errors
///
/// Returns [`EncodeError::BufferTooSmall`] when `buffer` is shorter than
/// [`GuidLayout::encoded_len`].
pub fn encode(guid: &Guid, layout: GuidLayout, buffer: &mut [u8]) -> Result<usize, EncodeError> {
    encode_with(guid, layout, OutputEncoding::Utf8, buffer)
}

/// Renders `guid` into `buffer` using the given output encoding.
///
/// # Errors
///
/// Returns [`EncodeError::BufferTooSmall`] when `buffer` is too short.
pub fn encode_with(
    guid: &Guid,
    layout: GuidLayout,
    encoding: OutputEncoding,
    buffer: &mut [u8],
) -> Result<usize, EncodeError> {
    let capacity = buffer.len();
    let mut cursor = Cursor::new(buffer, encoding);
    match write_guid(&mut cursor, guid.as_bytes(), layout) {
        Ok(()) => Ok(cursor.position()),
        Err(_) => Err(EncodeError::BufferTooSmall {
            required: layout.encoded_len(encoding),
            capacity,
        }),
    }
}

/// Renders `guid` using a format symbol (`G`, `D`, `N`, `B`, `P` or empty).
///
/// # Errors
///
/// Returns [`EncodeError::UnsupportedFormat`] for unknown format text and
/// [`EncodeError::BufferTooSmall`] when `buffer` is too short.
pub fn encode_str(
    guid: &Guid,
    format: &str,
    encoding: OutputEncoding,
    buffer: &mut [u8],
) -> Result<usize, EncodeError> {
    let layout = GuidLayout::parse_format(format)?;
    encode_with(guid, layout, encoding, buffer)
}

/// Writes brackets, digit groups and separators; stops at the first failure.
fn write_guid(cursor: &mut Cursor<'_>, bytes: &[u8; 16], layout: GuidLayout) -> WriteResult<()> {
    let shape = layout.shape();
    if let Some(open) = shape.open {
        cursor.literal(open)?;
    }
    for (index, group) in GROUPS.iter().enumerate() {
        if shape.hyphens && index > 0 {
            cursor.literal(HYPHEN)?;
        }
        for &position in *group {
            cursor.hex_byte(bytes[position], DigitCase::Lower, BYTE_DIGITS)?;
        }
    }
    if let Some(close) = shape.close {
        cursor.literal(close)?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use super::EncodeError;
    use super::encode;
    use super::encode_str;
    use crate::guid::Guid;
    use crate::layout::GuidLayout;
    use crate::layout::LayoutParseError;
    use crate::primitive::OutputEncoding;

    /// Stored bytes `00 01 .. 0f`.
    const SEQUENTIAL: Guid = Guid::from_bytes([
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ]);

    #[test]
    fn dashed_reverses_leading_fields() {
        let mut buffer = [0u8; 36];
        let written = encode(&SEQUENTIAL, GuidLayout::Dashed, &mut buffer).unwrap();
        assert_eq!(written, 36);
        assert_eq!(&buffer, b"03020100-0504-0706-0809-0a0b0c0d0e0f");
    }

    #[test]
    fn short_buffer_reports_required_length() {
        let mut buffer = [0u8; 37];
        let err = encode(&SEQUENTIAL, GuidLayout::BraceWrapped, &mut buffer).unwrap_err();
        assert_eq!(
            err,
            EncodeError::BufferTooSmall {
                required: 38,
                capacity: 37,
            }
        );
    }

    #[test]
    fn encode_str_rejects_unknown_symbol() {
        let mut buffer = [0u8; 64];
        let err = encode_str(&SEQUENTIAL, "X", OutputEncoding::Utf8, &mut buffer).unwrap_err();
        assert_eq!(err, EncodeError::UnsupportedFormat(LayoutParseError::UnknownSymbol('X')));
        assert_eq!(encode_str(&SEQUENTIAL, "", OutputEncoding::Utf8, &mut buffer), Ok(36));
    }
}
