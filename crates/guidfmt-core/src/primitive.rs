// crates/guidfmt-core/src/primitive.rs
// ============================================================================
// Module: Primitive Writers
// Description: Bounded hex-byte and character writers over caller buffers.
// Purpose: Provide the leaf write operations the identifier encoder composes.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Each writer renders a single value into the front of a destination slice
//! and reports how many bytes it consumed. A writer either writes its full
//! output or nothing at all: when the slice is too short it fails before
//! touching the buffer.
//!
//! [`Cursor`] threads a running position through a sequence of writes so
//! callers can chain steps with `?` and stop at the first failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Encoding Options
// ============================================================================

/// Code-unit encoding used for emitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputEncoding {
    /// One byte per ASCII character.
    #[default]
    Utf8,
    /// Two little-endian bytes per UTF-16 code unit.
    Utf16Le,
}

impl OutputEncoding {
    /// Returns the number of bytes an ASCII character occupies.
    #[must_use]
    pub const fn ascii_width(self) -> usize {
        match self {
            Self::Utf8 => 1,
            Self::Utf16Le => 2,
        }
    }
}

/// Letter case for hexadecimal digits `a` through `f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigitCase {
    /// Digits `a`-`f`.
    #[default]
    Lower,
    /// Digits `A`-`F`.
    Upper,
}

impl DigitCase {
    /// Returns the digit alphabet for this case.
    const fn alphabet(self) -> &'static [u8; 16] {
        match self {
            Self::Lower => b"0123456789abcdef",
            Self::Upper => b"0123456789ABCDEF",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by primitive writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WriteError {
    /// The destination cannot hold the rendered value.
    #[error("buffer too small: need {needed} bytes, {available} available")]
    BufferTooSmall {
        /// Bytes the write requires.
        needed: usize,
        /// Bytes left in the destination.
        available: usize,
    },
}

/// Result alias for primitive writes.
pub type WriteResult<T = usize> = Result<T, WriteError>;

// ============================================================================
// SECTION: Writers
// ============================================================================

/// Writes `value` as hexadecimal digits, zero-padded to `min_digits`.
///
/// Leading zeros are only emitted to reach `min_digits`; `0x0a` with one
/// minimum digit renders as `a`, with two as `0a`.
///
/// # Errors
///
/// Returns [`WriteError::BufferTooSmall`] when `dest` cannot hold the digits.
/// Nothing is written in that case.
pub fn write_hex_byte(
    value: u8,
    dest: &mut [u8],
    case: DigitCase,
    min_digits: usize,
    encoding: OutputEncoding,
) -> WriteResult {
    let significant = if value > 0x0f { 2 } else { 1 };
    let digits = significant.max(min_digits);
    let target = reserve(dest, digits.saturating_mul(encoding.ascii_width()))?;
    let alphabet = case.alphabet();
    for place in 0 .. digits {
        // place 0 is the rightmost digit
        let nibble = match place {
            0 => value & 0x0f,
            1 => value >> 4,
            _ => 0,
        };
        let slot = digits - 1 - place;
        put_ascii(target, slot, alphabet[usize::from(nibble)], encoding);
    }
    Ok(target.len())
}

/// Writes the encoding of `ch` into `dest`.
///
/// # Errors
///
/// Returns [`WriteError::BufferTooSmall`] when `dest` cannot hold the
/// character. Nothing is written in that case.
pub fn write_char(ch: char, dest: &mut [u8], encoding: OutputEncoding) -> WriteResult {
    match encoding {
        OutputEncoding::Utf8 => {
            let target = reserve(dest, ch.len_utf8())?;
            Ok(ch.encode_utf8(target).len())
        }
        OutputEncoding::Utf16Le => {
            let target = reserve(dest, ch.len_utf16() * 2)?;
            let mut units = [0u16; 2];
            let units = ch.encode_utf16(&mut units);
            for (chunk, unit) in target.chunks_exact_mut(2).zip(units.iter()) {
                chunk.copy_from_slice(&unit.to_le_bytes());
            }
            Ok(target.len())
        }
    }
}

/// Returns the leading `needed` bytes of `dest` or a sizing error.
fn reserve(dest: &mut [u8], needed: usize) -> WriteResult<&mut [u8]> {
    let available = dest.len();
    dest.get_mut(.. needed).ok_or(WriteError::BufferTooSmall {
        needed,
        available,
    })
}

/// Stores an ASCII byte at character slot `slot` of a reserved region.
#[inline]
fn put_ascii(target: &mut [u8], slot: usize, ascii: u8, encoding: OutputEncoding) {
    match encoding {
        OutputEncoding::Utf8 => target[slot] = ascii,
        OutputEncoding::Utf16Le => {
            target[slot * 2] = ascii;
            target[slot * 2 + 1] = 0;
        }
    }
}

// ============================================================================
// SECTION: Cursor
// ============================================================================

/// Running write position over a destination buffer.
///
/// # Invariants
/// - `position <= buffer.len()` at all times.
/// - `position` only advances by the byte count a successful write reports.
#[derive(Debug)]
pub struct Cursor<'a> {
    /// Destination buffer borrowed for the cursor's lifetime.
    buffer: &'a mut [u8],
    /// Bytes committed so far.
    position: usize,
    /// Encoding applied to every write.
    encoding: OutputEncoding,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `buffer`.
    #[must_use]
    pub const fn new(buffer: &'a mut [u8], encoding: OutputEncoding) -> Self {
        Self {
            buffer,
            position: 0,
            encoding,
        }
    }

    /// Returns the number of bytes committed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes still available.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Writes a byte as hex digits at the current position.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::BufferTooSmall`] when the remaining space is short.
    #[inline]
    pub fn hex_byte(&mut self, value: u8, case: DigitCase, min_digits: usize) -> WriteResult<()> {
        let encoding = self.encoding;
        let written = write_hex_byte(value, self.tail(), case, min_digits, encoding)?;
        self.position += written;
        Ok(())
    }

    /// Writes a literal character at the current position.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::BufferTooSmall`] when the remaining space is short.
    #[inline]
    pub fn literal(&mut self, ch: char) -> WriteResult<()> {
        let encoding = self.encoding;
        let written = write_char(ch, self.tail(), encoding)?;
        self.position += written;
        Ok(())
    }

    /// Returns the unwritten tail of the buffer.
    fn tail(&mut self) -> &mut [u8] {
        self.buffer.get_mut(self.position ..).unwrap_or_default()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
