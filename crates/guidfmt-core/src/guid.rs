// crates/guidfmt-core/src/guid.rs
// ============================================================================
// Module: GUID Value
// Description: Immutable 128-bit identifier in stored field order.
// Purpose: Hold the 16 raw bytes and expose field views and text rendering.
// Dependencies: crate::{encoder, layout}
// ============================================================================

//! ## Overview
//! [`Guid`] keeps the 16 bytes exactly as stored: a little-endian 32-bit
//! field, two little-endian 16-bit fields and eight trailing bytes. Any bit
//! pattern is accepted. Rendering never allocates; [`GuidDisplay`] encodes
//! into a stack buffer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use crate::encoder::EncodeError;
use crate::encoder::encode;
use crate::layout::GuidLayout;

// ============================================================================
// SECTION: GUID
// ============================================================================

/// A 128-bit identifier stored as 16 bytes in field order.
///
/// # Invariants
/// - None. Every 16-byte value is a valid identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Guid([u8; 16]);

impl Guid {
    /// Number of stored bytes.
    pub const LEN: usize = 16;

    /// Largest UTF-8 rendering across all layouts.
    pub const MAX_ENCODED_LEN: usize = 38;

    /// The all-zero identifier.
    pub const NIL: Self = Self([0; 16]);

    /// Wraps 16 bytes in stored order.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Builds an identifier from its field form.
    #[must_use]
    pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        let a = data1.to_le_bytes();
        let b = data2.to_le_bytes();
        let c = data3.to_le_bytes();
        Self([
            a[0], a[1], a[2], a[3], b[0], b[1], c[0], c[1], data4[0], data4[1], data4[2],
            data4[3], data4[4], data4[5], data4[6], data4[7],
        ])
    }

    /// Returns the stored bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the stored bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns the leading 32-bit field.
    #[must_use]
    pub const fn data1(&self) -> u32 {
        u32::from_le_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Returns the first 16-bit field.
    #[must_use]
    pub const fn data2(&self) -> u16 {
        u16::from_le_bytes([self.0[4], self.0[5]])
    }

    /// Returns the second 16-bit field.
    #[must_use]
    pub const fn data3(&self) -> u16 {
        u16::from_le_bytes([self.0[6], self.0[7]])
    }

    /// Returns the trailing eight bytes.
    #[must_use]
    pub const fn data4(&self) -> [u8; 8] {
        let b = &self.0;
        [b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]]
    }

    /// Returns true for the all-zero identifier.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0 == [0; 16]
    }

    /// Renders into `buffer` using `layout` and UTF-8 output.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::BufferTooSmall`] when `buffer` is too short.
    pub fn encode(&self, layout: GuidLayout, buffer: &mut [u8]) -> Result<usize, EncodeError> {
        encode(self, layout, buffer)
    }

    /// Returns a [`fmt::Display`] adapter for `layout`.
    #[must_use]
    pub const fn display(self, layout: GuidLayout) -> GuidDisplay {
        GuidDisplay {
            guid: self,
            layout,
        }
    }
}

impl From<[u8; 16]> for Guid {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Guid> for [u8; 16] {
    fn from(guid: Guid) -> Self {
        guid.to_bytes()
    }
}

impl AsRef<[u8]> for Guid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(GuidLayout::default()), f)
    }
}

// ============================================================================
// SECTION: Display Adapter
// ============================================================================

/// Formats a [`Guid`] with a fixed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidDisplay {
    /// Identifier to render.
    guid: Guid,
    /// Layout applied when rendering.
    layout: GuidLayout,
}

impl fmt::Display for GuidDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = [0u8; Guid::MAX_ENCODED_LEN];
        let written = encode(&self.guid, self.layout, &mut buffer).map_err(|_| fmt::Error)?;
        let text = buffer.get(.. written).ok_or(fmt::Error)?;
        let text = std::str::from_utf8(text).map_err(|_| fmt::Error)?;
        f.pad(text)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::Guid;
    use crate::layout::GuidLayout;

    #[test]
    fn fields_read_little_endian_prefix() {
        let guid = Guid::from_bytes([
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f,
        ]);
        assert_eq!(guid.data1(), 0x0302_0100);
        assert_eq!(guid.data2(), 0x0504);
        assert_eq!(guid.data3(), 0x0706);
        assert_eq!(guid.data4(), [0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f]);
        assert_eq!(
            Guid::from_fields(guid.data1(), guid.data2(), guid.data3(), guid.data4()),
            guid
        );
    }

    #[test]
    fn display_pads_like_str() {
        let text = format!("[{:>40}]", Guid::NIL.display(GuidLayout::ParenWrapped));
        assert_eq!(text, "[  (00000000-0000-0000-0000-000000000000)]");
        assert!(Guid::NIL.is_nil());
    }
}
