// crates/guidfmt-core/src/lib.rs
// ============================================================================
// Module: guidfmt Core Library
// Description: Public API surface for bounded GUID text rendering.
// Purpose: Expose the identifier type, layouts, encoder, and primitive writers.
// Dependencies: crate::{encoder, guid, layout, primitive}
// ============================================================================

//! ## Overview
//! guidfmt core renders 128-bit identifiers into caller-supplied buffers
//! without allocating. The [`encoder`] composes the bounded writers in
//! [`primitive`] to emit the standard GUID layouts, failing cleanly when the
//! destination is too short.
//!
//! ```
//! use guidfmt_core::Guid;
//! use guidfmt_core::GuidLayout;
//!
//! let guid = Guid::from_fields(0x0302_0100, 0x0504, 0x0706, [8, 9, 10, 11, 12, 13, 14, 15]);
//! let mut buffer = [0u8; Guid::MAX_ENCODED_LEN];
//! let written = guid.encode(GuidLayout::BraceWrapped, &mut buffer)?;
//! assert_eq!(&buffer[.. written], b"{03020100-0504-0706-0809-0a0b0c0d0e0f}");
//! # Ok::<(), guidfmt_core::EncodeError>(())
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod encoder;
pub mod guid;
pub mod layout;
pub mod primitive;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use encoder::EncodeError;
pub use encoder::encode;
pub use encoder::encode_str;
pub use encoder::encode_with;
pub use guid::Guid;
pub use guid::GuidDisplay;
pub use layout::GuidLayout;
pub use layout::LayoutParseError;
pub use layout::LayoutShape;
pub use primitive::Cursor;
pub use primitive::DigitCase;
pub use primitive::OutputEncoding;
pub use primitive::WriteError;
pub use primitive::write_char;
pub use primitive::write_hex_byte;
