// crates/guidfmt-core/src/layout.rs
// ============================================================================
// Module: GUID Layouts
// Description: Textual layout variants and their format symbols.
// Purpose: Map format symbols to separator and bracket rules with exact lengths.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A [`GuidLayout`] decides whether hyphens separate the digit groups and
//! which brackets, if any, wrap the text. Layouts are selected by a single
//! format symbol (`G`, `D`, `N`, `B`, `P`); anything else is rejected rather
//! than mapped to a default.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::primitive::OutputEncoding;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Hex digits in every rendering (16 bytes, two digits each).
pub const HEX_DIGIT_COUNT: usize = 32;

/// Hyphens inserted by dashed layouts.
pub const HYPHEN_COUNT: usize = 4;

// ============================================================================
// SECTION: Layout Variants
// ============================================================================

/// Textual layout for a rendered GUID.
///
/// # Invariants
/// - Closed set; every variant renders 32 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GuidLayout {
    /// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`
    #[serde(rename = "D", alias = "d")]
    Dashed,
    /// Same text as [`GuidLayout::Dashed`], selected by the general symbol.
    #[default]
    #[serde(rename = "G", alias = "g")]
    DashedNoPrefix,
    /// `xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx`
    #[serde(rename = "N", alias = "n")]
    CompactNoDashes,
    /// `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}`
    #[serde(rename = "B", alias = "b")]
    BraceWrapped,
    /// `(xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx)`
    #[serde(rename = "P", alias = "p")]
    ParenWrapped,
}

/// Separator and bracket rules derived from a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutShape {
    /// Whether hyphens separate the digit groups.
    pub hyphens: bool,
    /// Opening bracket written before the digits.
    pub open: Option<char>,
    /// Closing bracket written after the digits.
    pub close: Option<char>,
}

impl GuidLayout {
    /// All layouts in symbol order `G`, `D`, `N`, `B`, `P`.
    pub const ALL: [Self; 5] = [
        Self::DashedNoPrefix,
        Self::Dashed,
        Self::CompactNoDashes,
        Self::BraceWrapped,
        Self::ParenWrapped,
    ];

    /// Returns the separator and bracket rules for this layout.
    #[must_use]
    pub const fn shape(self) -> LayoutShape {
        match self {
            Self::Dashed | Self::DashedNoPrefix => LayoutShape {
                hyphens: true,
                open: None,
                close: None,
            },
            Self::CompactNoDashes => LayoutShape {
                hyphens: false,
                open: None,
                close: None,
            },
            Self::BraceWrapped => LayoutShape {
                hyphens: true,
                open: Some('{'),
                close: Some('}'),
            },
            Self::ParenWrapped => LayoutShape {
                hyphens: true,
                open: Some('('),
                close: Some(')'),
            },
        }
    }

    /// Returns the number of characters this layout renders.
    #[must_use]
    pub const fn char_len(self) -> usize {
        let shape = self.shape();
        let mut len = HEX_DIGIT_COUNT;
        if shape.hyphens {
            len += HYPHEN_COUNT;
        }
        if shape.open.is_some() {
            len += 1;
        }
        if shape.close.is_some() {
            len += 1;
        }
        len
    }

    /// Returns the exact buffer size, in bytes, needed to render this layout.
    #[must_use]
    pub const fn encoded_len(self, encoding: OutputEncoding) -> usize {
        self.char_len() * encoding.ascii_width()
    }

    /// Returns the format symbol that selects this layout.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Dashed => 'D',
            Self::DashedNoPrefix => 'G',
            Self::CompactNoDashes => 'N',
            Self::BraceWrapped => 'B',
            Self::ParenWrapped => 'P',
        }
    }

    /// Resolves a format symbol, accepting either letter case.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutParseError::UnknownSymbol`] for any other character.
    pub const fn from_symbol(symbol: char) -> Result<Self, LayoutParseError> {
        match symbol {
            'D' | 'd' => Ok(Self::Dashed),
            'G' | 'g' => Ok(Self::DashedNoPrefix),
            'N' | 'n' => Ok(Self::CompactNoDashes),
            'B' | 'b' => Ok(Self::BraceWrapped),
            'P' | 'p' => Ok(Self::ParenWrapped),
            other => Err(LayoutParseError::UnknownSymbol(other)),
        }
    }

    /// Parses format text. Empty text selects the default layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutParseError`] when the text is not a single known symbol.
    pub fn parse_format(format: &str) -> Result<Self, LayoutParseError> {
        let mut chars = format.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Self::default()),
            (Some(symbol), None) => Self::from_symbol(symbol),
            (Some(_), Some(_)) => Err(LayoutParseError::TooLong(format.chars().count())),
        }
    }
}

impl FromStr for GuidLayout {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_format(s)
    }
}

impl fmt::Display for GuidLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dashed => "dashed",
            Self::DashedNoPrefix => "dashed-no-prefix",
            Self::CompactNoDashes => "compact",
            Self::BraceWrapped => "brace-wrapped",
            Self::ParenWrapped => "paren-wrapped",
        };
        f.pad(name)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when resolving format text to a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutParseError {
    /// The symbol does not name a layout.
    #[error("unsupported guid format symbol '{0}' (expected one of G, D, N, B, P)")]
    UnknownSymbol(char),
    /// The format text holds more than one character.
    #[error("guid format must be a single symbol, got {0} characters")]
    TooLong(usize),
}

// ============================================================================
// SECTION: Tests
// ============================================================================
