//! What the external decoding engine hands over per detected symbol.
//!
//! - `SymbolType`: symbology tag with the engine's numeric code.
//! - `Orientation`: reading direction reported by the engine, if known.
//! - `RawSymbol`: payload, tags, quality, and the raw locator points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geom::Point;

macro_rules! symbol_types {
    ($($variant:ident = $code:literal => $name:literal),* $(,)?) => {
        /// Barcode symbology tag.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum SymbolType {
            $($variant,)*
        }

        impl SymbolType {
            /// Every symbology, in ascending code order.
            pub const ALL: &'static [SymbolType] = &[$(SymbolType::$variant,)*];

            /// Engine code for this symbology.
            #[inline]
            pub fn code(self) -> i32 {
                match self {
                    $(SymbolType::$variant => $code,)*
                }
            }

            /// Canonical upper-case name, e.g. `"QRCODE"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(SymbolType::$variant => $name,)*
                }
            }
        }

        impl TryFrom<i32> for SymbolType {
            type Error = SymbolError;
            fn try_from(code: i32) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok(SymbolType::$variant),)*
                    other => Err(SymbolError::UnknownCode(other)),
                }
            }
        }
    };
}

symbol_types! {
    None = 0 => "NONE",
    Partial = 1 => "PARTIAL",
    Ean2 = 2 => "EAN2",
    Ean5 = 5 => "EAN5",
    Ean8 = 8 => "EAN8",
    Upce = 9 => "UPCE",
    Isbn10 = 10 => "ISBN10",
    Upca = 12 => "UPCA",
    Ean13 = 13 => "EAN13",
    Isbn13 = 14 => "ISBN13",
    Composite = 15 => "COMPOSITE",
    I25 = 25 => "I25",
    Databar = 34 => "DATABAR",
    DatabarExp = 35 => "DATABAR_EXP",
    Codabar = 38 => "CODABAR",
    Code39 = 39 => "CODE39",
    Pdf417 = 57 => "PDF417",
    Qrcode = 64 => "QRCODE",
    Sqcode = 80 => "SQCODE",
    Code93 = 93 => "CODE93",
    Code128 = 128 => "CODE128",
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolType {
    type Err = SymbolError;

    /// Case-insensitive match on the canonical name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymbolType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SymbolError::UnknownName(s.to_string()))
    }
}

/// Reading direction of a decoded symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    #[default]
    Unknown,
    /// Upright, read left to right.
    Up,
    /// Sideways, read top to bottom.
    Right,
    /// Upside-down, read right to left.
    Down,
    /// Sideways, read bottom to top.
    Left,
}

impl Orientation {
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Orientation::Unknown => -1,
            Orientation::Up => 0,
            Orientation::Right => 1,
            Orientation::Down => 2,
            Orientation::Left => 3,
        }
    }

    /// Engine code to orientation; anything unrecognised is `Unknown`.
    #[inline]
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Orientation::Up,
            1 => Orientation::Right,
            2 => Orientation::Down,
            3 => Orientation::Left,
            _ => Orientation::Unknown,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("unknown symbology code {0}")]
    UnknownCode(i32),
    #[error("unknown symbology name {0:?}")]
    UnknownName(String),
}

/// One symbol as reported by the decoding engine, before any geometry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSymbol {
    pub data: Vec<u8>,
    pub symbol_type: SymbolType,
    pub quality: i32,
    #[serde(default)]
    pub orientation: Orientation,
    /// Locator points in engine order; repeats are normal.
    pub locations: Vec<Point<i32>>,
}

impl RawSymbol {
    pub fn new(data: impl Into<Vec<u8>>, symbol_type: SymbolType) -> Self {
        Self {
            data: data.into(),
            symbol_type,
            quality: 0,
            orientation: Orientation::Unknown,
            locations: Vec::new(),
        }
    }

    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_locations<P: Into<Point<i32>>>(
        mut self,
        locations: impl IntoIterator<Item = P>,
    ) -> Self {
        self.locations = locations.into_iter().map(Into::into).collect();
        self
    }
}
