use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The twelve zodiac signs, in wheel order starting at Aries.
///
/// The order is load-bearing: prev/next navigation and the default
/// selection both derive from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// Every sign, in wheel order.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// The default selection: the first sign in wheel order.
    #[must_use]
    pub const fn first() -> Self {
        ZodiacSign::Aries
    }

    /// Canonical lowercase name, also the expected image file stem.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    /// Capitalized display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Emoji glyph for selector cards.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "\u{2648}\u{fe0f}",
            ZodiacSign::Taurus => "\u{2649}\u{fe0f}",
            ZodiacSign::Gemini => "\u{264a}\u{fe0f}",
            ZodiacSign::Cancer => "\u{264b}\u{fe0f}",
            ZodiacSign::Leo => "\u{264c}\u{fe0f}",
            ZodiacSign::Virgo => "\u{264d}\u{fe0f}",
            ZodiacSign::Libra => "\u{264e}\u{fe0f}",
            ZodiacSign::Scorpio => "\u{264f}\u{fe0f}",
            ZodiacSign::Sagittarius => "\u{2650}\u{fe0f}",
            ZodiacSign::Capricorn => "\u{2651}\u{fe0f}",
            ZodiacSign::Aquarius => "\u{2652}\u{fe0f}",
            ZodiacSign::Pisces => "\u{2653}\u{fe0f}",
        }
    }

    /// Position in wheel order, 0-based.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|sign| *sign == self)
            .unwrap_or_default()
    }

    /// The next sign in wheel order, wrapping Pisces back to Aries.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous sign in wheel order, wrapping Aries back to Pisces.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for parsing a sign from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized zodiac sign: {raw:?}")]
pub struct ParseSignError {
    raw: String,
}

impl FromStr for ZodiacSign {
    type Err = ParseSignError;

    /// Case-insensitive after whitespace trim, matching how image file
    /// stems are compared.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|sign| sign.name() == folded)
            .ok_or_else(|| ParseSignError { raw: s.to_string() })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
