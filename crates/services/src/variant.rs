use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The launch-time presentation choice.
///
/// Both variants drive the same state machine; they differ only in
/// selector style and reference-link table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiVariant {
    /// Scroll selector: prev arrow, current sign card, next arrow.
    #[default]
    Desktop,
    /// Grid selector: one button per sign, plus the prev/next strip.
    Mobile,
}

impl UiVariant {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            UiVariant::Desktop => "desktop",
            UiVariant::Mobile => "mobile",
        }
    }

    /// Whether the selector exposes direct sign picking.
    #[must_use]
    pub const fn has_grid_selector(self) -> bool {
        matches!(self, UiVariant::Mobile)
    }
}

impl fmt::Display for UiVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for parsing a variant from configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown ui variant: {raw:?} (expected \"desktop\" or \"mobile\")")]
pub struct ParseVariantError {
    raw: String,
}

impl FromStr for UiVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Ok(UiVariant::Desktop),
            "mobile" => Ok(UiVariant::Mobile),
            _ => Err(ParseVariantError { raw: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_both_variants_case_insensitively() {
        assert_eq!("desktop".parse::<UiVariant>().unwrap(), UiVariant::Desktop);
        assert_eq!("Mobile".parse::<UiVariant>().unwrap(), UiVariant::Mobile);
        assert_eq!(" DESKTOP ".parse::<UiVariant>().unwrap(), UiVariant::Desktop);
    }

    #[test]
    fn parse_rejects_unknown_variants() {
        assert!("tablet".parse::<UiVariant>().is_err());
    }

    #[test]
    fn only_mobile_exposes_the_grid() {
        assert!(!UiVariant::Desktop.has_grid_selector());
        assert!(UiVariant::Mobile.has_grid_selector());
    }
}
