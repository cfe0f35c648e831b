use std::fmt;

use serde::{Deserialize, Serialize};

/// Two-hex-digit alpha suffix appended to a color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alpha(&'static str);

impl Alpha {
    /// ~6% opacity.
    pub const FAINT: Alpha = Alpha("10");
    /// ~8% opacity.
    pub const WASH: Alpha = Alpha("15");
    /// ~12% opacity.
    pub const TINT: Alpha = Alpha("20");
    /// 50% opacity.
    pub const HALF: Alpha = Alpha("80");
    /// 60% opacity.
    pub const SOFT: Alpha = Alpha("99");
    /// 80% opacity.
    pub const STRONG: Alpha = Alpha("CC");
    /// 90% opacity.
    pub const DENSE: Alpha = Alpha("E6");

    pub fn suffix(self) -> &'static str {
        self.0
    }
}

/// A CSS color string as authored in the theme.
///
/// Usually `#RRGGBB`, but any CSS color expression is accepted and passed
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends an alpha suffix as a plain string concatenation.
    ///
    /// `#D2691E` with [`Alpha::STRONG`] becomes `#D2691ECC`. No color-space
    /// math is involved, so a non-hex base produces a non-hex result.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine_core::theme::{Alpha, ColorToken};
    ///
    /// let base = ColorToken::new("#D2691E");
    /// assert_eq!(base.with_alpha(Alpha::STRONG).as_str(), "#D2691ECC");
    /// ```
    pub fn with_alpha(&self, alpha: Alpha) -> ColorToken {
        ColorToken(format!("{}{}", self.0, alpha.suffix()))
    }

    /// True for a `#RRGGBB` color.
    pub fn is_hex(&self) -> bool {
        let Some(digits) = self.0.strip_prefix('#') else {
            return false;
        };
        digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Red, green and blue channels of a `#RRGGBB` color.
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        if !self.is_hex() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&self.0[range], 16).ok();
        Some((channel(1..3)?, channel(3..5)?, channel(5..7)?))
    }

    /// Black or white, whichever reads better on top of this color.
    ///
    /// Non-hex colors get black.
    pub fn contrast(&self) -> ColorToken {
        let Some((r, g, b)) = self.to_rgb() else {
            return ColorToken::new("#000000");
        };
        let luminance = (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
        if luminance > 0.5 {
            ColorToken::new("#000000")
        } else {
            ColorToken::new("#ffffff")
        }
    }

    /// A two-stop CSS gradient from this color to `to`.
    pub fn gradient_to(&self, to: &ColorToken) -> String {
        format!("linear-gradient(135deg, {}, {})", self.0, to.0)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ColorToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_is_string_append() {
        let color = ColorToken::new("#D2691E");
        assert_eq!(color.with_alpha(Alpha::STRONG).as_str(), "#D2691ECC");
        assert_eq!(color.with_alpha(Alpha::TINT).as_str(), "#D2691E20");
    }

    #[test]
    fn test_alpha_on_non_hex_is_still_append() {
        let color = ColorToken::new("red");
        assert_eq!(color.with_alpha(Alpha::HALF).as_str(), "red80");
    }

    #[test]
    fn test_is_hex() {
        assert!(ColorToken::new("#abcdef").is_hex());
        assert!(ColorToken::new("#ABCDEF").is_hex());
        assert!(!ColorToken::new("#ABCDE").is_hex());
        assert!(!ColorToken::new("ABCDEF").is_hex());
        assert!(!ColorToken::new("#GGGGGG").is_hex());
        assert!(!ColorToken::new("#D2691ECC").is_hex());
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(ColorToken::new("#FF8000").to_rgb(), Some((255, 128, 0)));
        assert_eq!(ColorToken::new("blue").to_rgb(), None);
    }

    #[test]
    fn test_contrast() {
        assert_eq!(ColorToken::new("#FFFFFF").contrast().as_str(), "#000000");
        assert_eq!(ColorToken::new("#1F2937").contrast().as_str(), "#ffffff");
        assert_eq!(ColorToken::new("transparent").contrast().as_str(), "#000000");
    }

    #[test]
    fn test_gradient() {
        let from = ColorToken::new("#8B4513");
        let to = ColorToken::new("#CD853F");
        assert_eq!(
            from.gradient_to(&to),
            "linear-gradient(135deg, #8B4513, #CD853F)"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ColorToken::new("#000000").to_string(), "#000000");
    }
}
