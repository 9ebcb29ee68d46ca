//! @ai:module:intent Ordered color palette for model series
//! @ai:module:layer domain
//! @ai:module:public_api Palette, LEGACY_COLOR_PALETTE
//! @ai:module:stateless true

use crate::error::{Error, Result};
use plotters::style::RGBColor;

/// Default series colors, in assignment order.
pub const LEGACY_COLOR_PALETTE: [&str; 17] = [
    "#A351FB", "#E6194B", "#3CB44B", "#FFE119", "#0082C8", "#F58231", "#911EB4", "#46F0F0",
    "#F032E6", "#D2F53C", "#FABEBE", "#008080", "#E6BEFF", "#AA6E28", "#FFFAC8", "#800000",
    "#AAFFC3",
];

/// @ai:intent Non-empty ordered list of colors cycled across models
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<RGBColor>,
}

impl Palette {
    /// @ai:intent Parse a palette from #RRGGBB strings
    /// @ai:pre at least one color
    /// @ai:effects pure
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::InvalidColor("palette is empty".to_string()));
        }

        let colors = colors
            .iter()
            .map(|c| parse_hex_color(c.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { colors })
    }

    /// @ai:intent Color of the i-th model, wrapping around past the end
    /// @ai:effects pure
    pub fn color(&self, index: usize) -> RGBColor {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_hex(&LEGACY_COLOR_PALETTE).expect("legacy palette is valid")
    }
}

/// @ai:intent Parse a #RRGGBB color
/// @ai:effects pure
fn parse_hex_color(value: &str) -> Result<RGBColor> {
    let invalid = || Error::InvalidColor(value.to_string());

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
