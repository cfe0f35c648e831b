mod color;
mod types;
mod typography;

pub use color::{Alpha, ColorToken};
pub use types::{
    ButtonStyle, CardStyle, ColorSlot, SectionColors, SiteConfig, ThemeColors, ThemeComponents,
    ThemeConfig, ThemeLayout, ThemeTypography,
};
pub use typography::{BodySize, BorderRadius, FontFamily, FontWeight, HeadingSize, LineHeight, Shadow};
