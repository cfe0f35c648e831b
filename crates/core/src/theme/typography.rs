//! Closed enumerations for typography and layout keys.
//!
//! Authors select these by string key in the theme or in section overrides.
//! Each enum maps exhaustively to CSS utility classes; callers pick the class
//! to use when a key is unknown.

key_enum! {
    /// Heading scale used for section titles.
    pub enum HeadingSize {
        Sm => "sm",
        Base => "base",
        Lg => "lg",
        Xl => "xl",
        Xl2 => "2xl",
        Xl3 => "3xl",
    }
}

impl HeadingSize {
    /// Class used when the title size key is unknown.
    pub const FALLBACK_CLASS: &'static str = "text-4xl md:text-5xl";
    /// Class used when the hero display size key is unknown.
    pub const DISPLAY_FALLBACK_CLASS: &'static str = "text-4xl md:text-6xl";

    /// Responsive title classes.
    pub fn title_class(self) -> &'static str {
        match self {
            HeadingSize::Sm => "text-2xl md:text-3xl",
            HeadingSize::Base => "text-3xl md:text-4xl",
            HeadingSize::Lg => "text-4xl md:text-5xl",
            HeadingSize::Xl => "text-5xl md:text-6xl",
            HeadingSize::Xl2 => "text-6xl md:text-7xl",
            HeadingSize::Xl3 => "text-7xl md:text-8xl",
        }
    }

    /// The larger display scale of the hero headline.
    pub fn display_class(self) -> &'static str {
        match self {
            HeadingSize::Sm => "text-2xl md:text-4xl",
            HeadingSize::Base => "text-3xl md:text-5xl",
            HeadingSize::Lg => "text-4xl md:text-6xl",
            HeadingSize::Xl => "text-5xl md:text-7xl",
            HeadingSize::Xl2 => "text-6xl md:text-8xl",
            HeadingSize::Xl3 => "text-7xl md:text-9xl",
        }
    }
}

key_enum! {
    /// Body text scale used for subtitles and descriptions.
    pub enum BodySize {
        Xs => "xs",
        Sm => "sm",
        Base => "base",
        Lg => "lg",
        Xl => "xl",
    }
}

impl BodySize {
    /// Class used when a subtitle size key is unknown.
    pub const SUBTITLE_FALLBACK_CLASS: &'static str = "text-xl";
    /// Class used when a description size key is unknown.
    pub const BODY_FALLBACK_CLASS: &'static str = "text-lg";

    /// Subtitle classes. `base` and `lg` share a step.
    pub fn subtitle_class(self) -> &'static str {
        match self {
            BodySize::Xs => "text-base",
            BodySize::Sm => "text-lg",
            BodySize::Base | BodySize::Lg => "text-xl",
            BodySize::Xl => "text-2xl",
        }
    }

    /// Hero benefit list classes. `sm` and `base` share a step.
    pub fn benefits_class(self) -> &'static str {
        match self {
            BodySize::Xs => "text-sm",
            BodySize::Sm | BodySize::Base => "text-base",
            BodySize::Lg => "text-lg",
            BodySize::Xl => "text-xl",
        }
    }

    /// Paragraph classes.
    pub fn body_class(self) -> &'static str {
        match self {
            BodySize::Xs => "text-sm",
            BodySize::Sm => "text-base",
            BodySize::Base => "text-lg",
            BodySize::Lg => "text-xl",
            BodySize::Xl => "text-2xl",
        }
    }
}

key_enum! {
    pub enum FontWeight {
        Light => "light",
        Normal => "normal",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
        Extrabold => "extrabold",
        Black => "black",
    }
}

impl FontWeight {
    pub fn class(self) -> &'static str {
        match self {
            FontWeight::Light => "font-light",
            FontWeight::Normal => "font-normal",
            FontWeight::Medium => "font-medium",
            FontWeight::Semibold => "font-semibold",
            FontWeight::Bold => "font-bold",
            FontWeight::Extrabold => "font-extrabold",
            FontWeight::Black => "font-black",
        }
    }
}

key_enum! {
    pub enum FontFamily {
        Inter => "inter",
        Poppins => "poppins",
        Roboto => "roboto",
        OpenSans => "open-sans",
        Montserrat => "montserrat",
        Lato => "lato",
        Nunito => "nunito",
        Raleway => "raleway",
        PlayfairDisplay => "playfair-display",
        Merriweather => "merriweather",
    }
}

impl FontFamily {
    /// Class used when a font key is unknown.
    pub const FALLBACK_CLASS: &'static str = "font-inter";

    pub fn class(self) -> &'static str {
        match self {
            FontFamily::Inter => "font-inter",
            FontFamily::Poppins => "font-poppins",
            FontFamily::Roboto => "font-roboto",
            FontFamily::OpenSans => "font-open-sans",
            FontFamily::Montserrat => "font-montserrat",
            FontFamily::Lato => "font-lato",
            FontFamily::Nunito => "font-nunito",
            FontFamily::Raleway => "font-raleway",
            FontFamily::PlayfairDisplay => "font-playfair-display",
            FontFamily::Merriweather => "font-merriweather",
        }
    }
}

key_enum! {
    pub enum BorderRadius {
        None => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

impl BorderRadius {
    pub fn class(self) -> &'static str {
        match self {
            BorderRadius::None => "rounded-none",
            BorderRadius::Small => "rounded-sm",
            BorderRadius::Medium => "rounded-md",
            BorderRadius::Large => "rounded-lg",
        }
    }

    /// Class for an optional layout key; unknown or missing keys get `medium`.
    pub fn class_for(key: Option<&str>) -> &'static str {
        key.and_then(BorderRadius::from_key)
            .unwrap_or(BorderRadius::Medium)
            .class()
    }
}

key_enum! {
    /// Card shadow level.
    pub enum Shadow {
        None => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

impl Shadow {
    pub fn class(self) -> &'static str {
        match self {
            Shadow::None => "shadow-none",
            Shadow::Small => "shadow-sm",
            Shadow::Medium => "shadow-md",
            Shadow::Large => "shadow-lg",
        }
    }

    /// Class for an optional theme key; unknown or missing keys get `medium`.
    pub fn class_for(key: Option<&str>) -> &'static str {
        key.and_then(Shadow::from_key).unwrap_or(Shadow::Medium).class()
    }
}

key_enum! {
    pub enum LineHeight {
        Tight => "tight",
        Normal => "normal",
        Relaxed => "relaxed",
        Loose => "loose",
    }
}

impl LineHeight {
    pub fn class(self) -> &'static str {
        match self {
            LineHeight::Tight => "leading-tight",
            LineHeight::Normal => "leading-normal",
            LineHeight::Relaxed => "leading-relaxed",
            LineHeight::Loose => "leading-loose",
        }
    }

    /// Class for an optional key; unknown or missing keys get `relaxed`.
    pub fn class_for(key: Option<&str>) -> &'static str {
        key.and_then(LineHeight::from_key)
            .unwrap_or(LineHeight::Relaxed)
            .class()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for size in HeadingSize::ALL {
            assert_eq!(HeadingSize::from_key(size.key()), Some(*size));
        }
        for font in FontFamily::ALL {
            assert_eq!(FontFamily::from_key(font.key()), Some(*font));
        }
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(HeadingSize::from_key("4xl"), None);
        assert_eq!(FontWeight::from_key("400"), None);
        assert_eq!(FontFamily::from_key("Inter"), None);
    }

    #[test]
    fn test_title_classes() {
        assert_eq!(HeadingSize::Xl2.title_class(), "text-6xl md:text-7xl");
        assert_eq!(HeadingSize::Sm.title_class(), "text-2xl md:text-3xl");
        assert_eq!(HeadingSize::Xl2.display_class(), "text-6xl md:text-8xl");
    }

    #[test]
    fn test_subtitle_classes() {
        assert_eq!(BodySize::Base.subtitle_class(), "text-xl");
        assert_eq!(BodySize::Lg.subtitle_class(), "text-xl");
        assert_eq!(BodySize::Xs.subtitle_class(), "text-base");
    }

    #[test]
    fn test_layout_fallbacks() {
        assert_eq!(BorderRadius::class_for(Some("large")), "rounded-lg");
        assert_eq!(BorderRadius::class_for(Some("8px")), "rounded-md");
        assert_eq!(BorderRadius::class_for(None), "rounded-md");
        assert_eq!(Shadow::class_for(Some("none")), "shadow-none");
        assert_eq!(Shadow::class_for(None), "shadow-md");
        assert_eq!(LineHeight::class_for(Some("tight")), "leading-tight");
        assert_eq!(LineHeight::class_for(Some("1.6")), "leading-relaxed");
    }

    #[test]
    fn test_open_sans_key() {
        assert_eq!(FontFamily::from_key("open-sans"), Some(FontFamily::OpenSans));
        assert_eq!(FontFamily::OpenSans.class(), "font-open-sans");
    }
}
