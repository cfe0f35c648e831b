//! Closed icon tables.
//!
//! Content refers to icons by name (`"Shield"`). Each page area has its own
//! table; any name outside it renders that table's fallback icon. Symbols are
//! lucide icon names.

icon_set! {
    /// Icons available to product page sections.
    pub enum ProductIcon (fallback = CheckCircle) {
        Shield => "shield",
        Zap => "zap",
        Award => "award",
        Wrench => "wrench",
        Clock => "clock",
        Leaf => "leaf",
        Package => "package",
        CheckCircle => "check-circle",
        Star => "star",
        Target => "target",
        TrendingUp => "trending-up",
        Users => "users",
        Settings => "settings",
        Truck => "truck",
        Factory => "factory",
        Building => "building",
        Home => "home",
        Store => "store",
        School => "school",
    }
}

icon_set! {
    /// Icons for the why-choose-us strengths.
    pub enum StrengthIcon (fallback = Award) {
        Users => "users",
        Award => "award",
        Globe => "globe",
        TrendingUp => "trending-up",
        Shield => "shield",
        Clock => "clock",
        ArrowUpRight => "arrow-up-right",
        CheckCircle => "check-circle",
        AlertCircle => "alert-circle",
        Truck => "truck",
        Package => "package",
        Zap => "zap",
        Lightbulb => "lightbulb",
        Coffee => "coffee",
        FileText => "file-text",
    }
}

icon_set! {
    pub enum LeadMagnetIcon (fallback = FileText) {
        FileText => "file-text",
        TrendingUp => "trending-up",
        Shield => "shield",
        CheckCircle => "check-circle",
        BookOpen => "book-open",
        Download => "download",
    }
}

icon_set! {
    /// Icons for the products and services cards.
    pub enum ServiceIcon (fallback = Package) {
        Package => "package",
        Truck => "truck",
        FileCheck => "file-check",
        Users => "users",
        Lightbulb => "lightbulb",
        Shield => "shield",
        TrendingUp => "trending-up",
        FileText => "file-text",
        Coffee => "coffee",
    }
}

icon_set! {
    /// Icons for the problems and solutions lists.
    pub enum ProblemIcon (fallback = AlertTriangle) {
        AlertTriangle => "alert-triangle",
        CheckCircle => "check-circle",
        Target => "target",
        Shield => "shield",
        Clock => "clock",
        DollarSign => "dollar-sign",
        Truck => "truck",
    }
}

/// A closed icon table with a fallback for unknown names.
pub trait IconTable: Copy + Sized {
    const FALLBACK: Self;

    fn lookup_key(key: &str) -> Option<Self>;

    fn symbol_name(self) -> &'static str;

    /// Looks a name up, returning the fallback for unknown or missing names.
    fn get_icon(key: Option<&str>) -> Self {
        key.map(str::trim)
            .and_then(Self::lookup_key)
            .unwrap_or(Self::FALLBACK)
    }
}

macro_rules! impl_icon_table {
    ($($table:ident),+) => {
        $(
            impl IconTable for $table {
                const FALLBACK: Self = $table::FALLBACK;

                fn lookup_key(key: &str) -> Option<Self> {
                    $table::lookup(key)
                }

                fn symbol_name(self) -> &'static str {
                    self.symbol()
                }
            }
        )+
    };
}

impl_icon_table!(ProductIcon, LeadMagnetIcon, ServiceIcon, ProblemIcon);

// Strength names may carry an `Icon` suffix (`ArrowUpRightIcon`).
impl IconTable for StrengthIcon {
    const FALLBACK: Self = StrengthIcon::FALLBACK;

    fn lookup_key(key: &str) -> Option<Self> {
        StrengthIcon::lookup(key.strip_suffix("Icon").unwrap_or(key))
    }

    fn symbol_name(self) -> &'static str {
        self.symbol()
    }
}

/// Resolves an icon name against table `T`.
///
/// # Examples
///
/// ```
/// use vitrine_core::icons::{get_icon, ProductIcon, StrengthIcon};
///
/// assert_eq!(get_icon::<ProductIcon>(Some("Leaf")), ProductIcon::Leaf);
/// assert_eq!(get_icon::<ProductIcon>(Some("Unicorn")), ProductIcon::CheckCircle);
/// assert_eq!(get_icon::<StrengthIcon>(Some("ArrowUpRightIcon")), StrengthIcon::ArrowUpRight);
/// ```
pub fn get_icon<T: IconTable>(key: Option<&str>) -> T {
    T::get_icon(key)
}

/// Rendered symbol name for an icon name in table `T`.
pub fn icon_symbol<T: IconTable>(key: Option<&str>) -> &'static str {
    T::get_icon(key).symbol_name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_fall_back() {
        assert_eq!(get_icon::<ProductIcon>(Some("Nope")), ProductIcon::CheckCircle);
        assert_eq!(get_icon::<StrengthIcon>(Some("Nope")), StrengthIcon::Award);
        assert_eq!(get_icon::<LeadMagnetIcon>(Some("Nope")), LeadMagnetIcon::FileText);
        assert_eq!(get_icon::<ServiceIcon>(Some("Nope")), ServiceIcon::Package);
        assert_eq!(get_icon::<ProblemIcon>(Some("Nope")), ProblemIcon::AlertTriangle);
    }

    #[test]
    fn test_missing_and_blank_keys_fall_back() {
        assert_eq!(get_icon::<ProductIcon>(None), ProductIcon::FALLBACK);
        assert_eq!(get_icon::<ServiceIcon>(Some("   ")), ServiceIcon::FALLBACK);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(ProductIcon::lookup("shield"), None);
        assert_eq!(ProductIcon::lookup("Shield"), Some(ProductIcon::Shield));
    }

    #[test]
    fn test_every_key_resolves_to_itself() {
        for icon in ProductIcon::ALL {
            assert_eq!(get_icon::<ProductIcon>(Some(icon.key())), *icon);
        }
        for icon in StrengthIcon::ALL {
            assert_eq!(get_icon::<StrengthIcon>(Some(icon.key())), *icon);
        }
    }

    #[test]
    fn test_strength_icon_suffix() {
        assert_eq!(get_icon::<StrengthIcon>(Some("UsersIcon")), StrengthIcon::Users);
        assert_eq!(get_icon::<StrengthIcon>(Some("Icon")), StrengthIcon::Award);
        // Other tables do not strip the suffix.
        assert_eq!(get_icon::<ProductIcon>(Some("ShieldIcon")), ProductIcon::CheckCircle);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(icon_symbol::<ProblemIcon>(Some("DollarSign")), "dollar-sign");
        assert_eq!(icon_symbol::<LeadMagnetIcon>(Some("BookOpen")), "book-open");
        assert_eq!(icon_symbol::<ServiceIcon>(None), "package");
    }

    #[test]
    fn test_default_is_fallback() {
        assert_eq!(ProductIcon::default(), ProductIcon::CheckCircle);
        assert_eq!(ProblemIcon::default(), ProblemIcon::AlertTriangle);
    }
}
