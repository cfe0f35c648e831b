//! Precedence resolution over override layers.
//!
//! Every themed value on the site is computed the same way: walk a fixed list
//! of layers from highest to lowest precedence and take the first one that is
//! present. Blank strings count as absent at every layer.

/// Returns the first present level, or `default` when every level is absent.
///
/// # Examples
///
/// ```
/// use vitrine_core::resolve::resolve;
///
/// assert_eq!(resolve([None, Some(2), Some(3)], 0), 2);
/// assert_eq!(resolve([None::<u8>, None], 7), 7);
/// ```
pub fn resolve<T, I>(levels: I, default: T) -> T
where
    I: IntoIterator<Item = Option<T>>,
{
    levels.into_iter().flatten().next().unwrap_or(default)
}

/// Trim-and-check gate: a blank or whitespace-only string is treated as absent.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// String form of [`resolve`]: every level goes through [`non_blank`] first.
///
/// # Examples
///
/// ```
/// use vitrine_core::resolve::resolve_str;
///
/// assert_eq!(resolve_str([Some("  "), Some("#000000")], "#FFFFFF"), "#000000");
/// assert_eq!(resolve_str([None, Some("")], "#FFFFFF"), "#FFFFFF");
/// ```
pub fn resolve_str<'a, I>(levels: I, default: &'a str) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    resolve(levels.into_iter().map(non_blank), default).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_first_present_wins() {
        assert_eq!(resolve([Some("a"), Some("b")], "z"), "a");
        assert_eq!(resolve([None, Some("b")], "z"), "b");
    }

    #[test]
    fn test_resolve_falls_to_default() {
        let levels: [Option<&str>; 3] = [None, None, None];
        assert_eq!(resolve(levels, "z"), "z");
    }

    #[test]
    fn test_resolve_empty_levels() {
        assert_eq!(resolve(Vec::<Option<u32>>::new(), 5), 5);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("x")), Some("x"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_resolve_str_skips_whitespace() {
        assert_eq!(resolve_str([Some(" \t "), None, Some("Inter")], "x"), "Inter");
    }

    #[test]
    fn test_resolve_str_keeps_inner_whitespace() {
        assert_eq!(resolve_str([Some(" Open Sans ")], "x"), " Open Sans ");
    }
}
