//! Conditional render gate.
//!
//! A UI block renders only when its controlling value carries content. Absent
//! values, blank strings and empty collections suppress the whole block (its
//! heading, paragraph, list or card group), not only the text.

use serde_json::Value;

/// A value that can decide whether its UI block is rendered.
pub trait Renderable {
    /// Returns true if the block controlled by this value should render.
    fn should_render(&self) -> bool;
}

impl Renderable for str {
    fn should_render(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Renderable for String {
    fn should_render(&self) -> bool {
        self.as_str().should_render()
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn should_render(&self) -> bool {
        (**self).should_render()
    }
}

impl<T: Renderable> Renderable for Option<T> {
    fn should_render(&self) -> bool {
        self.as_ref().is_some_and(Renderable::should_render)
    }
}

impl<T> Renderable for [T] {
    fn should_render(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Renderable for Vec<T> {
    fn should_render(&self) -> bool {
        !self.is_empty()
    }
}

impl Renderable for Value {
    fn should_render(&self) -> bool {
        match self {
            Value::Null => false,
            Value::String(s) => s.should_render(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            Value::Bool(_) | Value::Number(_) => true,
        }
    }
}

/// Free-function form of [`Renderable::should_render`].
///
/// # Examples
///
/// ```
/// use vitrine_core::gate::should_render;
///
/// assert!(should_render(&Some("Our Solutions".to_string())));
/// assert!(!should_render(&Some("   ".to_string())));
/// assert!(!should_render(&None::<String>));
/// ```
pub fn should_render<T: Renderable + ?Sized>(value: &T) -> bool {
    value.should_render()
}

/// Returns the value only if it should render. Handy for building view models.
pub fn visible(value: Option<&str>) -> Option<String> {
    value.filter(|s| s.should_render()).map(str::to_string)
}

/// True if at least one of the values renders.
///
/// Used for wrapper blocks such as a section header that holds a title and a
/// subtitle: the wrapper renders if either child does.
pub fn any_renders<'a, I>(values: I) -> bool
where
    I: IntoIterator<Item = &'a Option<String>>,
{
    values.into_iter().any(Renderable::should_render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings() {
        assert!("Hello".should_render());
        assert!(!"".should_render());
        assert!(!"   \n\t".should_render());
        assert!(String::from(" x ").should_render());
    }

    #[test]
    fn test_whitespace_matches_absent() {
        let blank: Option<String> = Some("   ".to_string());
        let absent: Option<String> = None;
        assert_eq!(should_render(&blank), should_render(&absent));
        assert!(!should_render(&blank));
    }

    #[test]
    fn test_collections() {
        assert!(!Vec::<u8>::new().should_render());
        assert!(vec![1].should_render());
        assert!(!Some(Vec::<u8>::new()).should_render());
        let slice: &[u8] = &[];
        assert!(!slice.should_render());
    }

    #[test]
    fn test_json_values() {
        assert!(!json!(null).should_render());
        assert!(!json!("  ").should_render());
        assert!(!json!([]).should_render());
        assert!(!json!({}).should_render());
        assert!(json!(["a"]).should_render());
        assert!(json!(0).should_render());
    }

    #[test]
    fn test_visible() {
        assert_eq!(visible(Some("Title")), Some("Title".to_string()));
        assert_eq!(visible(Some(" ")), None);
        assert_eq!(visible(None), None);
    }

    #[test]
    fn test_any_renders() {
        let title = Some(" ".to_string());
        let subtitle = Some("Subtitle".to_string());
        assert!(any_renders([&title, &subtitle]));
        assert!(!any_renders([&title, &None]));
    }
}
