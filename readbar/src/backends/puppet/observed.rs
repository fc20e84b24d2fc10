//! Structs representing output of the puppet backend.
use crate::style::{DisplayMode, StyleProperty};
use crate::reexports::enum_map::EnumMap;
use std::fmt;

/// A single style write observed on a puppet element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedWrite {
    /// Selector the element was registered under
    pub selector: String,
    /// Property written
    pub property: StyleProperty,
    /// Value written, as the page would receive it
    pub value: String,
}

impl fmt::Display for ObservedWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ {}: {} }}", self.selector, self.property, self.value)
    }
}

/// Inline style of a puppet element: the last value written per property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservedStyle {
    values: EnumMap<StyleProperty, Option<String>>,
}

impl ObservedStyle {
    /// Returns the current value of `property`, if it was ever written.
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.values[property].as_deref()
    }

    /// Returns the current `display` value, if it was written and valid.
    pub fn display(&self) -> Option<DisplayMode> {
        self.get(StyleProperty::Display)?.parse().ok()
    }

    pub(crate) fn set(&mut self, property: StyleProperty, value: &str) {
        self.values[property] = Some(value.to_string());
    }
}

impl fmt::Display for ObservedStyle {
    /// Renders like an inline `style` attribute.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (property, value) in &self.values {
            let Some(value) = value else { continue };
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_rendering() {
        let mut style = ObservedStyle::default();
        assert_eq!(style.to_string(), "");

        style.set(StyleProperty::Left, "920px");
        style.set(StyleProperty::Display, "none");
        style.set(StyleProperty::Display, "block");
        assert_eq!(style.to_string(), "display: block; left: 920px;");
        assert_eq!(style.display(), Some(DisplayMode::Block));
        assert_eq!(style.get(StyleProperty::Width), None);
    }
}
