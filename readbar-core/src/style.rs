//! Inline style values written to page elements.
//!
//! The indicator only ever writes three properties:
//!
//! * `width` on the progress bar, as a percentage.
//! * `display` on the top button, either `none` or `block`.
//! * `left` on the top button, in pixels.
use enum_map::Enum;
use std::fmt;
use std::str::FromStr;

/// Style property written by the indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enum)]
pub enum StyleProperty {
    /// Width of the progress bar.
    Width,
    /// Visibility of the top button.
    Display,
    /// Horizontal offset of the top button.
    Left,
}

impl StyleProperty {
    /// Returns the CSS name of this property.
    pub fn name(self) -> &'static str {
        match self {
            StyleProperty::Width => "width",
            StyleProperty::Display => "display",
            StyleProperty::Left => "left",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A CSS length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// Percentage of the containing block, rendered as `"42.7%"`.
    Percent(f64),
    /// Absolute pixels, rendered as `"920px"`.
    Px(f64),
}

// Shortest round-trip representation, and `-0` prints as `0`.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{value}")
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Length::Percent(v) => {
                write_number(f, v)?;
                f.write_str("%")
            }
            Length::Px(v) => {
                write_number(f, v)?;
                f.write_str("px")
            }
        }
    }
}

/// CSS `display` keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// `display: none`
    None,
    /// `display: block`
    Block,
}

impl DisplayMode {
    /// Returns `Block` if `visible`, `None` otherwise.
    pub fn visible_if(visible: bool) -> Self {
        if visible {
            DisplayMode::Block
        } else {
            DisplayMode::None
        }
    }

    /// Returns the CSS keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            DisplayMode::None => "none",
            DisplayMode::Block => "block",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for DisplayMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "none" => DisplayMode::None,
            "block" => DisplayMode::Block,
            _ => return Err(()),
        })
    }
}
