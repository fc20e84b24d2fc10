//! Elements the indicator works with.
use enum_map::Enum;
use enumset::{EnumSet, EnumSetType};
use std::fmt;
use std::str::FromStr;

/// Set of roles an indicator needs to find on the page.
pub type Roles = EnumSet<Role>;

/// Part played by an element of the page.
#[allow(clippy::derived_hash_with_manual_eq)] // We do derive it through EnumSetType
#[derive(EnumSetType, Enum, Debug, Hash)]
pub enum Role {
    /// Content container whose scroll progress is measured.
    Main,

    /// Bar whose width shows the progress.
    ProgressBar,

    /// Section holding the article body.
    ///
    /// Must be present for the extended variant, although no value is read
    /// from it.
    MainSection,

    /// Floating "back to top" button.
    TopButton,
}

impl Role {
    /// Selector used to find this element when none is configured.
    pub fn default_selector(self) -> &'static str {
        match self {
            Role::Main => "main",
            Role::ProgressBar => "#progress-bar",
            Role::MainSection => "section.main-content",
            Role::TopButton => "#top-button",
        }
    }

    /// Name of this role in configuration files.
    pub fn key(self) -> &'static str {
        match self {
            Role::Main => "main",
            Role::ProgressBar => "progress_bar",
            Role::MainSection => "main_section",
            Role::TopButton => "top_button",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "main" | "Main" => Role::Main,
            "progress_bar" | "ProgressBar" => Role::ProgressBar,
            "main_section" | "MainSection" => Role::MainSection,
            "top_button" | "TopButton" => Role::TopButton,
            _ => return Err(()),
        })
    }
}

/// Which behaviours the indicator drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Only the progress bar.
    Basic,

    /// Progress bar, plus a top button shown once scrolling started and
    /// aligned with the right edge of the main content on resize.
    #[default]
    Extended,
}

impl Variant {
    /// Returns the elements that must exist on the page.
    pub fn required_roles(self) -> Roles {
        match self {
            Variant::Basic => Role::Main | Role::ProgressBar,
            Variant::Extended => EnumSet::all(),
        }
    }

    /// Returns `true` if this variant drives a top button.
    pub fn has_top_button(self) -> bool {
        self.required_roles().contains(Role::TopButton)
    }
}

impl FromStr for Variant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "basic" | "Basic" => Variant::Basic,
            "extended" | "Extended" => Variant::Extended,
            _ => return Err(()),
        })
    }
}
