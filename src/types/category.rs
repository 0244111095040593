//! Menu categories.
//!
//! `All` is a filter pseudo-category: it selects the whole catalog in a
//! menu view and is never assigned to a [`MenuItem`](super::MenuItem).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Filter pseudo-category selecting every item
    #[default]
    All,
    /// Main dishes
    Main,
    /// Side dishes
    Side,
    /// Desserts
    Dessert,
}

impl Category {
    /// Every category in display order, `All` first
    pub const DISPLAY_ORDER: [Category; 4] = [
        Category::All,
        Category::Main,
        Category::Side,
        Category::Dessert,
    ];

    /// Returns true for the filter pseudo-category
    #[inline]
    pub fn is_filter(self) -> bool {
        self == Category::All
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Main => "Main",
            Category::Side => "Side",
            Category::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::DISPLAY_ORDER
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
