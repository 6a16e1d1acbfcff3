//! Unit categories
//!
//! Conversions only happen between units of one category. `Other` marks
//! the unrecognized unit and is never convertible.

use std::fmt;
use serde::{Serialize, Deserialize};

/// The kind of quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Base unit: meter
    Length,
    /// Base unit: gram
    Weight,
    /// Affine scales, converted through kelvin
    Temperature,
    /// Unrecognized unit
    Other,
}

impl Category {
    /// Linear categories rescale through a base unit and have no negative amounts
    pub fn is_linear(&self) -> bool {
        matches!(self, Category::Length | Category::Weight)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_categories() {
        assert!(Category::Length.is_linear());
        assert!(Category::Weight.is_linear());
        assert!(!Category::Temperature.is_linear());
        assert!(!Category::Other.is_linear());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Category::Weight), "Weight");
        assert_eq!(format!("{}", Category::Other), "Other");
    }
}
