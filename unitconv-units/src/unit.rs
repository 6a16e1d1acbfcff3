//! Unit representation with conversion rules

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Category;

/// Offset of the Celsius scale from kelvin
const CELSIUS_OFFSET: f64 = 273.15;
/// Offset of the Fahrenheit scale from Rankine zero
const FAHRENHEIT_OFFSET: f64 = 459.67;

/// Temperature scales, converted through kelvin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    pub fn to_kelvin(self, value: f64) -> f64 {
        match self {
            Scale::Celsius => value + CELSIUS_OFFSET,
            Scale::Fahrenheit => (value + FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            Scale::Kelvin => value,
        }
    }

    pub fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            Scale::Celsius => kelvin - CELSIUS_OFFSET,
            Scale::Fahrenheit => kelvin * 9.0 / 5.0 - FAHRENHEIT_OFFSET,
            Scale::Kelvin => kelvin,
        }
    }
}

/// How values of a unit relate to the rest of its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Rule {
    /// Multiplier to the category base unit (meter, gram)
    Linear(f64),
    /// Scale and offset, see [`Scale`]
    Affine(Scale),
    /// The unknown unit converts to nothing
    Unconvertible,
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    pub category: Category,
    /// Short code, e.g. "km"
    pub abbreviation: &'static str,
    pub singular: &'static str,
    pub plural: &'static str,
    pub rule: Rule,
    /// Extra recognized names besides abbreviation, singular and plural
    pub aliases: &'static [&'static str],
}

impl Unit {
    /// The result of a failed lookup
    pub const UNKNOWN: Unit = Unit {
        category: Category::Other,
        abbreviation: "???",
        singular: "???",
        plural: "???",
        rule: Rule::Unconvertible,
        aliases: &[],
    };

    /// Create a unit that rescales linearly to its category base unit
    pub const fn linear(
        category: Category,
        abbreviation: &'static str,
        singular: &'static str,
        plural: &'static str,
        factor: f64,
    ) -> Self {
        Unit {
            category,
            abbreviation,
            singular,
            plural,
            rule: Rule::Linear(factor),
            aliases: &[],
        }
    }

    /// Create a temperature unit
    pub const fn temperature(
        abbreviation: &'static str,
        singular: &'static str,
        plural: &'static str,
        scale: Scale,
    ) -> Self {
        Unit {
            category: Category::Temperature,
            abbreviation,
            singular,
            plural,
            rule: Rule::Affine(scale),
            aliases: &[],
        }
    }

    /// Builder: add alias names
    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Exact match against abbreviation, singular, plural and aliases
    pub fn matches(&self, token: &str) -> bool {
        token == self.abbreviation
            || token == self.singular
            || token == self.plural
            || self.aliases.contains(&token)
    }

    /// True for the unrecognized unit (category `Other`)
    pub fn is_unknown(&self) -> bool {
        self.category == Category::Other
    }

    /// Check if two units share a category
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }

    /// Singular name for exactly 1.0, plural otherwise
    pub fn name_for(&self, value: f64) -> &'static str {
        if value == 1.0 {
            self.singular
        } else {
            self.plural
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation)
    }
}
