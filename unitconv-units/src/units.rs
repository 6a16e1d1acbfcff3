//! Unit definitions, in lookup priority order

use std::sync::LazyLock;
use tracing::trace;
use crate::{Category, Scale, Unit};

/// Global unit catalog
pub static CATALOG: LazyLock<UnitCatalog> = LazyLock::new(UnitCatalog::new);

/// Read-only list of all known units
///
/// Lookup walks the list in declaration order and returns the first unit
/// whose abbreviation, singular, plural or alias equals the token.
pub struct UnitCatalog {
    units: Vec<Unit>,
    unknown: Unit,
}

impl UnitCatalog {
    pub fn new() -> Self {
        let mut catalog = UnitCatalog {
            units: Vec::new(),
            unknown: Unit::UNKNOWN,
        };
        catalog.register_all_units();
        catalog
    }

    /// Resolve an already lowercased and trimmed token
    ///
    /// Never fails: an unmatched token resolves to the unknown unit.
    pub fn lookup(&self, token: &str) -> &Unit {
        match self.units.iter().find(|unit| unit.matches(token)) {
            Some(unit) => unit,
            None => {
                trace!(token, "no catalog entry matches");
                &self.unknown
            }
        }
    }

    /// The unit returned for unmatched tokens
    pub fn unknown(&self) -> &Unit {
        &self.unknown
    }

    /// All units in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    /// Get all units in a category
    pub fn by_category(&self, category: Category) -> Vec<&Unit> {
        self.units.iter()
            .filter(|u| u.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn register(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
    }

    fn register_length_units(&mut self) {
        // Metric
        self.register(Unit::linear(Category::Length, "m", "meter", "meters", 1.0));
        self.register(Unit::linear(Category::Length, "km", "kilometer", "kilometers", 1000.0));
        self.register(Unit::linear(Category::Length, "cm", "centimeter", "centimeters", 0.01));
        self.register(Unit::linear(Category::Length, "mm", "millimeter", "millimeters", 0.001));

        // Imperial/US
        self.register(Unit::linear(Category::Length, "mi", "mile", "miles", 1609.35));
        self.register(Unit::linear(Category::Length, "yd", "yard", "yards", 0.9144));
        self.register(Unit::linear(Category::Length, "ft", "foot", "feet", 0.3048));
        self.register(Unit::linear(Category::Length, "in", "inch", "inches", 0.0254));
    }

    fn register_weight_units(&mut self) {
        self.register(Unit::linear(Category::Weight, "g", "gram", "grams", 1.0));
        self.register(Unit::linear(Category::Weight, "kg", "kilogram", "kilograms", 1000.0));
        self.register(Unit::linear(Category::Weight, "mg", "milligram", "milligrams", 0.001));
        self.register(Unit::linear(Category::Weight, "lb", "pound", "pounds", 453.592));
        self.register(Unit::linear(Category::Weight, "oz", "ounce", "ounces", 28.3495));
    }

    fn register_temperature_units(&mut self) {
        self.register(
            Unit::temperature("c", "degree celsius", "degrees celsius", Scale::Celsius)
                .with_aliases(&["dc", "celsius"]),
        );
        self.register(
            Unit::temperature("f", "degree fahrenheit", "degrees fahrenheit", Scale::Fahrenheit)
                .with_aliases(&["df", "fahrenheit"]),
        );
        self.register(Unit::temperature("k", "kelvin", "kelvins", Scale::Kelvin));
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rule;

    #[test]
    fn test_catalog_size() {
        assert_eq!(CATALOG.len(), 16);
        assert_eq!(CATALOG.by_category(Category::Length).len(), 8);
        assert_eq!(CATALOG.by_category(Category::Weight).len(), 5);
        assert_eq!(CATALOG.by_category(Category::Temperature).len(), 3);
        assert!(CATALOG.by_category(Category::Other).is_empty());
    }

    #[test]
    fn test_lookup_by_every_field() {
        assert_eq!(CATALOG.lookup("km").singular, "kilometer");
        assert_eq!(CATALOG.lookup("kilometer").abbreviation, "km");
        assert_eq!(CATALOG.lookup("kilometers").abbreviation, "km");
        assert_eq!(CATALOG.lookup("feet").abbreviation, "ft");
        assert_eq!(CATALOG.lookup("degrees fahrenheit").abbreviation, "f");
        assert_eq!(CATALOG.lookup("dc").abbreviation, "c");
        assert_eq!(CATALOG.lookup("celsius").abbreviation, "c");
        assert_eq!(CATALOG.lookup("fahrenheit").abbreviation, "f");
    }

    #[test]
    fn test_lookup_is_total() {
        assert_eq!(CATALOG.lookup("km").category, Category::Length);
        assert_eq!(CATALOG.lookup("bogus").category, Category::Other);
        assert!(CATALOG.lookup("").is_unknown());
        assert!(CATALOG.lookup("KM").is_unknown());
        assert!(CATALOG.lookup(" km").is_unknown());
        // The placeholder names of the unknown unit never match a real unit
        assert!(CATALOG.lookup("???").is_unknown());
    }

    #[test]
    fn test_base_units() {
        assert_eq!(CATALOG.lookup("m").rule, Rule::Linear(1.0));
        assert_eq!(CATALOG.lookup("g").rule, Rule::Linear(1.0));
    }

    #[test]
    fn test_first_match_wins() {
        let first_length = CATALOG.iter().next().unwrap();
        assert_eq!(first_length.abbreviation, "m");
        assert_eq!(CATALOG.lookup("in").singular, "inch");
    }

    #[test]
    fn test_every_name_resolves_to_its_unit() {
        for unit in CATALOG.iter() {
            let names = [unit.abbreviation, unit.singular, unit.plural]
                .into_iter()
                .chain(unit.aliases.iter().copied());
            for name in names {
                assert_eq!(
                    CATALOG.lookup(name).abbreviation,
                    unit.abbreviation,
                    "{} resolves to another unit",
                    name
                );
            }
        }
    }
}
