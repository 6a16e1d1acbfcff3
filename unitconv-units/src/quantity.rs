//! Quantity type - a value with an associated unit

use std::fmt;
use serde::Serialize;
use unitconv_core::format_decimal;
use crate::Unit;

/// A value paired with the catalog unit it is measured in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity<'a> {
    pub value: f64,
    pub unit: &'a Unit,
}

impl<'a> Quantity<'a> {
    pub fn new(value: f64, unit: &'a Unit) -> Self {
        Quantity { value, unit }
    }

    /// Singular unit name for exactly 1.0, plural otherwise
    pub fn unit_name(&self) -> &'static str {
        self.unit.name_for(self.value)
    }
}

/// Renders as "<value> <unit name>", e.g. "5.0 kilometers" or "1.0 meter"
impl fmt::Display for Quantity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_decimal(self.value), self.unit_name())
    }
}
