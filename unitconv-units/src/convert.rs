//! Value conversion between units of one category

use unitconv_core::ConvertError;
use crate::{Rule, Unit};

/// Convert `value` from `source` to `target`
///
/// Length and weight rescale through the category base unit:
/// `value * source_factor / target_factor`. Temperatures go through kelvin.
/// A unit converted to itself returns `value` untouched.
///
/// Units of different categories, or an unknown source, are rejected with
/// the same error the session reports for them.
pub fn convert(value: f64, source: &Unit, target: &Unit) -> Result<f64, ConvertError> {
    if !source.is_compatible(target) || source.is_unknown() {
        return Err(ConvertError::incompatible(source.plural, target.plural));
    }

    if source == target {
        return Ok(value);
    }

    match (source.rule, target.rule) {
        (Rule::Linear(from), Rule::Linear(to)) => Ok(value * from / to),
        (Rule::Affine(from), Rule::Affine(to)) => Ok(to.from_kelvin(from.to_kelvin(value))),
        _ => Err(ConvertError::incompatible(source.plural, target.plural)),
    }
}
