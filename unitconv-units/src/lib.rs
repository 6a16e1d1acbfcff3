//! unitconv Units - Unit catalog and conversion
//!
//! Resolves free-text unit names against a fixed catalog and converts
//! values between units of the same category.
//!
//! Categories:
//! - Length (m, km, cm, mm, mi, yd, ft, in)
//! - Weight (g, kg, mg, lb, oz)
//! - Temperature (c, f, k)

mod category;
mod unit;
mod units;
mod quantity;
mod parse;
mod convert;

pub use category::Category;
pub use unit::{Unit, Rule, Scale};
pub use units::{UnitCatalog, CATALOG};
pub use quantity::Quantity;
pub use parse::{parse_request, ConversionRequest};
pub use convert::convert;
