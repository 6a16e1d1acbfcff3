//! unitconv - interactive unit conversion
//!
//! Reads requests such as "5 km to miles" one line at a time and answers
//! each with a result line or a one-line diagnostic.

mod session;

pub use session::{Session, SessionStats, PROMPT, EXIT_COMMAND};
pub use unitconv_core::ConvertError;
pub use unitconv_units::{Category, ConversionRequest, Quantity, Unit, UnitCatalog, CATALOG};
