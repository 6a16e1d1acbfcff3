//! unitconv Core - Fundamental types
//!
//! This crate provides the core types used throughout unitconv:
//! - `ConvertError`: the recoverable errors of one conversion request
//! - `parse_decimal` / `format_decimal`: the textual number format of the
//!   terminal protocol

mod error;
mod number;

pub use error::{ConvertError, codes};
pub use number::{parse_decimal, format_decimal};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConvertError, parse_decimal, format_decimal};
    pub use crate::error::codes;
}
