//! Errors reported by the sorts.
//!
//! Only arguments the caller picks besides the slice and the ordering are validated, today that
//! is the comb sort shrink factor. A comparison function that violates strict weak ordering is
//! not detected, the result order is unspecified in that case, but the slice still holds the
//! original elements.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for the sorts with configurable parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SortError {
    /// A numeric argument lies outside its accepted range. The slice is left untouched.
    InvalidArgument {
        /// Name of the argument, e.g. `"factor"`.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidArgument { name, value } => {
                write!(f, "Invalid argument: {name} = {value} (must be > 1)")
            }
        }
    }
}

impl Error for SortError {}
