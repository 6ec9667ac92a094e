use std::{collections::TryReserveError, result};

use thiserror::Error;

use crate::{ElementKind, Number};

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for typed array operations.
///
/// Every error is local to the failing call: the array is left exactly as it
/// was before the call.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid size: {size} (max: {max_len})")]
    InvalidSize { size: i128, max_len: usize },

    #[error("Index out of range: index: {index}, len: {len}")]
    IndexOutOfRange { index: i128, len: usize },

    #[error("Value {value} is out of range for {kind}")]
    ValueOutOfRange { value: Number, kind: ElementKind },

    #[error(transparent)]
    Allocation(#[from] TryReserveError),
}
