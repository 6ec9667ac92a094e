#![doc = include_str!("../README.md")]

mod array;
mod error;
mod kind;
mod number;
mod options;
mod shared;
mod traits;
mod variants;

pub use array::*;
pub use error::*;
pub use kind::*;
pub use number::*;
pub use options::*;
pub use shared::*;
pub use traits::*;
pub use variants::*;
