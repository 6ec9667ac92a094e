mod access;
mod any;
mod index;
mod value;

pub use access::*;
pub use any::*;
pub use index::*;
pub use value::*;
