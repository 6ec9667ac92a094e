/// Default length ceiling. The original array interfaces address elements
/// with 32-bit signed integers.
pub const MAX_LEN: usize = i32::MAX as usize;

/// Options for creating a [`TypedArray`](crate::TypedArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayOptions {
    /// Initial number of zeroed elements.
    pub len: usize,
    /// Largest length `set_len` will accept.
    pub max_len: usize,
}

impl ArrayOptions {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            max_len: MAX_LEN,
        }
    }

    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<usize> for ArrayOptions {
    fn from(len: usize) -> Self {
        Self::new(len)
    }
}
