use thiserror::Error;

/// Errors reported by sequence construction and indexed access.
///
/// Reading an exhausted sequence is a precondition violation and panics
/// instead; these variants cover the failures a caller can recover from.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An indexed access named a part that does not exist.
    #[error("index {index} is out of range for {len} parts")]
    IndexOutOfRange { index: usize, len: usize },

    /// A bounded view asked for more elements than its buffer holds.
    #[error("requested {requested} elements from a buffer of length {len}")]
    BufferTooShort { requested: usize, len: usize },
}
