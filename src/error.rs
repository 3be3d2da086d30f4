use thiserror::Error;

/// Errors reported when constructing a filter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested capacity does not hold a single 32-bit storage word,
    /// so no bit array can be allocated.
    #[error("bit capacity {0} is too small, at least 32 bits are required")]
    CapacityTooSmall(usize),
}
