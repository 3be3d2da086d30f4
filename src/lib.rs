//! Fixed-size, insert-only Bloom filter meant as a cheap pre-filter in
//! front of an expensive exact lookup.

mod error;
mod filters;

pub use self::error::Error;
pub use self::filters::{BloomFilter, Filter};
