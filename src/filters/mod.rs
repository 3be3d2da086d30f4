mod base;
mod bloom;

pub use self::base::Filter;
pub use self::bloom::BloomFilter;
