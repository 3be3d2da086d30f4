use xxhash_rust::xxh32::xxh32;

use crate::error::Error;
use crate::filters::Filter;

/// Width of one storage word in bits.
const WORD_BITS: usize = 32;
/// Number of probe positions derived per key.
const PROBES: u32 = 4;
/// Seeds for the two double-hashing base values.
const SEED_LO: u32 = 0;
const SEED_HI: u32 = 64;

/// Fixed-capacity, insert-only Bloom filter.
///
/// The bit array is packed into 32-bit words with explicit shift/mask
/// arithmetic. Probe positions are derived with Kirsch-Mitzenmacher double
/// hashing, `h1 + i * h2`, from two xxh32 passes over the key bytes.
#[derive(Debug)]
pub struct BloomFilter {
    /// number of bits in the filter
    m: usize,
    /// number of probe positions per key
    k: u32,
    /// number of inserts so far, duplicates included
    n: u64,
    /// number of storage words
    b: usize,

    bits: Vec<u32>,
}

impl BloomFilter {
    /// Creates a cleared filter holding `size` bits.
    ///
    /// `size` is ideally a multiple of 32. A trailing partial word gets no
    /// storage of its own; probes landing there fold back into the
    /// allocated words. Fails when `size` cannot hold a single word.
    pub fn new(size: usize) -> Result<Self, Error> {
        let b = size / WORD_BITS;
        if b == 0 {
            return Err(Error::CapacityTooSmall(size));
        }
        Ok(Self {
            m: size,
            k: PROBES,
            n: 0,
            b,
            bits: vec![0u32; b],
        })
    }

    fn bases(value: &[u8]) -> (u32, u32) {
        (xxh32(value, SEED_LO), xxh32(value, SEED_HI))
    }

    /// Word index and bit offset of probe `i`. The hash combination wraps
    /// in 32 bits; the word index wraps in `b` so an unaligned capacity
    /// never indexes past the allocated words.
    fn slot(&self, h1: u32, h2: u32, i: u32) -> (usize, u32) {
        let index = h1.wrapping_add(h2.wrapping_mul(i)) as usize % self.m;
        ((index / WORD_BITS) % self.b, (index % WORD_BITS) as u32)
    }
}

impl Filter for BloomFilter {
    fn insert(&mut self, value: &[u8]) {
        let (h1, h2) = Self::bases(value);
        for i in 0..self.k {
            let (bucket, bit) = self.slot(h1, h2, i);
            self.bits[bucket] |= 1 << bit;
        }
        self.n += 1;
    }

    /// A key is reported present as soon as any one of its probe bits is
    /// set, and absent only when every probe bit is clear.
    fn lookup(&self, value: &[u8]) -> bool {
        let (h1, h2) = Self::bases(value);
        for i in 0..self.k {
            let (bucket, bit) = self.slot(h1, h2, i);
            if self.bits[bucket] & (1 << bit) != 0 {
                return true;
            }
        }
        false
    }

    fn estimated_fill_ratio(&self) -> f64 {
        1.0 - (-(self.n as f64) * f64::from(self.k) / self.m as f64).exp()
    }

    fn size_bits(&self) -> usize {
        self.m
    }
}
