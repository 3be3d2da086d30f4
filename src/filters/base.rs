/// Capability surface shared by filter variants, so callers can swap in a
/// future counting or removable filter without changes.
pub trait Filter {
    /// Registers `value` as a member. Inserting the same value twice is a
    /// no-op for membership but still advances the insert counter.
    fn insert(&mut self, value: &[u8]);

    /// Whether `value` is possibly a member. `false` is exact: an inserted
    /// value is never reported absent.
    fn lookup(&self, value: &[u8]) -> bool;

    /// Analytic estimate of the fill ratio after the inserts seen so far,
    /// `1 - e^(-nk/m)`. Computed from the insert count, not by scanning
    /// the bit array.
    fn estimated_fill_ratio(&self) -> f64;

    /// Declared capacity of the filter in bits.
    fn size_bits(&self) -> usize;
}
