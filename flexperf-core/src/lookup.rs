//! Piecewise-Linear Lookup Tables for Performance Charts
//!
//! ## Motivation
//!
//! Flight manual performance charts are published as curves sampled at a
//! handful of points. Between samples the charts are read by straight-line
//! interpolation, and outside the published range the chart edge applies. The
//! tables here reproduce that reading procedure exactly so that values taken
//! at a published sample come back unchanged.
//!
//! ## Table Variants
//!
//! - [`LookupTable`]: one key, one value (e.g. runway length -> weight)
//! - [`VectorLookupTable`]: one key, `N` values interpolated per component
//!   (e.g. takeoff weight -> V1/VR/V2)
//! - [`VectorLookupTable2`]: two keys, `N` values (e.g. pressure altitude x
//!   weight -> VMU). The outer key selects two rows, the inner key is read in
//!   both, then the two readings are interpolated on the outer key.
//!
//! ## Interpolation
//!
//! ```text
//! Given bracketing samples (k0, v0) and (k1, v1) with k0 <= key < k1:
//!
//! v(key) = v0 + (v1 - v0) * (key - k0) / (k1 - k0)
//!
//! key <= first key  -> first value
//! key >= last key   -> last value
//! ```
//!
//! Sample keys must be strictly ascending. Tables are `const`-constructible and
//! borrow `'static` sample slices, so the coefficient data lives in read-only
//! memory and is shared freely between concurrent calculations.

/// Position of a key between two samples
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bracket {
    /// Key at or below the first sample
    First,
    /// Key at or above the last sample
    Last,
    /// Key between sample `index` and `index + 1`, `fraction` of the way
    Between { index: usize, fraction: f64 },
}

/// Locate `key` among ascending sample keys
fn bracket(len: usize, key_at: impl Fn(usize) -> f64, key: f64) -> Bracket {
    debug_assert!(len > 0, "lookup table without samples");

    if key <= key_at(0) {
        if key < key_at(0) {
            log_trace!("Lookup: key {} clamped to first sample {}", key, key_at(0));
        }
        return Bracket::First;
    }
    if key >= key_at(len - 1) {
        if key > key_at(len - 1) {
            log_trace!("Lookup: key {} clamped to last sample {}", key, key_at(len - 1));
        }
        return Bracket::Last;
    }

    // Binary search for the last sample key <= key
    let (mut low, mut high) = (0, len - 1);
    while high - low > 1 {
        let mid = (low + high) / 2;
        if key_at(mid) <= key {
            low = mid;
        } else {
            high = mid;
        }
    }

    let k0 = key_at(low);
    let k1 = key_at(low + 1);
    Bracket::Between {
        index: low,
        fraction: (key - k0) / (k1 - k0),
    }
}

/// Linear blend between two values
#[inline]
fn lerp(v0: f64, v1: f64, fraction: f64) -> f64 {
    v0 + (v1 - v0) * fraction
}

/// Single key, single value table
#[derive(Debug, Clone, Copy)]
pub struct LookupTable {
    samples: &'static [(f64, f64)],
}

impl LookupTable {
    /// Build a table from ascending `(key, value)` samples
    pub const fn new(samples: &'static [(f64, f64)]) -> Self {
        Self { samples }
    }

    /// Interpolated value at `key`, clamped to the table edges
    pub fn get(&self, key: f64) -> f64 {
        match bracket(self.samples.len(), |i| self.samples[i].0, key) {
            Bracket::First => self.samples[0].1,
            Bracket::Last => self.samples[self.samples.len() - 1].1,
            Bracket::Between { index, fraction } => {
                lerp(self.samples[index].1, self.samples[index + 1].1, fraction)
            }
        }
    }

    /// Lowest key covered by the table
    pub fn first_key(&self) -> f64 {
        self.samples[0].0
    }

    /// Highest key covered by the table
    pub fn last_key(&self) -> f64 {
        self.samples[self.samples.len() - 1].0
    }

    /// Raw samples
    pub fn samples(&self) -> &'static [(f64, f64)] {
        self.samples
    }
}

/// Single key table with `N` output components
#[derive(Debug, Clone, Copy)]
pub struct VectorLookupTable<const N: usize> {
    samples: &'static [(f64, [f64; N])],
}

impl<const N: usize> VectorLookupTable<N> {
    /// Build a table from ascending `(key, [values])` samples
    pub const fn new(samples: &'static [(f64, [f64; N])]) -> Self {
        Self { samples }
    }

    /// Interpolated components at `key`, clamped to the table edges
    pub fn get(&self, key: f64) -> [f64; N] {
        match bracket(self.samples.len(), |i| self.samples[i].0, key) {
            Bracket::First => self.samples[0].1,
            Bracket::Last => self.samples[self.samples.len() - 1].1,
            Bracket::Between { index, fraction } => {
                let lower = &self.samples[index].1;
                let upper = &self.samples[index + 1].1;
                core::array::from_fn(|c| lerp(lower[c], upper[c], fraction))
            }
        }
    }

    /// Lowest key covered by the table
    pub fn first_key(&self) -> f64 {
        self.samples[0].0
    }

    /// Raw samples
    pub fn samples(&self) -> &'static [(f64, [f64; N])] {
        self.samples
    }
}

/// Samples of one row of a [`VectorLookupTable2`]
pub type Row<const N: usize> = &'static [(f64, [f64; N])];

/// Two key table with `N` output components
///
/// Rows are keyed by the outer key; each row is read as a
/// [`VectorLookupTable`] over the inner key. Rows may use different inner
/// sample keys.
#[derive(Debug, Clone, Copy)]
pub struct VectorLookupTable2<const N: usize> {
    rows: &'static [(f64, Row<N>)],
}

impl<const N: usize> VectorLookupTable2<N> {
    /// Build a table from ascending `(outer key, row samples)` pairs
    pub const fn new(rows: &'static [(f64, Row<N>)]) -> Self {
        Self { rows }
    }

    fn row(&self, index: usize) -> VectorLookupTable<N> {
        VectorLookupTable::new(self.rows[index].1)
    }

    /// Bilinear reading at `(outer, inner)`, clamped on both keys
    pub fn get(&self, outer: f64, inner: f64) -> [f64; N] {
        match bracket(self.rows.len(), |i| self.rows[i].0, outer) {
            Bracket::First => self.row(0).get(inner),
            Bracket::Last => self.row(self.rows.len() - 1).get(inner),
            Bracket::Between { index, fraction } => {
                let lower = self.row(index).get(inner);
                let upper = self.row(index + 1).get(inner);
                core::array::from_fn(|c| lerp(lower[c], upper[c], fraction))
            }
        }
    }
}
