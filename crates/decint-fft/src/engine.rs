//! Core transform machinery: twiddle-root table, bit-reversal permutation,
//! and the iterative forward/inverse transforms.

use std::f64::consts::TAU;

use num_complex::Complex64;

/// Smallest power of two not less than `n`; `1` for `n == 0`.
#[must_use]
pub fn round_up_power_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Owns the twiddle-root table and the bit-reversal permutation cache.
///
/// The root table grows monotonically: `prepare_roots(n)` never rewrites an
/// existing entry, so spectra produced against a smaller table stay valid
/// after the table grows. The layout guarantees that during the butterfly
/// stage with half-block size `len`, the twiddle for position `i` within a
/// block is entry `len + i`.
///
/// Both tables are plain owned state; concurrent use must be serialized by
/// the caller. The crate-level [`multiply`](crate::multiply) and
/// [`square`](crate::square) functions wrap one process-wide engine in a
/// mutex for exactly that purpose.
#[derive(Debug)]
pub struct FftEngine {
    pub(crate) roots: Vec<Complex64>,
    bit_reverse: Vec<usize>,
}

impl FftEngine {
    /// Create an engine with empty caches.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            roots: Vec::new(),
            bit_reverse: Vec::new(),
        }
    }

    /// Grow the root table to at least `n` entries.
    ///
    /// `n` must be a power of two. Entries `[len, 2 * len)` hold the
    /// primitive `2 * len`-th roots of unity in butterfly order: entry
    /// `2 * i` mirrors entry `i` and entry `2 * i + 1` fills in the odd
    /// angle between its neighbors.
    pub fn prepare_roots(&mut self, n: usize) {
        if self.roots.is_empty() {
            self.roots.push(Complex64::new(0.0, 0.0));
            self.roots.push(Complex64::new(1.0, 0.0));
        }

        if self.roots.len() >= n {
            return;
        }

        debug_assert!(n.is_power_of_two());
        tracing::trace!(entries = n, "growing twiddle root table");

        let mut length = self.roots.len().trailing_zeros() as usize;
        self.roots.resize(n, Complex64::new(0.0, 0.0));

        while (1usize << length) < n {
            #[allow(clippy::cast_precision_loss)]
            let min_angle = TAU / (1usize << (length + 1)) as f64;
            let half = 1usize << (length - 1);

            for i in 0..half {
                let index = half + i;
                self.roots[2 * index] = self.roots[index];
                #[allow(clippy::cast_precision_loss)]
                let angle = min_angle * (2 * i + 1) as f64;
                self.roots[2 * index + 1] = Complex64::from_polar(1.0, angle);
            }

            length += 1;
        }
    }

    /// Apply the bit-reversal permutation to the first `n` elements.
    ///
    /// The permutation table is recomputed whenever its length differs from
    /// `n` (a power of two).
    pub fn bit_reorder(&mut self, n: usize, values: &mut [Complex64]) {
        if self.bit_reverse.len() != n {
            let length = n.trailing_zeros() as usize;
            self.bit_reverse = vec![0; n];

            for i in 1..n {
                self.bit_reverse[i] = self.bit_reverse[i >> 1] >> 1 | (i & 1) << (length - 1);
            }
        }

        for i in 0..n {
            let j = self.bit_reverse[i];
            if i < j {
                values.swap(i, j);
            }
        }
    }

    /// In-place iterative decimation-in-time transform of the first `n`
    /// elements. `n` must be a power of two. No normalization is applied;
    /// the inverse carries the `1/n` factor.
    pub fn forward(&mut self, n: usize, values: &mut [Complex64]) {
        debug_assert!(n.is_power_of_two());
        debug_assert!(values.len() >= n);

        self.prepare_roots(n);
        self.bit_reorder(n, values);

        let mut len = 1;
        while len < n {
            let mut start = 0;
            while start < n {
                for i in 0..len {
                    let even = values[start + i];
                    let odd = values[start + len + i] * self.roots[len + i];
                    values[start + i] = even + odd;
                    values[start + len + i] = even - odd;
                }
                start += 2 * len;
            }
            len *= 2;
        }
    }

    /// Inverse transform of a Hermitian-symmetric spectrum, as produced by
    /// the convolution packing: conjugate-normalize, fold the two spectrum
    /// halves into a half-length complex signal, transform once, and
    /// de-interleave the real outputs back to full length.
    ///
    /// On return every element is purely real (imaginary part zero).
    pub fn inverse(&mut self, n: usize, values: &mut [Complex64]) {
        debug_assert!(n.is_power_of_two());
        debug_assert!(values.len() >= n);

        #[allow(clippy::cast_precision_loss)]
        let scale = 1.0 / n as f64;
        for value in values[..n].iter_mut() {
            *value = value.conj() * scale;
        }

        let half = n / 2;
        for i in 0..half {
            let first = values[i] + values[half + i];
            let second = (values[i] - values[half + i]) * self.roots[half + i];
            values[i] = first + second * Complex64::new(0.0, 1.0);
        }

        self.forward(half, values);

        for i in (0..n).rev() {
            let unpacked = if i % 2 == 0 {
                values[i / 2].re
            } else {
                values[i / 2].im
            };
            values[i] = Complex64::new(unpacked, 0.0);
        }
    }
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}
