//! Real-convolution packing on top of the transform engine.
//!
//! `multiply` packs two real sequences into one complex signal (left in the
//! real lane, right in the imaginary lane) and recovers their product
//! spectrum with a single extraction pass. `square` pair-packs even/odd
//! elements of one sequence, halving the transform length. Both fall back to
//! brute force when the operands are too small for the transform to pay off.

use num_complex::Complex64;
use parking_lot::Mutex;

use crate::coefficient::Coefficient;
use crate::engine::{round_up_power_two, FftEngine};

/// Process-wide engine shared by the free-function API. All access is
/// serialized through this mutex; callers needing unshared tables can run
/// the methods on their own [`FftEngine`].
static ENGINE: Mutex<FftEngine> = Mutex::new(FftEngine::new());

/// Which real-signal term to pull out of a packed spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PackedTerm {
    /// Pointwise product of the two packed transforms (convolution).
    Product,
    /// Transform of the even-indexed subsequence (pair-packed square).
    Even,
    /// Transform of the odd-indexed subsequence (pair-packed square).
    Odd,
}

/// Pull one term out of the packed spectrum at `index`.
///
/// The paired index `(n - index) & (n - 1)` coincides with `index` at 0 and
/// `n / 2`; the extracted value is purely real there, so the formulas still
/// hold.
fn extract(n: usize, values: &[Complex64], index: usize, term: PackedTerm) -> Complex64 {
    let other = (n - index) & (n - 1);

    match term {
        PackedTerm::Product => {
            ((values[other] * values[other]).conj() - values[index] * values[index])
                * Complex64::new(0.0, 0.25)
        }
        PackedTerm::Even => {
            Complex64::new(0.5, 0.0)
                * Complex64::new(
                    values[index].re + values[other].re,
                    values[index].im - values[other].im,
                )
        }
        PackedTerm::Odd => {
            Complex64::new(0.0, -0.5)
                * Complex64::new(
                    values[index].re - values[other].re,
                    values[index].im + values[other].im,
                )
        }
    }
}

impl FftEngine {
    /// Convolve two real sequences, linearly or circularly.
    ///
    /// Empty input yields empty output. Identical operands delegate to
    /// [`FftEngine::square`] unless `circular` is set. Small operands are
    /// convolved directly; larger ones go through one packed forward
    /// transform and one inverse transform. Integral output types round to
    /// the nearest integer.
    pub fn multiply<I, O>(&mut self, left: &[I], right: &[I], circular: bool) -> Vec<O>
    where
        I: Coefficient,
        O: Coefficient,
    {
        if left.is_empty() || right.is_empty() {
            return Vec::new();
        }

        if left == right && !circular {
            return self.square(left);
        }

        let n = left.len();
        let m = right.len();
        let output_size = if circular {
            round_up_power_two(n.max(m))
        } else {
            n + m - 1
        };
        let size = round_up_power_two(output_size);

        #[allow(clippy::cast_precision_loss)]
        let brute_force_cost = 0.55 * n as f64 * m as f64;
        #[allow(clippy::cast_precision_loss)]
        let fft_cost = 1.5 * size as f64 * (f64::from(size.trailing_zeros()) + 3.0);

        if brute_force_cost < fft_cost {
            let mut result = vec![O::zero(); output_size];
            for i in 0..n {
                for j in 0..m {
                    let index = if i + j < output_size {
                        i + j
                    } else {
                        i + j - output_size
                    };
                    let product = O::from_f64(left[i].to_f64()) * O::from_f64(right[j].to_f64());
                    result[index] = result[index] + product;
                }
            }
            return result;
        }

        let mut values = vec![Complex64::new(0.0, 0.0); size];
        for (value, &x) in values.iter_mut().zip(left) {
            value.re = x.to_f64();
        }
        for (value, &x) in values.iter_mut().zip(right) {
            value.im = x.to_f64();
        }

        self.forward(size, &mut values);

        for i in 0..=size / 2 {
            let j = (size - i) & (size - 1);
            let product = extract(size, &values, i, PackedTerm::Product);
            values[i] = product;
            values[j] = product.conj();
        }

        self.inverse(size, &mut values);

        values[..output_size]
            .iter()
            .map(|value| O::from_f64(value.re))
            .collect()
    }

    /// Square a real sequence (its linear convolution with itself).
    ///
    /// Pair-packs even/odd elements so the transform length is sized by the
    /// input length rather than the output length, and inverts via
    /// `IFFT(V) = conj(FFT(conj(V))) / N`; the final conjugation is dropped
    /// because the unpacked outputs are real.
    pub fn square<I, O>(&mut self, input: &[I]) -> Vec<O>
    where
        I: Coefficient,
        O: Coefficient,
    {
        if input.is_empty() {
            return Vec::new();
        }

        let n = input.len();
        let output_size = 2 * n - 1;
        let size = round_up_power_two(n);

        #[allow(clippy::cast_precision_loss)]
        let brute_force_cost = 0.4 * n as f64 * n as f64;
        #[allow(clippy::cast_precision_loss)]
        let fft_cost = 2.0 * size as f64 * (f64::from(size.trailing_zeros()) + 3.0);

        if brute_force_cost < fft_cost {
            let mut result = vec![O::zero(); output_size];
            for i in 0..n {
                let x = O::from_f64(input[i].to_f64());
                result[2 * i] = result[2 * i] + x * x;
                for j in i + 1..n {
                    let product = x * O::from_f64(input[j].to_f64());
                    result[i + j] = result[i + j] + product;
                    result[i + j] = result[i + j] + product;
                }
            }
            return result;
        }

        self.prepare_roots(2 * size);

        let mut values = vec![Complex64::new(0.0, 0.0); size];
        let mut i = 0;
        while i < n {
            let re = input[i].to_f64();
            let im = if i + 1 < n { input[i + 1].to_f64() } else { 0.0 };
            values[i / 2] = Complex64::new(re, im);
            i += 2;
        }

        self.forward(size, &mut values);

        for i in 0..=size / 2 {
            let j = (size - i) & (size - 1);
            let even = extract(size, &values, i, PackedTerm::Even);
            let odd = extract(size, &values, i, PackedTerm::Odd);
            let twiddle = self.roots[size + i];
            let aux = even * even + odd * odd * twiddle * twiddle;
            let tmp = even * odd;
            values[i] = aux - Complex64::new(0.0, 2.0) * tmp;
            values[j] = aux.conj() - Complex64::new(0.0, 2.0) * tmp.conj();
        }

        #[allow(clippy::cast_precision_loss)]
        let scale = 1.0 / size as f64;
        for value in values.iter_mut() {
            *value = value.conj() * scale;
        }

        self.forward(size, &mut values);

        (0..output_size)
            .map(|i| {
                let value = if i % 2 == 0 {
                    values[i / 2].re
                } else {
                    values[i / 2].im
                };
                O::from_f64(value)
            })
            .collect()
    }
}

/// Convolve two real sequences on the shared process-wide engine.
///
/// See [`FftEngine::multiply`].
pub fn multiply<I, O>(left: &[I], right: &[I], circular: bool) -> Vec<O>
where
    I: Coefficient,
    O: Coefficient,
{
    ENGINE.lock().multiply(left, right, circular)
}

/// Square a real sequence on the shared process-wide engine.
///
/// See [`FftEngine::square`].
pub fn square<I, O>(input: &[I]) -> Vec<O>
where
    I: Coefficient,
    O: Coefficient,
{
    ENGINE.lock().square(input)
}
