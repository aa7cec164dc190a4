//! Negacyclic multiplication through a complex FFT.
//!
//! Multiplication in `T[X]/(X^N + 1)` is a negacyclic convolution. Twisting
//! the inputs by powers of `ω = e^{iπ/N}` (so that `ω^N = -1`) turns it into a
//! plain cyclic convolution of length `N`, which a forward FFT, a pointwise
//! product and an inverse FFT compute in `O(N log N)`:
//!
//! - `a'_j = a_j · ω^j`, `b'_j = b_j · ω^j`
//! - `c' = IFFT(FFT(a') ⊙ FFT(b')) / N`
//! - `c_j = c'_j · ω^{-j}`
//!
//! Torus coefficients are 32-bit, so each one is split into two signed 16-bit
//! halves `t = t_hi · 2^16 + t_lo`. When `N · 2^15 · max|p_i|` stays below
//! [`EXACT_BOUND`] the integer polynomial is convolved as is, against both
//! halves. Otherwise `p` is split the same way and, since `2^32 ≡ 0` on the
//! torus, only three products survive:
//!
//! ```text
//! p ⊗ t = (t_hi ⊗ p_lo + t_lo ⊗ p_hi) · 2^16 + t_lo ⊗ p_lo
//! ```
//!
//! Every intermediate is then below `2 · N · 2^30`. In both cases it is far
//! inside the 53-bit mantissa, and rounding the real parts recovers the exact
//! integer convolution.
use crate::math::Torus32;
use crate::rings::{IntPolynomial, PolyMultiplier, TorusPolynomial};
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::{f64::consts::PI, fmt, sync::Arc};

/// FFT plans and twisting factors for degree `N`.
#[derive(Clone)]
pub struct FftPolyMultiplier<const N: usize> {
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    twist: Vec<Complex64>,
}

impl<const N: usize> FftPolyMultiplier<N> {
    pub fn new() -> Self {
        let mut planner = FftPlanner::<f64>::new();
        let forward = planner.plan_fft_forward(N);
        let inverse = planner.plan_fft_inverse(N);
        let twist = (0..N)
            .map(|j| Complex64::from_polar(1.0, PI * j as f64 / N as f64))
            .collect();
        Self {
            forward,
            inverse,
            twist,
        }
    }

    fn forward_twisted(&self, values: impl Iterator<Item = f64>) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> =
            values.zip(self.twist.iter()).map(|(v, &w)| w * v).collect();
        self.forward.process(&mut buffer);
        buffer
    }

    fn inverse_untwisted(&self, mut buffer: Vec<Complex64>) -> [i64; N] {
        self.inverse.process(&mut buffer);
        let scale = 1.0 / N as f64;
        let mut out = [0i64; N];
        for ((o, &v), &w) in out.iter_mut().zip(buffer.iter()).zip(self.twist.iter()) {
            *o = ((v * w.conj()).re * scale).round() as i64;
        }
        out
    }
}

// Splits `t` as `hi · 2^16 + lo` (wrapping) with both halves in `[-2^15, 2^15)`.
fn split_torus(t: Torus32) -> (i32, i32) {
    let lo = t.wrapping_shl(16) >> 16;
    let hi = t.wrapping_sub(lo) >> 16;
    (hi, lo)
}

/// Largest convolution magnitude the single-split path may reach.
pub const EXACT_BOUND: f64 = (1u64 << 47) as f64;

fn pointwise(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    a.iter().zip(b).map(|(&x, &y)| x * y).collect()
}

impl<const N: usize> FftPolyMultiplier<N> {
    fn split_forward(&self, values: &[i32; N]) -> (Vec<Complex64>, Vec<Complex64>) {
        let halves: Vec<(i32, i32)> = values.iter().map(|&c| split_torus(c)).collect();
        let hi = self.forward_twisted(halves.iter().map(|&(hi, _)| hi as f64));
        let lo = self.forward_twisted(halves.iter().map(|&(_, lo)| lo as f64));
        (hi, lo)
    }
}

// Whether `p` is small enough to be convolved without splitting.
fn fits_single_split<const N: usize>(p: &IntPolynomial<N>) -> bool {
    let max = p.coeffs().iter().map(|c| c.unsigned_abs()).max().unwrap_or(0);
    N as f64 * 32768.0 * max as f64 <= EXACT_BOUND
}

impl<const N: usize> PolyMultiplier<N> for FftPolyMultiplier<N> {
    fn mul_r(&self, p: &IntPolynomial<N>, t: &TorusPolynomial<N>) -> TorusPolynomial<N> {
        let (t_hi, t_lo) = self.split_forward(t.coeffs());

        // shifted is scaled by 2^16 on recombination, low is added as is
        let (shifted, low) = if fits_single_split(p) {
            let p_hat = self.forward_twisted(p.coeffs().iter().map(|&c| c as f64));
            (pointwise(&t_hi, &p_hat), pointwise(&t_lo, &p_hat))
        } else {
            let (p_hi, p_lo) = self.split_forward(p.coeffs());
            let cross = t_hi
                .iter()
                .zip(&p_lo)
                .zip(t_lo.iter().zip(&p_hi))
                .map(|((&th, &pl), (&tl, &ph))| th * pl + tl * ph)
                .collect();
            (cross, pointwise(&t_lo, &p_lo))
        };

        let shifted = self.inverse_untwisted(shifted);
        let low = self.inverse_untwisted(low);

        let mut result = TorusPolynomial::zero();
        for ((out, &hi), &lo) in result
            .coeffs_mut()
            .iter_mut()
            .zip(shifted.iter())
            .zip(low.iter())
        {
            *out = (hi as Torus32)
                .wrapping_shl(16)
                .wrapping_add(lo as Torus32);
        }
        result
    }
}

impl<const N: usize> Default for FftPolyMultiplier<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for FftPolyMultiplier<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FftPolyMultiplier")
            .field("degree", &N)
            .finish()
    }
}
