//! TLWE encryption, phase and decryption.
//!
//! For a key `s = (s_0, …, s_{k-1})` a sample `(a, b)` encrypts `μ` when
//!
//! ```text
//! b = Σ a_i ⊗ s_i + μ + e,   e ~ Normal(0, α) coefficient-wise
//! ```
//!
//! so its phase `b - Σ a_i ⊗ s_i = μ + e` recovers the message up to noise,
//! and rounding to the nearest multiple of `1 / Msize` removes the noise as
//! long as it stays below half a bucket.
use super::errors::{TLweError, TLweResult};
use super::types::TLweSample;
use super::variance::Variance;
use crate::keys::TLweKey;
use crate::math::{Torus32, approx_phase, gaussian32};
use crate::rings::{PolyMultiplier, TorusPolynomial};
use rand::{CryptoRng, Rng};

fn check_alpha(alpha: f64) -> TLweResult<()> {
    if alpha.is_finite() && alpha >= 0.0 {
        Ok(())
    } else {
        Err(TLweError::InvalidStandardDeviation { alpha })
    }
}

fn check_msize(msize: u32) -> TLweResult<()> {
    if msize >= 2 {
        Ok(())
    } else {
        Err(TLweError::InvalidMessageSpace { msize })
    }
}

// ─── Encryption ───────────────────────────────────────────────────────────────

impl<const N: usize> TLweKey<N> {
    /// Writes a fresh encryption of zero with noise `alpha` into `result`.
    ///
    /// Body noise is sampled first, then each mask is drawn uniformly and its
    /// product with the matching key polynomial is folded into the body.
    pub fn encrypt_zero_into<R: Rng + CryptoRng + ?Sized>(
        &self,
        result: &mut TLweSample<N>,
        alpha: f64,
        rng: &mut R,
    ) -> TLweResult<()> {
        check_alpha(alpha)?;
        result.check_params(self.params())?;
        if !self.params().noise_in_bounds(alpha) {
            tracing::warn!(
                alpha,
                alpha_min = self.params().alpha_min(),
                alpha_max = self.params().alpha_max(),
                "encryption noise outside advisory bounds"
            );
        }
        tracing::trace!(alpha, degree = N, "tlwe encrypt zero");

        let multiplier = self.params().multiplier();
        let (mask, body) = result.mask_and_body_mut();
        for b in body.coeffs_mut().iter_mut() {
            *b = gaussian32(0, alpha, rng)
                .map_err(|_| TLweError::InvalidStandardDeviation { alpha })?;
        }
        for (a, s) in mask.iter_mut().zip(self.polynomials()) {
            a.fill_uniform(rng);
            multiplier.add_mul_r(body, s, a);
        }

        result.set_variance(Variance::from_standard_dev(alpha));
        Ok(())
    }

    pub fn encrypt_zero<R: Rng + CryptoRng + ?Sized>(
        &self,
        alpha: f64,
        rng: &mut R,
    ) -> TLweResult<TLweSample<N>> {
        let mut result = TLweSample::new(self.params());
        self.encrypt_zero_into(&mut result, alpha, rng)?;
        Ok(result)
    }

    /// Encrypts the polynomial `message` into `result`.
    pub fn encrypt_into<R: Rng + CryptoRng + ?Sized>(
        &self,
        result: &mut TLweSample<N>,
        message: &TorusPolynomial<N>,
        alpha: f64,
        rng: &mut R,
    ) -> TLweResult<()> {
        self.encrypt_zero_into(result, alpha, rng)?;
        *result.body_mut() += message;
        Ok(())
    }

    pub fn encrypt<R: Rng + CryptoRng + ?Sized>(
        &self,
        message: &TorusPolynomial<N>,
        alpha: f64,
        rng: &mut R,
    ) -> TLweResult<TLweSample<N>> {
        let mut result = TLweSample::new(self.params());
        self.encrypt_into(&mut result, message, alpha, rng)?;
        Ok(result)
    }

    /// Encrypts the constant polynomial `message · X^0` into `result`.
    pub fn encrypt_constant_into<R: Rng + CryptoRng + ?Sized>(
        &self,
        result: &mut TLweSample<N>,
        message: Torus32,
        alpha: f64,
        rng: &mut R,
    ) -> TLweResult<()> {
        self.encrypt_zero_into(result, alpha, rng)?;
        let b0 = &mut result.body_mut().coeffs_mut()[0];
        *b0 = b0.wrapping_add(message);
        Ok(())
    }

    pub fn encrypt_constant<R: Rng + CryptoRng + ?Sized>(
        &self,
        message: Torus32,
        alpha: f64,
        rng: &mut R,
    ) -> TLweResult<TLweSample<N>> {
        let mut result = TLweSample::new(self.params());
        self.encrypt_constant_into(&mut result, message, alpha, rng)?;
        Ok(result)
    }
}

// ─── Phase & decryption ───────────────────────────────────────────────────────

impl<const N: usize> TLweKey<N> {
    /// Writes `b - Σ a_i ⊗ s_i` into `phase`.
    pub fn phase_into(
        &self,
        phase: &mut TorusPolynomial<N>,
        sample: &TLweSample<N>,
    ) -> TLweResult<()> {
        sample.check_params(self.params())?;
        let multiplier = self.params().multiplier();
        phase.copy_from(sample.body());
        for (a, s) in sample.mask().iter().zip(self.polynomials()) {
            multiplier.sub_mul_r(phase, s, a);
        }
        Ok(())
    }

    pub fn phase(&self, sample: &TLweSample<N>) -> TLweResult<TorusPolynomial<N>> {
        let mut phase = TorusPolynomial::zero();
        self.phase_into(&mut phase, sample)?;
        Ok(phase)
    }

    /// Decrypts `sample` into `result`, rounding every coefficient to the
    /// nearest multiple of `1 / msize`.
    pub fn decrypt_into(
        &self,
        result: &mut TorusPolynomial<N>,
        sample: &TLweSample<N>,
        msize: u32,
    ) -> TLweResult<()> {
        check_msize(msize)?;
        self.phase_into(result, sample)?;
        result.approx_phase_assign(msize);
        tracing::trace!(msize, variance = sample.current_variance(), "tlwe decrypt");
        Ok(())
    }

    pub fn decrypt(
        &self,
        sample: &TLweSample<N>,
        msize: u32,
    ) -> TLweResult<TorusPolynomial<N>> {
        let mut result = TorusPolynomial::zero();
        self.decrypt_into(&mut result, sample, msize)?;
        Ok(result)
    }

    /// Decrypts only the constant coefficient of `sample`.
    pub fn decrypt_constant(&self, sample: &TLweSample<N>, msize: u32) -> TLweResult<Torus32> {
        check_msize(msize)?;
        let phase = self.phase(sample)?;
        tracing::trace!(msize, variance = sample.current_variance(), "tlwe decrypt constant");
        Ok(approx_phase(phase.coeffs()[0], msize))
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
