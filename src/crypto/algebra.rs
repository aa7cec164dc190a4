//! Linear operators on TLWE samples.
//!
//! Every operator acts on all `k + 1` components of the destination and keeps
//! its variance estimate in step, following the rules in [`super::variance`].
//! Operand ranks are checked against the parameters before anything is
//! written, so a failed call leaves the destination untouched.
use super::errors::TLweResult;
use super::params::TLweParams;
use super::types::TLweSample;
use super::variance::Variance;
use crate::math::Torus32;
use crate::rings::{IntPolynomial, PolyMultiplier, TorusPolynomial};

impl<const N: usize> TLweSample<N> {
    fn check_operand(&self, sample: &Self, params: &TLweParams<N>) -> TLweResult<()> {
        self.check_params(params)?;
        sample.check_params(params)
    }

    // ─── Initialization ───────────────────────────────────────────────────────

    /// Sets every component to zero and the variance to 0.
    pub fn clear(&mut self, params: &TLweParams<N>) -> TLweResult<()> {
        self.check_params(params)?;
        self.components_mut().for_each(TorusPolynomial::clear);
        self.set_variance(Variance::ZERO);
        Ok(())
    }

    pub fn copy_from(&mut self, sample: &Self, params: &TLweParams<N>) -> TLweResult<()> {
        self.check_operand(sample, params)?;
        for (dst, src) in self.components_mut().zip(sample.components()) {
            dst.copy_from(src);
        }
        self.set_variance(sample.variance());
        Ok(())
    }

    /// `self ← (0, …, 0, mu)`, a valid noiseless encryption of `mu` under
    /// every key.
    pub fn noiseless_trivial(
        &mut self,
        mu: &TorusPolynomial<N>,
        params: &TLweParams<N>,
    ) -> TLweResult<()> {
        self.check_params(params)?;
        let (mask, body) = self.mask_and_body_mut();
        mask.iter_mut().for_each(TorusPolynomial::clear);
        body.copy_from(mu);
        self.set_variance(Variance::ZERO);
        Ok(())
    }

    /// `self ← (0, …, 0, mu · X^0)`
    pub fn noiseless_trivial_constant(
        &mut self,
        mu: Torus32,
        params: &TLweParams<N>,
    ) -> TLweResult<()> {
        self.noiseless_trivial(&TorusPolynomial::constant(mu), params)
    }

    // ─── Additive operators ───────────────────────────────────────────────────

    pub fn add_to(&mut self, sample: &Self, params: &TLweParams<N>) -> TLweResult<()> {
        self.check_operand(sample, params)?;
        for (dst, src) in self.components_mut().zip(sample.components()) {
            *dst += src;
        }
        self.set_variance(self.variance().accumulate(sample.variance()));
        Ok(())
    }

    pub fn sub_to(&mut self, sample: &Self, params: &TLweParams<N>) -> TLweResult<()> {
        self.check_operand(sample, params)?;
        for (dst, src) in self.components_mut().zip(sample.components()) {
            *dst -= src;
        }
        self.set_variance(self.variance().accumulate(sample.variance()));
        Ok(())
    }

    /// `self += p · sample`
    pub fn add_mul_to(&mut self, p: i32, sample: &Self, params: &TLweParams<N>) -> TLweResult<()> {
        self.check_operand(sample, params)?;
        for (dst, src) in self.components_mut().zip(sample.components()) {
            dst.add_mul_z_assign(p, src);
        }
        self.set_variance(self.variance().accumulate_scaled(p, sample.variance()));
        Ok(())
    }

    /// `self -= p · sample`
    pub fn sub_mul_to(&mut self, p: i32, sample: &Self, params: &TLweParams<N>) -> TLweResult<()> {
        self.check_operand(sample, params)?;
        for (dst, src) in self.components_mut().zip(sample.components()) {
            dst.sub_mul_z_assign(p, src);
        }
        self.set_variance(self.variance().accumulate_scaled(p, sample.variance()));
        Ok(())
    }

    // ─── Ring operators ───────────────────────────────────────────────────────

    /// `self += p ⊗ sample`, multiplied through the backend held by `params`.
    pub fn add_mul_r_to(
        &mut self,
        p: &IntPolynomial<N>,
        sample: &Self,
        params: &TLweParams<N>,
    ) -> TLweResult<()> {
        self.check_operand(sample, params)?;
        let multiplier = params.multiplier();
        for (dst, src) in self.components_mut().zip(sample.components()) {
            multiplier.add_mul_r(dst, p, src);
        }
        self.set_variance(
            self.variance()
                .accumulate_poly_scaled(p, sample.variance()),
        );
        Ok(())
    }

    /// `self ← (X^ai - 1) ⊗ sample`
    ///
    /// The variance estimate of `self` is left as it was. Callers that need
    /// a bound for the result install it with [`Self::set_variance`].
    pub fn mul_by_xai_minus_one(
        &mut self,
        ai: i32,
        sample: &Self,
        params: &TLweParams<N>,
    ) -> TLweResult<()> {
        self.check_operand(sample, params)?;
        for (dst, src) in self.components_mut().zip(sample.components()) {
            dst.mul_by_xai_minus_one(ai, src);
        }
        Ok(())
    }

    /// `self ← X^ai ⊗ sample`, carrying over the variance of `sample`.
    pub fn mul_by_xai(&mut self, ai: i32, sample: &Self, params: &TLweParams<N>) -> TLweResult<()> {
        self.check_operand(sample, params)?;
        for (dst, src) in self.components_mut().zip(sample.components()) {
            dst.mul_by_xai(ai, src);
        }
        self.set_variance(sample.variance());
        Ok(())
    }
}
