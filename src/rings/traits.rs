use super::{IntPolynomial, TorusPolynomial};

// Ring multiplication seam: every TLWE product of an integer polynomial by a
// torus polynomial goes through one of these.
pub trait PolyMultiplier<const N: usize> {
    /// Returns `p ⊗ t` in `T[X] / (X^N + 1)`.
    fn mul_r(&self, p: &IntPolynomial<N>, t: &TorusPolynomial<N>) -> TorusPolynomial<N>;

    /// `result += p ⊗ t`
    fn add_mul_r(
        &self,
        result: &mut TorusPolynomial<N>,
        p: &IntPolynomial<N>,
        t: &TorusPolynomial<N>,
    ) {
        let product = self.mul_r(p, t);
        *result += &product;
    }

    /// `result -= p ⊗ t`
    fn sub_mul_r(
        &self,
        result: &mut TorusPolynomial<N>,
        p: &IntPolynomial<N>,
        t: &TorusPolynomial<N>,
    ) {
        let product = self.mul_r(p, t);
        *result -= &product;
    }
}
