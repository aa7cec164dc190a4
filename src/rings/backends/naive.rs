use crate::rings::{IntPolynomial, PolyMultiplier, TorusPolynomial};

/// Schoolbook negacyclic multiplication in wrapping `i32` arithmetic.
///
/// `O(N^2)` but exact for every input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaivePolyMultiplier;

impl NaivePolyMultiplier {
    fn accumulate<const N: usize>(
        result: &mut TorusPolynomial<N>,
        p: &IntPolynomial<N>,
        t: &TorusPolynomial<N>,
        negate: bool,
    ) {
        let out = result.coeffs_mut();
        for (i, &pi) in p.coeffs().iter().enumerate() {
            if pi == 0 {
                continue;
            }
            for (j, &tj) in t.coeffs().iter().enumerate() {
                let prod = pi.wrapping_mul(tj);
                // X^N = -1 in T[X]/(X^N + 1)
                let (pos, add) = if i + j < N {
                    (i + j, !negate)
                } else {
                    (i + j - N, negate)
                };
                out[pos] = if add {
                    out[pos].wrapping_add(prod)
                } else {
                    out[pos].wrapping_sub(prod)
                };
            }
        }
    }
}

impl<const N: usize> PolyMultiplier<N> for NaivePolyMultiplier {
    fn mul_r(&self, p: &IntPolynomial<N>, t: &TorusPolynomial<N>) -> TorusPolynomial<N> {
        let mut result = TorusPolynomial::zero();
        Self::accumulate(&mut result, p, t, false);
        result
    }

    fn add_mul_r(
        &self,
        result: &mut TorusPolynomial<N>,
        p: &IntPolynomial<N>,
        t: &TorusPolynomial<N>,
    ) {
        Self::accumulate(result, p, t, false);
    }

    fn sub_mul_r(
        &self,
        result: &mut TorusPolynomial<N>,
        p: &IntPolynomial<N>,
        t: &TorusPolynomial<N>,
    ) {
        Self::accumulate(result, p, t, true);
    }
}
