use super::torus::{Torus32, dtot32};
use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};

/// Samples `DEGREE` torus coefficients uniformly over the whole torus.
pub fn uniform_torus_coefficients<const DEGREE: usize, R: Rng + ?Sized>(
    rng: &mut R,
) -> [Torus32; DEGREE] {
    let mut coeffs = [0; DEGREE];
    for coeff in &mut coeffs {
        *coeff = rng.random::<Torus32>();
    }
    coeffs
}

/// Samples `DEGREE` independent unbiased bits, one bit of generator output
/// per coefficient.
///
/// Bits are drawn in 32-bit words, so exactly `DEGREE` bits are consumed
/// when `DEGREE` is a multiple of 32. Smaller degrees still take one word.
pub fn binary_coefficients<const DEGREE: usize, R: Rng + ?Sized>(
    rng: &mut R,
) -> [i32; DEGREE] {
    let mut coeffs = [0; DEGREE];
    for chunk in coeffs.chunks_mut(32) {
        let word = rng.random::<u32>();
        for (j, coeff) in chunk.iter_mut().enumerate() {
            *coeff = ((word >> j) & 1) as i32;
        }
    }
    coeffs
}

/// Returns `message` shifted by one torus sample of `Normal(0, sigma)`.
///
/// `sigma` is measured on the torus (so `2^-20` is a small noise), and `0.0`
/// returns `message` unchanged.
pub fn gaussian32<R: Rng + ?Sized>(
    message: Torus32,
    sigma: f64,
    rng: &mut R,
) -> Result<Torus32, NormalError> {
    let normal = Normal::new(0.0, sigma)?;
    Ok(message.wrapping_add(dtot32(normal.sample(rng))))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::torus::t32tod;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn binary_coefficients_are_bits() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let coeffs = binary_coefficients::<256, _>(&mut rng);
        assert!(coeffs.iter().all(|&c| c == 0 || c == 1));
    }

    #[test]
    fn binary_coefficients_are_roughly_balanced() {
        const DEGREE: usize = 8192;
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let coeffs = binary_coefficients::<DEGREE, _>(&mut rng);
        let ones = coeffs.iter().filter(|&&c| c == 1).count();
        let ratio = ones as f64 / DEGREE as f64;
        assert!((ratio - 0.5).abs() < 0.05, "ratio of ones is {ratio}");
    }

    #[test]
    fn uniform_torus_coefficients_cover_both_halves() {
        const DEGREE: usize = 4096;
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let coeffs = uniform_torus_coefficients::<DEGREE, _>(&mut rng);

        let mut buckets = [0usize; 8];
        for &c in &coeffs {
            buckets[((c as u32) >> 29) as usize] += 1;
        }
        let expected = DEGREE as f64 / 8.0;
        for &count in &buckets {
            assert!(
                (count as f64 - expected).abs() <= expected * 0.30,
                "bucket count {count} too far from expected {expected}"
            );
        }
    }

    #[test]
    fn gaussian32_has_expected_spread() {
        const DEGREE: usize = 16_384;
        let std_dev = 2f64.powi(-10);
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let values: Vec<f64> = (0..DEGREE)
            .map(|_| t32tod(gaussian32(0, std_dev, &mut rng).unwrap()))
            .collect();
        let mean = values.iter().sum::<f64>() / DEGREE as f64;
        let variance =
            values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / DEGREE as f64;

        assert_abs_diff_eq!(mean, 0.0, epsilon = std_dev * 0.1);
        assert_abs_diff_eq!(variance.sqrt(), std_dev, epsilon = std_dev * 0.1);
    }

    #[test]
    fn gaussian_with_zero_std_dev_is_exact() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(gaussian32(0, 0.0, &mut rng).unwrap(), 0);
        assert_eq!(gaussian32(12345, 0.0, &mut rng).unwrap(), 12345);
    }

    #[test]
    fn gaussian_rejects_invalid_std_dev() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert!(gaussian32(0, -1.0, &mut rng).is_err());
        assert!(gaussian32(0, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn seeded_sampling_is_deterministic() {
        let mut rng1 = ChaCha20Rng::seed_from_u64(42);
        let mut rng2 = ChaCha20Rng::seed_from_u64(42);
        assert_eq!(
            uniform_torus_coefficients::<64, _>(&mut rng1),
            uniform_torus_coefficients::<64, _>(&mut rng2)
        );
    }
}
