use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::sync::Arc;
use toy_tlwe::{
    IntPolynomial, MulBackend, TLweError, TLweKey, TLweParams, TLweSample, TorusPolynomial,
    mod_switch_from_torus32, mod_switch_to_torus32,
};

#[test]
fn test_noiseless_zero_encryptions_add_to_zero() {
    let mut rng = ChaCha20Rng::seed_from_u64(42); // Fixed seed for reproducibility
    let params = Arc::new(TLweParams::<4>::new(1, 0.0, 1.0).unwrap());
    let key = TLweKey::generate(params.clone(), &mut rng);

    let mut c1 = key.encrypt_zero(0.0, &mut rng).unwrap();
    let c2 = key.encrypt_zero(0.0, &mut rng).unwrap();
    c1.add_to(&c2, &params).unwrap();

    assert_eq!(key.decrypt(&c1, 2).unwrap(), TorusPolynomial::zero());
    assert_eq!(c1.current_variance(), 0.0);
}

#[test]
fn test_trivial_half_decrypts_exactly() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let params = Arc::new(TLweParams::<4>::new(1, 0.0, 1.0).unwrap());
    let key = TLweKey::generate(params.clone(), &mut rng);

    // 0.5 on the torus
    let half = i32::MIN;
    let mut c = TLweSample::new(&params);
    c.noiseless_trivial_constant(half, &params).unwrap();
    assert_eq!(key.decrypt_constant(&c, 2).unwrap(), half);
}

#[test]
fn test_linear_combination_of_bits() {
    // Evaluates 3·b0 - b1 + X·b2 over Z/8 with realistic parameters
    const N: usize = 1024;
    const MSIZE: u32 = 8;
    let alpha = 2f64.powi(-25);
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    for backend in [MulBackend::Naive, MulBackend::Fft] {
        let params = Arc::new(
            TLweParams::<N>::builder()
                .mask_rank(1)
                .backend(backend)
                .build()
                .unwrap(),
        );
        let key = TLweKey::generate(params.clone(), &mut rng);
        let bits = [1, 1, 1];
        let samples: Vec<_> = bits
            .iter()
            .map(|&b| {
                key.encrypt_constant(mod_switch_to_torus32(b, MSIZE), alpha, &mut rng)
                    .unwrap()
            })
            .collect();

        let mut acc = TLweSample::new(&params);
        acc.add_mul_to(3, &samples[0], &params).unwrap();
        acc.sub_to(&samples[1], &params).unwrap();
        let mut x = IntPolynomial::<N>::zero();
        x.coeffs_mut()[1] = 1;
        acc.add_mul_r_to(&x, &samples[2], &params).unwrap();

        let decrypted = key.decrypt(&acc, MSIZE).unwrap();
        let coeffs: Vec<i32> = decrypted
            .coeffs()
            .iter()
            .map(|&c| mod_switch_from_torus32(c, MSIZE))
            .collect();
        assert_eq!(&coeffs[..3], &[2, 1, 0], "backend {backend:?}");
        assert!(coeffs[3..].iter().all(|&c| c == 0));

        let v = alpha * alpha;
        assert_eq!(acc.current_variance(), 9.0 * v + v + v);
    }
}

#[test]
fn test_ring_multiply_with_large_coefficients_matches_across_backends() {
    const N: usize = 1024;
    let mut rng = ChaCha20Rng::seed_from_u64(19);
    let naive = Arc::new(TLweParams::<N>::new(1, 0.0, 1.0).unwrap());
    let fft = TLweParams::<N>::with_backend(1, 0.0, 1.0, MulBackend::Fft).unwrap();
    let key = TLweKey::generate(naive.clone(), &mut rng);
    let c = key.encrypt_constant(1 << 29, 1e-6, &mut rng).unwrap();

    let p = IntPolynomial::new([(1 << 30) - 1; N]);
    let mut by_naive = TLweSample::new(&naive);
    by_naive.add_mul_r_to(&p, &c, &naive).unwrap();
    let mut by_fft = TLweSample::new(&fft);
    by_fft.add_mul_r_to(&p, &c, &fft).unwrap();
    assert_eq!(by_fft, by_naive);
}

#[test]
fn test_blind_rotation_style_accumulation() {
    // acc ← acc + (X^a - 1)·acc, with the noise bound installed by hand
    const N: usize = 64;
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let params = Arc::new(TLweParams::<N>::new(2, 0.0, 1.0).unwrap());
    let key = TLweKey::generate(params.clone(), &mut rng);

    let mu = mod_switch_to_torus32(1, 4);
    let mut acc = key.encrypt_constant(mu, 1e-7, &mut rng).unwrap();
    let mut tmp = TLweSample::new(&params);
    tmp.mul_by_xai_minus_one(5, &acc, &params).unwrap();
    tmp.set_variance(acc.variance());
    acc.add_to(&tmp, &params).unwrap();

    let mut expected = TorusPolynomial::zero();
    expected.coeffs_mut()[5] = mu;
    assert_eq!(key.decrypt(&acc, 4).unwrap(), expected);
    assert_eq!(acc.current_variance(), 2.0 * 1e-7 * 1e-7);
}

#[test]
fn test_error_cases() {
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    assert_eq!(
        TLweParams::<100>::new(1, 0.0, 1.0),
        Err(TLweError::InvalidDegree { degree: 100 })
    );
    assert_eq!(
        TLweParams::<8>::builder().mask_rank(0).build(),
        Err(TLweError::InvalidMaskRank { mask_rank: 0 })
    );

    let params = Arc::new(TLweParams::<8>::new(1, 0.0, 1.0).unwrap());
    let key = TLweKey::generate(params.clone(), &mut rng);
    assert_eq!(
        key.encrypt_zero(f64::INFINITY, &mut rng),
        Err(TLweError::InvalidStandardDeviation {
            alpha: f64::INFINITY
        })
    );

    let sample = key.encrypt_zero(1e-6, &mut rng).unwrap();
    assert_eq!(
        key.decrypt(&sample, 1),
        Err(TLweError::InvalidMessageSpace { msize: 1 })
    );

    let wide = TLweParams::<8>::new(3, 0.0, 1.0).unwrap();
    let mut other = TLweSample::new(&wide);
    assert_eq!(
        other.add_to(&sample, &wide),
        Err(TLweError::MaskRankMismatch {
            expected: 3,
            actual: 1
        })
    );

    let mut bad = IntPolynomial::<8>::zero();
    bad.coeffs_mut()[2] = 2;
    assert_eq!(
        TLweKey::from_polynomials(params, vec![bad]),
        Err(TLweError::NonBinaryKey {
            polynomial: 0,
            index: 2,
            value: 2
        })
    );
}
