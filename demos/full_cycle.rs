use std::sync::Arc;
use toy_tlwe::{
    IntPolynomial, MulBackend, TLweKey, TLweParams, TLweSample, TorusPolynomial,
    mod_switch_from_torus32, mod_switch_to_torus32,
};
use tracing_subscriber::EnvFilter;

const DEGREE: usize = 1024;
const MSIZE: u32 = 8;

fn decode(poly: &TorusPolynomial<DEGREE>, count: usize) -> Vec<i32> {
    poly.coeffs()[..count]
        .iter()
        .map(|&c| mod_switch_from_torus32(c, MSIZE))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=toy_tlwe=trace shows every encryption and decryption
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let params = Arc::new(
        TLweParams::<DEGREE>::builder()
            .mask_rank(1)
            .backend(MulBackend::Fft)
            .build()?,
    );
    let mut rng = rand::rng();
    let key = TLweKey::generate(params.clone(), &mut rng);
    let alpha = 2f64.powi(-25);

    // Messages in Z/8, one per coefficient
    let values1 = [1, 2, 3, 4];
    let values2 = [3, 3, 1, 0];
    let encode = |values: &[i32]| {
        let mut poly = TorusPolynomial::<DEGREE>::zero();
        for (c, &v) in poly.coeffs_mut().iter_mut().zip(values) {
            *c = mod_switch_to_torus32(v, MSIZE);
        }
        poly
    };

    let ct1 = key.encrypt(&encode(&values1), alpha, &mut rng)?;
    let ct2 = key.encrypt(&encode(&values2), alpha, &mut rng)?;

    // 2·ct1 + ct2
    let mut acc = TLweSample::new(&params);
    acc.add_mul_to(2, &ct1, &params)?;
    acc.add_to(&ct2, &params)?;
    let lin = key.decrypt(&acc, MSIZE)?;

    // X·ct1, which shifts coefficients up by one
    let mut x = IntPolynomial::<DEGREE>::zero();
    x.coeffs_mut()[1] = 1;
    let mut shifted = TLweSample::new(&params);
    shifted.add_mul_r_to(&x, &ct1, &params)?;
    let shift = key.decrypt(&shifted, MSIZE)?;

    // X^{-1}·ct1 via rotation
    let mut rotated = TLweSample::new(&params);
    rotated.mul_by_xai(-1, &ct1, &params)?;
    let rot = key.decrypt(&rotated, MSIZE)?;

    println!("values_1: {:?}", values1);
    println!("values_2: {:?}", values2);
    println!("2·v1 + v2 mod {MSIZE}: {:?}", decode(&lin, 4));
    println!("X·v1:                 {:?}", decode(&shift, 5));
    println!("X^-1·v1:              {:?}", decode(&rot, 4));
    println!(
        "noise std dev: fresh {:.3e}, after 2·ct1 + ct2 {:.3e}",
        ct1.variance().standard_dev(),
        acc.variance().standard_dev()
    );

    Ok(())
}
