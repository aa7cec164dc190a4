//! Fixed-point torus arithmetic.
//!
//! A [`Torus32`] value `x` stands for the real number `x / 2^32 mod 1`. All
//! arithmetic on it is wrapping `i32` arithmetic, which is exactly addition
//! modulo 1 on the torus. Overflow is never an error here.

/// A torus element in 32-bit fixed-point representation.
pub type Torus32 = i32;

const TWO_32: f64 = 4_294_967_296.0;

/// Width of one rounding bucket for a message space of size `msize`,
/// expressed over the 64-bit torus.
fn interval(msize: u32) -> u64 {
    assert!(msize >= 2, "interval: msize must be at least 2, got {msize}");
    ((1u64 << 63) / msize as u64) * 2
}

/// Converts a real number to its torus representative (fractional part).
pub fn dtot32(d: f64) -> Torus32 {
    ((d - d.trunc()) * TWO_32) as i64 as Torus32
}

/// Converts a torus element to a real number in `[-0.5, 0.5)`.
pub fn t32tod(x: Torus32) -> f64 {
    x as f64 / TWO_32
}

/// Rounds `phase` to the nearest multiple of `1 / msize`.
///
/// # Panics
///
/// Panics if `msize < 2`.
pub fn approx_phase(phase: Torus32, msize: u32) -> Torus32 {
    let interv = interval(msize);
    let half_interval = interv / 2;
    let mut phase64 = ((phase as u32 as u64) << 32).wrapping_add(half_interval);
    phase64 -= phase64 % interv;
    (phase64 >> 32) as u32 as Torus32
}

/// Encodes the message `mu` of `Z / msize` as the torus value `mu / msize`.
///
/// # Panics
///
/// Panics if `msize < 2`.
pub fn mod_switch_to_torus32(mu: i32, msize: u32) -> Torus32 {
    let interv = interval(msize);
    let phase64 = (mu as i64 as u64).wrapping_mul(interv);
    (phase64 >> 32) as u32 as Torus32
}

/// Decodes a torus value back to the nearest message in `[0, msize)`.
///
/// # Panics
///
/// Panics if `msize < 2`.
pub fn mod_switch_from_torus32(phase: Torus32, msize: u32) -> i32 {
    let interv = interval(msize);
    let half_interval = interv / 2;
    let phase64 = ((phase as u32 as u64) << 32).wrapping_add(half_interval);
    (phase64 / interv) as i32
}
