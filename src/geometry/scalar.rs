//! Scalar helpers: clamping, tolerance comparisons and seed hashing

/// Tolerance for [`approx_equal`] and [`approx_zero`]
///
/// The Gabriel and relative-neighborhood tests treat a point this close to
/// a constraint boundary as not violating it, so edges survive at exact
/// ties (regular grids, cocircular points).
pub const EPSILON: f64 = 1e-6;

/// Bound `v` to `[lo, hi]`
///
/// Total for any input: unlike [`f64::clamp`] it never panics, and a NaN
/// `v` comes back as `lo`.
#[inline]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        return lo;
    }
    v.max(lo).min(hi)
}

/// True when `a` and `b` differ by less than [`EPSILON`]
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// True when `v` is within [`EPSILON`] of zero
#[inline]
pub fn approx_zero(v: f64) -> bool {
    v.abs() < EPSILON
}

/// Mix a seed into a well-distributed 32-bit value
///
/// Consecutive seeds map to unrelated outputs, so `seed` and `seed + 1`
/// produce unrelated random streams once fed to an RNG.
#[inline]
pub fn seed_hash(seed: u32) -> u32 {
    let mut x = seed.wrapping_add(0x9e37_79b9);
    x = (x ^ (x >> 16)).wrapping_mul(0x85eb_ca6b);
    x = (x ^ (x >> 13)).wrapping_mul(0xc2b2_ae35);
    x ^ (x >> 16)
}
