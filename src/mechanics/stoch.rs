/// Stochastic mechanics: seeded draws on `bevy_prng::WyRand`.
/// Callers own the generator; nothing here touches ambient randomness,
/// so a fixed seed replays the same obstacle course.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

/// Fresh generator from a `u64` seed.
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Uniform draw in [0, 1) with 53 bits of precision.
#[inline]
pub fn unit01(rng: &mut WyRand) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Whole-number draw in [lo, hi), returned as `f64`.
/// Collapses to `lo` when the range holds fewer than one integer.
#[inline]
pub fn whole_in(rng: &mut WyRand, lo: f64, hi: f64) -> f64 {
    let lo = lo.ceil();
    let span = (hi.ceil() - lo).max(0.0);
    if span < 1.0 {
        return lo;
    }
    (lo + (unit01(rng) * span).floor()).min(lo + span - 1.0)
}

/// Gaussian(0,1) via Box-Muller.
#[inline]
pub fn gaussian01(rng: &mut WyRand) -> f64 {
    let u1 = unit01(rng).max(f64::MIN_POSITIVE);
    let u2 = unit01(rng);
    let r = (-2.0 * u1.ln()).sqrt();
    let t = 2.0 * std::f64::consts::PI * u2;
    r * t.cos()
}
