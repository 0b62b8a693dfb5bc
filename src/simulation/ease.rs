//! Easing and interpolation helpers used by the recoil return

use super::states::NVec3;

/// Cubic ease-out: 1 - (1 - p)^3, with `p` clamped to [0, 1]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Linear interpolation from `from` to `to` by `k`
pub fn lerp(from: &NVec3, to: &NVec3, k: f64) -> NVec3 {
    from + (to - from) * k
}
