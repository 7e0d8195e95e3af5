//! Gain constants for the ZEM/ZEV guidance family.
//!
//! The optimal constant-gravity gains come from the energy-optimal
//! derivation (Guo et al., 2013). Other pairs select related generalized
//! ZEM/ZEV feedback laws.

use nalgebra::RealField;

/// ZEM gain for the energy-optimal constant-gravity case.
pub const OPTIMAL_MISS_GAIN: f64 = 6.0;

/// ZEV gain for the energy-optimal constant-gravity case.
pub const OPTIMAL_VELOCITY_GAIN: f64 = -2.0;

/// Gain pair for the generalized ZEM/ZEV guidance law.
///
/// `miss_gain` premultiplies the ZEM term (divided by `t_go^2`),
/// `velocity_gain` premultiplies the ZEV term (divided by `t_go`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidanceGains<N: RealField> {
    /// Control gain for the Zero-Effort-Miss term
    pub miss_gain: N,
    /// Control gain for the Zero-Effort-Velocity term
    pub velocity_gain: N,
}

impl<N: RealField> GuidanceGains<N> {
    /// Create a gain pair for a generalized ZEM/ZEV law.
    #[inline]
    pub fn new(miss_gain: N, velocity_gain: N) -> Self {
        Self {
            miss_gain,
            velocity_gain,
        }
    }

    /// The optimal gains for constant gravity: `k_r = 6.0`, `k_v = -2.0`.
    #[inline]
    pub fn optimal() -> Self {
        Self {
            miss_gain: nalgebra::convert(OPTIMAL_MISS_GAIN),
            velocity_gain: nalgebra::convert(OPTIMAL_VELOCITY_GAIN),
        }
    }
}

impl<N: RealField> Default for GuidanceGains<N> {
    /// Defaults to the optimal constant-gravity gains.
    fn default() -> Self {
        Self::optimal()
    }
}
