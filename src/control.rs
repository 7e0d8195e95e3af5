//! Control-authority evaluation for the ZEM/ZEV optimal guidance law.
//!
//! This module contains the single closed-form computation: the corrective
//! acceleration command obtained from the Zero-Effort-Miss and
//! Zero-Effort-Velocity vectors and the remaining time-to-go.

use nalgebra::{RealField, Vector3};

use crate::gains::GuidanceGains;

/// Compute the OGL control authority with the optimal constant-gravity gains.
///
/// Evaluates
///
/// ```text
/// u = (6 / t_go^2) * ZEM + (-2 / t_go) * ZEV
/// ```
///
/// which is the energy-optimal feedback command for constant gravity.
///
/// `time_to_go` must be finite and non-zero; the formula divides by it and
/// by its square, so a zero value yields infinities or NaNs per ordinary
/// floating-point semantics rather than an error. Validating the TTG is the
/// caller's responsibility.
///
/// # Arguments
/// * `zero_effort_miss` - Predicted positional miss at arrival with no further control
/// * `zero_effort_velocity` - Predicted velocity miss at arrival with no further control
/// * `time_to_go` - Remaining time until intended arrival (must be > 0)
///
/// # Returns
/// The corrective acceleration command, as a freshly constructed vector.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use zemzev::compute_control_authority;
///
/// let zem = Vector3::new(-21.163, 9.887, -0.613);
/// let zev = Vector3::new(-1.244, -0.112, 3.119);
///
/// let u = compute_control_authority(&zem, &zev, 12.516);
/// ```
#[inline]
pub fn compute_control_authority<N: RealField>(
    zero_effort_miss: &Vector3<N>,
    zero_effort_velocity: &Vector3<N>,
    time_to_go: N,
) -> Vector3<N> {
    compute_control_authority_with_gains(
        zero_effort_miss,
        zero_effort_velocity,
        time_to_go,
        &GuidanceGains::optimal(),
    )
}

/// Compute the generalized ZEM/ZEV control authority with explicit gains.
///
/// Evaluates
///
/// ```text
/// u = (k_r / t_go^2) * ZEM + (k_v / t_go) * ZEV
/// ```
///
/// Gain pairs other than the optimal `(6, -2)` emulate related members of
/// the generalized ZEM/ZEV guidance family (Guo et al., 2013).
///
/// The evaluation is linear in the miss state: scaling both `ZEM` and `ZEV`
/// by a scalar scales the command by the same scalar.
///
/// # Arguments
/// * `zero_effort_miss` - Predicted positional miss at arrival with no further control
/// * `zero_effort_velocity` - Predicted velocity miss at arrival with no further control
/// * `time_to_go` - Remaining time until intended arrival (must be > 0)
/// * `gains` - ZEM and ZEV term gains
///
/// # Returns
/// The corrective acceleration command, as a freshly constructed vector.
#[inline]
pub fn compute_control_authority_with_gains<N: RealField>(
    zero_effort_miss: &Vector3<N>,
    zero_effort_velocity: &Vector3<N>,
    time_to_go: N,
    gains: &GuidanceGains<N>,
) -> Vector3<N> {
    let miss_coefficient = gains.miss_gain.clone() / (time_to_go.clone() * time_to_go.clone());
    let velocity_coefficient = gains.velocity_gain.clone() / time_to_go;

    Vector3::new(
        miss_coefficient.clone() * zero_effort_miss[0].clone()
            + velocity_coefficient.clone() * zero_effort_velocity[0].clone(),
        miss_coefficient.clone() * zero_effort_miss[1].clone()
            + velocity_coefficient.clone() * zero_effort_velocity[1].clone(),
        miss_coefficient * zero_effort_miss[2].clone()
            + velocity_coefficient * zero_effort_velocity[2].clone(),
    )
}
