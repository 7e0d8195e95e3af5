//! # ZEM/ZEV Optimal Guidance Law
//!
//! A Rust implementation of the closed-form Optimal Guidance Law (OGL) for
//! spacecraft and missile terminal guidance.
//!
//! The OGL is the optimal control authority for the case of constant
//! gravity:
//!
//! ```text
//! u(t) = (k_r / t_go^2) * ZEM(t) + (k_v / t_go) * ZEV(t)
//! ```
//!
//! where `k_r = 6.0` and `k_v = -2.0` are the gains for the optimal case,
//! `t_go` is the Time-To-Go (TTG) to reach the target, `ZEM(t)` is the
//! Zero-Effort-Miss vector (the predicted positional miss at arrival if no
//! further control is applied) and `ZEV(t)` is the Zero-Effort-Velocity
//! vector (the predicted velocity miss under the same assumption). Other
//! gain pairs emulate related members of the generalized ZEM/ZEV guidance
//! family.
//!
//! The evaluation is stateless and pure: each call reads its inputs,
//! produces a fresh result vector, and touches no shared state, so any
//! number of concurrent invocations are safe without synchronization.
//!
//! ## References
//!
//! 1. Ebrahimi, B., Bahrami, M., Roshanian, J., "Optimal sliding-mode
//!    guidance with terminal velocity constraint for fixed-interval
//!    propulsive maneuvers," Acta Astronautica, Vol. 62, 2008, pp. 556–562,
//!    <https://doi.org/10.1016/j.actaastro.2008.02.002>
//!
//! 2. Furfaro, R., Gaudet, B., Wibben, D. R., Simo, J., "Development of
//!    Non-Linear Guidance Algorithms for Asteroids Close-Proximity
//!    Operations," AIAA Guidance, Navigation, and Control (GNC) Conference,
//!    Boston, MA, 2013, <https://doi.org/10.2514/6.2013-4711>
//!
//! 3. Guo, Y., Hawkins, M., Wie, B., "Optimal feedback guidance algorithms
//!    for planetary landing and asteroid intercept," Advances in the
//!    Astronautical Sciences, Vol. 142, 2012, pp. 2913–2931.
//!
//! 4. Guo, Y., Hawkins, M., Wie, B., "Applications of Generalized
//!    Zero-Effort-Miss/Zero-Effort-Velocity Feedback Guidance Algorithm,"
//!    Journal of Guidance, Control, and Dynamics, Vol. 36, No. 3, 2013,
//!    pp. 810–820, <https://doi.org/10.2514/1.58099>
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::Vector3;
//! use zemzev::{compute_control_authority, compute_control_authority_with_gains, GuidanceGains};
//!
//! // Predicted miss state at arrival and the remaining flight time
//! let zem: Vector3<f64> = Vector3::new(-21.163, 9.887, -0.613);
//! let zev = Vector3::new(-1.244, -0.112, 3.119);
//! let t_go = 12.516;
//!
//! // Optimal constant-gravity gains (k_r = 6, k_v = -2)
//! let u = compute_control_authority(&zem, &zev, t_go);
//! assert!(u.norm().is_finite());
//!
//! // Generalized ZEM/ZEV law with caller-chosen gains
//! let gains = GuidanceGains::new(4.0, -1.5);
//! let u_gen = compute_control_authority_with_gains(&zem, &zev, t_go, &gains);
//! assert!(u_gen.norm().is_finite());
//! ```

mod control;
mod gains;

pub use control::{compute_control_authority, compute_control_authority_with_gains};
pub use gains::{GuidanceGains, OPTIMAL_MISS_GAIN, OPTIMAL_VELOCITY_GAIN};
