//! White point adaptation.
//!
//! sRGB is specified under D65 while the simulation's XYZ is relative to
//! D50. A von Kries style transform in the Bradford cone space joins the
//! two:
//!
//! ```rust
//! use dichroma_math::{BRADFORD, D50, D65, adapt_matrix};
//!
//! let to_d50 = adapt_matrix(BRADFORD, D65, D50);
//! assert!((to_d50 * D65).max_abs_diff_to(D50) < 1e-9);
//! ```

use crate::{Mat3, Vec3};

/// Daylight white (CIE D65), normalized to `Y = 1`.
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// Horizon light white (CIE D50), normalized to `Y = 1`.
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// XYZ to Bradford cone responses (Lam 1985).
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Bradford D65 to D50, rounded to seven decimals.
pub const D65_TO_D50_BRADFORD: Mat3 = Mat3::from_rows([
    [1.0478112, 0.0228866, -0.0501270],
    [0.0295424, 0.9904844, -0.0170491],
    [-0.0092345, 0.0150436, 0.7521316],
]);

/// XYZ to XYZ matrix that maps `from` white onto `to` white.
///
/// Both whites go into cone space through `cone`, each cone channel is
/// scaled by `to / from`, and the result comes back through `cone`'s
/// inverse. A singular `cone` matrix yields the identity.
pub fn adapt_matrix(cone: Mat3, from: Vec3, to: Vec3) -> Mat3 {
    let Some(back) = cone.inverse() else {
        return Mat3::IDENTITY;
    };
    let gain = (cone * to).zip_with(cone * from, |t, f| t / f);
    back * Mat3::diagonal(gain.x, gain.y, gain.z) * cone
}
