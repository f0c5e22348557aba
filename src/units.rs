//! Unit conversion factors used by the sentence codecs.
//!
//! Typed values are SI: radians, meters per second, meters and kelvin.

use std::f64::consts::PI;

pub const KNOTS_TO_MS: f64 = 1852.0 / 3600.0;
pub const MS_TO_KNOTS: f64 = 3600.0 / 1852.0;
pub const KMH_TO_MS: f64 = 1000.0 / 3600.0;
pub const MS_TO_KMH: f64 = 3600.0 / 1000.0;
pub const NM_TO_M: f64 = 1852.0;
pub const M_TO_NM: f64 = 1.0 / 1852.0;
pub const M_TO_FEET: f64 = 3.280_839_895_013_1;
pub const FEET_TO_M: f64 = 1.0 / M_TO_FEET;
pub const M_TO_FATHOMS: f64 = 0.546_806_649;
pub const FATHOMS_TO_M: f64 = 1.0 / M_TO_FATHOMS;
pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;
pub const CELSIUS_OFFSET: f64 = 273.15;

/// Wraps an angle in radians into `[0, 2π)`.
pub fn wrap_two_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(2.0 * PI);
    // rem_euclid may round up to exactly 2π for tiny negative inputs
    if wrapped >= 2.0 * PI { 0.0 } else { wrapped }
}
