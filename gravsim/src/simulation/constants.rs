//! Physical constants and the reference inner solar system
//!
//! All quantities are SI: meters, kilograms, seconds.

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Newtonian gravitational constant (m^3 kg^-1 s^-2), CODATA 2018
pub const G: f64 = 6.67430e-11;

/// Default tick used by the reference driver (seconds)
pub const DEFAULT_DT: f64 = 1.0e3;

/// Default number of ticks the driver runs
pub const DEFAULT_STEPS: usize = 200;

pub const SUN_MASS: f64 = 1.989e30;
pub const EARTH_MASS: f64 = 5.972e24;
pub const MARS_MASS: f64 = 6.4171e23;

/// Mean orbital radius of Earth (m)
pub const EARTH_ORBIT: f64 = 1.496e11;
/// Mean orbital speed of Earth (m/s)
pub const EARTH_SPEED: f64 = 29780.0;

pub const MARS_ORBIT: f64 = 2.279e11;
pub const MARS_SPEED: f64 = 24077.0;
