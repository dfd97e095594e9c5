//! Named constants available to every expression.

use std::f64::consts;

/// The ratio of a circle's circumference to its diameter.
pub const PI: f64 = consts::PI;

/// Euler's number, the base of the natural logarithm.
pub const E: f64 = consts::E;

/// The ratio of a circle's circumference to its radius, `2 * pi`.
pub const TAU: f64 = consts::TAU;

/// The golden ratio, `(1 + sqrt(5)) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// All named constants, paired with their names.
pub const ALL: [(&str, f64); 4] = [
    ("pi", PI),
    ("e", E),
    ("tau", TAU),
    ("phi", PHI),
];
