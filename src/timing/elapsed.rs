//! Elapsed time split into minutes and seconds.

use std::fmt;
use std::time::Duration;

use super::format::py_float;

/// Elapsed wall-clock time, split for display.
///
/// Both parts stay floating point: `minutes` is whole-valued, `seconds` is
/// the remainder in `[0, 60)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elapsed {
    /// Whole minutes.
    pub minutes: f64,
    /// Remaining seconds.
    pub seconds: f64,
}

impl Elapsed {
    /// Split a duration given in seconds.
    pub fn from_secs_f64(secs: f64) -> Self {
        let (minutes, seconds) = divmod(secs, 60.0);
        Self { minutes, seconds }
    }

    /// Split a measured duration.
    pub fn from_duration(duration: Duration) -> Self {
        Self::from_secs_f64(duration.as_secs_f64())
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time taken: {} min {} sec",
            py_float(self.minutes),
            py_float(self.seconds)
        )
    }
}

/// Floor division with remainder on floats.
///
/// The remainder takes the sign of the divisor and the quotient is rounded
/// to the nearest whole value, so `q * y + r` reconstructs `x` as closely as
/// the float format allows.
pub fn divmod(x: f64, y: f64) -> (f64, f64) {
    let mut rem = x % y;
    let mut div = (x - rem) / y;

    if rem != 0.0 {
        if (y < 0.0) != (rem < 0.0) {
            rem += y;
            div -= 1.0;
        }
    } else {
        rem = 0.0_f64.copysign(y);
    }

    let quotient = if div != 0.0 {
        let mut floor = div.floor();
        if div - floor > 0.5 {
            floor += 1.0;
        }
        floor
    } else {
        0.0_f64.copysign(x / y)
    };

    (quotient, rem)
}
