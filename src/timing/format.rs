//! Text rendering for timing reports.
//!
//! Timing lines are scraped by log tooling, so the float rendering follows
//! the toolkit's established shape exactly: integral values keep a trailing
//! `.0`, and exponent form carries an explicit sign and at least two digits.

/// Width of a separator line.
pub const SEPARATOR_WIDTH: usize = 80;

/// Character a separator line is made of.
pub const SEPARATOR_MARKER: char = '=';

/// Build a separator line of `width` markers.
pub fn separator(width: usize) -> String {
    std::iter::repeat(SEPARATOR_MARKER).take(width).collect()
}

/// Render a float the way the timing line expects.
///
/// `Debug` already produces the shortest round-trip digits and switches to
/// exponent form below `1e-4` and at or above `1e16`; only the exponent
/// needs reshaping (`1e-5` becomes `1e-05`, `1e16` becomes `1e+16`).
pub fn py_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}
