/// Decimal places used by the conversion engine
pub const DEFAULT_DECIMALS: usize = 4;

/// Largest supported precision; keeps tie arithmetic inside u128
pub const MAX_DECIMALS: usize = 20;

/// Render `value` with exactly `decimals` fractional digits.
///
/// Rounds the exact binary value to nearest, with ties away from zero (what
/// `Number.prototype.toFixed` does). Negative zero renders without a sign.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let value = if value == 0.0 { 0.0 } else { value };

    match format_tie(value, decimals) {
        Some(rounded) => rounded,
        None => format!("{:.*}", decimals, value),
    }
}

/// Round to `decimals` places, returning the nearest f64 to the rounded decimal
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format_fixed(value, decimals).parse().unwrap_or(value)
}

// A value lies exactly halfway between two `decimals`-digit numbers only when
// it equals j / 2^(decimals + 1) for an odd integer j. Those are the inputs for
// which the std formatter may round to even, so they are rounded here instead.
fn format_tie(value: f64, decimals: usize) -> Option<String> {
    let scaled = value * 2f64.powi(decimals as i32 + 1);
    if !scaled.is_finite() || scaled.fract() != 0.0 || scaled.abs() >= 2f64.powi(53) {
        return None;
    }

    let j = scaled.abs() as u128;
    if j % 2 == 0 {
        return None;
    }

    // |value| * 10^decimals == j * 5^decimals / 2, bumped up to the next integer
    let n = (j * 5u128.pow(decimals as u32) + 1) / 2;
    let sign = if value < 0.0 { "-" } else { "" };
    if decimals == 0 {
        return Some(format!("{}{}", sign, n));
    }

    let scale = 10u128.pow(decimals as u32);
    Some(format!(
        "{}{}.{:0width$}",
        sign,
        n / scale,
        n % scale,
        width = decimals
    ))
}
