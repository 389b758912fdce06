/// Decimal places kept when printing numbers into markup and CSS.
const PRECISION: f64 = 10_000.0;

/// Format a number for CSS or attribute output.
///
/// Rounds to four decimal places and drops trailing zeros, so `7.0` prints as
/// `7` and `33.333333` as `33.3333`. Negative zero prints as `0`.
pub fn fmt_num(v: f64) -> String {
    let r = (v * PRECISION).round() / PRECISION;
    if r == 0.0 {
        return "0".to_string();
    }
    let s = format!("{r:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// Return `true` for finite values `>= 0`.
pub fn is_non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
