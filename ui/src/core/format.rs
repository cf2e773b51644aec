//! Formatting helpers for presenting CO₂ amounts and their equivalents.

/// Render `value` with exactly `digits` decimals.
///
/// Follows JavaScript `Number.prototype.toFixed`: exact binary midpoints
/// (e.g. `0.0625` at 3 digits) round away from zero. Every other value goes
/// through the correctly rounded `{:.N}` formatter.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let magnitude = value.abs();
    let scale = 10f64.powi(digits as i32);
    let midpoint = (magnitude * scale).floor() + 0.5;
    let body = if magnitude.mul_add(scale, -midpoint) == 0.0 {
        let rounded = (midpoint + 0.5) / scale;
        format!("{rounded:.digits$}")
    } else {
        format!("{magnitude:.digits$}")
    };

    if value.is_sign_negative() && body.chars().any(|c| matches!(c, '1'..='9')) {
        format!("-{body}")
    } else {
        body
    }
}

/// Shortest round-trip rendering of an amount as the backend sent it
/// (`1.2` stays `1.2`, `5.0` becomes `5`).
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{value}")
}
