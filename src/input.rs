use std::num::IntErrorKind;

use crate::error::FlipError;

pub const MIN_VALUE: u16 = 1;
pub const MAX_VALUE: u16 = 20_000;

/// Parse the positional `intval` argument.
///
/// Accepts only ASCII digits (no sign, no whitespace, nothing trailing) and a
/// value in `[MIN_VALUE, MAX_VALUE]`. The range fits in 16 bits so no separate
/// width check is needed.
pub fn parse_value(raw: &str) -> Result<u16, FlipError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FlipError::InvalidNumber(raw.to_string()));
    }
    let value = match raw.parse::<u64>() {
        Ok(v) => v,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            return Err(FlipError::OutOfRange(raw.to_string()));
        }
        Err(_) => return Err(FlipError::InvalidNumber(raw.to_string())),
    };
    if value < u64::from(MIN_VALUE) || value > u64::from(MAX_VALUE) {
        return Err(FlipError::OutOfRange(raw.to_string()));
    }
    // In range, so the narrowing cannot fail.
    Ok(value as u16)
}
