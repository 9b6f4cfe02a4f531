//! Field validators used by the `validator` derives on request payloads.

use rust_decimal::Decimal;
use validator::ValidationError;

/// Most decimal places an input may carry.
pub const MAX_SCALE: u32 = 6;

/// Exclusive upper bound on the magnitude of an input.
pub const MAX_MAGNITUDE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Inputs are stored in `DECIMAL(16, 6)` columns and some backends keep those
/// as binary doubles. Capping at 15 significant digits keeps every accepted
/// value exactly representable after a write and read.
fn storable(value: &Decimal) -> Result<(), ValidationError> {
    if value.normalize().scale() > MAX_SCALE || value.abs() >= MAX_MAGNITUDE {
        return Err(ValidationError::new("precision").with_message(
            "must have at most 6 decimal places and 9 integer digits".into(),
        ));
    }
    Ok(())
}

/// Rejects negative amounts and counts.
pub fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("non_negative").with_message("must not be negative".into()));
    }
    storable(value)
}

/// Percentage points, `0..=100`.
pub fn percentage(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value > Decimal::ONE_HUNDRED {
        return Err(
            ValidationError::new("percentage").with_message("must be between 0 and 100".into()),
        );
    }
    storable(value)
}

/// Rejects empty and whitespace-only text.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("non_blank").with_message("must not be blank".into()));
    }
    Ok(())
}
