//! Lenient readers for numeric fields.
//!
//! Clients post numbers either as JSON numbers or as numeric strings, and the
//! decimal fields already accept both. Whole-number fields follow suit.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserializer;
use serde::de::{self, Unexpected, Visitor};

struct WholeNumberVisitor;

impl Visitor<'_> for WholeNumberVisitor {
    type Value = u32;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-negative whole number or a string holding one")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u32, E> {
        u32::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u32, E> {
        u32::try_from(value).map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<u32, E> {
        if value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX) {
            Ok(value as u32)
        } else {
            Err(E::invalid_value(Unexpected::Float(value), &self))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<u32, E> {
        let invalid = || E::invalid_value(Unexpected::Str(value), &self);
        let parsed: Decimal = value.trim().parse().map_err(|_| invalid())?;
        if !parsed.fract().is_zero() {
            return Err(invalid());
        }
        parsed.to_u32().ok_or_else(invalid)
    }
}

/// Reads a `u32` from an integer, an integral float such as `12.0`, or a
/// numeric string such as `"12"` or `" 12.0 "`.
pub(crate) fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(WholeNumberVisitor)
}
