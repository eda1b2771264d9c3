//! Null-propagating comparisons
//!
//! Rule cascades compare dates and measurement values that may be absent
//! from a patient record. A comparison where either side is missing is not
//! an error and not unknown - it simply fails to hold, and the cascade
//! falls through to its next branch. These helpers encode that convention
//! once so every rule reads the same way.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// True when both dates are present and `left` is strictly before `right`
pub fn date_before(left: Option<NaiveDate>, right: Option<NaiveDate>) -> bool {
    matches!((left, right), (Some(l), Some(r)) if l < r)
}

/// True when both dates are present and `left` is on or before `right`
pub fn date_on_or_before(left: Option<NaiveDate>, right: Option<NaiveDate>) -> bool {
    matches!((left, right), (Some(l), Some(r)) if l <= r)
}

/// True when both dates are present and `left` is strictly after `right`
pub fn date_after(left: Option<NaiveDate>, right: Option<NaiveDate>) -> bool {
    matches!((left, right), (Some(l), Some(r)) if l > r)
}

/// True when both dates are present and `left` is on or after `right`
pub fn date_on_or_after(left: Option<NaiveDate>, right: Option<NaiveDate>) -> bool {
    matches!((left, right), (Some(l), Some(r)) if l >= r)
}

/// True when the value is present and at least `threshold`
pub fn value_at_least(value: Option<Decimal>, threshold: Decimal) -> bool {
    matches!(value, Some(v) if v >= threshold)
}

/// True when the value is present and strictly between `low` and `high`
pub fn value_in_open_range(value: Option<Decimal>, low: Decimal, high: Decimal) -> bool {
    matches!(value, Some(v) if v > low && v < high)
}
