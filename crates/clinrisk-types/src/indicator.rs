//! Indicator values - the computed output of one rule for one patient
//! at one reference date

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Result of evaluating a rule for one patient at one reference date
///
/// Indicators are derived on demand and never persisted by the engine.
/// `Null` stands for "no qualifying data" in date- and category-valued
/// variables; boolean rules resolve missing data to `Bool(false)` through
/// their cascade defaults instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Indicator {
    /// No qualifying data
    Null,
    /// Boolean rule result
    Bool(bool),
    /// Integer result, e.g. an age in years
    Int(i64),
    /// Date result, e.g. the date of the most recent qualifying event
    Date(NaiveDate),
    /// Category label drawn from a categorised code set
    Category(String),
}

impl Indicator {
    /// Check if this indicator is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this indicator is exactly `Bool(true)`
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// Check if this indicator is exactly `Bool(false)`
    pub fn is_false(&self) -> bool {
        matches!(self, Self::Bool(false))
    }

    /// Boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer payload, if any
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Date payload, if any
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Category payload, if any
    pub fn as_category(&self) -> Option<&str> {
        match self {
            Self::Category(c) => Some(c),
            _ => None,
        }
    }
}

impl From<bool> for Indicator {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Indicator {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<NaiveDate> for Indicator {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Option<NaiveDate>> for Indicator {
    fn from(value: Option<NaiveDate>) -> Self {
        match value {
            Some(date) => Self::Date(date),
            None => Self::Null,
        }
    }
}

impl From<Option<String>> for Indicator {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(label) => Self::Category(label),
            None => Self::Null,
        }
    }
}

impl From<Option<&str>> for Indicator {
    fn from(value: Option<&str>) -> Self {
        value.map(str::to_string).into()
    }
}
