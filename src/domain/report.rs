// ============================================================================
// Date Report
// Labelled year/month/day lines rendered as numerals
// ============================================================================

use crate::numeral::NumeralEncoder;
use chrono::{Datelike, NaiveDate};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Calendar field shown on a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DateField {
    Year,
    Month,
    Day,
}

impl DateField {
    /// Bracketed label printed before the numeral
    pub const fn label(self) -> &'static str {
        match self {
            DateField::Year => "[YEAR]",
            DateField::Month => "[MONTH]",
            DateField::Day => "[DAY]",
        }
    }
}

/// A single `"[LABEL] NUMERAL"` line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportLine {
    pub field: DateField,
    pub value: i64,
    pub numeral: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field.label(), self.numeral)
    }
}

/// Year, month and day of a date, each encoded as a numeral.
///
/// Years before 1 CE have no numeral and follow the encoder's
/// invalid-input policy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateReport {
    pub date: NaiveDate,
    pub lines: [ReportLine; 3],
}

impl DateReport {
    /// Build a report with the default encoder.
    pub fn new(date: NaiveDate) -> Self {
        Self::with_encoder(date, &NumeralEncoder::default())
    }

    /// Build a report with a configured encoder.
    pub fn with_encoder(date: NaiveDate, encoder: &NumeralEncoder) -> Self {
        let line = |field: DateField, value: i64| ReportLine {
            field,
            value,
            numeral: encoder.encode(value),
        };

        let lines = [
            line(DateField::Year, i64::from(date.year())),
            line(DateField::Month, i64::from(date.month())),
            line(DateField::Day, i64::from(date.day())),
        ];

        tracing::debug!(%date, "built date report");
        Self { date, lines }
    }

    /// Build a report from raw components.
    ///
    /// Returns `None` if the components do not form a calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }

    pub fn line(&self, field: DateField) -> &ReportLine {
        match field {
            DateField::Year => &self.lines[0],
            DateField::Month => &self.lines[1],
            DateField::Day => &self.lines[2],
        }
    }
}

impl fmt::Display for DateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
