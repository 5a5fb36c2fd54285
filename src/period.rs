//! Calendar periods for reports and the arithmetic that navigates them.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ReportError;
use crate::time::Clock;

/// Granularity of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Monthly,
    Yearly,
}

impl PeriodKind {
    /// Returns the opposite granularity.
    pub fn toggled(self) -> Self {
        match self {
            PeriodKind::Monthly => PeriodKind::Yearly,
            PeriodKind::Yearly => PeriodKind::Monthly,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PeriodKind::Monthly => "monthly",
            PeriodKind::Yearly => "yearly",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodKind {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "monthly" => Ok(PeriodKind::Monthly),
            "yearly" => Ok(PeriodKind::Yearly),
            other => Err(ReportError::InvalidPeriod(format!(
                "unknown period kind: {other}"
            ))),
        }
    }
}

/// A concrete report period: an anchor date plus a granularity.
///
/// The anchor is kept at month granularity (day forced to 1) so that shifting
/// by calendar months round-trips and toggling the granularity preserves the
/// anchored month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    anchor: NaiveDate,
    kind: PeriodKind,
}

impl ReportPeriod {
    /// Anchors a period at the given date, normalizing the day component.
    pub fn from_anchor(anchor: NaiveDate, kind: PeriodKind) -> Self {
        Self {
            anchor: first_of_month(anchor),
            kind,
        }
    }

    /// Anchors a period at the clock's current date.
    pub fn current(clock: &dyn Clock, kind: PeriodKind) -> Self {
        Self::from_anchor(clock.today(), kind)
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    /// First calendar day covered by the period.
    pub fn start_date(&self) -> NaiveDate {
        match self.kind {
            PeriodKind::Monthly => self.anchor,
            PeriodKind::Yearly => first_of_year(self.anchor),
        }
    }

    /// Last calendar day covered by the period.
    pub fn end_date(&self) -> NaiveDate {
        let next_start = match self.kind {
            PeriodKind::Monthly => shift_months(self.anchor, 1),
            PeriodKind::Yearly => shift_months(first_of_year(self.anchor), 12),
        };
        next_start.pred_opt().expect("period start is after year zero")
    }

    /// Human-readable label: full month name and year, or year only.
    pub fn label(&self) -> String {
        match self.kind {
            PeriodKind::Monthly => self.anchor.format("%B %Y").to_string(),
            PeriodKind::Yearly => self.anchor.format("%Y").to_string(),
        }
    }

    /// The period one unit earlier at the same granularity.
    pub fn previous(&self) -> Self {
        self.shifted(-1)
    }

    /// The period one unit later at the same granularity.
    pub fn next(&self) -> Self {
        self.shifted(1)
    }

    /// Same anchor, opposite granularity.
    pub fn toggled(&self) -> Self {
        Self {
            anchor: self.anchor,
            kind: self.kind.toggled(),
        }
    }

    fn shifted(&self, units: i32) -> Self {
        let months = match self.kind {
            PeriodKind::Monthly => units,
            PeriodKind::Yearly => units * 12,
        };
        Self {
            anchor: shift_months(self.anchor, months),
            kind: self.kind,
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("the first of an existing month is valid")
}

fn first_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).expect("January 1 of an existing year is valid")
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.expect("report periods stay within chrono's supported range")
}
