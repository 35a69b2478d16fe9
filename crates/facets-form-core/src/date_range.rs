//! Date range filter values.
//!
//! A date range travels as one filter value, `from~to`, either side optional.
//! Sides are `Y-m-d` dates or RFC 3339 datetimes with an offset; the longer
//! side decides which. On the query side a range becomes a single timestamp
//! condition, with date-only ranges widened to whole days.

use crate::errors::{FacetsFormError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_DELIMITER: &str = "~";
pub const DEFAULT_SUMMARY_FORMAT: &str = "%b %-d, %Y";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
const DATE_LEN: usize = 10;
const DATETIME_LEN: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateType {
    /// Date only; bounds expand to the whole day
    #[default]
    Date,
    /// Date and time with UTC offset
    Datetime,
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateType::Date => write!(f, "date"),
            DateType::Datetime => write!(f, "datetime"),
        }
    }
}

/// Query operator of a range condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RangeOperator {
    #[serde(rename = "BETWEEN")]
    Between,
    #[serde(rename = ">=")]
    AtLeast,
    #[serde(rename = "<=")]
    AtMost,
}

impl fmt::Display for RangeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            RangeOperator::Between => "BETWEEN",
            RangeOperator::AtLeast => ">=",
            RangeOperator::AtMost => "<=",
        };
        f.write_str(op)
    }
}

/// Timestamp condition on the indexed date field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCondition {
    Between(i64, i64),
    AtLeast(i64),
    AtMost(i64),
}

impl DateCondition {
    pub fn operator(&self) -> RangeOperator {
        match self {
            DateCondition::Between(..) => RangeOperator::Between,
            DateCondition::AtLeast(_) => RangeOperator::AtLeast,
            DateCondition::AtMost(_) => RangeOperator::AtMost,
        }
    }

    /// Condition operands, in query order
    pub fn values(&self) -> Vec<i64> {
        match *self {
            DateCondition::Between(from, to) => vec![from, to],
            DateCondition::AtLeast(from) => vec![from],
            DateCondition::AtMost(to) => vec![to],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    from: Option<DateTime<FixedOffset>>,
    to: Option<DateTime<FixedOffset>>,
    date_type: DateType,
    delimiter: String,
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new(DateType::Date)
    }
}

impl DateRange {
    /// Empty range using the default delimiter
    pub fn new(date_type: DateType) -> Self {
        Self {
            from: None,
            to: None,
            date_type,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    pub fn with_from(mut self, from: Option<DateTime<FixedOffset>>) -> Self {
        self.from = from;
        self
    }

    pub fn with_to(mut self, to: Option<DateTime<FixedOffset>>) -> Self {
        self.to = to;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Parse an interval string such as `2021-08-16~2021-08-17`.
    ///
    /// A `%2B` left over from an unencoded query is read as `+`.
    ///
    /// # Errors
    ///
    /// `InvalidInterval` without the delimiter, `MalformedInterval` when the
    /// sides are neither dates nor datetimes.
    pub fn parse(interval: &str, delimiter: &str) -> Result<Self> {
        let Some((from, to)) = interval.split_once(delimiter).filter(|_| !delimiter.is_empty()) else {
            return Err(FacetsFormError::InvalidInterval {
                interval: interval.to_string(),
                delimiter: delimiter.to_string(),
            });
        };
        let from = from.replace("%2B", "+");
        let to = to.replace("%2B", "+");

        let malformed = || FacetsFormError::MalformedInterval {
            interval: interval.to_string(),
        };

        // Lexicographic max; the empty side of a one-sided range never wins.
        let date_type = match from.as_str().max(to.as_str()).len() {
            DATE_LEN => DateType::Date,
            DATETIME_LEN => DateType::Datetime,
            _ => return Err(malformed()),
        };

        Ok(Self {
            from: parse_side(&from).map_err(|_| malformed())?,
            to: parse_side(&to).map_err(|_| malformed())?,
            date_type,
            delimiter: delimiter.to_string(),
        })
    }

    pub fn from(&self) -> Option<DateTime<FixedOffset>> {
        self.from
    }

    pub fn to(&self) -> Option<DateTime<FixedOffset>> {
        self.to
    }

    pub fn date_type(&self) -> DateType {
        self.date_type
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Lower bound; start of the day for date ranges.
    pub fn from_bound(&self) -> Option<DateTime<FixedOffset>> {
        let from = self.from?;
        match self.date_type {
            DateType::Date => at_time(from, from.date_naive().and_hms_opt(0, 0, 0)),
            DateType::Datetime => Some(from),
        }
    }

    /// Upper bound; last microsecond of the day for date ranges.
    pub fn to_bound(&self) -> Option<DateTime<FixedOffset>> {
        let to = self.to?;
        match self.date_type {
            DateType::Date => at_time(to, to.date_naive().and_hms_micro_opt(23, 59, 59, 999_999)),
            DateType::Datetime => Some(to),
        }
    }

    /// UTC offset of the lower bound, e.g. `+02:00`
    pub fn from_timezone(&self) -> Option<String> {
        self.from.map(|d| d.format("%:z").to_string())
    }

    pub fn to_timezone(&self) -> Option<String> {
        self.to.map(|d| d.format("%:z").to_string())
    }

    pub fn operator(&self) -> Result<RangeOperator> {
        match (self.from, self.to) {
            (Some(_), Some(_)) => Ok(RangeOperator::Between),
            (Some(_), None) => Ok(RangeOperator::AtLeast),
            (None, Some(_)) => Ok(RangeOperator::AtMost),
            (None, None) => Err(FacetsFormError::EmptyRange),
        }
    }

    /// Timestamp condition for the search query.
    pub fn condition(&self) -> Result<DateCondition> {
        match (self.from_bound(), self.to_bound()) {
            (Some(from), Some(to)) => Ok(DateCondition::Between(from.timestamp(), to.timestamp())),
            (Some(from), None) => Ok(DateCondition::AtLeast(from.timestamp())),
            (None, Some(to)) => Ok(DateCondition::AtMost(to.timestamp())),
            (None, None) => Err(FacetsFormError::EmptyRange),
        }
    }

    /// Human summary of the active range, dates rendered with `format`.
    ///
    /// # Errors
    ///
    /// `InvalidSummaryFormat` when `format` has an unknown specifier,
    /// `EmptyRange` when neither side is set.
    pub fn summary(&self, format: &str) -> Result<String> {
        let items = summary_items(format)?;
        let render = |date: DateTime<FixedOffset>| date.format_with_items(items.iter()).to_string();
        match (self.from, self.to) {
            (Some(from), Some(to)) => Ok(format!("Between {} and {}", render(from), render(to))),
            (Some(from), None) => Ok(format!("After {}", render(from))),
            (None, Some(to)) => Ok(format!("Before {}", render(to))),
            (None, None) => Err(FacetsFormError::EmptyRange),
        }
    }

    /// Filter value for the facet; `None` for an empty range.
    pub fn to_filter_value(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }

    fn format_side(&self, side: Option<DateTime<FixedOffset>>) -> String {
        let format = match self.date_type {
            DateType::Date => DATE_FORMAT,
            DateType::Datetime => DATETIME_FORMAT,
        };
        side.map(|d| d.format(format).to_string()).unwrap_or_default()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.format_side(self.from),
            self.delimiter,
            self.format_side(self.to)
        )
    }
}

/// Parse a summary format up front; chrono only reports a bad specifier
/// while rendering.
///
/// # Errors
///
/// `InvalidSummaryFormat` when any specifier is unknown or incomplete.
pub fn summary_items(format: &str) -> Result<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(FacetsFormError::InvalidSummaryFormat {
            format: format.to_string(),
        });
    }
    Ok(items)
}

/// Blank → `None`; `Y-m-d` → UTC midnight; anything else must be RFC 3339.
fn parse_side(side: &str) -> std::result::Result<Option<DateTime<FixedOffset>>, ()> {
    if side.is_empty() {
        return Ok(None);
    }
    if side.len() == DATE_LEN {
        let date = NaiveDate::parse_from_str(side, DATE_FORMAT).map_err(|_| ())?;
        let utc = FixedOffset::east_opt(0).ok_or(())?;
        let midnight = date.and_hms_opt(0, 0, 0).ok_or(())?;
        return utc.from_local_datetime(&midnight).single().map(Some).ok_or(());
    }
    DateTime::parse_from_rfc3339(side).map(Some).map_err(|_| ())
}

fn at_time(date: DateTime<FixedOffset>, time: Option<NaiveDateTime>) -> Option<DateTime<FixedOffset>> {
    date.offset().from_local_datetime(&time?).single()
}
