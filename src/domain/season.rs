// Season window domain model - MM-DD date ranges
use chrono::{Datelike, Local};

const SEASON_START: &str = "01-01";
const SEASON_END: &str = "12-31";

/// A calendar day without a year, compared as `month * 100 + day`.
///
/// Calendar validity is not checked: "02-30" is a perfectly good `MonthDay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDay {
    pub month: i32,
    pub day: i32,
}

impl MonthDay {
    #[cfg(test)]
    pub fn new(month: i32, day: i32) -> Self {
        Self { month, day }
    }

    /// Parse "MM-DD" permissively. Missing, unparseable or zero components become 1.
    pub fn parse(value: &str) -> Self {
        let mut parts = value.split('-');
        let month = parts.next().and_then(lenient_int).unwrap_or(1);
        let day = parts.next().and_then(lenient_int).unwrap_or(1);
        Self { month, day }
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        let now = Local::now();
        Self {
            month: now.month() as i32,
            day: now.day() as i32,
        }
    }

    /// The override date when one is configured, otherwise today.
    pub fn reference(fake_date: Option<&str>) -> Self {
        match fake_date.filter(|d| !d.is_empty()) {
            Some(fake) => {
                let parsed = Self::parse(fake);
                tracing::info!(
                    "Using fake date for testing: {} ({}/{})",
                    fake,
                    parsed.month,
                    parsed.day
                );
                parsed
            }
            None => Self::today(),
        }
    }

    /// Widened so oversized lenient input cannot overflow.
    pub fn comparable(&self) -> i64 {
        i64::from(self.month) * 100 + i64::from(self.day)
    }
}

/// Reads an integer the way a forgiving form parser would: optional leading
/// whitespace and sign, then as many digits as are present. Zero counts as
/// missing.
fn lenient_int(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<i32>().ok()? * sign;
    (value != 0).then_some(value)
}

/// Is `reference` inside the `from`..=`to` window? Missing or empty bounds
/// default to the start and end of the year; with neither, every day matches.
pub fn is_date_in_range(from: Option<&str>, to: Option<&str>, reference: MonthDay) -> bool {
    let from = from.filter(|f| !f.is_empty());
    let to = to.filter(|t| !t.is_empty());
    if from.is_none() && to.is_none() {
        return true;
    }

    let from = MonthDay::parse(from.unwrap_or(SEASON_START)).comparable();
    let to = MonthDay::parse(to.unwrap_or(SEASON_END)).comparable();
    let current = reference.comparable();

    if from <= to {
        current >= from && current <= to
    } else {
        // Wraps the new year, e.g. 10-01 to 03-31
        current >= from || current <= to
    }
}
