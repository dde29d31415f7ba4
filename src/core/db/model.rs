use std::{fmt, str::FromStr};

/// A non-negative quantity of hours with exactly two fractional digits,
/// kept as a whole number of hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Hours(i64);

impl Hours {
    pub fn from_hundredths(hundredths: i64) -> Option<Self> {
        (hundredths >= 0).then_some(Hours(hundredths))
    }

    pub fn hundredths(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHoursError;

impl fmt::Display for ParseHoursError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid hours value")
    }
}

impl std::error::Error for ParseHoursError {}

impl FromStr for Hours {
    type Err = ParseHoursError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('+').unwrap_or(s);
        let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseHoursError);
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(ParseHoursError);
        }

        // Digits past the second must be zero: the value is never rounded.
        let (kept, dropped) = fraction.split_at(fraction.len().min(2));
        if dropped.bytes().any(|b| b != b'0') {
            return Err(ParseHoursError);
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseHoursError)?
        };
        let cents: i64 = match kept.len() {
            0 => 0,
            1 => kept.parse::<i64>().map_err(|_| ParseHoursError)? * 10,
            _ => kept.parse().map_err(|_| ParseHoursError)?,
        };

        whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(cents))
            .map(Hours)
            .ok_or(ParseHoursError)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl TryFrom<i64> for Hours {
    type Error = anyhow::Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Hours::from_hundredths(value)
            .ok_or_else(|| anyhow::anyhow!("Invalid stored hours value: {}", value))
    }
}

impl From<Hours> for i64 {
    fn from(hours: Hours) -> Self {
        hours.0
    }
}
