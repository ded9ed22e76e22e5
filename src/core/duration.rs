use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// A span of whole seconds, rendered as `H:MM:SS` or `D days, H:MM:SS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    secs: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("invalid duration '{0}': expected H:MM:SS or D days, H:MM:SS")]
    Format(String),
    #[error("invalid duration '{input}': {field} out of range")]
    OutOfRange { input: String, field: &'static str },
}

impl Duration {
    pub const ZERO: Duration = Duration { secs: 0 };

    pub const fn from_secs(secs: u64) -> Self {
        Self { secs }
    }

    pub fn is_zero(&self) -> bool {
        self.secs == 0
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration::from_secs(self.secs.saturating_add(rhs.secs))
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Duration {
        iter.copied().sum()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.secs / SECS_PER_DAY;
        let rem = self.secs % SECS_PER_DAY;
        let hours = rem / SECS_PER_HOUR;
        let minutes = (rem % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let seconds = rem % SECS_PER_MINUTE;

        if days > 0 {
            let unit = if days == 1 { "day" } else { "days" };
            write!(f, "{} {}, ", days, unit)?;
        }
        write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl FromStr for Duration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let format_err = || DurationParseError::Format(input.to_string());

        let (days, clock) = match input.split_once(", ") {
            Some((day_part, clock)) => {
                let count = day_part
                    .strip_suffix(" days")
                    .or_else(|| day_part.strip_suffix(" day"))
                    .ok_or_else(format_err)?;
                (count.parse::<u64>().map_err(|_| format_err())?, clock)
            }
            None => (0, input),
        };

        let mut fields = clock.split(':');
        let (hours, minutes, seconds) =
            match (fields.next(), fields.next(), fields.next(), fields.next()) {
                (Some(h), Some(m), Some(s), None) => (h, m, s),
                _ => return Err(format_err()),
            };
        if minutes.len() != 2 || seconds.len() != 2 {
            return Err(format_err());
        }

        let hours: u64 = hours.parse().map_err(|_| format_err())?;
        let minutes: u64 = minutes.parse().map_err(|_| format_err())?;
        let seconds: u64 = seconds.parse().map_err(|_| format_err())?;

        let out_of_range = |field| DurationParseError::OutOfRange {
            input: input.to_string(),
            field,
        };
        if days > 0 && hours >= 24 {
            return Err(out_of_range("hours"));
        }
        if minutes >= 60 {
            return Err(out_of_range("minutes"));
        }
        if seconds >= 60 {
            return Err(out_of_range("seconds"));
        }

        let secs = days
            .checked_mul(SECS_PER_DAY)
            .and_then(|d| d.checked_add(hours.checked_mul(SECS_PER_HOUR)?))
            .and_then(|t| t.checked_add(minutes * SECS_PER_MINUTE + seconds))
            .ok_or_else(|| out_of_range("days"))?;

        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_under_a_day() {
        assert_eq!(Duration::ZERO.to_string(), "0:00:00");
        assert_eq!(Duration::from_secs(60).to_string(), "0:01:00");
        assert_eq!(Duration::from_secs(3661).to_string(), "1:01:01");
        assert_eq!(Duration::from_secs(86_399).to_string(), "23:59:59");
    }

    #[test]
    fn test_render_days() {
        assert_eq!(Duration::from_secs(86_400).to_string(), "1 day, 0:00:00");
        assert_eq!(
            Duration::from_secs(2 * 86_400 + 3_723).to_string(),
            "2 days, 1:02:03"
        );
    }

    #[test]
    fn test_sum_starts_from_zero() {
        let empty: Vec<Duration> = Vec::new();
        assert_eq!(empty.iter().sum::<Duration>(), Duration::ZERO);

        let total: Duration = [60, 3661].into_iter().map(Duration::from_secs).sum();
        assert_eq!(total.to_string(), "1:02:01");
    }

    #[test]
    fn test_parse_rendered_values() {
        for secs in [0, 59, 60, 3_599, 3_661, 86_400, 90_061, 172_800 + 59] {
            let rendered = Duration::from_secs(secs).to_string();
            assert_eq!(rendered.parse::<Duration>(), Ok(Duration::from_secs(secs)));
        }
    }

    #[test]
    fn test_parse_accepts_large_hour_field() {
        assert_eq!("30:00:00".parse::<Duration>(), Ok(Duration::from_secs(108_000)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("1:2:3".parse::<Duration>().is_err());
        assert!("01:00".parse::<Duration>().is_err());
        assert!("2 weeks, 0:00:00".parse::<Duration>().is_err());
        assert!(matches!(
            "0:61:00".parse::<Duration>(),
            Err(DurationParseError::OutOfRange { field: "minutes", .. })
        ));
    }
}
