use crate::errors::{Error, Result};
use crate::extensions::chrono::NaiveDateExt;
use crate::extensions::enums::valid_csv;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(pub NaiveDate);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr)]
pub enum DateFormat {
    #[strum(serialize = "%Y-%m-%d")]
    YmdDash,
    #[strum(serialize = "%Y/%m/%d")]
    YmdSlash,
}

impl Date {
    pub fn usage() -> String {
        let formats = DateFormat::iter()
            .map(|df| df.as_ref().replace("%Y", "YYYY").replace("%m", "MM").replace("%d", "DD"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Supported formats: {}", formats)
    }

    pub fn try_from_str(input: &str) -> Result<Self> {
        let input = input.trim();
        DateFormat::iter()
            .find_map(|f| NaiveDate::parse_from_str(input, f.as_ref()).ok())
            .map(Date)
            .ok_or_else(|| Error::Parse(format!("Invalid date: '{}'. {}", input, Self::usage())))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A set of calendar dates written as comma separated tokens, each either
/// `YYYY-MM-DD` or an inclusive range `YYYY-MM-DD:YYYY-MM-DD`.
///
/// Used for globally blocked dates and for extra holidays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSet(BTreeSet<NaiveDate>);

impl DateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_from_str(text: &str) -> Result<Self> {
        let mut dates = BTreeSet::new();
        for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.split_once(':') {
                Some((a, b)) => {
                    let start = Date::try_from_str(a)?.0;
                    let end = Date::try_from_str(b)?.0;
                    if end < start {
                        return Err(Error::InvalidRange { start, end });
                    }
                    dates.extend(start.days_through(end));
                }
                None => {
                    dates.insert(Date::try_from_str(token)?.0);
                }
            }
        }
        Ok(Self(dates))
    }

    pub fn extend(&mut self, other: &DateSet) {
        self.0.extend(other.0.iter().copied());
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    /// The latest of `dates` that is a member of this set.
    pub fn latest_in(&self, dates: &[NaiveDate]) -> Option<NaiveDate> {
        dates.iter().copied().filter(|d| self.contains(*d)).max()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.iter().copied()
    }

    /// Maximal runs of consecutive dates, in ascending order.
    pub fn runs(&self) -> Vec<(NaiveDate, NaiveDate)> {
        let mut runs: Vec<(NaiveDate, NaiveDate)> = Vec::new();
        for d in self.iter() {
            match runs.last_mut() {
                Some((_, end)) if end.next_day() == d => *end = d,
                _ => runs.push((d, d)),
            }
        }
        runs
    }
}

impl FromIterator<NaiveDate> for DateSet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for DateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self
            .runs()
            .into_iter()
            .map(|(start, end)| {
                if start == end {
                    Date(start).to_string()
                } else {
                    format!("{}:{}", Date(start), Date(end))
                }
            })
            .collect::<Vec<_>>();
        write!(f, "{}", tokens.join(","))
    }
}

impl Serialize for DateSet {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateSet {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DateSet, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        DateSet::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(matches!(fmt, BoolFormat::TextTrue))),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

/// Which weekdays never count as business days.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum WeekendPolicy {
    #[default]
    SaturdaySunday,
    SundayOnly,
}

impl WeekendPolicy {
    pub fn help(&self) -> &'static str {
        match self {
            WeekendPolicy::SaturdaySunday => "Saturdays and Sundays are never business days.",
            WeekendPolicy::SundayOnly => "Only Sundays are excluded; Saturdays are working days.",
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid weekend policy: '{}'. Allowed policies: {}",
                s.trim(),
                valid_csv::<WeekendPolicy>()
            ))
        })
    }
}

/// Built-in public holiday calendars.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HolidayCalendar {
    #[default]
    Colombia,
    #[strum(serialize = "none", to_string = "none")]
    #[serde(rename = "none")]
    Disabled,
}

impl HolidayCalendar {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid holiday calendar: '{}'. Allowed calendars: {}",
                s.trim(),
                valid_csv::<HolidayCalendar>()
            ))
        })
    }
}
