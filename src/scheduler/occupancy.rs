use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

/// Dates already claimed inside each area during one run.
///
/// Append-only: a committed placement is never displaced.
#[derive(Debug, Clone, Default)]
pub struct AreaOccupancy {
    by_area: HashMap<String, BTreeSet<NaiveDate>>,
}

impl AreaOccupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, area: &str, date: NaiveDate) -> bool {
        self.by_area
            .get(area)
            .is_some_and(|dates| dates.contains(&date))
    }

    pub fn add_all<I>(&mut self, area: &str, dates: I)
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        self.by_area
            .entry(area.to_string())
            .or_default()
            .extend(dates);
    }

    /// The latest of `dates` already occupied in `area`.
    pub fn latest_conflict(&self, area: &str, dates: &[NaiveDate]) -> Option<NaiveDate> {
        let occupied = self.by_area.get(area)?;
        dates.iter().copied().filter(|d| occupied.contains(d)).max()
    }

    pub fn occupied(&self, area: &str) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_area.get(area).into_iter().flatten().copied()
    }

    pub fn areas(&self) -> impl Iterator<Item = &str> {
        self.by_area.keys().map(String::as_str)
    }
}
