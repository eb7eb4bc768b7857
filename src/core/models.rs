use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use strum_macros::{AsRefStr, Display};

pub const DEFAULT_AREA: &str = "General";

fn default_area() -> String {
    DEFAULT_AREA.to_string()
}

/// One roster entry for a single allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    #[serde(default = "default_area")]
    pub area: String,
    pub entitled_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_start: Option<NaiveDate>,
}

impl Employee {
    pub fn new(name: impl Into<String>, area: Option<&str>, entitled_days: u32) -> Self {
        let area = match area.map(str::trim) {
            Some(a) if !a.is_empty() => a.to_string(),
            _ => default_area(),
        };
        Self {
            name: name.into(),
            area,
            entitled_days,
            forced_start: None,
        }
    }

    pub fn with_forced_start(mut self, date: NaiveDate) -> Self {
        self.forced_start = Some(date);
        self
    }
}

/// Where the search that produced a placement began.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StartOrigin {
    /// Searched from the run's shared base date.
    Default,
    /// Committed at the next business day of the forced start.
    Forced,
    /// A forced start collided with a block or the area and was dropped.
    ForcedAbandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum UnassignedReason {
    /// Entitled day-count is zero.
    NoEntitlement,
    /// The placement attempt ceiling was reached without a clean block.
    AttemptsExhausted,
}

impl UnassignedReason {
    pub fn describe(&self) -> &'static str {
        match self {
            UnassignedReason::NoEntitlement => "no days available",
            UnassignedReason::AttemptsExhausted => "no free block found",
        }
    }
}

/// Terminal state of one employee's search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Committed {
        /// Every business day of the period, ascending.
        days: Vec<NaiveDate>,
        origin: StartOrigin,
        attempts: u32,
    },
    Unassigned {
        reason: UnassignedReason,
        attempts: u32,
    },
}

impl Placement {
    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            Placement::Committed { days, .. } => days.first().copied(),
            Placement::Unassigned { .. } => None,
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            Placement::Committed { days, .. } => days.last().copied(),
            Placement::Unassigned { .. } => None,
        }
    }

    pub fn days(&self) -> &[NaiveDate] {
        match self {
            Placement::Committed { days, .. } => days,
            Placement::Unassigned { .. } => &[],
        }
    }

    pub fn attempts(&self) -> u32 {
        match self {
            Placement::Committed { attempts, .. } | Placement::Unassigned { attempts, .. } => {
                *attempts
            }
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Placement::Committed { .. })
    }
}

/// Result record for one employee, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub area: String,
    pub entitled_days: u32,
    pub placement: Placement,
}

impl Assignment {
    pub fn start(&self) -> Option<NaiveDate> {
        self.placement.start()
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.placement.end()
    }

    pub fn origin(&self) -> Option<StartOrigin> {
        match &self.placement {
            Placement::Committed { origin, .. } => Some(*origin),
            Placement::Unassigned { .. } => None,
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.placement {
            Placement::Committed { .. } => write!(
                f,
                "{} ({}): {} to {}",
                self.name,
                self.area,
                self.start().map(|d| d.to_string()).unwrap_or_default(),
                self.end().map(|d| d.to_string()).unwrap_or_default()
            ),
            Placement::Unassigned { reason, .. } => {
                write!(f, "{} ({}): {}", self.name, self.area, reason.describe())
            }
        }
    }
}

/// Validated input to one allocation run.
#[derive(Debug, Clone)]
pub struct AllocationRequest {
    employees: Vec<Employee>,
    start_date: Option<NaiveDate>,
}

impl AllocationRequest {
    /// Rejects rosters where two employees share a name.
    pub fn new(employees: Vec<Employee>) -> Result<Self> {
        let mut seen = HashSet::new();
        for e in &employees {
            if !seen.insert(e.name.as_str()) {
                return Err(Error::DuplicateEmployee(e.name.clone()));
            }
        }
        Ok(Self {
            employees,
            start_date: None,
        })
    }

    pub fn with_start_date(mut self, start: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self
    }

    /// Pin `name`'s search start. Returns false when no employee has that name.
    pub fn force_start(&mut self, name: &str, date: NaiveDate) -> bool {
        match self.employees.iter_mut().find(|e| e.name == name) {
            Some(e) => {
                e.forced_start = Some(date);
                true
            }
            None => false,
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Employees sorted by ascending entitled days; ties keep roster order.
    pub fn priority_order(&self) -> Vec<&Employee> {
        let mut order: Vec<&Employee> = self.employees.iter().collect();
        order.sort_by_key(|e| e.entitled_days);
        order
    }
}
