use crate::calendar::BusinessCalendar;
use crate::core::models::{
    AllocationRequest, Assignment, Employee, Placement, StartOrigin, UnassignedReason,
};
use crate::core::types::DateSet;
use crate::extensions::chrono::NaiveDateExt;
use crate::scheduler::occupancy::AreaOccupancy;
use crate::scheduler::sequencer::take_business_days;
use chrono::{Local, NaiveDate};
use strum_macros::Display;

/// Candidate start dates tried per employee before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConflictKind {
    Blocked,
    Area,
}

/// Observer to capture allocation decisions (e.g., for logging).
pub trait AllocationObserver {
    fn conflict(&self, _employee: &Employee, _kind: ConflictKind, _latest: NaiveDate) {}

    fn forced_start_abandoned(&self, _employee: &Employee, _forced: NaiveDate, _base: NaiveDate) {
    }

    fn resolved(&self, _assignment: &Assignment) {}
}

pub struct NoopObserver;

impl AllocationObserver for NoopObserver {}

/// Outcome of a run: one assignment per employee in processing order, plus
/// the occupancy the run built.
#[derive(Debug, Clone)]
pub struct Allocation {
    pub search_base: NaiveDate,
    pub assignments: Vec<Assignment>,
    pub occupancy: AreaOccupancy,
}

impl Allocation {
    pub fn committed(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.placement.is_committed())
    }

    pub fn unassigned(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments
            .iter()
            .filter(|a| !a.placement.is_committed())
    }

    pub fn get(&self, name: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.name == name)
    }
}

pub struct Allocator<'a> {
    calendar: &'a BusinessCalendar,
    blocked: &'a DateSet,
    observer: &'a dyn AllocationObserver,
}

impl<'a> Allocator<'a> {
    pub fn new(calendar: &'a BusinessCalendar, blocked: &'a DateSet) -> Self {
        Self {
            calendar,
            blocked,
            observer: &NoopObserver,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn AllocationObserver) -> Self {
        self.observer = observer;
        self
    }

    /// First business day on or after the run's start date (or today).
    pub fn search_base(&self, request: &AllocationRequest) -> NaiveDate {
        let start = request
            .start_date()
            .unwrap_or_else(|| Local::now().date_naive());
        self.calendar.next_business_day(start)
    }

    /// Allocate every employee against a fresh occupancy.
    pub fn allocate(&self, request: &AllocationRequest) -> Allocation {
        let base = self.search_base(request);
        let mut occupancy = AreaOccupancy::new();
        let assignments = self.run(request, base, &mut occupancy);
        Allocation {
            search_base: base,
            assignments,
            occupancy,
        }
    }

    /// Allocate in priority order, committing each placement to `occupancy`.
    pub fn allocate_into(
        &self,
        request: &AllocationRequest,
        occupancy: &mut AreaOccupancy,
    ) -> Vec<Assignment> {
        self.run(request, self.search_base(request), occupancy)
    }

    fn run(
        &self,
        request: &AllocationRequest,
        base: NaiveDate,
        occupancy: &mut AreaOccupancy,
    ) -> Vec<Assignment> {
        request
            .priority_order()
            .into_iter()
            .map(|employee| {
                let assignment = Assignment {
                    name: employee.name.clone(),
                    area: employee.area.clone(),
                    entitled_days: employee.entitled_days,
                    placement: self.place(employee, base, occupancy),
                };
                self.observer.resolved(&assignment);
                assignment
            })
            .collect()
    }

    fn place(
        &self,
        employee: &Employee,
        base: NaiveDate,
        occupancy: &mut AreaOccupancy,
    ) -> Placement {
        let count = employee.entitled_days;
        if count == 0 {
            return Placement::Unassigned {
                reason: UnassignedReason::NoEntitlement,
                attempts: 0,
            };
        }

        let (mut forced, mut origin) = self.validate_forced_start(employee, base);
        let mut candidate = forced.unwrap_or(base);
        let mut attempts = 0;

        while attempts < MAX_PLACEMENT_ATTEMPTS {
            attempts += 1;

            candidate = self.calendar.next_business_day(candidate);
            if self.blocked.contains(candidate) {
                candidate = candidate.next_day();
                continue;
            }

            let days = take_business_days(self.calendar, candidate, count, self.blocked);
            if days.len() < count as usize {
                candidate = candidate.next_day();
                continue;
            }

            let conflict = self
                .blocked
                .latest_in(&days)
                .map(|d| (ConflictKind::Blocked, d))
                .or_else(|| {
                    occupancy
                        .latest_conflict(&employee.area, &days)
                        .map(|d| (ConflictKind::Area, d))
                });

            if let Some((kind, latest)) = conflict {
                self.observer.conflict(employee, kind, latest);
                candidate = latest.next_day();
                if let Some(f) = forced.take() {
                    self.observer.forced_start_abandoned(employee, f, base);
                    origin = StartOrigin::ForcedAbandoned;
                    candidate = base;
                }
                continue;
            }

            occupancy.add_all(&employee.area, days.iter().copied());
            return Placement::Committed {
                days,
                origin,
                attempts,
            };
        }

        Placement::Unassigned {
            reason: UnassignedReason::AttemptsExhausted,
            attempts,
        }
    }

    /// A forced start is accepted only when its next business day is not
    /// globally blocked; otherwise the search falls back to the base date.
    fn validate_forced_start(
        &self,
        employee: &Employee,
        base: NaiveDate,
    ) -> (Option<NaiveDate>, StartOrigin) {
        let Some(requested) = employee.forced_start else {
            return (None, StartOrigin::Default);
        };
        let forced = self.calendar.next_business_day(requested);
        if self.blocked.contains(forced) {
            self.observer.forced_start_abandoned(employee, forced, base);
            return (None, StartOrigin::ForcedAbandoned);
        }
        (Some(forced), StartOrigin::Forced)
    }
}
