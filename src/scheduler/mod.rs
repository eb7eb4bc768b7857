use crate::calendar::holidays::ColombianHolidays;
use crate::calendar::BusinessCalendar;
use crate::core::context::AppContext;
use crate::core::models::{AllocationRequest, Assignment, Employee, Placement, StartOrigin};
use crate::core::types::{DateSet, HolidayCalendar};
use crate::extensions::chrono::NaiveDateExt;
use crate::logging::{LogTarget, Logger};
use crate::scheduler::allocator::{Allocation, AllocationObserver, Allocator, ConflictKind};
use chrono::NaiveDate;

pub mod allocator;
pub mod occupancy;
pub mod sequencer;
#[cfg(test)]
mod tests;

pub(crate) struct LoggerObserver {
    logger: Logger,
}

impl AllocationObserver for LoggerObserver {
    fn conflict(&self, employee: &Employee, kind: ConflictKind, latest: NaiveDate) {
        self.logger.info(
            format!(
                "{} ({}): {} conflict through {}, retrying from {}",
                employee.name,
                employee.area,
                kind,
                latest,
                latest.next_day()
            ),
            LogTarget::FileOnly,
        );
    }

    fn forced_start_abandoned(&self, employee: &Employee, forced: NaiveDate, base: NaiveDate) {
        self.logger.warn(
            format!(
                "Forced start {} for {} is not available; searching from {} instead",
                forced, employee.name, base
            ),
            LogTarget::FileOnly,
        );
    }

    fn resolved(&self, assignment: &Assignment) {
        match &assignment.placement {
            Placement::Committed {
                days,
                origin,
                attempts,
            } => {
                let how = match origin {
                    StartOrigin::Forced => " (forced start)",
                    StartOrigin::ForcedAbandoned => " (forced start abandoned)",
                    StartOrigin::Default => "",
                };
                if let (Some(start), Some(end)) = (days.first(), days.last()) {
                    self.logger.info(
                        format!(
                            "{} ({}) assigned {} business day(s) from {} to {}{} after {} attempt(s)",
                            assignment.name,
                            assignment.area,
                            days.len(),
                            start,
                            end,
                            how,
                            attempts
                        ),
                        LogTarget::FileOnly,
                    );
                }
            }
            Placement::Unassigned { reason, attempts } => {
                self.logger.warn(
                    format!(
                        "{} ({}) left unassigned: {} after {} attempt(s)",
                        assignment.name,
                        assignment.area,
                        reason.describe(),
                        attempts
                    ),
                    LogTarget::FileOnly,
                );
            }
        }
    }
}

/// Runs one allocation with the settings held by the application context.
pub struct PlanManager<'a> {
    ctx: &'a AppContext,
    observer: LoggerObserver,
}

impl<'a> PlanManager<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        let observer = LoggerObserver {
            logger: ctx.logger.clone(),
        };
        Self { ctx, observer }
    }

    /// Weekend policy, built-in holiday calendar and extra holidays from config.
    pub fn business_calendar(&self) -> BusinessCalendar {
        let config = &self.ctx.config;
        let mut calendar = BusinessCalendar::new().with_weekend_policy(config.weekend_policy());
        if config.holiday_calendar() == HolidayCalendar::Colombia {
            calendar = calendar.with_holidays(ColombianHolidays::new());
        }
        if !config.extra_holidays().is_empty() {
            calendar = calendar.with_holidays(config.extra_holidays().clone());
        }
        calendar
    }

    /// Configured blocked dates plus any supplied for this run only.
    pub fn blocked_dates(&self, extra: &DateSet) -> DateSet {
        let mut blocked = self.ctx.config.blocked_dates().clone();
        blocked.extend(extra);
        blocked
    }

    /// Pin forced starts onto the request. Unknown names are reported and skipped.
    pub fn apply_forced_starts(
        &self,
        request: &mut AllocationRequest,
        forced: &[(String, NaiveDate)],
    ) {
        for (name, date) in forced {
            if request.force_start(name, *date) {
                self.ctx.logger.info(
                    format!("Forced start for {name}: {date}"),
                    LogTarget::FileOnly,
                );
            } else {
                self.ctx.logger.warn(
                    format!("Ignoring forced start for unknown employee '{name}'"),
                    LogTarget::ConsoleAndFile,
                );
            }
        }
    }

    pub fn compute_plan(&self, request: AllocationRequest, extra_blocked: &DateSet) -> Allocation {
        let logger = &self.ctx.logger;
        logger.info("Starting allocation...", LogTarget::FileOnly);
        for (key, _, value) in self.ctx.config.rows() {
            logger.info(format!("  {key} = {value}"), LogTarget::FileOnly);
        }

        let start = request.start_date().or(self.ctx.config.start_date());
        let request = request.with_start_date(start);
        let calendar = self.business_calendar();
        let blocked = self.blocked_dates(extra_blocked);

        let allocation = Allocator::new(&calendar, &blocked)
            .with_observer(&self.observer)
            .allocate(&request);

        let placed = allocation.committed().count();
        logger.info(
            format!(
                "Finished allocation from {}: {} of {} employee(s) placed.",
                allocation.search_base,
                placed,
                allocation.assignments.len()
            ),
            LogTarget::FileOnly,
        );
        allocation
    }
}
