use crate::core::models::{Assignment, Placement, StartOrigin};
use crate::scheduler::allocator::Allocation;
use crate::ui::table_printer::TablePrinter;
use std::io::Write;

const HEADERS: [&str; 6] = ["NAME", "AREA", "DAYS", "START", "END", "NOTE"];

/// Plain-text view of one allocation, optionally narrowed to a single area.
pub struct PlanReport<'a> {
    allocation: &'a Allocation,
    area_filter: Option<&'a str>,
    printer: TablePrinter,
}

impl<'a> PlanReport<'a> {
    pub fn new(allocation: &'a Allocation) -> Self {
        Self {
            allocation,
            area_filter: None,
            printer: TablePrinter::new(),
        }
    }

    /// Area names compare case-insensitively.
    pub fn with_area_filter(mut self, area: Option<&'a str>) -> Self {
        self.area_filter = area.map(str::trim).filter(|a| !a.is_empty());
        self
    }

    pub fn visible(&self) -> impl Iterator<Item = &'a Assignment> + '_ {
        self.allocation
            .assignments
            .iter()
            .filter(|a| match self.area_filter {
                Some(area) => a.area.eq_ignore_ascii_case(area),
                None => true,
            })
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.visible().map(row).collect()
    }

    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        let title = match self.area_filter {
            Some(area) => format!("Vacation plan for {area} from {}", self.allocation.search_base),
            None => format!("Vacation plan from {}", self.allocation.search_base),
        };
        let empty = match self.area_filter {
            Some(area) => format!("No employees in area '{area}'."),
            None => "No employees in roster.".to_string(),
        };
        let rows = self.rows();
        self.printer
            .render_table(&title, &HEADERS, &rows, Some(empty.as_str()), out)?;

        let shown: Vec<_> = self.visible().collect();
        let placed = shown.iter().filter(|a| a.placement.is_committed()).count();
        writeln!(out, "{placed} of {} employee(s) placed.", shown.len())
    }

    /// Render to stdout, narrowing columns to the terminal width.
    pub fn print(&self) {
        let fitted = PlanReport {
            printer: self.printer.clone().with_terminal_width(),
            ..*self
        };
        let mut stdout = std::io::stdout();
        let _ = fitted.render(&mut stdout);
    }
}

fn row(a: &Assignment) -> Vec<String> {
    let (start, end, note) = match &a.placement {
        Placement::Committed { days, origin, .. } => {
            let note = match origin {
                StartOrigin::Default => "",
                StartOrigin::Forced => "forced start",
                StartOrigin::ForcedAbandoned => "forced start abandoned",
            };
            (
                days.first().map(|d| d.to_string()),
                days.last().map(|d| d.to_string()),
                note.to_string(),
            )
        }
        Placement::Unassigned { reason, .. } => (None, None, reason.describe().to_string()),
    };
    vec![
        a.name.clone(),
        a.area.clone(),
        a.entitled_days.to_string(),
        start.unwrap_or_else(|| "-".to_string()),
        end.unwrap_or_else(|| "-".to_string()),
        note,
    ]
}
