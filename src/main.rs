use anyhow::{Context, Result};
use vacaplan::core::cli::{CliOptions, USAGE};
use vacaplan::core::context::AppContext;
use vacaplan::core::models::AllocationRequest;
use vacaplan::core::persist::save_assignments;
use vacaplan::core::roster::load_roster;
use vacaplan::logging::LogTarget;
use vacaplan::scheduler::PlanManager;
use vacaplan::ui::report::PlanReport;

fn main() {
    let opts = match CliOptions::from_env() {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("ERROR: {err}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    if opts.help {
        println!("{USAGE}");
        return;
    }

    let ctx = match AppContext::from_options(&opts) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&ctx, &opts) {
        ctx.logger
            .error(format!("{err:#}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
}

fn run(ctx: &AppContext, opts: &CliOptions) -> Result<()> {
    let employees = load_roster(&opts.roster_path)?;
    let mut request = AllocationRequest::new(employees)
        .with_context(|| format!("Invalid roster {}", opts.roster_path.display()))?
        .with_start_date(opts.start_date);

    let manager = PlanManager::new(ctx);
    manager.apply_forced_starts(&mut request, &opts.forced);
    let plan = manager.compute_plan(request, &opts.blocked);

    PlanReport::new(&plan)
        .with_area_filter(opts.area_filter.as_deref())
        .print();

    if let Some(path) = &opts.output_path {
        let written = save_assignments(plan.search_base, &plan.assignments, path)
            .with_context(|| format!("Failed to write results to {}", path.display()))?;
        ctx.logger.info(
            format!("Results written to {}", written.display()),
            LogTarget::ConsoleAndFile,
        );
    }

    if let Some(log) = ctx.logger.log_path() {
        ctx.logger
            .info(format!("Run log: {}", log.display()), LogTarget::ConsoleOnly);
    }
    Ok(())
}
