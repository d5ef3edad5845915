//! `payroll seed`: load the sample employees.

use tracing::{info, instrument};

use payroll_adapters::seed;

use crate::{
    cli::{GlobalArgs, SeedArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: SeedArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::open_service(&global, &config)?;

    let existing = service.list()?.len();
    if existing > 0 && !args.force {
        output.warning(&format!(
            "{existing} employee(s) already stored; use --force to add the samples anyway"
        ))?;
        return Ok(());
    }

    let mut added = 0;
    for sample in seed::fellowship()? {
        let employee = service.hire(sample.into())?;
        output.print(&format!(
            "  {}  {}",
            employee.id().map(|id| id.to_string()).unwrap_or_default(),
            employee.full_name()
        ))?;
        added += 1;
    }

    info!(added, "Seeded sample employees");
    output.success(&format!("Added {added} sample employees"))?;
    Ok(())
}
