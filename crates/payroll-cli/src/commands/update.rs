//! `payroll update`: change attributes of a stored employee.

use tracing::instrument;

use payroll_core::application::EmployeeChanges;

use crate::{
    cli::{GlobalArgs, UpdateArgs},
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, render_detail},
};

#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(
    args: UpdateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::open_service(&global, &config)?;
    let changes = EmployeeChanges::from(args.fields);
    let employee = service.update(args.id, &changes)?;

    output.success(&format!("Updated {} (id {})", employee.full_name(), args.id))?;
    output.print(render_detail(&employee).trim_end())?;
    Ok(())
}
