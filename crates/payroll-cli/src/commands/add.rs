//! `payroll add`: validate and store a new employee.

use tracing::instrument;

use crate::{
    cli::{AddArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, render_detail},
};

#[instrument(skip_all)]
pub fn execute(
    args: AddArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::open_service(&global, &config)?;
    let employee = service.hire(args.fields.into())?;

    output.success(&format!(
        "Added {} (id {})",
        employee.full_name(),
        employee.id().map(|id| id.to_string()).unwrap_or_default()
    ))?;
    output.print(render_detail(&employee).trim_end())?;
    Ok(())
}
