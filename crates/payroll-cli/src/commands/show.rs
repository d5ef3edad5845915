//! `payroll show`: print one employee.

use crate::{
    cli::{GlobalArgs, ShowArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, render_detail},
};

pub fn execute(
    args: ShowArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::open_service(&global, &config)?;
    let employee = service.get(args.id)?;

    if args.json {
        let json = serde_json::to_string_pretty(&employee).map_err(|e| CliError::IoError {
            message: format!("Failed to encode employee {}: {e}", args.id),
            source: e.into(),
        })?;
        output.data(&json)?;
    } else {
        output.header(&employee.full_name())?;
        output.print(render_detail(&employee).trim_end())?;
    }
    Ok(())
}
