//! `payroll list`: print stored employees.

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, render_csv, render_table},
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::open_service(&global, &config)?;
    let employees = service.list()?;

    match args.format.unwrap_or(config.output.list_format) {
        ListFormat::Table => {
            if employees.is_empty() {
                output.info("No employees stored. Try: payroll seed")?;
                return Ok(());
            }
            output.header(&format!("Employees ({})", employees.len()))?;
            output.print(render_table(&employees).trim_end())?;
        }
        // JSON and CSV go straight to stdout so they stay parseable in pipes
        // and under --quiet.
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&employees).map_err(|e| CliError::IoError {
                message: format!("Failed to encode employees: {e}"),
                source: e.into(),
            })?;
            output.data(&json)?;
        }
        ListFormat::Csv => {
            output.data(&render_csv(&employees))?;
        }
    }

    Ok(())
}
