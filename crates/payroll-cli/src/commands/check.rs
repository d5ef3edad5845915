//! `payroll check`: run the field rules without touching the store.

use payroll_core::domain::{BasicEmployee, Employee};

use crate::{cli::CheckArgs, error::CliResult, output::OutputManager};

pub fn execute(args: CheckArgs, output: OutputManager) -> CliResult<()> {
    let fields = args.fields;
    let job_years = fields.job_years.unwrap_or_default();

    if args.basic {
        BasicEmployee::new(
            fields.first_name.as_deref(),
            fields.last_name.as_deref(),
            fields.description.as_deref(),
            job_years,
            fields.job_title.as_deref(),
        )?;
    } else {
        Employee::new(
            fields.first_name.as_deref(),
            fields.last_name.as_deref(),
            fields.description.as_deref(),
            job_years,
            fields.job_title.as_deref(),
            fields.email.as_deref(),
        )?;
    }

    output.success("All fields are valid")?;
    Ok(())
}
