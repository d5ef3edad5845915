//! `payroll audit`: re-validate every stored employee.

use crate::{
    cli::{AuditArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: AuditArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::open_service(&global, &config)?;
    let total = service.list()?.len();
    let findings: Vec<_> = service
        .audit()?
        .into_iter()
        .filter(|finding| args.field.is_none_or(|field| finding.error.field() == field))
        .collect();

    if findings.is_empty() {
        match args.field {
            Some(field) => output.success(&format!(
                "No employee record among {total} breaks the {field} rule"
            ))?,
            None => output.success(&format!("All {total} employee record(s) are valid"))?,
        }
        return Ok(());
    }

    for finding in &findings {
        let id = finding
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unassigned".into());
        output.warning(&format!("id {id}: {}", finding.error))?;
    }

    Err(CliError::ValidationFailed {
        count: findings.len(),
    })
}
