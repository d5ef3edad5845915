//! `payroll remove`: delete a stored employee.

use std::io::IsTerminal as _;

use tracing::instrument;

use crate::{
    cli::{GlobalArgs, RemoveArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(
    args: RemoveArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::open_service(&global, &config)?;
    let employee = service.get(args.id)?;

    if !args.yes && !confirm(&format!("Remove {} (id {})?", employee.full_name(), args.id))? {
        return Err(CliError::Cancelled);
    }

    let removed = service.dismiss(args.id)?;
    output.success(&format!("Removed {} (id {})", removed.full_name(), args.id))?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm(prompt: &str) -> CliResult<bool> {
    if !std::io::stdin().is_terminal() {
        return read_answer(prompt, std::io::stdin().lock());
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e.into(),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(prompt: &str) -> CliResult<bool> {
    read_answer(prompt, std::io::stdin().lock())
}

/// Line-based fallback: only `y` or `yes` confirms.
fn read_answer(prompt: &str, mut input: impl std::io::BufRead) -> CliResult<bool> {
    use std::io::Write;

    if std::io::stderr().is_terminal() {
        eprint!("{prompt} [y/N] ");
        std::io::stderr()
            .flush()
            .with_cli_context(|| "failed to flush prompt")?;
    }

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .with_cli_context(|| "failed to read confirmation input")?;

    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
