//! Command handlers.
//!
//! Each handler translates parsed arguments into service calls and renders
//! the result.  No field rules live here.

pub mod add;
pub mod audit;
pub mod check;
pub mod completions;
pub mod config;
pub mod list;
pub mod remove;
pub mod seed;
pub mod show;
pub mod update;

use std::path::PathBuf;

use tracing::debug;

use payroll_adapters::JsonFileRepository;
use payroll_core::application::{EmployeeChanges, EmployeeService, NewEmployee};

use crate::{
    cli::{EmployeeFields, GlobalArgs},
    config::AppConfig,
    error::CliResult,
};

/// Data file to use: `--data-file` wins over `storage.data_file`.
pub fn data_file(global: &GlobalArgs, config: &AppConfig) -> PathBuf {
    global
        .data_file
        .clone()
        .unwrap_or_else(|| config.storage.data_file.clone())
}

/// Build the employee service over the JSON data file.
pub fn open_service(global: &GlobalArgs, config: &AppConfig) -> CliResult<EmployeeService> {
    let path = data_file(global, config);
    debug!(path = %path.display(), "Opening employee store");
    let repository = JsonFileRepository::open(&path)?;
    Ok(EmployeeService::new(Box::new(repository)))
}

impl From<EmployeeFields> for NewEmployee {
    /// Missing job years default to zero.
    fn from(fields: EmployeeFields) -> Self {
        NewEmployee {
            first_name: fields.first_name,
            last_name: fields.last_name,
            description: fields.description,
            job_years: fields.job_years.unwrap_or_default(),
            job_title: fields.job_title,
            email: fields.email,
        }
    }
}

impl From<EmployeeFields> for EmployeeChanges {
    fn from(fields: EmployeeFields) -> Self {
        EmployeeChanges {
            first_name: fields.first_name,
            last_name: fields.last_name,
            description: fields.description,
            job_years: fields.job_years,
            job_title: fields.job_title,
            email: fields.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn global(data_file: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            data_file,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn data_file_flag_overrides_config() {
        let config = AppConfig::default();
        assert_eq!(data_file(&global(None), &config), config.storage.data_file);
        assert_eq!(
            data_file(&global(Some("staff.json".into())), &config),
            PathBuf::from("staff.json")
        );
    }

    #[test]
    fn fields_map_to_requests() {
        let fields = EmployeeFields {
            first_name: Some("Frodo".into()),
            job_years: None,
            ..Default::default()
        };

        let hire = NewEmployee::from(fields.clone());
        assert_eq!(hire.first_name.as_deref(), Some("Frodo"));
        assert_eq!(hire.job_years, 0);

        let changes = EmployeeChanges::from(fields);
        assert_eq!(changes.job_years, None);
        assert!(!changes.is_empty());
        assert!(EmployeeChanges::from(EmployeeFields::default()).is_empty());
    }
}
