//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::{Alignment, Term, measure_text_width, pad_str};
use owo_colors::OwoColorize;

use payroll_core::domain::Employee;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Machine-readable data; never suppressed, never coloured.
    pub fn data(&self, content: &str) -> io::Result<()> {
        self.term.write_line(content.trim_end_matches('\n'))
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── Renderers ─────────────────────────────────────────────────────────────────

const COLUMNS: [&str; 7] = [
    "id",
    "firstName",
    "lastName",
    "description",
    "jobYears",
    "jobTitle",
    "email",
];

const ABSENT: &str = "-";

fn row(employee: &Employee) -> [String; 7] {
    let text = |value: Option<&str>| value.unwrap_or(ABSENT).to_owned();
    [
        employee
            .id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| ABSENT.into()),
        text(employee.first_name()),
        text(employee.last_name()),
        text(employee.description()),
        employee.job_years().to_string(),
        text(employee.job_title()),
        text(employee.email()),
    ]
}

/// Left-aligned table with a header row; absent values render as `-`.
pub fn render_table(employees: &[Employee]) -> String {
    let rows: Vec<[String; 7]> = employees.iter().map(row).collect();

    let mut widths = COLUMNS.map(measure_text_width);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let line = |cells: &[&str]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad_str(cell, width, Alignment::Left, None).into_owned())
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_owned()
    };

    let mut out = line(&COLUMNS);
    out.push('\n');
    for cells in &rows {
        let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
        out.push_str(&line(&cells));
        out.push('\n');
    }
    out
}

/// RFC 4180 style CSV with a header row; absent values are empty cells.
pub fn render_csv(employees: &[Employee]) -> String {
    let mut out = COLUMNS.join(",");
    out.push('\n');
    for employee in employees {
        let cells = [
            employee.id().map(|id| id.to_string()).unwrap_or_default(),
            csv_cell(employee.first_name()),
            csv_cell(employee.last_name()),
            csv_cell(employee.description()),
            employee.job_years().to_string(),
            csv_cell(employee.job_title()),
            csv_cell(employee.email()),
        ];
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

fn csv_cell(value: Option<&str>) -> String {
    let value = value.unwrap_or_default();
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

/// Labelled, one-attribute-per-line view of a single employee.
pub fn render_detail(employee: &Employee) -> String {
    let labels = [
        "Id",
        "First name",
        "Last name",
        "Description",
        "Job Years",
        "Job Title",
        "E-mail",
    ];
    let width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
    labels
        .iter()
        .zip(row(employee))
        .map(|(label, value)| format!("{:width$}  {}\n", label, value, width = width))
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use payroll_core::domain::EmployeeId;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            data_file: None,
            output_format: OutputFormat::Human,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn frodo() -> Employee {
        Employee::new(
            "Frodo",
            "Baggins",
            "ring bearer",
            5,
            "Hobbit",
            "frodo@shire.me",
        )
        .unwrap()
        .with_id(EmployeeId::new(1))
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.is_quiet());
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(make_manager(false, false).supports_color());
        assert!(!make_manager(false, true).supports_color());
    }

    #[test]
    fn plain_format_disables_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            data_file: None,
            output_format: OutputFormat::Plain,
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert_eq!(out.format(), OutputFormat::Plain);
        assert!(!out.supports_color());
    }

    #[test]
    fn table_aligns_columns() {
        let table = render_table(&[frodo(), Employee::empty()]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id  firstName"));
        assert!(lines[1].starts_with("1   Frodo"));
        assert!(lines[1].ends_with("frodo@shire.me"));
        assert!(lines[2].starts_with("-   -"));
    }

    #[test]
    fn csv_quotes_when_needed() {
        let mut employee = frodo();
        employee.set_description("ring bearer, reluctant").unwrap();
        let csv = render_csv(&[employee, Employee::empty()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "id,firstName,lastName,description,jobYears,jobTitle,email");
        assert_eq!(
            lines[1],
            "1,Frodo,Baggins,\"ring bearer, reluctant\",5,Hobbit,frodo@shire.me"
        );
        assert_eq!(lines[2], ",,,,0,,");
    }

    #[test]
    fn detail_lists_every_attribute() {
        let detail = render_detail(&frodo());
        assert_eq!(detail.lines().count(), 7);
        assert!(detail.contains("First name   Frodo"));
        assert!(detail.contains("E-mail       frodo@shire.me"));
    }
}
