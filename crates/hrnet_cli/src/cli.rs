//! Command-line surface and runtime configuration.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use hrnet_core::{Department, EmployeeField, DEFAULT_ENTRIES_PER_PAGE};
use std::path::PathBuf;

pub const DEFAULT_DB_FILE: &str = "hrnet.sqlite3";

#[derive(Parser, Debug)]
#[command(name = "hrnet", author, version, about = "HRnet employee records", long_about = None)]
pub struct Cli {
    /// SQLite file backing local storage.
    #[arg(long, global = true, env = "HRNET_DB", default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,

    /// Directory for rolling log files; logging is off when unset.
    #[arg(long, global = true, env = "HRNET_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error; defaults by build mode.
    #[arg(long, global = true, env = "HRNET_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Locale tag for date display (e.g. en_US, fr_FR); defaults to the host locale.
    #[arg(long, global = true, env = "HRNET_LOCALE")]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new employee record.
    Create(CreateArgs),
    /// Show the employee table.
    List(ListArgs),
    /// Resolve a route path and render its view.
    Open {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Print the state dropdown options.
    States,
    /// Print the department dropdown options.
    Departments,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date_of_birth: NaiveDate,
    /// YYYY-MM-DD
    #[arg(long)]
    pub start_date: NaiveDate,
    #[arg(long)]
    pub street: String,
    #[arg(long)]
    pub city: String,
    /// Two-letter state code.
    #[arg(long)]
    pub state: String,
    #[arg(long)]
    pub zip_code: String,
    #[arg(long, default_value_t = Department::Sales)]
    pub department: Department,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive substring matched against every column.
    #[arg(long, default_value = "")]
    pub search: String,
    /// Column key to sort by (firstName, lastName, startDate, ...).
    #[arg(long)]
    pub sort: Option<EmployeeField>,
    /// Sort descending instead of ascending.
    #[arg(long, requires = "sort")]
    pub desc: bool,
    #[arg(long, default_value_t = DEFAULT_ENTRIES_PER_PAGE)]
    pub entries: usize,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};
    use hrnet_core::{Department, EmployeeField};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_parses_sort_key_and_direction() {
        let cli = Cli::try_parse_from([
            "hrnet", "list", "--sort", "lastName", "--desc", "--entries", "25",
        ])
        .unwrap();
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.sort, Some(EmployeeField::LastName));
                assert!(args.desc);
                assert_eq!(args.entries, 25);
                assert_eq!(args.page, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn create_parses_dates_and_department() {
        let cli = Cli::try_parse_from([
            "hrnet",
            "create",
            "--first-name",
            "Ann",
            "--last-name",
            "Lee",
            "--date-of-birth",
            "1990-04-01",
            "--start-date",
            "2024-02-01",
            "--street",
            "9 Pine",
            "--city",
            "Miami",
            "--state",
            "FL",
            "--zip-code",
            "33101",
            "--department",
            "human resources",
        ])
        .unwrap();
        match cli.command {
            Command::Create(args) => {
                assert_eq!(args.department, Department::HumanResources);
                assert_eq!(args.date_of_birth.to_string(), "1990-04-01");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        assert!(Cli::try_parse_from(["hrnet", "list", "--sort", "salary"]).is_err());
    }
}
