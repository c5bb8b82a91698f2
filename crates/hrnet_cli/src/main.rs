//! HRnet command-line entry point.
//!
//! # Responsibility
//! - Wire configuration, logging, storage and the core store together.
//! - Map subcommands onto the create, list and route views.

mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, CreateArgs, ListArgs};
use hrnet_core::db::open_db;
use hrnet_core::{
    default_log_level, init_logging, CreateEmployeeForm, DateLocale, EmployeeField,
    EmployeeListView, EmployeeStore, KvRepository, ListControls, SortConfig, SqliteKvRepository,
    View,
};
use log::info;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = absolute(log_dir)?;
        init_logging(level, &log_dir.to_string_lossy()).context("failed to initialize logging")?;
    }

    let locale = match cli.locale.as_deref() {
        Some(tag) => DateLocale::from_tag(tag).unwrap_or_default(),
        None => DateLocale::from_env(),
    };

    match cli.command {
        Command::States => print!("{}", render::states()),
        Command::Departments => print!("{}", render::departments()),
        Command::Create(args) => {
            let conn = open_db(&cli.db)
                .with_context(|| format!("failed to open `{}`", cli.db.display()))?;
            let mut store = EmployeeStore::load(SqliteKvRepository::new(&conn));
            create(&mut store, args, locale)?;
        }
        Command::List(args) => {
            let conn = open_db(&cli.db)
                .with_context(|| format!("failed to open `{}`", cli.db.display()))?;
            let store = EmployeeStore::load(SqliteKvRepository::new(&conn));
            list(&store, args, locale);
        }
        Command::Open { path } => {
            let view = View::resolve(&path);
            info!("event=route_resolve module=cli status=ok view={view:?}");
            match view {
                View::CreateEmployee => print!("{}", render::create_form()),
                View::EmployeeList => {
                    let conn = open_db(&cli.db)
                        .with_context(|| format!("failed to open `{}`", cli.db.display()))?;
                    let store = EmployeeStore::load(SqliteKvRepository::new(&conn));
                    let mut list_view = EmployeeListView::new(locale);
                    let page = list_view.page(store.list_employees()).clone();
                    print!("{}", render::employee_table(&page, list_view.controls()));
                }
                View::NotFound => print!("{}", render::not_found(&path)),
            }
        }
    }

    Ok(())
}

fn create<S: KvRepository>(
    store: &mut EmployeeStore<S>,
    args: CreateArgs,
    locale: DateLocale,
) -> Result<()> {
    let mut form = CreateEmployeeForm::new();
    form.set_text(EmployeeField::FirstName, args.first_name)?;
    form.set_text(EmployeeField::LastName, args.last_name)?;
    form.set_date(EmployeeField::DateOfBirth, Some(args.date_of_birth))?;
    form.set_date(EmployeeField::StartDate, Some(args.start_date))?;
    form.set_text(EmployeeField::Street, args.street)?;
    form.set_text(EmployeeField::City, args.city)?;
    form.select_state(&args.state)?;
    form.set_text(EmployeeField::ZipCode, args.zip_code)?;
    form.select_department(args.department);

    let submitted = form.draft().clone();
    let id = form.submit(store)?;
    print!("{}", render::confirmation(id, &submitted, locale));
    println!("total={}", store.len());
    Ok(())
}

fn list<S: KvRepository>(store: &EmployeeStore<S>, args: ListArgs, locale: DateLocale) {
    let mut controls = ListControls {
        search_term: args.search,
        sort: args.sort.map(if args.desc {
            SortConfig::descending
        } else {
            SortConfig::ascending
        }),
        current_page: args.page,
        ..ListControls::default()
    };
    controls.set_entries_per_page(args.entries);

    let mut view = EmployeeListView::with_controls(controls, locale);
    let page = view.page(store.list_employees()).clone();
    print!("{}", render::employee_table(&page, view.controls()));
}

fn absolute(path: &Path) -> Result<std::path::PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(cwd.join(path))
}
