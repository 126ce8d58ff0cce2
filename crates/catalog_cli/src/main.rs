//! Catalog CLI.
//!
//! # Responsibility
//! - Wire config, logging and the SQLite store for both catalogs.
//! - Seed both catalogs, then answer one `list`/`get` command as JSON.

mod settings;

use catalog_core::db::open_db;
use catalog_core::{
    init_logging, CatalogRepository, CatalogService, CategoryOf, Filter, ListRequest,
    RaceRepository, SortSpec, SportsRepository,
};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::error::Error;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Mutex;

use crate::settings::CliConfig;

#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "Query the race and sports catalogs")]
struct Cli {
    #[command(subcommand)]
    catalog: CatalogArg,
}

#[derive(Debug, Subcommand)]
enum CatalogArg {
    /// Races grouped by meeting id.
    Races {
        #[command(subcommand)]
        command: Command,
    },
    /// Sports events grouped by sport name.
    Events {
        #[command(subcommand)]
        command: Command,
    },
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List records, optionally filtered and sorted.
    List {
        /// Category to include (meeting id or sport name); repeatable.
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Only show visible records.
        #[arg(long)]
        only_visible: bool,
        /// Sort key as `column` or `column:desc`; repeatable, applied in order.
        #[arg(long = "sort")]
        sort: Vec<String>,
    },
    /// Get one record by id.
    Get { id: i64 },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = CliConfig::load()?;
    init_logging(&config.log_level, &config.log_dir()?)?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        catalog_core::core_version()
    );

    let conn = Mutex::new(open_db(&config.db_path)?);
    let races = CatalogService::new(RaceRepository::new(&conn));
    let sports = CatalogService::new(SportsRepository::new(&conn));
    races.init()?;
    sports.init()?;

    let output = match cli.catalog {
        CatalogArg::Races { command } => execute(&races, command)?,
        CatalogArg::Events { command } => execute(&sports, command)?,
    };
    println!("{output}");
    Ok(())
}

fn execute<R>(service: &CatalogService<R>, command: Command) -> Result<String, Box<dyn Error>>
where
    R: CatalogRepository,
    CategoryOf<R>: FromStr + Serialize,
    <CategoryOf<R> as FromStr>::Err: Error + 'static,
{
    match command {
        Command::List {
            categories,
            only_visible,
            sort,
        } => {
            let request = build_request::<CategoryOf<R>>(&categories, only_visible, &sort)?;
            let response = service.list_records(&request)?;
            Ok(serde_json::to_string_pretty(&response)?)
        }
        Command::Get { id } => {
            let record = service.get_record(id)?;
            Ok(serde_json::to_string_pretty(&record)?)
        }
    }
}

fn build_request<C>(
    categories: &[String],
    only_visible: bool,
    sort: &[String],
) -> Result<ListRequest<C>, Box<dyn Error>>
where
    C: FromStr,
    C::Err: Error + 'static,
{
    let category_ids = categories
        .iter()
        .map(|value| value.trim().parse::<C>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut request = ListRequest {
        filter: None,
        sort: sort.iter().map(|key| parse_sort_key(key)).collect(),
    };
    if !category_ids.is_empty() || only_visible {
        request.filter = Some(Filter {
            category_ids,
            only_visible,
        });
    }
    Ok(request)
}

/// `column` or `column:asc|desc`. Column validation happens in the core.
fn parse_sort_key(key: &str) -> SortSpec {
    match key.rsplit_once(':') {
        Some((column, direction)) if direction.eq_ignore_ascii_case("desc") => {
            SortSpec::descending(column)
        }
        Some((column, direction)) if direction.eq_ignore_ascii_case("asc") => {
            SortSpec::ascending(column)
        }
        _ => SortSpec::ascending(key),
    }
}
