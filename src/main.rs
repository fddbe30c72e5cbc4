use anyhow::{bail, Context, Result};
use crossterm::style::Stylize;
use std::path::PathBuf;

use hms_listview::config::Config;
use hms_listview::data::comparator::parse_sort_spec;
use hms_listview::data::data_source::{DataSource, JsonFileSource, RestSource};
use hms_listview::data::fetch::FetchOutcome;
use hms_listview::records::{
    controller_for, Appointment, EmergencyContact, Invoice, ListRecord, Prescription, Role, User,
    SCREENS,
};
use hms_listview::utils::logging::init_tracing;
use hms_listview::SearchMode;

mod table_display;

use table_display::{display_page, display_state};

#[derive(Debug, Default)]
struct Options {
    screen: String,
    source: String,
    search: Option<String>,
    filters: Vec<(String, String)>,
    sort: Option<String>,
    page: usize,
    page_size: Option<usize>,
    fuzzy: bool,
    config_path: Option<PathBuf>,
}

fn print_help() {
    println!("{}", "hms-listview - page through hospital records".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  hms-listview <SCREEN> <FILE.json|URL|api> [OPTIONS]");
    println!();
    println!("{}", "Screens:".yellow());
    println!("  {}", SCREENS.join(", "));
    println!();
    println!("{}", "Sources:".yellow());
    println!("  {}      - JSON array or {{\"data\": [...]}} file", "FILE.json".green());
    println!("  {}            - Full collection URL, fetched as given", "URL".green());
    println!("  {}            - Config base URL plus the screen's endpoint", "api".green());
    println!();
    println!("{}", "Options:".yellow());
    println!("  {}   - Case-insensitive search term", "--search <TERM>".green());
    println!("  {} - Exact-match filter, repeatable", "--filter <FIELD=VALUE>".green());
    println!("  {} - Sort key and direction", "--sort <KEY[:asc|desc]>".green());
    println!("  {}       - Page to show (default 1)", "--page <N>".green());
    println!("  {}  - Override the configured page size", "--page-size <N>".green());
    println!("  {}            - Fuzzy instead of substring search", "--fuzzy".green());
    println!("  {}   - Use a specific config file", "--config <PATH>".green());
    println!("  {}  - Write a commented default config and exit", "--generate-config".green());
    println!();
}

fn parse_args(args: Vec<String>) -> Result<Option<Options>> {
    let mut options = Options {
        page: 1,
        ..Options::default()
    };
    let mut positional = Vec::new();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .with_context(|| format!("{} expects a value", name))
        };
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--search" => options.search = Some(value("--search")?),
            "--filter" => {
                let raw = value("--filter")?;
                let (field, val) = raw
                    .split_once('=')
                    .with_context(|| format!("filter '{}' is not FIELD=VALUE", raw))?;
                options.filters.push((field.to_string(), val.to_string()));
            }
            "--sort" => options.sort = Some(value("--sort")?),
            "--page" => {
                options.page = value("--page")?
                    .parse()
                    .context("--page expects a number")?
            }
            "--page-size" => {
                options.page_size = Some(
                    value("--page-size")?
                        .parse()
                        .context("--page-size expects a number")?,
                )
            }
            "--config" => options.config_path = Some(PathBuf::from(value("--config")?)),
            "--fuzzy" => options.fuzzy = true,
            flag if flag.starts_with("--") => bail!("unknown option '{}'", flag),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    match (positional.next(), positional.next()) {
        (Some(screen), Some(source)) => {
            options.screen = screen;
            options.source = source;
            Ok(Some(options))
        }
        _ => Ok(None),
    }
}

fn generate_config() -> Result<()> {
    let path = Config::get_config_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, Config::create_default_with_comments())?;
    println!("Configuration file created at: {:?}", path);
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--generate-config") {
        return generate_config();
    }

    let Some(options) = parse_args(args)? else {
        print_help();
        return Ok(());
    };

    let mut config = match &options.config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("{}", format!("Using default config: {:#}", e).yellow());
            Config::default()
        }),
    };
    if options.fuzzy {
        config.list.search_mode = SearchMode::Fuzzy;
    }
    if let Some(size) = options.page_size {
        config
            .screens
            .entry(options.screen.clone())
            .or_default()
            .page_size = Some(size);
    }

    let _logs = init_tracing(&config.logging);

    match options.screen.as_str() {
        "prescriptions" => run::<Prescription>(&config, &options),
        "appointments" => run::<Appointment>(&config, &options),
        "invoices" => run::<Invoice>(&config, &options),
        "contacts" => run::<EmergencyContact>(&config, &options),
        "users" => run::<User>(&config, &options),
        "roles" => run::<Role>(&config, &options),
        other => bail!(
            "unknown screen '{}', expected one of: {}",
            other,
            SCREENS.join(", ")
        ),
    }
}

fn open_source<R: ListRecord>(config: &Config, location: &str) -> Result<Box<dyn DataSource<R>>> {
    if location == "api" {
        return Ok(Box::new(RestSource::<R>::from_config(
            &config.source,
            R::ENDPOINT,
        )?));
    }
    if location.starts_with("http://") || location.starts_with("https://") {
        return Ok(Box::new(RestSource::<R>::from_url(&config.source, location)?));
    }
    Ok(Box::new(JsonFileSource::<R>::new(location)))
}

fn run<R: ListRecord>(config: &Config, options: &Options) -> Result<()> {
    let mut controller = controller_for::<R>(config)
        .with_context(|| format!("building the {} screen", R::SCREEN))?;

    let source = open_source::<R>(config, &options.source)?;
    let ticket = controller.begin_fetch();
    if let FetchOutcome::Failed(err) = controller.complete_fetch(ticket, source.fetch()) {
        return Err(err).with_context(|| format!("fetching from {}", source.describe()));
    }

    if let Some(term) = &options.search {
        controller.set_search(term);
    }
    for (field, value) in &options.filters {
        if !controller.schema().is_filterable(field) {
            bail!(
                "'{}' is not filterable on {}, try one of: {}",
                field,
                R::SCREEN,
                controller.schema().filterable_names().join(", ")
            );
        }
        controller.set_filter(field, value);
    }
    if let Some(raw) = &options.sort {
        let (key, direction) = parse_sort_spec(raw)?;
        if !controller.schema().is_sortable(&key) {
            bail!(
                "'{}' is not sortable on {}, try one of: {}",
                key,
                R::SCREEN,
                controller.schema().sortable_names().join(", ")
            );
        }
        controller.set_sort(&key, direction);
    }
    controller.set_page(options.page);

    display_state(&controller);
    display_page(&controller.view());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_full_command_line() {
        let options = parse_args(args(&[
            "appointments",
            "data.json",
            "--search",
            "nguyễn",
            "--filter",
            "status=SCHEDULED",
            "--sort",
            "date:desc",
            "--page",
            "2",
            "--fuzzy",
        ]))
        .unwrap()
        .unwrap();

        assert_eq!(options.screen, "appointments");
        assert_eq!(options.source, "data.json");
        assert_eq!(options.search.as_deref(), Some("nguyễn"));
        assert_eq!(
            options.filters,
            vec![("status".to_string(), "SCHEDULED".to_string())]
        );
        assert_eq!(options.sort.as_deref(), Some("date:desc"));
        assert_eq!(options.page, 2);
        assert!(options.fuzzy);
    }

    #[test]
    fn test_missing_positional_shows_help() {
        assert!(parse_args(args(&["users"])).unwrap().is_none());
        assert!(parse_args(args(&["--help"])).unwrap().is_none());
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(args(&["users", "x.json", "--filter", "role"])).is_err());
        assert!(parse_args(args(&["users", "x.json", "--page"])).is_err());
        assert!(parse_args(args(&["users", "x.json", "--bogus"])).is_err());
    }
}
