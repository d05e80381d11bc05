//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `person_search` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All request building is implemented in the library crate.

use std::collections::BTreeMap;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};

use person_search::config::{BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use person_search::{
    categorize_http_error, init_client, init_logger, AdvancedQuery, Clause, Config, HttpClient,
    HttpError, HttpResponse, LogFormat, LogLevel, LookupApi, Mode, OpsApi, RawRecord, SearchApi,
    SearchParams, SearchResults, SortDirection, FIELD_VALUES, OPERATOR_VALUES, RESULT_HEADERS,
};

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Basic search
/// person_search basic last_nme=Smith
///
/// # Advanced search: any name starting with "Sky" AND last name exactly "Little"
/// person_search advanced --clause ANY_NME:startswith:Sky --clause last_nme:exact:Little --mode all
///
/// # Against a deployed API
/// PERSON_SEARCH_API_URL=https://search.example.org/api person_search health
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "person_search",
    about = "Searches people and companies through the person search API."
)]
struct Cli {
    /// Base URL of the search API
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Basic search: GET /person/search with KEY=VALUE query parameters
    Basic {
        /// Search parameters, e.g. `query=Smith` or `last_nme=Smith`
        #[arg(value_name = "KEY=VALUE", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },
    /// Advanced search: GET /person/search/?<query>
    Advanced {
        /// Pre-encoded query string, sent verbatim
        #[arg(long, conflicts_with_all = ["clauses", "mode", "sort_type", "sort_value", "page"])]
        query: Option<String>,

        /// Search clause; may be repeated
        #[arg(long = "clause", value_name = "FIELD:OPERATOR:VALUE")]
        clauses: Vec<Clause>,

        /// Combine clauses with AND (all) or OR (any)
        #[arg(long, value_enum)]
        mode: Option<Mode>,

        /// Sort direction (`desc` is sent as `sort_type=dsc`)
        #[arg(long, value_enum, requires = "sort_value")]
        sort_type: Option<SortDirection>,

        /// Lower-case column key to sort by, e.g. `last_nme`
        #[arg(long, requires = "sort_type")]
        sort_value: Option<String>,

        /// Results page
        #[arg(long)]
        page: Option<u32>,
    },
    /// Looks up one person by corporation party ID
    Person {
        /// Corporation party ID
        id: i64,
    },
    /// Lists the offices held by a person
    Offices {
        /// Corporation party ID
        id: i64,
    },
    /// Looks up one corporation by incorporation number
    Corporation {
        /// Incorporation or organization number, e.g. `BC0123456`
        corp_num: String,
    },
    /// Searches corporations by number or name
    CorpSearch {
        /// Corporation number or part of the company name
        query: String,

        /// Results page
        #[arg(long)]
        page: Option<u32>,
    },
    /// Prints the search field, operator and result column tables
    Tables {
        #[arg(long, value_enum, default_value_t = TablesFormat::Plain)]
        format: TablesFormat,
    },
    /// Calls the readiness and health probes
    Health,
}

#[derive(Debug, Clone, ValueEnum)]
enum TablesFormat {
    Plain,
    Json,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}

/// Turns a client failure into a reportable error, keeping its category.
fn report(operation: &str, error: HttpError) -> anyhow::Error {
    let category = categorize_http_error(&error);
    anyhow::Error::new(error).context(format!("{operation} failed ({category})"))
}

fn print_results(response: HttpResponse) {
    match response.json::<SearchResults>() {
        Ok(results) => {
            match results.total {
                Some(total) => info!("{} of {} result(s)", results.results.len(), total),
                None => info!("{} result(s)", results.results.len()),
            }
            print!("{}", results.to_tsv());
        }
        Err(e) => {
            warn!("Response is not a result list ({e}); printing raw body");
            println!("{}", response.body);
        }
    }
}

fn print_record(what: &str, record: Option<RawRecord>) -> Result<()> {
    match record {
        Some(record) => println!(
            "{}",
            serde_json::to_string_pretty(&record).context("Failed to serialize record")?
        ),
        None => warn!("No {what} found"),
    }
    Ok(())
}

fn print_tables(format: TablesFormat) -> Result<()> {
    match format {
        TablesFormat::Json => {
            let tables = serde_json::json!({
                "field_values": FIELD_VALUES,
                "operator_values": OPERATOR_VALUES,
                "result_headers": RESULT_HEADERS,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&tables).context("Failed to serialize tables")?
            );
        }
        TablesFormat::Plain => {
            println!("Fields:");
            for field in FIELD_VALUES {
                println!("  {:<14} {}", field.value, field.text);
            }
            println!("Operators:");
            for operator in OPERATOR_VALUES {
                println!("  {:<14} {}", operator.value, operator.text);
            }
            println!("Result columns:");
            for column in RESULT_HEADERS {
                println!(
                    "  {:<14} {:<22} sortable={} align={}",
                    column.value, column.text, column.sortable, column.align
                );
            }
        }
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let client = || -> Result<Arc<dyn HttpClient>> {
        let client: Arc<dyn HttpClient> =
            init_client(&config).context("Failed to initialize HTTP client")?;
        Ok(client)
    };

    match cli.command {
        Command::Tables { format } => print_tables(format)?,
        Command::Basic { params } => {
            let api = SearchApi::new(client()?);
            let params: SearchParams = params.into_iter().collect::<BTreeMap<_, _>>();
            let response = api
                .basic_search(&params)
                .await
                .map_err(|e| report("Basic search", e))?;
            print_results(response);
        }
        Command::Advanced {
            query,
            clauses,
            mode,
            sort_type,
            sort_value,
            page,
        } => {
            let api = SearchApi::new(client()?);
            let query = match query {
                Some(raw) => raw,
                None => {
                    let mut built = clauses
                        .into_iter()
                        .fold(AdvancedQuery::new(), AdvancedQuery::push);
                    if let Some(mode) = mode {
                        built = built.mode(mode);
                    }
                    if let (Some(direction), Some(column)) = (sort_type, sort_value) {
                        built = built.sort(direction, column);
                    }
                    if let Some(page) = page {
                        built = built.page(page);
                    }
                    built.to_query_string()
                }
            };
            let response = api
                .advanced_search(&query)
                .await
                .map_err(|e| report("Advanced search", e))?;
            print_results(response);
        }
        Command::Person { id } => {
            let lookup = LookupApi::new(client()?);
            let record = lookup.person(id).await.map_err(|e| report("Person lookup", e))?;
            print_record("person", record)?;
        }
        Command::Offices { id } => {
            let lookup = LookupApi::new(client()?);
            let offices = lookup
                .offices_held(id)
                .await
                .map_err(|e| report("Offices lookup", e))?;
            info!("{} office(s)", offices.results.len());
            for office in offices.results {
                println!(
                    "{}\t{}\t{}",
                    office.officer_typ_cd.unwrap_or_default(),
                    office.short_desc.unwrap_or_default(),
                    office.appointment_dt.unwrap_or_default()
                );
            }
        }
        Command::Corporation { corp_num } => {
            let lookup = LookupApi::new(client()?);
            let record = lookup
                .corporation(&corp_num)
                .await
                .map_err(|e| report("Corporation lookup", e))?;
            print_record("corporation", record)?;
        }
        Command::CorpSearch { query, page } => {
            let lookup = LookupApi::new(client()?);
            let found = lookup
                .corporation_search(&query, page)
                .await
                .map_err(|e| report("Corporation search", e))?;
            info!("{} corporation(s)", found.results.len());
            for corp in found.results {
                println!(
                    "{}\t{}\t{}",
                    corp.corp_num.unwrap_or_default(),
                    corp.corp_nme.unwrap_or_default(),
                    corp.state_typ_cd.unwrap_or_default()
                );
            }
        }
        Command::Health => {
            let ops = OpsApi::new(client()?);
            let ready = ops.readyz().await.map_err(|e| report("Readiness check", e))?;
            println!("readyz: {}", ready.message);
            let health = ops.healthz().await.map_err(|e| report("Health check", e))?;
            println!("healthz: {}", health.message);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load PERSON_SEARCH_API_URL from .env (current directory first, then
    // next to the executable)
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger(&cli.config()).context("Failed to initialize logger")?;

    if let Err(e) = run(cli).await {
        eprintln!("person_search error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
