//! Lists CRM leads from the REST backend through a live list view.
//!
//! Usage: `list_leads [search] [page]`

use std::env;
use std::path::Path;

use dotenvy::dotenv;

use pushkind_listview::LEADS_RESOURCE;
use pushkind_listview::domain::lead::Lead;
use pushkind_listview::domain::query::QueryStateUpdate;
use pushkind_listview::models::config::ListViewConfig;
use pushkind_listview::repository::FetchError;
use pushkind_listview::repository::http::HttpListReader;
use pushkind_listview::services::list_view::ListView;
use pushkind_listview::services::request::QueryRequest;
use pushkind_listview::services::response::QueryResponse;

fn parse_args(args: &[String]) -> Result<QueryStateUpdate, String> {
    let mut update = QueryStateUpdate::new();

    if let Some(search) = args.first() {
        update = update.search(search.as_str());
    }

    if let Some(page) = args.get(1) {
        let page = page
            .parse::<u32>()
            .map_err(|_| format!("invalid page number: {page}"))?;
        update = update.page(page);
    }

    Ok(update)
}

fn print_leads(view: &ListView<Lead, HttpListReader<Lead>>) {
    let Some(envelope) = view.response().response() else {
        println!("No leads loaded");
        return;
    };

    for lead in &envelope.data {
        println!(
            "{:>6}  {:<32}  {:<28}  {:<12}  {}",
            lead.id.map(|id| id.to_string()).unwrap_or_default(),
            lead.name,
            lead.email.as_deref().unwrap_or("-"),
            lead.status.as_deref().unwrap_or("-"),
            lead.assigned_to.as_deref().unwrap_or("-"),
        );
    }

    if let Some(meta) = &envelope.pagination {
        let pager = meta
            .links
            .iter()
            .map(|link| {
                if link.active {
                    format!("[{}]", link.label)
                } else {
                    link.label.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "page {} of {} ({} records)  {pager}",
            meta.page,
            meta.total_pages.map(|p| p.to_string()).unwrap_or_else(|| "?".into()),
            meta.total_records.map(|r| r.to_string()).unwrap_or_else(|| "?".into()),
        );
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match ListViewConfig::load(Path::new("config"), &app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading list view config: {err}");
            std::process::exit(1);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let update = match parse_args(&args) {
        Ok(update) => update,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let initial = match config.initial_state() {
        Ok(state) => state,
        Err(err) => {
            log::error!("Invalid list defaults: {err}");
            std::process::exit(1);
        }
    };

    let reader = match HttpListReader::<Lead>::new(&config, LEADS_RESOURCE) {
        Ok(reader) => reader,
        Err(err) => {
            log::error!("Failed to build HTTP client: {err}");
            std::process::exit(1);
        }
    };
    log::info!("Listing leads from {}", reader.url());

    let view = ListView::with_state(initial, reader);

    if let Err(err) = view.request().update_state(update) {
        log::error!("{err}");
        std::process::exit(1);
    }

    if let Err(err) = view.refetch().await {
        log::error!("{err}");
        let last_error = view.response().last_error();
        if let Some(errors) = last_error.as_ref().and_then(FetchError::field_errors) {
            for (field, messages) in errors {
                log::error!("{field}: {}", messages.join(", "));
            }
        }
        std::process::exit(1);
    }

    print_leads(&view);
}
