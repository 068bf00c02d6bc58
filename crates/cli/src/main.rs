use crate::{commands::InventoryCommand, env::EnvManager, error::CliError};
use clap::Parser;
use commands::Commands;
use connectors::{
    api::{RemoteProcedures, SalesStore, StagingStore},
    config::BackendConfig,
    rest::RestClient,
};
use engine::{
    catalog::{InventoryFilter, NewProduct},
    process::{ProcessingFlow, ProcessingState},
    replenishment::RestockOutcome,
    sales::SaleRequest,
};
use ingest::{mapping::ColumnMap, tokenizer::parse_csv};
use std::path::Path;
use tracing::Level;
use uuid::Uuid;

mod commands;
mod env;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "stockflow",
    version = "0.1.0",
    about = "Retail inventory and CSV ingestion tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let client = build_client()?;

    match cli.command {
        Commands::Ingest {
            file,
            mapping,
            source,
            notes,
            default_brand,
            password,
            process,
        } => {
            if !client.verify_csv_password(&password).await? {
                return Err(CliError::PasswordRejected);
            }

            let csv_text = tokio::fs::read_to_string(&file).await?;
            let mapping_text = tokio::fs::read_to_string(&mapping).await?;

            let mut map = ColumnMap::from_json(&mapping_text)?;
            if let Some(brand) = default_brand {
                map = map.with_default_brand(brand);
            }

            let records = map.map_rows(&parse_csv(&csv_text));
            let notes = notes.unwrap_or_else(|| file_name(&file));
            let upload =
                engine::upload::stage_upload(&client, &source, Some(notes.as_str()), &records)
                    .await?;
            println!("Run {} staged with {} rows.", upload.run.id, upload.staged);

            if process {
                run_processing(&client, &upload.run.id.to_string(), None).await?;
            }
        }
        Commands::Process { run, tenant } => {
            run_processing(&client, &run, tenant).await?;
        }
        Commands::Status { run, items, json } => {
            let run_id = parse_run_id(&run)?;
            let run = client.fetch_run(run_id).await?;
            output::print_run(&run, json)?;
            if items {
                let staged = client.run_items(run_id).await?;
                output::print_items(&staged);
            }
        }
        Commands::Inventory { command } => match command {
            InventoryCommand::List {
                search,
                size,
                color,
                zone,
                gender,
                low_stock,
                json,
            } => {
                let filter = InventoryFilter {
                    search,
                    sizes: size,
                    colors: color,
                    zone,
                    gender,
                    low_stock_only: low_stock,
                };
                let rows = engine::catalog::list_products(&client, &filter).await?;
                output::print_inventory(&rows, json)?;
            }
            InventoryCommand::Add {
                sku,
                name,
                size,
                color,
                gender,
                brand,
                category,
                price,
                stock_sala,
                stock_almacen,
                location,
                zone,
            } => {
                let product = NewProduct {
                    sku,
                    name,
                    size,
                    color,
                    gender,
                    brand,
                    category,
                    price,
                    stock_sala,
                    stock_almacen,
                    location,
                    zone,
                };
                let row = engine::catalog::add_product(&client, product).await?;
                println!("Added '{}' as {}.", row.name, row.id);
            }
            InventoryCommand::Remove { id } => {
                engine::catalog::remove_product(&client, id).await?;
                println!("Product {id} removed.");
            }
        },
        Commands::Sell { sku, quantity, pos } => {
            let request = SaleRequest {
                sku,
                quantity,
                point_of_sale_id: pos,
            };
            let outcome = engine::sales::register_sale(&client, &request).await?;
            if outcome.replenishment_generated {
                println!(
                    "Sale recorded; {} left in stock. Product queued for replenishment.",
                    outcome.remaining_stock
                );
            } else {
                println!("Sale recorded; {} left in stock.", outcome.remaining_stock);
            }
        }
        Commands::Sales { limit, json } => {
            let sales = client.recent_sales(limit).await?;
            output::print_sales(&sales, json)?;
        }
        Commands::Pos => {
            let points = client.points_of_sale().await?;
            output::print_points_of_sale(&points);
        }
        Commands::Pending { json } => {
            let products = engine::replenishment::pending_products(&client).await?;
            output::print_pending(&products, json)?;
        }
        Commands::Restock { id } => {
            match engine::replenishment::mark_restocked(&client, id).await? {
                RestockOutcome::Restocked { remaining_needed } => {
                    println!("Restocked one unit; {remaining_needed} still owed to the floor.");
                }
                RestockOutcome::NoWarehouseStock => {
                    println!("No warehouse stock available for {id}; nothing moved.");
                }
            }
        }
    }

    Ok(())
}

fn build_client() -> Result<RestClient, CliError> {
    let mut env = EnvManager::new();
    if Path::new(".env").exists() {
        env.load_from_file(".env")?;
    }
    let config = BackendConfig::from_env_map(env.all())?;
    Ok(RestClient::new(&config)?)
}

async fn run_processing(
    client: &RestClient,
    run: &str,
    tenant: Option<Uuid>,
) -> Result<(), CliError> {
    let mut flow = ProcessingFlow::new(run, tenant);
    match flow.execute(client).await {
        ProcessingState::Success(outcome) => {
            output::print_outcome(outcome);
            Ok(())
        }
        ProcessingState::Error(message) => Err(CliError::ProcessingFailed(message.clone())),
        // `execute` always drives the flow to a terminal state.
        other => Err(CliError::ProcessingFailed(format!(
            "flow stopped in a non-terminal state: {other:?}"
        ))),
    }
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

fn parse_run_id(run: &str) -> Result<Uuid, CliError> {
    Uuid::parse_str(run.trim()).map_err(|_| CliError::InvalidRunId(run.to_string()))
}
